//! Host capabilities used by [`AuthClient`](super::AuthClient). Browsers reach
//! the page through `window.location` and `document.cookie`; native hosts have
//! neither, so [`Headless`] reports them as unsupported and hands URLs back to
//! the caller instead of navigating.

use super::error::Error;
use url::Url;

pub trait Environment {
    /// The URL of the current page.
    ///
    /// # Errors
    /// [`Error::UnsupportedEnvironment`] when the host has no page.
    fn current_url(&self) -> Result<Url, Error>;

    /// Sends the host to `url`. Returns `false` when the host cannot navigate
    /// and the caller is responsible for delivering the URL.
    ///
    /// # Errors
    /// Fails when the host rejects the navigation.
    fn navigate(&self, url: &str) -> Result<bool, Error>;

    /// The raw cookie string (`a=1; b=2`).
    ///
    /// # Errors
    /// [`Error::UnsupportedEnvironment`] when the host has no document.
    fn cookies(&self) -> Result<String, Error>;

    /// Writes a single cookie string.
    ///
    /// # Errors
    /// [`Error::UnsupportedEnvironment`] when the host has no document.
    fn set_cookie(&self, cookie: &str) -> Result<(), Error>;
}

/// Host without a browser page. A callback URL can be supplied so the one-time
/// code can still be read, e.g. from a server handling the redirect.
#[derive(Debug, Clone, Default)]
pub struct Headless {
    url: Option<Url>,
}

impl Headless {
    #[must_use]
    pub const fn new() -> Self {
        Self { url: None }
    }

    #[must_use]
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }
}

impl Environment for Headless {
    fn current_url(&self) -> Result<Url, Error> {
        self.url
            .clone()
            .ok_or(Error::UnsupportedEnvironment("window.location"))
    }

    fn navigate(&self, _url: &str) -> Result<bool, Error> {
        Ok(false)
    }

    fn cookies(&self) -> Result<String, Error> {
        Err(Error::UnsupportedEnvironment("document"))
    }

    fn set_cookie(&self, _cookie: &str) -> Result<(), Error> {
        Err(Error::UnsupportedEnvironment("document"))
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::Browser;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{Environment, Error};
    use url::Url;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{HtmlDocument, Window};

    /// The page this module is running in.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Browser;

    fn js_error(err: JsValue) -> Error {
        Error::Browser(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }

    fn window() -> Result<Window, Error> {
        web_sys::window().ok_or(Error::UnsupportedEnvironment("window"))
    }

    fn document() -> Result<HtmlDocument, Error> {
        window()?
            .document()
            .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
            .ok_or(Error::UnsupportedEnvironment("document"))
    }

    impl Environment for Browser {
        fn current_url(&self) -> Result<Url, Error> {
            let href = window()?.location().href().map_err(js_error)?;
            Url::parse(&href).map_err(|err| Error::Browser(format!("invalid location: {err}")))
        }

        fn navigate(&self, url: &str) -> Result<bool, Error> {
            window()?.location().set_href(url).map_err(js_error)?;
            Ok(true)
        }

        fn cookies(&self) -> Result<String, Error> {
            document()?.cookie().map_err(js_error)
        }

        fn set_cookie(&self, cookie: &str) -> Result<(), Error> {
            document()?.set_cookie(cookie).map_err(js_error)
        }
    }
}
