pub mod config;
pub mod cookie;
pub mod environment;
pub mod error;
pub mod redirect;
pub mod scope;
pub mod validate;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use self::config::Config;
pub use self::environment::{Environment, Headless};
pub use self::error::{Error, InvalidInput};
pub use self::redirect::Redirect;
pub use self::scope::{Scope, ScopeDescriptor};

use reqwest::Client;
use tracing::{debug, error, info, instrument, warn};

/// Entry point for the login flow against the ryos identity service.
#[derive(Debug, Clone)]
pub struct AuthClient<E = Headless> {
    config: Config,
    environment: E,
    http: Client,
}

impl<E: Environment> AuthClient<E> {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(environment: E) -> Result<Self, Error> {
        Self::with_config(Config::default(), environment)
    }

    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(config: Config, environment: E) -> Result<Self, Error> {
        Ok(Self {
            config,
            environment,
            http: validate::client()?,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn environment(&self) -> &E {
        &self.environment
    }

    /// Starts login: builds the login URL for `scopes` and navigates to it, or
    /// returns it as [`Redirect::Pending`] when the host cannot navigate.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] for unknown scopes, an empty redirect or an
    /// invalid domain; nothing is navigated in that case.
    #[instrument(skip(self, scopes))]
    pub fn initiate_auth<S: AsRef<str>>(
        &self,
        domain: &str,
        scopes: &[S],
        redirect: &str,
    ) -> Result<Redirect, Error> {
        let url = redirect::login_url(&self.config.base_url, domain, scopes, redirect)
            .inspect_err(|e| error!("Error during authentication: {}", e))?;

        if self.environment.navigate(&url)? {
            Ok(Redirect::Navigated(url))
        } else {
            Ok(Redirect::Pending(url))
        }
    }

    /// Expires the configured session cookie.
    ///
    /// # Errors
    /// [`Error::UnsupportedEnvironment`] when the host has no document.
    pub fn logout(&self) -> Result<(), Error> {
        self.logout_cookie(&self.config.cookie_name)
    }

    /// Expires the cookie called `name`.
    ///
    /// # Errors
    /// [`Error::UnsupportedEnvironment`] when the host has no document.
    pub fn logout_cookie(&self, name: &str) -> Result<(), Error> {
        self.environment.set_cookie(&cookie::removal(name))?;
        info!("Logged out, token removed.");

        Ok(())
    }

    /// Reads the one-time code from the current URL. `""` and `"null"` count
    /// as absent.
    ///
    /// # Errors
    /// [`Error::UnsupportedEnvironment`] when the host has no current URL.
    pub fn check(&self) -> Result<Option<String>, Error> {
        let url = self.environment.current_url()?;

        let code = url
            .query_pairs()
            .find(|(key, _)| key == config::CODE_PARAM)
            .map(|(_, value)| {
                urlencoding::decode(&value)
                    .map_or_else(|_| value.to_string(), |decoded| decoded.into_owned())
            })
            .filter(|code| !code.is_empty() && code != "null");

        if code.is_some() {
            debug!("Found ryos code");
        } else {
            warn!("No ryos param found in the current URL.");
        }

        Ok(code)
    }

    /// Exchanges a one-time code for a success flag. Every failure, remote or
    /// local, is `false`.
    pub async fn validate(&self, code: &str) -> bool {
        validate::exchange(&self.http, &self.config.validate_url(), code).await
    }

    /// Value of the session cookie, if set.
    ///
    /// # Errors
    /// [`Error::UnsupportedEnvironment`] when the host has no document.
    pub fn session(&self) -> Result<Option<String>, Error> {
        let cookies = self.environment.cookies()?;
        Ok(cookie::find(&cookies, &self.config.cookie_name).map(ToString::to_string))
    }

    #[must_use]
    pub fn scopes(&self) -> &'static [ScopeDescriptor] {
        scope::catalog()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use url::Url;

    /// In-memory page: records navigations and cookie writes.
    #[derive(Default)]
    struct Page {
        url: Option<Url>,
        cookies: RefCell<Vec<String>>,
        navigations: RefCell<Vec<String>>,
    }

    impl Page {
        fn at(url: &str) -> Self {
            Self {
                url: Some(Url::parse(url).unwrap()),
                ..Self::default()
            }
        }
    }

    impl Environment for Page {
        fn current_url(&self) -> Result<Url, Error> {
            self.url
                .clone()
                .ok_or(Error::UnsupportedEnvironment("window.location"))
        }

        fn navigate(&self, url: &str) -> Result<bool, Error> {
            self.navigations.borrow_mut().push(url.to_string());
            Ok(true)
        }

        fn cookies(&self) -> Result<String, Error> {
            Ok(self.cookies.borrow().join("; "))
        }

        fn set_cookie(&self, cookie: &str) -> Result<(), Error> {
            self.cookies.borrow_mut().push(cookie.to_string());
            Ok(())
        }
    }

    fn code_at(url: &str) -> Option<String> {
        AuthClient::new(Page::at(url)).unwrap().check().unwrap()
    }

    #[test]
    fn initiate_auth_navigates_in_browser() {
        let client = AuthClient::new(Page::default()).unwrap();
        let redirect = client
            .initiate_auth("example.com", &["identity"], "https://app.example/cb")
            .unwrap();

        let expected = "https://ryos.org?domain=example.com&scope=identity&redirect=https%3A%2F%2Fapp.example%2Fcb";
        assert_eq!(redirect, Redirect::Navigated(expected.to_string()));
        assert_eq!(*client.environment().navigations.borrow(), vec![expected]);
    }

    #[test]
    fn initiate_auth_returns_url_when_headless() {
        let client = AuthClient::new(Headless::new()).unwrap();
        let redirect = client
            .initiate_auth("example.com", &["identity".to_string()], "https://app.example/cb")
            .unwrap();

        assert!(matches!(redirect, Redirect::Pending(_)));
        assert!(redirect.url().starts_with("https://ryos.org?domain=example.com"));
    }

    #[test]
    fn initiate_auth_uses_configured_base() {
        let config = Config::default().with_base_url("https://staging.ryos.org");
        let client = AuthClient::with_config(config, Headless::new()).unwrap();
        let redirect = client.initiate_auth("example.com", &["identity"], "/cb").unwrap();

        assert_eq!(
            redirect.url(),
            "https://staging.ryos.org?domain=example.com&scope=identity&redirect=%2Fcb"
        );
    }

    #[test]
    fn invalid_input_does_not_navigate() {
        let client = AuthClient::new(Page::default()).unwrap();

        let unknown = client.initiate_auth("example.com", &["identity", "email"], "https://app.example/cb");
        assert!(matches!(
            unknown,
            Err(Error::InvalidInput(InvalidInput::UnknownScopes(ref names))) if names == &["email"]
        ));

        let domain = client.initiate_auth("bad domain!", &["identity"], "https://app.example/cb");
        assert!(matches!(domain, Err(Error::InvalidInput(InvalidInput::Domain))));

        let redirect = client.initiate_auth("example.com", &["identity"], "");
        assert!(matches!(redirect, Err(Error::InvalidInput(InvalidInput::Redirect))));

        assert!(client.environment().navigations.borrow().is_empty());
    }

    #[test]
    fn logout_expires_session_cookie() {
        let client = AuthClient::new(Page::default()).unwrap();
        client.logout().unwrap();
        client.logout_cookie("other").unwrap();

        assert_eq!(
            *client.environment().cookies.borrow(),
            vec![
                "ryos_session=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT; secure; SameSite=Strict",
                "other=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT; secure; SameSite=Strict",
            ]
        );
    }

    #[test]
    fn logout_without_document_is_unsupported() {
        let client = AuthClient::new(Headless::new()).unwrap();
        assert!(matches!(
            client.logout(),
            Err(Error::UnsupportedEnvironment("document"))
        ));
    }

    #[test]
    fn check_reads_code() {
        assert_eq!(code_at("https://app.example/cb?ryos=abc123"), Some("abc123".to_string()));
        assert_eq!(
            code_at("https://app.example/cb?other=1&ryos=a%2Bb%20c"),
            Some("a+b c".to_string())
        );
    }

    #[test]
    fn check_decodes_twice() {
        assert_eq!(code_at("https://app.example/cb?ryos=a%252Fb"), Some("a/b".to_string()));
    }

    #[test]
    fn check_treats_missing_empty_and_null_as_absent() {
        assert_eq!(code_at("https://app.example/cb"), None);
        assert_eq!(code_at("https://app.example/cb?other=abc"), None);
        assert_eq!(code_at("https://app.example/cb?ryos="), None);
        assert_eq!(code_at("https://app.example/cb?ryos=null"), None);
    }

    #[test]
    fn check_without_location_is_unsupported() {
        let client = AuthClient::new(Headless::new()).unwrap();
        assert!(matches!(
            client.check(),
            Err(Error::UnsupportedEnvironment(_))
        ));
    }

    #[test]
    fn check_with_headless_callback_url() {
        let url = Url::parse("https://app.example/cb?ryos=xyz").unwrap();
        let client = AuthClient::new(Headless::new().with_url(url)).unwrap();
        assert_eq!(client.check().unwrap(), Some("xyz".to_string()));
    }

    #[test]
    fn session_reads_configured_cookie() {
        let client = AuthClient::new(Page::default()).unwrap();
        assert_eq!(client.session().unwrap(), None);

        client.environment().set_cookie("theme=dark").unwrap();
        client.environment().set_cookie("ryos_session=s3cr3t").unwrap();
        assert_eq!(client.session().unwrap(), Some("s3cr3t".to_string()));

        let headless = AuthClient::new(Headless::new()).unwrap();
        assert!(matches!(
            headless.session(),
            Err(Error::UnsupportedEnvironment(_))
        ));
    }

    #[test]
    fn scopes_are_stable() {
        let client = AuthClient::new(Headless::new()).unwrap();
        let first = client.scopes();
        let _ = client.initiate_auth("bad domain!", &["identity"], "x");
        let second = client.scopes();

        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].name, "identity");
    }
}
