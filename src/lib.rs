//! # ryos
//!
//! Client for the ryos identity service. The service does all of the real
//! authentication work; this crate only drives the browser side of the flow:
//!
//! 1. [`AuthClient::initiate_auth`] builds the `https://ryos.org` login URL for a
//!    set of scopes and navigates to it (or hands it back on hosts without a
//!    page to navigate).
//! 2. After login the service redirects back with a one-time code in the `ryos`
//!    query parameter, which [`AuthClient::check`] reads from the current URL.
//! 3. [`AuthClient::validate`] exchanges that code with `POST /validate` and
//!    reports a plain success flag.
//! 4. [`AuthClient::logout`] expires the session cookie.
//!
//! Host state (current URL, navigation, cookies) is reached through the
//! [`Environment`] trait: [`Headless`] for native hosts and `Browser` for
//! `wasm32` builds, where the same operations are also exported to JavaScript.

pub mod ryos;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

pub use self::ryos::{
    AuthClient, Config, Environment, Error, Headless, InvalidInput, Redirect, Scope,
    ScopeDescriptor,
};

#[cfg(target_arch = "wasm32")]
pub use self::ryos::environment::Browser;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
