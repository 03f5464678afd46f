use super::{
    error::InvalidInput,
    scope::{self, Scope},
};
use regex::Regex;
use tracing::debug;

/// Outcome of [`AuthClient::initiate_auth`](super::AuthClient::initiate_auth).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    /// The host has been sent to the login page.
    Navigated(String),
    /// The host cannot navigate; the caller should send the user to this URL.
    Pending(String),
}

impl Redirect {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Navigated(url) | Self::Pending(url) => url,
        }
    }
}

pub fn valid_domain(domain: &str) -> bool {
    Regex::new(r"^(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,6}$").is_ok_and(|re| re.is_match(domain))
}

/// Checks the login arguments and builds the login URL against `base_url`.
///
/// # Errors
/// Returns the first failing check, in order: scopes, redirect, domain.
pub fn login_url<S: AsRef<str>>(
    base_url: &str,
    domain: &str,
    scopes: &[S],
    redirect: &str,
) -> Result<String, InvalidInput> {
    let scopes = scope::resolve(scopes).map_err(InvalidInput::UnknownScopes)?;

    if redirect.is_empty() {
        return Err(InvalidInput::Redirect);
    }

    if domain.is_empty() || !valid_domain(domain) {
        return Err(InvalidInput::Domain);
    }

    let scope = scopes
        .iter()
        .copied()
        .map(Scope::name)
        .collect::<Vec<_>>()
        .join("_");

    let url = format!(
        "{}?domain={}&scope={}&redirect={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(domain),
        urlencoding::encode(&scope),
        urlencoding::encode(redirect),
    );

    debug!("login URL: {}", url);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://ryos.org";

    #[test]
    fn test_valid_domain() {
        for domain in ["example.com", "app.example.co", "my-app.io", "a1.b2.museum"] {
            assert!(valid_domain(domain), "{domain} should be accepted");
        }
        for domain in [
            "bad domain!",
            "localhost",
            "example.c",
            "example.toolong",
            "example..com",
            ".example.com",
            "example.com/path",
            "",
        ] {
            assert!(!valid_domain(domain), "{domain} should be rejected");
        }
    }

    #[test]
    fn builds_login_url() {
        let url = login_url(BASE, "example.com", &["identity"], "https://app.example/cb");
        assert_eq!(
            url,
            Ok("https://ryos.org?domain=example.com&scope=identity&redirect=https%3A%2F%2Fapp.example%2Fcb".to_string())
        );
    }

    #[test]
    fn joins_scopes_with_underscore() {
        let url = login_url(BASE, "example.com", &["identity", "identity"], "/cb");
        assert_eq!(
            url,
            Ok("https://ryos.org?domain=example.com&scope=identity_identity&redirect=%2Fcb".to_string())
        );
    }

    #[test]
    fn trailing_slash_on_base_is_dropped() {
        let url = login_url("http://127.0.0.1:8080/", "example.com", &["identity"], "x");
        assert_eq!(
            url,
            Ok("http://127.0.0.1:8080?domain=example.com&scope=identity&redirect=x".to_string())
        );
    }

    #[test]
    fn rejects_unknown_scope() {
        assert_eq!(
            login_url(BASE, "example.com", &["identity", "email"], "https://app.example/cb"),
            Err(InvalidInput::UnknownScopes(vec!["email".to_string()]))
        );
    }

    #[test]
    fn rejects_empty_redirect() {
        assert_eq!(
            login_url(BASE, "example.com", &["identity"], ""),
            Err(InvalidInput::Redirect)
        );
    }

    #[test]
    fn rejects_bad_domain() {
        assert_eq!(
            login_url(BASE, "bad domain!", &["identity"], "https://app.example/cb"),
            Err(InvalidInput::Domain)
        );
        assert_eq!(
            login_url(BASE, "", &["identity"], "https://app.example/cb"),
            Err(InvalidInput::Domain)
        );
    }

    #[test]
    fn scopes_are_checked_before_redirect_and_domain() {
        assert_eq!(
            login_url(BASE, "bad domain!", &["nope"], ""),
            Err(InvalidInput::UnknownScopes(vec!["nope".to_string()]))
        );
    }
}
