use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("unsupported environment: {0} is not available")]
    UnsupportedEnvironment(&'static str),
    #[error("browser call failed: {0}")]
    Browser(String),
    #[error("failed to build HTTP client")]
    HttpClient(#[from] reqwest::Error),
}

/// Rejected arguments to [`AuthClient::initiate_auth`](super::AuthClient::initiate_auth).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("invalid scopes: {}", .0.join(", "))]
    UnknownScopes(Vec<String>),
    #[error("invalid redirect URL")]
    Redirect,
    #[error("invalid domain")]
    Domain,
}

impl Error {
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    #[must_use]
    pub const fn is_unsupported_environment(&self) -> bool {
        matches!(self, Self::UnsupportedEnvironment(_))
    }
}
