use thiserror::Error;

pub type ProviderResult<T> = Result<T, ProviderError>;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ProviderError {
    /// Errors raised while talking to the vendor backend, as opposed to
    /// problems with the caller's request or local configuration.
    pub fn is_communication_failure(&self) -> bool {
        matches!(
            self,
            ProviderError::Unavailable(_)
                | ProviderError::AuthenticationFailed(_)
                | ProviderError::RateLimitExceeded(_)
                | ProviderError::NetworkError(_)
                | ProviderError::InvalidResponse(_)
        )
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::InvalidResponse(err.to_string())
    }
}
