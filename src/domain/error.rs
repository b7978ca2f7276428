use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure talking to one of the upstream data services.
///
/// These never escape a pipeline run; they are logged and degraded
/// into an unknown movement or a placeholder news record.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    /// HTTP, DNS, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned status {status} for {what}")]
    Status { status: u16, what: String },

    /// The service answered but reported an error in its body
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ProviderError::Parse(e.to_string())
        } else {
            ProviderError::Network(e.to_string())
        }
    }
}
