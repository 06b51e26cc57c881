//! error types
//!
//! one variant per failure phase so callers can react to the phase that
//! failed (e.g. retry only on network errors).

/// library result type
pub type Result<T> = std::result::Result<T, Error>;

/// boxed error returned by result parsers
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// error type for the client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("url error: {0}")]
    Url(#[from] url::ParseError),

    #[error("protocol error: request received status code {status}")]
    Protocol {
        /// http status code returned by the endpoint
        status: u16,
    },

    #[error("parse error: {0}")]
    Parse(#[source] BoxError),
}

impl Error {
    /// true if the failure happened at the transport layer
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// http status code for protocol-level failures, if one was seen
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Protocol { status } => Some(*status),
            Error::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
