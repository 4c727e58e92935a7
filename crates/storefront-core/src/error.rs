//! Fetch Errors
//!
//! One taxonomy for everything that can go wrong talking to the catalog
//! service: the request never completed, the server answered with a
//! non-success status, or the body did not decode.

/// Common result type for catalog service calls
pub type FetchResult<T> = Result<T, FetchError>;

/// Failure talking to the catalog service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response
    Transport(String),
    /// The response arrived with a non-success status code
    Status(u16),
    /// The response body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "request failed: {}", msg),
            FetchError::Status(code) => write!(f, "service answered with status {}", code),
            FetchError::Decode(msg) => write!(f, "unreadable response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
