use std::fmt;

/// Errors that can occur while polling the aircraft-state endpoint.
#[derive(Debug)]
pub enum FeedError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    Http(String),
    /// The endpoint answered with a non-success status code.
    Status(u16),
    /// The body could not be decoded into a state collection.
    Decode(serde_json::Error),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Http(msg) => write!(f, "Request failed: {}", msg),
            FeedError::Status(code) => write!(f, "Endpoint answered with status {}", code),
            FeedError::Decode(e) => write!(f, "Malformed aircraft response: {}", e),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Decode(err)
    }
}

impl From<ureq::Error> for FeedError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => FeedError::Status(code),
            ureq::Error::Transport(transport) => FeedError::Http(transport.to_string()),
        }
    }
}

impl From<std::io::Error> for FeedError {
    fn from(err: std::io::Error) -> Self {
        FeedError::Http(err.to_string())
    }
}
