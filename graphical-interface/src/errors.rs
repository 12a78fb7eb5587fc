use std::fmt;

/// Errors that abort map setup or background loading.
#[derive(Debug)]
pub enum MapError {
    /// A bundled icon could not be decoded.
    Icon { name: String, reason: String },
    /// The bundled airport dataset is not valid.
    AirportData(serde_json::Error),
    /// The country-boundary source could not be fetched or read.
    Countries(String),
    /// A background thread could not be started.
    Thread(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Icon { name, reason } => write!(f, "Failed to load icon '{}': {}", name, reason),
            MapError::AirportData(e) => write!(f, "Invalid airport dataset: {}", e),
            MapError::Countries(msg) => write!(f, "Country boundaries unavailable: {}", msg),
            MapError::Thread(msg) => write!(f, "Failed to start thread: {}", msg),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::AirportData(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        MapError::AirportData(err)
    }
}

/// Errors returned when writing to a data source.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// The surface owning the source was torn down.
    Disposed(&'static str),
    /// A writer panicked while holding the source.
    Poisoned(&'static str),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Disposed(name) => write!(f, "Source '{}' is disposed", name),
            SourceError::Poisoned(name) => write!(f, "Source '{}' lock is poisoned", name),
        }
    }
}

impl std::error::Error for SourceError {}
