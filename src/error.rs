use std::fmt;

/// Unified error type for loading, fetching and reporting
#[derive(Debug)]
pub enum MatchError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Failed to parse JSON response
    Parse(serde_json::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// CSV file could not be read or parsed
    Csv(csv::Error),
    /// File I/O error
    Io(std::io::Error),
    /// CSV header row lacks a required column
    MissingColumn(String),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Network(e) => write!(f, "Network error: {}", e),
            MatchError::Parse(e) => write!(f, "Parse error: {}", e),
            MatchError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            MatchError::Csv(e) => write!(f, "CSV error: {}", e),
            MatchError::Io(e) => write!(f, "I/O error: {}", e),
            MatchError::MissingColumn(name) => {
                write!(f, "CSV is missing required column: {}", name)
            }
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Network(e) => Some(e),
            MatchError::Parse(e) => Some(e),
            MatchError::Csv(e) => Some(e),
            MatchError::Io(e) => Some(e),
            MatchError::HttpStatus(_) => None,
            MatchError::MissingColumn(_) => None,
        }
    }
}

impl From<reqwest::Error> for MatchError {
    fn from(err: reqwest::Error) -> Self {
        MatchError::Network(err)
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::Parse(err)
    }
}

impl From<csv::Error> for MatchError {
    fn from(err: csv::Error) -> Self {
        MatchError::Csv(err)
    }
}

impl From<std::io::Error> for MatchError {
    fn from(err: std::io::Error) -> Self {
        MatchError::Io(err)
    }
}

/// Result alias for matcher operations
pub type Result<T> = std::result::Result<T, MatchError>;
