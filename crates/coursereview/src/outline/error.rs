//! Error types for the course outline client.

use thiserror::Error;

/// Errors that can occur while talking to the course outline API.
#[derive(Debug, Error, Clone)]
pub enum OutlineError {
    /// Network/HTTP request failed
    #[error("Network error: {message}")]
    Network { message: String },

    /// Server answered with a non-2xx status
    #[error("Outline API returned status {status} for {path}")]
    UnexpectedStatus { status: u16, path: String },

    /// Body was not the JSON shape we expected
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// URL parsing/construction failed
    #[error("URL error: {message}")]
    Url { message: String },
}

impl From<reqwest::Error> for OutlineError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            OutlineError::Parse {
                message: err.to_string(),
            }
        } else {
            OutlineError::Network {
                message: err.to_string(),
            }
        }
    }
}

impl From<url::ParseError> for OutlineError {
    fn from(err: url::ParseError) -> Self {
        OutlineError::Url {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for OutlineError {
    fn from(err: serde_json::Error) -> Self {
        OutlineError::Parse {
            message: err.to_string(),
        }
    }
}
