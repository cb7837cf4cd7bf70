use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of prediction request failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PredictErrorKind {
    /// The request never produced a response (unreachable host, refused
    /// connection, aborted transfer).
    Network,
    /// A response arrived but its body is not a valid prediction payload.
    InvalidResponse,
    /// The endpoint URL could not be built from configuration.
    Config,
}

impl fmt::Display for PredictErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictErrorKind::Network => write!(f, "NetworkError"),
            PredictErrorKind::InvalidResponse => write!(f, "InvalidResponse"),
            PredictErrorKind::Config => write!(f, "ConfigError"),
        }
    }
}

/// Transport or parse failure of a single prediction request.
///
/// Application-level outcomes (`{"error": ...}` or no results) are not
/// errors; they arrive as a parsed `PredictionResponse`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictError {
    pub kind: PredictErrorKind,
    pub message: String,
}

impl PredictError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: PredictErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self {
            kind: PredictErrorKind::InvalidResponse,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: PredictErrorKind::Config,
            message: message.into(),
        }
    }
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for PredictError {}

impl From<serde_json::Error> for PredictError {
    fn from(e: serde_json::Error) -> Self {
        PredictError::invalid_response(e.to_string())
    }
}
