// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load data from {location}: {message}")]
    Load { location: String, message: String },

    #[error("Failed to connect to Ollama. Make sure it's running on {endpoint} ({reason})")]
    InferenceConnectivity { endpoint: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DashboardError {
    pub fn load(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Load {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn connectivity(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        Self::InferenceConnectivity {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }
}
