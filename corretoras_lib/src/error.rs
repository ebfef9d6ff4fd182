//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding configuration validation failures.
#[derive(Debug)]
pub enum CorretorasError {
    /// An error from the underlying API client.
    Api(brasilapi_cvm::Error),
    /// A caller-provided value failed validation.
    InvalidInput(String),
}

impl fmt::Display for CorretorasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for CorretorasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<brasilapi_cvm::Error> for CorretorasError {
    fn from(e: brasilapi_cvm::Error) -> Self {
        Self::Api(e)
    }
}
