//! Error types for connection string construction

use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Host list was supplied but is not a sequence
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Untyped input has the wrong top-level shape
    #[error("invalid configuration: {0}")]
    Config(String),

    /// JSON text could not be parsed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Stable label for this error, used as a metrics dimension
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Config(_) => "config",
            Self::Json(_) => "json",
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument("hosts must be an array");
        assert_eq!(err.to_string(), "invalid argument: hosts must be an array");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            Error::invalid_argument("x").category(),
            "invalid_argument"
        );
        assert_eq!(Error::Config("x".into()).category(), "config");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(Error::from(json_err).category(), "json");
    }
}
