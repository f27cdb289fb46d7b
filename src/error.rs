//! Error handling for cinetui
//!
//! Centralized error types using thiserror. Every recoverable failure in the
//! application maps onto one of these variants; none of them is fatal past
//! the event loop.

use thiserror::Error;

/// Main error type for cinetui
#[derive(Error, Debug)]
pub enum CineTuiError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write errors from the backing store
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A numeric field of the add form did not parse
    #[error("invalid {field}: {value:?} is not a number")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },

    /// Delete target not present in the catalog
    #[error("movie '{0}' not found")]
    NotFound(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for cinetui operations
pub type Result<T> = std::result::Result<T, CineTuiError>;

impl CineTuiError {
    /// Create an invalid-number error for a named form field
    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(title: impl Into<String>) -> Self {
        Self::NotFound(title.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CineTuiError::invalid_number("rating", "abc");
        assert_eq!(err.to_string(), "invalid rating: \"abc\" is not a number");

        let err = CineTuiError::not_found("Inception");
        assert_eq!(err.to_string(), "movie 'Inception' not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CineTuiError = io_err.into();
        assert!(matches!(err, CineTuiError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = CineTuiError::terminal("raw mode failed");
        assert!(matches!(err, CineTuiError::Terminal(_)));

        let err = CineTuiError::general("something odd");
        assert!(matches!(err, CineTuiError::General(_)));
    }
}
