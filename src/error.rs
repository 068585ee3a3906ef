//! Error types for the anagram library.
//!
//! Key computation and dictionary lookups never fail: unusable text and
//! missed lookups are ordinary `None` outcomes. [`AnagramError`] only covers
//! the surfaces around the core: I/O while loading word lists, configuration
//! files and JSON output.
//!
//! # Examples
//!
//! ```
//! use anagram::error::{AnagramError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AnagramError::invalid_operation("Nothing to look up against"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for anagram operations.
///
/// Uses `thiserror` for the `Error` implementation and provides constructor
/// helpers for the string-carrying variants.
#[derive(Error, Debug)]
pub enum AnagramError {
    /// I/O errors (reading word lists, configuration files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with AnagramError.
pub type Result<T> = std::result::Result<T, AnagramError>;

impl AnagramError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AnagramError::Config(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        AnagramError::InvalidOperation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = AnagramError::config("Test config error");
        assert_eq!(error.to_string(), "Configuration error: Test config error");

        let error = AnagramError::invalid_operation("no word lists");
        assert_eq!(error.to_string(), "Invalid operation: no word lists");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let anagram_error = AnagramError::from(io_error);

        match anagram_error {
            AnagramError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let anagram_error = AnagramError::from(json_error);

        assert!(matches!(anagram_error, AnagramError::Json(_)));
    }
}
