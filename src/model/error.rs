//! Error types for rollcall.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`InputError`] - The roster source cannot be opened or read (fatal)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file cannot be read or parsed (fatal)
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failed (fatal)
//!   - `std::io::Error` - Terminal failures (fatal)
//! - [`LoadError`] - The payload is not a JSON array of objects. Not fatal: the
//!   table starts empty and shows the reason.
//! - [`MalformedRecord`] - One array element does not fit the record shape. Not
//!   fatal: the element is skipped and counted.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to open or read the roster source.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Failed to load the configuration file.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to set up the log file.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading the roster payload from a file or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified roster file does not exist.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use rollcall::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// No file argument was given and stdin is an interactive terminal.
    #[error("No input: pass a roster file or pipe JSON on stdin")]
    NoInput,

    /// Any other I/O failure while reading the payload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The payload as a whole could not be decoded.
///
/// The store stays empty and the table shows this message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The payload is not valid JSON.
    #[error("Invalid JSON at line {line}, column {column}: {reason}")]
    InvalidJson {
        /// 1-based line of the syntax error.
        line: usize,
        /// 1-based column of the syntax error.
        column: usize,
        /// Parser message.
        reason: String,
    },

    /// The payload is valid JSON but the top level is not an array.
    #[error("Expected a JSON array of records, found {found}")]
    NotAnArray {
        /// JSON type found at the top level.
        found: &'static str,
    },
}

/// One element of the payload array that was rejected at load time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Record #{index} rejected: {reason}")]
pub struct MalformedRecord {
    /// 0-based position of the element in the payload array.
    pub index: usize,
    /// Why the element does not fit the record shape.
    pub reason: String,
}
