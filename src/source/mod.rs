//! Roster input sources.
//!
//! The roster is fetched exactly once at startup from one of:
//! - a JSON file given on the command line
//! - a JSON payload piped on stdin

use crate::model::error::InputError;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for the roster payload.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// JSON file on disk.
    File(FileSource),
    /// JSON piped on stdin.
    Stdin(StdinSource),
}

impl InputSource {
    /// Fetch the whole payload.
    ///
    /// Returns the raw text; decoding happens in [`crate::parser`].
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn read_payload(&mut self) -> Result<String, InputError> {
        match self {
            InputSource::File(f) => f.read_payload(),
            InputSource::Stdin(s) => s.read_payload(),
        }
    }

    /// Human-readable name of the source, for the header and logs.
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Stdin(_) => "<stdin>".to_string(),
        }
    }
}

/// Detect and create the appropriate input source.
///
/// # Logic:
/// 1. If a file path is provided: create FileSource
/// 2. Else: use StdinSource (fails if stdin is a terminal)
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is not piped.
/// Returns `InputError::FileNotFound` if the file does not exist.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
