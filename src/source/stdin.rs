//! Stdin-based roster source for piped input.
//!
//! Provides StdinSource for reading a whole JSON payload from stdin,
//! e.g. `curl -s https://.../students.json | rollcall`.

use crate::model::error::InputError;
use std::fmt;
use std::io::{IsTerminal, Read};

/// Stdin source for a piped JSON payload.
///
/// # Design
///
/// - Refuses an interactive terminal at construction, so the app never
///   blocks waiting on the keyboard for data
/// - Reads to EOF once; later reads return an empty payload
pub struct StdinSource {
    reader: Box<dyn Read>,
    complete: bool,
}

impl StdinSource {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal).
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(stdin))
    }

    /// Create StdinSource from any reader, bypassing the TTY check.
    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            complete: false,
        }
    }

    /// Read everything up to EOF.
    ///
    /// The first call returns the full payload and marks the source complete.
    /// Later calls return an empty string.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for I/O errors, including invalid UTF-8.
    pub fn read_payload(&mut self) -> Result<String, InputError> {
        let mut payload = String::new();
        if !self.complete {
            self.reader.read_to_string(&mut payload)?;
            self.complete = true;
        }
        Ok(payload)
    }
}

impl fmt::Debug for StdinSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdinSource")
            .field("complete", &self.complete)
            .finish_non_exhaustive()
    }
}
