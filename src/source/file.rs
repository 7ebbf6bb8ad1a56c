//! File-based roster source.
//!
//! The file is checked at construction and read whole on demand. There is no
//! watching: the roster is fetched once per session.

use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// Read-once source backed by a JSON file.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    consumed: bool,
}

impl FileSource {
    /// Create a FileSource for the given path.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            consumed: false,
        })
    }

    /// Path of the roster file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file.
    ///
    /// The first call returns the file contents; later calls return an empty
    /// string.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file was removed after
    /// construction, `InputError::Io` for other I/O errors.
    pub fn read_payload(&mut self) -> Result<String, InputError> {
        if self.consumed {
            return Ok(String::new());
        }

        let payload = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                InputError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                InputError::Io(e)
            }
        })?;
        self.consumed = true;
        Ok(payload)
    }
}
