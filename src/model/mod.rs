//! Domain model types (pure).
//!
//! All types in this module are plain data decoded at the load boundary.

pub mod error;
pub mod key_action;
pub mod record;

// Re-export for convenience
pub use error::{AppError, InputError, LoadError, MalformedRecord};
pub use key_action::KeyAction;
pub use record::{ClassLabel, Record, RecordId};
