//! Pure core integration functions.
//!
//! Glue between the fetched payload, the parser and the store. Testable
//! without a terminal or a real source.

use crate::model::LoadError;
use crate::parser;
use crate::store::Store;
use tracing::{error, info, warn};

/// Result of loading the roster at startup.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Store holding every record that decoded.
    pub store: Store,
    /// Number of payload elements rejected as malformed.
    pub rejected: usize,
    /// Why nothing was loaded, when the payload as a whole was unusable.
    pub error: Option<LoadError>,
}

/// Decode `payload` and load the result into a fresh store.
///
/// Malformed elements are logged and skipped. A payload that is not a JSON
/// array leaves the store empty and reports the reason in
/// [`LoadOutcome::error`]; the store is still marked loaded.
pub fn load_payload(payload: &str) -> LoadOutcome {
    let mut store = Store::new();

    match parser::parse_roster(payload) {
        Ok(roster) => {
            for rejected in &roster.rejected {
                warn!(index = rejected.index, reason = %rejected.reason, "Skipping malformed record");
            }
            let rejected = roster.rejected.len();
            store.load(roster.records);
            info!(loaded = store.len(), rejected, "Roster decoded");
            LoadOutcome {
                store,
                rejected,
                error: None,
            }
        }
        Err(err) => {
            error!(error = %err, "Roster payload could not be decoded");
            store.load(Vec::new());
            LoadOutcome {
                store,
                rejected: 0,
                error: Some(err),
            }
        }
    }
}
