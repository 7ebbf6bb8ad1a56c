//! Owner of the master roster.
//!
//! The store is created empty, loaded once after the source has been read,
//! and only handed out by shared reference afterwards. Every view is derived
//! from [`Store::master`], never from a previously rendered view.

use crate::model::Record;
use tracing::{info, warn};

/// Holder of the immutable master collection of records.
#[derive(Debug, Default)]
pub struct Store {
    master: Vec<Record>,
    loaded: bool,
}

impl Store {
    /// Create an empty, not yet loaded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the master collection.
    ///
    /// Expected once per session. A second call replaces the collection.
    pub fn load(&mut self, records: Vec<Record>) {
        if self.loaded {
            warn!(
                previous = self.master.len(),
                next = records.len(),
                "Store loaded twice; replacing master collection"
            );
        }
        info!(count = records.len(), "Master roster loaded");
        self.master = records;
        self.loaded = true;
    }

    /// Read-only view of the master collection in load order.
    pub fn master(&self) -> &[Record] {
        &self.master
    }

    /// Number of records in the master collection.
    pub fn len(&self) -> usize {
        self.master.len()
    }

    /// Whether the master collection is empty.
    pub fn is_empty(&self) -> bool {
        self.master.is_empty()
    }
}

impl From<Vec<Record>> for Store {
    fn from(records: Vec<Record>) -> Self {
        let mut store = Store::new();
        store.load(records);
        store
    }
}
