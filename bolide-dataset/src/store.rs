//! In-memory record store.
//!
//! Fast, thread-safe storage for the dataset, suitable for a single-process
//! deployment: populated wholesale by the startup fetch and only read
//! afterwards.

use std::sync::Arc;

use parking_lot::RwLock;

use bolide_core::MeteorRecord;

/// In-memory store of meteorite records.
///
/// Insertion order equals source order. `replace` swaps the full vector in
/// one assignment, so readers observe either the pre-fetch (empty) state or
/// a fully replaced state, never a partial write.
#[derive(Debug)]
pub struct MeteorStore {
    records: RwLock<Arc<Vec<MeteorRecord>>>,
}

impl MeteorStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Replaces the store contents wholesale.
    pub fn replace(&self, records: Vec<MeteorRecord>) {
        *self.records.write() = Arc::new(records);
    }

    /// Returns a snapshot of the current contents.
    ///
    /// The snapshot is immutable and unaffected by a later `replace`.
    pub fn snapshot(&self) -> Arc<Vec<MeteorRecord>> {
        self.records.read().clone()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for MeteorStore {
    fn default() -> Self {
        Self::new()
    }
}
