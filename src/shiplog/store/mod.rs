//! # Storage Layer
//!
//! The [`EntryStore`] trait is the persistence contract both front ends rely
//! on: load the whole collection, overwrite it wholesale, or clear it. The
//! collection is the sole unit of persistence; there is no entry-level
//! identity beyond position + content, so there are no per-entry operations.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file holding the array
//!   of `{"t", "v"}` objects. Path comes from an explicit override, the
//!   `SHIPLOG_DATA_PATH` environment variable, or the platform data
//!   directory.
//! - [`memory::InMemoryStore`]: in-memory storage for tests and embedding
//!   front ends that keep the collection live between operations.
//!
//! Absent or malformed persisted data is treated as an empty collection —
//! recoverable locally, never surfaced as an error. Write failures, on the
//! other hand, propagate: a snapshot is not committed until `save` returns
//! `Ok`.

use crate::error::Result;
use crate::model::Entry;

pub mod fs;
pub mod memory;

/// Abstract interface for journal persistence.
pub trait EntryStore {
    /// Load the persisted collection. Nothing stored, or a payload that is
    /// not valid structured data, yields an empty collection.
    fn load(&self) -> Result<Vec<Entry>>;

    /// Replace the entire persisted collection with the given snapshot.
    fn save(&mut self, entries: &[Entry]) -> Result<()>;

    /// Remove the persisted collection entirely; a subsequent `load` returns
    /// empty. Clearing an absent collection succeeds.
    fn clear(&mut self) -> Result<()>;
}
