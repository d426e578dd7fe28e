//! # API Facade
//!
//! [`Journal`] is the single entry point for front ends: each method loads
//! the current snapshot, applies the matching pure operation from
//! [`crate::journal`], and persists the result when (and only when) the
//! operation changed something. Search never persists — it is a display-only
//! view.
//!
//! The facade is generic over both seams:
//! - `S: EntryStore` — `FileStore` in production, `InMemoryStore` in tests
//! - `C: Clock` — `SystemClock` in production, a fixed clock in tests
//!
//! It never writes to stdout/stderr, never exits the process, and returns
//! structured `Result` types; presentation belongs to the caller.

use crate::clock::Clock;
use crate::error::Result;
use crate::journal;
use crate::model::Entry;
use crate::stats::{self, JournalStats};
use crate::store::EntryStore;

pub struct Journal<S: EntryStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: EntryStore, C: Clock> Journal<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Add an entry and persist the new snapshot. Fails on empty text or on
    /// a storage write error; in both cases nothing is committed.
    pub fn add(&mut self, raw_text: &str) -> Result<Vec<Entry>> {
        let entries = self.store.load()?;
        let updated = journal::add(&entries, raw_text, &self.clock)?;
        self.store.save(&updated)?;
        Ok(updated)
    }

    /// The current snapshot, newest first.
    pub fn entries(&self) -> Result<Vec<Entry>> {
        self.store.load()
    }

    /// Delete the entry at the given 1-based position and persist.
    ///
    /// Returns `Ok(false)` without touching storage when the position is
    /// invalid, so callers can report failure without treating it as a
    /// storage error.
    pub fn delete(&mut self, index: usize) -> Result<bool> {
        let entries = self.store.load()?;
        match journal::delete(&entries, index) {
            Some(updated) => {
                self.store.save(&updated)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Entries matching `query`, newest first. Read-only.
    pub fn search(&self, query: &str) -> Result<Vec<Entry>> {
        let entries = self.store.load()?;
        Ok(journal::search(&entries, query))
    }

    pub fn stats(&self) -> Result<JournalStats> {
        let entries = self.store.load()?;
        Ok(stats::compute(&entries))
    }

    /// Remove every persisted entry.
    pub fn clear(&mut self) -> Result<()> {
        self.store.clear()
    }
}
