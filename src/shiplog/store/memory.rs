use super::EntryStore;
use crate::error::Result;
use crate::model::Entry;

/// In-memory storage for testing and embedding front ends.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Vec<Entry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.entries = entries.to_vec();
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}
