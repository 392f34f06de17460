//! Recently generated passwords, newest first.
//!
//! The list lives behind a [`HistoryStore`] so generation and scoring never
//! touch storage; callers push results after the fact.

mod file;

pub use file::FileStore;

use crate::error::{Error, Result};

pub const HISTORY_LIMIT: usize = 10;

/// Whole-list persistence. Read-modify-write, last writer wins.
pub trait HistoryStore {
    fn load(&self) -> Result<Vec<String>>;
    fn save(&mut self, entries: &[String]) -> Result<()>;
}

/// In-process store, nothing survives the run.
#[derive(Debug, Default)]
pub struct MemoryStore(Vec<String>);

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }

    fn save(&mut self, entries: &[String]) -> Result<()> {
        self.0 = entries.to_vec();
        Ok(())
    }
}

pub struct History<S: HistoryStore> {
    store: S,
    entries: Vec<String>,
}

impl<S: HistoryStore> History<S> {
    pub fn open(store: S) -> Result<Self> {
        let mut entries = store.load()?;
        entries.truncate(HISTORY_LIMIT);
        Ok(Self { store, entries })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zero-based lookup.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// One-based lookup, as shown to users.
    pub fn nth(&self, number: usize) -> Result<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.get(i))
            .ok_or(Error::NoEntry(number))
    }

    /// Move `password` to the front, dropping any older copy and anything
    /// past the limit. Empty input is ignored.
    pub fn push(&mut self, password: &str) -> Result<()> {
        if password.is_empty() {
            return Ok(());
        }
        self.entries.retain(|e| e != password);
        self.entries.insert(0, password.to_string());
        self.entries.truncate(HISTORY_LIMIT);
        self.store.save(&self.entries)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.store.save(&self.entries)
    }
}
