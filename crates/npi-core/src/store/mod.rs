//! Snapshot persistence.
//!
//! The board is persisted as one JSON string under a fixed key in a local
//! key-value store. [`SqliteStore`] keeps it in a SQLite file;
//! [`MemoryStore`] keeps it in process for tests and throwaway boards.

use std::collections::HashMap;

use crate::error::Result;

mod migrations;
pub mod sqlite;

pub use sqlite::SqliteStore;

/// Key the board snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "npi-meeting-board-state";

/// A string key-value store.
pub trait SnapshotStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
