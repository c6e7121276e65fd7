use anyhow::Result;
use std::collections::HashMap;

use super::KeyValueStore;

/// In-memory store with switchable read/write failures.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    items: HashMap<String, String>,
    pub(crate) fail_reads: bool,
    pub(crate) fail_writes: bool,
    pub(crate) writes: usize,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }

    pub(crate) fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            anyhow::bail!("storage unavailable");
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("quota exceeded");
        }
        self.writes += 1;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
