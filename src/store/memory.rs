use std::cell::RefCell;
use std::collections::HashMap;

use super::keystore::{KeyStore, StoreError, StoredValue};

/// In-memory key-value store. Tests use it in place of the SQLite backend,
/// and the preview binary offers it as a volatile mode when no home
/// directory is available. Interior mutability keeps the `KeyStore` methods
/// on `&self`, matching the durable backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, StoredValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed helper for tests: store an integer under `key`.
    pub fn with_int(self, key: &str, value: i64) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), StoredValue::Int(value));
        self
    }

    /// Seed helper for tests: store text under `key`.
    pub fn with_text(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), StoredValue::Text(value.to_string()));
        self
    }
}

impl KeyStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: StoredValue) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
