use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::CartError;

use super::KeyValueStore;

/// In-process store; contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, CartError> {
        let items = self.items.read().map_err(|_| CartError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CartError> {
        let mut items = self.items.write().map_err(|_| CartError::Poisoned)?;
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
