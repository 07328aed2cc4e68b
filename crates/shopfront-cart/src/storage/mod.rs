//! String key/value storage with the browser local-storage contract:
//! whole values are read and written by key, nothing else.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::CartError;

pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key is unset.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the backing medium cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, CartError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the backing medium cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), CartError>;
}
