//! Cart persistence for the storefront.
//!
//! The cart is a flat, ordered list of product records kept as one JSON
//! array under a single key of a [`KeyValueStore`]. Adding a product reads
//! the whole list, appends, and writes the whole list back. There is no
//! deduplication, quantity tracking or removal.

pub mod cart;
pub mod error;
pub mod storage;

pub use cart::Cart;
pub use error::CartError;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
