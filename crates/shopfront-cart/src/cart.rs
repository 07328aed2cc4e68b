use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use shopfront_core::{checked_total, Product};

use crate::error::CartError;
use crate::storage::KeyValueStore;

/// The list of products the user has added, stored under one key.
///
/// `add` is a read-modify-write of the whole list. Calls through the same
/// `Cart` are serialized so concurrent additions are never lost; separate
/// processes sharing a store get no such guarantee.
pub struct Cart {
    store: Arc<dyn KeyValueStore>,
    key: String,
    write_lock: Mutex<()>,
}

impl Cart {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the stored products in the order they were added.
    ///
    /// An unset key is an empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Corrupt`] if the stored value is not a JSON array
    /// of products, or a storage error from the backing store.
    pub fn items(&self) -> Result<Vec<Product>, CartError> {
        match self.store.get_item(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| CartError::Corrupt {
                key: self.key.clone(),
                source,
            }),
        }
    }

    /// Appends `product` to the end of the list and writes the whole list
    /// back. Returns the number of items now in the cart.
    ///
    /// Adding a product that is already present adds a second entry.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Corrupt`] if the existing value cannot be parsed;
    /// the stored value is left untouched in that case.
    pub fn add(&self, product: Product) -> Result<usize, CartError> {
        let _guard = self.write_lock.lock().map_err(|_| CartError::Poisoned)?;

        let mut items = self.items()?;
        let product_id = product.id;
        items.push(product);

        let serialized = serde_json::to_string(&items).map_err(CartError::Serialize)?;
        self.store.set_item(&self.key, &serialized)?;

        tracing::info!(
            key = %self.key,
            product_id,
            count = items.len(),
            "added product to cart"
        );
        Ok(items.len())
    }

    /// Number of entries in the cart.
    ///
    /// # Errors
    ///
    /// See [`Self::items`].
    pub fn len(&self) -> Result<usize, CartError> {
        self.items().map(|items| items.len())
    }

    /// # Errors
    ///
    /// See [`Self::items`].
    pub fn is_empty(&self) -> Result<bool, CartError> {
        self.len().map(|n| n == 0)
    }

    /// Sum of the prices of every entry, counting duplicates.
    ///
    /// # Errors
    ///
    /// See [`Self::items`] and [`total_price`].
    pub fn total(&self) -> Result<Decimal, CartError> {
        total_price(&self.items()?)
    }
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart").field("key", &self.key).finish_non_exhaustive()
    }
}

/// Sums the prices of `items`.
///
/// # Errors
///
/// Returns [`CartError::TotalOverflow`] if the sum does not fit in a
/// [`Decimal`].
pub fn total_price(items: &[Product]) -> Result<Decimal, CartError> {
    checked_total(items).ok_or(CartError::TotalOverflow { count: items.len() })
}

#[cfg(test)]
#[path = "cart_test.rs"]
mod tests;
