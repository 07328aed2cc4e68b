use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product record as served by the catalog API.
///
/// The record is consumed as-is: fields the storefront does not use are
/// preserved in [`Product::extra`] so that a product written to the cart
/// serializes back to the same JSON it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    /// Category slug, e.g. `"beauty"`. Empty when the API omits it.
    #[serde(default)]
    pub category: String,
    /// Unit price. Serialized as a JSON number, matching the API.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Thumbnail image URL shown on the product card.
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(
        rename = "discountPercentage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Every other field present on the wire, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Returns the price label shown on a card: the currency symbol
    /// immediately followed by the price, e.g. `"₹549"` or `"₹9.99"`.
    #[must_use]
    pub fn price_label(&self, currency_symbol: &str) -> String {
        format!("{currency_symbol}{}", self.price.normalize())
    }
}

/// Sums the prices of `items`, counting duplicates.
///
/// Returns `None` when the sum does not fit in a [`Decimal`].
#[must_use]
pub fn checked_total(items: &[Product]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.price))
}

/// One page of the `GET /products` listing.
///
/// Only `products` is required; the paging counters default to `0` so
/// that endpoints which return a bare `{"products": [...]}` still parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

impl ProductsPage {
    /// Returns `true` when the server reports more products beyond this page.
    ///
    /// An empty page always ends pagination, even when `total` claims
    /// otherwise.
    #[must_use]
    pub fn has_more(&self) -> bool {
        !self.products.is_empty() && self.next_skip() < self.total
    }

    /// Offset of the first product on the following page, saturating at
    /// `u64::MAX`.
    #[must_use]
    pub fn next_skip(&self) -> u64 {
        self.skip.saturating_add(self.products.len() as u64)
    }
}
