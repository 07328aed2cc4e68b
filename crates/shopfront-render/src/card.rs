use serde::Serialize;
use shopfront_core::{checked_total, Product};

/// Alt text of every card image.
pub const IMAGE_ALT: &str = "broken image";

/// Label of the card's add-to-cart button.
pub const ADD_TO_CART_LABEL: &str = "Add to Cart";

/// The fixed set of elements shown for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub product_id: i64,
    pub image_src: String,
    pub image_alt: &'static str,
    pub name: String,
    pub category: String,
    /// Currency symbol immediately followed by the price, e.g. `"₹549"`.
    pub price_label: String,
    pub button_label: &'static str,
}

impl ProductCard {
    #[must_use]
    pub fn from_product(product: &Product, currency_symbol: &str) -> Self {
        Self {
            product_id: product.id,
            image_src: product.thumbnail.clone(),
            image_alt: IMAGE_ALT,
            name: product.title.clone(),
            category: product.category.clone(),
            price_label: product.price_label(currency_symbol),
            button_label: ADD_TO_CART_LABEL,
        }
    }

    /// Builds one card per product, preserving order.
    #[must_use]
    pub fn from_products(products: &[Product], currency_symbol: &str) -> Vec<Self> {
        products
            .iter()
            .map(|p| Self::from_product(p, currency_symbol))
            .collect()
    }
}

/// Label for the summed price of `items`, e.g. `"₹21"`. A sum outside the
/// decimal range renders as `"unavailable"`.
pub(crate) fn total_label(items: &[Product], currency_symbol: &str) -> String {
    match checked_total(items) {
        Some(total) => format!("{currency_symbol}{}", total.normalize()),
        None => "unavailable".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        serde_json::from_value(serde_json::json!({
            "id": 21,
            "title": "Cucumber",
            "category": "groceries",
            "price": 1.49,
            "thumbnail": "https://cdn.example.com/cucumber.png"
        }))
        .unwrap()
    }

    #[test]
    fn card_maps_product_fields() {
        let card = ProductCard::from_product(&product(), "₹");
        assert_eq!(card.product_id, 21);
        assert_eq!(card.image_src, "https://cdn.example.com/cucumber.png");
        assert_eq!(card.image_alt, "broken image");
        assert_eq!(card.name, "Cucumber");
        assert_eq!(card.category, "groceries");
        assert_eq!(card.price_label, "₹1.49");
        assert_eq!(card.button_label, "Add to Cart");
    }

    #[test]
    fn from_products_preserves_order() {
        let mut second = product();
        second.id = 22;
        let cards = ProductCard::from_products(&[product(), second], "$");
        let ids: Vec<i64> = cards.iter().map(|c| c.product_id).collect();
        assert_eq!(ids, vec![21, 22]);
    }
}
