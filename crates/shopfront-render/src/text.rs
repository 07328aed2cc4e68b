use std::fmt::Write;

use shopfront_core::Product;

use crate::card::{total_label, ProductCard};

/// Renders products as plain-text cards for a terminal, one block per
/// product in the order given.
#[must_use]
pub fn render_catalog_text(products: &[Product], currency_symbol: &str) -> String {
    let mut out = String::new();
    for card in ProductCard::from_products(products, currency_symbol) {
        let _ = writeln!(out, "[{}] {}", card.product_id, card.name);
        let _ = writeln!(out, "    category: {}", card.category);
        let _ = writeln!(out, "    price:    {}", card.price_label);
        let _ = writeln!(out, "    image:    {}", card.image_src);
        out.push('\n');
    }
    let _ = writeln!(out, "{} product(s)", products.len());
    out
}

/// Renders cart entries in insertion order followed by a count and total.
#[must_use]
pub fn render_cart_text(items: &[Product], currency_symbol: &str) -> String {
    let mut out = String::new();
    if items.is_empty() {
        out.push_str("cart is empty\n");
        return out;
    }
    for (position, item) in items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. [{}] {}  {}",
            position + 1,
            item.id,
            item.title,
            item.price_label(currency_symbol)
        );
    }
    let _ = writeln!(
        out,
        "{} item(s), total {}",
        items.len(),
        total_label(items, currency_symbol)
    );
    out
}
