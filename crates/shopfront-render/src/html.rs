//! HTML rendering of the catalog and cart pages.
//!
//! Markup is built with `fmt::Write` into a single `String`. Every
//! interpolated value goes through [`escape_html`].

use std::fmt::Write;

use shopfront_core::Product;

use crate::card::{total_label, ProductCard};
use crate::escape::escape_html;

const STYLE: &str = "\
body{font-family:sans-serif;margin:0;padding:1rem;background:#f6f6f6}\
header{display:flex;justify-content:space-between;align-items:center}\
.product-list{display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:1rem}\
.product-card{background:#fff;border-radius:8px;padding:1rem;text-align:center}\
.product-card img{max-width:100%;height:150px;object-fit:contain}\
.product-name{font-weight:bold}\
.product-cat{color:#666;text-transform:capitalize}\
.price{color:#b12704}\
.btn-cart{cursor:pointer;padding:.5rem 1rem}";

/// Page-level settings shared by the catalog and cart pages.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
    pub currency_symbol: String,
    /// Form action the "Add to Cart" buttons post to.
    pub add_to_cart_action: String,
    /// Link to the cart page shown in the header, if any.
    pub cart_href: Option<String>,
    /// Link back to the catalog shown on the cart page, if any.
    pub catalog_href: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Products".to_string(),
            currency_symbol: "₹".to_string(),
            add_to_cart_action: "/cart".to_string(),
            cart_href: Some("/cart".to_string()),
            catalog_href: Some("/".to_string()),
        }
    }
}

/// Renders one `div.product-card`: image, name, category, price and an
/// "Add to Cart" button that posts the product id to `action`.
#[must_use]
pub fn render_card_html(card: &ProductCard, action: &str) -> String {
    let mut out = String::new();
    write_card(&mut out, card, action);
    out
}

fn write_card(out: &mut String, card: &ProductCard, action: &str) {
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        concat!(
            "<div class=\"product-card\">",
            "<img src=\"{src}\" alt=\"{alt}\">",
            "<p class=\"product-name\">{name}</p>",
            "<p class=\"product-cat\">{category}</p>",
            "<p class=\"price\">{price}</p>",
            "<form method=\"post\" action=\"{action}\">",
            "<input type=\"hidden\" name=\"product_id\" value=\"{id}\">",
            "<button type=\"submit\" class=\"btn-cart\">{label}</button>",
            "</form>",
            "</div>"
        ),
        src = escape_html(&card.image_src),
        alt = escape_html(card.image_alt),
        name = escape_html(&card.name),
        category = escape_html(&card.category),
        price = escape_html(&card.price_label),
        action = escape_html(action),
        id = card.product_id,
        label = escape_html(card.button_label),
    );
}

fn write_document_start(out: &mut String, title: &str) {
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n",
        title = escape_html(title),
    );
}

fn write_document_end(out: &mut String) {
    out.push_str("</body>\n</html>\n");
}

/// Renders the catalog as a full HTML document. Cards appear inside the
/// `div.product-list` mount point in the order given.
#[must_use]
pub fn render_catalog_page(products: &[Product], options: &PageOptions) -> String {
    let cards = ProductCard::from_products(products, &options.currency_symbol);

    let mut out = String::new();
    write_document_start(&mut out, &options.title);
    let _ = write!(out, "<header><h1>{}</h1>", escape_html(&options.title));
    if let Some(href) = &options.cart_href {
        let _ = write!(out, "<a class=\"cart-link\" href=\"{}\">Cart</a>", escape_html(href));
    }
    out.push_str("</header>\n<div class=\"product-list\">\n");
    for card in &cards {
        write_card(&mut out, card, &options.add_to_cart_action);
        out.push('\n');
    }
    out.push_str("</div>\n");
    write_document_end(&mut out);
    out
}

/// Renders the cart entries, in insertion order, with the item count and
/// the total price.
#[must_use]
pub fn render_cart_page(items: &[Product], options: &PageOptions) -> String {
    let symbol = &options.currency_symbol;

    let mut out = String::new();
    write_document_start(&mut out, "Cart");
    out.push_str("<header><h1>Cart</h1>");
    if let Some(href) = &options.catalog_href {
        let _ = write!(
            out,
            "<a class=\"catalog-link\" href=\"{}\">Continue shopping</a>",
            escape_html(href)
        );
    }
    out.push_str("</header>\n");

    if items.is_empty() {
        out.push_str("<p class=\"cart-empty\">Your cart is empty.</p>\n");
    } else {
        out.push_str("<ol class=\"cart-items\">\n");
        for item in items {
            let _ = writeln!(
                out,
                "<li class=\"cart-item\"><img src=\"{src}\" alt=\"{alt}\">\
                 <span class=\"product-name\">{name}</span> \
                 <span class=\"price\">{price}</span></li>",
                src = escape_html(&item.thumbnail),
                alt = escape_html(crate::card::IMAGE_ALT),
                name = escape_html(&item.title),
                price = escape_html(&item.price_label(symbol)),
            );
        }
        out.push_str("</ol>\n");
    }

    let _ = writeln!(
        out,
        "<p class=\"cart-summary\"><span class=\"cart-count\">{count} item(s)</span> \
         <span class=\"cart-total\">Total: {total}</span></p>",
        count = items.len(),
        total = escape_html(&total_label(items, symbol)),
    );
    write_document_end(&mut out);
    out
}
