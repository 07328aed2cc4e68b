//! Presentation of catalog products as cards.
//!
//! [`ProductCard`] fixes the element set of one card; the [`html`] and
//! [`text`] modules lay cards out for the browser and the terminal.

pub mod card;
mod escape;
pub mod html;
pub mod text;

pub use card::ProductCard;
pub use escape::escape_html;
pub use html::{render_card_html, render_cart_page, render_catalog_page, PageOptions};
pub use text::{render_cart_text, render_catalog_text};
