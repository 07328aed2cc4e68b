//! `cart` commands. The cart lives in the configured storage file, so
//! additions made here show up in the server and vice versa.

use std::sync::Arc;

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use shopfront_cart::{Cart, FileStore};
use shopfront_catalog::CatalogClient;
use shopfront_core::{AppConfig, Product};
use shopfront_render::render_cart_text;

/// Sub-commands available under `cart`.
#[derive(Debug, Subcommand)]
pub enum CartCommands {
    /// Fetch a product by id and append it to the cart
    Add {
        /// Catalog id of the product
        product_id: i64,
    },
    /// Show the cart in the order items were added
    List {
        #[arg(long, value_enum, default_value_t = CartFormat::Text)]
        format: CartFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CartFormat {
    Text,
    Json,
}

pub(crate) fn open_cart(config: &AppConfig) -> Cart {
    Cart::new(
        Arc::new(FileStore::new(&config.storage_path)),
        config.cart_key.clone(),
    )
}

pub(crate) async fn run_cart(config: &AppConfig, command: CartCommands) -> anyhow::Result<()> {
    let cart = open_cart(config);
    match command {
        CartCommands::Add { product_id } => {
            let client = CatalogClient::from_app_config(config)?;
            let product = client
                .fetch_product(&config.catalog_url, product_id)
                .await
                .with_context(|| format!("failed to fetch product {product_id}"))?;
            let count = add_to_cart(&cart, product)?;
            println!("added product {product_id} to cart ({count} item(s))");
        }
        CartCommands::List { format } => {
            let items = cart.items().context("failed to read cart")?;
            print!("{}", render_items(&items, format, &config.currency_symbol)?);
        }
    }
    Ok(())
}

pub(crate) fn add_to_cart(cart: &Cart, product: Product) -> anyhow::Result<usize> {
    let product_id = product.id;
    cart.add(product)
        .with_context(|| format!("failed to add product {product_id} to cart"))
}

pub(crate) fn render_items(
    items: &[Product],
    format: CartFormat,
    currency_symbol: &str,
) -> anyhow::Result<String> {
    Ok(match format {
        CartFormat::Text => render_cart_text(items, currency_symbol),
        CartFormat::Json => {
            let mut json = serde_json::to_string_pretty(items)?;
            json.push('\n');
            json
        }
    })
}
