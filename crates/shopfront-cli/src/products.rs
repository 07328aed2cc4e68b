//! `products` command: fetch the catalog and render it.

use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use shopfront_catalog::CatalogClient;
use shopfront_core::{AppConfig, Product};
use shopfront_render::{render_catalog_page, render_catalog_text, PageOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

/// Fetches the catalog (first page, or every page when `all` is set) and
/// writes it in `format` to `output` or stdout.
///
/// # Errors
///
/// Returns an error if the catalog cannot be fetched or the output cannot
/// be written.
pub(crate) async fn run_products(
    config: &AppConfig,
    all: bool,
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let client = CatalogClient::from_app_config(config)?;
    let products = if all {
        client
            .fetch_all_products(
                &config.catalog_url,
                config.catalog_page_size,
                config.inter_request_delay_ms,
            )
            .await
    } else {
        client
            .fetch_products_page(&config.catalog_url, config.catalog_page_size, 0)
            .await
            .map(|page| page.products)
    }
    .with_context(|| format!("failed to fetch catalog from {}", config.catalog_url))?;

    tracing::info!(count = products.len(), "catalog fetched");

    let rendered = render(&products, format, &config.currency_symbol)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {} product(s) to {}", products.len(), path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

pub(crate) fn render(
    products: &[Product],
    format: OutputFormat,
    currency_symbol: &str,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_catalog_text(products, currency_symbol),
        OutputFormat::Html => {
            let options = PageOptions {
                currency_symbol: currency_symbol.to_string(),
                ..PageOptions::default()
            };
            render_catalog_page(products, &options)
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(products)?;
            json.push('\n');
            json
        }
    })
}
