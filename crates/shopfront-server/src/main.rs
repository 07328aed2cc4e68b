mod api;
mod middleware;

use std::sync::Arc;

use shopfront_cart::{Cart, FileStore};
use shopfront_catalog::CatalogClient;
use shopfront_core::{AppConfig, Product};
use shopfront_render::PageOptions;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = shopfront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = %config.env, catalog_url = %config.catalog_url, "starting shopfront server");

    let products = load_catalog(&config).await?;
    tracing::info!(count = products.len(), "catalog loaded");

    let store = FileStore::new(&config.storage_path);
    let cart = Cart::new(Arc::new(store), config.cart_key.clone());

    let state = AppState {
        products: Arc::new(products),
        cart: Arc::new(cart),
        page: Arc::new(PageOptions {
            currency_symbol: config.currency_symbol.clone(),
            ..PageOptions::default()
        }),
    };
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Fetches the catalog once. A failure here aborts startup.
async fn load_catalog(config: &AppConfig) -> anyhow::Result<Vec<Product>> {
    let client = CatalogClient::from_app_config(config)?;
    let products = if config.catalog_fetch_all {
        client
            .fetch_all_products(
                &config.catalog_url,
                config.catalog_page_size,
                config.inter_request_delay_ms,
            )
            .await?
    } else {
        client
            .fetch_products_page(&config.catalog_url, config.catalog_page_size, 0)
            .await?
            .products
    };
    Ok(products)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
