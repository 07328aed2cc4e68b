use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the product-listing API; `/products` is appended.
    pub catalog_url: String,
    /// Number of products requested per page.
    pub catalog_page_size: u32,
    /// When `true` the server walks every page at startup instead of
    /// loading only the first one.
    pub catalog_fetch_all: bool,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    pub inter_request_delay_ms: u64,
    /// JSON file backing the key/value store that holds the cart.
    pub storage_path: PathBuf,
    /// Storage key the cart list lives under.
    pub cart_key: String,
    pub currency_symbol: String,
}
