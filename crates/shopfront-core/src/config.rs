use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a working
/// config pointed at the public demo catalog.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(invalid(var, format!("expected a boolean, got \"{raw}\""))),
        }
    };

    let env = parse_environment(&or_default("SHOPFRONT_ENV", "development"))?;
    let bind_addr = parse_addr("SHOPFRONT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("SHOPFRONT_LOG_LEVEL", "info");

    let catalog_url = or_default("SHOPFRONT_CATALOG_URL", "https://dummyjson.com");
    if !(catalog_url.starts_with("http://") || catalog_url.starts_with("https://")) {
        return Err(invalid(
            "SHOPFRONT_CATALOG_URL",
            format!("expected an http(s) URL, got \"{catalog_url}\""),
        ));
    }

    let catalog_page_size = parse_u32("SHOPFRONT_CATALOG_PAGE_SIZE", "30")?;
    if catalog_page_size == 0 {
        return Err(invalid(
            "SHOPFRONT_CATALOG_PAGE_SIZE",
            "page size must be at least 1".to_string(),
        ));
    }
    let catalog_fetch_all = parse_bool("SHOPFRONT_CATALOG_FETCH_ALL", "false")?;

    let http_timeout_secs = parse_u64("SHOPFRONT_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SHOPFRONT_USER_AGENT", "shopfront/0.1");
    let max_retries = parse_u32("SHOPFRONT_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("SHOPFRONT_RETRY_BACKOFF_BASE_SECS", "2")?;
    let inter_request_delay_ms = parse_u64("SHOPFRONT_INTER_REQUEST_DELAY_MS", "0")?;

    let storage_path = PathBuf::from(or_default("SHOPFRONT_STORAGE_PATH", "./data/storage.json"));
    let cart_key = or_default("SHOPFRONT_CART_KEY", "cart");
    if cart_key.trim().is_empty() {
        return Err(invalid(
            "SHOPFRONT_CART_KEY",
            "storage key must not be empty".to_string(),
        ));
    }
    let currency_symbol = or_default("SHOPFRONT_CURRENCY_SYMBOL", "₹");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_url,
        catalog_page_size,
        catalog_fetch_all,
        http_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        inter_request_delay_ms,
        storage_path,
        cart_key,
        currency_symbol,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SHOPFRONT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
