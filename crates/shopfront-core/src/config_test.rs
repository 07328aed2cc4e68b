use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn config_with(pairs: &[(&'static str, &'static str)]) -> Result<AppConfig, ConfigError> {
    let map: HashMap<&str, &str> = pairs.iter().copied().collect();
    build_app_config(lookup_from_map(&map))
}

fn assert_invalid(result: Result<AppConfig, ConfigError>, expected_var: &str) {
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == expected_var),
        "expected InvalidEnvVar({expected_var}), got: {result:?}"
    );
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SHOPFRONT_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let cfg = config_with(&[]).expect("empty env should use defaults");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_url, "https://dummyjson.com");
    assert_eq!(cfg.catalog_page_size, 30);
    assert!(!cfg.catalog_fetch_all);
    assert_eq!(cfg.http_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "shopfront/0.1");
    assert_eq!(cfg.max_retries, 3);
    assert_eq!(cfg.retry_backoff_base_secs, 2);
    assert_eq!(cfg.inter_request_delay_ms, 0);
    assert_eq!(cfg.storage_path.to_str(), Some("./data/storage.json"));
    assert_eq!(cfg.cart_key, "cart");
    assert_eq!(cfg.currency_symbol, "₹");
}

#[test]
fn build_app_config_applies_overrides() {
    let cfg = config_with(&[
        ("SHOPFRONT_ENV", "production"),
        ("SHOPFRONT_BIND_ADDR", "127.0.0.1:8080"),
        ("SHOPFRONT_CATALOG_URL", "http://localhost:9999/api"),
        ("SHOPFRONT_CATALOG_PAGE_SIZE", "100"),
        ("SHOPFRONT_CATALOG_FETCH_ALL", "true"),
        ("SHOPFRONT_STORAGE_PATH", "/tmp/shopfront.json"),
        ("SHOPFRONT_CART_KEY", "basket"),
        ("SHOPFRONT_CURRENCY_SYMBOL", "$"),
    ])
    .expect("overrides should parse");
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.catalog_url, "http://localhost:9999/api");
    assert_eq!(cfg.catalog_page_size, 100);
    assert!(cfg.catalog_fetch_all);
    assert_eq!(cfg.storage_path.to_str(), Some("/tmp/shopfront.json"));
    assert_eq!(cfg.cart_key, "basket");
    assert_eq!(cfg.currency_symbol, "$");
}

#[test]
fn build_app_config_fails_with_unknown_env() {
    assert_invalid(config_with(&[("SHOPFRONT_ENV", "staging")]), "SHOPFRONT_ENV");
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    assert_invalid(
        config_with(&[("SHOPFRONT_BIND_ADDR", "not-a-socket-addr")]),
        "SHOPFRONT_BIND_ADDR",
    );
}

#[test]
fn build_app_config_fails_with_non_http_catalog_url() {
    assert_invalid(
        config_with(&[("SHOPFRONT_CATALOG_URL", "ftp://example.com")]),
        "SHOPFRONT_CATALOG_URL",
    );
}

#[test]
fn build_app_config_fails_with_zero_page_size() {
    assert_invalid(
        config_with(&[("SHOPFRONT_CATALOG_PAGE_SIZE", "0")]),
        "SHOPFRONT_CATALOG_PAGE_SIZE",
    );
}

#[test]
fn build_app_config_fails_with_invalid_fetch_all() {
    assert_invalid(
        config_with(&[("SHOPFRONT_CATALOG_FETCH_ALL", "sometimes")]),
        "SHOPFRONT_CATALOG_FETCH_ALL",
    );
}

#[test]
fn build_app_config_fails_with_invalid_timeout() {
    assert_invalid(
        config_with(&[("SHOPFRONT_HTTP_TIMEOUT_SECS", "not-a-number")]),
        "SHOPFRONT_HTTP_TIMEOUT_SECS",
    );
}

#[test]
fn build_app_config_fails_with_invalid_max_retries() {
    assert_invalid(
        config_with(&[("SHOPFRONT_MAX_RETRIES", "-1")]),
        "SHOPFRONT_MAX_RETRIES",
    );
}

#[test]
fn build_app_config_fails_with_blank_cart_key() {
    assert_invalid(config_with(&[("SHOPFRONT_CART_KEY", "  ")]), "SHOPFRONT_CART_KEY");
}
