//! HTTP client for the remote product-listing API.

mod fetch_all;
mod url;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use shopfront_core::{Product, ProductsPage};

use crate::error::CatalogError;
use crate::rate_limit::retry_with_backoff;

use self::url::{endpoint_url, extract_domain};

/// Maximum number of pages to fetch before returning an error.
/// Prevents infinite loops on a server whose `total` never converges.
///
/// Each page request may be retried up to `max_retries` times, so the
/// worst-case request count is `MAX_PAGES * (1 + max_retries)`.
pub(super) const MAX_PAGES: usize = 200;

/// HTTP client for the `GET /products` catalog endpoints.
///
/// Handles rate limiting (429), not-found (404), and other non-2xx responses
/// as typed errors. Transient errors (429, 5xx, network failures) are retried
/// with exponential backoff up to `max_retries` additional attempts.
pub struct CatalogClient {
    pub(super) client: Client,
    /// Maximum number of retry attempts after the first failure.
    pub(super) max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    pub(super) backoff_base_secs: u64,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with configured timeout, `User-Agent`, and retry policy.
    ///
    /// `max_retries` is the number of additional attempts after the first failure for
    /// retriable errors. Set to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Builds a client from the HTTP settings of an [`shopfront_core::AppConfig`].
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_app_config(config: &shopfront_core::AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            config.http_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_secs,
        )
    }

    /// Fetches one page of the product listing, `limit` products starting at
    /// offset `skip`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidBaseUrl`]: `base_url` is not an http(s) URL.
    /// - [`CatalogError::RateLimited`]: HTTP 429 after all retries exhausted.
    /// - [`CatalogError::NotFound`]: HTTP 404 (not retried).
    /// - [`CatalogError::UnexpectedStatus`]: any other non-2xx status (5xx retried, 4xx not).
    /// - [`CatalogError::Http`]: network failure after all retries exhausted.
    /// - [`CatalogError::Deserialize`]: body is not a products page (not retried).
    pub async fn fetch_products_page(
        &self,
        base_url: &str,
        limit: u32,
        skip: u64,
    ) -> Result<ProductsPage, CatalogError> {
        let url = Self::products_url(base_url, limit, skip)?;
        self.get_json(base_url, url, "products page").await
    }

    /// Fetches a single product record by id.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_products_page`]; an unknown id surfaces as
    /// [`CatalogError::NotFound`].
    pub async fn fetch_product(&self, base_url: &str, id: i64) -> Result<Product, CatalogError> {
        let id_segment = id.to_string();
        let url = endpoint_url(base_url, &["products", id_segment.as_str()])?;
        self.get_json(base_url, url.to_string(), &format!("product {id}"))
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        base_url: &str,
        url: String,
        what: &str,
    ) -> Result<T, CatalogError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                tracing::debug!(url = %url, "fetching {what}");
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);

                    return Err(CatalogError::RateLimited {
                        domain: extract_domain(base_url),
                        retry_after_secs,
                    });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(CatalogError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(CatalogError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<T>(&body).map_err(|e| CatalogError::Deserialize {
                    context: format!("{what} from {url}"),
                    source: e,
                })
            }
        })
        .await
    }

    /// Builds the `{base}/products?limit=..&skip=..` listing URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] if `base_url` cannot be parsed.
    fn products_url(base_url: &str, limit: u32, skip: u64) -> Result<String, CatalogError> {
        let mut url = endpoint_url(base_url, &["products"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("skip", &skip.to_string());
        Ok(url.to_string())
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
