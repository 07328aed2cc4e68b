//! Multi-page product fetch loop for `CatalogClient`.

use std::time::Duration;

use shopfront_core::Product;

use crate::error::CatalogError;

use super::CatalogClient;
use super::MAX_PAGES;

impl CatalogClient {
    /// Fetches every product in the catalog by walking `skip` offsets.
    ///
    /// Requests pages of `page_size` until an empty page, or until the
    /// products seen reach the server's `total`. Products are returned in API
    /// order.
    ///
    /// `inter_request_delay_ms` is the delay between page requests (applied
    /// after every page except the first).
    ///
    /// All-or-nothing: on any page failure the products gathered from earlier
    /// pages are discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_products_page`].
    /// Returns [`CatalogError::PaginationLimit`] if the number of pages exceeds
    /// [`MAX_PAGES`].
    pub async fn fetch_all_products(
        &self,
        base_url: &str,
        page_size: u32,
        inter_request_delay_ms: u64,
    ) -> Result<Vec<Product>, CatalogError> {
        let mut all_products: Vec<Product> = Vec::new();
        let mut skip = 0u64;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(CatalogError::PaginationLimit {
                    base_url: base_url.to_owned(),
                    max_pages: MAX_PAGES,
                });
            }

            if page_count > 1 && inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
            }

            let page = self.fetch_products_page(base_url, page_size, skip).await?;
            // Advance from the requested offset; the echoed `skip` is not trusted.
            let next_skip = skip.saturating_add(page.products.len() as u64);
            let has_more = !page.products.is_empty() && next_skip < page.total;
            skip = next_skip;
            all_products.extend(page.products);

            if !has_more {
                break;
            }
        }

        tracing::debug!(
            base_url,
            pages = page_count,
            products = all_products.len(),
            "fetched full catalog"
        );
        Ok(all_products)
    }
}
