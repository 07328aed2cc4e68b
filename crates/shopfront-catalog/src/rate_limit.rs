//! Retry utilities for the catalog client.
//!
//! Provides exponential backoff retry logic for transient HTTP errors.
//! Non-retriable errors (parse failures, 404s, 4xx statuses) are propagated
//! immediately without retrying.

use std::future::Future;
use std::time::Duration;

use crate::error::CatalogError;

/// Returns `true` if `err` represents a transient condition that should be
/// retried after a backoff delay.
///
/// Retriable errors:
/// - [`CatalogError::RateLimited`]: HTTP 429.
/// - [`CatalogError::Http`]: connection reset, timeout and similar.
/// - [`CatalogError::UnexpectedStatus`] with a 5xx status.
fn is_retriable(err: &CatalogError) -> bool {
    match err {
        CatalogError::RateLimited { .. } | CatalogError::Http(_) => true,
        CatalogError::UnexpectedStatus { status, .. } => *status >= 500,
        _ => false,
    }
}

/// Seconds to wait before retry number `attempt + 1`.
///
/// The exponential backoff `backoff_base_secs * 2^attempt`, raised to the
/// server's `Retry-After` for a [`CatalogError::RateLimited`] error.
fn retry_delay_secs(err: &CatalogError, backoff_base_secs: u64, attempt: u32) -> u64 {
    // Cap the shift so extreme configs saturate instead of overflowing.
    let backoff = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
    match err {
        CatalogError::RateLimited {
            retry_after_secs, ..
        } => backoff.max(*retry_after_secs),
        _ => backoff,
    }
}

/// Executes `operation` with exponential backoff retries on transient errors.
///
/// On a retriable error the function sleeps for [`retry_delay_secs`] and
/// tries again, up to `max_retries` additional attempts after the
/// first try. If all retries are exhausted the last error is returned.
///
/// With `max_retries = 3` the operation is attempted at most 4 times total.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, CatalogError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CatalogError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        let delay_secs = retry_delay_secs(&err, backoff_base_secs, attempt);
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient catalog error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
