//! URL building and host extraction for the catalog client.

use crate::error::CatalogError;

/// Parses `base_url` and appends `segments` to its path.
///
/// The base may carry a path prefix (`https://host/api`); trailing slashes
/// are ignored so `https://host/` and `https://host` behave the same.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidBaseUrl`] if `base_url` is not an absolute
/// http(s) URL.
pub(crate) fn endpoint_url(base_url: &str, segments: &[&str]) -> Result<reqwest::Url, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };

    let mut url = reqwest::Url::parse(base_url.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }

    url.path_segments_mut()
        .map_err(|()| invalid("URL cannot be a base".to_owned()))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Extracts the hostname from a catalog URL for use in error messages.
///
/// Falls back to the full URL string if parsing fails.
pub(super) fn extract_domain(base_url: &str) -> String {
    reqwest::Url::parse(base_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| base_url.to_owned())
}
