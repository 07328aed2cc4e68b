use super::*;

#[test]
fn products_url_first_page() {
    let url = CatalogClient::products_url("https://dummyjson.com", 30, 0).unwrap();
    assert_eq!(url, "https://dummyjson.com/products?limit=30&skip=0");
}

#[test]
fn products_url_with_offset() {
    let url = CatalogClient::products_url("https://dummyjson.com", 30, 60).unwrap();
    assert_eq!(url, "https://dummyjson.com/products?limit=30&skip=60");
}

#[test]
fn products_url_ignores_trailing_slash() {
    let url = CatalogClient::products_url("https://dummyjson.com/", 10, 0).unwrap();
    assert_eq!(url, "https://dummyjson.com/products?limit=10&skip=0");
}

#[test]
fn products_url_keeps_path_prefix() {
    let url = CatalogClient::products_url("http://localhost:8080/api/v2/", 5, 0).unwrap();
    assert_eq!(url, "http://localhost:8080/api/v2/products?limit=5&skip=0");
}

#[test]
fn products_url_rejects_invalid_base() {
    let err = CatalogClient::products_url("not-a-url", 30, 0).unwrap_err();
    assert!(
        matches!(err, CatalogError::InvalidBaseUrl { .. }),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}

#[test]
fn products_url_rejects_non_http_scheme() {
    let err = CatalogClient::products_url("ftp://dummyjson.com", 30, 0).unwrap_err();
    assert!(
        matches!(err, CatalogError::InvalidBaseUrl { .. }),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}

#[test]
fn endpoint_url_appends_product_id() {
    let url = endpoint_url("https://dummyjson.com", &["products", "12"]).unwrap();
    assert_eq!(url.as_str(), "https://dummyjson.com/products/12");
}

#[test]
fn extract_domain_strips_scheme_and_path() {
    assert_eq!(extract_domain("https://dummyjson.com"), "dummyjson.com");
    assert_eq!(
        extract_domain("http://catalog.example.com/api"),
        "catalog.example.com"
    );
}

#[test]
fn extract_domain_fallback_when_unparseable() {
    assert_eq!(extract_domain("dummyjson.com"), "dummyjson.com");
}
