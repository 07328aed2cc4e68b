use axum::{extract::State, response::Html, Extension, Json};
use shopfront_core::Product;
use shopfront_render::render_catalog_page;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

/// `GET /`: the catalog as a page of product cards.
pub(super) async fn catalog_page(State(state): State<AppState>) -> Html<String> {
    Html(render_catalog_page(&state.products, &state.page))
}

/// `GET /api/v1/products`: the loaded catalog records, unchanged.
pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Product>>> {
    Json(ApiResponse {
        data: state.products.as_ref().clone(),
        meta: ResponseMeta::new(req_id.0),
    })
}
