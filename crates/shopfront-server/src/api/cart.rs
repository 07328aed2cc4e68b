use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::{Html, Redirect},
    Extension, Form, Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopfront_cart::cart::total_price;
use shopfront_core::Product;
use shopfront_render::render_cart_page;

use crate::middleware::RequestId;

use super::{map_cart_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct AddToCartRequest {
    pub product_id: i64,
}

#[derive(Debug, Serialize)]
pub(super) struct CartData {
    items: Vec<Product>,
    count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,
}

#[derive(Debug, Serialize)]
pub(super) struct CartCount {
    product_id: i64,
    count: usize,
}

/// Reads the cart on the blocking pool.
async fn load_items(state: &AppState, request_id: &str) -> Result<Vec<Product>, ApiError> {
    let cart = state.cart.clone();
    tokio::task::spawn_blocking(move || cart.items())
        .await
        .map_err(|e| join_error(request_id, &e))?
        .map_err(|e| map_cart_error(request_id.to_owned(), &e))
}

/// Looks `product_id` up in the loaded catalog and appends the record to
/// the cart. Returns the new item count.
async fn add_product(
    state: &AppState,
    request_id: &str,
    product_id: i64,
) -> Result<usize, ApiError> {
    let Some(product) = state.products.iter().find(|p| p.id == product_id).cloned() else {
        tracing::warn!(product_id, "add to cart for unknown product");
        return Err(ApiError::new(
            request_id,
            "not_found",
            format!("product {product_id} is not in the catalog"),
        ));
    };

    let cart = state.cart.clone();
    tokio::task::spawn_blocking(move || cart.add(product))
        .await
        .map_err(|e| join_error(request_id, &e))?
        .map_err(|e| map_cart_error(request_id.to_owned(), &e))
}

/// Maps a body extraction failure to the `bad_request` envelope.
fn body_error(request_id: &str, rejection: &impl std::fmt::Display) -> ApiError {
    tracing::debug!(error = %rejection, "rejected add-to-cart body");
    ApiError::new(request_id, "bad_request", rejection.to_string())
}

fn join_error(request_id: &str, error: &tokio::task::JoinError) -> ApiError {
    tracing::error!(error = %error, "cart task failed");
    ApiError::new(request_id, "internal_error", "cart storage failed")
}

/// `GET /cart`: the cart as an HTML page.
pub(super) async fn cart_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Html<String>, ApiError> {
    let items = load_items(&state, &req_id.0).await?;
    Ok(Html(render_cart_page(&items, &state.page)))
}

/// `POST /cart`: the "Add to Cart" button. Redirects back to the catalog.
pub(super) async fn add_to_cart_form(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    form: Result<Form<AddToCartRequest>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let Form(form) = form.map_err(|e| body_error(&req_id.0, &e))?;
    add_product(&state, &req_id.0, form.product_id).await?;
    Ok(Redirect::to("/"))
}

/// `GET /api/v1/cart`
pub(super) async fn list_cart(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<CartData>>, ApiError> {
    let items = load_items(&state, &req_id.0).await?;
    let total = total_price(&items).map_err(|e| map_cart_error(req_id.0.clone(), &e))?;
    let data = CartData {
        count: items.len(),
        total,
        items,
    };
    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// `POST /api/v1/cart`
pub(super) async fn add_to_cart_json(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<CartCount>>), ApiError> {
    let Json(body) = body.map_err(|e| body_error(&req_id.0, &e))?;
    let count = add_product(&state, &req_id.0, body.product_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: CartCount {
                product_id: body.product_id,
                count,
            },
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}
