use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::database::models::Product;
use crate::database::products::ProductRepository;
use crate::error::ApiError;
use crate::extractors::extract_validated_json;
use crate::state::AppState;

use super::ProductInput;

/// PUT /products/{id} - full replace of name and price.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid name or price", body = crate::error::ErrorBody),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorBody),
        (status = 404, description = "No product with that id", body = crate::error::ErrorBody),
        (status = 500, description = "Database failure", body = crate::error::ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "products"
)]
pub async fn product_put(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let req = extract_validated_json(body)?;

    let repo = ProductRepository::new(state.pool.clone());
    let product = repo
        .update(id, &req.name, req.price)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    tracing::info!("Updated product {}", product.id);

    Ok(Json(product))
}
