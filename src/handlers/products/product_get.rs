use axum::extract::{Path, State};
use axum::Json;

use crate::database::models::Product;
use crate::database::products::ProductRepository;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /products/{id} - show a single product by id.
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorBody),
        (status = 404, description = "No product with that id", body = crate::error::ErrorBody),
        (status = 500, description = "Database failure", body = crate::error::ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "products"
)]
pub async fn product_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, ApiError> {
    let repo = ProductRepository::new(state.pool.clone());
    let product = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    Ok(Json(product))
}
