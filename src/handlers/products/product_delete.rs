use axum::extract::{Path, State};
use axum::Json;

use crate::database::products::ProductRepository;
use crate::error::ApiError;
use crate::state::AppState;

use super::DeleteProductResponse;

/// DELETE /products/{id} - remove a product, returning the deleted row.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = DeleteProductResponse),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorBody),
        (status = 404, description = "No product with that id", body = crate::error::ErrorBody),
        (status = 500, description = "Database failure", body = crate::error::ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "products"
)]
pub async fn product_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteProductResponse>, ApiError> {
    let repo = ProductRepository::new(state.pool.clone());
    let deleted = repo
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    tracing::info!("Deleted product {}", deleted.id);

    Ok(Json(DeleteProductResponse {
        success: true,
        deleted,
    }))
}
