use axum::extract::State;
use axum::Json;

use crate::database::models::Product;
use crate::database::products::ProductRepository;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /products - list all products. No filtering, pagination, or
/// ordering guarantee.
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorBody),
        (status = 500, description = "Database failure", body = crate::error::ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "products"
)]
pub async fn products_get(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let repo = ProductRepository::new(state.pool.clone());
    let products = repo.list().await?;

    Ok(Json(products))
}
