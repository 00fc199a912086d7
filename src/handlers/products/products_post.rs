use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::database::models::Product;
use crate::database::products::ProductRepository;
use crate::error::ApiError;
use crate::extractors::extract_validated_json;
use crate::state::AppState;

use super::ProductInput;

/// POST /products - create a product, returning the row with its
/// generated id.
#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid name or price", body = crate::error::ErrorBody),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorBody),
        (status = 500, description = "Database failure", body = crate::error::ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "products"
)]
pub async fn products_post(
    State(state): State<AppState>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let req = extract_validated_json(body)?;

    let repo = ProductRepository::new(state.pool.clone());
    let product = repo.insert(&req.name, req.price).await?;

    tracing::info!("Created product {}", product.id);

    Ok((StatusCode::CREATED, Json(product)))
}
