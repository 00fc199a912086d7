use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::auth;
use crate::database::users::UserRepository;
use crate::database::DatabaseError;
use crate::error::ApiError;
use crate::extractors::extract_validated_json;
use crate::state::AppState;

use super::{RegisterRequest, RegisterResponse};

/// POST /auth/register - Create a user account.
///
/// The password is stored as a salted bcrypt hash; the plaintext never
/// leaves this handler.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = RegisterResponse),
        (status = 400, description = "Missing or malformed fields", body = crate::error::ErrorBody),
        (status = 409, description = "Email already registered", body = crate::error::ErrorBody),
        (status = 500, description = "Registration failed", body = crate::error::ErrorBody),
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let req = extract_validated_json(body)?;

    let password_hash =
        auth::hash_password(&req.password, state.config.security.bcrypt_cost).map_err(|err| {
            tracing::error!("Password hashing failed: {}", err);
            ApiError::internal_server_error("Registration failed")
        })?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .insert(&req.email, &password_hash)
        .await
        .map_err(|err| match err {
            DatabaseError::UniqueViolation(_) => {
                tracing::warn!("Registration with already-used email: {}", req.email);
                ApiError::conflict("Email already registered")
            }
            other => other.into(),
        })?;

    tracing::info!("Registered user {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: user.id,
            email: user.email,
        }),
    ))
}
