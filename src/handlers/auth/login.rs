use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::auth;
use crate::database::users::UserRepository;
use crate::error::ApiError;
use crate::extractors::extract_validated_json;
use crate::state::AppState;

use super::{LoginRequest, LoginResponse};

/// POST /auth/login - Verify credentials and issue a signed token.
///
/// Unknown email answers 404, a failed hash comparison 400; a token is
/// only ever issued after both checks pass.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 400, description = "Missing fields or invalid password", body = crate::error::ErrorBody),
        (status = 404, description = "No user with that email", body = crate::error::ErrorBody),
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let req = extract_validated_json(body)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.find_by_email(&req.email).await?.ok_or_else(|| {
        tracing::warn!("Login attempt for unknown email: {}", req.email);
        ApiError::not_found("User not found")
    })?;

    let valid = auth::verify_password(&req.password, &user.password_hash).map_err(|err| {
        tracing::error!("Password verification error: {}", err);
        ApiError::internal_server_error("Login failed")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user {}", user.id);
        return Err(ApiError::bad_request("Invalid password"));
    }

    let token = auth::generate_jwt(
        user.id,
        &state.config.security.jwt_secret,
        state.config.security.jwt_expiry_days,
    )
    .map_err(|err| {
        tracing::error!("Failed to issue token: {}", err);
        ApiError::internal_server_error("Login failed")
    })?;

    tracing::info!("User {} logged in", user.id);

    Ok(Json(LoginResponse { token }))
}
