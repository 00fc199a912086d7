use axum::extract::State;
use axum::{Extension, Json};

use crate::database::users::UserRepository;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::WhoamiResponse;

/// GET /auth/whoami - Return the authenticated user from a fresh read.
#[utoipa::path(
    get,
    path = "/auth/whoami",
    responses(
        (status = 200, description = "Current user", body = WhoamiResponse),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorBody),
        (status = 404, description = "User no longer exists", body = crate::error::ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn whoami(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<WhoamiResponse>, ApiError> {
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(auth_user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(WhoamiResponse {
        id: user.id,
        email: user.email,
    }))
}
