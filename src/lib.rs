pub mod auth;
pub mod config;
pub mod database;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Auth routes (register/login public, whoami gated)
        .merge(auth_routes(&state))
        // Product CRUD (writes gated; reads gated unless configured public)
        .merge(product_routes(&state))
        // Swagger UI + OpenAPI document
        .merge(docs::swagger_ui())
        .fallback(fallback)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}

fn auth_routes(state: &AppState) -> Router<AppState> {
    use crate::handlers::auth;

    let protected = Router::new()
        .route("/auth/whoami", get(auth::whoami))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::auth::jwt_auth_middleware,
        ));

    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .merge(protected)
}

fn product_routes(state: &AppState) -> Router<AppState> {
    use crate::handlers::products;

    let auth_layer = from_fn_with_state(state.clone(), middleware::auth::jwt_auth_middleware);

    let writes = Router::new()
        .route("/products", post(products::products_post))
        .route(
            "/products/:id",
            put(products::product_put).delete(products::product_delete),
        )
        .route_layer(auth_layer.clone());

    let mut reads = Router::new()
        .route("/products", get(products::products_get))
        .route("/products/:id", get(products::product_get));

    if state.config.security.protect_reads {
        reads = reads.route_layer(auth_layer);
    }

    writes.merge(reads)
}

async fn root() -> &'static str {
    "Catalog API is running"
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}

async fn fallback() -> ApiError {
    ApiError::not_found("Route not found")
}
