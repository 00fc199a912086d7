use sqlx::PgPool;
use std::sync::Arc;

use crate::config::AppConfig;

/// Shared application state threaded through every handler.
///
/// Constructed once at startup; the pool handle and config are the only
/// process-wide resources, and both are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}
