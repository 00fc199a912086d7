use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row. The password hash never leaves the process.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
