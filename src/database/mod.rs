pub mod models;
pub mod pool;
pub mod products;
pub mod users;

pub use pool::{create_pool, health_check, DatabaseError};
