mod product_delete;
mod product_get;
mod product_put;
mod products_get;
mod products_post;

pub use product_delete::*;
pub use product_get::*;
pub use product_put::*;
pub use products_get::*;
pub use products_post::*;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::models::Product;
use crate::extractors::Validate;

/// Request body shared by create and update. A missing or non-string name,
/// or a non-numeric price, already fails JSON extraction; the rules here
/// cover what deserialization cannot.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
}

impl Validate for ProductInput {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if !self.price.is_finite() {
            return Err("price must be a number".to_string());
        }
        if self.price < 0.0 {
            return Err("price must not be negative".to_string());
        }
        Ok(())
    }
}

/// Response body for DELETE /products/{id}.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteProductResponse {
    pub success: bool,
    pub deleted: Product,
}
