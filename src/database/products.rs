use sqlx::PgPool;

use super::models::Product;
use super::pool::DatabaseError;

/// Data access for the `products` table. One parameterized statement per
/// operation; connection reuse is entirely the pool's concern.
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Product>, DatabaseError> {
        let products = sqlx::query_as::<_, Product>("SELECT id, name, price FROM products")
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DatabaseError> {
        let product =
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(product)
    }

    pub async fn insert(&self, name: &str, price: f64) -> Result<Product, DatabaseError> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id, name, price",
        )
        .bind(name)
        .bind(price)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Full replace of name and price. `None` means no row matched.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        price: f64,
    ) -> Result<Option<Product>, DatabaseError> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $1, price = $2 WHERE id = $3 RETURNING id, name, price",
        )
        .bind(name)
        .bind(price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Delete by id, returning the removed row. `None` means no row matched.
    pub async fn delete(&self, id: i32) -> Result<Option<Product>, DatabaseError> {
        let product = sqlx::query_as::<_, Product>(
            "DELETE FROM products WHERE id = $1 RETURNING id, name, price",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }
}
