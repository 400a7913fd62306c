//! MySQL implementation of the ProductRepository trait.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fh_core::domain::entities::product::{Product, Review};
use fh_core::errors::DomainError;
use fh_core::repositories::ProductRepository;

use super::{map_query_error, parse_uuid};

/// MySQL implementation of ProductRepository
///
/// Prices live in a DECIMAL(10,2) column; the scale survives the round
/// trip through `rust_decimal`.
pub struct MySqlProductRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlProductRepository {
    /// Create a new MySQL product repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Product entity
    fn row_to_product(row: &sqlx::mysql::MySqlRow) -> Result<Product, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Product {
            id: parse_uuid(&id, "id")?,
            title: row.try_get("title").map_err(|e| DomainError::Internal {
                message: format!("Failed to get title: {}", e),
            })?,
            image_url: row
                .try_get("image_url")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get image_url: {}", e),
                })?,
            price: row
                .try_get::<Decimal, _>("price")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get price: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let query = "SELECT id, title, image_url, price FROM products WHERE id = ? LIMIT 1";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to find product"))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_product(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let query = "SELECT id, title, image_url, price FROM products ORDER BY id";

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to list products"))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        let query = "INSERT INTO products (id, title, image_url, price) VALUES (?, ?, ?, ?)";

        sqlx::query(query)
            .bind(product.id.to_string())
            .bind(&product.title)
            .bind(&product.image_url)
            .bind(product.price)
            .execute(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to create product"))?;

        Ok(product)
    }

    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM products WHERE id = ?) AS found";

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to check product existence"))?;

        let found: i8 = row.try_get("found").map_err(|e| DomainError::Internal {
            message: format!("Failed to get existence result: {}", e),
        })?;

        Ok(found == 1)
    }

    async fn ratings(&self, product_id: Uuid) -> Result<Vec<i32>, DomainError> {
        let query = "SELECT rating FROM reviews WHERE product_id = ?";

        let ratings = sqlx::query_scalar::<_, i32>(query)
            .bind(product_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to fetch ratings"))?;

        Ok(ratings)
    }

    async fn add_review(&self, review: Review) -> Result<Review, DomainError> {
        let query = "INSERT INTO reviews (id, product_id, rating) VALUES (?, ?, ?)";

        sqlx::query(query)
            .bind(review.id.to_string())
            .bind(review.product_id.to_string())
            .bind(review.rating)
            .execute(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to add review"))?;

        Ok(review)
    }
}
