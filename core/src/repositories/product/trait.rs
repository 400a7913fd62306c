//! Product repository trait defining the interface for product persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::product::{Product, Review};
use crate::errors::DomainError;

/// Repository trait for Product entity persistence operations
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError>;

    /// List products ordered by id
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    /// Create a new product
    async fn create(&self, product: Product) -> Result<Product, DomainError>;

    /// Check whether a product exists
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Fetch the review ratings for a product, used for the derived average
    async fn ratings(&self, product_id: Uuid) -> Result<Vec<i32>, DomainError>;

    /// Attach a review to a product
    async fn add_review(&self, review: Review) -> Result<Review, DomainError>;
}
