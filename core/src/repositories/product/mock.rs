//! In-memory implementation of ProductRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::product::{Product, Review};
use crate::errors::DomainError;

use super::r#trait::ProductRepository;

/// Mock product repository for testing
pub struct MockProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl MockProductRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
            reviews: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for MockProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by_key(|p| p.id);
        Ok(all)
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        let products = self.products.read().await;
        Ok(products.contains_key(&id))
    }

    async fn ratings(&self, product_id: Uuid) -> Result<Vec<i32>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .map(|r| r.rating)
            .collect())
    }

    async fn add_review(&self, review: Review) -> Result<Review, DomainError> {
        let products = self.products.read().await;
        if !products.contains_key(&review.product_id) {
            return Err(DomainError::NotFound {
                resource: "product".to_string(),
            });
        }
        drop(products);

        let mut reviews = self.reviews.write().await;
        reviews.push(review.clone());
        Ok(review)
    }
}
