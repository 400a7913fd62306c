//! Catalog service implementation

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use fh_shared::utils::validation::{is_valid_email, normalize_email};

use crate::domain::entities::audit::{ChangeType, EntityType};
use crate::domain::entities::client::Client;
use crate::domain::entities::product::{Product, Review};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{AuditRepository, ClientRepository, ProductRepository};
use crate::services::audit::AuditService;

/// Partial update for a client; absent fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct ClientUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// A product together with its derived average rating
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithRating {
    #[serde(flatten)]
    pub product: Product,
    pub average_rating: Option<Decimal>,
}

/// Service for client and product catalog operations
pub struct CatalogService<C, P, A>
where
    C: ClientRepository,
    P: ProductRepository,
    A: AuditRepository + 'static,
{
    client_repository: Arc<C>,
    product_repository: Arc<P>,
    audit_service: Arc<AuditService<A>>,
}

impl<C, P, A> CatalogService<C, P, A>
where
    C: ClientRepository,
    P: ProductRepository,
    A: AuditRepository + 'static,
{
    /// Create a new catalog service
    pub fn new(
        client_repository: Arc<C>,
        product_repository: Arc<P>,
        audit_service: Arc<AuditService<A>>,
    ) -> Self {
        Self {
            client_repository,
            product_repository,
            audit_service,
        }
    }

    /// List all clients
    pub async fn list_clients(&self) -> DomainResult<Vec<Client>> {
        self.client_repository.list().await
    }

    /// Fetch a single client
    pub async fn get_client(&self, id: Uuid) -> DomainResult<Client> {
        self.client_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "client".to_string(),
            })
    }

    /// Create a client
    ///
    /// # Errors
    ///
    /// * `ValidationError::InvalidEmail` - Malformed email
    /// * `ValidationError::DuplicateValue` - Email already in use
    pub async fn create_client(
        &self,
        email: &str,
        name: &str,
        actor: Option<String>,
    ) -> DomainResult<Client> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }

        let client = self
            .client_repository
            .create(Client::new(email, name.trim().to_string()))
            .await?;

        self.audit_service
            .record(
                EntityType::Client,
                client.id,
                ChangeType::Create,
                actor,
                client_snapshot(&client),
            )
            .await;

        Ok(client)
    }

    /// Apply a partial update to a client (PATCH semantics)
    pub async fn update_client(
        &self,
        id: Uuid,
        update: ClientUpdate,
        actor: Option<String>,
    ) -> DomainResult<Client> {
        let mut client = self.get_client(id).await?;

        if let Some(email) = update.email {
            let email = normalize_email(&email);
            if !is_valid_email(&email) {
                return Err(ValidationError::InvalidEmail.into());
            }
            client.email = email;
        }
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(ValidationError::RequiredField {
                    field: "name".to_string(),
                }
                .into());
            }
            client.name = name.trim().to_string();
        }

        let client = self.client_repository.update(client).await?;

        self.audit_service
            .record(
                EntityType::Client,
                client.id,
                ChangeType::Update,
                actor,
                client_snapshot(&client),
            )
            .await;

        Ok(client)
    }

    /// Delete a client
    pub async fn delete_client(&self, id: Uuid, actor: Option<String>) -> DomainResult<()> {
        let client = self.get_client(id).await?;

        if !self.client_repository.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: "client".to_string(),
            });
        }

        self.audit_service
            .record(
                EntityType::Client,
                id,
                ChangeType::Delete,
                actor,
                client_snapshot(&client),
            )
            .await;

        Ok(())
    }

    /// List all products with their derived average rating
    pub async fn list_products(&self) -> DomainResult<Vec<ProductWithRating>> {
        let products = self.product_repository.list().await?;

        let mut out = Vec::with_capacity(products.len());
        for product in products {
            let average_rating = self.average_rating(product.id).await?;
            out.push(ProductWithRating {
                product,
                average_rating,
            });
        }
        Ok(out)
    }

    /// Fetch a single product with its average rating
    pub async fn get_product(&self, id: Uuid) -> DomainResult<ProductWithRating> {
        let product = self
            .product_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "product".to_string(),
            })?;
        let average_rating = self.average_rating(product.id).await?;
        Ok(ProductWithRating {
            product,
            average_rating,
        })
    }

    /// Create a product
    pub async fn create_product(
        &self,
        title: &str,
        image_url: &str,
        price: Decimal,
        actor: Option<String>,
    ) -> DomainResult<Product> {
        if title.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "title".to_string(),
            }
            .into());
        }
        if price.is_sign_negative() {
            return Err(DomainError::Validation {
                message: "price must not be negative".to_string(),
            });
        }

        let product = self
            .product_repository
            .create(Product::new(
                title.trim().to_string(),
                image_url.to_string(),
                price,
            ))
            .await?;

        self.audit_service
            .record(
                EntityType::Product,
                product.id,
                ChangeType::Create,
                actor,
                product_snapshot(&product),
            )
            .await;

        Ok(product)
    }

    /// Attach a review rating to a product
    pub async fn add_review(&self, product_id: Uuid, rating: i32) -> DomainResult<Review> {
        if !(1..=5).contains(&rating) {
            return Err(DomainError::Validation {
                message: "rating must be between 1 and 5".to_string(),
            });
        }
        self.product_repository
            .add_review(Review::new(product_id, rating))
            .await
    }

    /// Mean of a product's review ratings, rounded to 2 decimal places
    ///
    /// Returns `None` when the product has no reviews; the average is never
    /// reported as zero for an unreviewed product.
    pub async fn average_rating(&self, product_id: Uuid) -> DomainResult<Option<Decimal>> {
        let ratings = self.product_repository.ratings(product_id).await?;
        if ratings.is_empty() {
            return Ok(None);
        }

        let sum: Decimal = ratings.iter().map(|r| Decimal::from(*r)).sum();
        let mean = sum / Decimal::from(ratings.len() as u64);
        Ok(Some(mean.round_dp(2)))
    }
}

fn client_snapshot(client: &Client) -> serde_json::Value {
    json!({
        "id": client.id.to_string(),
        "email": client.email,
        "name": client.name,
    })
}

fn product_snapshot(product: &Product) -> serde_json::Value {
    json!({
        "id": product.id.to_string(),
        "title": product.title,
        "image_url": product.image_url,
        "price": product.price.to_string(),
    })
}
