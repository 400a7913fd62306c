//! Request and response bodies for the product endpoints.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use fh_core::domain::entities::product::Product;
use fh_core::services::catalog::ProductWithRating;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Title is required."))]
    pub title: String,

    #[serde(default)]
    pub image_url: String,

    pub price: Decimal,
}

/// Product payload; `price` stays a 2-decimal string, `average_rating`
/// is a JSON number or null
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub title: String,
    pub image_url: String,
    pub price: Decimal,
    pub average_rating: Option<f64>,
}

impl From<ProductWithRating> for ProductResponse {
    fn from(rated: ProductWithRating) -> Self {
        let average_rating = rated.average_rating.and_then(|d| d.to_f64());
        Self::from_parts(rated.product, average_rating)
    }
}

impl ProductResponse {
    /// Build a payload for a product with no derived rating yet
    pub fn without_rating(product: Product) -> Self {
        Self::from_parts(product, None)
    }

    fn from_parts(product: Product, average_rating: Option<f64>) -> Self {
        Self {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            average_rating,
        }
    }
}
