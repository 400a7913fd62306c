//! Product and review entities for the catalog store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product in the catalog.
///
/// The rating is derived from associated reviews, never stored on the
/// product itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    pub id: Uuid,

    /// Product title
    pub title: String,

    /// URL of the product image
    pub image_url: String,

    /// Price with two decimal places preserved
    pub price: Decimal,
}

impl Product {
    /// Creates a new product. The price is rescaled to two decimal places.
    pub fn new(title: String, image_url: String, price: Decimal) -> Self {
        let mut price = price;
        price.rescale(2);
        Self {
            id: Uuid::new_v4(),
            title,
            image_url,
            price,
        }
    }
}

/// A review attached to a product. Reviews exist only as rating input for
/// the derived average.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier for the review
    pub id: Uuid,

    /// Product this review belongs to
    pub product_id: Uuid,

    /// Rating value
    pub rating: i32,
}

impl Review {
    /// Creates a new review for a product
    pub fn new(product_id: Uuid, rating: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_rescaled_to_two_places() {
        let product = Product::new(
            "Product 1".to_string(),
            "https://example.com/p1.png".to_string(),
            "100".parse().unwrap(),
        );
        assert_eq!(product.price.to_string(), "100.00");
        assert_eq!(product.price.scale(), 2);
    }

    #[test]
    fn test_price_precision_preserved() {
        let product = Product::new(
            "Product 2".to_string(),
            "https://example.com/p2.png".to_string(),
            "19.99".parse().unwrap(),
        );
        assert_eq!(product.price.to_string(), "19.99");
    }

    #[test]
    fn test_review_creation() {
        let product_id = Uuid::new_v4();
        let review = Review::new(product_id, 4);
        assert_eq!(review.product_id, product_id);
        assert_eq!(review.rating, 4);
    }
}
