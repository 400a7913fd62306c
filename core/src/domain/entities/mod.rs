//! Domain entities representing core business objects.

pub mod audit;
pub mod client;
pub mod favorite;
pub mod product;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use audit::{AuditRecord, ChangeType, EntityType};
pub use client::Client;
pub use favorite::FavoriteList;
pub use product::{Product, Review};
pub use token::{
    Claims, RefreshToken, TokenPair, ACCESS_TOKEN_EXPIRY_MINUTES, JWT_AUDIENCE, JWT_ISSUER,
    REFRESH_TOKEN_EXPIRY_DAYS,
};
pub use user::User;
