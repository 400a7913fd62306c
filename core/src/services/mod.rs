//! Business services containing domain logic and use cases.

pub mod audit;
pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod token;

// Re-export commonly used types
pub use audit::AuditService;
pub use auth::{AuthService, AuthServiceConfig, LoginResult};
pub use catalog::{CatalogService, ClientUpdate, ProductWithRating};
pub use favorites::FavoritesService;
pub use token::{TokenService, TokenServiceConfig};
