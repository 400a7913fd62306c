//! Repository traits defining persistence contracts for the domain layer,
//! plus in-memory mock implementations for tests.

pub mod audit;
pub mod client;
pub mod favorite;
pub mod product;
pub mod token;
pub mod user;

pub use audit::AuditRepository;
pub use client::ClientRepository;
pub use favorite::FavoriteRepository;
pub use product::ProductRepository;
pub use token::TokenRepository;
pub use user::UserRepository;

pub use audit::MockAuditRepository;
pub use client::MockClientRepository;
pub use favorite::MockFavoriteRepository;
pub use product::MockProductRepository;
pub use token::MockTokenRepository;
pub use user::MockUserRepository;
