//! Product repository module

mod mock;
mod r#trait;

pub use mock::MockProductRepository;
pub use r#trait::ProductRepository;
