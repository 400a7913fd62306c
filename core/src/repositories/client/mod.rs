//! Client repository module

mod mock;
mod r#trait;

pub use mock::MockClientRepository;
pub use r#trait::ClientRepository;
