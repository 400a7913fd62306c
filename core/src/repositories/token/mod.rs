//! Refresh token repository module

mod mock;
mod r#trait;

pub use mock::MockTokenRepository;
pub use r#trait::TokenRepository;
