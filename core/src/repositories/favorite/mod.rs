//! Favorite list repository module

mod mock;
mod r#trait;

pub use mock::MockFavoriteRepository;
pub use r#trait::FavoriteRepository;
