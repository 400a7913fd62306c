//! Favorites service module
//!
//! Manages per-client favorite product lists under the one-list-per-client
//! and no-duplicate-membership rules. Every successful mutation is recorded
//! in the audit log.

mod service;

#[cfg(test)]
mod tests;

pub use service::FavoritesService;
