//! Wire-level request and response types.

pub mod auth;
pub mod client;
pub mod favorite;
pub mod product;
