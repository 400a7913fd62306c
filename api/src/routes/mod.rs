//! Route handlers, grouped by resource.

pub mod auth;
pub mod clients;
pub mod favorites;
pub mod products;
