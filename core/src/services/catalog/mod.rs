//! Catalog service module
//!
//! CRUD over clients and products, review ratings, and the derived
//! average-rating figure. Every successful mutation is recorded in the
//! audit log.

mod service;

#[cfg(test)]
mod tests;

pub use service::{CatalogService, ClientUpdate, ProductWithRating};
