//! # Infrastructure Layer
//!
//! Concrete implementations of the `fh_core` repository traits backed by
//! MySQL via SQLx, plus connection pool management.

pub mod database;

pub use database::connection::{DatabasePool, PoolStatistics};
pub use database::mysql::{
    MySqlAuditRepository, MySqlClientRepository, MySqlFavoriteRepository,
    MySqlProductRepository, MySqlTokenRepository, MySqlUserRepository,
};
