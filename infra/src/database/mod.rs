//! Database module - MySQL implementations using SQLx
//!
//! Provides connection pool management and repository implementations for
//! every persistence trait in `fh_core::repositories`.

pub mod connection;
pub mod mysql;

pub use connection::{DatabasePool, PoolStatistics};
