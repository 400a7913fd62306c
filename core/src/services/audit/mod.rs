//! Audit service module
//!
//! Records entity snapshots on every catalog and favorites mutation and
//! answers history queries over the append-only log.

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuditService, ChangeSet, FieldChange, HistorySummaryRow};
