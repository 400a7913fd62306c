//! Audit record repository module

mod mock;
mod r#trait;

pub use mock::MockAuditRepository;
pub use r#trait::AuditRepository;
