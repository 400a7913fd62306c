//! Tests for the audit service
