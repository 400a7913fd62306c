//! Tests for the favorites service
