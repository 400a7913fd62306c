//! Tests for the catalog service

mod service_tests;
