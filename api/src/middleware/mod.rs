//! HTTP middleware: JWT authentication and CORS.

pub mod auth;
pub mod cors;
