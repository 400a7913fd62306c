//! Response handling helpers.

pub mod error;
