//! Shared error and result types used across all layers.

pub mod error;
pub mod result;
