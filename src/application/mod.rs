//! Application layer: argument resolution and operation dispatch.

pub mod services;
pub mod use_cases;
