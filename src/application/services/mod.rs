//! Application services.

pub mod intent_resolver;
