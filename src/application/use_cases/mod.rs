//! Application use cases.

pub mod dispatch_operation;
pub mod repo_operations;
