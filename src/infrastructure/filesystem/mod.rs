//! File system operations.

pub mod registry_store;

pub use registry_store::RegistryStore;
