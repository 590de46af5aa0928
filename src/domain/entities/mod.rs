//! Domain entities.

pub mod intent;
pub mod registry;
