//! Domain value objects.

pub mod repo_name;
