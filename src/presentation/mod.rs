//! Presentation layer: CLI surface and user interaction.

pub mod cli;
