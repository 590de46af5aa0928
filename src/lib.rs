//! # gitp - Multi-Repository Git Orchestrator
//!
//! `gitp` is a command-line tool that applies a single git operation (clone,
//! remote configuration, user configuration, pull, push, or an arbitrary
//! pass-through command) across a configured set of repositories, one after
//! another.
//!
//! ## Features
//!
//! - **Repository Registry**: Define your repositories once in a JSON file
//! - **Batch Operations**: Run the same operation on every enabled repository
//! - **Secondary Remotes**: Pull from and push to a `second` remote when one
//!   is configured
//! - **Pass-through Commands**: Forward any git command to one repository or
//!   to all of them
//!
//! ## Quick Start
//!
//! 1. Create the registry scaffold:
//!
//! ```bash
//! gitp init
//! ```
//!
//! 2. Edit `gitp_config.json` to describe your repositories, then clone them
//!    all:
//!
//! ```bash
//! gitp clone
//! ```
//!
//! 3. Pull everything, or run any git command everywhere:
//!
//! ```bash
//! gitp pull
//! gitp -a checkout .
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: Core entities (registry, intent) and value objects
//! - [`application`]: Argument resolution and the dispatch engine
//! - [`infrastructure`]: Registry file I/O and external process execution
//! - [`presentation`]: CLI surface and user interaction
//! - [`common`]: Shared error handling
//!
//! ## Execution Model
//!
//! Repositories are processed strictly sequentially, in registry-file order.
//! A failure in one repository is recorded and reported but does not stop the
//! remaining repositories from being processed; the invocation as a whole
//! still reports failure afterwards.

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::GitpError;
pub use crate::common::result::GitpResult as Result;
