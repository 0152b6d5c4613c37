//! Duesort - one-shot codemod that replaces a Firestore dueDate ordering
//! clause with an in-memory null-first sort.
//!
//! This library provides the core functionality for duesort, including:
//! - Regex rewrite rules compiled from fixed (pattern, replacement) pairs
//! - The two rules targeting the activity-instance service's fetch idioms
//! - The read-transform-write pass over the target file
//!
//! # Example
//!
//! ```no_run
//! use duesort::patcher::patch_file;
//! use duesort::rules::due_date_rules;
//! use std::path::Path;
//!
//! let rules = due_date_rules().unwrap();
//! patch_file(Path::new("service.dart"), &rules).unwrap();
//! ```

pub mod error;
pub mod patcher;
pub mod rules;

pub use error::{PatchError, Result};
