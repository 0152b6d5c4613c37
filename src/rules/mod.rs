//! Rewrite rules for the dueDate-ordering migration.
//!
//! This module handles:
//! - Compiling (pattern, replacement) pairs into applicable rules
//! - The two fixed rules that move the Firestore orderBy clause into an
//!   in-memory null-first sort

pub mod due_date;
pub mod rewriter;

pub use due_date::due_date_rules;
pub use rewriter::RewriteRule;
