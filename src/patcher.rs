//! The read-transform-write pass over the target file.
//!
//! One linear pass: slurp the file, run every rewrite rule over the full
//! text in order, write the result back in place. The write truncates and
//! is not atomic; no backup is kept.

use crate::error::{PatchError, Result};
use crate::rules::RewriteRule;
use std::fs;
use std::path::Path;

/// Apply rewrite rules to a document, in order, each on the output of the
/// previous one.
pub fn apply_rules(text: &str, rules: &[RewriteRule]) -> String {
	rules
		.iter()
		.fold(text.to_string(), |doc, rule| rule.apply(&doc))
}

/// Patch a file in place: read it as UTF-8, apply the rules, write it back.
///
/// A run where no rule matches rewrites the file with identical content and
/// still reports success.
pub fn patch_file(path: &Path, rules: &[RewriteRule]) -> Result<()> {
	let content = fs::read_to_string(path).map_err(|source| PatchError::ReadError {
		path: path.to_path_buf(),
		source,
	})?;

	let patched = apply_rules(&content, rules);

	fs::write(path, &patched).map_err(|source| PatchError::WriteError {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(())
}
