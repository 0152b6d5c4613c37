use crate::error::{PatchError, Result};
use regex::Regex;

/// A single pattern-based rewrite applied to the full document text.
#[derive(Debug)]
pub struct RewriteRule {
	/// The compiled pattern to match.
	pub pattern: Regex,

	/// The replacement text.
	pub replacement: String,
}

impl RewriteRule {
	/// Compile a rewrite rule from a pattern string and replacement text.
	pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
		let pattern = Regex::new(pattern).map_err(|source| PatchError::InvalidPattern {
			pattern: pattern.to_string(),
			source,
		})?;

		Ok(RewriteRule {
			pattern,
			replacement: replacement.into(),
		})
	}

	/// Apply this rule to a string, replacing all non-overlapping matches.
	///
	/// A rule that finds no match returns the input unchanged.
	pub fn apply(&self, input: &str) -> String {
		self.pattern
			.replace_all(input, self.replacement.as_str())
			.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_compiles_valid_pattern() {
		let rule = RewriteRule::new(r"foo", "bar");
		assert!(rule.is_ok());
	}

	#[test]
	fn test_new_rejects_invalid_pattern() {
		let result = RewriteRule::new(r"[invalid", "bar");
		assert!(result.is_err());
		match result.unwrap_err() {
			PatchError::InvalidPattern { pattern, .. } => {
				assert_eq!(pattern, "[invalid");
			}
			_ => panic!("Expected InvalidPattern error"),
		}
	}

	#[test]
	fn test_apply_replaces_all_occurrences() {
		let rule = RewriteRule::new(r"foo", "bar").unwrap();
		assert_eq!(rule.apply("foo foo foo"), "bar bar bar");
	}

	#[test]
	fn test_apply_spans_lines() {
		let rule = RewriteRule::new(r"a\s*b", "ab").unwrap();
		assert_eq!(rule.apply("a\n   b"), "ab");
	}

	#[test]
	fn test_apply_no_match_is_identity() {
		let rule = RewriteRule::new(r"foo", "bar").unwrap();
		assert_eq!(rule.apply("baz qux"), "baz qux");
	}

	#[test]
	fn test_apply_multiline_replacement() {
		let rule = RewriteRule::new(r"x;", "y;\n      z;").unwrap();
		assert_eq!(rule.apply("x;"), "y;\n      z;");
	}
}
