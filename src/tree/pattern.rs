//! Wildcard patterns for file name search
//!
//! Wildcards are rewritten into a regular expression and then compiled:
//!
//! | wildcard | meaning                      |
//! |----------|------------------------------|
//! | `*`      | zero or more of any character |
//! | `?`      | exactly one character        |
//! | `!`      | start-of-name anchor         |
//! | `#`      | one or more digits           |
//!
//! Every other character goes to the regex engine as-is, so regex syntax
//! such as `[abc]` or `.` keeps its regex meaning. A name matches when the
//! pattern matches a prefix of it; the rest of the name is not consumed.

use regex::Regex;

use crate::error::{NamespaceError, Result};

/// Rewrite wildcards into regex syntax. Replacements run in table order.
pub fn translate(pattern: &str) -> String {
    pattern
        .replace('*', ".*")
        .replace('?', ".")
        .replace('!', "^")
        .replace('#', r"\d+")
}

/// A compiled wildcard pattern.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    regex: Regex,
}

impl WildcardPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&translate(pattern)).map_err(|source| {
            NamespaceError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The wildcard text this pattern was built from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True if the pattern matches starting at the first character of `name`.
    pub fn matches(&self, name: &str) -> bool {
        // The leftmost match starts at 0 whenever any match does.
        self.regex.find(name).is_some_and(|m| m.start() == 0)
    }
}
