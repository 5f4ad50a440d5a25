//! Error types for namespace operations

use thiserror::Error;

/// Errors produced by structural mutation and pattern search.
///
/// Lookups that simply miss (`find_path`, `folder_size`) return `Option`
/// instead; `NotFound` is reserved for operations that were asked to act on
/// something specific that is not there.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NamespaceError {
    /// No node or path corresponds to the given name
    #[error("not found: {0}")]
    NotFound(String),

    /// Structural mutation attempted on a file
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A sibling with the same name already exists
    #[error("'{name}' already exists in '{parent}'")]
    AlreadyExists { parent: String, name: String },

    /// Tree description could not be parsed
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    /// Wildcard pattern did not compile after translation
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, NamespaceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::WildcardPattern;

    #[test]
    fn test_pattern_errors_compare_equal() {
        let first = WildcardPattern::new("File(").unwrap_err();
        let second = WildcardPattern::new("File(").unwrap_err();
        assert_eq!(first, second);
        assert_ne!(first, NamespaceError::NotFound("File(".to_string()));
    }

    #[test]
    fn test_error_messages() {
        let err = NamespaceError::AlreadyExists {
            parent: "Root/Docs".to_string(),
            name: "a.txt".to_string(),
        };
        assert_eq!(err.to_string(), "'a.txt' already exists in 'Root/Docs'");
        assert!(
            WildcardPattern::new("[")
                .unwrap_err()
                .to_string()
                .starts_with("invalid pattern '[':")
        );
    }
}
