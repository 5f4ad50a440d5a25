//! dirtree - An in-memory directory namespace with cached folder sizes and wildcard search

pub mod demo;
pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use demo::demo_tree;
pub use error::NamespaceError;
pub use output::{OutputConfig, TreeFormatter, format_size, print_json};
pub use tree::{
    DuplicatePolicy, InsertOutcome, ManifestNode, Node, NodeKind, SizeStats, Tree, TreeConfig,
    WildcardPattern,
};
