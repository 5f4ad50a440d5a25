//! In-memory directory namespace
//!
//! A [`Tree`] owns a root [`Node`]; folders own their children. The tree
//! supports:
//!
//! - `insert` / `remove` under a `/`-delimited folder path
//! - `find_path`: pre-order lookup of the first node with a given name
//! - `folder_size`: aggregate file size, memoized per folder
//! - `find_matching`: wildcard search over file names

mod config;
mod manifest;
mod namespace;
mod node;
mod pattern;
mod size;
mod traversal;

// Re-export public types
pub use config::{DuplicatePolicy, TreeConfig};
pub use manifest::ManifestNode;
pub use namespace::{InsertOutcome, Tree};
pub use node::{Node, NodeKind};
pub use pattern::{WildcardPattern, translate};
pub use size::{SizeStats, aggregate_size};
pub use traversal::{PreOrder, Visit};
