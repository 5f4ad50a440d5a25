//! Fixtures shared by integration tests and benchmarks.
//!
//! This module is only compiled with the `test-utils` feature.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::demo::demo_tree;
use crate::tree::{Node, Tree};

/// The reference tree from the crate docs (`Root` totals 80).
pub fn reference_tree() -> Tree {
    demo_tree().expect("reference tree has unique sibling names")
}

/// Sum of all file sizes below `node`, ignoring every cache.
pub fn brute_force_size(node: &Node) -> u64 {
    node.size()
        .unwrap_or_else(|| node.children().iter().map(brute_force_size).sum())
}

/// A balanced tree with `fanout` folders per level, `depth` levels deep, and
/// `fanout` files in every folder. File `k` in a folder has size `k + 1`.
pub fn wide_tree(fanout: usize, depth: usize) -> Tree {
    fn build(name: String, fanout: usize, depth: usize) -> Node {
        let mut folder = Node::folder(name.clone());
        if depth > 0 {
            for i in 0..fanout {
                let child = build(format!("{}_d{}", name, i), fanout, depth - 1);
                folder.add_child(child).expect("folder accepts children");
            }
        }
        for k in 0..fanout {
            folder
                .add_child(Node::file(format!("{}_file{}.txt", name, k), k as u64 + 1))
                .expect("folder accepts children");
        }
        folder
    }

    Tree::with_root(build("Root".to_string(), fanout, depth))
}

/// Write `tree` as a JSON manifest to a temporary file.
///
/// The file is deleted when the returned handle is dropped.
pub fn write_manifest(tree: &Tree) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    let json = serde_json::to_string_pretty(&tree.to_manifest()).expect("manifest serializes");
    file.write_all(json.as_bytes())
        .expect("Failed to write manifest");
    file
}

/// Write raw manifest text to a temporary file.
pub fn write_manifest_str(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write manifest");
    file
}
