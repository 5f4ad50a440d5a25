//! JSON description of a tree, for loading and exporting

use serde::{Deserialize, Serialize};

use crate::error::{NamespaceError, Result};

use super::config::{DuplicatePolicy, TreeConfig};
use super::namespace::Tree;
use super::node::{Node, NodeKind};

/// Serializable node. Cached sizes are runtime state and never written.
///
/// ```json
/// {"type": "folder", "name": "Root", "children": [
///     {"type": "file", "name": "a.txt", "size": 10}
/// ]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ManifestNode {
    File {
        name: String,
        size: u64,
    },
    Folder {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<ManifestNode>,
    },
}

impl ManifestNode {
    pub fn name(&self) -> &str {
        match self {
            ManifestNode::File { name, .. } => name,
            ManifestNode::Folder { name, .. } => name,
        }
    }

    /// Build the live node, appending children through `Node::add_child`.
    pub fn into_node(self, policy: DuplicatePolicy) -> Result<Node> {
        match self {
            ManifestNode::File { name, size } => Ok(Node::file(name, size)),
            ManifestNode::Folder { name, children } => {
                let mut folder = Node::folder(name);
                for child in children {
                    if policy == DuplicatePolicy::Reject && folder.child(child.name()).is_some() {
                        return Err(NamespaceError::AlreadyExists {
                            parent: folder.name().to_string(),
                            name: child.name().to_string(),
                        });
                    }
                    folder.add_child(child.into_node(policy)?)?;
                }
                Ok(folder)
            }
        }
    }
}

impl From<&Node> for ManifestNode {
    fn from(node: &Node) -> Self {
        match node.kind() {
            NodeKind::File { size } => ManifestNode::File {
                name: node.name().to_string(),
                size: *size,
            },
            NodeKind::Folder { children, .. } => ManifestNode::Folder {
                name: node.name().to_string(),
                children: children.iter().map(ManifestNode::from).collect(),
            },
        }
    }
}

impl Tree {
    /// Parse a JSON manifest into a tree governed by `config`.
    pub fn from_json(json: &str, config: TreeConfig) -> Result<Self> {
        let manifest: ManifestNode = serde_json::from_str(json)
            .map_err(|e| NamespaceError::InvalidManifest(e.to_string()))?;
        let root = manifest.into_node(config.duplicates)?;
        Ok(Tree::with_root(root).with_config(config))
    }

    pub fn to_manifest(&self) -> ManifestNode {
        ManifestNode::from(self.root())
    }
}
