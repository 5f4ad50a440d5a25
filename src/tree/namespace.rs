//! The namespace tree: mutation, lookup, aggregation and search

use tracing::debug;

use crate::error::{NamespaceError, Result};

use super::config::{DuplicatePolicy, TreeConfig};
use super::node::Node;
use super::pattern::WildcardPattern;
use super::size::{SizeStats, aggregate_size};
use super::traversal::{PreOrder, Visit};

/// Result of an `insert` that did not fail outright.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// Some segment of the path named no folder; nothing was inserted.
    ParentNotFound,
}

impl InsertOutcome {
    pub fn is_inserted(self) -> bool {
        self == InsertOutcome::Inserted
    }
}

/// An in-memory directory tree that owns its root node.
///
/// The tree never hands out mutable access to its nodes. Every mutation goes
/// through [`Tree::insert`] or [`Tree::remove`], which invalidate the cached
/// size of each folder from the root down to the mutated parent. A set
/// cache is therefore always exact, and [`Tree::folder_size`] trusts it.
#[derive(Debug, Clone)]
pub struct Tree {
    root: Node,
    config: TreeConfig,
}

impl Tree {
    /// Create a tree whose root is an empty folder.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self::with_root(Node::folder(root_name))
    }

    pub fn with_root(root: Node) -> Self {
        Self {
            root,
            config: TreeConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// All nodes in pre-order, each with its `/`-joined path.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(&self.root)
    }

    /// Append `node` under the folder addressed by `path`.
    ///
    /// `path` starts with the root's name (not checked) followed by folder
    /// names, e.g. `"Root/Folder1"`; the root's name alone addresses the
    /// root. When a segment names no folder the call is a no-op reported as
    /// [`InsertOutcome::ParentNotFound`].
    pub fn insert(&mut self, path: &str, node: Node) -> Result<InsertOutcome> {
        let Some(route) = self.resolve_folder(path) else {
            debug!(path, name = node.name(), "insert skipped: parent path not found");
            return Ok(InsertOutcome::ParentNotFound);
        };

        if self.config.duplicates == DuplicatePolicy::Reject
            && self
                .node_at(&route)
                .and_then(|parent| parent.child(node.name()))
                .is_some()
        {
            return Err(NamespaceError::AlreadyExists {
                parent: path.to_string(),
                name: node.name().to_string(),
            });
        }

        let Some(parent) = self.descend_invalidating(&route) else {
            return Ok(InsertOutcome::ParentNotFound);
        };
        debug!(path, name = node.name(), "inserting node");
        parent.add_child(node)?;
        Ok(InsertOutcome::Inserted)
    }

    /// Detach the child `name` from the folder addressed by `parent_path`
    /// and return it. Unlike `insert`, a missing parent is an error.
    pub fn remove(&mut self, parent_path: &str, name: &str) -> Result<Node> {
        let route = self
            .resolve_folder(parent_path)
            .ok_or_else(|| NamespaceError::NotFound(parent_path.to_string()))?;

        // Checked before invalidating so a failed removal leaves caches intact.
        if self.node_at(&route).and_then(|p| p.child(name)).is_none() {
            return Err(NamespaceError::NotFound(format!("{}/{}", parent_path, name)));
        }

        let parent = self
            .descend_invalidating(&route)
            .ok_or_else(|| NamespaceError::NotFound(parent_path.to_string()))?;
        debug!(path = parent_path, name, "removing node");
        parent.remove_child(name)
    }

    /// First node named `name` in pre-order.
    pub fn find(&self, name: &str) -> Option<&Node> {
        self.locate(name).map(|visit| visit.node)
    }

    /// Path from the root to the first node named `name` in pre-order.
    pub fn find_path(&self, name: &str) -> Option<String> {
        self.locate(name).map(|visit| visit.path())
    }

    /// Total size of the first node named `name`: its own size for a file,
    /// the sum of every file below it for a folder.
    pub fn folder_size(&mut self, name: &str) -> Option<u64> {
        self.folder_size_with_stats(name).map(|(size, _)| size)
    }

    /// Size of the whole tree. Afterwards every folder's cache is set.
    pub fn total_size(&mut self) -> u64 {
        aggregate_size(&mut self.root, &mut SizeStats::default())
    }

    /// Like [`Tree::folder_size`], also reporting how much of the subtree
    /// had to be walked.
    pub fn folder_size_with_stats(&mut self, name: &str) -> Option<(u64, SizeStats)> {
        let route = self.locate(name)?.route();
        let node = self.descend(&route)?;

        let mut stats = SizeStats::default();
        let size = aggregate_size(node, &mut stats);
        debug!(
            name,
            size,
            files_visited = stats.files_visited,
            cache_hits = stats.cache_hits,
            "folder size computed"
        );
        Some((size, stats))
    }

    /// Paths of every file whose name matches the wildcard `pattern`, in
    /// pre-order. A pattern that does not compile is an error, distinct
    /// from an empty result.
    pub fn find_matching(&self, pattern: &str) -> Result<Vec<String>> {
        let pattern = WildcardPattern::new(pattern)?;
        Ok(self
            .iter()
            .filter(|visit| visit.node.is_file() && pattern.matches(visit.node.name()))
            .map(|visit| visit.path())
            .collect())
    }

    fn locate(&self, name: &str) -> Option<Visit<'_>> {
        self.iter().find(|visit| visit.node.name() == name)
    }

    /// Child-index route to the folder addressed by `path`.
    fn resolve_folder(&self, path: &str) -> Option<Vec<usize>> {
        let mut route = Vec::new();
        let mut current = &self.root;
        for segment in path.split('/').skip(1) {
            let index = current.folder_index(segment)?;
            current = &current.children()[index];
            route.push(index);
        }
        Some(route)
    }

    fn node_at(&self, route: &[usize]) -> Option<&Node> {
        route
            .iter()
            .try_fold(&self.root, |node, &index| node.children().get(index))
    }

    fn descend(&mut self, route: &[usize]) -> Option<&mut Node> {
        let mut current = &mut self.root;
        for &index in route {
            current = current.child_at_mut(index)?;
        }
        Some(current)
    }

    /// Walk `route` mutably, marking every folder on the way stale,
    /// including the last one.
    fn descend_invalidating(&mut self, route: &[usize]) -> Option<&mut Node> {
        let mut current = &mut self.root;
        current.invalidate();
        for &index in route {
            current = current.child_at_mut(index)?;
            current.invalidate();
        }
        Some(current)
    }
}
