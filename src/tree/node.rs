//! Folder and file nodes

use tracing::trace;

use crate::error::{NamespaceError, Result};

/// What a node is, together with the data only that kind carries.
#[derive(Debug, Clone)]
pub enum NodeKind {
    File {
        size: u64,
    },
    Folder {
        /// Children in insertion order, which is also traversal order
        children: Vec<Node>,
        /// Memoized sum of every file size below this folder, `None` when stale
        cached_size: Option<u64>,
    },
}

/// One entry in the namespace. A node exclusively owns its children, so
/// dropping a node drops its whole subtree.
///
/// Equality is structural: names, kinds, file sizes and child order. Cached
/// folder totals are ignored.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    kind: NodeKind,
}

impl Node {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File { size },
        }
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder {
                children: Vec::new(),
                cached_size: None,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// Intrinsic size. Only files have one.
    pub fn size(&self) -> Option<u64> {
        match self.kind {
            NodeKind::File { size } => Some(size),
            NodeKind::Folder { .. } => None,
        }
    }

    /// Children in stored order; always empty for a file.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::File { .. } => &[],
            NodeKind::Folder { children, .. } => children,
        }
    }

    /// The memoized aggregate, if this is a folder whose cache is set.
    pub fn cached_size(&self) -> Option<u64> {
        match self.kind {
            NodeKind::File { .. } => None,
            NodeKind::Folder { cached_size, .. } => cached_size,
        }
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Index of the first direct child that is a folder named `name`.
    /// Files cannot be descended into, so a file with that name is skipped.
    pub(crate) fn folder_index(&self, name: &str) -> Option<usize> {
        self.children()
            .iter()
            .position(|c| c.is_folder() && c.name == name)
    }

    pub(crate) fn child_at_mut(&mut self, index: usize) -> Option<&mut Node> {
        match &mut self.kind {
            NodeKind::File { .. } => None,
            NodeKind::Folder { children, .. } => children.get_mut(index),
        }
    }

    /// Append `child` to the end of this folder and invalidate its cache.
    pub fn add_child(&mut self, child: Node) -> Result<()> {
        match &mut self.kind {
            NodeKind::File { .. } => Err(NamespaceError::InvalidOperation(format!(
                "cannot add '{}' to file '{}'",
                child.name, self.name
            ))),
            NodeKind::Folder {
                children,
                cached_size,
            } => {
                children.push(child);
                *cached_size = None;
                Ok(())
            }
        }
    }

    /// Detach the first child named `name` and invalidate this folder's cache.
    /// The removed subtree is handed back to the caller.
    pub fn remove_child(&mut self, name: &str) -> Result<Node> {
        match &mut self.kind {
            NodeKind::File { .. } => Err(NamespaceError::InvalidOperation(format!(
                "cannot remove '{}' from file '{}'",
                name, self.name
            ))),
            NodeKind::Folder {
                children,
                cached_size,
            } => {
                let index = children
                    .iter()
                    .position(|c| c.name == name)
                    .ok_or_else(|| {
                        NamespaceError::NotFound(format!("'{}' in '{}'", name, self.name))
                    })?;
                *cached_size = None;
                Ok(children.remove(index))
            }
        }
    }

    /// Mark the memoized aggregate stale. No-op on files.
    pub(crate) fn invalidate(&mut self) {
        if let NodeKind::Folder { cached_size, .. } = &mut self.kind {
            if cached_size.take().is_some() {
                trace!(folder = %self.name, "size cache invalidated");
            }
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut left = vec![self];
        let mut right = vec![other];
        while let (Some(a), Some(b)) = (left.pop(), right.pop()) {
            if a.name != b.name
                || a.is_folder() != b.is_folder()
                || a.size() != b.size()
                || a.children().len() != b.children().len()
            {
                return false;
            }
            left.extend(a.children());
            right.extend(b.children());
        }
        true
    }
}

impl Eq for Node {}

impl Drop for Node {
    // Unlinks descendants onto a heap stack so deep chains don't recurse.
    fn drop(&mut self) {
        let NodeKind::Folder { children, .. } = &mut self.kind else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut node) = pending.pop() {
            if let NodeKind::Folder { children, .. } = &mut node.kind {
                pending.append(children);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_child_appends_in_order() {
        let mut folder = Node::folder("Root");
        folder.add_child(Node::folder("b")).unwrap();
        folder.add_child(Node::file("a.txt", 3)).unwrap();

        let names: Vec<_> = folder.children().iter().map(Node::name).collect();
        assert_eq!(names, ["b", "a.txt"]);
    }

    #[test]
    fn test_add_child_to_file_fails() {
        let mut file = Node::file("a.txt", 1);
        let err = file.add_child(Node::file("b.txt", 1)).unwrap_err();
        assert!(matches!(err, NamespaceError::InvalidOperation(_)));
        assert!(file.children().is_empty());
    }

    #[test]
    fn test_add_and_remove_invalidate_cache() {
        let mut folder = Node::folder("Root");
        if let NodeKind::Folder { cached_size, .. } = folder.kind_mut() {
            *cached_size = Some(0);
        }
        folder.add_child(Node::file("a.txt", 4)).unwrap();
        assert_eq!(folder.cached_size(), None);

        if let NodeKind::Folder { cached_size, .. } = folder.kind_mut() {
            *cached_size = Some(4);
        }
        folder.remove_child("a.txt").unwrap();
        assert_eq!(folder.cached_size(), None);
    }

    #[test]
    fn test_remove_child_first_match_wins() {
        let mut folder = Node::folder("Root");
        folder.add_child(Node::file("dup", 1)).unwrap();
        folder.add_child(Node::file("dup", 2)).unwrap();

        let removed = folder.remove_child("dup").unwrap();
        assert_eq!(removed.size(), Some(1));
        assert_eq!(folder.children().len(), 1);
        assert_eq!(folder.children()[0].size(), Some(2));
    }

    #[test]
    fn test_remove_missing_child() {
        let mut folder = Node::folder("Root");
        let err = folder.remove_child("ghost").unwrap_err();
        assert!(matches!(err, NamespaceError::NotFound(_)));
    }

    #[test]
    fn test_remove_from_file_fails() {
        let mut file = Node::file("a.txt", 1);
        let err = file.remove_child("a.txt").unwrap_err();
        assert!(matches!(err, NamespaceError::InvalidOperation(_)));
    }

    #[test]
    fn test_folder_index_skips_files() {
        let mut folder = Node::folder("Root");
        folder.add_child(Node::file("docs", 1)).unwrap();
        folder.add_child(Node::folder("docs")).unwrap();
        assert_eq!(folder.folder_index("docs"), Some(1));
        assert_eq!(folder.folder_index("missing"), None);
    }

    #[test]
    fn test_equality_ignores_cache() {
        let mut cached = Node::folder("Root");
        cached.add_child(Node::file("a.txt", 4)).unwrap();
        let fresh = cached.clone();

        if let NodeKind::Folder { cached_size, .. } = cached.kind_mut() {
            *cached_size = Some(4);
        }
        assert_eq!(cached, fresh);
    }

    #[test]
    fn test_equality_is_structural() {
        let mut a = Node::folder("Root");
        a.add_child(Node::file("x", 1)).unwrap();
        a.add_child(Node::folder("y")).unwrap();

        let mut reordered = Node::folder("Root");
        reordered.add_child(Node::folder("y")).unwrap();
        reordered.add_child(Node::file("x", 1)).unwrap();
        assert_ne!(a, reordered);

        let mut resized = Node::folder("Root");
        resized.add_child(Node::file("x", 2)).unwrap();
        resized.add_child(Node::folder("y")).unwrap();
        assert_ne!(a, resized);

        assert_ne!(Node::file("x", 0), Node::folder("x"));
    }

    #[test]
    fn test_drop_deep_chain() {
        let mut node = Node::file("leaf", 1);
        for i in 0..200_000 {
            let mut folder = Node::folder(format!("f{}", i));
            folder.add_child(node).unwrap();
            node = folder;
        }
        drop(node);
    }
}
