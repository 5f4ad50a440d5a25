//! Built-in reference tree, used when no manifest is given

use crate::error::{NamespaceError, Result};
use crate::tree::{InsertOutcome, Node, Tree};

/// Build the reference tree:
///
/// ```text
/// Root
/// ├── Folder1
/// │   ├── SubFolder1
/// │   │   └── File3.txt (20)
/// │   ├── File1.txt (10)
/// │   └── File2.txt (5)
/// └── Folder2
///     ├── SubFolder1
///     │   └── SubFolder2
///     │       └── File4.txt (15)
///     └── File5.pdf (30)
/// ```
pub fn demo_tree() -> Result<Tree> {
    let mut tree = Tree::new("Root");
    let entries = [
        ("Root", Node::folder("Folder1")),
        ("Root", Node::folder("Folder2")),
        ("Root/Folder1", Node::folder("SubFolder1")),
        ("Root/Folder1", Node::file("File1.txt", 10)),
        ("Root/Folder1", Node::file("File2.txt", 5)),
        ("Root/Folder1/SubFolder1", Node::file("File3.txt", 20)),
        ("Root/Folder2", Node::folder("SubFolder1")),
        ("Root/Folder2/SubFolder1", Node::folder("SubFolder2")),
        ("Root/Folder2/SubFolder1/SubFolder2", Node::file("File4.txt", 15)),
        ("Root/Folder2", Node::file("File5.pdf", 30)),
    ];
    insert_all(&mut tree, entries)?;
    Ok(tree)
}

/// Insert every `(parent path, node)` pair in order. A parent that does not
/// resolve is a broken fixture, not a no-op.
fn insert_all<'p>(
    tree: &mut Tree,
    entries: impl IntoIterator<Item = (&'p str, Node)>,
) -> Result<()> {
    for (path, node) in entries {
        match tree.insert(path, node)? {
            InsertOutcome::Inserted => {}
            InsertOutcome::ParentNotFound => {
                return Err(NamespaceError::NotFound(path.to_string()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_tree_is_complete() {
        let tree = demo_tree().unwrap();
        assert_eq!(tree.iter().count(), 11);
        assert_eq!(tree.iter().filter(|v| v.node.is_file()).count(), 5);
    }

    #[test]
    fn test_mistyped_parent_is_reported() {
        let mut tree = Tree::new("Root");
        let err = insert_all(
            &mut tree,
            [
                ("Root", Node::folder("Folder1")),
                ("Root/Folder01", Node::file("File1.txt", 10)),
            ],
        )
        .unwrap_err();
        assert_eq!(err, NamespaceError::NotFound("Root/Folder01".to_string()));
        assert_eq!(tree.find_path("File1.txt"), None);
    }
}
