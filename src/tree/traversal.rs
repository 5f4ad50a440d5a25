//! Pre-order traversal shared by lookup, size queries and wildcard search.
//!
//! Uses an explicit stack instead of recursion so that deep hierarchies
//! cannot exhaust the call stack. Children are pushed in reverse so they
//! pop in stored order, which keeps the visit order identical to a
//! recursive pre-order walk.
//!
//! Each visit holds a shared link to its parent instead of an owned path,
//! so pushing a child costs the same at any depth. Paths and routes are
//! rebuilt from the links only for the visits a caller asks about.

use std::fmt;
use std::rc::Rc;

use super::node::Node;

/// One step of the chain from a visited node back up to the root.
struct Link<'a> {
    node: &'a Node,
    /// Position among the parent's children; unused for the root
    index: usize,
    parent: Option<Rc<Link<'a>>>,
}

impl Drop for Link<'_> {
    // Releases a long chain one link at a time instead of recursively.
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(link) = parent {
            match Rc::try_unwrap(link) {
                Ok(mut link) => parent = link.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// A node reached during traversal, with everything needed to report or
/// revisit it.
#[derive(Clone)]
pub struct Visit<'a> {
    pub node: &'a Node,
    pub depth: usize,
    link: Rc<Link<'a>>,
}

impl<'a> Visit<'a> {
    /// `/`-joined names from the root down to and including this node.
    pub fn path(&self) -> String {
        let mut names: Vec<&str> = self.ancestry().map(|link| link.node.name()).collect();
        names.reverse();
        names.join("/")
    }

    /// Child indices from the root to this node; empty for the root itself.
    pub fn route(&self) -> Vec<usize> {
        let mut route: Vec<usize> = self
            .ancestry()
            .filter(|link| link.parent.is_some())
            .map(|link| link.index)
            .collect();
        route.reverse();
        route
    }

    fn ancestry(&self) -> impl Iterator<Item = &Link<'a>> {
        std::iter::successors(Some(&*self.link), |link| link.parent.as_deref())
    }
}

impl fmt::Debug for Visit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visit")
            .field("name", &self.node.name())
            .field("depth", &self.depth)
            .field("path", &self.path())
            .finish()
    }
}

/// Iterator over every node below (and including) a root, in pre-order.
pub struct PreOrder<'a> {
    stack: Vec<Visit<'a>>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![Visit {
                node: root,
                depth: 0,
                link: Rc::new(Link {
                    node: root,
                    index: 0,
                    parent: None,
                }),
            }],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;

        for (index, child) in visit.node.children().iter().enumerate().rev() {
            self.stack.push(Visit {
                node: child,
                depth: visit.depth + 1,
                link: Rc::new(Link {
                    node: child,
                    index,
                    parent: Some(Rc::clone(&visit.link)),
                }),
            });
        }

        Some(visit)
    }
}
