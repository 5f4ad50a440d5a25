//! Aggregate size computation with per-folder memoization

use tracing::trace;

use super::node::{Node, NodeKind};

/// Counters describing how much work one size query did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeStats {
    /// File sizes read directly (files not hidden behind a cached folder)
    pub files_visited: usize,
    /// Folders whose total had to be summed from their children
    pub folders_computed: usize,
    /// Folders answered from a set cache without descending
    pub cache_hits: usize,
}

/// A stale folder being summed: its remaining children, its cache slot and
/// the total of the children seen so far.
struct Frame<'a> {
    children: std::slice::IterMut<'a, Node>,
    cached_size: &'a mut Option<u64>,
    total: u64,
}

/// Total size of `node`: its own size for a file, the sum of all file
/// descendants for a folder.
///
/// A folder with a set cache is answered without descending. Otherwise its
/// children are totalled bottom-up and every folder summed along the way
/// stores its result, so later queries over unchanged subtrees are O(1).
/// The walk keeps its own stack, so depth is bounded by memory only.
pub fn aggregate_size(node: &mut Node, stats: &mut SizeStats) -> u64 {
    let mut stack: Vec<Frame<'_>> = Vec::new();
    if let Some(size) = enter(node, stats, &mut stack) {
        return size;
    }

    while let Some(frame) = stack.last_mut() {
        match frame.children.next() {
            Some(child) => {
                if let Some(size) = enter(child, stats, &mut stack) {
                    if let Some(parent) = stack.last_mut() {
                        parent.total += size;
                    }
                }
            }
            None => {
                let Some(done) = stack.pop() else { break };
                *done.cached_size = Some(done.total);
                stats.folders_computed += 1;
                trace!(total = done.total, "folder size recomputed");
                match stack.last_mut() {
                    Some(parent) => parent.total += done.total,
                    None => return done.total,
                }
            }
        }
    }
    0
}

/// Resolve `node` immediately if it is a file or a cached folder; otherwise
/// push a frame for it and return `None`.
fn enter<'a>(node: &'a mut Node, stats: &mut SizeStats, stack: &mut Vec<Frame<'a>>) -> Option<u64> {
    match node.kind_mut() {
        NodeKind::File { size } => {
            stats.files_visited += 1;
            Some(*size)
        }
        NodeKind::Folder {
            children,
            cached_size,
        } => {
            if let Some(total) = *cached_size {
                stats.cache_hits += 1;
                return Some(total);
            }
            stack.push(Frame {
                children: children.iter_mut(),
                cached_size,
                total: 0,
            });
            None
        }
    }
}
