//! Configuration types for the namespace tree

/// What `insert` does when the parent folder already has a child of the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail with `AlreadyExists`; sibling names stay unique.
    #[default]
    Reject,
    /// Accept the duplicate. Lookups then resolve to whichever node a
    /// pre-order walk reaches first.
    Allow,
}

/// Configuration for tree mutation behavior.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    pub duplicates: DuplicatePolicy,
}

impl TreeConfig {
    pub fn allow_duplicates() -> Self {
        Self {
            duplicates: DuplicatePolicy::Allow,
        }
    }
}
