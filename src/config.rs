/// How [`AvlTree::remove`](crate::AvlTree::remove) restructures the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemovePolicy {
    /// Splice the node (or its successor) out and fix cached heights, but
    /// never rotate. Ordering holds; balance may decay over many removals.
    #[default]
    Splice,
    /// Rebalance every ancestor of the removed node, keeping the AVL balance
    /// invariant across removals.
    Rebalance,
}

/// Configuration for an [`AvlTree`](crate::AvlTree).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Removal strategy
    pub remove_policy: RemovePolicy,
}

impl TreeConfig {
    /// Config using full AVL removal.
    pub fn rebalancing() -> Self {
        Self {
            remove_policy: RemovePolicy::Rebalance,
        }
    }
}
