use std::fmt;

use crate::compare::{Comparator, NaturalOrder};
use crate::config::{RemovePolicy, TreeConfig};
use crate::error::InvariantViolation;
use crate::insert::insert_into;
use crate::node::{Link, Node};
use crate::query;
use crate::remove::{take_rebalanced, take_spliced};
use crate::rotate::height;
use crate::traverse::{self, delete_tree, Iter};

/// An AVL tree that owns its root and its comparator.
///
/// Wraps the root-passing functions of this crate so callers cannot forget
/// to rebind the root, and keeps a live node count.
///
/// ```rust
/// use avl_rs::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for v in [50, 30, 20, 40, 70, 60, 80] {
///     tree.insert(v);
/// }
/// assert!(tree.is_valid_bst());
/// assert_eq!(tree.remove(&50), Some(50));
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [20, 30, 40, 60, 70, 80]);
/// ```
pub struct AvlTree<T, C = NaturalOrder> {
    root: Link<T>,
    count: usize,
    cmp: C,
    config: TreeConfig,
}

impl<T: Ord> AvlTree<T> {
    /// Empty tree ordered by `T: Ord`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C: Comparator<T>> AvlTree<T, C> {
    /// Empty tree ordered by `cmp`, with the default [`TreeConfig`].
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_config(cmp, TreeConfig::default())
    }

    /// Empty tree ordered by `cmp` with an explicit removal policy.
    pub fn with_config(cmp: C, config: TreeConfig) -> Self {
        Self {
            root: None,
            count: 0,
            cmp,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Live node count, O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Inserts `data`, returning `false` (and dropping `data`) if an equal
    /// key is already present.
    pub fn insert(&mut self, data: T) -> bool {
        let out = insert_into(self.root.take(), data, &self.cmp);
        self.root = Some(out.root);
        if out.added {
            self.count += 1;
        } else {
            log::trace!("ignored duplicate key");
        }
        out.added
    }

    /// Removes the key comparing `Equal` to `key`, returning its payload.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let removed = match self.config.remove_policy {
            RemovePolicy::Splice => take_spliced(&mut self.root, key, &self.cmp),
            RemovePolicy::Rebalance => take_rebalanced(&mut self.root, key, &self.cmp),
        };
        if removed.is_some() {
            self.count -= 1;
        }
        removed
    }

    /// Payload stored under `key`.
    pub fn get(&self, key: &T) -> Option<&T> {
        self.lookup(key).map(Node::data)
    }

    /// Node holding `key`, if any.
    pub fn lookup(&self, key: &T) -> Option<&Node<T>> {
        query::lookup(self.root(), key, &self.cmp)
    }

    /// Whether a key comparing `Equal` to `key` is present.
    pub fn contains(&self, key: &T) -> bool {
        self.lookup(key).is_some()
    }

    /// Smallest key.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|r| query::min_value_node(r).data())
    }

    /// Largest key.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|r| query::max_value_node(r).data())
    }

    pub fn is_valid_bst(&self) -> bool {
        query::is_valid_bst(self.root(), &self.cmp)
    }

    /// Checks ordering and cached heights. Balance is required too unless
    /// removals use [`RemovePolicy::Splice`].
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        match self.config.remove_policy {
            RemovePolicy::Splice => query::validate(self.root(), &self.cmp),
            RemovePolicy::Rebalance => query::validate_balanced(self.root(), &self.cmp),
        }
    }

    pub fn validate_balanced(&self) -> Result<(), InvariantViolation> {
        query::validate_balanced(self.root(), &self.cmp)
    }
}

impl<T, C> AvlTree<T, C> {
    #[inline]
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Cached height of the root, O(1).
    #[inline]
    pub fn height(&self) -> usize {
        height(self.root())
    }

    /// Node count by full traversal.
    pub fn size(&self) -> usize {
        query::size(self.root())
    }

    pub fn max_depth(&self) -> usize {
        query::max_depth(self.root())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    pub fn traverse_inorder(&self, visit: impl FnMut(&T)) {
        traverse::traverse_inorder(self.root(), visit);
    }

    pub fn traverse_preorder(&self, visit: impl FnMut(&T)) {
        traverse::traverse_preorder(self.root(), visit);
    }

    pub fn traverse_postorder(&self, visit: impl FnMut(&T)) {
        traverse::traverse_postorder(self.root(), visit);
    }

    pub fn traverse_level_order(&self, visit: impl FnMut(&T)) {
        traverse::traverse_level_order(self.root(), visit);
    }

    /// Removes every node, dropping the payloads.
    pub fn clear(&mut self) {
        self.drain_with(|_| {}, drop);
    }

    /// Removes every node in postorder, showing each payload to `display`
    /// before handing it to `release`. Returns the number of nodes removed.
    pub fn drain_with(&mut self, display: impl FnMut(&T), release: impl FnMut(T)) -> usize {
        log::debug!("tearing down tree of {} nodes", self.count);
        self.count = 0;
        delete_tree(self.root.take(), display, release)
    }

    /// Gives up ownership of the root.
    pub fn into_root(mut self) -> Link<T> {
        self.count = 0;
        self.root.take()
    }
}

impl<T, C> Drop for AvlTree<T, C> {
    fn drop(&mut self) {
        delete_tree(self.root.take(), |_| {}, drop);
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, C: Clone> Clone for AvlTree<T, C> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            count: self.count,
            cmp: self.cmp.clone(),
            config: self.config,
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for AvlTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C: Comparator<T>> Extend<T> for AvlTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
