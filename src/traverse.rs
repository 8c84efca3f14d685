use std::collections::VecDeque;
use std::convert::Infallible;
use std::iter::FusedIterator;

use crate::node::{Link, Node};

// =============================================================================
// Visitor traversals
// =============================================================================

/// Visits every payload in ascending comparator order.
pub fn traverse_inorder<T>(root: Option<&Node<T>>, mut visit: impl FnMut(&T)) {
    try_traverse_inorder(root, |v| {
        visit(v);
        Ok::<(), Infallible>(())
    })
    .unwrap_or_else(|never| match never {});
}

/// Visits each node before its subtrees.
pub fn traverse_preorder<T>(root: Option<&Node<T>>, mut visit: impl FnMut(&T)) {
    try_traverse_preorder(root, |v| {
        visit(v);
        Ok::<(), Infallible>(())
    })
    .unwrap_or_else(|never| match never {});
}

/// Visits each node after its subtrees.
pub fn traverse_postorder<T>(root: Option<&Node<T>>, mut visit: impl FnMut(&T)) {
    try_traverse_postorder(root, |v| {
        visit(v);
        Ok::<(), Infallible>(())
    })
    .unwrap_or_else(|never| match never {});
}

/// In-order traversal with a fallible visitor. Stops at, and returns, the
/// visitor's first error.
pub fn try_traverse_inorder<T, E, F>(root: Option<&Node<T>>, visit: F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    Iter::new(root).try_for_each(visit)
}

/// Pre-order traversal with a fallible visitor.
pub fn try_traverse_preorder<T, E, F>(root: Option<&Node<T>>, mut visit: F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visit(&node.data)?;
        stack.extend(node.right());
        stack.extend(node.left());
    }
    Ok(())
}

/// Post-order traversal with a fallible visitor.
pub fn try_traverse_postorder<T, E, F>(root: Option<&Node<T>>, mut visit: F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    postorder_nodes(root, |n| visit(&n.data))
}

/// Visits whole nodes in postorder on an explicit stack.
pub(crate) fn postorder_nodes<'a, T, E, F>(root: Option<&'a Node<T>>, mut visit: F) -> Result<(), E>
where
    F: FnMut(&'a Node<T>) -> Result<(), E>,
{
    // `true` once a node's children are already on the stack above it.
    let mut stack: Vec<(&Node<T>, bool)> = root.into_iter().map(|n| (n, false)).collect();
    while let Some((node, expanded)) = stack.pop() {
        if expanded || node.is_leaf() {
            visit(node)?;
            continue;
        }
        stack.push((node, true));
        stack.extend(node.right().map(|n| (n, false)));
        stack.extend(node.left().map(|n| (n, false)));
    }
    Ok(())
}

/// Breadth-first traversal, one level at a time from the root.
pub fn traverse_level_order<T>(root: Option<&Node<T>>, mut visit: impl FnMut(&T)) {
    let mut queue: VecDeque<&Node<T>> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        visit(&node.data);
        queue.extend(node.left());
        queue.extend(node.right());
    }
}

// =============================================================================
// Teardown
// =============================================================================

/// Tears the tree down in postorder, showing each payload to `display` and
/// then handing it to `release`. Returns the number of nodes released.
///
/// Runs on an explicit stack, so arbitrarily deep trees do not recurse.
pub fn delete_tree<T>(root: Link<T>, mut display: impl FnMut(&T), mut release: impl FnMut(T)) -> usize {
    // `true` once a node's children are already on the stack above it.
    let mut stack: Vec<(Box<Node<T>>, bool)> = Vec::new();
    stack.extend(root.map(|n| (n, false)));
    let mut released = 0usize;

    while let Some((mut node, expanded)) = stack.pop() {
        if expanded || node.is_leaf() {
            display(&node.data);
            release(node.data);
            released += 1;
            continue;
        }
        let left = node.left.take();
        let right = node.right.take();
        stack.push((node, true));
        stack.extend(right.map(|n| (n, false)));
        stack.extend(left.map(|n| (n, false)));
    }

    log::trace!("released {released} nodes");
    released
}

// =============================================================================
// Iterator
// =============================================================================

/// Borrowing in-order iterator.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.data)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

/// In-order iterator over a subtree.
pub fn iter<T>(root: Option<&Node<T>>) -> Iter<'_, T> {
    Iter::new(root)
}
