use std::cmp::Ordering;

use crate::compare::Comparator;
use crate::error::InvariantViolation;
use crate::node::Node;

/// Finds the node whose key compares `Equal` to `key`.
pub fn lookup<'a, T, C>(root: Option<&'a Node<T>>, key: &T, cmp: &C) -> Option<&'a Node<T>>
where
    C: Comparator<T> + ?Sized,
{
    let node = root?;
    match cmp.compare(key, &node.data) {
        Ordering::Equal => Some(node),
        Ordering::Less => lookup(node.left(), key, cmp),
        Ordering::Greater => lookup(node.right(), key, cmp),
    }
}

/// Leftmost node of a subtree.
pub fn min_value_node<T>(root: &Node<T>) -> &Node<T> {
    let mut cur = root;
    while let Some(left) = cur.left() {
        cur = left;
    }
    cur
}

/// Rightmost node of a subtree.
pub fn max_value_node<T>(root: &Node<T>) -> &Node<T> {
    let mut cur = root;
    while let Some(right) = cur.right() {
        cur = right;
    }
    cur
}

/// Counts every node.
pub fn size<T>(root: Option<&Node<T>>) -> usize {
    root.map_or(0, |n| size(n.left()) + 1 + size(n.right()))
}

/// Number of nodes on the longest root-to-leaf path, computed by walking the
/// tree rather than trusting cached heights.
pub fn max_depth<T>(root: Option<&Node<T>>) -> usize {
    root.map_or(0, |n| 1 + max_depth(n.left()).max(max_depth(n.right())))
}

/// Checks ordering: the largest key on the left of each node compares
/// `Less` than the node and the smallest on the right compares `Greater`.
///
/// Re-descends to the subtree extremes at every node, so this is an oracle
/// for tests and assertions rather than something to call per operation.
pub fn is_valid_bst<T, C>(root: Option<&Node<T>>, cmp: &C) -> bool
where
    C: Comparator<T> + ?Sized,
{
    let Some(node) = root else {
        return true;
    };

    if let Some(left) = node.left() {
        if cmp.compare(&max_value_node(left).data, &node.data) != Ordering::Less {
            return false;
        }
    }
    if let Some(right) = node.right() {
        if cmp.compare(&min_value_node(right).data, &node.data) != Ordering::Greater {
            return false;
        }
    }

    is_valid_bst(node.left(), cmp) && is_valid_bst(node.right(), cmp)
}

/// Checks ordering and cached heights in one pass, reporting the first
/// violation found (preorder).
pub fn validate<T, C>(root: Option<&Node<T>>, cmp: &C) -> Result<(), InvariantViolation>
where
    C: Comparator<T> + ?Sized,
{
    check(root, Bounds::default(), 1, cmp, false).map(|_| ())
}

/// [`validate`], additionally requiring every balance factor to be in
/// `-1..=1`.
pub fn validate_balanced<T, C>(root: Option<&Node<T>>, cmp: &C) -> Result<(), InvariantViolation>
where
    C: Comparator<T> + ?Sized,
{
    check(root, Bounds::default(), 1, cmp, true).map(|_| ())
}

struct Bounds<'a, T> {
    lower: Option<&'a T>,
    upper: Option<&'a T>,
}

impl<T> Default for Bounds<'_, T> {
    fn default() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }
}

/// Returns the recomputed height of `node`.
fn check<'a, T, C>(
    node: Option<&'a Node<T>>,
    bounds: Bounds<'a, T>,
    depth: usize,
    cmp: &C,
    balanced: bool,
) -> Result<usize, InvariantViolation>
where
    C: Comparator<T> + ?Sized,
{
    let Some(n) = node else {
        return Ok(0);
    };

    let above = bounds.lower.map_or(true, |lo| cmp.compare(&n.data, lo) == Ordering::Greater);
    let below = bounds.upper.map_or(true, |hi| cmp.compare(&n.data, hi) == Ordering::Less);
    if !(above && below) {
        return Err(InvariantViolation::Unordered { depth });
    }

    let left = check(
        n.left(),
        Bounds {
            lower: bounds.lower,
            upper: Some(&n.data),
        },
        depth + 1,
        cmp,
        balanced,
    )?;
    let right = check(
        n.right(),
        Bounds {
            lower: Some(&n.data),
            upper: bounds.upper,
        },
        depth + 1,
        cmp,
        balanced,
    )?;

    let actual = 1 + left.max(right);
    if n.height != actual {
        return Err(InvariantViolation::StaleHeight {
            depth,
            cached: n.height,
            actual,
        });
    }

    let balance = left as isize - right as isize;
    if balanced && !(-1..=1).contains(&balance) {
        return Err(InvariantViolation::Unbalanced { depth, balance });
    }

    Ok(actual)
}
