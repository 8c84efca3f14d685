use std::cmp::Ordering;
use std::mem;

use crate::compare::Comparator;
use crate::node::{Link, Node, Side};
use crate::rotate::{balance_factor, rotate_left, rotate_right};

// =============================================================================
// Splice removal (no rebalancing)
// =============================================================================

/// Removes the node whose key compares `Equal` to `key` and returns the new
/// root. A missing key leaves the tree as it was.
///
/// The removed payload is dropped; use [`remove_with`] to take it. This path
/// splices nodes out without rotating, so a long run of removals can leave
/// the tree ordered but no longer height-balanced. [`remove_rebalanced`]
/// restores balance on the way back up instead.
pub fn remove<T, C>(root: Link<T>, key: &T, cmp: &C) -> Link<T>
where
    C: Comparator<T> + ?Sized,
{
    remove_with(root, key, cmp, drop)
}

/// Like [`remove`], handing the removed payload to `release`.
///
/// When the target has two children its node stays in place and takes over
/// the inorder successor's payload; `release` receives the payload that was
/// displaced, i.e. the one matching `key`.
pub fn remove_with<T, C, F>(mut root: Link<T>, key: &T, cmp: &C, release: F) -> Link<T>
where
    C: Comparator<T> + ?Sized,
    F: FnOnce(T),
{
    if let Some(data) = take_spliced(&mut root, key, cmp) {
        release(data);
    }
    root
}

pub(crate) fn take_spliced<T, C>(root: &mut Link<T>, key: &T, cmp: &C) -> Option<T>
where
    C: Comparator<T> + ?Sized,
{
    let path = find_path(root.as_deref(), key, cmp)?;
    splice_at(root, &path)
}

/// Walks from the root to `key`, recording each turn. The last entry is the
/// turn taken out of the target's parent; an empty path means the root.
fn find_path<T, C>(mut cur: Option<&Node<T>>, key: &T, cmp: &C) -> Option<Vec<Side>>
where
    C: Comparator<T> + ?Sized,
{
    let mut path = Vec::new();
    while let Some(node) = cur {
        let side = match cmp.compare(key, &node.data) {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => return Some(path),
        };
        path.push(side);
        cur = node.child(side);
    }
    None
}

/// Follows `path` from `link` and splices out the node at its end, fixing
/// cached heights on every node passed through.
fn splice_at<T>(link: &mut Link<T>, path: &[Side]) -> Option<T> {
    let node = link.as_mut()?;
    match path.split_first() {
        Some((&side, rest)) => {
            let data = splice_at(node.child_mut(side), rest)?;
            node.update_height();
            Some(data)
        }
        None => splice_out(link),
    }
}

fn splice_out<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        // A successor never has a left child, so it detaches with a splice.
        let successor = detach_min(&mut node.right)?;
        let displaced = mem::replace(&mut node.data, successor);
        node.update_height();
        log::trace!("replaced two-child node with its successor");
        return Some(displaced);
    }

    let mut node = link.take()?;
    *link = node.left.take().or_else(|| node.right.take());
    log::trace!("spliced out node with at most one child");
    Some(node.data)
}

/// Unlinks the leftmost node under `link` and returns its payload.
fn detach_min<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        let data = detach_min(&mut node.left);
        node.update_height();
        return data;
    }

    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.data)
}

// =============================================================================
// Rebalancing removal
// =============================================================================

/// Full AVL removal: like [`remove_with`], but every ancestor of the removed
/// node is rebalanced, so the balance invariant survives removals.
pub fn remove_rebalanced<T, C, F>(root: Link<T>, key: &T, cmp: &C, release: F) -> Link<T>
where
    C: Comparator<T> + ?Sized,
    F: FnOnce(T),
{
    let mut removed = None;
    let root = remove_balanced_rec(root, key, cmp, &mut removed);
    if let Some(data) = removed {
        release(data);
    }
    root
}

pub(crate) fn take_rebalanced<T, C>(root: &mut Link<T>, key: &T, cmp: &C) -> Option<T>
where
    C: Comparator<T> + ?Sized,
{
    let mut removed = None;
    *root = remove_balanced_rec(root.take(), key, cmp, &mut removed);
    removed
}

fn remove_balanced_rec<T, C>(link: Link<T>, key: &T, cmp: &C, removed: &mut Option<T>) -> Link<T>
where
    C: Comparator<T> + ?Sized,
{
    let mut node = link?;
    match cmp.compare(key, &node.data) {
        Ordering::Less => node.left = remove_balanced_rec(node.left.take(), key, cmp, removed),
        Ordering::Greater => node.right = remove_balanced_rec(node.right.take(), key, cmp, removed),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => {
                *removed = Some(node.data);
                return child;
            }
            (left, Some(right)) => {
                let (rest, successor) = take_min_rebalanced(right);
                *removed = Some(mem::replace(&mut node.data, successor));
                node.left = left;
                node.right = rest;
            }
        },
    }
    Some(rebalance(node))
}

fn take_min_rebalanced<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            (right, node.data)
        }
        Some(left) => {
            let (rest, min) = take_min_rebalanced(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}

/// Restores balance at `node`, picking the double rotation from the heavy
/// child's own balance.
fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    let balance = node.balance();

    if balance > 1 {
        if balance_factor(node.left()) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if balance_factor(node.right()) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}
