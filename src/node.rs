use std::convert::Infallible;
use std::fmt;

use crate::traverse::postorder_nodes;

/// An owned, possibly absent subtree.
///
/// Every mutating tree function consumes a `Link` and hands back the new one;
/// callers must rebind their root to the returned value.
pub type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A single tree node.
///
/// Nodes are only created by insertion and only reachable through a
/// [`Link`]; the accessors here are read-only so that a node handed out by
/// [`lookup`](crate::lookup) cannot be reordered behind the tree's back.
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    /// Cached subtree height: 1 for a leaf.
    pub(crate) height: usize,
}

impl<T> Node<T> {
    /// Allocates a leaf holding `data`.
    ///
    /// Allocation failure aborts the process; there is no local recovery for
    /// a node allocator running out of memory.
    #[inline]
    pub fn new(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The stored payload.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Left subtree: keys ordered before this one.
    #[inline]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Right subtree: keys ordered after this one.
    #[inline]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Cached height of the subtree rooted here.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when neither child is present.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<&Node<T>> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Recomputes the cached height from the children's cached heights.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + link_height(&self.left).max(link_height(&self.right));
    }

    /// Left height minus right height.
    #[inline]
    pub(crate) fn balance(&self) -> isize {
        link_height(&self.left) as isize - link_height(&self.right) as isize
    }
}

#[inline]
pub(crate) fn link_height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            left: clone_link(&self.left),
            right: clone_link(&self.right),
            height: self.height,
        }
    }
}

/// Deep-copies a subtree without recursing.
fn clone_link<T: Clone>(link: &Link<T>) -> Link<T> {
    // Postorder leaves each node's cloned subtrees on top of `done`, right
    // above left, by the time the node itself is reached.
    let mut done: Vec<Box<Node<T>>> = Vec::new();
    postorder_nodes(link.as_deref(), |n| {
        let right = n.right.as_ref().and_then(|_| done.pop());
        let left = n.left.as_ref().and_then(|_| done.pop());
        done.push(Box::new(Node {
            data: n.data.clone(),
            left,
            right,
            height: n.height,
        }));
        Ok::<(), Infallible>(())
    })
    .unwrap_or_else(|never| match never {});
    done.pop()
}
