use std::cmp::Ordering;

use crate::compare::Comparator;
use crate::node::{Link, Node};
use crate::rotate::{rotate_left, rotate_right};

/// Where the inserted key ended up relative to a returned subtree.
///
/// The key itself has moved into its leaf by the time the recursion unwinds,
/// so each level reports the comparisons its parent would otherwise have to
/// repeat: `root` is `key <=> subtree root`, `child` is `key <=> the root's
/// child on that side`. `Equal` in `root` means the root holds the key.
#[derive(Clone, Copy, Debug)]
struct Descent {
    root: Ordering,
    child: Ordering,
}

impl Descent {
    const HERE: Descent = Descent {
        root: Ordering::Equal,
        child: Ordering::Equal,
    };
}

/// Outcome of [`insert_into`].
pub(crate) struct Inserted<T> {
    pub(crate) root: Box<Node<T>>,
    /// `false` when an equal key was already present.
    pub(crate) added: bool,
}

/// Inserts `data` and returns the new root.
///
/// Inserting a key that compares `Equal` to one already present leaves the
/// tree untouched and drops `data`.
///
/// ```rust
/// use avl_rs::{insert, size, traverse_inorder, Link, NaturalOrder};
///
/// let mut root: Link<i32> = None;
/// for v in [50, 30, 20, 40, 70, 60, 80] {
///     root = insert(root, v, &NaturalOrder);
/// }
/// root = insert(root, 40, &NaturalOrder);
/// assert_eq!(size(root.as_deref()), 7);
///
/// let mut seen = Vec::new();
/// traverse_inorder(root.as_deref(), |v| seen.push(*v));
/// assert_eq!(seen, [20, 30, 40, 50, 60, 70, 80]);
/// ```
pub fn insert<T, C>(root: Link<T>, data: T, cmp: &C) -> Link<T>
where
    C: Comparator<T> + ?Sized,
{
    Some(insert_into(root, data, cmp).root)
}

pub(crate) fn insert_into<T, C>(root: Link<T>, data: T, cmp: &C) -> Inserted<T>
where
    C: Comparator<T> + ?Sized,
{
    let mut added = false;
    let (root, _) = insert_rec(root, data, cmp, &mut added);
    Inserted { root, added }
}

fn insert_rec<T, C>(link: Link<T>, data: T, cmp: &C, added: &mut bool) -> (Box<Node<T>>, Descent)
where
    C: Comparator<T> + ?Sized,
{
    let Some(mut node) = link else {
        *added = true;
        return (Node::new(data), Descent::HERE);
    };

    let dir = cmp.compare(&data, &node.data);
    let below = match dir {
        Ordering::Less => {
            let (child, d) = insert_rec(node.left.take(), data, cmp, added);
            node.left = Some(child);
            d
        }
        Ordering::Greater => {
            let (child, d) = insert_rec(node.right.take(), data, cmp, added);
            node.right = Some(child);
            d
        }
        Ordering::Equal => return (node, Descent::HERE),
    };

    if !*added {
        // Duplicate found below: nothing changed, so nothing to rebalance,
        // even if earlier removals left this node lopsided.
        return (node, Descent { root: dir, child: below.root });
    }

    node.update_height();
    rebalance_after_insert(node, dir, below)
}

/// Applies at most one single or double rotation at `node`.
///
/// `dir` is the side the key went down from `node`, `below` is what the
/// child on that side reported.
fn rebalance_after_insert<T>(mut node: Box<Node<T>>, dir: Ordering, below: Descent) -> (Box<Node<T>>, Descent) {
    let balance = node.balance();
    let unchanged = Descent {
        root: dir,
        child: below.root,
    };

    if balance > 1 {
        // Key against the left child. A key that went right is greater than
        // everything on the left; that only happens once removals have left
        // the node lopsided.
        let vs_left = if dir == Ordering::Less { below.root } else { Ordering::Greater };
        return match vs_left {
            Ordering::Less => {
                let out = Descent {
                    root: Ordering::Less,
                    child: below.child,
                };
                (rotate_right(node), out)
            }
            Ordering::Greater => {
                // The left child's right child becomes the root, with the old
                // left child on its left and `node` on its right.
                let out = if dir == Ordering::Less {
                    Descent {
                        root: below.child,
                        child: match below.child {
                            Ordering::Less => below.root,
                            Ordering::Greater => dir,
                            Ordering::Equal => Ordering::Equal,
                        },
                    }
                } else {
                    Descent { root: dir, child: dir }
                };
                node.left = node.left.take().map(rotate_left);
                (rotate_right(node), out)
            }
            Ordering::Equal => (node, unchanged),
        };
    }

    if balance < -1 {
        let vs_right = if dir == Ordering::Greater { below.root } else { Ordering::Less };
        return match vs_right {
            Ordering::Greater => {
                let out = Descent {
                    root: Ordering::Greater,
                    child: below.child,
                };
                (rotate_left(node), out)
            }
            Ordering::Less => {
                let out = if dir == Ordering::Greater {
                    Descent {
                        root: below.child,
                        child: match below.child {
                            Ordering::Greater => below.root,
                            Ordering::Less => dir,
                            Ordering::Equal => Ordering::Equal,
                        },
                    }
                } else {
                    Descent { root: dir, child: dir }
                };
                node.right = node.right.take().map(rotate_right);
                (rotate_left(node), out)
            }
            Ordering::Equal => (node, unchanged),
        };
    }

    (node, unchanged)
}
