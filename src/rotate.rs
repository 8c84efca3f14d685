use crate::node::Node;

/// Cached height of a subtree, 0 when absent. O(1).
#[inline]
pub fn height<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, Node::height)
}

/// Left height minus right height, 0 when absent.
#[inline]
pub fn balance_factor<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(0, Node::balance)
}

/// Left rotation around `x`.
///
/// ```text
///     x                y
///    / \              / \
///   a   y     =>     x   c
///      / \          / \
///     b   c        a   b
/// ```
///
/// Returns the new subtree root. If `x` has no right child there is nothing
/// to rotate and `x` comes back unchanged.
pub fn rotate_left<T>(mut x: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    // x is now y's child, so its height has to be settled first.
    x.update_height();
    y.left = Some(x);
    y.update_height();
    log::trace!("rotated left, new subtree height {}", y.height);
    y
}

/// Right rotation around `y`; the mirror image of [`rotate_left`].
pub fn rotate_right<T>(mut y: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    log::trace!("rotated right, new subtree height {}", x.height);
    x
}
