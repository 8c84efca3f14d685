//! # avl-rs
//!
//! A generic height-balanced (AVL) binary search tree ordered by a
//! caller-supplied three-way comparator.
//!
//! Two layers are exposed:
//!
//! - Root-passing functions ([`insert`], [`remove`], [`lookup`], the
//!   traversals, ...) over a bare [`Link`]. Every mutating call consumes the
//!   old root and returns the new one; rebind your root to the result.
//! - [`AvlTree`], which owns the root, the comparator and a
//!   [`TreeConfig`], and tracks its length.
//!
//! Removal splices nodes out without rotating by default, so heavy removal
//! workloads can leave the tree ordered but lopsided. Pick
//! [`RemovePolicy::Rebalance`] (or call [`remove_rebalanced`]) for full AVL
//! removal.
//!
//! ## Example
//!
//! ```rust
//! use avl_rs::{insert, is_valid_bst, remove, traverse_inorder, Link, NaturalOrder};
//!
//! let mut root: Link<i32> = None;
//! for v in [50, 30, 20, 40, 70, 60, 80] {
//!     root = insert(root, v, &NaturalOrder);
//! }
//! root = remove(root, &50, &NaturalOrder);
//! assert!(is_valid_bst(root.as_deref(), &NaturalOrder));
//!
//! let mut keys = Vec::new();
//! traverse_inorder(root.as_deref(), |k| keys.push(*k));
//! assert_eq!(keys, [20, 30, 40, 60, 70, 80]);
//! ```
//!
//! String keys are stored as borrowed `&str`, so the tree never owns or
//! copies the text it orders:
//!
//! ```rust
//! use avl_rs::AvlTree;
//!
//! let words: Vec<String> = ["e", "c", "b", "d", "g", "f", "h"].map(String::from).to_vec();
//! let tree: AvlTree<&str> = words.iter().map(String::as_str).collect();
//! assert_eq!(tree.iter().copied().collect::<String>(), "bcdefgh");
//! ```

#![forbid(unsafe_code)]

mod compare;
mod config;
mod error;
mod insert;
mod node;
mod query;
mod remove;
mod rotate;
mod traverse;
mod tree;

pub use compare::{Comparator, NaturalOrder, Reverse};
pub use config::{RemovePolicy, TreeConfig};
pub use error::InvariantViolation;
pub use insert::insert;
pub use node::{Link, Node};
pub use query::{
    is_valid_bst, lookup, max_depth, max_value_node, min_value_node, size, validate, validate_balanced,
};
pub use remove::{remove, remove_rebalanced, remove_with};
pub use rotate::{balance_factor, height, rotate_left, rotate_right};
pub use traverse::{
    delete_tree, iter, traverse_inorder, traverse_level_order, traverse_postorder, traverse_preorder,
    try_traverse_inorder, try_traverse_postorder, try_traverse_preorder, Iter,
};
pub use tree::AvlTree;

#[cfg(test)]
mod proptests;
