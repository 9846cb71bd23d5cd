//! This crate exposes an unbalanced Binary Search Tree (BST) over `i64` keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key
//! and will sometimes have child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key. Duplicates always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Nothing here rebalances. Inserting keys in sorted order builds a tree shaped like a
//! linked list, so every recursive operation can go `O(N)` levels deep.
//!
//! # Examples
//!
//! ```
//! use int_bst::Tree;
//!
//! let mut tree = Tree::from_keys(vec![2, 3, 1]);
//! assert_eq!(tree.in_order(), vec![1, 2, 3]);
//! assert_eq!(tree.pre_order(), vec![2, 1, 3]);
//!
//! // Deleting a node with two children pulls up a key from the taller side.
//! assert!(tree.delete(2));
//! assert_eq!(tree, Tree::from_keys(vec![3, 1]));
//!
//! // Deleting something that isn't there is a no-op.
//! assert!(!tree.delete(42));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod node;
pub mod tree;
mod util;


pub use node::{height, same, Link, Node, Order};
pub use tree::Tree;
