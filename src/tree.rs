//! The owning wrapper around a root [`Link`]. It forwards to the recursive functions in
//! [`node`][crate::node] and rebinds the root with whatever they return.
//!
//! # Examples
//!
//! ```
//! use int_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.in_order(), Vec::<i64>::new());
//!
//! tree.insert(4);
//! tree.insert(1);
//! tree.insert(7);
//! assert_eq!(tree.height(), 2);
//!
//! // Deleting the root keeps the tree a valid BST.
//! assert!(tree.delete(4));
//! assert_eq!(tree.in_order(), vec![1, 7]);
//!
//! // Deleting the rest empties it.
//! tree.delete(1);
//! tree.delete(7);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::node::{self, Link, Node, Order};
use crate::util::Removal;

/// An unbalanced Binary Search Tree of `i64` keys. Duplicate keys are kept and sit to the
/// right of their equals.
#[derive(Clone, Default)]
pub struct Tree {
    root: Link,
}

impl Drop for Tree {
    // A list-shaped tree would recurse once per node through `Box`'s drop, so take it apart
    // with an explicit stack instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

/// Trees are equal when they have the same shape and keys, not merely the same keys.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        node::same(self.root(), other.root())
    }
}

impl Eq for Tree {}

impl FromIterator<i64> for Tree {
    fn from_iter<I: IntoIterator<Item = i64>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

impl Extend<i64> for Tree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl From<&[i64]> for Tree {
    fn from(keys: &[i64]) -> Self {
        keys.iter().copied().collect()
    }
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree by inserting each key in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let tree = Tree::from_keys(vec![2, 3, 1, 0]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.key, 2);
    /// assert_eq!(root.left.as_ref().unwrap().key, 1);
    /// assert_eq!(root.right.as_ref().unwrap().key, 3);
    /// ```
    pub fn from_keys<I: IntoIterator<Item = i64>>(keys: I) -> Self {
        keys.into_iter().collect()
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Gives up the tree's nodes, leaving the caller to own them.
    pub fn into_root(mut self) -> Link {
        self.root.take()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key`. Inserting a key that's already present adds another node for it.
    pub fn insert(&mut self, key: i64) {
        self.root = Some(node::insert(self.root.take(), key));
    }

    /// Removes one node holding `key` and returns whether there was one. Deleting a key that
    /// isn't present, including from an empty tree, leaves the tree as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree = Tree::from_keys(vec![4, 1, 7, 6, 5]);
    ///
    /// // The right subtree is taller so its minimum moves up into the root.
    /// assert!(tree.delete(4));
    /// assert_eq!(tree, Tree::from_keys(vec![5, 1, 7, 6]));
    ///
    /// assert!(!tree.delete(4));
    /// assert!(!Tree::new().delete(4));
    /// ```
    pub fn delete(&mut self, key: i64) -> bool {
        if self.is_empty() {
            debug!(key, "delete on an empty tree");
            return false;
        }

        let (root, removal) = node::delete_with_removal(self.root.take(), key);
        self.root = root;

        match removal {
            Removal::NotFound => debug!(key, "key not found for delete"),
            Removal::Successor(replacement) | Removal::Predecessor(replacement) => {
                trace!(key, replacement, ?removal, "deleted key")
            }
            _ => trace!(key, ?removal, "deleted key"),
        }
        removal.is_found()
    }

    /// Whether some node holds `key`.
    pub fn contains(&self, key: i64) -> bool {
        let mut current = self.root();
        while let Some(n) = current {
            current = match key.cmp(&n.key) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right.as_deref(),
            };
        }
        false
    }

    /// The number of nodes on the longest root-to-leaf path. 0 for an empty tree.
    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    /// Keys, each node before its subtrees.
    pub fn pre_order(&self) -> Vec<i64> {
        self.traverse(Order::Pre)
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> Vec<i64> {
        self.traverse(Order::In)
    }

    /// Keys, each node after its subtrees.
    pub fn post_order(&self) -> Vec<i64> {
        self.traverse(Order::Post)
    }

    /// Keys in the given depth-first `order`.
    pub fn traverse(&self, order: Order) -> Vec<i64> {
        self.root().map_or_else(Vec::new, |root| root.traverse(order))
    }
}
