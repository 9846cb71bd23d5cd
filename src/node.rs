//! The recursive building blocks of the tree. Every function here takes a subtree by value
//! (or by reference, for read-only walks) and hands back its replacement, so a parent rebinds
//! its child slot with whatever comes back.
//!
//! These functions don't need a [`Tree`][crate::Tree]. They work on any sub-structure.
//!
//! # Examples
//!
//! ```
//! use int_bst::node::{self, Node};
//!
//! let root = node::insert(None, 2);
//! let root = node::insert(Some(root), 1);
//! let root = node::insert(Some(root), 3);
//!
//! assert_eq!(node::height(Some(&*root)), 2);
//! assert_eq!(root.in_order(), vec![1, 2, 3]);
//!
//! let (rest, max) = node::prune_max(root);
//! assert_eq!(max, 3);
//! let expected = Node::with_children(2, Some(Box::new(Node::new(1))), None);
//! assert!(node::same(rest.as_deref(), Some(&expected)));
//! ```

use std::cmp::Ordering;

use crate::util::Removal;

/// An owning handle to a subtree. `None` is the empty subtree.
pub type Link = Option<Box<Node>>;

/// One element of the tree: a key and two possibly-empty subtrees which it exclusively owns.
#[derive(Clone, Debug)]
pub struct Node {
    /// The key used for ordering.
    pub key: i64,
    /// Every key in here is strictly less than `key`.
    pub left: Link,
    /// Every key in here is greater than or equal to `key`.
    pub right: Link,
}

/// Depth-first visiting orders.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. Yields sorted keys.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        same(Some(self), Some(other))
    }
}

impl Eq for Node {}

impl Node {
    /// Construct a leaf holding `key`.
    pub fn new(key: i64) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Construct a node with the given children. The BST invariant is the caller's to keep.
    pub fn with_children(key: i64, left: Link, right: Link) -> Self {
        Self { key, left, right }
    }

    /// Keys of this subtree, node first.
    pub fn pre_order(&self) -> Vec<i64> {
        self.traverse(Order::Pre)
    }

    /// Keys of this subtree in ascending order.
    pub fn in_order(&self) -> Vec<i64> {
        self.traverse(Order::In)
    }

    /// Keys of this subtree, node last.
    pub fn post_order(&self) -> Vec<i64> {
        self.traverse(Order::Post)
    }

    /// Keys of this subtree in the given depth-first `order`. Each call builds a fresh `Vec`.
    pub fn traverse(&self, order: Order) -> Vec<i64> {
        let mut keys = Vec::new();
        self.walk(order, &mut keys);
        keys
    }

    fn walk(&self, order: Order, keys: &mut Vec<i64>) {
        if order == Order::Pre {
            keys.push(self.key);
        }
        if let Some(left) = &self.left {
            left.walk(order, keys);
        }
        if order == Order::In {
            keys.push(self.key);
        }
        if let Some(right) = &self.right {
            right.walk(order, keys);
        }
        if order == Order::Post {
            keys.push(self.key);
        }
    }
}

/// Places `key` in the subtree and returns the subtree's root, which is a new leaf if the
/// subtree was empty. Keys equal to a node's key go to its right.
pub fn insert(link: Link, key: i64) -> Box<Node> {
    match link {
        None => Box::new(Node::new(key)),
        Some(mut node) => {
            if key < node.key {
                node.left = Some(insert(node.left.take(), key));
            } else {
                node.right = Some(insert(node.right.take(), key));
            }
            node
        }
    }
}

/// Removes the first node holding `key` and returns what's left of the subtree. A missing key
/// (or an empty subtree) hands the subtree back untouched.
pub fn delete(link: Link, key: i64) -> Link {
    delete_with_removal(link, key).0
}

/// [`delete`], also reporting which removal case applied.
pub(crate) fn delete_with_removal(link: Link, key: i64) -> (Link, Removal) {
    let mut node = match link {
        Some(node) => node,
        None => return (None, Removal::NotFound),
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, removal) = delete_with_removal(node.left.take(), key);
            node.left = left;
            (Some(node), removal)
        }
        Ordering::Greater => {
            let (right, removal) = delete_with_removal(node.right.take(), key);
            node.right = right;
            (Some(node), removal)
        }
        Ordering::Equal => remove(node),
    }
}

/// Takes `node` out of its subtree. With two children the node stays put and takes a
/// replacement key from whichever side is taller, right winning ties.
fn remove(mut node: Box<Node>) -> (Link, Removal) {
    match (node.left.take(), node.right.take()) {
        (None, None) => (None, Removal::Leaf),
        (None, Some(right)) => (Some(right), Removal::PromotedRight),
        (Some(left), None) => (Some(left), Removal::PromotedLeft),
        (Some(left), Some(right)) => {
            if height(Some(&*left)) <= height(Some(&*right)) {
                let (rest, successor) = prune_min(right);
                node.key = successor;
                node.left = Some(left);
                node.right = rest;
                (Some(node), Removal::Successor(successor))
            } else {
                let (rest, predecessor) = prune_max(left);
                node.key = predecessor;
                node.left = rest;
                node.right = Some(right);
                (Some(node), Removal::Predecessor(predecessor))
            }
        }
    }
}

/// Removes the largest key from the subtree. Returns what's left of the subtree and that key.
pub fn prune_max(mut node: Box<Node>) -> (Link, i64) {
    match node.right.take() {
        // No right child means this is the largest node. Its left subtree takes its place.
        None => (node.left.take(), node.key),
        Some(right) => {
            let (rest, max) = prune_max(right);
            node.right = rest;
            (Some(node), max)
        }
    }
}

/// Removes the smallest key from the subtree. Returns what's left of the subtree and that key.
pub fn prune_min(mut node: Box<Node>) -> (Link, i64) {
    match node.left.take() {
        None => (node.right.take(), node.key),
        Some(left) => {
            let (rest, min) = prune_min(left);
            node.left = rest;
            (Some(node), min)
        }
    }
}

/// How many nodes are on the longest path from `node` down to a leaf. An empty subtree has a
/// height of 0 and a lone leaf a height of 1.
pub fn height(node: Option<&Node>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + height(n.left.as_deref()).max(height(n.right.as_deref())),
    }
}

/// Whether two subtrees have the same shape and the same key at every position. Two trees
/// holding the same keys in different shapes are not the same.
pub fn same(a: Option<&Node>, b: Option<&Node>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.key == b.key
                && same(a.left.as_deref(), b.left.as_deref())
                && same(a.right.as_deref(), b.right.as_deref())
        }
        _ => false,
    }
}
