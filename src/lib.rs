//! This crate exposes two classic keyed search structures, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a [`Node`]. A `Node` stores a key and a
//! value and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! The tree here is keyed by a `char` and stores an `i32`. It comes in two
//! flavours that behave identically:
//!
//! - [`recursive::Tree`] walks the tree using native recursion.
//! - [`iterative::Tree`] never recurses; it keeps its own stack of pending
//!   nodes instead, so a degenerate tree can't overflow the call stack.
//!
//! Neither tree balances itself. Calling `balance` rebuilds the tree so that
//! every node's subtrees differ in height by at most one.
//!
//! ## Hash Table
//!
//! [`hashtable::HashTable`] maps borrowed string keys to `f32` values using
//! a fixed number of buckets, each bucket being a singly linked chain.
//!
//! # Examples
//!
//! ```
//! use keyed_search::{iterative, recursive, Items, Node, SearchTree};
//!
//! fn fill<T: SearchTree>(tree: &mut T) {
//!     for (value, key) in "abcde".chars().enumerate() {
//!         tree.insert(key, value as i32);
//!     }
//! }
//!
//! fn entries(items: Items<'_>) -> Vec<(char, i32)> {
//!     items.into_iter().map(Node::entry).collect()
//! }
//!
//! let mut slow = recursive::Tree::new();
//! let mut fast = iterative::Tree::new();
//! fill(&mut slow);
//! fill(&mut fast);
//!
//! assert_eq!(slow.height(), 5);
//! slow.balance();
//! fast.balance();
//! assert_eq!(slow.height(), 3);
//! assert_eq!(entries(slow.preorder()), entries(fast.preorder()));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
pub mod config;
pub mod error;
pub mod hashtable;
pub mod iterative;
mod node;
pub mod recursive;
mod util;


pub use node::{Items, Link, Node};

/// The operations shared by both BST implementations. Anything written
/// against this trait behaves the same for either tree.
pub trait SearchTree: Default {
    /// Returns the value stored at `key`, if any.
    fn search(&self, key: char) -> Option<i32>;

    /// Stores `value` at `key`, overwriting any previous value.
    fn insert(&mut self, key: char, value: i32);

    /// Removes `key` from the tree. Absent keys are ignored.
    fn delete(&mut self, key: char);

    /// Frees every node, leaving the tree empty.
    fn dispose(&mut self);

    /// Node, left subtree, right subtree.
    fn preorder(&self) -> Items<'_>;

    /// Left subtree, node, right subtree. Keys come out ascending.
    fn inorder(&self) -> Items<'_>;

    /// Left subtree, right subtree, node.
    fn postorder(&self) -> Items<'_>;

    /// Rebuilds the tree into a height-balanced shape with the same contents.
    fn balance(&mut self);

    /// The number of levels in the tree. An empty tree has height 0.
    fn height(&self) -> usize;

    /// The number of nodes in the tree.
    fn len(&self) -> usize;

    /// Whether the tree holds no nodes.
    fn is_empty(&self) -> bool;

    /// The root node, if the tree isn't empty.
    fn root(&self) -> Option<&Node>;
}
