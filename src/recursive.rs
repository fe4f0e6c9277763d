//! A BST built with direct recursion. Every walk down the tree is a chain of
//! native calls, one per level, so a degenerate tree is limited by the size
//! of the call stack. [`Tree::balance`] keeps the height logarithmic.
//!
//! # Examples
//!
//! ```
//! use keyed_search::recursive::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search('a'), None);
//!
//! tree.insert('a', 2);
//! assert_eq!(tree.search('a'), Some(2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert('a', 3);
//! assert_eq!(tree.search('a'), Some(3));
//!
//! tree.delete('a');
//! assert_eq!(tree.search('a'), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::balance;
use crate::node::{self, Items, Link, Node};
use crate::SearchTree;

/// A Binary Search Tree keyed by `char` holding `i32`s. This can be used for
/// inserting, finding, and deleting keys and values.
#[derive(Default)]
pub struct Tree {
    root: Link,
}

/// Two trees are equal when they have the same shape and the same entries,
/// which for a BST is the same as having the same preorder.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        node::entries(self.preorder()) == node::entries(other.preorder())
    }
}

impl Eq for Tree {}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("preorder", &node::entries(self.preorder()))
            .finish()
    }
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_search::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert('b', 2);
    ///
    /// assert_eq!(tree.search('b'), Some(2));
    /// assert_eq!(tree.search('z'), None);
    /// ```
    pub fn search(&self, key: char) -> Option<i32> {
        search(&self.root, key)
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for an
    /// existing key overwrites its value. If the new node can't be allocated the tree is left
    /// exactly as it was.
    pub fn insert(&mut self, key: char, value: i32) {
        insert(&mut self.root, key, value);
        debug_assert!(
            node::path_is_ordered(&self.root, key),
            "{key:?} was inserted out of order"
        );
    }

    /// Deletes the node containing the given key from the tree. If the tree does not contain a
    /// node with the key, nothing happens.
    ///
    /// A node with two children stays where it is and takes over the key and value of the
    /// rightmost node of its left subtree, which is deleted instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_search::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in ['d', 'b', 'f', 'a', 'c'] {
    ///     tree.insert(key, 0);
    /// }
    /// tree.delete('d');
    ///
    /// // 'c' was the largest key left of 'd', so it moved into the root.
    /// assert_eq!(tree.root().map(|n| n.key()), Some('c'));
    /// ```
    pub fn delete(&mut self, key: char) {
        delete(&mut self.root, key);
    }

    /// Frees every node, children before their parents, and leaves the tree empty.
    pub fn dispose(&mut self) {
        log::trace!("disposing recursive tree");
        dispose(&mut self.root);
    }

    /// Visits each node before its left and then its right subtree.
    pub fn preorder(&self) -> Items<'_> {
        let mut items = Vec::new();
        preorder(self.root.as_deref(), &mut items);
        items
    }

    /// Visits the left subtree, then the node, then the right subtree. The
    /// nodes come out sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_search::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert('b', 1);
    /// tree.insert('a', 2);
    /// tree.insert('c', 3);
    ///
    /// let keys: Vec<_> = tree.inorder().into_iter().map(|n| n.key()).collect();
    /// assert_eq!(keys, ['a', 'b', 'c']);
    /// ```
    pub fn inorder(&self) -> Items<'_> {
        let mut items = Vec::new();
        inorder(self.root.as_deref(), &mut items);
        items
    }

    /// Visits both subtrees, left then right, before the node itself.
    pub fn postorder(&self) -> Items<'_> {
        let mut items = Vec::new();
        postorder(self.root.as_deref(), &mut items);
        items
    }

    /// Rebuilds the tree so that at every node the heights of the two subtrees differ by at most
    /// one. The nodes themselves are reused, only their links change.
    pub fn balance(&mut self) {
        let before = self.height();
        let mut nodes = Vec::new();
        drain_inorder(self.root.take(), &mut nodes);
        let count = nodes.len();
        self.root = balance::rebuild(&mut nodes);
        log::debug!(
            "balanced {count} nodes, height {before} -> {}",
            self.height()
        );
    }

    /// Gets the height of this tree. An empty tree has height 0 and a single node height 1.
    pub fn height(&self) -> usize {
        height(self.root.as_deref())
    }

    /// Counts the nodes in the tree.
    pub fn len(&self) -> usize {
        len(self.root.as_deref())
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node of the tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }
}

impl SearchTree for Tree {
    fn search(&self, key: char) -> Option<i32> {
        self.search(key)
    }

    fn insert(&mut self, key: char, value: i32) {
        self.insert(key, value)
    }

    fn delete(&mut self, key: char) {
        self.delete(key)
    }

    fn dispose(&mut self) {
        self.dispose()
    }

    fn preorder(&self) -> Items<'_> {
        self.preorder()
    }

    fn inorder(&self) -> Items<'_> {
        self.inorder()
    }

    fn postorder(&self) -> Items<'_> {
        self.postorder()
    }

    fn balance(&mut self) {
        self.balance()
    }

    fn height(&self) -> usize {
        self.height()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    fn root(&self) -> Option<&Node> {
        self.root()
    }
}

fn search(link: &Link, key: char) -> Option<i32> {
    let node = link.as_deref()?;
    match key.cmp(&node.key) {
        Ordering::Less => search(&node.left, key),
        Ordering::Equal => Some(node.value),
        Ordering::Greater => search(&node.right, key),
    }
}

fn insert(link: &mut Link, key: char, value: i32) {
    match link {
        None => {
            if let Some(node) = Node::try_new_boxed(key, value) {
                *link = Some(node);
            }
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key, value),
            Ordering::Equal => node.value = value,
            Ordering::Greater => insert(&mut node.right, key, value),
        },
    }
}

fn delete(link: &mut Link, key: char) {
    let Some(node) = link.as_mut() else {
        return;
    };
    match key.cmp(&node.key) {
        Ordering::Less => delete(&mut node.left, key),
        Ordering::Greater => delete(&mut node.right, key),
        Ordering::Equal => {
            if node.left.is_none() {
                *link = node.right.take();
            } else if node.right.is_none() {
                *link = node.left.take();
            } else if let Some((successor, value)) = replace_by_rightmost(&mut node.left) {
                node.key = successor;
                node.value = value;
            }
        }
    }
}

/// Follows right children down from `link` to the largest node, deletes it and hands back its
/// key and value.
fn replace_by_rightmost(link: &mut Link) -> Option<(char, i32)> {
    let node = link.as_mut()?;
    if node.right.is_some() {
        return replace_by_rightmost(&mut node.right);
    }
    let entry = node.entry();
    // The rightmost node has no right child, so this only ever splices.
    delete(link, entry.0);
    Some(entry)
}

fn dispose(link: &mut Link) {
    if let Some(mut node) = link.take() {
        dispose(&mut node.left);
        dispose(&mut node.right);
    }
}

fn preorder<'a>(node: Option<&'a Node>, items: &mut Items<'a>) {
    if let Some(node) = node {
        items.push(node);
        preorder(node.left(), items);
        preorder(node.right(), items);
    }
}

fn inorder<'a>(node: Option<&'a Node>, items: &mut Items<'a>) {
    if let Some(node) = node {
        inorder(node.left(), items);
        items.push(node);
        inorder(node.right(), items);
    }
}

fn postorder<'a>(node: Option<&'a Node>, items: &mut Items<'a>) {
    if let Some(node) = node {
        postorder(node.left(), items);
        postorder(node.right(), items);
        items.push(node);
    }
}

/// Detaches every node from `link` in key order. Each node comes out with both children cleared.
fn drain_inorder(link: Link, nodes: &mut Vec<Link>) {
    if let Some(mut node) = link {
        drain_inorder(node.left.take(), nodes);
        let right = node.right.take();
        nodes.push(Some(node));
        drain_inorder(right, nodes);
    }
}

fn height(node: Option<&Node>) -> usize {
    node.map_or(0, |n| height(n.left()).max(height(n.right())) + 1)
}

fn len(node: Option<&Node>) -> usize {
    node.map_or(0, |n| len(n.left()) + len(n.right()) + 1)
}
