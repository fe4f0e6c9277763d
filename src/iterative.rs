//! A BST that never recurses. Searching, inserting and deleting follow a
//! single path from the root, so they only keep a cursor to the link being
//! rewritten. Traversals and disposal keep an explicit stack of pending
//! nodes on the heap instead of native call frames, so their memory use is
//! bounded by the height of the tree and a degenerate tree can't overflow
//! the call stack.
//!
//! The tree behaves exactly like [`recursive::Tree`](crate::recursive::Tree).
//!
//! # Examples
//!
//! ```
//! use keyed_search::iterative::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // A long chain would be a deep recursion. Here it's just a loop.
//! for key in ('\u{100}'..'\u{2100}').step_by(7) {
//!     tree.insert(key, 1);
//! }
//! assert_eq!(tree.height(), tree.len());
//!
//! tree.balance();
//! assert_eq!(tree.height(), 11);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::balance;
use crate::node::{self, Items, Link, Node};
use crate::SearchTree;

/// The two states of a node on the postorder stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visit {
    /// Its left spine has been pushed. Its right subtree is still pending.
    First,
    /// Both subtrees are done, so the node is ready to be emitted.
    Second,
}

/// A Binary Search Tree keyed by `char` holding `i32`s, implemented without recursion.
#[derive(Default)]
pub struct Tree {
    root: Link,
}

/// Compares the preorders, which for a BST pins down both the shape and the entries. Deriving
/// this would recurse through the links.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.preorder()
            .into_iter()
            .map(Node::entry)
            .eq(other.preorder().into_iter().map(Node::entry))
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

impl Drop for Tree {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Potentially finds the value associated with the given key in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_search::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert('b', 2);
    ///
    /// assert_eq!(tree.search('b'), Some(2));
    /// assert_eq!(tree.search('z'), None);
    /// ```
    pub fn search(&self, key: char) -> Option<i32> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node.value),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Inserts the given value into the tree stored at the given key, overwriting the value of an
    /// existing key. On allocation failure the tree is left untouched.
    pub fn insert(&mut self, key: char, value: i32) {
        let slot = node::seek(&mut self.root, key);
        match slot {
            Some(existing) => existing.value = value,
            None => {
                if let Some(leaf) = Node::try_new_boxed(key, value) {
                    *slot = Some(leaf);
                }
            }
        }
        debug_assert!(
            node::path_is_ordered(&self.root, key),
            "{key:?} was inserted out of order"
        );
    }

    /// Deletes the node containing the given key from the tree. Absent keys are ignored.
    ///
    /// A node with two children isn't unlinked; it takes the key and value of the rightmost node of
    /// its left subtree and that node is spliced out instead.
    pub fn delete(&mut self, key: char) {
        let slot = node::seek(&mut self.root, key);
        let Some(target) = slot.as_mut() else {
            return;
        };
        if target.left.is_some() && target.right.is_some() {
            let rightmost = node::rightmost(&mut target.left);
            if let Some(successor) = node::splice(rightmost) {
                target.key = successor.key;
                target.value = successor.value;
            }
        } else {
            node::splice(slot);
        }
    }

    /// Frees every node and leaves the tree empty. A node is only freed after both of its children
    /// have been detached and pushed, so nothing leaks and nothing is freed twice.
    pub fn dispose(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        let mut freed = 0usize;
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
            freed += 1;
        }
        if freed > 0 {
            log::trace!("disposed {freed} nodes");
        }
    }

    /// Visits each node before its left and then its right subtree.
    ///
    /// Walking down a left spine emits each node and remembers it. When a remembered node is
    /// popped, the left spine of its right child is walked next.
    pub fn preorder(&self) -> Items<'_> {
        let mut items = Vec::new();
        let mut stack = Vec::new();
        leftmost_preorder(self.root.as_deref(), &mut stack, &mut items);
        while let Some(node) = stack.pop() {
            leftmost_preorder(node.right(), &mut stack, &mut items);
        }
        items
    }

    /// Visits the left subtree, then the node, then the right subtree. The nodes come out sorted
    /// by key.
    pub fn inorder(&self) -> Items<'_> {
        let mut items = Vec::new();
        let mut stack = Vec::new();
        leftmost_inorder(self.root.as_deref(), &mut stack);
        while let Some(node) = stack.pop() {
            items.push(node);
            leftmost_inorder(node.right(), &mut stack);
        }
        items
    }

    /// Visits both subtrees, left then right, before the node itself.
    ///
    /// Every node is popped twice. The first time it goes back on the stack marked as visited,
    /// with the left spine of its right child on top of it. The second time both subtrees are done
    /// and the node is emitted.
    pub fn postorder(&self) -> Items<'_> {
        let mut items = Vec::new();
        let mut stack = Vec::new();
        leftmost_postorder(self.root.as_deref(), &mut stack);
        while let Some((node, visit)) = stack.pop() {
            match visit {
                Visit::First => {
                    stack.push((node, Visit::Second));
                    leftmost_postorder(node.right(), &mut stack);
                }
                Visit::Second => items.push(node),
            }
        }
        items
    }

    /// Rebuilds the tree so that at every node the heights of the two subtrees differ by at most
    /// one. The nodes are detached in key order and relinked; none are reallocated.
    pub fn balance(&mut self) {
        let before = self.height();
        let mut nodes = drain_inorder(self.root.take());
        let count = nodes.len();
        self.root = balance::rebuild(&mut nodes);
        log::debug!(
            "balanced {count} nodes, height {before} -> {}",
            self.height()
        );
    }

    /// Gets the height of this tree. An empty tree has height 0 and a single node height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Counts the nodes in the tree.
    pub fn len(&self) -> usize {
        let mut len = 0;
        let mut stack: Vec<&Node> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            len += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        len
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

/// Walks the left spine from `node`, emitting and pushing every node on it.
fn leftmost_preorder<'a>(
    mut node: Option<&'a Node>,
    to_visit: &mut Vec<&'a Node>,
    items: &mut Items<'a>,
) {
    while let Some(n) = node {
        items.push(n);
        to_visit.push(n);
        node = n.left();
    }
}

/// Pushes every node on the left spine from `node`.
fn leftmost_inorder<'a>(mut node: Option<&'a Node>, to_visit: &mut Vec<&'a Node>) {
    while let Some(n) = node {
        to_visit.push(n);
        node = n.left();
    }
}

/// Pushes every node on the left spine from `node`, each on its first visit.
fn leftmost_postorder<'a>(mut node: Option<&'a Node>, to_visit: &mut Vec<(&'a Node, Visit)>) {
    while let Some(n) = node {
        to_visit.push((n, Visit::First));
        node = n.left();
    }
}

/// Detaches every node in key order, clearing both children of each.
fn drain_inorder(mut link: Link) -> Vec<Link> {
    let mut nodes = Vec::new();
    let mut stack = Vec::new();
    loop {
        while let Some(mut node) = link {
            link = node.left.take();
            stack.push(node);
        }
        let Some(mut node) = stack.pop() else {
            break;
        };
        link = node.right.take();
        nodes.push(Some(node));
    }
    nodes
}
