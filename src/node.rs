use std::cmp::Ordering;
use std::fmt;

use crate::util;

/// An exclusive ownership slot for a subtree. `None` is an empty subtree.
/// The root of a tree and both children of every [`Node`] are `Link`s, so
/// relinking a subtree is always a matter of rewriting one of these slots.
pub type Link = Option<Box<Node>>;

/// The result of a traversal: the visited nodes in visiting order. These are
/// references into the tree, not copies, so they can't outlive the next
/// mutation of the tree.
pub type Items<'a> = Vec<&'a Node>;

/// A `Node` has a key that is used for searching/sorting and a value
/// that is associated with that key. Either child may be empty.
pub struct Node {
    pub(crate) key: char,
    pub(crate) value: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// Construct a new leaf `Node` with the given `key` and `value`.
    pub(crate) fn new(key: char, value: i32) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// Allocates a new leaf. Returns `None` when the allocator can't provide
    /// the memory, in which case nothing was allocated.
    pub(crate) fn try_new_boxed(key: char, value: i32) -> Link {
        let node = util::try_box(Self::new(key, value));
        if node.is_none() {
            log::warn!("allocation failed, dropping insert of {key:?}");
        }
        node
    }

    /// The key this node is sorted by.
    pub fn key(&self) -> char {
        self.key
    }

    /// The value stored alongside the key.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The root of the left subtree.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// The `(key, value)` pair stored in this node.
    pub fn entry(&self) -> (char, i32) {
        (self.key, self.value)
    }
}

/// Only the node's own entry is printed. Following the links here would
/// recurse once per level.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// The `(key, value)` pairs of a traversal, in visiting order.
pub(crate) fn entries(items: Items<'_>) -> Vec<(char, i32)> {
    items.into_iter().map(Node::entry).collect()
}

/// Follows the search path for `key` from `root` and checks that every node
/// on it lies strictly between the bounds set by its ancestors. Returns
/// `false` if the path breaks the ordering invariant.
pub(crate) fn path_is_ordered(root: &Link, key: char) -> bool {
    let (mut low, mut high) = (None, None);
    let mut link = root.as_deref();
    while let Some(node) = link {
        if low.is_some_and(|low| node.key <= low) || high.is_some_and(|high| node.key >= high) {
            return false;
        }
        link = match key.cmp(&node.key) {
            Ordering::Less => {
                high = Some(node.key);
                node.left()
            }
            Ordering::Equal => None,
            Ordering::Greater => {
                low = Some(node.key);
                node.right()
            }
        };
    }
    true
}

/// Walks down from `slot` and returns the slot holding `key`. If the key
/// isn't in the subtree, the returned slot is the empty one where a node
/// with that key belongs.
pub(crate) fn seek(mut slot: &mut Link, key: char) -> &mut Link {
    loop {
        let ordering = slot.as_deref().map(|node| key.cmp(&node.key));
        match ordering {
            None | Some(Ordering::Equal) => return slot,
            Some(Ordering::Less) => {
                if let Some(node) = slot {
                    slot = &mut node.left;
                }
            }
            Some(Ordering::Greater) => {
                if let Some(node) = slot {
                    slot = &mut node.right;
                }
            }
        }
    }
}

/// Returns the slot holding the rightmost (largest) node of the subtree in
/// `slot`. The node in the returned slot has no right child.
pub(crate) fn rightmost(mut slot: &mut Link) -> &mut Link {
    while slot.as_deref().is_some_and(|node| node.right.is_some()) {
        if let Some(node) = slot {
            slot = &mut node.right;
        }
    }
    slot
}

/// Unlinks the node in `slot` and puts its only child (or nothing) in its
/// place. The node must not have two children.
pub(crate) fn splice(slot: &mut Link) -> Link {
    let mut node = slot.take()?;
    debug_assert!(
        node.left.is_none() || node.right.is_none(),
        "splicing out {:?} would orphan a subtree",
        node.key
    );
    *slot = match node.left.take() {
        Some(left) => Some(left),
        None => node.right.take(),
    };
    Some(node)
}
