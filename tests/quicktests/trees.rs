use keyed_search::{iterative, recursive, Items, Node, SearchTree};

use std::collections::{HashMap, HashSet};

use crate::Op;

fn entries(items: Items<'_>) -> Vec<(char, i32)> {
    items.into_iter().map(Node::entry).collect()
}

/// Applies a set of operations to a tree and a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<T: SearchTree>(ops: &[Op<u8, i32>], bst: &mut T, map: &mut HashMap<char, i32>) {
    for op in ops {
        match *op {
            Op::Insert(k, v) => {
                bst.insert(char::from(k), v);
                map.insert(char::from(k), v);
            }
            Op::Remove(k) => {
                bst.delete(char::from(k));
                map.remove(&char::from(k));
            }
        }
    }
}

fn is_strictly_ascending(tree: &impl SearchTree) -> bool {
    tree.inorder().windows(2).all(|w| w[0].key() < w[1].key())
}

/// Checks at every node that the subtree heights differ by at most one.
fn is_balanced(node: Option<&Node>) -> Option<usize> {
    let Some(node) = node else {
        return Some(0);
    };
    let left = is_balanced(node.left())?;
    let right = is_balanced(node.right())?;
    (left.abs_diff(right) <= 1).then_some(left.max(right) + 1)
}

fn matches_map<T: SearchTree>(ops: Vec<Op<u8, i32>>) -> bool {
    let mut tree = T::default();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.len() == map.len()
        && map.iter().all(|(key, value)| tree.search(*key) == Some(*value))
        && is_strictly_ascending(&tree)
}

fn delete_is_idempotent<T: SearchTree>(xs: Vec<u8>, absent: u8) -> bool {
    let mut tree = T::default();
    for x in xs.iter().filter(|x| **x != absent) {
        tree.insert(char::from(*x), i32::from(*x));
    }
    let before: Vec<_> = tree.preorder().into_iter().map(Node::entry).collect();
    tree.delete(char::from(absent));
    let after: Vec<_> = tree.preorder().into_iter().map(Node::entry).collect();

    before == after
}

fn with_deletions<T: SearchTree>(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
    let mut tree = T::default();
    for x in &xs {
        tree.insert(char::from(*x), i32::from(*x));
    }
    for delete in &deletes {
        tree.delete(char::from(*delete));
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    let still_present: HashSet<_> = xs.iter().filter(|x| !deleted.contains(x)).collect();

    deletes.iter().all(|x| tree.search(char::from(*x)).is_none())
        && still_present
            .iter()
            .all(|x| tree.search(char::from(**x)) == Some(i32::from(**x)))
        && tree.len() == still_present.len()
        && is_strictly_ascending(&tree)
}

fn balance_preserves_contents<T: SearchTree>(ops: Vec<Op<u8, i32>>) -> bool {
    let mut tree = T::default();
    let mut map = HashMap::new();
    do_ops(&ops, &mut tree, &mut map);

    let before: Vec<_> = tree.inorder().into_iter().map(Node::entry).collect();
    tree.balance();
    let after: Vec<_> = tree.inorder().into_iter().map(Node::entry).collect();

    before == after && is_balanced(tree.root()).is_some()
}

fn dispose_empties<T: SearchTree>(xs: Vec<u8>) -> bool {
    let mut tree = T::default();
    for x in &xs {
        tree.insert(char::from(*x), 0);
    }
    tree.dispose();

    tree.is_empty() && tree.len() == 0 && tree.inorder().is_empty()
}

quickcheck::quickcheck! {
    fn recursive_matches_map(ops: Vec<Op<u8, i32>>) -> bool {
        matches_map::<recursive::Tree>(ops)
    }

    fn iterative_matches_map(ops: Vec<Op<u8, i32>>) -> bool {
        matches_map::<iterative::Tree>(ops)
    }

    fn recursive_delete_absent(xs: Vec<u8>, absent: u8) -> bool {
        delete_is_idempotent::<recursive::Tree>(xs, absent)
    }

    fn iterative_delete_absent(xs: Vec<u8>, absent: u8) -> bool {
        delete_is_idempotent::<iterative::Tree>(xs, absent)
    }

    fn recursive_with_deletions(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
        with_deletions::<recursive::Tree>(xs, deletes)
    }

    fn iterative_with_deletions(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
        with_deletions::<iterative::Tree>(xs, deletes)
    }

    fn recursive_balance(ops: Vec<Op<u8, i32>>) -> bool {
        balance_preserves_contents::<recursive::Tree>(ops)
    }

    fn iterative_balance(ops: Vec<Op<u8, i32>>) -> bool {
        balance_preserves_contents::<iterative::Tree>(ops)
    }

    fn recursive_dispose(xs: Vec<u8>) -> bool {
        dispose_empties::<recursive::Tree>(xs)
    }

    fn iterative_dispose(xs: Vec<u8>) -> bool {
        dispose_empties::<iterative::Tree>(xs)
    }
}

quickcheck::quickcheck! {
    fn variants_agree(ops: Vec<Op<u8, i32>>) -> bool {
        let mut slow = recursive::Tree::new();
        let mut fast = iterative::Tree::new();
        let mut map = HashMap::new();
        do_ops(&ops, &mut slow, &mut map);
        do_ops(&ops, &mut fast, &mut map);

        entries(slow.preorder()) == entries(fast.preorder())
            && entries(slow.inorder()) == entries(fast.inorder())
            && entries(slow.postorder()) == entries(fast.postorder())
    }
}
