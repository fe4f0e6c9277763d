use crate::node::Link;

/// Builds a height-balanced tree out of `nodes`, which must be sorted by key
/// and have no children. The middle node (the lower middle for an even
/// count) becomes the root, the nodes before it form its left subtree and
/// the nodes after it its right subtree. Every slot is emptied.
///
/// The recursion depth is the height of the result, which is logarithmic in
/// the number of nodes.
pub(crate) fn rebuild(nodes: &mut [Link]) -> Link {
    build(nodes).0
}

/// Does the work of [`rebuild`], also returning the height of the result.
fn build(nodes: &mut [Link]) -> (Link, usize) {
    let middle = nodes.len() / 2;
    let (left, rest) = nodes.split_at_mut(middle);
    let Some((root, right)) = rest.split_first_mut() else {
        return (None, 0);
    };
    let Some(mut root) = root.take() else {
        return (None, 0);
    };

    let (left, left_height) = build(left);
    let (right, right_height) = build(right);
    root.left = left;
    root.right = right;

    debug_assert!(
        root.left().map_or(true, |left| left.key < root.key),
        "{:?} is not below {:?}",
        root.left().map(|left| left.key),
        root.key
    );
    debug_assert!(
        root.right().map_or(true, |right| right.key > root.key),
        "{:?} is not above {:?}",
        root.right().map(|right| right.key),
        root.key
    );
    debug_assert!(
        left_height.abs_diff(right_height) <= 1,
        "subtrees of {:?} are {left_height} and {right_height} tall",
        root.key
    );

    (Some(root), left_height.max(right_height) + 1)
}
