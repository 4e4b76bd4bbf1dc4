//! The AVL tree engine.
//!
//! Every function here operates on [`Node`] ownership links and a caller
//! supplied [`Comparator`]. Structural operations take the subtree root by
//! value and return the new subtree root, which the caller must re-link in
//! place of the old one: an insert or removal may rotate a different node into
//! the root position.
//!
//! The engine never fails. A rejected insert or a removal of an absent value is
//! reported through the return value and the tree is left unchanged.

use std::cmp::Ordering;

use crate::{
    compare::Comparator,
    iter::{IntoIter, Iter, IterMut},
    node::{Link, Node},
};

/// Perform a lazy, in-order traversal of the subtree rooted at `root`.
///
/// An absent root yields an empty sequence.
pub fn traverse<T>(root: Option<&Node<T>>) -> Iter<'_, T> {
    Iter::new(root)
}

/// Visit the values of the subtree rooted at `root` in order, yielding mutable
/// references to each.
pub fn traverse_mut<T>(root: Option<&mut Node<T>>) -> IterMut<'_, T> {
    IterMut::new(root)
}

/// Consume the subtree rooted at `root`, yielding each value in order.
pub fn into_traverse<T>(root: Link<T>) -> IntoIter<T> {
    IntoIter::new(root)
}

/// Search the subtree rooted at `root` for the node matching `query`.
pub fn search<'a, T, Q, C>(root: Option<&'a Node<T>>, query: &Q, cmp: &C) -> Option<&'a Node<T>>
where
    Q: ?Sized,
    C: Comparator<Q, T> + ?Sized,
{
    let mut ptr = root;

    while let Some(n) = ptr {
        ptr = match cmp.compare(query, n.value()) {
            Ordering::Less => n.left(),
            Ordering::Greater => n.right(),
            Ordering::Equal => return Some(n),
        };
    }

    None
}

/// Search the subtree rooted at `root` for the node matching `query`,
/// returning a mutable reference to its value.
///
/// Only the value is exposed, so the caller cannot invalidate the tree
/// structure, although mutating the value in a way that changes its ordering
/// will.
pub fn search_mut<'a, T, Q, C>(
    root: Option<&'a mut Node<T>>,
    query: &Q,
    cmp: &C,
) -> Option<&'a mut T>
where
    Q: ?Sized,
    C: Comparator<Q, T> + ?Sized,
{
    let mut ptr = root;

    while let Some(n) = ptr {
        ptr = match cmp.compare(query, n.value()) {
            Ordering::Less => n.left.as_deref_mut(),
            Ordering::Greater => n.right.as_deref_mut(),
            Ordering::Equal => return Some(&mut n.value),
        };
    }

    None
}

/// Insert `node` into the subtree rooted at `root`.
///
/// Returns the new subtree root and `true` if `node` was linked into the tree.
/// If an equal value (as determined by `cmp`) already exists the tree is
/// unchanged, `node` is dropped and `false` is returned.
pub fn insert<T, C>(root: Link<T>, node: Box<Node<T>>, cmp: &C) -> (Box<Node<T>>, bool)
where
    C: Comparator<T, T> + ?Sized,
{
    let mut root = match root {
        Some(v) => v,
        None => {
            debug_assert!(node.is_leaf());
            return (node, true);
        }
    };

    let inserted = match cmp.compare(node.value(), root.value()) {
        Ordering::Less => {
            let (left, inserted) = insert(root.take_left(), node, cmp);
            root.left = Some(left);
            inserted
        }
        Ordering::Greater => {
            let (right, inserted) = insert(root.take_right(), node, cmp);
            root.right = Some(right);
            inserted
        }
        Ordering::Equal => return (root, false),
    };

    if !inserted {
        // The tree structure has not been modified, so it does not require
        // rebalancing.
        return (root, false);
    }

    update_height(&mut root);
    let root = balance(root);

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance_factor(&root).abs() <= 1);

    (root, true)
}

/// Remove the node matching `query` from the subtree rooted at `root`.
///
/// Returns the new subtree root, and the removed node (if any). The removed
/// node is returned detached: it has no children and a height of 0.
pub fn remove<T, Q, C>(root: Link<T>, query: &Q, cmp: &C) -> (Link<T>, Link<T>)
where
    Q: ?Sized,
    C: Comparator<Q, T> + ?Sized,
{
    let mut root = match root {
        Some(v) => v,
        None => return (None, None),
    };

    let removed = match cmp.compare(query, root.value()) {
        Ordering::Less => {
            let (left, removed) = remove(root.take_left(), query, cmp);
            root.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove(root.take_right(), query, cmp);
            root.right = right;
            removed
        }
        Ordering::Equal => {
            let (replacement, removed) = remove_root(root);
            return (replacement, Some(removed));
        }
    };

    if removed.is_none() {
        return (Some(root), None);
    }

    update_height(&mut root);
    let root = balance(root);
    debug_assert!(balance_factor(&root).abs() <= 1);

    (Some(root), removed)
}

/// Unlink `root` from the subtree it roots, returning the replacement subtree
/// root and the detached `root`.
fn remove_root<T>(mut root: Box<Node<T>>) -> (Link<T>, Box<Node<T>>) {
    // This node may have 0, 1 or 2 child node(s):
    //
    //                          +----------+
    //                          |  parent  |
    //                          +----------+
    //                                |
    //                                v
    //                          +----------+
    //                     +----|   root   |----+
    //                     |    +----------+    |
    //                     |                    |
    //                     v                    v
    //               +-----------+       +------------+
    //               | root.left |       | root.right |
    //               +-----------+       +------------+
    //
    // With a single child, that child replaces "root". With two, the in-order
    // neighbour taken from the taller subtree replaces "root" so that the
    // removal shortens the taller side.
    let replacement = match (root.take_left(), root.take_right()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            let mut promoted = if left.height() > right.height() {
                // Left is taller: promote the in-order predecessor.
                let (left, mut predecessor) = remove_last(left);
                predecessor.left = left;
                predecessor.right = Some(right);
                predecessor
            } else {
                // Right is taller, or both are equal: promote the in-order
                // successor.
                let (right, mut successor) = remove_first(right);
                successor.left = Some(left);
                successor.right = right;
                successor
            };

            update_height(&mut promoted);
            Some(balance(promoted))
        }
    };

    root.clear();
    (replacement, root)
}

/// Detach the minimum (left-most) node of the subtree rooted at `root`.
///
/// Returns the new subtree root and the detached node, rebalancing every node
/// on the path back up to `root`.
pub fn remove_first<T>(mut root: Box<Node<T>>) -> (Link<T>, Box<Node<T>>) {
    match root.take_left() {
        Some(left) => {
            let (left, removed) = remove_first(left);
            root.left = left;

            update_height(&mut root);
            (Some(balance(root)), removed)
        }
        None => {
            // The left edge ends here. The right child (if any) takes the
            // place of the extracted node.
            let right = root.take_right();
            root.clear();
            (right, root)
        }
    }
}

/// Detach the maximum (right-most) node of the subtree rooted at `root`.
///
/// The mirror of [`remove_first()`].
pub fn remove_last<T>(mut root: Box<Node<T>>) -> (Link<T>, Box<Node<T>>) {
    match root.take_right() {
        Some(right) => {
            let (right, removed) = remove_last(right);
            root.right = right;

            update_height(&mut root);
            (Some(balance(root)), removed)
        }
        None => {
            let left = root.take_left();
            root.clear();
            (left, root)
        }
    }
}

/// The height of `n`, or -1 for an absent node.
pub fn height<T>(n: Option<&Node<T>>) -> i32 {
    n.map(|v| v.height()).unwrap_or(-1)
}

/// Recompute the cached height of `n` from the cached heights of its
/// children.
pub(crate) fn update_height<T>(n: &mut Node<T>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub fn balance_factor<T>(n: &Node<T>) -> i32 {
    height(n.left()) - height(n.right())
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`,
/// returning `P` as the new subtree root.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// If `x` has no right child it cannot be rotated and is returned unchanged.
pub fn rotate_left<T>(mut x: Box<Node<T>>) -> Box<Node<T>> {
    let mut p = match x.take_right() {
        Some(v) => v,
        None => return x,
    };

    x.right = p.take_left();
    update_height(&mut x);

    p.left = Some(x);
    update_height(&mut p);

    p
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`,
/// returning `P` as the new subtree root.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// If `y` has no left child it cannot be rotated and is returned unchanged.
pub fn rotate_right<T>(mut y: Box<Node<T>>) -> Box<Node<T>> {
    let mut p = match y.take_left() {
        Some(v) => v,
        None => return y,
    };

    y.left = p.take_right();
    update_height(&mut y);

    p.right = Some(y);
    update_height(&mut p);

    p
}

/// Restore the AVL balance of the subtree rooted at `root`, returning the new
/// subtree root.
///
/// The children of `root` must be balanced, and the cached height of `root`
/// up to date.
pub fn balance<T>(mut root: Box<Node<T>>) -> Box<Node<T>> {
    match balance_factor(&root) {
        // Right-heavy
        (..=-2) => {
            if root.right().map(balance_factor).unwrap_or_default() > 0 {
                tracing::trace!("right-left rotation");
                root.right = root.take_right().map(rotate_right);
            } else {
                tracing::trace!("left rotation");
            }
            rotate_left(root)
        }
        // Left-heavy
        (2..) => {
            if root.left().map(balance_factor).unwrap_or_default() < 0 {
                tracing::trace!("left-right rotation");
                root.left = root.take_left().map(rotate_left);
            } else {
                tracing::trace!("right rotation");
            }
            rotate_right(root)
        }
        -1..=1 => root,
    }
}
