use std::fmt::Debug;

use proptest::prelude::*;

use crate::{
    compare::Comparator,
    interval::{Bound, Interval},
    node::Node,
    tree::{balance_factor, height, traverse},
};

const RANGE_MAX: usize = 20;

/// Generate arbitrary (potentially empty!) intervals with bounds from
/// [0..[`RANGE_MAX`]) and random inclusivity.
pub(crate) fn arbitrary_interval() -> impl Strategy<Value = Interval<usize>> {
    (0..RANGE_MAX, any::<bool>(), 0..RANGE_MAX, any::<bool>()).prop_map(
        |(lower, lower_inc, upper, upper_inc)| {
            Interval::new(Bound::new(lower, lower_inc), Bound::new(upper, upper_inc))
        },
    )
}

/// Generate arbitrary non-empty intervals.
pub(crate) fn arbitrary_valid_interval() -> impl Strategy<Value = Interval<usize>> {
    arbitrary_interval().prop_filter("empty interval", |v| !v.is_empty())
}

/// Assert the BST and AVL properties of every node in the tree rooted at
/// `root`, ensuring the tree is well-formed.
#[track_caller]
pub(crate) fn validate_tree_structure<T, C>(root: Option<&Node<T>>, cmp: &C)
where
    T: Debug,
    C: Comparator<T, T>,
{
    let root = match root {
        Some(v) => v,
        None => return,
    };

    // Invariant 1: an in-order traversal yields values in strictly ascending
    // order, which holds only if every left descendant is less than, and
    // every right descendant greater than, each node.
    let ordered = traverse(Some(root)).collect::<Vec<_>>();
    for w in ordered.windows(2) {
        assert!(
            cmp.compare(w[0].value(), w[1].value()).is_lt(),
            "{:?} is not less than {:?}",
            w[0].value(),
            w[1].value(),
        );
    }

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 2: the height of this node is always +1 of the maximum
        // child height, where an absent child has a height of -1.
        let want_height = 1 + height(n.left()).max(height(n.right()));
        assert_eq!(
            n.height(),
            want_height,
            "expect node with value {:?} to have height {}, has {}",
            n.value(),
            want_height,
            n.height(),
        );

        // Invariant 3: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = balance_factor(n).abs();
        assert!(balance <= 1, "balance={balance}, node={:?}", n.value());
    }
}
