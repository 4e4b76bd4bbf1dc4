use crate::node::Node;

/// A lazy, in-order iterator yielding mutable references to the values held
/// in each [`Node`].
///
/// The tree structure itself cannot be modified through this iterator, so the
/// ordering and balance of the tree are unaffected.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    /// Each entry holds the value of a visited node and its (not yet visited)
    /// right subtree.
    stack: Vec<(&'a mut T, Option<&'a mut Node<T>>)>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(root: Option<&'a mut Node<T>>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: Option<&'a mut Node<T>>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            // Split the node into disjoint borrows of its fields.
            let Node {
                left, right, value, ..
            } = v;

            self.stack.push((value, right.as_deref_mut()));
            ptr = left.as_deref_mut();
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let (value, right) = self.stack.pop()?;

        self.push_subtree(right);

        Some(value)
    }
}
