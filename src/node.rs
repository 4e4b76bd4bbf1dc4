/// A link to an owned subtree, or [`None`] for an absent child.
pub type Link<T> = Option<Box<Node<T>>>;

/// The storage unit of the tree.
///
/// A [`Node`] exclusively owns its children. There are no parent pointers:
/// structural operations take a subtree root by value and hand back the
/// (possibly different) new subtree root for the caller to re-link.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Child nodes pointers.
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 0, and an absent node is treated as -1.
    pub(crate) height: i32,

    pub(crate) value: T,
}

impl<T> Node<T> {
    /// Construct a new, unlinked leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            left: None,
            right: None,
            height: 0,
            value,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consume this [`Node`], returning the value it holds.
    ///
    /// Any linked children are dropped.
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Link<T> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Link<T> {
        self.right.take()
    }

    /// Unlink both children and reset the height, leaving a detached leaf.
    pub(crate) fn clear(&mut self) {
        self.left = None;
        self.right = None;
        self.height = 0;
    }
}

impl<T> From<T> for Node<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
