use std::{fmt, ops::Index};

use crate::{
    compare::{PairComparator, PairKeyComparator},
    error::Error,
    interval::{Bound, Interval, IntervalValuePair},
    iter,
    node::{Link, Node},
    tree,
};

/// A map from non-overlapping [`Interval`] keys to values, looked up by any
/// point within an interval.
///
/// Entries are held in an AVL-balanced tree ordered by interval, giving
/// `O(log n)` insert, lookup and removal.
///
/// ```
/// use interval_map::{Error, Interval, IntervalMap};
///
/// let mut m = IntervalMap::new();
/// m.insert(Interval::closed_open(0, 10), "low")?;
/// m.insert(Interval::closed(10, 20), "high")?;
///
/// assert_eq!(m.get(&5), Some(&"low"));
/// assert_eq!(m.get(&10), Some(&"high"));
/// assert_eq!(m.get(&21), None);
///
/// // Intervals cannot overlap.
/// assert_eq!(m.insert(Interval::closed(15, 30), "bananas"), Err(Error::Overlapping));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone)]
pub struct IntervalMap<B, V> {
    root: Link<IntervalValuePair<B, V>>,
    len: usize,
    read_only: bool,
}

impl<B, V> Default for IntervalMap<B, V> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
            read_only: false,
        }
    }
}

impl<B, V> IntervalMap<B, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Mark this map as read-only.
    ///
    /// All subsequent mutating operations return [`Error::ReadOnly`].
    ///
    /// ```
    /// use interval_map::{Error, Interval, IntervalMap};
    ///
    /// let mut m = IntervalMap::new();
    /// m.insert_closed(1, 5, 'a')?;
    ///
    /// let mut m = m.freeze();
    /// assert!(m.is_read_only());
    /// assert_eq!(m.remove(&3), Err(Error::ReadOnly));
    /// assert_eq!(m.get(&3), Some(&'a'));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn freeze(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Remove all entries.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.check_writable()?;

        self.root = None;
        self.len = 0;
        Ok(())
    }

    /// Iterate over all `(interval, value)` entries, ordered by interval.
    pub fn iter(&self) -> Iter<'_, B, V> {
        Iter(tree::traverse(self.root.as_deref()))
    }

    /// Iterate over all entries, ordered by interval, with mutable references
    /// to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, B, V> {
        IterMut(tree::traverse_mut(self.root.as_deref_mut()))
    }

    /// The values of the map, ordered by their interval.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.iter_mut().map(|(_, v)| v)
    }

    /// The intervals of the map in ascending order.
    pub fn intervals(&self) -> impl Iterator<Item = &Interval<B>> + '_ {
        self.iter().map(|(i, _)| i)
    }

    fn check_writable(&self) -> Result<(), Error> {
        if self.read_only {
            return Err(Error::ReadOnly);
        }
        Ok(())
    }
}

impl<B, V> IntervalMap<B, V>
where
    B: Ord,
{
    /// Build a map from `(interval, value)` tuples, failing on the first
    /// interval that is empty or overlaps a previous one.
    pub fn from_pairs<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Interval<B>, V)>,
    {
        let mut this = Self::new();
        for (interval, value) in iter {
            this.insert(interval, value)?;
        }
        Ok(this)
    }

    /// Insert `value` mapped to `interval`.
    ///
    /// Returns [`Error::Overlapping`] if `interval` shares any point with an
    /// interval already in the map, and [`Error::EmptyInterval`] if
    /// `interval` contains no values. The map is unchanged on error.
    pub fn insert(&mut self, interval: Interval<B>, value: V) -> Result<(), Error> {
        self.insert_pair(IntervalValuePair::new(interval, value))
    }

    /// Insert `value` mapped to the closed interval `[lower, upper]`.
    pub fn insert_closed(&mut self, lower: B, upper: B, value: V) -> Result<(), Error> {
        self.insert(Interval::closed(lower, upper), value)
    }

    /// Insert `value` mapped to the interval with the given bounds and
    /// inclusivity.
    pub fn insert_bounds(
        &mut self,
        lower: B,
        lower_inclusive: bool,
        upper: B,
        upper_inclusive: bool,
        value: V,
    ) -> Result<(), Error> {
        self.insert(
            Interval::new(
                Bound::new(lower, lower_inclusive),
                Bound::new(upper, upper_inclusive),
            ),
            value,
        )
    }

    /// Insert a pre-built [`IntervalValuePair`].
    pub fn insert_pair(&mut self, pair: IntervalValuePair<B, V>) -> Result<(), Error> {
        self.check_writable()?;

        if pair.interval().is_empty() {
            tracing::debug!("rejected empty interval");
            return Err(Error::EmptyInterval);
        }

        let (root, inserted) = tree::insert(
            self.root.take(),
            Box::new(Node::new(pair)),
            &PairComparator::<V>::default(),
        );
        self.root = Some(root);

        if !inserted {
            tracing::debug!(len = self.len, "rejected overlapping interval");
            return Err(Error::Overlapping);
        }

        self.len += 1;
        tracing::trace!(len = self.len, "inserted interval");

        Ok(())
    }

    /// Return the value mapped to the interval containing `key`, if any.
    pub fn get(&self, key: &B) -> Option<&V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Return the interval containing `key` and the value mapped to it, if
    /// any.
    pub fn get_key_value(&self, key: &B) -> Option<(&Interval<B>, &V)> {
        tree::search(self.root.as_deref(), key, &PairKeyComparator::<V>::default())
            .map(|n| (n.value().interval(), n.value().value()))
    }

    /// Return the value mapped to the interval containing `key`, or
    /// [`Error::KeyNotFound`].
    pub fn value_at(&self, key: &B) -> Result<&V, Error> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Return a mutable reference to the value mapped to the interval
    /// containing `key`.
    pub fn get_mut(&mut self, key: &B) -> Result<&mut V, Error> {
        self.check_writable()?;

        tree::search_mut(
            self.root.as_deref_mut(),
            key,
            &PairKeyComparator::<V>::default(),
        )
        .map(|v| v.value_mut())
        .ok_or(Error::KeyNotFound)
    }

    /// Replace the value mapped to the interval containing `key`, returning
    /// the previous value.
    ///
    /// Unlike [`IntervalMap::insert()`] this never adds an entry: if no
    /// interval contains `key`, [`Error::KeyNotFound`] is returned.
    pub fn set(&mut self, key: &B, value: V) -> Result<V, Error> {
        self.get_mut(key).map(|v| std::mem::replace(v, value))
    }

    /// Returns true if an interval in the map contains `key`.
    pub fn contains_key(&self, key: &B) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if an interval overlapping the interval of `pair` is
    /// mapped to a value equal to that of `pair`.
    ///
    /// An empty interval overlaps nothing, so is never contained.
    pub fn contains(&self, pair: &IntervalValuePair<B, V>) -> bool
    where
        V: PartialEq,
    {
        if pair.interval().is_empty() {
            return false;
        }

        tree::search(
            self.root.as_deref(),
            pair.interval(),
            &PairComparator::<V>::default(),
        )
        .map(|n| n.value().value() == pair.value())
        .unwrap_or_default()
    }

    /// Remove the entry whose interval contains `key`, returning the value it
    /// mapped to.
    pub fn remove(&mut self, key: &B) -> Result<Option<V>, Error> {
        self.check_writable()?;

        let (root, removed) = tree::remove(
            self.root.take(),
            key,
            &PairKeyComparator::<V>::default(),
        );

        Ok(self.unlinked(root, removed).map(|v| v.into_parts().1))
    }

    /// Remove an entry whose interval overlaps `interval`, returning it.
    ///
    /// If more than one stored interval overlaps `interval`, only one of them
    /// is removed. An empty `interval` overlaps nothing and removes nothing.
    pub fn remove_interval(
        &mut self,
        interval: &Interval<B>,
    ) -> Result<Option<IntervalValuePair<B, V>>, Error> {
        self.check_writable()?;

        if interval.is_empty() {
            return Ok(None);
        }

        let (root, removed) = tree::remove(
            self.root.take(),
            interval,
            &PairComparator::<V>::default(),
        );

        Ok(self.unlinked(root, removed))
    }

    /// Install the new `root` after a removal, accounting for the `removed`
    /// node (if any).
    fn unlinked(
        &mut self,
        root: Link<IntervalValuePair<B, V>>,
        removed: Link<IntervalValuePair<B, V>>,
    ) -> Option<IntervalValuePair<B, V>> {
        self.root = root;

        let removed = removed?;
        debug_assert!(removed.is_leaf());

        self.len -= 1;
        tracing::debug!(len = self.len, "removed interval");

        Some(removed.into_value())
    }
}

impl<B, V> Index<&B> for IntervalMap<B, V>
where
    B: Ord,
{
    type Output = V;

    /// Returns a reference to the value mapped to the interval containing
    /// `key`.
    ///
    /// # Panics
    ///
    /// Panics if no interval contains `key`.
    fn index(&self, key: &B) -> &Self::Output {
        match self.get(key) {
            Some(v) => v,
            None => panic!("{}", Error::KeyNotFound),
        }
    }
}

impl<B, V> fmt::Debug for IntervalMap<B, V>
where
    B: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// An in-order iterator over the entries of an [`IntervalMap`].
#[derive(Debug)]
pub struct Iter<'a, B, V>(iter::Iter<'a, IntervalValuePair<B, V>>);

impl<B, V> Clone for Iter<'_, B, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, B, V> Iterator for Iter<'a, B, V> {
    type Item = (&'a Interval<B>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|n| (n.value().interval(), n.value().value()))
    }
}

/// An in-order iterator over the entries of an [`IntervalMap`], with mutable
/// values.
#[derive(Debug)]
pub struct IterMut<'a, B, V>(iter::IterMut<'a, IntervalValuePair<B, V>>);

impl<'a, B, V> Iterator for IterMut<'a, B, V> {
    type Item = (&'a Interval<B>, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|v| v.split_mut())
    }
}

/// An owning, in-order iterator over the entries of an [`IntervalMap`].
#[derive(Debug)]
pub struct IntoIter<B, V>(iter::IntoIter<IntervalValuePair<B, V>>);

impl<B, V> Iterator for IntoIter<B, V> {
    type Item = (Interval<B>, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|v| v.into_parts())
    }
}

impl<B, V> IntoIterator for IntervalMap<B, V> {
    type Item = (Interval<B>, V);
    type IntoIter = IntoIter<B, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(tree::into_traverse(self.root))
    }
}

impl<'a, B, V> IntoIterator for &'a IntervalMap<B, V> {
    type Item = (&'a Interval<B>, &'a V);
    type IntoIter = Iter<'a, B, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, B, V> IntoIterator for &'a mut IntervalMap<B, V> {
    type Item = (&'a Interval<B>, &'a mut V);
    type IntoIter = IterMut<'a, B, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
