//! Three-way comparators used to order and query tree nodes.
//!
//! The tree engine is agnostic to what it stores: every engine call is handed
//! a [`Comparator`] that orders a query against a stored value. The same tree
//! of [`IntervalValuePair`] can therefore be searched by an interval (using
//! overlap as equality) or by a single point (using containment as equality).

use std::{cmp::Ordering, marker::PhantomData};

use crate::interval::{Interval, IntervalValuePair};

/// A three-way comparison of a query `Q` against a stored value `T`.
///
/// Implementations return [`Ordering::Less`] when the query belongs to the
/// left of `value`, [`Ordering::Greater`] when it belongs to the right, and
/// [`Ordering::Equal`] when `value` is the match for the query.
pub trait Comparator<Q: ?Sized, T: ?Sized> {
    fn compare(&self, query: &Q, value: &T) -> Ordering;
}

impl<Q: ?Sized, T: ?Sized, F> Comparator<Q, T> for F
where
    F: Fn(&Q, &T) -> Ordering,
{
    fn compare(&self, query: &Q, value: &T) -> Ordering {
        self(query, value)
    }
}

/// Orders bare values by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValueComparator;

impl<T> Comparator<T, T> for ValueComparator
where
    T: Ord + ?Sized,
{
    fn compare(&self, query: &T, value: &T) -> Ordering {
        query.cmp(value)
    }
}

/// Compare two intervals, treating any overlap as equality.
///
/// Returns [`Ordering::Greater`] if `x` lies entirely above `y`,
/// [`Ordering::Less`] if `x` lies entirely below `y`, and [`Ordering::Equal`]
/// if the two share at least one point.
///
/// Because overlap is not transitive this is only a valid ordering over a set
/// of mutually non-overlapping intervals.
pub fn compare_intervals<T>(x: &Interval<T>, y: &Interval<T>) -> Ordering
where
    T: Ord,
{
    let lower_upper = x.lower().value().cmp(y.upper().value());
    if lower_upper.is_gt()
        || (lower_upper.is_eq() && !(x.lower().is_inclusive() && y.upper().is_inclusive()))
    {
        return Ordering::Greater;
    }

    let upper_lower = x.upper().value().cmp(y.lower().value());
    if upper_lower.is_lt()
        || (upper_lower.is_eq() && !(x.upper().is_inclusive() && y.lower().is_inclusive()))
    {
        return Ordering::Less;
    }

    Ordering::Equal
}

/// Compare a point against an interval.
///
/// Returns [`Ordering::Equal`] if `value` lies within `interval`,
/// [`Ordering::Less`] if it lies below the lower bound (or on an exclusive
/// lower bound) and [`Ordering::Greater`] if it lies above the upper bound (or
/// on an exclusive upper bound).
pub fn compare_value_to_interval<T>(value: &T, interval: &Interval<T>) -> Ordering
where
    T: Ord,
{
    let lower = interval.lower();
    let value_lower = value.cmp(lower.value());
    if value_lower.is_lt() || (value_lower.is_eq() && !lower.is_inclusive()) {
        return Ordering::Less;
    }

    let upper = interval.upper();
    let value_upper = value.cmp(upper.value());
    if value_upper.is_gt() || (value_upper.is_eq() && !upper.is_inclusive()) {
        return Ordering::Greater;
    }

    Ordering::Equal
}

/// The mirror of [`compare_value_to_interval()`], such that swapping the
/// argument order always reverses the result.
pub fn compare_interval_to_value<T>(interval: &Interval<T>, value: &T) -> Ordering
where
    T: Ord,
{
    compare_value_to_interval(value, interval).reverse()
}

/// Orders [`Interval`] instances by [`compare_intervals()`].
#[derive(Debug, Default, Clone, Copy)]
pub struct IntervalComparator;

impl<T> Comparator<Interval<T>, Interval<T>> for IntervalComparator
where
    T: Ord,
{
    fn compare(&self, query: &Interval<T>, value: &Interval<T>) -> Ordering {
        compare_intervals(query, value)
    }
}

/// Orders a point query against a stored [`Interval`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ValueIntervalComparator;

impl<T> Comparator<T, Interval<T>> for ValueIntervalComparator
where
    T: Ord,
{
    fn compare(&self, query: &T, value: &Interval<T>) -> Ordering {
        compare_value_to_interval(query, value)
    }
}

/// Orders an [`Interval`] query against a stored point, the reverse of
/// [`ValueIntervalComparator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct IntervalValueComparator;

impl<T> Comparator<Interval<T>, T> for IntervalValueComparator
where
    T: Ord,
{
    fn compare(&self, query: &Interval<T>, value: &T) -> Ordering {
        compare_interval_to_value(query, value)
    }
}

/// Orders [`IntervalValuePair`] nodes by their intervals, treating overlapping
/// intervals as equal.
///
/// Also accepts a bare [`Interval`] as the query.
#[derive(Debug)]
pub struct PairComparator<V>(PhantomData<fn(&V)>);

impl<V> Default for PairComparator<V> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T, V> Comparator<IntervalValuePair<T, V>, IntervalValuePair<T, V>> for PairComparator<V>
where
    T: Ord,
{
    fn compare(
        &self,
        query: &IntervalValuePair<T, V>,
        value: &IntervalValuePair<T, V>,
    ) -> Ordering {
        compare_intervals(query.interval(), value.interval())
    }
}

impl<T, V> Comparator<Interval<T>, IntervalValuePair<T, V>> for PairComparator<V>
where
    T: Ord,
{
    fn compare(&self, query: &Interval<T>, value: &IntervalValuePair<T, V>) -> Ordering {
        compare_intervals(query, value.interval())
    }
}

/// Orders a point key against the interval of an [`IntervalValuePair`],
/// matching the pair whose interval contains the key.
#[derive(Debug)]
pub struct PairKeyComparator<V>(PhantomData<fn(&V)>);

impl<V> Default for PairKeyComparator<V> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T, V> Comparator<T, IntervalValuePair<T, V>> for PairKeyComparator<V>
where
    T: Ord,
{
    fn compare(&self, query: &T, value: &IntervalValuePair<T, V>) -> Ordering {
        compare_value_to_interval(query, value.interval())
    }
}
