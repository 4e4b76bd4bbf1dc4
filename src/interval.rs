use std::{
    fmt::{self, Display},
    ops::{Range, RangeInclusive},
};

/// One edge of an [`Interval`]: a value, and whether that value itself is
/// part of the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bound<T> {
    value: T,
    inclusive: bool,
}

impl<T> Bound<T> {
    pub fn new(value: T, inclusive: bool) -> Self {
        Self { value, inclusive }
    }

    pub fn inclusive(value: T) -> Self {
        Self::new(value, true)
    }

    pub fn exclusive(value: T) -> Self {
        Self::new(value, false)
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// An interval described by a lower and an upper [`Bound`], each of which may
/// be inclusive or exclusive.
///
/// Intervals are not totally ordered: two intervals that share at least one
/// point are considered equal by
/// [`compare_intervals()`](crate::compare::compare_intervals), which is what
/// makes it possible to look up a stored interval by any point inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lower: Bound<T>,
    upper: Bound<T>,
}

impl<T> Interval<T> {
    pub fn new(lower: Bound<T>, upper: Bound<T>) -> Self {
        Self { lower, upper }
    }

    /// `[lower, upper]`
    pub fn closed(lower: T, upper: T) -> Self {
        Self::new(Bound::inclusive(lower), Bound::inclusive(upper))
    }

    /// `(lower, upper)`
    pub fn open(lower: T, upper: T) -> Self {
        Self::new(Bound::exclusive(lower), Bound::exclusive(upper))
    }

    /// `[lower, upper)`
    pub fn closed_open(lower: T, upper: T) -> Self {
        Self::new(Bound::inclusive(lower), Bound::exclusive(upper))
    }

    /// `(lower, upper]`
    pub fn open_closed(lower: T, upper: T) -> Self {
        Self::new(Bound::exclusive(lower), Bound::inclusive(upper))
    }

    pub fn lower(&self) -> &Bound<T> {
        &self.lower
    }

    pub fn upper(&self) -> &Bound<T> {
        &self.upper
    }

    pub fn into_bounds(self) -> (Bound<T>, Bound<T>) {
        (self.lower, self.upper)
    }
}

impl<T> Interval<T>
where
    T: Ord,
{
    /// Returns true if `value` lies within this interval, respecting the
    /// inclusivity of both bounds.
    pub fn contains(&self, value: &T) -> bool {
        crate::compare::compare_value_to_interval(value, self).is_eq()
    }

    /// Returns true if `self` and `other` share at least one point.
    ///
    /// An empty interval overlaps nothing.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        crate::compare::compare_intervals(self, other).is_eq()
    }

    /// Returns true if no value can satisfy both bounds, such as `[3, 1]` or
    /// `(2, 2)`.
    ///
    /// For discrete domains an interval such as `(1, 2)` over integers is
    /// never considered empty; only the bound values are inspected.
    pub fn is_empty(&self) -> bool {
        match self.lower.value.cmp(&self.upper.value) {
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => !(self.lower.inclusive && self.upper.inclusive),
            std::cmp::Ordering::Greater => true,
        }
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(value: RangeInclusive<T>) -> Self {
        let (start, end) = value.into_inner();
        Self::closed(start, end)
    }
}

impl<T> From<Range<T>> for Interval<T> {
    fn from(value: Range<T>) -> Self {
        Self::closed_open(value.start, value.end)
    }
}

impl<T> Display for Interval<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lower.inclusive { '[' } else { '(' };
        let close = if self.upper.inclusive { ']' } else { ')' };
        write!(
            f,
            "{open}{}, {}{close}",
            self.lower.value, self.upper.value
        )
    }
}

/// An [`Interval`] and the value mapped to it.
///
/// This is the payload type stored in each tree node by
/// [`IntervalMap`](crate::IntervalMap).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalValuePair<T, V> {
    interval: Interval<T>,
    value: V,
}

impl<T, V> IntervalValuePair<T, V> {
    pub fn new(interval: Interval<T>, value: V) -> Self {
        Self { interval, value }
    }

    pub fn interval(&self) -> &Interval<T> {
        &self.interval
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn into_parts(self) -> (Interval<T>, V) {
        (self.interval, self.value)
    }

    /// Borrow the interval and a mutable reference to the value at the same
    /// time.
    pub(crate) fn split_mut(&mut self) -> (&Interval<T>, &mut V) {
        (&self.interval, &mut self.value)
    }
}

impl<T, V> From<(Interval<T>, V)> for IntervalValuePair<T, V> {
    fn from((interval, value): (Interval<T>, V)) -> Self {
        Self::new(interval, value)
    }
}
