//! An AVL-balanced map from non-overlapping intervals to values.
//!
//! [`IntervalMap`] stores `(interval, value)` entries and answers "which
//! interval contains this point?" in `O(log n)` time. Intervals may have any
//! combination of inclusive and exclusive [`Bound`]s, and no two intervals in
//! the map may share a point.
//!
//! ```
//! use interval_map::{Interval, IntervalMap};
//!
//! let mut tax_bands = IntervalMap::new();
//! tax_bands.insert(Interval::closed_open(0, 12_570), 0)?;
//! tax_bands.insert(Interval::closed_open(12_570, 50_270), 20)?;
//! tax_bands.insert(Interval::closed(50_270, 125_140), 40)?;
//!
//! assert_eq!(tax_bands[&12_570], 20);
//! assert_eq!(tax_bands.get(&200_000), None);
//! # Ok::<(), interval_map::Error>(())
//! ```
//!
//! The underlying engine is exposed in [`tree`]: a set of functions operating
//! on owned [`Node`] links that can order any payload with a caller supplied
//! [`Comparator`].

pub mod compare;
mod error;
mod interval;
pub mod iter;
mod map;
mod node;
pub mod tree;

pub use compare::Comparator;
pub use error::*;
pub use interval::*;
pub use map::*;
pub use node::*;

#[cfg(test)]
mod test_utils;
