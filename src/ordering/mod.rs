//! Helpers over totally ordered types.
//!
//! Everything here is generic over [`Ord`], the three-way comparison
//! contract. No helper needs more than `Ord`; the range helpers report
//! invalid input through [`RangeError`].
//!
//! # Overview
//!
//! - [`lt`], [`le`], [`eq`], [`ne`], [`gt`], [`ge`]: Relational aliases over [`Ord::cmp`]
//! - [`max_of`] / [`min_of`]: Extremum of one or more values
//! - [`greater_of`] / [`lesser_of`]: Extremum of two values, ties resolved to the second
//! - [`clamp_max`] / [`clamp_min`]: One-sided clamps
//! - [`in_range`] / [`ensure_in_range`] / [`limit_in_range`]: Inclusive range checks
//! - [`Comparable`]: The same helpers as methods
//!
//! # Examples
//!
//! ```
//! use fnkit::ordering::{Comparable, RangeError, in_range, limit_in_range};
//!
//! assert_eq!(in_range(5, 1, 10), Ok(true));
//! assert_eq!(in_range(5, 10, 1), Err(RangeError::InvalidRange));
//! assert_eq!(limit_in_range(-3, 0, 10), Ok(0));
//! assert_eq!(42.clamp_max(10), 10);
//! ```

mod bounds;
mod comparable;
mod range;
mod relation;

pub use bounds::{clamp_max, clamp_min, greater_of, lesser_of, max_of, min_of};
pub use comparable::Comparable;
pub use range::{RangeError, ensure_in_range, in_range, limit_in_range};
pub use relation::{eq, ge, gt, le, lt, ne};
