//! Sequence helpers.
//!
//! Helpers over anything that implements [`IntoIterator`]. None of them
//! require a known length, so they work on lazy and single-pass iterators as
//! well as on collections.
//!
//! # Overview
//!
//! - [`is_empty`] / [`peek_is_empty`]: Emptiness tests that pull at most one element
//! - [`to_array`] / [`to_list`] / [`list!`](crate::list): Argument lists into containers
//! - [`contains`]: Membership by [`PartialEq`]
//! - [`dump`]: Debug rendering in the `"[ a, b, ]"` format
//! - [`times`] / [`times_with`]: Repeated invocation, eager or lazy
//! - [`zip2`] / [`zip3`]: Positional pairing and tripling
//! - [`naturals`] / [`positives`] / [`naturals_from`]: Unbounded counting sequences
//! - [`write`] / [`write_line`] / [`debug`]: Console output helpers
//!
//! # Examples
//!
//! ```
//! use fnkit::sequence::{contains, dump, positives, times_with, zip2};
//!
//! let squares: Vec<u64> = positives().map(|n| n * n).take(4).collect();
//! assert_eq!(squares, vec![1, 4, 9, 16]);
//!
//! assert!(contains(&9, &squares));
//! assert_eq!(dump(times_with(3, || 7)), "[ 7, 7, 7, ]");
//!
//! let pairs: Vec<_> = zip2([1, 2, 3], ["a", "b"]).collect();
//! assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
//! ```

mod naturals;
mod output;
mod query;
mod repeat;
mod zip;

pub use naturals::{Naturals, naturals, naturals_from, positives};
pub use output::{debug, debug_to, write, write_line, write_line_to, write_to};
pub use query::{contains, dump, is_empty, peek_is_empty, to_array, to_list};
pub use repeat::{Times, times, times_with};
pub use zip::{Zip3, zip2, zip3};
