//! Queries and conversions over sequences.

use std::borrow::Borrow;
use std::fmt::{self, Display, Write as _};
use std::iter::Peekable;

/// Returns `true` if `source` yields no elements.
///
/// At most one element is pulled. Pass a reference to a collection
/// (`&vec`) to leave it untouched, or `iterator.by_ref()` to keep using a
/// single-pass iterator afterwards. Use [`peek_is_empty`] when the pulled
/// element must not be lost.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::is_empty;
///
/// let values = vec![1, 2, 3];
/// assert!(!is_empty(&values));
/// assert!(is_empty(Vec::<i32>::new()));
/// assert!(is_empty((0..10).filter(|n| *n > 100)));
/// ```
#[inline]
pub fn is_empty<I: IntoIterator>(source: I) -> bool {
    source.into_iter().next().is_none()
}

/// Returns `true` if the peekable iterator has no further elements.
///
/// The inspected element stays buffered in `source` and is still yielded by
/// the next call to `next`.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::peek_is_empty;
///
/// let mut lines = "first\nsecond".lines().peekable();
/// assert!(!peek_is_empty(&mut lines));
/// assert_eq!(lines.next(), Some("first"));
/// ```
#[inline]
pub fn peek_is_empty<I: Iterator>(source: &mut Peekable<I>) -> bool {
    source.peek().is_none()
}

/// Returns the argument array unchanged.
///
/// Exists so that a list of arguments can be turned into an array at the call
/// site the same way [`to_list`] turns it into a [`Vec`].
///
/// # Examples
///
/// ```
/// use fnkit::sequence::to_array;
///
/// let array = to_array([3, 1, 2]);
/// assert_eq!(array.len(), 3);
/// ```
#[inline]
pub const fn to_array<T, const N: usize>(items: [T; N]) -> [T; N] {
    items
}

/// Collects the given items into a [`Vec`], preserving order.
///
/// See also [`list!`](crate::list) for the variadic spelling.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::to_list;
///
/// assert_eq!(to_list([1, 2, 3]), vec![1, 2, 3]);
/// assert_eq!(to_list("abc".chars()), vec!['a', 'b', 'c']);
/// ```
#[inline]
pub fn to_list<I: IntoIterator>(items: I) -> Vec<I::Item> {
    items.into_iter().collect()
}

/// Builds a [`Vec`] from a list of arguments.
///
/// `list![a, b, c]` is shorthand for `to_list([a, b, c])`.
///
/// # Examples
///
/// ```
/// use fnkit::list;
///
/// let names = list!["ada", "grace"];
/// assert_eq!(names, vec!["ada", "grace"]);
///
/// let empty: Vec<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        ::std::vec::Vec::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::sequence::to_list([$($item),+])
    };
}

/// Returns `true` if any element of `source` equals `value`.
///
/// Stops at the first match. Elements may be owned values or references:
/// anything that [`Borrow`]s as `T` is compared.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::contains;
///
/// let words = vec![String::from("alpha"), String::from("beta")];
/// assert!(contains(&String::from("beta"), &words));
/// assert!(contains("beta", words.iter().map(String::as_str)));
/// assert!(!contains(&7, 0..5));
/// ```
pub fn contains<T, I>(value: &T, source: I) -> bool
where
    T: PartialEq + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    source.into_iter().any(|element| element.borrow() == value)
}

/// Renders a sequence as `"[ e1, e2, ]"`.
///
/// Every element is formatted with [`Display`] and followed by `", "`; the
/// output opens with `"[ "` and closes with `"]"`. An empty sequence renders
/// as `"[ ]"`.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::dump;
///
/// assert_eq!(dump([1, 2, 3]), "[ 1, 2, 3, ]");
/// assert_eq!(dump(Vec::<i32>::new()), "[ ]");
/// assert_eq!(dump(&["x", "y"]), "[ x, y, ]");
/// ```
pub fn dump<I>(source: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut output = String::from("[ ");
    for element in source {
        // Writing into a String never fails.
        let _: fmt::Result = write!(output, "{element}, ");
    }
    output.push(']');
    output
}
