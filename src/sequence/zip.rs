//! Positional zipping of two or three sequences.

use std::iter::{FusedIterator, Zip};

/// Pairs up corresponding elements of two sequences.
///
/// The result is as long as the shorter input. Equivalent to
/// [`Iterator::zip`], offered as a free function to mirror [`zip3`].
///
/// # Examples
///
/// ```
/// use fnkit::sequence::zip2;
///
/// let pairs: Vec<_> = zip2([1, 2, 3], ["a", "b"]).collect();
/// assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
/// ```
#[inline]
pub fn zip2<A, B>(first: A, second: B) -> Zip<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    first.into_iter().zip(second)
}

/// Groups corresponding elements of three sequences into triples.
///
/// The result is as long as the shortest input. Sources are polled in
/// argument order and iteration stops at the first exhausted one, so later
/// sources are not advanced past that point.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::zip3;
///
/// let rows: Vec<_> = zip3(["x", "y"], [1, 2, 3], [true, false]).collect();
/// assert_eq!(rows, vec![("x", 1, true), ("y", 2, false)]);
/// ```
#[inline]
pub fn zip3<A, B, C>(first: A, second: B, third: C) -> Zip3<A::IntoIter, B::IntoIter, C::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
{
    Zip3 {
        first: first.into_iter(),
        second: second.into_iter(),
        third: third.into_iter(),
    }
}

/// Iterator returned by [`zip3`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Zip3<A, B, C> {
    first: A,
    second: B,
    third: C,
}

impl<A, B, C> Iterator for Zip3<A, B, C>
where
    A: Iterator,
    B: Iterator,
    C: Iterator,
{
    type Item = (A::Item, B::Item, C::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.first.next()?;
        let second = self.second.next()?;
        let third = self.third.next()?;
        Some((first, second, third))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) = self.first.size_hint();
        let (second_lower, second_upper) = self.second.size_hint();
        let (third_lower, third_upper) = self.third.size_hint();

        let lower = first_lower.min(second_lower).min(third_lower);
        let upper = [first_upper, second_upper, third_upper]
            .into_iter()
            .flatten()
            .min();
        (lower, upper)
    }
}

impl<A, B, C> ExactSizeIterator for Zip3<A, B, C>
where
    A: ExactSizeIterator,
    B: ExactSizeIterator,
    C: ExactSizeIterator,
{
}

impl<A, B, C> FusedIterator for Zip3<A, B, C>
where
    A: FusedIterator,
    B: FusedIterator,
    C: FusedIterator,
{
}
