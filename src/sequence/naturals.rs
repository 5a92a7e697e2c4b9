//! Unbounded counting sequences.

use std::iter::FusedIterator;

/// Returns the natural numbers `0, 1, 2, ...`.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::naturals;
///
/// let first: Vec<u64> = naturals().take(4).collect();
/// assert_eq!(first, vec![0, 1, 2, 3]);
/// ```
#[inline]
pub const fn naturals() -> Naturals {
    naturals_from(0)
}

/// Returns the positive integers `1, 2, 3, ...`.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::positives;
///
/// let sum: u64 = positives().take(100).sum();
/// assert_eq!(sum, 5050);
/// ```
#[inline]
pub const fn positives() -> Naturals {
    naturals_from(1)
}

/// Returns the integers `start, start + 1, start + 2, ...`.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::naturals_from;
///
/// assert_eq!(naturals_from(40).nth(2), Some(42));
/// ```
#[inline]
pub const fn naturals_from(start: u64) -> Naturals {
    Naturals { next: Some(start) }
}

/// Lazy, strictly increasing sequence of `u64` values.
///
/// Cloning a `Naturals` restarts counting from the clone's current position,
/// independently of the original. The sequence ends after yielding
/// [`u64::MAX`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Naturals {
    next: Option<u64>,
}

impl Naturals {
    /// Returns the value the next call to `next` yields, without advancing.
    #[inline]
    pub const fn peek(&self) -> Option<u64> {
        self.next
    }
}

impl Default for Naturals {
    #[inline]
    fn default() -> Self {
        naturals()
    }
}

impl Iterator for Naturals {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(current) => {
                let remaining = u64::MAX - current;
                match usize::try_from(remaining).ok().and_then(|n| n.checked_add(1)) {
                    Some(exact) => (exact, Some(exact)),
                    None => (usize::MAX, None),
                }
            }
        }
    }

    fn nth(&mut self, skip: usize) -> Option<Self::Item> {
        let target = self
            .next
            .and_then(|current| u64::try_from(skip).ok().and_then(|n| current.checked_add(n)));
        match target {
            Some(value) => {
                self.next = value.checked_add(1);
                Some(value)
            }
            None => {
                self.next = None;
                None
            }
        }
    }
}

impl FusedIterator for Naturals {}
