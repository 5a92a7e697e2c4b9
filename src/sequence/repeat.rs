//! Repeated invocation.

use std::fmt;
use std::iter::FusedIterator;

/// Invokes `action` exactly `count` times, in order.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::times;
///
/// let mut greetings = Vec::new();
/// times(3, || greetings.push("hi"));
/// assert_eq!(greetings, vec!["hi", "hi", "hi"]);
/// ```
pub fn times<F: FnMut()>(count: usize, mut action: F) {
    for _ in 0..count {
        action();
    }
}

/// Returns a lazy sequence of `count` results of `producer`.
///
/// `producer` is invoked once per element as the sequence is consumed, never
/// ahead of time, and may return a different value on every call. The
/// sequence is one-shot: call `times_with` again to start over.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::times_with;
///
/// assert_eq!(times_with(3, || 7).collect::<Vec<_>>(), vec![7, 7, 7]);
///
/// let mut next_id = 100;
/// let ids: Vec<u32> = times_with(2, || {
///     next_id += 1;
///     next_id
/// })
/// .collect();
/// assert_eq!(ids, vec![101, 102]);
/// ```
#[inline]
pub const fn times_with<T, F: FnMut() -> T>(count: usize, producer: F) -> Times<F> {
    Times {
        remaining: count,
        producer,
    }
}

/// Iterator returned by [`times_with`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Times<F> {
    remaining: usize,
    producer: F,
}

impl<T, F: FnMut() -> T> Iterator for Times<F> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some((self.producer)())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, F: FnMut() -> T> ExactSizeIterator for Times<F> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T, F: FnMut() -> T> FusedIterator for Times<F> {}

impl<F> fmt::Debug for Times<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Times")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_times_zero_never_invokes() {
        let mut invoked = false;
        times(0, || invoked = true);
        assert!(!invoked);
    }

    #[test]
    fn test_times_with_is_lazy() {
        let calls = Cell::new(0);
        let mut sequence = times_with(5, || {
            calls.set(calls.get() + 1);
            calls.get()
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(sequence.next(), Some(1));
        assert_eq!(calls.get(), 1);
        assert_eq!(sequence.len(), 4);
    }

    #[test]
    fn test_times_with_stays_exhausted() {
        let mut sequence = times_with(1, || 'x');
        assert_eq!(sequence.next(), Some('x'));
        assert_eq!(sequence.next(), None);
        assert_eq!(sequence.next(), None);
    }

    #[test]
    fn test_times_debug_hides_producer() {
        let sequence = times_with(2, || 0);
        assert_eq!(format!("{sequence:?}"), "Times { remaining: 2, .. }");
    }
}
