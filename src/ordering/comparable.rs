//! Method-call form of the ordering helpers.

use super::bounds::{clamp_max, clamp_min, greater_of, lesser_of};
use super::range::{RangeError, ensure_in_range, in_range, limit_in_range};

/// Ordering helpers as methods, implemented for every [`Ord`] type.
///
/// Each method delegates to the free function of the same name in
/// [`ordering`](crate::ordering); `is_in_range` delegates to
/// [`in_range`](crate::ordering::in_range).
///
/// # Examples
///
/// ```
/// use fnkit::ordering::Comparable;
///
/// let volume = 140.limit_in_range(0, 100)?;
/// assert_eq!(volume, 100);
///
/// assert!("m".is_in_range(&"a", &"z")?);
/// assert_eq!(3.greater_of(8).lesser_of(5), 5);
/// # Ok::<(), fnkit::ordering::RangeError>(())
/// ```
pub trait Comparable: Ord + Sized {
    /// See [`in_range`](crate::ordering::in_range).
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `min > max`.
    #[inline]
    fn is_in_range(&self, min: &Self, max: &Self) -> Result<bool, RangeError> {
        in_range(self, min, max)
    }

    /// See [`ensure_in_range`](crate::ordering::ensure_in_range).
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `min > max`, otherwise
    /// [`RangeError::OutOfRange`] if `self` lies outside the range.
    #[inline]
    fn ensure_in_range(self, min: Self, max: Self) -> Result<Self, RangeError> {
        ensure_in_range(self, min, max)
    }

    /// See [`limit_in_range`](crate::ordering::limit_in_range).
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `min > max`.
    #[inline]
    fn limit_in_range(self, min: Self, max: Self) -> Result<Self, RangeError> {
        limit_in_range(self, min, max)
    }

    /// See [`greater_of`](crate::ordering::greater_of).
    #[inline]
    #[must_use]
    fn greater_of(self, other: Self) -> Self {
        greater_of(self, other)
    }

    /// See [`lesser_of`](crate::ordering::lesser_of).
    #[inline]
    #[must_use]
    fn lesser_of(self, other: Self) -> Self {
        lesser_of(self, other)
    }

    /// See [`clamp_max`](crate::ordering::clamp_max).
    #[inline]
    #[must_use]
    fn clamp_max(self, max: Self) -> Self {
        clamp_max(self, max)
    }

    /// See [`clamp_min`](crate::ordering::clamp_min).
    #[inline]
    #[must_use]
    fn clamp_min(self, min: Self) -> Self {
        clamp_min(self, min)
    }
}

impl<T: Ord> Comparable for T {}
