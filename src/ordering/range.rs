//! Inclusive range checks.
//!
//! All three helpers validate the range first: `min > max` is reported as
//! [`RangeError::InvalidRange`] before `value` is looked at.

use std::fmt;

/// Error returned by the inclusive range helpers.
///
/// # Examples
///
/// ```
/// use fnkit::ordering::{RangeError, ensure_in_range};
///
/// assert_eq!(ensure_in_range(11, 0, 10), Err(RangeError::OutOfRange));
/// assert_eq!(
///     RangeError::InvalidRange.to_string(),
///     "invalid range: lower bound is greater than upper bound"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeError {
    /// The lower bound is greater than the upper bound.
    InvalidRange,
    /// The value lies outside `[min, max]`.
    OutOfRange,
}

impl fmt::Display for RangeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange => write!(
                formatter,
                "invalid range: lower bound is greater than upper bound"
            ),
            Self::OutOfRange => write!(formatter, "value is outside the allowed range"),
        }
    }
}

impl std::error::Error for RangeError {}

#[inline]
fn validate<T: Ord>(min: &T, max: &T) -> Result<(), RangeError> {
    if min > max {
        Err(RangeError::InvalidRange)
    } else {
        Ok(())
    }
}

/// Returns whether `min <= value <= max`.
///
/// # Errors
///
/// Returns [`RangeError::InvalidRange`] if `min > max`.
///
/// # Examples
///
/// ```
/// use fnkit::ordering::in_range;
///
/// assert_eq!(in_range(1, 1, 10), Ok(true));
/// assert_eq!(in_range(0, 1, 10), Ok(false));
/// ```
#[allow(clippy::needless_pass_by_value)]
pub fn in_range<T: Ord>(value: T, min: T, max: T) -> Result<bool, RangeError> {
    validate(&min, &max)?;
    Ok(min <= value && value <= max)
}

/// Returns `value` if it lies within `[min, max]`.
///
/// # Errors
///
/// Returns [`RangeError::InvalidRange`] if `min > max`, otherwise
/// [`RangeError::OutOfRange`] if `value` lies outside the range.
///
/// # Examples
///
/// ```
/// use fnkit::ordering::ensure_in_range;
///
/// let port = ensure_in_range(8080, 1024, 65535)?;
/// assert_eq!(port, 8080);
/// # Ok::<(), fnkit::ordering::RangeError>(())
/// ```
pub fn ensure_in_range<T: Ord>(value: T, min: T, max: T) -> Result<T, RangeError> {
    if in_range(&value, &min, &max)? {
        Ok(value)
    } else {
        Err(RangeError::OutOfRange)
    }
}

/// Clamps `value` into `[min, max]`.
///
/// # Errors
///
/// Returns [`RangeError::InvalidRange`] if `min > max`.
///
/// # Examples
///
/// ```
/// use fnkit::ordering::limit_in_range;
///
/// assert_eq!(limit_in_range(-5, 0, 10), Ok(0));
/// assert_eq!(limit_in_range(5, 0, 10), Ok(5));
/// assert_eq!(limit_in_range(50, 0, 10), Ok(10));
/// ```
pub fn limit_in_range<T: Ord>(value: T, min: T, max: T) -> Result<T, RangeError> {
    validate(&min, &max)?;
    Ok(value.clamp(min, max))
}
