//! Error type for checked integer arithmetic.

use std::fmt;

/// Error returned by the checked division helpers.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::{ArithmeticError, divide};
///
/// assert_eq!(divide(1, 0), Err(ArithmeticError::DivisionByZero));
/// assert_eq!(divide(i32::MIN, -1), Err(ArithmeticError::Overflow));
/// assert_eq!(ArithmeticError::DivisionByZero.to_string(), "attempt to divide by zero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArithmeticError {
    /// The divisor was zero.
    DivisionByZero,
    /// The result does not fit in the integer type (`MIN / -1`).
    Overflow,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(formatter, "attempt to divide by zero"),
            Self::Overflow => write!(formatter, "attempt to divide with overflow"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

static_assertions::assert_impl_all!(ArithmeticError: std::error::Error, Send, Sync, Copy);
