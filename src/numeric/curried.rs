//! Curried forms of the binary integer helpers.
//!
//! Each function fixes the **second** operand and returns a closure over the
//! first, so `curried::minus(3)` is `|i| i - 3`, and `curried::divide(2)` is
//! `|i| i / 2`. That makes them drop straight into iterator adaptors:
//!
//! ```
//! use fnkit::numeric::curried;
//!
//! let shifted: Vec<i32> = [1, 2, 3].into_iter().map(curried::plus(10)).collect();
//! assert_eq!(shifted, vec![11, 12, 13]);
//! ```

use super::arithmetic;
use super::error::ArithmeticError;
use super::integer::Integer;

/// Returns `|i| i + operand`, wrapping on overflow.
///
/// # Type Parameters
///
/// * `T` - A signed primitive integer
///
/// # Arguments
///
/// * `operand` - The fixed right-hand addend
///
/// # Returns
///
/// A `Copy` closure adding `operand` to its argument, so the same adder can be
/// handed to several adaptors.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::curried;
///
/// let add_five = curried::plus(5_i64);
/// assert_eq!(add_five(37), 42);
/// assert_eq!([1, 2].map(add_five), [6, 7]);
/// ```
#[inline]
pub fn plus<T: Integer>(operand: T) -> impl Fn(T) -> T + Copy {
    move |value| arithmetic::plus(value, operand)
}

/// Returns `|i| i - operand`, wrapping on overflow.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::curried;
///
/// let less_three = curried::minus(3);
/// assert_eq!(less_three(10), 7);
/// ```
#[inline]
pub fn minus<T: Integer>(operand: T) -> impl Fn(T) -> T + Copy {
    move |value| arithmetic::minus(value, operand)
}

/// Returns `|i| i * operand`, wrapping on overflow.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::curried;
///
/// let triple = curried::multiply(3);
/// assert_eq!(triple(14), 42);
/// ```
#[inline]
pub fn multiply<T: Integer>(operand: T) -> impl Fn(T) -> T + Copy {
    move |value| arithmetic::multiply(value, operand)
}

/// Returns `|i| i / operand`, checked.
///
/// The returned closure reports [`ArithmeticError::DivisionByZero`] on every
/// call when `operand` is zero.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::{ArithmeticError, curried};
///
/// assert_eq!(curried::divide(4)(20), Ok(5));
/// assert_eq!(curried::divide(0)(20), Err(ArithmeticError::DivisionByZero));
/// ```
#[inline]
pub fn divide<T: Integer>(operand: T) -> impl Fn(T) -> Result<T, ArithmeticError> + Copy {
    move |value| arithmetic::divide(value, operand)
}

/// Returns `|i| i % operand`, checked.
///
/// # Arguments
///
/// * `operand` - The fixed divisor
///
/// # Returns
///
/// A closure computing the remainder of its argument by `operand`. It reports
/// [`ArithmeticError::DivisionByZero`] when `operand` is zero and
/// [`ArithmeticError::Overflow`] for `MIN % -1`.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::{ArithmeticError, curried};
///
/// assert_eq!(curried::modulo(5)(17), Ok(2));
/// assert_eq!(curried::modulo(5)(-17), Ok(-2));
/// assert_eq!(curried::modulo(-1)(i32::MIN), Err(ArithmeticError::Overflow));
/// ```
#[inline]
pub fn modulo<T: Integer>(operand: T) -> impl Fn(T) -> Result<T, ArithmeticError> + Copy {
    move |value| arithmetic::modulo(value, operand)
}
