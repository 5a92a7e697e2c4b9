//! Uncurried integer helpers.

use super::error::ArithmeticError;
use super::integer::Integer;

/// Returns `(dividend / divisor, dividend % divisor)`.
///
/// Division truncates toward zero, so the remainder takes the sign of the
/// dividend.
///
/// # Errors
///
/// - [`ArithmeticError::DivisionByZero`] if `divisor` is zero
/// - [`ArithmeticError::Overflow`] for `MIN / -1`
///
/// # Examples
///
/// ```
/// use fnkit::numeric::quotient_remainder;
///
/// assert_eq!(quotient_remainder(7, 2), Ok((3, 1)));
/// assert_eq!(quotient_remainder(-7_i64, 2), Ok((-3, -1)));
/// ```
pub fn quotient_remainder<T: Integer>(dividend: T, divisor: T) -> Result<(T, T), ArithmeticError> {
    Ok((divide(dividend, divisor)?, modulo(dividend, divisor)?))
}

/// Returns whether `divisor` evenly divides `dividend`.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::divides;
///
/// assert_eq!(divides(3, 12), Ok(true));
/// assert_eq!(divides(5, 12), Ok(false));
/// ```
pub fn divides<T: Integer>(divisor: T, dividend: T) -> Result<bool, ArithmeticError> {
    if divisor == T::ZERO {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(dividend.wrapping_rem(divisor) == T::ZERO)
}

/// Returns whether `dividend` is evenly divided by `divisor`.
///
/// The argument order of [`divides`], reversed.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::divided_by;
///
/// assert_eq!(divided_by(12, 4), Ok(true));
/// ```
#[inline]
pub fn divided_by<T: Integer>(dividend: T, divisor: T) -> Result<bool, ArithmeticError> {
    divides(divisor, dividend)
}

/// Returns `true` if `value` is divisible by two.
#[inline]
pub fn is_even<T: Integer>(value: T) -> bool {
    value.wrapping_rem(T::TWO) == T::ZERO
}

/// Returns `true` if `value` is not divisible by two.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::{is_even, is_odd};
///
/// assert!(is_odd(7));
/// assert!(!is_odd(4));
/// assert!(is_odd(-3_i64));
/// assert!(is_even(0));
/// ```
#[inline]
pub fn is_odd<T: Integer>(value: T) -> bool {
    !is_even(value)
}

/// Returns `value + 1`, wrapping on overflow.
///
/// # Type Parameters
///
/// * `T` - A signed primitive integer
///
/// # Arguments
///
/// * `value` - The value to increment
///
/// # Returns
///
/// The successor of `value`; `T::MAX` wraps to `T::MIN`.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::inc;
///
/// assert_eq!(inc(41), 42);
/// assert_eq!(inc(i8::MAX), i8::MIN);
/// ```
#[inline]
pub fn inc<T: Integer>(value: T) -> T {
    value.wrapping_add(T::ONE)
}

/// Returns `value - 1`, wrapping on overflow.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::dec;
///
/// assert_eq!(dec(0), -1);
/// assert_eq!(dec(i16::MIN), i16::MAX);
/// ```
#[inline]
pub fn dec<T: Integer>(value: T) -> T {
    value.wrapping_sub(T::ONE)
}

/// Returns `left + right`, wrapping on overflow.
///
/// # Arguments
///
/// * `left` - The first addend
/// * `right` - The second addend
///
/// # Returns
///
/// The sum, truncated to the width of `T`.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::plus;
///
/// assert_eq!(plus(40, 2), 42);
/// assert_eq!(plus(i32::MAX, 1), i32::MIN);
/// ```
#[inline]
pub fn plus<T: Integer>(left: T, right: T) -> T {
    left.wrapping_add(right)
}

/// Returns `left - right`, wrapping on overflow.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::minus;
///
/// assert_eq!(minus(10, 3), 7);
/// assert_eq!(minus(i64::MIN, 1), i64::MAX);
/// ```
#[inline]
pub fn minus<T: Integer>(left: T, right: T) -> T {
    left.wrapping_sub(right)
}

/// Returns `left * right`, wrapping on overflow.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::multiply;
///
/// assert_eq!(multiply(6, 7), 42);
/// assert_eq!(multiply(i32::MAX, 2), -2);
/// ```
#[inline]
pub fn multiply<T: Integer>(left: T, right: T) -> T {
    left.wrapping_mul(right)
}

/// Returns `dividend / divisor`, truncated toward zero.
///
/// # Errors
///
/// - [`ArithmeticError::DivisionByZero`] if `divisor` is zero
/// - [`ArithmeticError::Overflow`] for `MIN / -1`
pub fn divide<T: Integer>(dividend: T, divisor: T) -> Result<T, ArithmeticError> {
    if divisor == T::ZERO {
        return Err(ArithmeticError::DivisionByZero);
    }
    dividend.checked_div(divisor).ok_or(ArithmeticError::Overflow)
}

/// Returns `dividend % divisor`, with the sign of `dividend`.
///
/// # Errors
///
/// - [`ArithmeticError::DivisionByZero`] if `divisor` is zero
/// - [`ArithmeticError::Overflow`] for `MIN % -1`
pub fn modulo<T: Integer>(dividend: T, divisor: T) -> Result<T, ArithmeticError> {
    if divisor == T::ZERO {
        return Err(ArithmeticError::DivisionByZero);
    }
    dividend.checked_rem(divisor).ok_or(ArithmeticError::Overflow)
}

/// Returns the product `1 * 2 * ... * n`, wrapping on overflow.
///
/// `factorial(0) == 1`, and so is the factorial of any negative `n` (the
/// empty product).
///
/// # Examples
///
/// ```
/// use fnkit::numeric::factorial;
///
/// assert_eq!(factorial(0), 1);
/// assert_eq!(factorial(5), 120);
/// assert_eq!(factorial(20_i64), 2_432_902_008_176_640_000);
/// ```
pub fn factorial<T: Integer>(n: T) -> T {
    fold_factorial(n, |product, factor| Some(product.wrapping_mul(factor))).unwrap_or(T::ONE)
}

/// Returns the product `1 * 2 * ... * n`, or `None` on overflow.
///
/// # Examples
///
/// ```
/// use fnkit::numeric::checked_factorial;
///
/// assert_eq!(checked_factorial(12_i32), Some(479_001_600));
/// assert_eq!(checked_factorial(13_i32), None);
/// ```
pub fn checked_factorial<T: Integer>(n: T) -> Option<T> {
    fold_factorial(n, T::checked_mul)
}

fn fold_factorial<T, F>(n: T, mut step: F) -> Option<T>
where
    T: Integer,
    F: FnMut(T, T) -> Option<T>,
{
    let mut product = T::ONE;
    let mut factor = T::TWO;
    // Counting up to n inclusive; the explicit break keeps factor from
    // overflowing when n == MAX. A wrapped product of zero stays zero.
    while factor <= n {
        product = step(product, factor)?;
        if factor == n || product == T::ZERO {
            break;
        }
        factor = inc(factor);
    }
    Some(product)
}
