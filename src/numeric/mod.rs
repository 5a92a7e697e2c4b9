//! Integer arithmetic helpers.
//!
//! Every helper is generic over [`Integer`], which is implemented for the
//! signed primitive integers (`i8` through `i128`, and `isize`). The common
//! cases are `i32` and `i64`.
//!
//! # Overview
//!
//! - [`quotient_remainder`]: Truncating division and remainder in one call
//! - [`divides`] / [`divided_by`]: Divisibility tests
//! - [`is_even`] / [`is_odd`]: Parity
//! - [`inc`], [`dec`], [`plus`], [`minus`], [`multiply`]: Wrapping arithmetic
//! - [`divide`] / [`modulo`]: Checked division and remainder
//! - [`curried`]: The binary operations with the second operand fixed
//! - [`factorial`] / [`checked_factorial`]: Product of `1..=n`
//!
//! # Overflow
//!
//! Addition, subtraction, multiplication and [`factorial`] wrap around on
//! overflow, the same as fixed-width machine arithmetic. Division and
//! remainder never panic: a zero divisor is reported as
//! [`ArithmeticError::DivisionByZero`] and `MIN / -1` as
//! [`ArithmeticError::Overflow`].
//!
//! # Examples
//!
//! ```
//! use fnkit::numeric::{ArithmeticError, curried, factorial, is_odd, quotient_remainder};
//!
//! assert_eq!(quotient_remainder(7, 2), Ok((3, 1)));
//! assert_eq!(quotient_remainder(7, 0), Err(ArithmeticError::DivisionByZero));
//! assert!(is_odd(7_i64));
//! assert_eq!(factorial(5), 120);
//!
//! let halves: Vec<_> = [10, 7, -4].into_iter().map(curried::divide(2)).collect();
//! assert_eq!(halves, vec![Ok(5), Ok(3), Ok(-2)]);
//! ```

mod arithmetic;
pub mod curried;
mod error;
mod integer;

pub use arithmetic::{
    checked_factorial, dec, divide, divided_by, divides, factorial, inc, is_even, is_odd, minus,
    modulo, multiply, plus, quotient_remainder,
};
pub use error::ArithmeticError;
pub use integer::Integer;
