#![cfg(feature = "numeric")]
//! Property-based tests for integer helper laws.
//!
//! - **Division identity**: `q * y + r == x` where `(q, r) = quotient_remainder(x, y)`
//! - **Remainder bound**: `|r| < |y|` and `r` has the sign of `x` (or is zero)
//! - **Parity**: exactly one of `is_even(n)` / `is_odd(n)` holds
//! - **Divisibility**: `divides(n, n * k)` for non-zero `n`
//! - **Inverse**: `dec(inc(n)) == n`, `minus(plus(a, b), b) == a`
//! - **Factorial recurrence**: `factorial(n) == n * factorial(n - 1)`
//! - **Currying**: `curried::op(b)(a) == op(a, b)`

use fnkit::numeric::{
    ArithmeticError, checked_factorial, curried, dec, divide, divides, factorial, inc, is_even,
    is_odd, minus, modulo, multiply, plus, quotient_remainder,
};
use proptest::prelude::*;

fn non_zero_i64() -> impl Strategy<Value = i64> {
    any::<i64>().prop_filter("divisor must be non-zero", |value| *value != 0)
}

proptest! {
    #[test]
    fn prop_division_identity(x in any::<i64>(), y in non_zero_i64()) {
        prop_assume!(!(x == i64::MIN && y == -1));

        let (quotient, remainder) = quotient_remainder(x, y).unwrap();

        prop_assert_eq!(quotient * y + remainder, x);
    }

    #[test]
    fn prop_remainder_bound_and_sign(x in any::<i32>(), y in any::<i32>()) {
        prop_assume!(y != 0 && !(x == i32::MIN && y == -1));

        let (_, remainder) = quotient_remainder(x, y).unwrap();

        prop_assert!(remainder.unsigned_abs() < y.unsigned_abs());
        prop_assert!(remainder == 0 || (remainder < 0) == (x < 0));
    }

    #[test]
    fn prop_zero_divisor_always_fails(x in any::<i64>()) {
        prop_assert_eq!(quotient_remainder(x, 0), Err(ArithmeticError::DivisionByZero));
        prop_assert_eq!(divide(x, 0), Err(ArithmeticError::DivisionByZero));
        prop_assert_eq!(modulo(x, 0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn prop_parity_is_exclusive(n in any::<i64>()) {
        prop_assert_ne!(is_even(n), is_odd(n));
        prop_assert_eq!(is_even(n), n % 2 == 0);
    }

    #[test]
    fn prop_divides_multiples(n in -1000i32..1000, k in -1000i32..1000) {
        prop_assume!(n != 0);
        prop_assert_eq!(divides(n, n * k), Ok(true));
    }

    #[test]
    fn prop_inc_dec_inverse(n in any::<i32>()) {
        prop_assert_eq!(dec(inc(n)), n);
        prop_assert_eq!(inc(dec(n)), n);
    }

    #[test]
    fn prop_plus_minus_inverse(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(minus(plus(a, b), b), a);
    }

    #[test]
    fn prop_factorial_recurrence(n in 1i64..=20) {
        prop_assert_eq!(factorial(n), n * factorial(n - 1));
        prop_assert_eq!(checked_factorial(n), Some(factorial(n)));
    }

    #[test]
    fn prop_curried_matches_uncurried(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(curried::plus(b)(a), plus(a, b));
        prop_assert_eq!(curried::minus(b)(a), minus(a, b));
        prop_assert_eq!(curried::multiply(b)(a), multiply(a, b));
        prop_assert_eq!(curried::divide(b)(a), divide(a, b));
        prop_assert_eq!(curried::modulo(b)(a), modulo(a, b));
    }
}
