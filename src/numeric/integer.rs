//! The [`Integer`] abstraction over signed primitive integers.

use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// Signed fixed-width integer.
///
/// This trait is sealed: it is implemented for `i8`, `i16`, `i32`, `i64`,
/// `i128` and `isize`, and cannot be implemented outside this crate. Each
/// method forwards to the inherent method of the same name.
pub trait Integer: sealed::Sealed + Copy + Ord + Debug + Display {
    /// The value `0`.
    const ZERO: Self;
    /// The value `1`.
    const ONE: Self;
    /// The value `2`.
    const TWO: Self;

    /// Wrapping addition.
    #[must_use]
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Wrapping subtraction.
    #[must_use]
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Wrapping multiplication.
    #[must_use]
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Wrapping remainder; `MIN.wrapping_rem(-1) == 0`. Panics on a zero divisor.
    #[must_use]
    fn wrapping_rem(self, rhs: Self) -> Self;
    /// Checked multiplication.
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    /// Checked truncating division.
    fn checked_div(self, rhs: Self) -> Option<Self>;
    /// Checked remainder.
    fn checked_rem(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $primitive {}

            impl Integer for $primitive {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$primitive>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$primitive>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$primitive>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn wrapping_rem(self, rhs: Self) -> Self {
                    <$primitive>::wrapping_rem(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$primitive>::checked_mul(self, rhs)
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$primitive>::checked_div(self, rhs)
                }

                #[inline]
                fn checked_rem(self, rhs: Self) -> Option<Self> {
                    <$primitive>::checked_rem(self, rhs)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize);
