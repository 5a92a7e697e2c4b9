//! Relational aliases.
//!
//! Each alias is a named predicate over [`Ord::cmp`], usable wherever a
//! comparison has to be passed as a function value (`sort_by`-style APIs,
//! [`flip`](crate::combinator::flip), and so on).

use std::cmp::Ordering;

/// Returns `true` if `left < right`.
///
/// # Type Parameters
///
/// * `T` - Any totally ordered type, sized or not (`str`, slices)
///
/// # Arguments
///
/// * `left` - The left-hand operand
/// * `right` - The right-hand operand
///
/// # Returns
///
/// `true` when `left.cmp(right)` is [`Ordering::Less`].
///
/// # Examples
///
/// ```
/// use fnkit::ordering::lt;
///
/// assert!(lt(&1, &2));
/// assert!(!lt(&2, &2));
/// assert!(lt([1, 2].as_slice(), [1, 3].as_slice()));
/// ```
#[inline]
pub fn lt<T: Ord + ?Sized>(left: &T, right: &T) -> bool {
    left.cmp(right) == Ordering::Less
}

/// Returns `true` if `left <= right`.
///
/// # Examples
///
/// ```
/// use fnkit::ordering::le;
///
/// assert!(le(&2, &2));
/// assert!(!le("b", "a"));
/// ```
#[inline]
pub fn le<T: Ord + ?Sized>(left: &T, right: &T) -> bool {
    left.cmp(right) != Ordering::Greater
}

/// Returns `true` if `left` and `right` compare equal.
///
/// Equality here means `cmp` returns [`Ordering::Equal`], which for a lawful
/// [`Ord`] agrees with `==`.
#[inline]
pub fn eq<T: Ord + ?Sized>(left: &T, right: &T) -> bool {
    left.cmp(right) == Ordering::Equal
}

/// Returns `true` if `left` and `right` do not compare equal.
#[inline]
pub fn ne<T: Ord + ?Sized>(left: &T, right: &T) -> bool {
    left.cmp(right) != Ordering::Equal
}

/// Returns `true` if `left > right`.
///
/// # Examples
///
/// ```
/// use fnkit::ordering::{gt, lt};
///
/// assert!(gt(&2, &1));
/// assert!(lt("apple", "banana"));
///
/// let above_ten: Vec<i32> = [4, 12, 9, 30].into_iter().filter(|n| gt(n, &10)).collect();
/// assert_eq!(above_ten, vec![12, 30]);
/// ```
#[inline]
pub fn gt<T: Ord + ?Sized>(left: &T, right: &T) -> bool {
    left.cmp(right) == Ordering::Greater
}

/// Returns `true` if `left >= right`.
#[inline]
pub fn ge<T: Ord + ?Sized>(left: &T, right: &T) -> bool {
    left.cmp(right) != Ordering::Less
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_follow_conventional_direction() {
        assert!(lt(&1, &2));
        assert!(!lt(&2, &1));
        assert!(gt(&2, &1));
        assert!(!gt(&1, &2));
    }

    #[test]
    fn test_aliases_on_equal_values() {
        assert!(le(&3, &3));
        assert!(ge(&3, &3));
        assert!(eq(&3, &3));
        assert!(!ne(&3, &3));
        assert!(!lt(&3, &3));
        assert!(!gt(&3, &3));
    }

    #[test]
    fn test_aliases_on_unsized_slices() {
        let shorter: &[u8] = &[1, 2];
        let longer: &[u8] = &[1, 2, 0];
        assert!(lt(shorter, longer));
    }
}
