//! Extrema and one-sided clamps.

/// Returns the largest of `first` and every value in `rest`.
///
/// Taking `first` separately guarantees at least one candidate, so there is
/// no empty case. Among equal maxima the earliest one wins.
///
/// # Examples
///
/// ```
/// use fnkit::ordering::max_of;
///
/// assert_eq!(max_of(3, [9, 4, 9]), 9);
/// assert_eq!(max_of("solo", []), "solo");
/// ```
pub fn max_of<T, I>(first: T, rest: I) -> T
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    rest.into_iter()
        .fold(first, |best, candidate| if candidate > best { candidate } else { best })
}

/// Returns the smallest of `first` and every value in `rest`.
///
/// Among equal minima the earliest one wins.
///
/// # Examples
///
/// ```
/// use fnkit::ordering::min_of;
///
/// assert_eq!(min_of(3, [9, -4, 0]), -4);
/// ```
pub fn min_of<T, I>(first: T, rest: I) -> T
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    rest.into_iter()
        .fold(first, |best, candidate| if candidate < best { candidate } else { best })
}

/// Returns the greater of two values, or `second` when they are equal.
///
/// # Examples
///
/// ```
/// use fnkit::ordering::greater_of;
///
/// assert_eq!(greater_of(2, 7), 7);
/// assert_eq!(greater_of(7, 2), 7);
/// ```
#[inline]
pub fn greater_of<T: Ord>(first: T, second: T) -> T {
    if first > second { first } else { second }
}

/// Returns the lesser of two values, or `second` when they are equal.
///
/// The mirror image of [`greater_of`]. Ties go to `second` in both, so
/// `lesser_of(a, b)` and `greater_of(a, b)` return distinct arguments unless
/// the two compare equal.
///
/// # Type Parameters
///
/// * `T` - Any totally ordered type
///
/// # Arguments
///
/// * `first` - The first candidate
/// * `second` - The second candidate, returned on a tie
///
/// # Returns
///
/// Whichever argument compares smaller.
///
/// # Examples
///
/// ```
/// use fnkit::ordering::lesser_of;
///
/// assert_eq!(lesser_of(2, 7), 2);
/// assert_eq!(lesser_of("pear", "apple"), "apple");
/// ```
#[inline]
pub fn lesser_of<T: Ord>(first: T, second: T) -> T {
    if first < second { first } else { second }
}

/// Limits `value` from above: returns `max` if `value` exceeds it.
///
/// # Examples
///
/// ```
/// use fnkit::ordering::clamp_max;
///
/// assert_eq!(clamp_max(120, 100), 100);
/// assert_eq!(clamp_max(80, 100), 80);
/// ```
#[inline]
pub fn clamp_max<T: Ord>(value: T, max: T) -> T {
    lesser_of(value, max)
}

/// Limits `value` from below: returns `min` if `value` falls short of it.
///
/// # Arguments
///
/// * `value` - The value to limit
/// * `min` - The lower bound
///
/// # Returns
///
/// `value` if it is at least `min`, otherwise `min`.
///
/// # Examples
///
/// ```
/// use fnkit::ordering::clamp_min;
///
/// assert_eq!(clamp_min(-3, 0), 0);
/// assert_eq!(clamp_min(5, 0), 5);
/// ```
#[inline]
pub fn clamp_min<T: Ord>(value: T, min: T) -> T {
    greater_of(value, min)
}
