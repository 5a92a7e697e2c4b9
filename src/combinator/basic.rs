//! Elementary combinators.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `compose(identity, f)` and `compose(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use fnkit::combinator::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Each call yields a fresh clone of `value`.
///
/// # Type Parameters
///
/// * `T` - The type of the constant value (must implement [`Clone`])
/// * `U` - The input type of the returned function (ignored)
///
/// # Examples
///
/// ```
/// use fnkit::combinator::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given `f(a, b)`, returns `g` such that `g(b, a) = f(a, b)`. The return type
/// is unconstrained, so side-effecting functions returning `()` flip the same
/// way as value-returning ones.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use fnkit::combinator::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(10, 3), -7);
/// assert_eq!(flip(flipped)(10, 3), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Swaps the arguments of a binary [`FnMut`] closure.
///
/// Use this instead of [`flip`] when the function mutates captured state,
/// such as an accumulator.
///
/// # Examples
///
/// ```
/// use fnkit::combinator::flip_mut;
///
/// let mut log = Vec::new();
/// {
///     let mut record = flip_mut(|label: &str, value: i32| log.push(format!("{label}={value}")));
///     record(1, "a");
///     record(2, "b");
/// }
/// assert_eq!(log, vec!["a=1", "b=2"]);
/// ```
#[inline]
pub fn flip_mut<A, B, C, F>(mut function: F) -> impl FnMut(B, A) -> C
where
    F: FnMut(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
