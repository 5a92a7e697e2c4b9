//! Argument-first function application.
//!
//! [`call`] and [`call_times`] put the value before the function, so a chain
//! of transformations reads in the order it runs. The [`Pipe`] trait offers
//! the same two operations as methods on every sized type.

/// Applies `function` to `value`.
///
/// # Examples
///
/// ```
/// use fnkit::combinator::call;
///
/// assert_eq!(call(4, |x: i32| x * x), 16);
/// ```
#[inline]
pub fn call<T, R, F>(value: T, function: F) -> R
where
    F: FnOnce(T) -> R,
{
    function(value)
}

/// Applies `function` to `value` repeatedly, `times` times.
///
/// `times == 0` returns `value` unchanged. Each application feeds the
/// previous result into the next, so `call_times(x, f, 3) == f(f(f(x)))`.
///
/// # Examples
///
/// ```
/// use fnkit::combinator::call_times;
///
/// assert_eq!(call_times(1, |x: u64| x * 2, 10), 1024);
/// assert_eq!(call_times("unchanged", |s| s, 0), "unchanged");
/// ```
pub fn call_times<T, F>(value: T, mut function: F, times: usize) -> T
where
    F: FnMut(T) -> T,
{
    let mut current = value;
    for _ in 0..times {
        current = function(current);
    }
    current
}

/// Method-call form of [`call`] and [`call_times`].
///
/// Implemented for every sized type.
///
/// # Examples
///
/// ```
/// use fnkit::combinator::Pipe;
///
/// let length = "hello".pipe(str::len).pipe(|n| n * 10);
/// assert_eq!(length, 50);
///
/// assert_eq!(3.pipe_times(|x: i32| x + 2, 4), 11);
/// ```
pub trait Pipe: Sized {
    /// Applies `function` to `self`.
    #[inline]
    fn pipe<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        call(self, function)
    }

    /// Applies `function` to `self` repeatedly, `times` times.
    #[inline]
    fn pipe_times<F>(self, function: F, times: usize) -> Self
    where
        F: FnMut(Self) -> Self,
    {
        call_times(self, function, times)
    }
}

impl<T> Pipe for T {}
