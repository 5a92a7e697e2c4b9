//! Binary function composition.
//!
//! [`then`] reads in data-flow order, [`compose`] in mathematical order.
//! Both return a new closure and never call either function eagerly.

/// Composes two functions left to right.
///
/// `then(first, second)(x)` is equivalent to `second(first(x))`.
///
/// # Examples
///
/// ```
/// use fnkit::combinator::then;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let digits = then(to_string, get_length);
/// assert_eq!(digits(12345), 5);
/// ```
#[inline]
pub fn then<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Composes two functions right to left.
///
/// `compose(outer, inner)(x)` is equivalent to `outer(inner(x))`.
///
/// # Laws
///
/// - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
/// - **Identity**: `compose(identity, f) == f == compose(f, identity)`
///
/// # Examples
///
/// ```
/// use fnkit::combinator::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // add_one(double(5)) = add_one(10) = 11
/// assert_eq!(compose(add_one, double)(5), 11);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}
