//! Function combinators.
//!
//! This module provides the small building blocks of point-free style:
//! functions that take functions and return functions, with no state of
//! their own.
//!
//! # Overview
//!
//! - [`identity`]: Returns its argument unchanged (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`] / [`flip_mut`]: Swaps the arguments of a binary function (C combinator)
//! - [`then`]: Left-to-right composition, `then(f, g)(x) = g(f(x))`
//! - [`compose`]: Right-to-left composition, `compose(f, g)(x) = f(g(x))`
//! - [`call`] / [`call_times`]: Argument-first application, once or repeatedly
//! - [`Pipe`]: Method form of [`call`] and [`call_times`] for chaining
//! - [`saturate`]: Iterates a function until it reaches a fixed point
//!
//! # Examples
//!
//! ```
//! use fnkit::combinator::{Pipe, compose, then};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(compose(add_one, double)(5), 11);
//! assert_eq!(then(add_one, double)(5), 12);
//! assert_eq!(5.pipe(double).pipe(add_one), 11);
//! ```
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//! - **Duality**: `then(f, g) == compose(g, f)`
//!
//! ## Flip Laws
//!
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`

mod basic;
mod call;
mod composition;
mod saturate;

pub use basic::{constant, flip, flip_mut, identity};
pub use call::{Pipe, call, call_times};
pub use composition::{compose, then};
pub use saturate::saturate;
