//! # fnkit
//!
//! Small functional helpers for Rust: combinators, sequence adaptors,
//! ordering utilities, and integer arithmetic helpers.
//!
//! ## Overview
//!
//! Every helper is a pure function over a generic type parameter or a
//! primitive integer type. The crate is organized into four independent
//! groups:
//!
//! - **Combinators**: identity, constant, composition, flip, repeated
//!   application, fixed-point saturation
//! - **Sequences**: emptiness and membership tests, debug dumps, repeated
//!   invocation, 2-way and 3-way zipping, infinite natural numbers
//! - **Ordering**: relational aliases, range checks and clamping, min/max
//! - **Numeric**: quotient-remainder, divisibility, parity, curried and
//!   uncurried arithmetic, factorial
//!
//! ## Feature Flags
//!
//! - `combinator`: Function combinators
//! - `sequence`: Sequence and iterator helpers
//! - `ordering`: Helpers over totally ordered types
//! - `numeric`: Integer arithmetic helpers
//! - `serde`: `Serialize`/`Deserialize` for error types and [`Naturals`](sequence::Naturals)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(then(add_one, double)(5), 12);
//! assert_eq!(limit_in_range(15, 0, 10), Ok(10));
//! assert_eq!(dump(naturals().take(3)), "[ 0, 1, 2, ]");
//! assert_eq!(quotient_remainder(7, 2), Ok((3, 1)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every helper of the enabled feature groups.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "ordering")]
    pub use crate::ordering::*;

    #[cfg(feature = "numeric")]
    pub use crate::numeric::*;
}

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "ordering")]
pub mod ordering;

#[cfg(feature = "numeric")]
pub mod numeric;
