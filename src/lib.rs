//! # lawcheck
//!
//! Property-based verification that `Applicative` implementations are lawful.
//!
//! An `Applicative` instance that merely type-checks can still be wrong: its
//! `pure`/`apply` pair must satisfy four algebraic laws (identity,
//! composition, homomorphism, interchange) before generic code may rely on
//! it. This crate turns each law into a named, randomized property that a
//! [proptest](https://docs.rs/proptest) runner evaluates against many
//! generated inputs, shrinking any counterexample it finds.
//!
//! ## Layout
//!
//! - [`typeclass`]: the GAT-based `TypeConstructor`/`Functor`/`Applicative`
//!   foundation the laws quantify over, with instances for `Option`,
//!   `Result`, `Box`, and [`typeclass::Identity`].
//! - [`laws`]: the law constructors, the [`laws::Law`] property type, and the
//!   one-call [`laws::check_applicative_laws`] suite.
//!
//! ## Example
//!
//! ```rust
//! use lawcheck::laws::{check_applicative_laws, AffineFn};
//! use proptest::prelude::*;
//!
//! // Passes: Option's Applicative is lawful.
//! check_applicative_laws(any::<Option<i32>>(), any::<Option<AffineFn>>());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the typeclass traits and the law-checking surface.
///
/// # Usage
///
/// ```rust
/// use lawcheck::prelude::*;
/// ```
pub mod prelude {
    pub use crate::laws::*;
    pub use crate::typeclass::*;
}

pub mod laws;
pub mod typeclass;
