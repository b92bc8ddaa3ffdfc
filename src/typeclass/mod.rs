//! Type class traits the law harness quantifies over.
//!
//! Rust has no native higher-kinded types, so the hierarchy is built on
//! Generic Associated Types:
//!
//! - [`TypeConstructor`]: HKT emulation (`Option<_>`, `Result<_, E>`, ...)
//! - [`Functor`]: mapping over the contained value
//! - [`Applicative`]: lifting values in (`pure`) and applying wrapped
//!   functions to wrapped values (`apply`)
//! - [`Identity`]: the minimal wrapper instance, useful as the simplest
//!   lawful model
//!
//! Instances are provided for `Option<A>`, `Result<T, E: Clone>`, `Box<A>`,
//! and [`Identity<A>`]. These are the structures the integration tests run
//! the laws against; library users bring their own.

mod applicative;
mod functor;
mod higher;
mod identity;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
