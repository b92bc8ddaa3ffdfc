//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over bare type constructors like `Option<_>`, which
//! the law definitions need: a law talks about "the same structure applied to
//! a function type". [`TypeConstructor`] recovers that ability with a GAT.

/// A trait representing a type constructor.
///
/// An implementor is a type constructor already applied to some element type
/// (`Option<A>`, `Result<T, E>`, ...); `WithType<B>` names the same
/// constructor applied to `B` instead.
///
/// # Laws
///
/// `WithType<Inner>` must be the implementing type itself, so that
/// re-applying the constructor to the current element type is the identity
/// at the type level.
///
/// # Examples
///
/// ```rust
/// use lawcheck::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Option<i32>>();
///
/// type Lifted = <Option<i32> as TypeConstructor>::WithType<String>;
/// let value: Lifted = Some("five".to_string());
/// assert_eq!(value, Some("five".to_string()));
/// ```
pub trait TypeConstructor {
    /// The element type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<A> TypeConstructor for Box<A> {
    type Inner = A;
    type WithType<B> = Box<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_inner_type_is_element_type() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn result_with_type_preserves_error_type() {
        fn assert_with_type<T, E, B>()
        where
            Result<T, E>: TypeConstructor<Inner = T, WithType<B> = Result<B, E>>,
        {
        }

        assert_with_type::<i32, String, bool>();
        assert_with_type::<String, (), i32>();
    }

    #[test]
    fn box_with_type_produces_same_constructor() {
        fn assert_with_type<T>()
        where
            Box<T>: TypeConstructor<Inner = T, WithType<String> = Box<String>>,
        {
        }

        assert_with_type::<i32>();
    }

    #[test]
    fn with_type_round_trips_through_inner() {
        fn assert_round_trip<T>()
        where
            T: TypeConstructor<WithType<<T as TypeConstructor>::Inner> = T>,
        {
        }

        assert_round_trip::<Option<i32>>();
        assert_round_trip::<Result<String, ()>>();
        assert_round_trip::<Box<u8>>();
    }
}
