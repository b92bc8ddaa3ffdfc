//! Identity wrapper type - the identity functor.
//!
//! `Identity` wraps a single value and adds no behavior. It is the simplest
//! lawful `Applicative` and therefore the reference model in the law tests:
//! `pure` wraps, `apply` unwraps the function and applies it to the
//! unwrapped value.

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use lawcheck::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// assert_eq!(Identity(7).0, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_and_into_inner_round_trip() {
        let wrapped = Identity::new(String::from("hello"));
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[rstest]
    fn as_inner_returns_reference() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    fn equality_compares_inner_values() {
        assert_eq!(Identity::new(42), Identity::new(42));
        assert_ne!(Identity::new(42), Identity::new(100));
    }

    #[rstest]
    fn from_lifts_plain_values() {
        let wrapped: Identity<i32> = 42.into();
        assert_eq!(wrapped.into_inner(), 42);
    }

    #[test]
    fn type_constructor_maps_element_type() {
        fn assert_with_type<T>()
        where
            Identity<T>: TypeConstructor<Inner = T, WithType<String> = Identity<String>>,
        {
        }

        assert_with_type::<i32>();
    }
}
