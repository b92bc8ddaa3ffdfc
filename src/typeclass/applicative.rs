//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends [`Functor`] with `pure` (lift a plain value into
//! the context) and `apply` (apply a wrapped function to a wrapped value).
//!
//! # Laws
//!
//! Every implementation must satisfy the four Applicative laws, which the
//! [`crate::laws`] module checks by randomized testing:
//!
//! ```text
//! pure(id).apply(v)                               == v                  (identity)
//! pure(compose).apply(f).apply(g).apply(h)        == f.apply(g.apply(h)) (composition)
//! pure(f).apply(pure(x))                          == pure(f(x))         (homomorphism)
//! u.apply(pure(x))                                == pure(|f| f(x)).apply(u) (interchange)
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for types that support lifting values into a context and
/// applying wrapped functions to wrapped values.
///
/// # Examples
///
/// ```rust
/// use lawcheck::typeclass::Applicative;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
///
/// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
/// assert_eq!(function.apply(Some(5)), Some(6));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawcheck::typeclass::Applicative;
    ///
    /// let x: Result<i32, String> = <Result<(), String>>::pure(42);
    /// assert_eq!(x, Ok(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawcheck::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies a function inside the context to a value inside the context.
    ///
    /// Available when `Self` contains a function type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawcheck::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x * 2);
    /// assert_eq!(function.apply(Some(5)), Some(10));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;

    /// Combines two applicative values into a tuple.
    ///
    /// Equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawcheck::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("a")), Some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Ok(function), Ok(b)) => Ok(function(b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

impl<A> Applicative for Box<A> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, function: F) -> Box<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Box::new(function(*self, *other))
    }

    #[inline]
    fn apply<B, Output>(self, other: Box<B>) -> Box<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Box::new((*self)(*other))
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity::new(function(self.into_inner(), other.into_inner()))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity::new((self.into_inner())(other.into_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_pure_creates_some() {
        let result: Option<i32> = <Option<()>>::pure(42);
        assert_eq!(result, Some(42));
    }

    #[rstest]
    fn option_map2_requires_both_values() {
        assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
        assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
        assert_eq!(None::<i32>.map2(Some(2), |x, y| x + y), None);
    }

    #[rstest]
    fn option_apply_requires_both_sides() {
        let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
        assert_eq!(function.apply(Some(5)), Some(6));
        assert_eq!(function.apply(None::<i32>), None);

        let missing: Option<fn(i32) -> i32> = None;
        assert_eq!(missing.apply(Some(5)), None);
    }

    #[rstest]
    fn option_product_pairs_values() {
        assert_eq!(Some(1).product(Some("a")), Some((1, "a")));
        assert_eq!(Some(1).product(None::<&str>), None);
    }

    #[rstest]
    fn result_pure_creates_ok() {
        let result: Result<i32, String> = <Result<(), String>>::pure(42);
        assert_eq!(result, Ok(42));
    }

    #[rstest]
    fn result_map2_returns_first_error() {
        let first: Result<i32, &str> = Err("first");
        let second: Result<i32, &str> = Err("second");
        assert_eq!(first.map2(second, |x, y| x + y), Err("first"));
    }

    #[rstest]
    fn result_apply_propagates_error() {
        let function: Result<fn(i32) -> i32, &str> = Ok(|x| x + 1);
        assert_eq!(function.apply(Ok(5)), Ok(6));
        assert_eq!(function.apply(Err("broken")), Err("broken"));
    }

    #[rstest]
    fn box_apply_unwraps_and_applies() {
        let function: Box<fn(i32) -> i32> = Box::new(|x| x + 1);
        assert_eq!(function.apply(Box::new(5)), Box::new(6));
    }

    #[rstest]
    fn identity_apply_unwraps_and_applies() {
        let function: Identity<fn(i32) -> i32> = Identity::new(|x| x + 1);
        assert_eq!(function.apply(Identity::new(5)), Identity::new(6));
    }

    // The wrap-one-value scenarios: Identity is the minimal model of the
    // Applicative contract, so the laws can be spelled out by hand here.

    #[rstest]
    fn identity_wrapper_identity_law_scenario() {
        let wrapped = Identity::new(5);
        let applied = <Identity<()>>::pure((|x| x) as fn(i32) -> i32).apply(wrapped);
        assert_eq!(applied, wrapped);
    }

    #[rstest]
    fn identity_wrapper_homomorphism_law_scenario() {
        let add_seven = |x: i32| x + 7;
        let value = 3;

        let lhs = <Identity<()>>::pure(add_seven).apply(<Identity<()>>::pure(value));
        let rhs: Identity<i32> = <Identity<()>>::pure(add_seven(value));

        assert_eq!(lhs, rhs);
        assert_eq!(lhs, Identity::new(10));
    }

    #[rstest]
    fn option_homomorphism_law_scenario() {
        let function = |x: i32| x + 1;
        let value = 5;

        let lhs: Option<i32> = <Option<()>>::pure(function).apply(<Option<()>>::pure(value));
        let rhs: Option<i32> = <Option<()>>::pure(function(value));

        assert_eq!(lhs, rhs);
        assert_eq!(lhs, Some(6));
    }
}
