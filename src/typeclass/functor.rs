//! Functor type class - mapping over container values.

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that can have a function mapped over their
/// contents while preserving structure.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use lawcheck::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawcheck::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.fmap(|n| n * 2), Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// Equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawcheck::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.replace("replaced"), Some("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<A> Functor for Box<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Box::new(function(*self))
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Identity::new(function(self.into_inner()))
    }
}
