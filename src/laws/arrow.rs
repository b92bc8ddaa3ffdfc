//! Generated-function support for stating the laws.
//!
//! Three of the four Applicative laws quantify over randomly generated
//! functions. proptest generates first-order values, not functions, so the
//! harness states the requirement as a capability: an [`Arrow`] is a sampled
//! value that *denotes* a deterministic total function `X -> X`. The wrapper
//! is what gets generated, compared, and hashed; the denoted function is
//! extracted with [`Arrow::into_endo`] right before application.
//!
//! Extracted functions are boxed ([`Endo`]) rather than left as opaque
//! closures: `apply` chains over a GAT-encoded structure must name their
//! function element types, and `Box<dyn FnOnce>` is the nameable form.

use proptest::arbitrary::Arbitrary;
use proptest::prelude::any;
use proptest::strategy::{BoxedStrategy, Strategy};

/// A boxed endomorphism on `X`.
pub type Endo<X> = Box<dyn FnOnce(X) -> X>;

/// Curried composition applied to its first argument: consumes `g` and
/// yields `f` composed with `g`.
pub type Composed<X> = Box<dyn FnOnce(Endo<X>) -> Endo<X>>;

/// The curried composition operator as a function pointer, so it can be
/// lifted with `pure`.
pub type Compose<X> = fn(Endo<X>) -> Composed<X>;

/// Flipped application: consumes a function and applies it to a fixed
/// argument.
pub type ApplyTo<X> = Box<dyn FnOnce(Endo<X>) -> X>;

/// Returns the value unchanged.
///
/// The unit of composition; the Identity law lifts this with `pure`.
///
/// # Examples
///
/// ```rust
/// use lawcheck::laws::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<X>(value: X) -> X {
    value
}

/// Curried function composition over boxed endomorphisms:
/// `compose(f)(g)` is the function `x -> f(g(x))`.
///
/// # Examples
///
/// ```rust
/// use lawcheck::laws::{compose, Endo};
///
/// let double: Endo<i32> = Box::new(|x| x * 2);
/// let add_one: Endo<i32> = Box::new(|x| x + 1);
/// assert_eq!(compose(double)(add_one)(5), 12);
/// ```
pub fn compose<X: 'static>(first: Endo<X>) -> Composed<X> {
    Box::new(move |second: Endo<X>| Box::new(move |x: X| first(second(x))))
}

/// The Interchange law's flipped application: `apply_to(x)` consumes any
/// function and applies it to `x`.
///
/// # Examples
///
/// ```rust
/// use lawcheck::laws::{apply_to, Endo};
///
/// let negate: Endo<i32> = Box::new(|x| -x);
/// assert_eq!(apply_to(5)(negate), -5);
/// ```
pub fn apply_to<X: 'static>(argument: X) -> ApplyTo<X> {
    Box::new(move |function: Endo<X>| function(argument))
}

/// A sampled value denoting a total function `X -> X`.
///
/// Structures-of-functions carry `Arrow` values as their elements so the
/// structure stays generatable, comparable, and hashable; the law bodies
/// extract the denoted function through `fmap(Arrow::into_endo)`.
///
/// Implemented for `fn(X) -> X` directly, and for [`AffineFn`] as the stock
/// generatable arrow on `i32`.
pub trait Arrow<X> {
    /// Extracts the denoted function.
    fn into_endo(self) -> Endo<X>;
}

impl<X: 'static> Arrow<X> for fn(X) -> X {
    fn into_endo(self) -> Endo<X> {
        Box::new(self)
    }
}

/// A generatable affine function on `i32`: `x -> x * scale + shift`, with
/// wrapping arithmetic.
///
/// Deterministic per `(scale, shift)` pair and `Eq + Hash`, so generated
/// functions are keyed by equality as the function-generation boundary
/// requires. The family covers the interesting algebra: it contains the
/// identity, non-injective functions (`scale == 0`), and pairs that do not
/// commute under composition.
///
/// # Examples
///
/// ```rust
/// use lawcheck::laws::AffineFn;
///
/// let double_then_add_one = AffineFn::new(2, 1);
/// assert_eq!(double_then_add_one.call(5), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AffineFn {
    scale: i32,
    shift: i32,
}

impl AffineFn {
    /// Creates the function `x -> x * scale + shift` (wrapping).
    #[must_use]
    pub const fn new(scale: i32, shift: i32) -> Self {
        Self { scale, shift }
    }

    /// Applies the denoted function.
    #[must_use]
    pub const fn call(self, x: i32) -> i32 {
        x.wrapping_mul(self.scale).wrapping_add(self.shift)
    }
}

impl Arrow<i32> for AffineFn {
    fn into_endo(self) -> Endo<i32> {
        Box::new(move |x| self.call(x))
    }
}

impl Arbitrary for AffineFn {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        (any::<i32>(), any::<i32>())
            .prop_map(|(scale, shift)| Self::new(scale, shift))
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(AffineFn: Copy, Eq, std::hash::Hash, Arbitrary);

    #[rstest]
    fn compose_applies_second_then_first() {
        let double: Endo<i32> = Box::new(|x| x * 2);
        let add_one: Endo<i32> = Box::new(|x| x + 1);
        // double(add_one(5)) rather than add_one(double(5))
        assert_eq!(compose(double)(add_one)(5), 12);
    }

    #[rstest]
    fn identity_is_a_composition_unit() {
        let double: Endo<i32> = Box::new(|x| x * 2);
        assert_eq!(compose(Box::new(identity))(double)(5), 10);

        let double: Endo<i32> = Box::new(|x| x * 2);
        assert_eq!(compose(double)(Box::new(identity))(5), 10);
    }

    #[rstest]
    fn apply_to_feeds_the_fixed_argument() {
        let negate: Endo<i32> = Box::new(|x| -x);
        assert_eq!(apply_to(5)(negate), -5);
    }

    #[rstest]
    #[case(AffineFn::new(1, 0), 7, 7)]
    #[case(AffineFn::new(0, 3), 100, 3)]
    #[case(AffineFn::new(2, 1), 5, 11)]
    #[case(AffineFn::new(-1, 0), 5, -5)]
    fn affine_call_matches_definition(
        #[case] function: AffineFn,
        #[case] input: i32,
        #[case] expected: i32,
    ) {
        assert_eq!(function.call(input), expected);
    }

    #[rstest]
    fn affine_call_wraps_on_overflow() {
        let function = AffineFn::new(2, 0);
        assert_eq!(function.call(i32::MAX), i32::MAX.wrapping_mul(2));
    }

    #[rstest]
    fn affine_into_endo_denotes_the_same_function() {
        let function = AffineFn::new(3, -2);
        assert_eq!(function.into_endo()(4), function.call(4));
    }

    #[rstest]
    fn function_pointers_are_arrows() {
        let pointer: fn(i32) -> i32 = |x| x + 1;
        assert_eq!(pointer.into_endo()(5), 6);
    }
}
