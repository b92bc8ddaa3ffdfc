//! The four Applicative laws as randomized properties.
//!
//! Each constructor is generic over the structure under test `F` and takes:
//!
//! - proptest strategies for its sampled inputs (the generation capability),
//! - a builder from sampled seed to structure instance,
//! - a witness projection from structure instance to a comparable value
//!   (structures themselves need not be comparable),
//! - where the law quantifies over wrapped functions, a builder for the
//!   structure-of-functions from a sampled seed.
//!
//! The structure-of-functions is the same type constructor as `F` applied to
//! a function element type; the GAT equality bindings in the signatures pin
//! that relationship down. Function elements travel as [`Arrow`] values and
//! are extracted to boxed [`Endo`] functions right before application, which
//! keeps every intermediate type in an `apply` chain nameable.
//!
//! Structures whose instances are directly generatable and comparable can
//! skip the callbacks entirely via [`check_applicative_laws`] or
//! [`applicative_law_suite`], which default every builder and witness to the
//! identity function.

use std::fmt::Debug;

use proptest::arbitrary::Arbitrary;
use proptest::prelude::any;
use proptest::prop_assert_eq;
use proptest::strategy::Strategy;

use super::arrow::{ApplyTo, Arrow, Compose, Composed, Endo, apply_to, compose, identity};
use super::{Law, LawViolation, conjoin};
use crate::typeclass::{Applicative, Functor, TypeConstructor};

const IDENTITY: &str = "Applicative identity: pure(id).apply(v) == v";
const COMPOSITION: &str =
    "Applicative composition: pure(compose).apply(f).apply(g).apply(h) == f.apply(g.apply(h))";
const HOMOMORPHISM: &str = "Applicative homomorphism: pure(f).apply(pure(x)) == pure(f(x))";
const INTERCHANGE: &str = "Applicative interchange: u.apply(pure(x)) == pure(apply_to(x)).apply(u)";

/// The Identity law: applying a lifted identity function changes nothing.
///
/// For every sampled seed `a`, checks
/// `witness(pure(id).apply(build(a))) == witness(build(a))`.
///
/// # Examples
///
/// ```rust
/// use lawcheck::laws::identity_law;
/// use proptest::prelude::*;
///
/// identity_law(any::<i32>(), |n: i32| Some(n), |v: Option<i32>| v).assert_holds();
/// ```
pub fn identity_law<A, X, E, F, FI, S, MakeF, Witness>(
    inputs: S,
    make_structure: MakeF,
    make_witness: Witness,
) -> Law
where
    A: Clone + Debug + 'static,
    X: 'static,
    E: PartialEq + Debug + 'static,
    F: Applicative<Inner = X, WithType<fn(X) -> X> = FI> + Clone + 'static,
    FI: Applicative<Inner = fn(X) -> X, WithType<X> = F> + 'static,
    S: Strategy<Value = A> + 'static,
    MakeF: Fn(A) -> F + 'static,
    Witness: Fn(F) -> E + 'static,
{
    Law::new(IDENTITY, move |runner| {
        runner
            .run(&inputs, |input| {
                let structure = make_structure(input);
                let applied = F::pure::<fn(X) -> X>(identity).apply::<X, X>(structure.clone());

                let lhs = make_witness(applied);
                let rhs = make_witness(structure);
                prop_assert_eq!(lhs, rhs);
                Ok(())
            })
            .map_err(|error| LawViolation::new(IDENTITY, error.to_string()))
    })
}

/// The Composition law: application associates under lifted composition.
///
/// For every sampled pair of function seeds and value seed, checks
/// `witness(pure(compose).apply(f).apply(g).apply(h)) ==
/// witness(f.apply(g.apply(h)))`, where `f` and `g` are
/// structures-of-functions built by `make_fab` and extracted through
/// `fmap(Arrow::into_endo)`, and `h` is built by `make_structure`.
pub fn composition_law<A, B, X, E, W, F, FAB, FF, FC, FG, SA, SB, MakeF, Witness, MakeFab>(
    inputs: SA,
    fn_seeds: SB,
    make_structure: MakeF,
    make_witness: Witness,
    make_fab: MakeFab,
) -> Law
where
    A: Clone + Debug + 'static,
    B: Clone + Debug + 'static,
    X: 'static,
    E: PartialEq + Debug + 'static,
    W: Arrow<X> + 'static,
    F: TypeConstructor<Inner = X> + Clone + 'static,
    FAB: Functor<Inner = W, WithType<Endo<X>> = FF> + Clone + 'static,
    FF: Applicative<Inner = Endo<X>, WithType<X> = F> + 'static,
    FF: TypeConstructor<WithType<Compose<X>> = FC>,
    FC: Applicative<Inner = Compose<X>, WithType<Endo<X>> = FF> + 'static,
    FC: TypeConstructor<WithType<Composed<X>> = FG>,
    FG: Applicative<Inner = Composed<X>, WithType<Endo<X>> = FF> + 'static,
    SA: Strategy<Value = A> + 'static,
    SB: Strategy<Value = B> + Clone + 'static,
    MakeF: Fn(A) -> F + 'static,
    Witness: Fn(F) -> E + 'static,
    MakeFab: Fn(B) -> FAB + 'static,
{
    let inputs = (fn_seeds.clone(), fn_seeds, inputs);
    Law::new(COMPOSITION, move |runner| {
        runner
            .run(&inputs, |(first_seed, second_seed, input)| {
                let h = make_structure(input);
                let first = make_fab(first_seed);
                let second = make_fab(second_seed);

                let lhs = {
                    let f = first.clone().fmap::<Endo<X>, _>(W::into_endo);
                    let g = second.clone().fmap::<Endo<X>, _>(W::into_endo);
                    make_witness(
                        FF::pure::<Compose<X>>(compose)
                            .apply::<Endo<X>, Composed<X>>(f)
                            .apply::<Endo<X>, Endo<X>>(g)
                            .apply::<X, X>(h.clone()),
                    )
                };
                let rhs = {
                    let f = first.fmap::<Endo<X>, _>(W::into_endo);
                    let g = second.fmap::<Endo<X>, _>(W::into_endo);
                    make_witness(f.apply::<X, X>(g.apply::<X, X>(h)))
                };
                prop_assert_eq!(lhs, rhs);
                Ok(())
            })
            .map_err(|error| LawViolation::new(COMPOSITION, error.to_string()))
    })
}

/// The Homomorphism law: `pure` commutes with function application.
///
/// For every sampled arrow `f` and value `x`, checks
/// `witness(pure(f).apply(pure(x))) == witness(pure(f(x)))`. No builder is
/// needed: both sides are constructed entirely by unit-injection.
///
/// # Examples
///
/// ```rust
/// use lawcheck::laws::{homomorphism_law, AffineFn};
/// use proptest::prelude::*;
///
/// homomorphism_law(any::<AffineFn>(), any::<i32>(), |v: Option<i32>| v).assert_holds();
/// ```
pub fn homomorphism_law<X, E, W, F, FF, SW, SX, Witness>(
    arrows: SW,
    values: SX,
    make_witness: Witness,
) -> Law
where
    X: Clone + Debug + 'static,
    E: PartialEq + Debug + 'static,
    W: Arrow<X> + Clone + Debug + 'static,
    F: Applicative<Inner = X, WithType<Endo<X>> = FF> + 'static,
    FF: Applicative<Inner = Endo<X>, WithType<X> = F> + 'static,
    SW: Strategy<Value = W> + 'static,
    SX: Strategy<Value = X> + 'static,
    Witness: Fn(F) -> E + 'static,
{
    let inputs = (arrows, values);
    Law::new(HOMOMORPHISM, move |runner| {
        runner
            .run(&inputs, |(arrow, value)| {
                let lifted = F::pure::<Endo<X>>(arrow.clone().into_endo());

                let lhs = make_witness(lifted.apply::<X, X>(FF::pure::<X>(value.clone())));
                let rhs = make_witness(FF::pure::<X>((arrow.into_endo())(value)));
                prop_assert_eq!(lhs, rhs);
                Ok(())
            })
            .map_err(|error| LawViolation::new(HOMOMORPHISM, error.to_string()))
    })
}

/// The Interchange law: lifting the argument and lifting "apply to the
/// argument" are interchangeable.
///
/// For every sampled function seed and value `x`, checks
/// `witness(u.apply(pure(x))) == witness(pure(apply_to(x)).apply(u))`,
/// where `u` is the structure-of-functions built by `make_fab`.
pub fn interchange_law<B, X, E, W, F, FAB, FF, FX, SB, SX, Witness, MakeFab>(
    fn_seeds: SB,
    values: SX,
    make_witness: Witness,
    make_fab: MakeFab,
) -> Law
where
    B: Clone + Debug + 'static,
    X: Clone + Debug + 'static,
    E: PartialEq + Debug + 'static,
    W: Arrow<X> + 'static,
    F: TypeConstructor<Inner = X> + 'static,
    FAB: Functor<Inner = W, WithType<Endo<X>> = FF> + Clone + 'static,
    FF: Applicative<Inner = Endo<X>, WithType<X> = F> + 'static,
    FF: TypeConstructor<WithType<ApplyTo<X>> = FX>,
    FX: Applicative<Inner = ApplyTo<X>, WithType<Endo<X>> = FF> + 'static,
    FX: TypeConstructor<WithType<X> = F>,
    SB: Strategy<Value = B> + 'static,
    SX: Strategy<Value = X> + 'static,
    Witness: Fn(F) -> E + 'static,
    MakeFab: Fn(B) -> FAB + 'static,
{
    let inputs = (fn_seeds, values);
    Law::new(INTERCHANGE, move |runner| {
        runner
            .run(&inputs, |(seed, value)| {
                let fab = make_fab(seed);

                let lhs = {
                    let u = fab.clone().fmap::<Endo<X>, _>(W::into_endo);
                    make_witness(u.apply::<X, X>(FF::pure::<X>(value.clone())))
                };
                let rhs = {
                    let u = fab.fmap::<Endo<X>, _>(W::into_endo);
                    make_witness(
                        FF::pure::<ApplyTo<X>>(apply_to(value)).apply::<Endo<X>, X>(u),
                    )
                };
                prop_assert_eq!(lhs, rhs);
                Ok(())
            })
            .map_err(|error| LawViolation::new(INTERCHANGE, error.to_string()))
    })
}

/// All four Applicative laws conjoined into a single law.
///
/// Passes exactly when every component law passes; a failure reports the
/// first falsified component's violation, counterexample included.
#[allow(clippy::too_many_arguments)]
pub fn applicative_laws<
    A,
    B,
    X,
    E,
    W,
    F,
    FI,
    FAB,
    FF,
    FX,
    FC,
    FG,
    SA,
    SB,
    SW,
    SX,
    MakeF,
    Witness,
    MakeFab,
>(
    inputs: SA,
    fn_seeds: SB,
    arrows: SW,
    values: SX,
    make_structure: MakeF,
    make_witness: Witness,
    make_fab: MakeFab,
) -> Law
where
    A: Clone + Debug + 'static,
    B: Clone + Debug + 'static,
    X: Clone + Debug + 'static,
    E: PartialEq + Debug + 'static,
    W: Arrow<X> + Clone + Debug + 'static,
    F: Applicative<Inner = X, WithType<fn(X) -> X> = FI> + Clone + 'static,
    F: TypeConstructor<WithType<Endo<X>> = FF>,
    FI: Applicative<Inner = fn(X) -> X, WithType<X> = F> + 'static,
    FAB: Functor<Inner = W, WithType<Endo<X>> = FF> + Clone + 'static,
    FF: Applicative<Inner = Endo<X>, WithType<X> = F> + 'static,
    FF: TypeConstructor<WithType<ApplyTo<X>> = FX>,
    FF: TypeConstructor<WithType<Compose<X>> = FC>,
    FX: Applicative<Inner = ApplyTo<X>, WithType<Endo<X>> = FF> + 'static,
    FX: TypeConstructor<WithType<X> = F>,
    FC: Applicative<Inner = Compose<X>, WithType<Endo<X>> = FF> + 'static,
    FC: TypeConstructor<WithType<Composed<X>> = FG>,
    FG: Applicative<Inner = Composed<X>, WithType<Endo<X>> = FF> + 'static,
    SA: Strategy<Value = A> + Clone + 'static,
    SB: Strategy<Value = B> + Clone + 'static,
    SW: Strategy<Value = W> + 'static,
    SX: Strategy<Value = X> + Clone + 'static,
    MakeF: Fn(A) -> F + Clone + 'static,
    Witness: Fn(F) -> E + Clone + 'static,
    MakeFab: Fn(B) -> FAB + Clone + 'static,
{
    conjoin(
        "Applicative laws",
        vec![
            identity_law(
                inputs.clone(),
                make_structure.clone(),
                make_witness.clone(),
            ),
            composition_law(
                inputs,
                fn_seeds.clone(),
                make_structure,
                make_witness.clone(),
                make_fab.clone(),
            ),
            homomorphism_law(arrows, values.clone(), make_witness.clone()),
            interchange_law(fn_seeds, values, make_witness, make_fab),
        ],
    )
}

/// The four laws as named properties with identity builders and witnesses.
///
/// For structures whose instances are directly generatable (the `structures`
/// and `functions` strategies yield them whole) and directly comparable.
/// Element values and arrows are drawn from their [`Arbitrary`]
/// implementations, mirroring the defaults of the explicit constructors.
/// The returned laws are ready to hand to any [`proptest`] runner.
pub fn applicative_law_suite<X, W, F, FI, FAB, FF, FX, FC, FG, SF, SFab>(
    structures: SF,
    functions: SFab,
) -> Vec<Law>
where
    X: Arbitrary + Clone + 'static,
    <X as Arbitrary>::Strategy: 'static,
    W: Arbitrary + Arrow<X> + Clone + 'static,
    <W as Arbitrary>::Strategy: 'static,
    F: Applicative<Inner = X, WithType<fn(X) -> X> = FI> + Clone + Debug + PartialEq + 'static,
    F: TypeConstructor<WithType<Endo<X>> = FF>,
    FI: Applicative<Inner = fn(X) -> X, WithType<X> = F> + 'static,
    FAB: Functor<Inner = W, WithType<Endo<X>> = FF> + Clone + Debug + 'static,
    FF: Applicative<Inner = Endo<X>, WithType<X> = F> + 'static,
    FF: TypeConstructor<WithType<ApplyTo<X>> = FX>,
    FF: TypeConstructor<WithType<Compose<X>> = FC>,
    FX: Applicative<Inner = ApplyTo<X>, WithType<Endo<X>> = FF> + 'static,
    FX: TypeConstructor<WithType<X> = F>,
    FC: Applicative<Inner = Compose<X>, WithType<Endo<X>> = FF> + 'static,
    FC: TypeConstructor<WithType<Composed<X>> = FG>,
    FG: Applicative<Inner = Composed<X>, WithType<Endo<X>> = FF> + 'static,
    SF: Strategy<Value = F> + Clone + 'static,
    SFab: Strategy<Value = FAB> + Clone + 'static,
{
    vec![
        identity_law(structures.clone(), |structure: F| structure, |structure: F| {
            structure
        }),
        composition_law(
            structures,
            functions.clone(),
            |structure: F| structure,
            |structure: F| structure,
            |fab: FAB| fab,
        ),
        homomorphism_law(any::<W>(), any::<X>(), |structure: F| structure),
        interchange_law(functions, any::<X>(), |structure: F| structure, |fab: FAB| {
            fab
        }),
    ]
}

/// Checks all four Applicative laws for a directly generatable, directly
/// comparable structure, panicking on the first violation.
///
/// Exactly equivalent to running the four explicit law constructors with
/// identity builder and witness callbacks. Each law is evaluated with a
/// default-configuration runner.
///
/// # Panics
///
/// Panics with the violation report, counterexample included, if any law
/// fails.
///
/// # Examples
///
/// ```rust
/// use lawcheck::laws::{check_applicative_laws, AffineFn};
/// use proptest::prelude::*;
///
/// check_applicative_laws(any::<Option<i32>>(), any::<Option<AffineFn>>());
/// ```
pub fn check_applicative_laws<X, W, F, FI, FAB, FF, FX, FC, FG, SF, SFab>(
    structures: SF,
    functions: SFab,
) where
    X: Arbitrary + Clone + 'static,
    <X as Arbitrary>::Strategy: 'static,
    W: Arbitrary + Arrow<X> + Clone + 'static,
    <W as Arbitrary>::Strategy: 'static,
    F: Applicative<Inner = X, WithType<fn(X) -> X> = FI> + Clone + Debug + PartialEq + 'static,
    F: TypeConstructor<WithType<Endo<X>> = FF>,
    FI: Applicative<Inner = fn(X) -> X, WithType<X> = F> + 'static,
    FAB: Functor<Inner = W, WithType<Endo<X>> = FF> + Clone + Debug + 'static,
    FF: Applicative<Inner = Endo<X>, WithType<X> = F> + 'static,
    FF: TypeConstructor<WithType<ApplyTo<X>> = FX>,
    FF: TypeConstructor<WithType<Compose<X>> = FC>,
    FX: Applicative<Inner = ApplyTo<X>, WithType<Endo<X>> = FF> + 'static,
    FX: TypeConstructor<WithType<X> = F>,
    FC: Applicative<Inner = Compose<X>, WithType<Endo<X>> = FF> + 'static,
    FC: TypeConstructor<WithType<Composed<X>> = FG>,
    FG: Applicative<Inner = Composed<X>, WithType<Endo<X>> = FF> + 'static,
    SF: Strategy<Value = F> + Clone + 'static,
    SFab: Strategy<Value = FAB> + Clone + 'static,
{
    for law in applicative_law_suite(structures, functions) {
        law.assert_holds();
    }
}
