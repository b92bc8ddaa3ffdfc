//! Property-based law checking.
//!
//! A [`Law`] is a named, randomized property: a boolean predicate that must
//! hold for every sampled input. The constructors in [`applicative`] build
//! laws for a structure under test from caller-supplied generation
//! strategies, builder callbacks, and witness projections; evaluation is
//! delegated to a proptest [`TestRunner`], which samples inputs, reports
//! failures, and shrinks counterexamples.
//!
//! Laws compose: [`conjoin`] folds several laws into one conjunctive law
//! that passes only when all of its components pass.
//!
//! # Example
//!
//! ```rust
//! use lawcheck::laws::identity_law;
//! use proptest::prelude::*;
//!
//! let law = identity_law(any::<i32>(), |n: i32| Some(n), |v: Option<i32>| v);
//! law.assert_holds();
//! ```

mod applicative;
mod arrow;

pub use applicative::{
    applicative_law_suite, applicative_laws, check_applicative_laws, composition_law,
    homomorphism_law, identity_law, interchange_law,
};
pub use arrow::{AffineFn, ApplyTo, Arrow, Compose, Composed, Endo, apply_to, compose, identity};

use std::fmt;

use proptest::test_runner::TestRunner;

/// A named, randomized law over a structure under test.
///
/// Evaluation is a pure predicate over freshly sampled inputs: a `Law` holds
/// no state between checks, and checking the same law twice against runners
/// with the same configuration and seed yields the same outcome.
pub struct Law {
    name: &'static str,
    check: Box<dyn Fn(&mut TestRunner) -> Result<(), LawViolation>>,
}

impl Law {
    /// Creates a law from a name and a check routine over an external runner.
    pub fn new(
        name: &'static str,
        check: impl Fn(&mut TestRunner) -> Result<(), LawViolation> + 'static,
    ) -> Self {
        Self {
            name,
            check: Box::new(check),
        }
    }

    /// The law's name, as reported in violations.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluates the law against the given runner.
    ///
    /// # Errors
    ///
    /// Returns a [`LawViolation`] carrying the shrunk counterexample if any
    /// sampled input falsifies the law.
    pub fn check(&self, runner: &mut TestRunner) -> Result<(), LawViolation> {
        (self.check)(runner)
    }

    /// Evaluates the law with a default-configuration runner.
    ///
    /// # Panics
    ///
    /// Panics with the violation report if the law does not hold.
    pub fn assert_holds(&self) {
        let mut runner = TestRunner::default();
        if let Err(violation) = self.check(&mut runner) {
            panic!("{violation}");
        }
    }
}

impl fmt::Debug for Law {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Law")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A falsified law: the law's name plus the runner's counterexample report.
///
/// The counterexample text is produced by the proptest runner and includes
/// the shrunk minimal input that violated the law.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawViolation {
    law: &'static str,
    counterexample: String,
}

impl LawViolation {
    pub(crate) const fn new(law: &'static str, counterexample: String) -> Self {
        Self { law, counterexample }
    }

    /// The name of the violated law.
    #[must_use]
    pub const fn law(&self) -> &'static str {
        self.law
    }

    /// The runner's counterexample report.
    #[must_use]
    pub fn counterexample(&self) -> &str {
        &self.counterexample
    }
}

impl fmt::Display for LawViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "law violated - {}: {}",
            self.law, self.counterexample
        )
    }
}

impl std::error::Error for LawViolation {}

/// Combines laws into one that passes only when every component passes.
///
/// Components are checked in order against the same runner; the first
/// failing component's violation is reported unchanged.
#[must_use]
pub fn conjoin(name: &'static str, laws: Vec<Law>) -> Law {
    Law::new(name, move |runner| {
        laws.iter().try_for_each(|law| law.check(runner))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(LawViolation: Clone, Send, Sync, std::error::Error);

    fn passing(name: &'static str) -> Law {
        Law::new(name, |_| Ok(()))
    }

    fn failing(name: &'static str) -> Law {
        Law::new(name, move |_| {
            Err(LawViolation::new(name, "input = 0".to_string()))
        })
    }

    #[rstest]
    fn law_reports_its_name() {
        assert_eq!(passing("some law").name(), "some law");
    }

    #[rstest]
    fn check_surfaces_the_violation() {
        let violation = failing("broken law")
            .check(&mut TestRunner::deterministic())
            .unwrap_err();
        assert_eq!(violation.law(), "broken law");
        assert_eq!(violation.counterexample(), "input = 0");
    }

    #[rstest]
    fn violation_display_names_law_and_counterexample() {
        let violation = LawViolation::new("identity", "v = 3".to_string());
        assert_eq!(violation.to_string(), "law violated - identity: v = 3");
    }

    #[rstest]
    fn conjoin_passes_when_all_components_pass() {
        let law = conjoin("all", vec![passing("first"), passing("second")]);
        assert!(law.check(&mut TestRunner::deterministic()).is_ok());
    }

    #[rstest]
    fn conjoin_reports_first_failing_component() {
        let law = conjoin(
            "all",
            vec![passing("first"), failing("second"), failing("third")],
        );
        let violation = law.check(&mut TestRunner::deterministic()).unwrap_err();
        assert_eq!(violation.law(), "second");
    }

    #[rstest]
    fn law_debug_shows_name_only() {
        let rendered = format!("{:?}", passing("some law"));
        assert!(rendered.contains("some law"));
    }
}
