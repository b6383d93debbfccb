use std::fmt;

use super::check::Check;
use super::hop::Match;
use super::rule::Rule;
use crate::report::ReportOptions;

/// A check that did not pass, with the chain its input resolved to.
#[derive(Debug, Clone)]
pub struct Failure<'r> {
    check: Check,
    chain: Vec<Match<'r>>,
}

impl<'r> Failure<'r> {
    pub(crate) fn new(check: Check, chain: Vec<Match<'r>>) -> Self {
        Self { check, chain }
    }

    #[must_use]
    pub fn check(&self) -> &Check {
        &self.check
    }

    /// Hops followed from the check's input, possibly empty.
    #[must_use]
    pub fn chain(&self) -> &[Match<'r>] {
        &self.chain
    }
}

/// Outcome of running every check against a ruleset, returned by
/// [`process_checks()`](crate::process_checks).
///
/// Failing checks are split by kind. Rules are partitioned by whether any
/// check's chain started at them.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct Results<'r> {
    pub(crate) mismatched: Vec<Failure<'r>>,
    pub(crate) cycles: Vec<Failure<'r>>,
    pub(crate) exceeded_hops: Vec<Failure<'r>>,
    pub(crate) matched: Vec<&'r Rule>,
    pub(crate) unmatched: Vec<&'r Rule>,
}

impl<'r> Results<'r> {
    /// Checks whose final code or destination was not the expected one,
    /// including checks no rule applied to.
    #[must_use]
    pub fn mismatched(&self) -> &[Failure<'r>] {
        &self.mismatched
    }

    /// Checks whose chain returned to the input path.
    #[must_use]
    pub fn cycles(&self) -> &[Failure<'r>] {
        &self.cycles
    }

    /// Checks whose chain went over the hop limit.
    #[must_use]
    pub fn exceeded_hops(&self) -> &[Failure<'r>] {
        &self.exceeded_hops
    }

    /// Rules that started at least one check's chain, in file order.
    #[must_use]
    pub fn matched(&self) -> &[&'r Rule] {
        &self.matched
    }

    /// Rules no check exercised, in file order.
    #[must_use]
    pub fn unmatched(&self) -> &[&'r Rule] {
        &self.unmatched
    }

    /// Number of failures under the given reporting policy.
    #[must_use]
    pub fn failure_count(&self, options: &ReportOptions) -> usize {
        let untested = if options.error_untested {
            self.unmatched.len()
        } else {
            0
        };
        self.mismatched.len() + self.cycles.len() + self.exceeded_hops.len() + untested
    }

    #[must_use]
    pub fn is_success(&self, options: &ReportOptions) -> bool {
        self.failure_count(options) == 0
    }
}

impl fmt::Display for Results<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} mismatched, {} cycles, {} exceeded hops, {} rules matched, {} untested",
            self.mismatched.len(),
            self.cycles.len(),
            self.exceeded_hops.len(),
            self.matched.len(),
            self.unmatched.len(),
        )
    }
}
