use std::collections::HashSet;

use tracing::debug;

use crate::{Check, Failure, Match, Outcome, Results, RuleSet, Settings};

/// Decide how a check fared given the chain its input resolved to.
///
/// A chain that ends back on the input is a cycle even when it is also
/// over the hop limit.
pub fn classify(check: &Check, chain: &[Match<'_>], settings: &Settings) -> Outcome {
    let Some(last) = chain.last() else {
        return if check.expects_no_redirect() {
            Outcome::Pass
        } else {
            Outcome::Mismatched
        };
    };

    if last.destination() == check.input() {
        Outcome::Cycle
    } else if settings.exceeds_hops(chain.len()) {
        Outcome::ExceededHops
    } else if check.code() != last.code()
        || check.expected().unwrap_or_default() != last.destination()
    {
        Outcome::Mismatched
    } else {
        Outcome::Pass
    }
}

/// Run every check against `rules` and collect the failures.
///
/// A rule counts as matched when it is the first hop of at least one
/// check's chain, whatever that check's outcome.
pub fn process_checks<'r>(rules: &'r RuleSet, checks: &[Check], settings: &Settings) -> Results<'r> {
    let mut results = Results::default();
    let mut exercised: HashSet<usize> = HashSet::new();

    for check in checks {
        let chain = rules.resolve(check.input(), settings);
        if let Some(first) = chain.first() {
            exercised.insert(first.rule().line());
        }

        let outcome = classify(check, &chain, settings);
        debug!(
            line = check.line(),
            input = check.input(),
            hops = chain.len(),
            %outcome,
            "check classified"
        );

        let bucket = match outcome {
            Outcome::Pass => continue,
            Outcome::Mismatched => &mut results.mismatched,
            Outcome::Cycle => &mut results.cycles,
            Outcome::ExceededHops => &mut results.exceeded_hops,
        };
        bucket.push(Failure::new(check.clone(), chain));
    }

    let (matched, unmatched): (Vec<_>, Vec<_>) = rules
        .rules()
        .iter()
        .partition(|rule| exercised.contains(&rule.line()));
    results.matched = matched;
    results.unmatched = unmatched;
    results
}
