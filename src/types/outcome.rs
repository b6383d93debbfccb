use std::fmt;

/// How a single check fared against the ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome {
    /// The chain ended where the check expected, or no redirect happened
    /// and none was expected.
    Pass,
    /// The final code or destination differs from the expectation, or no
    /// rule applied when a redirect was expected.
    Mismatched,
    /// The chain led back to the check's own input.
    Cycle,
    /// The chain is longer than the configured hop limit.
    ExceededHops,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Pass => "pass",
            Outcome::Mismatched => "mismatched",
            Outcome::Cycle => "cycle",
            Outcome::ExceededHops => "exceeded hops",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Outcome::ExceededHops.to_string(), "exceeded hops");
    }
}
