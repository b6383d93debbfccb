use std::fmt;

use super::rule::Rule;

/// One hop of a redirect chain: the rule that applied and the concrete
/// destination it produced.
#[derive(Debug, Clone)]
pub struct Match<'r> {
    rule: &'r Rule,
    destination: String,
}

impl<'r> Match<'r> {
    pub(crate) fn new(rule: &'r Rule, destination: String) -> Self {
        Self { rule, destination }
    }

    #[must_use]
    pub fn rule(&self) -> &'r Rule {
        self.rule
    }

    /// Destination after back-reference expansion. Empty when the rule is
    /// terminal.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Response code of the applied rule.
    #[must_use]
    pub fn code(&self) -> &'r str {
        self.rule.code()
    }
}

impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [line {}]",
            self.rule.code(),
            self.destination,
            self.rule.line()
        )
    }
}
