use std::fmt;

use super::error::CompileError;
use super::hop::Match;
use super::rule::Rule;
use super::settings::Settings;

/// Builder for constructing a [`RuleSet`] in code.
///
/// Each call to [`rule()`](Self::rule) takes the fields of one rules-file
/// line and is numbered as the next line, starting at 1.
///
/// # Example
///
/// ```
/// use whither::{RuleSetBuilder, Settings};
///
/// let ruleset = RuleSetBuilder::new()
///     .rule(&["redirect", "301", "/old", "/new"])
///     .rule(&["redirectmatch", "301", "^/docs/(.*)$", "/manual/$1"])
///     .build()
///     .unwrap();
///
/// let chain = ruleset.resolve("/old", &Settings::default());
/// assert_eq!(chain[0].destination(), "/new");
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    lines: Vec<Vec<String>>,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule given as `directive [code] pattern [target]`.
    ///
    /// Fields are validated by [`build()`](Self::build).
    #[must_use]
    pub fn rule<S: AsRef<str>>(mut self, fields: &[S]) -> Self {
        self.lines
            .push(fields.iter().map(|f| f.as_ref().to_owned()).collect());
        self
    }

    /// Construct every rule in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`CompileError`] raised by a malformed rule.
    pub fn build(self) -> Result<RuleSet, CompileError> {
        let rules = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, fields)| Rule::new(i + 1, fields.as_slice()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RuleSet::new(rules))
    }
}

/// An ordered, immutable collection of redirect rules.
///
/// Order is significant: lookups are first-match-wins in insertion order,
/// as a web server applies them. An empty ruleset is valid and matches
/// nothing. Safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub(crate) rules: Vec<Rule>,
}

impl RuleSet {
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The first rule that applies to `path`, with its destination.
    #[must_use]
    pub fn first_match(&self, path: &str) -> Option<Match<'_>> {
        crate::resolve::first_match(&self.rules, path)
    }

    /// Follow redirects from `start` until no rule applies, a destination
    /// repeats, the hop limit is passed, or a terminal rule is reached.
    ///
    /// The hop that passes the limit is included in the returned chain; the
    /// hop that would repeat a destination is not.
    #[must_use]
    pub fn resolve(&self, start: &str, settings: &Settings) -> Vec<Match<'_>> {
        crate::resolve::resolve(&self.rules, start, settings)
    }

    /// Parse the text of a rules file into a `RuleSet`.
    ///
    /// # Errors
    ///
    /// Returns [`WhitherError`](crate::WhitherError) on the first line that
    /// cannot be tokenized or does not form a valid rule.
    pub fn from_text(input: &str) -> Result<Self, crate::WhitherError> {
        crate::parse::parse_rules(input)
    }

    /// Read and parse a rules file.
    ///
    /// # Errors
    ///
    /// Returns [`WhitherError`](crate::WhitherError) on I/O, parse, or
    /// rule construction failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::WhitherError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_text(&input)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patterns = self
            .rules
            .iter()
            .filter(|r| r.directive() == super::Directive::RedirectMatch)
            .count();
        write!(
            f,
            "RuleSet({} rules, {} patterns)",
            self.rules.len(),
            patterns
        )
    }
}
