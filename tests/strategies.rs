use proptest::prelude::*;
use whither::{Check, RuleSet, RuleSetBuilder};

// --- Fixed path universe ---
// Rules and checks only mention these paths, so generated rules chain into
// each other and cycles are common.

const PATHS: &[&str] = &["/", "/a", "/b", "/c", "/a/b", "/b/c", "/old", "/new"];
const CODES: &[&str] = &["301", "302", "303", "307", "308"];

/// One generated rules-file line.
#[derive(Debug, Clone)]
pub enum GenRule {
    /// `redirect code source target`
    Literal {
        code: &'static str,
        source: &'static str,
        target: &'static str,
    },
    /// `redirectmatch code ^source$ target`
    Anchored {
        code: &'static str,
        source: &'static str,
        target: &'static str,
    },
    /// `redirect 410 source`
    Gone { source: &'static str },
}

impl GenRule {
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        match self {
            GenRule::Literal {
                code,
                source,
                target,
            } => vec![
                "redirect".into(),
                (*code).into(),
                (*source).into(),
                (*target).into(),
            ],
            GenRule::Anchored {
                code,
                source,
                target,
            } => vec![
                "redirectmatch".into(),
                (*code).into(),
                format!("^{}$", regex::escape(source)),
                (*target).into(),
            ],
            GenRule::Gone { source } => vec!["redirect".into(), "410".into(), (*source).into()],
        }
    }

    /// The single path this rule applies to.
    #[must_use]
    pub fn source(&self) -> &'static str {
        match self {
            GenRule::Literal { source, .. }
            | GenRule::Anchored { source, .. }
            | GenRule::Gone { source } => source,
        }
    }
}

/// A generated rules file.
#[derive(Debug, Clone)]
pub struct GenRuleSet {
    pub rules: Vec<GenRule>,
}

impl GenRuleSet {
    /// Build the actual `RuleSet`.
    ///
    /// # Panics
    ///
    /// Panics if a generated rule is rejected (should not happen with valid
    /// generators).
    #[must_use]
    pub fn build(&self) -> RuleSet {
        let mut builder = RuleSetBuilder::new();
        for rule in &self.rules {
            builder = builder.rule(rule.fields().as_slice());
        }
        builder.build().expect("generated ruleset should build")
    }
}

pub fn arb_path() -> impl Strategy<Value = &'static str> {
    prop::sample::select(PATHS)
}

fn arb_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CODES)
}

pub fn arb_rule() -> impl Strategy<Value = GenRule> {
    prop_oneof![
        4 => (arb_code(), arb_path(), arb_path()).prop_map(|(code, source, target)| {
            GenRule::Literal {
                code,
                source,
                target,
            }
        }),
        3 => (arb_code(), arb_path(), arb_path()).prop_map(|(code, source, target)| {
            GenRule::Anchored {
                code,
                source,
                target,
            }
        }),
        1 => arb_path().prop_map(|source| GenRule::Gone { source }),
    ]
}

/// 0..=10 rules over the shared path universe.
pub fn arb_ruleset() -> impl Strategy<Value = GenRuleSet> {
    prop::collection::vec(arb_rule(), 0..=10).prop_map(|rules| GenRuleSet { rules })
}

/// A check over the shared path universe, with or without an expected
/// destination.
pub fn arb_check() -> impl Strategy<Value = (&'static str, &'static str, Option<&'static str>)> {
    (
        arb_path(),
        prop::sample::select(&["200", "301", "302", "410"][..]),
        prop::option::of(arb_path()),
    )
}

pub fn arb_checks() -> impl Strategy<Value = Vec<Check>> {
    prop::collection::vec(arb_check(), 0..=12).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (input, code, expected))| Check::expecting(i + 1, input, code, expected))
            .collect()
    })
}
