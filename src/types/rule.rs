use std::fmt;

use regex::Regex;

use super::error::CompileError;

/// Response code used when a rule line omits one.
pub const DEFAULT_CODE: &str = "301";

/// Response code of a rule with no target ("gone").
pub const GONE_CODE: &str = "410";

/// The kind of redirect directive a [`Rule`] was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `redirect`: the pattern is a literal path compared byte-for-byte.
    Redirect,
    /// `redirectmatch`: the pattern is a regular expression and the target
    /// may reference its capture groups (`$1`, `$2`, ...).
    RedirectMatch,
}

impl Directive {
    /// Look up a directive by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("redirect") {
            Some(Directive::Redirect)
        } else if name.eq_ignore_ascii_case("redirectmatch") {
            Some(Directive::RedirectMatch)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Directive::Redirect => "redirect",
            Directive::RedirectMatch => "redirectmatch",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Exact,
    Pattern(Regex),
}

/// A single redirect directive read from one line of a rules file.
///
/// Rules are immutable once built. A `redirectmatch` rule always owns a
/// compiled regular expression; construction fails if the pattern does not
/// compile.
#[derive(Debug, Clone)]
pub struct Rule {
    line: usize,
    code: String,
    pattern: String,
    target: String,
    matcher: Matcher,
}

impl Rule {
    /// Build a rule from the whitespace-separated fields of one line.
    ///
    /// Accepted shapes, after the directive name:
    ///
    /// - `code pattern target`
    /// - `410 pattern` (no target, the path is gone)
    /// - `pattern target` (code defaults to `301`)
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] for the wrong number of fields, an unknown
    /// directive, or a `redirectmatch` pattern that is not a valid regex.
    pub fn new<S: AsRef<str>>(line: usize, fields: &[S]) -> Result<Self, CompileError> {
        let fields: Vec<&str> = fields.iter().map(AsRef::as_ref).collect();
        let owned = || -> Vec<String> { fields.iter().map(|f| (*f).to_owned()).collect() };

        let (code, pattern, target) = match fields.as_slice() {
            [_, code, pattern, target] => (*code, *pattern, *target),
            [_, code, pattern] if *code == GONE_CODE => (*code, *pattern, ""),
            [_, pattern, target] => (DEFAULT_CODE, *pattern, *target),
            [] | [_] | [_, _] => {
                return Err(CompileError::TooFewFields {
                    line,
                    fields: owned(),
                })
            }
            _ => {
                return Err(CompileError::TooManyFields {
                    line,
                    fields: owned(),
                })
            }
        };

        let directive =
            Directive::from_name(fields[0]).ok_or_else(|| CompileError::UnknownDirective {
                line,
                directive: fields[0].to_owned(),
            })?;

        let matcher = match directive {
            Directive::Redirect => Matcher::Exact,
            Directive::RedirectMatch => {
                let re = Regex::new(pattern).map_err(|source| CompileError::InvalidPattern {
                    line,
                    pattern: pattern.to_owned(),
                    source,
                })?;
                Matcher::Pattern(re)
            }
        };

        Ok(Self {
            line,
            code: code.to_owned(),
            pattern: pattern.to_owned(),
            target: target.to_owned(),
            matcher,
        })
    }

    /// Line of the rules file this rule came from. Unique within a ruleset.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn directive(&self) -> Directive {
        match self.matcher {
            Matcher::Exact => Directive::Redirect,
            Matcher::Pattern(_) => Directive::RedirectMatch,
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Destination template. Empty for terminal rules.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// A terminal rule has no target, so a chain ends on it.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.target.is_empty()
    }

    /// Test the rule against `path`, returning the concrete destination.
    ///
    /// `None` means the rule does not apply. A terminal rule that applies
    /// returns `Some("")`.
    ///
    /// For `redirectmatch` rules the target is expanded once for every
    /// non-overlapping match of the pattern in `path` and the expansions are
    /// concatenated in order. An anchored pattern (`^...$`) matches at most
    /// once and so yields a single destination.
    #[must_use]
    pub fn apply(&self, path: &str) -> Option<String> {
        match &self.matcher {
            Matcher::Exact => (self.pattern == path).then(|| self.target.clone()),
            Matcher::Pattern(re) => {
                let mut destination = String::new();
                let mut matched = false;
                for caps in re.captures_iter(path) {
                    matched = true;
                    caps.expand(&self.target, &mut destination);
                }
                matched.then_some(destination)
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] {} {} {}",
            self.line,
            self.directive(),
            self.pattern,
            self.code
        )?;
        if !self.target.is_empty() {
            write!(f, " {}", self.target)?;
        }
        Ok(())
    }
}
