mod check;
mod error;
mod hop;
mod outcome;
mod results;
mod rule;
mod ruleset;
mod settings;

pub use check::{Check, NO_REDIRECT_CODE};
pub use error::CompileError;
pub use hop::Match;
pub use outcome::Outcome;
pub use results::{Failure, Results};
pub use rule::{Directive, Rule, DEFAULT_CODE, GONE_CODE};
pub use ruleset::{RuleSet, RuleSetBuilder};
pub use settings::Settings;
