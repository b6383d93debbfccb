//! Validate Apache-style `Redirect` / `RedirectMatch` rules against a list of
//! expected outcomes.
//!
//! Rules are tried in file order and the first one that applies wins. Each
//! check's input path is followed through the rules until the chain ends,
//! and the final response code and destination are compared with what the
//! check expects.
//!
//! ```
//! use whither::{parse_checks, process_checks, ReportOptions, RuleSet, Settings};
//!
//! let rules = RuleSet::from_text("redirect 301 /old /new\nredirect 410 /gone\n").unwrap();
//! let checks = parse_checks("/old 301 /new\n/gone 410\n/kept 200\n").unwrap();
//!
//! let results = process_checks(&rules, &checks, &Settings::default());
//! assert!(results.is_success(&ReportOptions::default()));
//! ```

mod classify;
mod error;
pub mod parse;
pub mod report;
mod resolve;
mod types;

pub use classify::{classify, process_checks};
pub use error::WhitherError;
pub use parse::{checks_from_file, parse_checks, parse_rules, ParseError};
pub use report::{Report, ReportOptions};
pub use types::{
    Check, CompileError, Directive, Failure, Match, Outcome, Results, Rule, RuleSet,
    RuleSetBuilder, Settings, DEFAULT_CODE, GONE_CODE, NO_REDIRECT_CODE,
};
