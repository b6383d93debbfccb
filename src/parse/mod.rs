mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::Record;

use tracing::debug;

use crate::{Check, Rule, RuleSet, WhitherError};

/// Tokenize a rules or checks file into records, one per line that is
/// neither blank nor a comment. Line numbers count every physical line.
pub fn records(input: &str) -> impl Iterator<Item = Result<Record, ParseError>> + '_ {
    use winnow::Parser;
    input.lines().enumerate().filter_map(|(i, text)| {
        let line = i + 1;
        match grammar::record.parse(text) {
            Ok(fields) if fields.is_empty() => None,
            Ok(fields) => Some(Ok(Record { line, fields })),
            Err(e) => Some(Err(ParseError::new(
                line,
                format!(
                    "column {}: {}",
                    e.offset() + 1,
                    e.inner().to_string().replace('\n', ", ")
                ),
            ))),
        }
    })
}

/// Parse the text of a rules file. Stops at the first bad line.
///
/// # Errors
///
/// Returns [`WhitherError`] if a line cannot be tokenized or is not a valid
/// rule.
pub fn parse_rules(input: &str) -> Result<RuleSet, WhitherError> {
    let mut rules = Vec::new();
    for record in records(input) {
        let record = record?;
        rules.push(Rule::new(record.line, record.fields.as_slice())?);
    }
    debug!(rules = rules.len(), "parsed rules");
    Ok(RuleSet::new(rules))
}

/// Parse the text of a checks file. Stops at the first bad line.
///
/// # Errors
///
/// Returns [`WhitherError`] if a line cannot be tokenized or is not a valid
/// check.
pub fn parse_checks(input: &str) -> Result<Vec<Check>, WhitherError> {
    let mut checks = Vec::new();
    for record in records(input) {
        let record = record?;
        checks.push(Check::new(record.line, record.fields.as_slice())?);
    }
    debug!(checks = checks.len(), "parsed checks");
    Ok(checks)
}

/// Read and parse a checks file.
///
/// # Errors
///
/// Returns [`WhitherError`] on I/O, parse, or check construction failure.
pub fn checks_from_file(path: impl AsRef<std::path::Path>) -> Result<Vec<Check>, WhitherError> {
    let input = std::fs::read_to_string(path)?;
    parse_checks(&input)
}
