use thiserror::Error;

use crate::parse::ParseError;
use crate::CompileError;

/// Unified error type covering tokenizing, rule/check construction, and I/O.
///
/// Returned by loaders like [`RuleSet::from_text()`](crate::RuleSet::from_text)
/// and [`checks_from_file()`](crate::checks_from_file).
#[derive(Debug, Error)]
pub enum WhitherError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
