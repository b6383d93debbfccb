use thiserror::Error;

/// Errors raised while constructing a [`Rule`](super::Rule) or
/// [`Check`](super::Check) from the fields of one input line.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("not enough parameters on line {line}: {}", fields.join(" "))]
    TooFewFields { line: usize, fields: Vec<String> },

    #[error("too many parameters on line {line}: {}", fields.join(" "))]
    TooManyFields { line: usize, fields: Vec<String> },

    #[error("unknown directive '{directive}' in rule on line {line}")]
    UnknownDirective { line: usize, directive: String },

    #[error("invalid pattern '{pattern}' in rule on line {line}")]
    InvalidPattern {
        line: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("could not understand check on line {line}: {}", fields.join(" "))]
    InvalidCheck { line: usize, fields: Vec<String> },
}

impl CompileError {
    /// Line of the input file the error was raised for.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            CompileError::TooFewFields { line, .. }
            | CompileError::TooManyFields { line, .. }
            | CompileError::UnknownDirective { line, .. }
            | CompileError::InvalidPattern { line, .. }
            | CompileError::InvalidCheck { line, .. } => *line,
        }
    }
}
