use std::fmt;

use super::error::CompileError;

/// Response code a check uses to assert that no redirect happens.
pub const NO_REDIRECT_CODE: &str = "200";

/// An expected outcome for one input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    line: usize,
    input: String,
    code: String,
    expected: Option<String>,
}

impl Check {
    /// Build a check from the fields `input code [expected]`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::InvalidCheck`] unless there are two or three
    /// fields.
    pub fn new<S: AsRef<str>>(line: usize, fields: &[S]) -> Result<Self, CompileError> {
        match fields {
            [input, code] => Ok(Self::expecting(line, input.as_ref(), code.as_ref(), None)),
            [input, code, expected] => Ok(Self::expecting(
                line,
                input.as_ref(),
                code.as_ref(),
                Some(expected.as_ref()),
            )),
            _ => Err(CompileError::InvalidCheck {
                line,
                fields: fields.iter().map(|f| f.as_ref().to_owned()).collect(),
            }),
        }
    }

    #[must_use]
    pub fn expecting(line: usize, input: &str, code: &str, expected: Option<&str>) -> Self {
        Self {
            line,
            input: input.to_owned(),
            code: code.to_owned(),
            expected: expected.map(str::to_owned),
        }
    }

    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Path handed to the ruleset.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Expected response code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Expected final destination, if the check names one.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// True when the check asserts that the input is served without a
    /// redirect.
    #[must_use]
    pub fn expects_no_redirect(&self) -> bool {
        self.code == NO_REDIRECT_CODE
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' should produce {} '{}'",
            self.input,
            self.code,
            self.expected.as_deref().unwrap_or_default()
        )
    }
}
