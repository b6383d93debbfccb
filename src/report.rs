//! Human-readable rendering of [`Results`].

use std::fmt;

use crate::{Failure, Results};

/// Reporting policy for rules that no check exercised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Count untested rules as failures.
    pub error_untested: bool,
    /// Leave untested rules out of the report.
    pub ignore_untested: bool,
}

/// Text report of a validation run. Rendered through `Display`.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a, 'r> {
    results: &'a Results<'r>,
    options: ReportOptions,
}

impl<'a, 'r> Report<'a, 'r> {
    pub fn new(results: &'a Results<'r>, options: ReportOptions) -> Self {
        Self { results, options }
    }

    /// Number of failures the report describes.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.results.failure_count(&self.options)
    }
}

fn write_failure(f: &mut fmt::Formatter<'_>, heading: &str, failure: &Failure<'_>) -> fmt::Result {
    let check = failure.check();
    writeln!(f, "{heading} on line {}: {check}", check.line())?;
    let mut source = check.input();
    for hop in failure.chain() {
        writeln!(f, "    {source} -> {hop}")?;
        source = hop.destination();
    }
    Ok(())
}

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in self.results.mismatched() {
            let heading = if failure.chain().is_empty() {
                "No rule matched check"
            } else {
                "Unexpected rule matched check"
            };
            write_failure(f, heading, failure)?;
        }
        for failure in self.results.cycles() {
            write_failure(f, "Cycle found from rule", failure)?;
        }
        for failure in self.results.exceeded_hops() {
            write_failure(f, "Excessive redirects found from rule", failure)?;
        }
        if !self.options.ignore_untested {
            for rule in self.results.unmatched() {
                writeln!(f, "Untested rule {rule}")?;
            }
        }
        Ok(())
    }
}
