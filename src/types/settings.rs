/// Knobs for chain resolution and classification.
///
/// `max_hops == 0` leaves chains unbounded apart from cycle detection.
/// `verbose` only affects tracing output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub max_hops: usize,
    pub verbose: bool,
}

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// True when a chain of `hops` redirects is over the configured limit.
    #[must_use]
    pub fn exceeds_hops(&self, hops: usize) -> bool {
        self.max_hops > 0 && hops > self.max_hops
    }

    /// Default tracing filter directive for this verbosity.
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
