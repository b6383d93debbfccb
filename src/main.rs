//! `whither` command line: check an `.htaccess`-style rules file against a
//! file of expected redirects.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use whither::{checks_from_file, process_checks, Report, ReportOptions, RuleSet, Settings};

/// Validate redirect rules against expected outcomes.
#[derive(Parser, Debug)]
#[command(name = "whither", version, about)]
struct Cli {
    /// Rules file (`redirect` / `redirectmatch` lines).
    rules: PathBuf,

    /// Checks file (`input code [expected]` lines).
    checks: PathBuf,

    /// How many redirects a check may follow; 0 means unlimited.
    #[arg(long, default_value_t = 0)]
    max_hops: usize,

    /// Do not list rules that no check exercised.
    #[arg(long)]
    ignore_untested: bool,

    /// Count rules that no check exercised as failures.
    #[arg(long)]
    error_untested: bool,

    /// Trace rule matching to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = Settings::new()
        .with_max_hops(cli.max_hops)
        .with_verbose(cli.verbose);
    init_tracing(&settings);

    let rules = match RuleSet::from_file(&cli.rules) {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("Could not load rules file {}: {e}", cli.rules.display());
            return ExitCode::from(2);
        }
    };

    let checks = match checks_from_file(&cli.checks) {
        Ok(checks) => checks,
        Err(e) => {
            eprintln!("Could not load checks file {}: {e}", cli.checks.display());
            return ExitCode::from(2);
        }
    };

    let results = process_checks(&rules, &checks, &settings);
    let report = Report::new(
        &results,
        ReportOptions {
            error_untested: cli.error_untested,
            ignore_untested: cli.ignore_untested,
        },
    );

    print!("{report}");

    let failures = report.failures();
    if failures > 0 {
        eprintln!("\n{failures} failures");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
