//! Command-line surface of the `catalog` binary.

use clap::Parser;

use crate::catalog::Pattern;
use crate::error::Result;
use crate::harness::{Harness, RunReport};

/// Exit status for an invalid invocation, such as an unknown pattern name.
pub const USAGE_ERROR: u8 = 2;

/// Run Gang-of-Four pattern scenarios and report what they printed
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "catalog", version, about, long_about = None)]
pub struct Cli {
    /// Patterns to run (e.g. observer, template-method); all when omitted
    #[arg(
        value_name = "PATTERN",
        env = "GOF_PATTERNS",
        value_delimiter = ','
    )]
    pub patterns: Vec<String>,

    /// List the catalog grouped by family and exit
    #[arg(short, long)]
    pub list: bool,

    /// Print the run report as JSON
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Run scenarios on the rayon thread pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Full,
    Quiet,
    Json,
}

impl Cli {
    /// Resolves the requested names; an empty request selects everything.
    pub fn selection(&self) -> Result<Vec<Pattern>> {
        let requested: Vec<&str> = self
            .patterns
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect();

        if requested.is_empty() {
            return Ok(Pattern::all().collect());
        }
        requested.into_iter().map(str::parse).collect()
    }

    pub fn harness(&self) -> Result<Harness> {
        let selection = self.selection()?;
        Ok(Harness::for_patterns(selection).parallel(self.parallel))
    }

    /// Resolves the selection and runs it.
    pub fn run(&self) -> Result<RunReport> {
        Ok(self.harness()?.run())
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Full
        }
    }
}

/// Process exit status: the report's own code, or [`USAGE_ERROR`] when the
/// invocation could not be resolved.
pub fn exit_status(outcome: &Result<RunReport>) -> u8 {
    match outcome {
        Ok(report) => report.exit_code(),
        Err(_) => USAGE_ERROR,
    }
}
