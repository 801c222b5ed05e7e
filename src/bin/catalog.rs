use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use strum::IntoEnumIterator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gof_catalog::catalog::{self, Family};
use gof_catalog::config::{self, Cli, OutputMode};
use gof_catalog::{Outcome, RunReport};

fn print_catalog() {
    for family in Family::iter() {
        println!("{}", family.to_string().bold());
        for pattern in catalog::by_family(family) {
            println!("  {:<18} {}", pattern.to_string().cyan(), pattern.summary());
        }
    }
}

fn print_report(report: &RunReport, mode: OutputMode) {
    if mode == OutputMode::Full {
        for scenario in &report.scenarios {
            println!("{}", format!("== {} ==", scenario.name).bold());
            for line in scenario.lines.lines() {
                println!("  {line}");
            }
            match &scenario.outcome {
                Outcome::Passed => println!("{}", "✓ passed".green()),
                Outcome::Failed { reason } => println!("{} {reason}", "✗ failed:".red()),
            }
            println!();
        }
    }

    let summary = report.summary();
    if report.all_passed() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.bold().red());
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gof_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.list {
        print_catalog();
        return ExitCode::SUCCESS;
    }

    let outcome = cli.run();
    let status = config::exit_status(&outcome);
    let report = match outcome {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {e}", "error:".bold().red());
            return ExitCode::from(status);
        }
    };

    match cli.output_mode() {
        OutputMode::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{} failed to serialize report: {e}", "error:".bold().red());
                return ExitCode::FAILURE;
            }
        },
        mode => print_report(&report, mode),
    }

    ExitCode::from(status)
}
