//! Command-line front end: reads an adjacency matrix problem, runs the
//! requested search strategies and prints their results.

mod cli;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use shortpath_core::{ProblemInstance, find_path, load_problem};
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputFormat};
use output::{SearchReport, write_json, write_text};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = match &cli.log_level {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
    };

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ProblemInstance {
        graph,
        source,
        destination,
    } = load_problem(&cli.input)
        .with_context(|| format!("failed to load problem from {}", cli.input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut reports = Vec::new();

    for &algorithm in cli.algorithm.algorithms() {
        let start = Instant::now();
        let result = find_path(&graph, algorithm, source, destination)
            .with_context(|| format!("{algorithm} search failed"))?;
        let elapsed = start.elapsed();
        tracing::info!(%algorithm, ?elapsed, found = result.is_found(), "search finished");

        let report = SearchReport {
            algorithm,
            source,
            destination,
            result,
            elapsed,
        };
        match cli.format {
            OutputFormat::Text => write_text(&mut out, &report)?,
            OutputFormat::Json => write_json(&mut out, &report)?,
        }
        reports.push(report);
    }
    out.flush()?;

    warn_on_disagreement(&reports);
    Ok(())
}

/// Both strategies must report the same minimum weight
fn warn_on_disagreement(reports: &[SearchReport]) {
    let Some((first, rest)) = reports.split_first() else {
        return;
    };
    for other in rest {
        if other.result.weight() != first.result.weight() {
            tracing::warn!(
                "{} reported {:?} but {} reported {:?}",
                first.algorithm,
                first.result.weight(),
                other.algorithm,
                other.result.weight()
            );
        }
    }
}
