use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use shortpath_core::Algorithm;

/// Shortest path search over a weighted adjacency matrix
#[derive(Debug, Parser)]
#[command(name = "shortpath", version, about)]
pub struct Cli {
    /// Adjacency matrix file: vertex count, matrix rows, then "source destination"
    pub input: PathBuf,

    /// Search strategy to run
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = AlgorithmChoice::Dijkstra,
        env = "SHORTPATH_ALGORITHM"
    )]
    pub algorithm: AlgorithmChoice,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "SHORTPATH_FORMAT"
    )]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Explicit log filter, overrides -v (e.g. "shortpath_core=trace")
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    Backtrack,
    Dijkstra,
    /// Run both strategies and compare their results
    Both,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgorithmChoice::Backtrack => &[Algorithm::Backtrack],
            AlgorithmChoice::Dijkstra => &[Algorithm::Dijkstra],
            AlgorithmChoice::Both => &Algorithm::ALL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_algorithm_and_format() {
        let cli = Cli::try_parse_from(["shortpath", "graph.txt", "-a", "both", "--format", "json"])
            .unwrap();
        assert_eq!(cli.algorithm, AlgorithmChoice::Both);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.algorithm.algorithms(), &Algorithm::ALL);
    }

    #[test]
    fn defaults_to_dijkstra_text_output() {
        let cli = Cli::try_parse_from(["shortpath", "graph.txt"]).unwrap();
        assert_eq!(cli.algorithm.algorithms(), &[Algorithm::Dijkstra]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }
}
