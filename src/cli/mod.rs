//! Command-line interface for dna-nametag.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **generate** (default): prompt for a length, id, description and name,
//!   write `<id>.fasta` and print composition statistics
//! - **stats**: print composition statistics for an existing FASTA file
//!
//! ## Usage
//!
//! ```text
//! # Interactive generation
//! dna-nametag
//!
//! # Reproducible run with 60-column lines, written to out/
//! dna-nametag generate --seed 42 --line-width 60 --output-dir out
//!
//! # Statistics for an existing file, as JSON
//! dna-nametag stats seq1.fasta --format json
//! ```

use clap::{Parser, Subcommand};

use crate::stats::{render_json, render_text, render_tsv, StatsReport};

pub mod generate;
pub mod prompt;
pub mod stats;

#[derive(Parser)]
#[command(name = "dna-nametag")]
#[command(version)]
#[command(about = "Generate a random DNA sequence with an embedded name")]
#[command(
    long_about = "dna-nametag generates a random nucleotide sequence of the requested length, hides a name at a random position inside it and writes the result to <id>.fasta.\n\nAfter writing, it prints the percentage of each nucleotide and the GC/AT ratio of the sequence."
)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options for generation when no subcommand is given
    #[command(flatten)]
    pub generate: generate::GenerateArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for statistics
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a sequence interactively (the default)
    Generate(generate::GenerateArgs),

    /// Report composition statistics for an existing FASTA file
    Stats(stats::StatsArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Render a statistics report in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_report(report: &StatsReport, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => format!("{}\n", render_json(report)?),
        OutputFormat::Tsv => render_tsv(report),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_generate() {
        let cli = Cli::try_parse_from(["dna-nametag"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.line_width.get(), 80);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_generate_options() {
        let cli = Cli::try_parse_from([
            "dna-nametag",
            "generate",
            "--seed",
            "42",
            "--line-width",
            "60",
            "-f",
            "json",
        ])
        .unwrap();
        let Some(Commands::Generate(args)) = cli.command else {
            panic!("expected generate subcommand");
        };
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.line_width.get(), 60);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_zero_line_width_rejected() {
        assert!(Cli::try_parse_from(["dna-nametag", "--line-width", "0"]).is_err());
    }

    #[test]
    fn test_stats_requires_input() {
        assert!(Cli::try_parse_from(["dna-nametag", "stats"]).is_err());
        assert!(Cli::try_parse_from(["dna-nametag", "stats", "x.fa"]).is_ok());
    }
}
