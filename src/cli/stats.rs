use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::warn;

use crate::cli::{render_report, OutputFormat};
use crate::parsing::fasta::{is_fasta_file, summarize_fasta_file, SequenceSummary};
use crate::stats::{render_tsv_empty_row, render_tsv_row, StatsReport, TSV_HEADER};

#[derive(Args, Clone, Debug)]
pub struct StatsArgs {
    /// FASTA file to summarize (.fa/.fasta/.fna, optionally .gz or .bgz)
    #[arg(required = true)]
    pub input: PathBuf,
}

pub fn run(args: &StatsArgs, format: OutputFormat) -> anyhow::Result<()> {
    if !is_fasta_file(&args.input) {
        warn!(
            "{} does not have a FASTA extension; reading it as FASTA anyway",
            args.input.display()
        );
    }

    let summaries = summarize_fasta_file(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    match format {
        OutputFormat::Text => print_text(&summaries)?,
        OutputFormat::Json => print_json(&summaries)?,
        OutputFormat::Tsv => print_tsv(&summaries),
    }

    Ok(())
}

/// Statistics for one record, or `None` if it holds no A/C/G/T at all
fn report_for(summary: &SequenceSummary) -> Option<StatsReport> {
    match StatsReport::from_counts(summary.counts) {
        Ok(report) => Some(report),
        Err(e) => {
            warn!("{}: {e}", summary.name);
            None
        }
    }
}

fn print_text(summaries: &[SequenceSummary]) -> anyhow::Result<()> {
    for summary in summaries {
        println!(
            ">{} length={} md5={}",
            summary.name, summary.length, summary.md5
        );
        match report_for(summary) {
            Some(report) => print!("{}", render_report(&report, OutputFormat::Text)?),
            None => println!("No nucleotide data to report."),
        }
    }
    Ok(())
}

fn print_json(summaries: &[SequenceSummary]) -> anyhow::Result<()> {
    let records: Vec<serde_json::Value> = summaries
        .iter()
        .map(|summary| {
            serde_json::json!({
                "name": summary.name,
                "length": summary.length,
                "md5": summary.md5,
                "stats": report_for(summary),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

fn print_tsv(summaries: &[SequenceSummary]) {
    println!("name\tlength\tmd5\t{TSV_HEADER}");
    for summary in summaries {
        let values = report_for(summary).map_or_else(
            || render_tsv_empty_row(&summary.counts),
            |report| render_tsv_row(&report),
        );
        println!(
            "{}\t{}\t{}\t{values}",
            summary.name, summary.length, summary.md5
        );
    }
}
