use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::{debug, info, warn};

use crate::cli::prompt::Prompter;
use crate::cli::{render_report, OutputFormat};
use crate::core::record::FastaRecord;
use crate::output::fasta::{write_fasta_file, DEFAULT_LINE_WIDTH};
use crate::stats::compute_stats;
use crate::synthesis::{embed, synthesize, RngSource, UniformSource};

#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Seed for the random generator (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of sequence characters per FASTA line
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH)]
    pub line_width: NonZeroUsize,

    /// Directory the FASTA file is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

/// Settings for one generation run, built once at startup
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub line_width: NonZeroUsize,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl GeneratorConfig {
    #[must_use]
    pub fn new(args: &GenerateArgs, format: OutputFormat) -> Self {
        Self {
            line_width: args.line_width,
            output_dir: args.output_dir.clone(),
            seed: args.seed,
            format,
        }
    }
}

/// Answers collected from the interactive prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub id: String,
    pub description: String,
    pub name: String,
}

impl GenerationRequest {
    /// Ask for length, id, description and name, in that order.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if input ends or the terminal cannot be written.
    pub fn prompt<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<Self> {
        let length = prompter.read_positive_integer("Enter sequence length: ")?;
        let id = prompter.read_sequence_id("Enter sequence ID: ")?;
        let description = prompter.read_line("Enter sequence description: ")?;
        let name = prompter.read_alphabetic_name("Enter name: ")?;

        Ok(Self {
            length,
            id,
            description,
            name,
        })
    }
}

pub fn run(args: &GenerateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = GeneratorConfig::new(args, format);

    let seed = config.seed.unwrap_or_else(rand::random);
    debug!(seed, "Seeding sequence generator");
    let mut source = RngSource::seeded(seed);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());

    generate(&config, &mut prompter, &mut source)?;
    Ok(())
}

/// Prompt for input, write the FASTA file and print its statistics.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Fails if the prompts cannot be answered or the file cannot be written.
pub fn generate<R, W, S>(
    config: &GeneratorConfig,
    prompter: &mut Prompter<R, W>,
    source: &mut S,
) -> anyhow::Result<PathBuf>
where
    R: BufRead,
    W: Write,
    S: UniformSource + ?Sized,
{
    let request = GenerationRequest::prompt(prompter).context("Failed to read input")?;

    let sequence = synthesize(request.length, source);
    let body = embed(&sequence, &request.name, source);
    let record = FastaRecord::new(request.id, request.description, body);

    let path = write_fasta_file(&record, &config.output_dir, config.line_width)?;
    info!(path = %path.display(), "Sequence saved");

    let out = prompter.output();
    writeln!(out, "Sequence saved to file {}", path.display())?;

    match compute_stats(record.body.as_str()) {
        Ok(report) => write!(out, "{}", render_report(&report, config.format)?)?,
        Err(e) => {
            warn!("{e}");
            writeln!(out, "No nucleotide data to report.")?;
        }
    }
    out.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn config(dir: &std::path::Path, format: OutputFormat) -> GeneratorConfig {
        GeneratorConfig {
            line_width: DEFAULT_LINE_WIDTH,
            output_dir: dir.to_path_buf(),
            seed: None,
            format,
        }
    }

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_generate_writes_file_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("abc\n100\nseq1\nsmall test\nAl3x\nZbyszek\n");

        let path = generate(
            &config(dir.path(), OutputFormat::Text),
            &mut p,
            &mut RngSource::seeded(5),
        )
        .unwrap();
        assert_eq!(path, dir.path().join("seq1.fasta"));

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with(">seq1 small test (generated: "));
        assert!(header.ends_with(')'));

        let body: Vec<&str> = lines.collect();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].chars().count(), 80);
        assert_eq!(body[1].chars().count(), 27);
        assert!(body.concat().contains("Zbyszek"));

        let out = String::from_utf8(p.output().clone()).unwrap();
        assert!(out.contains("Please enter a valid integer."));
        assert!(out.contains("Name must contain only letters."));
        assert!(out.contains(&format!("Sequence saved to file {}", path.display())));
        assert!(out.contains("Sequence statistics:\nA: "));
        assert!(out.contains("%CG: "));
    }

    #[test]
    fn test_generate_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("10\nseq2\n\nBob\n");

        generate(
            &config(dir.path(), OutputFormat::Json),
            &mut p,
            &mut RngSource::seeded(8),
        )
        .unwrap();

        let out = String::from_utf8(p.output().clone()).unwrap();
        let json = &out[out.find('{').unwrap()..];
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        let counts = &value["counts"];
        let total: u64 = ["a", "c", "g", "t"]
            .iter()
            .map(|k| counts[*k].as_u64().unwrap())
            .sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn test_generate_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let mut p = prompter("5\nseq3\ndesc\nAlex\n");

        let err = generate(
            &config(&missing, OutputFormat::Text),
            &mut p,
            &mut RngSource::seeded(1),
        )
        .unwrap_err();
        assert!(format!("{err:#}").starts_with("Failed to write"));
    }

    #[test]
    fn test_generate_fails_on_closed_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("5\n");

        let err = generate(
            &config(dir.path(), OutputFormat::Text),
            &mut p,
            &mut RngSource::seeded(1),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("input closed"));
    }
}
