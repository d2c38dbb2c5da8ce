//! Reader for existing FASTA files using noodles.
//!
//! Computes per-record composition and MD5 for the `stats` command.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::debug;

use crate::stats::NucleotideCounts;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Name, length, checksum and base counts of one FASTA record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSummary {
    pub name: String,
    pub length: u64,
    /// Lowercase hex MD5 of the uppercased sequence
    pub md5: String,
    /// Counts of uppercase A/C/G/T, as reported for generated sequences
    pub counts: NucleotideCounts,
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Summarize every record of a FASTA file.
///
/// Counting is case-sensitive, matching the statistics printed when a
/// sequence is generated, so lowercase letters of an embedded name are not
/// counted. The MD5 is computed over the uppercased sequence.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, or `ParseError::InvalidFormat` if no records are found.
pub fn summarize_fasta_file(path: &Path) -> Result<Vec<SequenceSummary>, ParseError> {
    let file = std::fs::File::open(path)?;

    if is_gzipped(path) {
        let reader = BufReader::new(GzDecoder::new(file));
        summarize_fasta_reader(&mut fasta::io::Reader::new(reader))
    } else {
        let reader = BufReader::new(file);
        summarize_fasta_reader(&mut fasta::io::Reader::new(reader))
    }
}

/// Summarize from a noodles FASTA reader
fn summarize_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<SequenceSummary>, ParseError> {
    let mut summaries = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = record.sequence();
        let raw: &[u8] = sequence.as_ref();

        // MD5 on uppercase sequence (standard convention)
        let uppercase: Vec<u8> = raw.iter().map(u8::to_ascii_uppercase).collect();

        debug!(name = %name, length = raw.len(), "Read FASTA record");

        summaries.push(SequenceSummary {
            name,
            length: raw.len() as u64,
            md5: format!("{:x}", md5::compute(&uppercase)),
            counts: NucleotideCounts::from_bytes(raw),
        });
    }

    if summaries.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fna.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Seq1.FASTA")));

        assert!(!is_fasta_file(Path::new("test.txt")));
        assert!(!is_fasta_file(Path::new("test.fai")));
    }

    #[test]
    fn test_summarize_fasta_file() {
        let fasta_content = b">seq1 generated\nAlACGT\nACGTAC\n>seq2\nGGGG\n";

        let mut temp = NamedTempFile::with_suffix(".fasta").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let summaries = summarize_fasta_file(temp.path()).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "seq1");
        assert_eq!(summaries[0].length, 12);
        // Only the capital A of "Al" is counted
        assert_eq!(summaries[0].counts.total(), 11);
        assert_eq!(summaries[1].name, "seq2");
        assert_eq!(summaries[1].counts.g, 4);
    }

    #[test]
    fn test_md5_ignores_case() {
        // "ACGT" uppercase -> MD5 = f1f8f4bf413b16ad135722aa4591043e
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1\nacgt\n").unwrap();
        temp.flush().unwrap();

        let summaries = summarize_fasta_file(temp.path()).unwrap();
        assert_eq!(summaries[0].md5, "f1f8f4bf413b16ad135722aa4591043e");
    }

    #[test]
    fn test_counts_are_case_sensitive() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">rt\nGGTagaC\n").unwrap();
        temp.flush().unwrap();

        let summaries = summarize_fasta_file(temp.path()).unwrap();
        assert_eq!(summaries[0].length, 7);
        assert_eq!(summaries[0].counts, NucleotideCounts::from_text("GGTagaC"));
        assert_eq!(summaries[0].counts.total(), 4);
        assert_eq!(summaries[0].counts.a, 0);
    }

    #[test]
    fn test_summarize_gzipped() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">gz1\nACGTT\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let summaries = summarize_fasta_file(temp.path()).unwrap();
        assert_eq!(summaries[0].name, "gz1");
        assert_eq!(summaries[0].counts.t, 2);
    }

    #[test]
    fn test_summarize_empty_fasta() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b"").unwrap();
        temp.flush().unwrap();

        assert!(summarize_fasta_file(temp.path()).is_err());
    }
}
