//! Nucleotide composition statistics.
//!
//! Statistics are computed over the alphabet-only projection of a sequence:
//! every character that is not `A`, `C`, `G` or `T` is dropped before
//! counting. Embedded names are removed this way, except for any uppercase
//! alphabet letters they contain, which are counted as bases.
//!
//! The GC ratio follows the `(C + G) / (A + T) * 100` definition and is
//! undefined when a sequence has no `A` or `T` at all.

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::core::types::{Nucleotide, ALPHABET};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("No nucleotides to compute statistics over")]
    NoNucleotides,

    #[error("GC ratio is undefined without any A or T bases")]
    NoAtBases,
}

/// Occurrences of each base
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NucleotideCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
}

impl NucleotideCounts {
    /// Count alphabet symbols in `text`, ignoring everything else
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        text.chars()
            .filter_map(Nucleotide::from_char)
            .fold(Self::default(), |mut counts, base| {
                counts.add(base);
                counts
            })
    }

    /// Count alphabet symbols in raw sequence bytes, ignoring everything else
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes
            .iter()
            .filter_map(|&b| Nucleotide::from_char(char::from(b)))
            .fold(Self::default(), |mut counts, base| {
                counts.add(base);
                counts
            })
    }

    fn add(&mut self, base: Nucleotide) {
        match base {
            Nucleotide::A => self.a += 1,
            Nucleotide::C => self.c += 1,
            Nucleotide::G => self.g += 1,
            Nucleotide::T => self.t += 1,
        }
    }

    #[must_use]
    pub fn get(&self, base: Nucleotide) -> usize {
        match base {
            Nucleotide::A => self.a,
            Nucleotide::C => self.c,
            Nucleotide::G => self.g,
            Nucleotide::T => self.t,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t
    }

    /// Percentage of `base` among all counted bases
    ///
    /// # Errors
    ///
    /// Returns `StatsError::NoNucleotides` when nothing was counted.
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, base: Nucleotide) -> Result<f64, StatsError> {
        let total = self.total();
        if total == 0 {
            return Err(StatsError::NoNucleotides);
        }
        Ok(self.get(base) as f64 / total as f64 * 100.0)
    }

    /// `(C + G) / (A + T) * 100`
    ///
    /// # Errors
    ///
    /// Returns `StatsError::NoAtBases` when there are no A or T bases.
    #[allow(clippy::cast_precision_loss)]
    pub fn gc_ratio(&self) -> Result<f64, StatsError> {
        let at = self.a + self.t;
        if at == 0 {
            return Err(StatsError::NoAtBases);
        }
        Ok((self.c + self.g) as f64 / at as f64 * 100.0)
    }

    /// `(C + G) / total * 100`
    ///
    /// # Errors
    ///
    /// Returns `StatsError::NoNucleotides` when nothing was counted.
    #[allow(clippy::cast_precision_loss)]
    pub fn gc_content(&self) -> Result<f64, StatsError> {
        let total = self.total();
        if total == 0 {
            return Err(StatsError::NoNucleotides);
        }
        Ok((self.c + self.g) as f64 / total as f64 * 100.0)
    }
}

/// Per-base percentages, in alphabet order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Percentages {
    pub a: f64,
    pub c: f64,
    pub g: f64,
    pub t: f64,
}

impl Percentages {
    #[must_use]
    pub fn get(&self, base: Nucleotide) -> f64 {
        match base {
            Nucleotide::A => self.a,
            Nucleotide::C => self.c,
            Nucleotide::G => self.g,
            Nucleotide::T => self.t,
        }
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.a + self.c + self.g + self.t
    }
}

/// Composition statistics for one sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub counts: NucleotideCounts,
    pub percentages: Percentages,
    /// `None` when the sequence has no A or T bases
    pub gc_ratio: Option<f64>,
    pub gc_content: f64,
}

impl StatsReport {
    /// Derive the full report from base counts
    ///
    /// # Errors
    ///
    /// Returns `StatsError::NoNucleotides` if `counts` is empty.
    pub fn from_counts(counts: NucleotideCounts) -> Result<Self, StatsError> {
        let percentages = Percentages {
            a: counts.percentage(Nucleotide::A)?,
            c: counts.percentage(Nucleotide::C)?,
            g: counts.percentage(Nucleotide::G)?,
            t: counts.percentage(Nucleotide::T)?,
        };

        let gc_ratio = match counts.gc_ratio() {
            Ok(ratio) => Some(ratio),
            Err(e) => {
                warn!("{e}");
                None
            }
        };

        Ok(Self {
            counts,
            percentages,
            gc_ratio,
            gc_content: counts.gc_content()?,
        })
    }
}

/// Compute statistics over the alphabet-only projection of `body`
///
/// # Errors
///
/// Returns `StatsError::NoNucleotides` if `body` contains no alphabet symbols.
pub fn compute_stats(body: &str) -> Result<StatsReport, StatsError> {
    StatsReport::from_counts(NucleotideCounts::from_text(body))
}

/// Human-readable report: one line per base, then the GC ratio
#[must_use]
pub fn render_text(report: &StatsReport) -> String {
    let mut out = String::from("Sequence statistics:\n");
    for base in ALPHABET {
        out.push_str(&format!("{base}: {:.1}%\n", report.percentages.get(base)));
    }
    match report.gc_ratio {
        Some(ratio) => out.push_str(&format!("%CG: {ratio:.1}\n")),
        None => out.push_str("%CG: n/a (no A/T bases)\n"),
    }
    out
}

/// Pretty-printed JSON report
///
/// # Errors
///
/// Returns a serialization error from `serde_json`.
pub fn render_json(report: &StatsReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Column names matching [`render_tsv_row`]
pub const TSV_HEADER: &str = "a\tc\tg\tt\tpct_a\tpct_c\tpct_g\tpct_t\tgc_ratio\tgc_content";

/// One tab-separated row of values, without a trailing newline
#[must_use]
pub fn render_tsv_row(report: &StatsReport) -> String {
    let c = &report.counts;
    let p = &report.percentages;
    let ratio = report
        .gc_ratio
        .map_or_else(|| "NA".to_string(), |r| format!("{r:.4}"));
    format!(
        "{}\t{}\t{}\t{}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{}\t{:.4}",
        c.a, c.c, c.g, c.t, p.a, p.c, p.g, p.t, ratio, report.gc_content
    )
}

/// A [`TSV_HEADER`]-shaped row for counts with no A/C/G/T: every derived
/// column is `NA`
#[must_use]
pub fn render_tsv_empty_row(counts: &NucleotideCounts) -> String {
    format!(
        "{}\t{}\t{}\t{}\tNA\tNA\tNA\tNA\tNA\tNA",
        counts.a, counts.c, counts.g, counts.t
    )
}

/// Two-line TSV report: a header row and a value row
#[must_use]
pub fn render_tsv(report: &StatsReport) -> String {
    format!("{TSV_HEADER}\n{}\n", render_tsv_row(report))
}
