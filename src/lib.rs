//! # dna-nametag
//!
//! A small tool for generating random DNA test sequences with a hidden name.
//!
//! Given a length and a name, `dna-nametag` draws a uniform random sequence
//! over `A`, `C`, `G` and `T`, splices the name in at a uniformly chosen
//! position (either end included) and writes the result as a FASTA record:
//!
//! ```text
//! >seq1 my test sequence (generated: 2024-05-06 07:08:09)
//! GATTACAGGCTAlexTTAGCA...
//! ```
//!
//! It then reports the composition of the sequence: the percentage of each
//! base and the `(C + G) / (A + T)` ratio.
//!
//! ## Example
//!
//! ```rust
//! use dna_nametag::stats::compute_stats;
//! use dna_nametag::synthesis::{embed, synthesize, RngSource};
//!
//! let mut source = RngSource::seeded(7);
//! let sequence = synthesize(50, &mut source);
//! let embedded = embed(&sequence, "Zbyszek", &mut source);
//!
//! let report = compute_stats(embedded.as_str()).unwrap();
//! assert_eq!(report.counts.total(), 50);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Nucleotides, sequences and FASTA records
//! - [`synthesis`]: Random sequence generation and name embedding
//! - [`output`]: FASTA writer with fixed-width line wrapping
//! - [`stats`]: Composition statistics and report rendering
//! - [`parsing`]: Reading existing FASTA files for the `stats` command
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;
pub mod stats;
pub mod synthesis;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::record::FastaRecord;
pub use crate::core::sequence::{EmbeddedSequence, Sequence};
pub use crate::core::types::{Nucleotide, ALPHABET};
pub use crate::stats::{compute_stats, StatsReport};
pub use crate::synthesis::{embed, synthesize, RngSource, UniformSource};
