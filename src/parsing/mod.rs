//! Parsers for reading sequences back from existing files.
//!
//! - **FASTA files**: plain or gzip/bgzip compressed, via noodles
//!
//! ## Example
//!
//! ```rust,no_run
//! use dna_nametag::parsing::fasta::summarize_fasta_file;
//! use std::path::Path;
//!
//! for summary in summarize_fasta_file(Path::new("seq1.fasta")).unwrap() {
//!     println!("{}\t{}\t{}", summary.name, summary.length, summary.md5);
//! }
//! ```

pub mod fasta;
