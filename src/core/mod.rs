//! Core data types for generated sequences.
//!
//! - [`types`]: the nucleotide alphabet
//! - [`sequence`]: generated sequences and their name-embedded form
//! - [`record`]: FASTA records with a generation timestamp

pub mod record;
pub mod sequence;
pub mod types;
