//! Writers for generated records.

pub mod fasta;
