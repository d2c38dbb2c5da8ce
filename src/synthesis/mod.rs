//! Random sequence synthesis and name embedding.
//!
//! Randomness is drawn through the [`UniformSource`] trait rather than a
//! global generator, so both steps can be driven by a seeded RNG or, in tests,
//! by a fixed script of draws.
//!
//! ## Example
//!
//! ```rust
//! use dna_nametag::synthesis::{embed, synthesize, RngSource};
//!
//! let mut source = RngSource::seeded(42);
//! let sequence = synthesize(100, &mut source);
//! let embedded = embed(&sequence, "Alex", &mut source);
//!
//! assert_eq!(embedded.len(), 104);
//! assert_eq!(embedded.without_name(), sequence.to_string());
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

use crate::core::sequence::{EmbeddedSequence, Sequence};
use crate::core::types::ALPHABET;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EmbedError {
    #[error("Insertion position {position} is past the end of a sequence of length {length}")]
    PositionOutOfRange { position: usize, length: usize },
}

/// A source of uniformly distributed indices
pub trait UniformSource {
    /// Draw an index uniformly from `0..upper`. `upper` is always non-zero.
    fn index_below(&mut self, upper: usize) -> usize;
}

/// [`UniformSource`] backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// A reproducible source for the given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn index_below(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

/// Draw `length` independent bases uniformly from the alphabet
pub fn synthesize<S: UniformSource + ?Sized>(length: usize, source: &mut S) -> Sequence {
    let bases = (0..length)
        .map(|_| ALPHABET[source.index_below(ALPHABET.len())])
        .collect();
    Sequence::new(bases)
}

/// Splice `name` into `sequence` at a uniformly drawn position in `0..=len`.
///
/// Both ends are valid insertion points, giving `len + 1` choices.
pub fn embed<S: UniformSource + ?Sized>(
    sequence: &Sequence,
    name: &str,
    source: &mut S,
) -> EmbeddedSequence {
    let position = source.index_below(sequence.len() + 1);
    debug!(position, "Embedding name");
    EmbeddedSequence::splice(sequence, name, position)
}

/// Splice `name` into `sequence` before base `position`.
///
/// # Errors
///
/// Returns `EmbedError::PositionOutOfRange` if `position > sequence.len()`.
pub fn embed_at(
    sequence: &Sequence,
    name: &str,
    position: usize,
) -> Result<EmbeddedSequence, EmbedError> {
    if position > sequence.len() {
        return Err(EmbedError::PositionOutOfRange {
            position,
            length: sequence.len(),
        });
    }
    Ok(EmbeddedSequence::splice(sequence, name, position))
}
