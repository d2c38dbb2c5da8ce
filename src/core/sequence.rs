use crate::core::types::{is_nucleotide, Nucleotide};

/// A generated run of nucleotides.
///
/// The length is fixed at creation; the only way to derive new content from a
/// `Sequence` is to splice a name into it, producing an [`EmbeddedSequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    bases: Vec<Nucleotide>,
}

impl Sequence {
    #[must_use]
    pub fn new(bases: Vec<Nucleotide>) -> Self {
        Self { bases }
    }

    /// Build a sequence from text made only of `A`, `C`, `G` and `T`.
    /// Returns `None` on the first character outside the alphabet.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        text.chars()
            .map(Nucleotide::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Self::new)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    #[must_use]
    pub fn bases(&self) -> &[Nucleotide] {
        &self.bases
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for base in &self.bases {
            write!(f, "{base}")?;
        }
        Ok(())
    }
}

/// A sequence with a name spliced in at one position.
///
/// Positions and lengths are counted in characters, since names may contain
/// any Unicode letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedSequence {
    text: String,
    position: usize,
    name_len: usize,
}

impl EmbeddedSequence {
    /// Splice `name` into `sequence` before base `position`.
    ///
    /// Callers must ensure `position <= sequence.len()`.
    pub(crate) fn splice(sequence: &Sequence, name: &str, position: usize) -> Self {
        let name_len = name.chars().count();
        let mut text = String::with_capacity(sequence.len() + name.len());
        text.extend(sequence.bases()[..position].iter().map(|b| b.as_char()));
        text.push_str(name);
        text.extend(sequence.bases()[position..].iter().map(|b| b.as_char()));

        Self {
            text,
            position,
            name_len,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Index (in characters) where the name starts
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length in characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The embedded name, recovered from its recorded span
    #[must_use]
    pub fn name(&self) -> &str {
        let start = self.byte_offset(self.position);
        let end = self.byte_offset(self.position + self.name_len);
        &self.text[start..end]
    }

    /// The text with the name span removed, i.e. the original sequence
    #[must_use]
    pub fn without_name(&self) -> String {
        let start = self.byte_offset(self.position);
        let end = self.byte_offset(self.position + self.name_len);
        let mut out = String::with_capacity(self.text.len() - (end - start));
        out.push_str(&self.text[..start]);
        out.push_str(&self.text[end..]);
        out
    }

    /// The alphabet-only projection of the text.
    ///
    /// Any `A`, `C`, `G` or `T` in the embedded name is kept as well.
    #[must_use]
    pub fn nucleotides_only(&self) -> String {
        filter_nucleotides(&self.text)
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

impl std::fmt::Display for EmbeddedSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Keep only alphabet symbols from `text`, preserving order
#[must_use]
pub fn filter_nucleotides(text: &str) -> String {
    text.chars().filter(|&c| is_nucleotide(c)).collect()
}
