/// A single DNA base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

/// The fixed four-symbol alphabet, in reporting order
pub const ALPHABET: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

impl Nucleotide {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }

    /// Map an uppercase base character to a nucleotide.
    ///
    /// Lowercase letters are not accepted; embedded names are mixed case and
    /// only the uppercase symbols are treated as sequence data.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'C' => Some(Self::C),
            'G' => Some(Self::G),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Position of this base within [`ALPHABET`]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Check whether a character is one of the four alphabet symbols
#[must_use]
pub fn is_nucleotide(c: char) -> bool {
    Nucleotide::from_char(c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_round_trips_through_chars() {
        for (i, base) in ALPHABET.iter().enumerate() {
            assert_eq!(Nucleotide::from_char(base.as_char()), Some(*base));
            assert_eq!(base.index(), i);
        }
    }

    #[test]
    fn test_non_alphabet_chars_rejected() {
        for c in ['a', 'c', 'N', 'U', 'x', ' ', 'é'] {
            assert!(!is_nucleotide(c), "{c:?} should not be a nucleotide");
        }
    }
}
