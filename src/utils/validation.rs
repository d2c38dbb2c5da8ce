//! Centralized validation of interactive input.
//!
//! Every function here is pure: it takes the raw line the user typed (without
//! its line terminator) and either returns the accepted value or an
//! [`InputError`] whose message is shown to the user before re-prompting.

/// Maximum length of a sequence id, which doubles as a file stem
pub const MAX_SEQUENCE_ID_LENGTH: usize = 250;

/// Rejected interactive input
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Input must be valid UTF-8 text.")]
    InvalidUtf8,
    #[error("Please enter a valid integer.")]
    NotAnInteger,
    #[error("Length must be greater than zero.")]
    NotPositive,
    #[error("Name must not be empty.")]
    EmptyName,
    #[error("Name must contain only letters.")]
    NonAlphabeticName,
    #[error("Sequence ID must not be empty.")]
    EmptySequenceId,
    #[error("Sequence ID too long: exceeds {MAX_SEQUENCE_ID_LENGTH} characters.")]
    SequenceIdTooLong,
    #[error("Sequence ID must not contain whitespace, path separators or control characters.")]
    InvalidSequenceId,
}

/// Parse a strictly positive sequence length.
///
/// Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use dna_nametag::utils::validation::{parse_sequence_length, InputError};
///
/// assert_eq!(parse_sequence_length(" 5 "), Ok(5));
/// assert_eq!(parse_sequence_length("abc"), Err(InputError::NotAnInteger));
/// assert_eq!(parse_sequence_length("0"), Err(InputError::NotPositive));
/// ```
///
/// # Errors
///
/// Returns `InputError::NotAnInteger` for non-numeric text and
/// `InputError::NotPositive` for zero or negative values.
pub fn parse_sequence_length(input: &str) -> Result<usize, InputError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| InputError::NotAnInteger)?;

    if value <= 0 {
        return Err(InputError::NotPositive);
    }
    usize::try_from(value).map_err(|_| InputError::NotAnInteger)
}

/// Accept a non-empty name made only of letters (any script).
///
/// # Examples
///
/// ```
/// use dna_nametag::utils::validation::{validate_name, InputError};
///
/// assert_eq!(validate_name("Alex"), Ok("Alex"));
/// assert_eq!(validate_name("Al3x"), Err(InputError::NonAlphabeticName));
/// assert_eq!(validate_name(""), Err(InputError::EmptyName));
/// ```
///
/// # Errors
///
/// Returns `InputError::EmptyName` for empty input and
/// `InputError::NonAlphabeticName` if any character is not a letter.
pub fn validate_name(input: &str) -> Result<&str, InputError> {
    if input.is_empty() {
        return Err(InputError::EmptyName);
    }
    if !input.chars().all(char::is_alphabetic) {
        return Err(InputError::NonAlphabeticName);
    }
    Ok(input)
}

/// Validate a sequence id for use as a FASTA id and file stem.
///
/// Rejects:
/// - empty ids and ids over [`MAX_SEQUENCE_ID_LENGTH`] characters
/// - whitespace, which would end the FASTA id early
/// - path separators and `..`, which would escape the output directory
/// - null bytes and other control characters
///
/// # Errors
///
/// Returns `InputError::EmptySequenceId`, `InputError::SequenceIdTooLong` or
/// `InputError::InvalidSequenceId`.
pub fn validate_sequence_id(input: &str) -> Result<&str, InputError> {
    if input.is_empty() {
        return Err(InputError::EmptySequenceId);
    }

    if input.chars().count() > MAX_SEQUENCE_ID_LENGTH {
        return Err(InputError::SequenceIdTooLong);
    }

    if input.contains("..") || input.contains('/') || input.contains('\\') {
        return Err(InputError::InvalidSequenceId);
    }

    if input
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(InputError::InvalidSequenceId);
    }

    Ok(input)
}
