//! Interactive prompts with re-prompting on invalid input.
//!
//! [`Prompter`] is generic over its input and output so the same loops run
//! against the terminal and against in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::utils::validation::{
    parse_sequence_length, validate_name, validate_sequence_id, InputError,
};

/// Reads answers to prompts, one line each
pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    /// Where prompts, rejections and results are written
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and read one line of free text, without its terminator.
    ///
    /// Only a line that is not valid UTF-8 is rejected and asked for again.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` if input ends before a line is entered, or any
    /// underlying I/O error.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.read_validated(prompt, |s| Ok(s.to_owned()))
    }

    /// Print `prompt` and read one raw line, decoding it as UTF-8.
    ///
    /// The outer error is a fatal I/O failure; the inner one is a malformed
    /// line the caller reports before prompting again.
    fn read_raw(&mut self, prompt: &str) -> io::Result<Result<String, InputError>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a value was entered",
            ));
        }

        while matches!(self.line.last(), Some(b'\n' | b'\r')) {
            self.line.pop();
        }

        Ok(std::str::from_utf8(&self.line)
            .map(str::to_owned)
            .map_err(|_| InputError::InvalidUtf8))
    }

    /// Prompt until `validate` accepts the line, reporting each rejection.
    ///
    /// There is no retry limit.
    fn read_validated<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<T> {
        loop {
            let rejection = match self.read_raw(prompt)? {
                Ok(line) => match validate(&line) {
                    Ok(value) => return Ok(value),
                    Err(e) => {
                        debug!(input = %line, "Rejected input: {e}");
                        e
                    }
                },
                Err(e) => {
                    debug!(bytes = self.line.len(), "Rejected input: {e}");
                    e
                }
            };
            writeln!(self.output, "{rejection}")?;
        }
    }

    /// Prompt until a strictly positive integer is entered
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading or writing fails, including EOF.
    pub fn read_positive_integer(&mut self, prompt: &str) -> io::Result<usize> {
        self.read_validated(prompt, parse_sequence_length)
    }

    /// Prompt until a non-empty, letters-only name is entered
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading or writing fails, including EOF.
    pub fn read_alphabetic_name(&mut self, prompt: &str) -> io::Result<String> {
        self.read_validated(prompt, |s| validate_name(s).map(str::to_owned))
    }

    /// Prompt until an id usable as a FASTA id and file stem is entered
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading or writing fails, including EOF.
    pub fn read_sequence_id(&mut self, prompt: &str) -> io::Result<String> {
        self.read_validated(prompt, |s| validate_sequence_id(s).map(str::to_owned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        prompter_bytes(input.as_bytes())
    }

    fn prompter_bytes(input: &[u8]) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.to_vec()), Vec::new())
    }

    fn output(p: &mut Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output().clone()).unwrap()
    }

    #[test]
    fn test_positive_integer_retries() {
        let mut p = prompter("abc\n-2\n0\n5\n");
        assert_eq!(p.read_positive_integer("Length: ").unwrap(), 5);

        let out = output(&mut p);
        assert_eq!(out.matches("Length: ").count(), 4);
        assert_eq!(out.matches("Please enter a valid integer.").count(), 1);
        assert_eq!(out.matches("Length must be greater than zero.").count(), 2);
    }

    #[test]
    fn test_positive_integer_leaves_later_lines() {
        let mut p = prompter("abc\n5\nseq1\n");
        assert_eq!(p.read_positive_integer("Length: ").unwrap(), 5);
        assert_eq!(p.read_line("Id: ").unwrap(), "seq1");
    }

    #[test]
    fn test_name_retries() {
        let mut p = prompter("Al3x\n\nAlex\r\n");
        assert_eq!(p.read_alphabetic_name("Name: ").unwrap(), "Alex");

        let out = output(&mut p);
        assert!(out.contains("Name must contain only letters."));
        assert!(out.contains("Name must not be empty."));
    }

    #[test]
    fn test_sequence_id_retries() {
        let mut p = prompter("../x\nseq 1\nseq1\n");
        assert_eq!(p.read_sequence_id("Id: ").unwrap(), "seq1");
        assert_eq!(output(&mut p).matches("Id: ").count(), 3);
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut p = prompter("abc\n");
        let err = p.read_positive_integer("Length: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_invalid_utf8_reprompts() {
        let mut p = prompter_bytes(b"\xff\n5\n");
        assert_eq!(p.read_positive_integer("Length: ").unwrap(), 5);

        let out = output(&mut p);
        assert_eq!(out.matches("Length: ").count(), 2);
        assert_eq!(out.matches("Input must be valid UTF-8 text.").count(), 1);
    }

    #[test]
    fn test_invalid_utf8_description_reprompts() {
        let mut p = prompter_bytes(b"caf\xe9\r\ncafe\n");
        assert_eq!(p.read_line("Description: ").unwrap(), "cafe");
        assert_eq!(output(&mut p).matches("Description: ").count(), 2);
    }

    #[test]
    fn test_read_line_keeps_free_text() {
        let mut p = prompter("  a description, with punctuation!\n");
        assert_eq!(
            p.read_line("Description: ").unwrap(),
            "  a description, with punctuation!"
        );
    }
}
