//! FASTA writer for generated records.
//!
//! Output layout:
//!
//! ```text
//! ><id> <description> (generated: <YYYY-MM-DD HH:MM:SS>)
//! <at most line_width characters>
//! <at most line_width characters>
//! ```
//!
//! Line widths are counted in characters, not bytes, so a multi-byte letter in
//! an embedded name never gets split across lines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::record::FastaRecord;

/// Default number of characters per sequence line
pub const DEFAULT_LINE_WIDTH: NonZeroUsize = match NonZeroUsize::new(80) {
    Some(width) => width,
    None => unreachable!(),
};

#[derive(Error, Debug)]
pub enum FastaWriteError {
    #[error("Failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Split `body` into consecutive chunks of at most `width` characters.
///
/// Only the last chunk may be shorter; an empty body yields no chunks.
#[must_use]
pub fn wrap_lines(body: &str, width: NonZeroUsize) -> Vec<&str> {
    let width = width.get();
    let mut lines = Vec::with_capacity(body.len() / width + 1);
    let mut start = 0;

    for (count, (offset, _)) in body.char_indices().enumerate() {
        if count > 0 && count % width == 0 {
            lines.push(&body[start..offset]);
            start = offset;
        }
    }
    if start < body.len() {
        lines.push(&body[start..]);
    }

    lines
}

/// Write `record` in FASTA format to any writer
///
/// # Errors
///
/// Returns any I/O error raised by `writer`.
pub fn write_fasta<W: Write>(
    record: &FastaRecord,
    writer: &mut W,
    line_width: NonZeroUsize,
) -> std::io::Result<()> {
    writeln!(writer, "{}", record.header())?;
    for line in wrap_lines(record.body.as_str(), line_width) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Where `record` is written inside `dir`; the current directory adds no prefix
fn output_path(record: &FastaRecord, dir: &Path) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::from(record.file_name())
    } else {
        dir.join(record.file_name())
    }
}

/// Create or overwrite `<dir>/<id>.fasta` with `record` and return its path.
///
/// # Errors
///
/// Returns `FastaWriteError::Io` if the file cannot be created, written or
/// flushed.
pub fn write_fasta_file(
    record: &FastaRecord,
    dir: &Path,
    line_width: NonZeroUsize,
) -> Result<PathBuf, FastaWriteError> {
    let path = output_path(record, dir);
    let io_err = |source| FastaWriteError::Io {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_fasta(record, &mut writer, line_width).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    debug!(path = %path.display(), "Wrote FASTA record");
    Ok(path)
}
