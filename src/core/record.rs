use chrono::Local;

use crate::core::sequence::EmbeddedSequence;

/// Format used for the generation timestamp in FASTA headers
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single FASTA record ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Sequence identifier; also the output file stem
    pub id: String,

    /// Free-text description following the id in the header
    pub description: String,

    /// Generation time, already formatted with [`TIMESTAMP_FORMAT`]
    pub timestamp: String,

    pub body: EmbeddedSequence,
}

impl FastaRecord {
    /// Create a record stamped with the current local time
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        body: EmbeddedSequence,
    ) -> Self {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(id, description, timestamp, body)
    }

    /// Create a record with an explicit, pre-formatted timestamp
    pub fn with_timestamp(
        id: impl Into<String>,
        description: impl Into<String>,
        timestamp: impl Into<String>,
        body: EmbeddedSequence,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            timestamp: timestamp.into(),
            body,
        }
    }

    /// The header line, without the trailing newline
    #[must_use]
    pub fn header(&self) -> String {
        format!(
            ">{} {} (generated: {})",
            self.id, self.description, self.timestamp
        )
    }

    /// File name this record is written to
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.fasta", self.id)
    }
}
