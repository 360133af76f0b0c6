/// A single FASTA record: the header line (without `>`) and its joined payload.
///
/// Both fields are raw bytes; no encoding is assumed for headers or sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Bytes following the `>` marker, line terminator removed
    pub header: Vec<u8>,

    /// All payload lines up to the next header, concatenated without separators
    pub sequence: Vec<u8>,
}

impl Record {
    /// Create a record from a header and an already-joined sequence.
    pub fn new(header: impl Into<Vec<u8>>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// Create a record with an empty sequence, ready to accumulate payload lines.
    pub fn with_header(header: impl Into<Vec<u8>>) -> Self {
        Self::new(header, Vec::new())
    }

    /// Append one payload line (terminator already stripped).
    pub fn push_line(&mut self, line: &[u8]) {
        self.sequence.extend_from_slice(line);
    }

    /// Header for log messages, with invalid UTF-8 replaced.
    #[must_use]
    pub fn header_lossy(&self) -> String {
        String::from_utf8_lossy(&self.header).to_string()
    }
}
