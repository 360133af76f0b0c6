//! Line-oriented FASTA decoder.
//!
//! A line starting with `>` opens a new record; every other line, including an
//! empty one, is appended verbatim to the sequence of the record in progress.
//! Lines are handled as raw bytes: no alphabet, encoding or line-length rules are
//! enforced. A trailing `\n`, and a `\r` just before it, are removed from each line,
//! including a final line with no `\n`.
//!
//! A record is only flushed when the next header arrives if its own header is
//! non-empty. The record in progress at end of input is always flushed, so empty
//! input yields a single empty record, and a `>` line with nothing after it is lost
//! when another header follows it.

use std::io::BufRead;

use thiserror::Error;
use tracing::debug;

use crate::core::record::Record;

/// Marker byte that starts a header line
pub const HEADER_MARKER: u8 = b'>';

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("error reading from source at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Remove one `\n` and then one `\r` from the end of `line`.
fn strip_terminator(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
}

/// FASTA decoder over a caller-owned buffered reader.
pub struct Decoder<R> {
    source: R,
}

impl<R: BufRead> Decoder<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Read the source to the end, appending every decoded record to `out`.
    ///
    /// Existing entries in `out` are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::Read` if the source fails while a line is read.
    /// Records decoded before the failure are not appended.
    pub fn decode(&mut self, out: &mut Vec<Record>) -> Result<(), DecodeError> {
        let mut decoded = Vec::new();
        let mut current = Record::default();
        let mut line = Vec::new();
        let mut line_no = 0;

        loop {
            line.clear();
            let read = self
                .source
                .read_until(b'\n', &mut line)
                .map_err(|source| DecodeError::Read {
                    line: line_no + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;
            strip_terminator(&mut line);

            if line.first() == Some(&HEADER_MARKER) {
                let previous = std::mem::replace(&mut current, Record::with_header(&line[1..]));
                if !previous.header.is_empty() {
                    decoded.push(previous);
                } else if !previous.sequence.is_empty() {
                    debug!(
                        "Dropping {} bytes of payload with no header before line {}",
                        previous.sequence.len(),
                        line_no
                    );
                }
            } else {
                current.push_line(&line);
            }
        }

        decoded.push(current);
        debug!("Decoded {} FASTA records from {} lines", decoded.len(), line_no);
        out.append(&mut decoded);
        Ok(())
    }

    /// Give back the underlying reader.
    pub fn into_inner(self) -> R {
        self.source
    }
}

/// Decode FASTA text that is already in memory.
///
/// # Errors
///
/// Never fails in practice; the signature mirrors [`Decoder::decode`].
pub fn decode_str(text: &str) -> Result<Vec<Record>, DecodeError> {
    let mut records = Vec::new();
    Decoder::new(text.as_bytes()).decode(&mut records)?;
    Ok(records)
}
