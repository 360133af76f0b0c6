//! PanSN encoder.
//!
//! Every record becomes one two-line block:
//!
//! ```text
//! >{sample}{delimiter}{haplotype}{delimiter}{header}
//! {sequence}
//! ```
//!
//! Fields are not escaped. If the sample, haplotype or header already contains the
//! delimiter the resulting name cannot be split back unambiguously.

use std::io::Write;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::record::Record;

pub const DEFAULT_DELIMITER: &str = "#";
pub const DEFAULT_HAPLOTYPE_ID: &str = "1";
pub const DEFAULT_SAMPLE_NAME: &str = "Sample1";

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("error writing to target: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid encoder option: {0}")]
    InvalidOption(String),
}

/// Naming settings used to build PanSN headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    pub delimiter: String,
    pub haplotype_id: String,
    pub sample_name: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            haplotype_id: DEFAULT_HAPLOTYPE_ID.to_string(),
            sample_name: DEFAULT_SAMPLE_NAME.to_string(),
        }
    }
}

impl EncoderConfig {
    /// Text placed in front of every contig name, `{sample}{delim}{haplotype}{delim}`.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!(
            "{sample}{delim}{haplotype}{delim}",
            sample = self.sample_name,
            haplotype = self.haplotype_id,
            delim = self.delimiter,
        )
    }
}

/// A single override applied on top of [`EncoderConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncoderOption {
    Delimiter(String),
    HaplotypeId(String),
    SampleName(String),
    /// Always rejected; exercises the failure path of [`Encoder::new`].
    #[cfg(test)]
    Invalid(String),
}

impl EncoderOption {
    /// Apply this option to `config`.
    ///
    /// # Errors
    ///
    /// No current option rejects its value; the `Result` lets future options
    /// validate before an encoder is created.
    pub fn apply(&self, config: &mut EncoderConfig) -> Result<(), EncodeError> {
        match self {
            EncoderOption::Delimiter(d) => config.delimiter.clone_from(d),
            EncoderOption::HaplotypeId(h) => config.haplotype_id.clone_from(h),
            EncoderOption::SampleName(s) => config.sample_name.clone_from(s),
            #[cfg(test)]
            EncoderOption::Invalid(reason) => {
                return Err(EncodeError::InvalidOption(reason.clone()));
            }
        }
        Ok(())
    }
}

/// Input accepted by [`Encoder::encode`].
#[derive(Debug, Clone, Copy)]
pub enum EncodeInput<'a> {
    Record(&'a Record),
    Records(&'a [Record]),
}

impl<'a> From<&'a Record> for EncodeInput<'a> {
    fn from(record: &'a Record) -> Self {
        EncodeInput::Record(record)
    }
}

impl<'a> From<&'a [Record]> for EncodeInput<'a> {
    fn from(records: &'a [Record]) -> Self {
        EncodeInput::Records(records)
    }
}

impl<'a> From<&'a Vec<Record>> for EncodeInput<'a> {
    fn from(records: &'a Vec<Record>) -> Self {
        EncodeInput::Records(records.as_slice())
    }
}

/// Writes records in PanSN form to a caller-owned writer, flushing after each one.
pub struct Encoder<W: Write> {
    target: W,
    config: EncoderConfig,
}

impl<W: Write> Encoder<W> {
    /// Build an encoder, applying `options` in order over the defaults.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an option; no encoder is created.
    pub fn new<I>(target: W, options: I) -> Result<Self, EncodeError>
    where
        I: IntoIterator<Item = EncoderOption>,
    {
        let mut config = EncoderConfig::default();
        for option in options {
            option.apply(&mut config)?;
        }
        Ok(Self::with_config(target, config))
    }

    /// Build an encoder from a ready configuration.
    pub fn with_config(target: W, config: EncoderConfig) -> Self {
        if !config.delimiter.is_empty()
            && (config.sample_name.contains(&config.delimiter)
                || config.haplotype_id.contains(&config.delimiter))
        {
            warn!(
                "Sample name '{}' or haplotype '{}' contains the delimiter '{}'; PanSN names will be ambiguous",
                config.sample_name, config.haplotype_id, config.delimiter
            );
        }
        Self { target, config }
    }

    #[must_use]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode either a single record or a slice of records.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::Io` on the first failed write or flush.
    pub fn encode<'a>(&mut self, input: impl Into<EncodeInput<'a>>) -> Result<(), EncodeError> {
        match input.into() {
            EncodeInput::Record(record) => self.encode_record(record),
            EncodeInput::Records(records) => self.encode_records(records),
        }
    }

    /// Write one record and flush.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::Io` if writing or flushing the target fails.
    pub fn encode_record(&mut self, record: &Record) -> Result<(), EncodeError> {
        let delim = self.config.delimiter.as_bytes();
        if !delim.is_empty() && record.header.windows(delim.len()).any(|w| w == delim) {
            warn!(
                "Header '{}' contains the delimiter '{}'",
                record.header_lossy(),
                self.config.delimiter
            );
        }

        let prefix = self.config.prefix();
        let mut block =
            Vec::with_capacity(prefix.len() + record.header.len() + record.sequence.len() + 3);
        block.push(b'>');
        block.extend_from_slice(prefix.as_bytes());
        block.extend_from_slice(&record.header);
        block.push(b'\n');
        block.extend_from_slice(&record.sequence);
        block.push(b'\n');
        self.target.write_all(&block)?;
        self.target.flush()?;
        Ok(())
    }

    /// Write records in order, stopping at the first failure.
    ///
    /// Records written before a failure stay in the target.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::Io` from the first record that cannot be written.
    pub fn encode_records(&mut self, records: &[Record]) -> Result<(), EncodeError> {
        for record in records {
            self.encode_record(record)?;
        }
        debug!("Encoded {} records", records.len());
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.target
    }
}
