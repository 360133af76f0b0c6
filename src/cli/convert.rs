use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::core::record::Record;
use crate::pansn::encoder::{EncodeError, Encoder, EncoderOption};
use crate::parsing::fasta::{DecodeError, Decoder};
use crate::utils::validation::{check_input_file, is_gzipped, FileAccessError};

/// Failures of a conversion run, each tied to its own exit status.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Access(#[from] FileAccessError),

    #[error("error opening file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error decoding file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("error creating encoder: {0}")]
    Encoder(#[source] EncodeError),

    #[error("error encoding sequences: {0}")]
    Encode(#[source] EncodeError),
}

impl RunError {
    /// Process exit status for this failure.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Access(FileAccessError::IsDirectory(_)) => 1,
            RunError::Access(FileAccessError::NotFound(_)) => 2,
            RunError::Access(FileAccessError::PermissionDenied(_)) => 3,
            RunError::Access(FileAccessError::NotRegularFile(_) | FileAccessError::Other { .. }) => 4,
            RunError::Open { .. } => 5,
            RunError::Decode { .. } => 6,
            RunError::Encoder(_) => 7,
            RunError::Encode(_) => 8,
        }
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>, RunError> {
    if is_stdin(path) {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).map_err(|source| RunError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    if is_gzipped(path) {
        debug!("Decompressing {}", path.display());
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, RunError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| RunError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Decode the whole input, then rename and write every record.
///
/// # Errors
///
/// Returns a `RunError` describing the first step that failed.
pub fn run(input: &Path, cli: &Cli) -> Result<(), RunError> {
    if !is_stdin(input) {
        check_input_file(input)?;
    }

    let reader = open_input(input)?;
    let mut records: Vec<Record> = Vec::new();
    Decoder::new(reader)
        .decode(&mut records)
        .map_err(|source| RunError::Decode {
            path: input.to_path_buf(),
            source,
        })?;

    let bases: usize = records.iter().map(|r| r.sequence.len()).sum();
    info!(
        "Read {} records ({} bases) from {}",
        records.len(),
        bases,
        input.display()
    );

    let target = open_output(cli.output.as_deref())?;
    let options = [
        EncoderOption::Delimiter(cli.delimiter.clone()),
        EncoderOption::HaplotypeId(cli.haplotype_id.clone()),
        EncoderOption::SampleName(cli.sample.clone()),
    ];
    let mut encoder = Encoder::new(target, options).map_err(RunError::Encoder)?;
    encoder.encode(&records).map_err(RunError::Encode)?;

    info!(
        "Wrote {} records with prefix '{}'",
        records.len(),
        encoder.config().prefix()
    );
    Ok(())
}
