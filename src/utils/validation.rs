//! Input path checks run before any decoding starts.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Reasons an input path cannot be used, one per exit status.
#[derive(Debug, thiserror::Error)]
pub enum FileAccessError {
    #[error("file {0} is a directory")]
    IsDirectory(String),
    #[error("file {0} does not exist")]
    NotFound(String),
    #[error("no permission to access file {0}")]
    PermissionDenied(String),
    #[error("file {0} is not a regular file")]
    NotRegularFile(String),
    #[error("error accessing file {path}: {source}")]
    Other {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn classify(path: &Path, err: std::io::Error) -> FileAccessError {
    let display = path.display().to_string();
    match err.kind() {
        ErrorKind::NotFound => FileAccessError::NotFound(display),
        ErrorKind::PermissionDenied => FileAccessError::PermissionDenied(display),
        _ => FileAccessError::Other {
            path: display,
            source: err,
        },
    }
}

/// Check that `path` exists, is a regular file, and can be opened for reading.
///
/// # Errors
///
/// Returns the `FileAccessError` variant matching the first failed check.
pub fn check_input_file(path: &Path) -> Result<(), FileAccessError> {
    let metadata = std::fs::metadata(path).map_err(|e| classify(path, e))?;

    if metadata.is_dir() {
        return Err(FileAccessError::IsDirectory(path.display().to_string()));
    }
    if !metadata.is_file() {
        return Err(FileAccessError::NotRegularFile(path.display().to_string()));
    }

    File::open(path).map_err(|e| classify(path, e))?;
    Ok(())
}

/// Check if the path names a gzip or bgzip compressed file
#[must_use]
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}
