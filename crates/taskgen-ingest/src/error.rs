//! Error types for task ingestion.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a task source.
///
/// Every variant is fatal for the run. Short CSV rows are not errors; they
/// are skipped and reported through [`crate::CsvIngest::skipped_rows`].
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file does not exist.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Source file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input (bad quoting, invalid UTF-8, ...).
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A numeric CSV field could not be parsed.
    #[error("invalid {field} value '{value}' in {path} at line {line}")]
    InvalidValue {
        field: &'static str,
        value: String,
        path: PathBuf,
        line: u64,
    },

    /// The YAML document is malformed or a record misses a required key.
    #[error("failed to parse YAML {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl IngestError {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
