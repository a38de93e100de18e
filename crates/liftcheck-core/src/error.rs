//! Error types for catalog loading and console prompting.
//!
//! Invalid answers to a prompt are not errors: the console re-asks until it
//! gets one it understands. Only conditions that end the run live here.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the test catalog. Aborts the run before any prompt.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file is missing or unreadable.
    #[error("failed to read catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row lacks one of the catalog columns.
    #[error("catalog {} is missing required column {column}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// The file is not valid CSV or a row does not fit the header.
    #[error("failed to parse catalog {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Failure while waiting for an answer on the console.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Standard input hit end-of-file before the prompt was answered.
    #[error("input closed while waiting for an answer to {prompt:?}")]
    InputClosed { prompt: String },

    /// Reading from or writing to the console failed.
    #[error("console I/O error")]
    Io(#[from] std::io::Error),
}
