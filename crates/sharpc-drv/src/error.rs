//! Driver-level error type: thin wrapper over `LexError` and I/O/walk
//! failures, one enum variant per failure source rather than `anyhow`
//! everywhere — `anyhow` is reserved for the CLI boundary in `main.rs`.

use std::path::PathBuf;

use sharpc_lex::LexError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrvError {
    #[error("{0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("{0}: {1}")]
    Lex(PathBuf, #[source] LexError),

    #[error("{0}: not a .cs source file")]
    NotASourceFile(PathBuf),

    #[error("no .cs source files found among the given inputs")]
    NoMatchingFiles,

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),
}
