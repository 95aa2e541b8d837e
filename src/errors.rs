//! Typed error definitions for glob_move.
//! Public functions return `anyhow::Result`; callers recover these variants with
//! `downcast_ref::<GlobMoveError>()` for logs, exit codes and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlobMoveError {
    #[error("Source pattern matched nothing: {pattern}")]
    NotFound { pattern: String },

    #[error("Cannot move directory '{}' onto existing file '{}'", .source_path.display(), .destination.display())]
    NotADirectory {
        source_path: PathBuf,
        destination: PathBuf,
    },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    Match {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed while expanding '{pattern}': {source}")]
    Traversal {
        pattern: String,
        #[source]
        source: glob::GlobError,
    },

    #[error("Matched path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Failed to create directory '{}': {source}", .path.display())]
    DirEnsure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GlobMoveError {
    /// Stable numeric code per variant, used as a structured log field.
    pub fn code(&self) -> u8 {
        match self {
            GlobMoveError::NotFound { .. } => 2,
            GlobMoveError::NotADirectory { .. } => 3,
            GlobMoveError::Match { .. } => 4,
            GlobMoveError::Traversal { .. } => 5,
            GlobMoveError::NonUtf8Path(_) => 6,
            GlobMoveError::DirEnsure { .. } => 7,
        }
    }

    /// Short snake_case label for the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            GlobMoveError::NotFound { .. } => "not_found",
            GlobMoveError::NotADirectory { .. } => "not_a_directory",
            GlobMoveError::Match { .. } => "match",
            GlobMoveError::Traversal { .. } => "traversal",
            GlobMoveError::NonUtf8Path(_) => "non_utf8_path",
            GlobMoveError::DirEnsure { .. } => "dir_ensure",
        }
    }
}
