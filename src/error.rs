//! Error types for splace.
//!
//! All operations return `Result<T>` which aliases `Result<T, SplaceError>`.
//! Rename failures have their own [`MoveError`](crate::fs::MoveError) so the
//! path pass can report them inline and keep going.

use thiserror::Error;

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum SplaceError {
    /// `FROM` could not be compiled as a regular expression.
    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    /// An ignore glob could not be compiled.
    #[error("Invalid ignore glob: {0}")]
    Glob(#[from] globset::Error),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for splace operations.
pub type Result<T> = std::result::Result<T, SplaceError>;
