//! Tracked and untracked path moves.
//!
//! ## Implementations
//!
//! - [`GitMover`]: runs `git mv`, so history follows the file
//! - [`FsMover`]: plain `rename(2)` for trees outside version control
//!
//! Paths handed to a mover are relative to its root. A failed move is
//! returned as a [`MoveError`] carrying whatever the underlying tool said;
//! the caller decides whether that ends the run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Errors from a single move.
#[derive(Debug, Error)]
pub enum MoveError {
    /// Source path is gone, usually because an earlier move took it along.
    #[error("Source does not exist: {}", .0.display())]
    SourceMissing(PathBuf),

    /// Destination is already taken.
    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    /// Destination's parent directory does not exist.
    #[error("Destination directory does not exist: {}", .0.display())]
    ParentMissing(PathBuf),

    /// The external command ran and reported failure.
    #[error("{command} failed: {output}")]
    Failed { command: String, output: String },

    /// The external command could not be started.
    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The rename syscall failed.
    #[error("Failed to move {} → {}: {}", .from.display(), .to.display(), .source)]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Moves one path to another.
pub trait Mover {
    /// Command shown in preview lines, e.g. `git mv`.
    fn command(&self) -> &str;

    /// Moves `from` to `to` and returns the tool's own output, if any.
    fn move_path(&mut self, from: &Path, to: &Path) -> Result<String, MoveError>;
}

/// Renames through `git mv` so the move is recorded in the index.
#[derive(Debug, Clone)]
pub struct GitMover {
    root: PathBuf,
}

impl GitMover {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Mover for GitMover {
    fn command(&self) -> &str {
        "git mv"
    }

    fn move_path(&mut self, from: &Path, to: &Path) -> Result<String, MoveError> {
        log::debug!("git mv {} {}", from.display(), to.display());

        let output = Command::new("git")
            .arg("mv")
            .arg(from)
            .arg(to)
            .current_dir(&self.root)
            .output()
            .map_err(|source| MoveError::Spawn {
                command: self.command().to_string(),
                source,
            })?;

        if output.status.success() {
            log::info!("Moved: {} → {}", from.display(), to.display());
            Ok(combined_output(&output.stdout, &output.stderr))
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let text = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            Err(MoveError::Failed {
                command: self.command().to_string(),
                output: text,
            })
        }
    }
}

/// Non-empty stdout followed by non-empty stderr, one per line.
///
/// `git mv` can succeed and still warn on stderr.
fn combined_output(stdout: &[u8], stderr: &[u8]) -> String {
    [stdout, stderr]
        .iter()
        .map(|bytes| String::from_utf8_lossy(bytes))
        .map(|text| text.trim_end().to_string())
        .filter(|text| !text.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renames with `std::fs::rename`.
///
/// Refuses to overwrite, matching what `git mv` does without `-f`.
#[derive(Debug, Clone)]
pub struct FsMover {
    root: PathBuf,
}

impl FsMover {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Mover for FsMover {
    fn command(&self) -> &str {
        "mv"
    }

    fn move_path(&mut self, from: &Path, to: &Path) -> Result<String, MoveError> {
        let src = self.root.join(from);
        let dst = self.root.join(to);

        if src.symlink_metadata().is_err() {
            return Err(MoveError::SourceMissing(from.to_path_buf()));
        }

        if dst.symlink_metadata().is_ok() {
            return Err(MoveError::DestinationExists(to.to_path_buf()));
        }

        if let Some(parent) = dst.parent()
            && !parent.is_dir()
        {
            return Err(MoveError::ParentMissing(
                to.parent().unwrap_or(to).to_path_buf(),
            ));
        }

        fs::rename(&src, &dst).map_err(|source| MoveError::Io {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })?;

        log::info!("Moved: {} → {}", from.display(), to.display());
        Ok(String::new())
    }
}
