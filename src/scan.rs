//! Candidate-set construction.
//!
//! Both passes start the same way: walk the tree under the configured root,
//! keep the entries a predicate accepts, then subtract everything an ignore
//! glob matches. Ignore globs are evaluated once, against the tree as it was
//! when the walk ran.
//!
//! Hidden entries (leading `.`) are skipped, as a shell `**/*` glob would.
//! Nothing else is filtered during the walk; `.gitignore` files play no part.

use crate::config::Config;
use crate::error::{Result, SplaceError};
use crate::pattern::Pattern;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A walked path, relative to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_file: bool,
}

impl Entry {
    /// The final component, for matching only.
    ///
    /// A name that is not valid UTF-8 is viewed lossily here so it can still
    /// be selected; the rename step refuses to substitute into it.
    fn name(&self) -> Option<Cow<'_, str>> {
        self.path.file_name().map(|n| n.to_string_lossy())
    }
}

/// Compiled ignore globs.
///
/// Globs are matched against root-relative paths. `*` stays within one
/// component and `**` spans directories, so `plugins/**/*` covers everything
/// below `plugins/` but not `plugins` itself.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    set: GlobSet,
}

impl IgnoreSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = GlobBuilder::new(pattern.as_ref())
                .literal_separator(true)
                .build()?;
            builder.add(glob);
        }
        Ok(Self {
            set: builder.build()?,
        })
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        self.set.is_match(path)
    }

    /// Removes ignored paths, keeping the order of the rest.
    pub fn subtract(&self, candidates: Vec<PathBuf>) -> Vec<PathBuf> {
        candidates
            .into_iter()
            .filter(|path| {
                let ignored = self.is_ignored(path);
                if ignored {
                    log::debug!("Ignoring: {}", path.display());
                }
                !ignored
            })
            .collect()
    }
}

/// Walks `root` recursively, in file-name order within each directory.
///
/// Unreadable entries are logged and skipped.
pub fn walk(root: &Path) -> Result<Vec<Entry>> {
    if !root.is_dir() {
        return Err(SplaceError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Root directory does not exist: {}", root.display()),
        )));
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut entries = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        let path = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        let file_type = entry.file_type();

        entries.push(Entry {
            path,
            is_dir: file_type.is_some_and(|t| t.is_dir()),
            is_file: file_type.is_some_and(|t| t.is_file()),
        });
    }

    Ok(entries)
}

/// Paths (files and directories) whose own name matches `pattern`.
pub fn rename_candidates(config: &Config, pattern: &Pattern) -> Result<Vec<PathBuf>> {
    let ignore = IgnoreSet::new(&config.rename_ignore)?;

    let candidates = walk(&config.root)?
        .into_iter()
        .filter(|entry| entry.name().is_some_and(|name| pattern.is_match(&name)))
        .map(|entry| entry.path)
        .collect();

    Ok(ignore.subtract(candidates))
}

/// Regular files whose extension is on the allowlist.
pub fn content_candidates(config: &Config) -> Result<Vec<PathBuf>> {
    let ignore = IgnoreSet::new(&config.contents_ignore)?;

    let candidates = walk(&config.root)?
        .into_iter()
        .filter(|entry| {
            entry.is_file
                && entry
                    .path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| config.has_extension(ext))
        })
        .map(|entry| entry.path)
        .collect();

    Ok(ignore.subtract(candidates))
}
