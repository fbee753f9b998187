//! Per-run configuration passed into each pass.
//!
//! Defaults suit a CakePHP-style application tree; the CLI can replace the
//! extension allowlist and append ignore globs, and tests build a `Config`
//! directly.

use std::path::PathBuf;

/// Extensions whose contents are searched by the contents pass.
pub const DEFAULT_EXTENSIONS: &[&str] = &["php", "ctp", "css", "js", "jst"];

/// Paths never renamed by the paths pass.
pub const DEFAULT_RENAME_IGNORE: &[&str] = &["config/migrations/**/*", "plugins/**/*", "tmp/**/*"];

/// Paths never searched by the contents pass.
pub const DEFAULT_CONTENTS_IGNORE: &[&str] = &[
    "config/migrations/**/*",
    "webroot/cache_css/**/*",
    "webroot/cache_js/**/*",
    "plugins/**/*",
    "tmp/**/*",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the tree is walked from. Candidate paths are relative to it.
    pub root: PathBuf,
    /// File extensions (without the dot) searched by the contents pass.
    pub extensions: Vec<String>,
    /// Globs subtracted from path-rename candidates.
    pub rename_ignore: Vec<String>,
    /// Globs subtracted from content-search candidates.
    pub contents_ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: to_owned(DEFAULT_EXTENSIONS),
            rename_ignore: to_owned(DEFAULT_RENAME_IGNORE),
            contents_ignore: to_owned(DEFAULT_CONTENTS_IGNORE),
        }
    }
}

impl Config {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Replaces the extension allowlist. Leading dots are dropped.
    pub fn set_extensions<I, S>(&mut self, extensions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
    }

    /// Appends globs to both ignore lists.
    pub fn add_ignores<I, S>(&mut self, globs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for glob in globs {
            let glob = glob.as_ref().to_string();
            self.rename_ignore.push(glob.clone());
            self.contents_ignore.push(glob);
        }
    }

    pub fn has_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
