//! Content-replace pass.
//!
//! Searches allowlisted source files for `FROM`, prints each matching file
//! with its matching lines, and on a real run rewrites the file with every
//! match replaced. The preview always shows the file as it was before the
//! rewrite.
//!
//! An unreadable or unwritable file ends the run.

use crate::config::Config;
use crate::error::{Result, SplaceError};
use crate::pattern::Pattern;
use crate::report::{PassKind, PassReport};
use crate::scan;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// A matching line, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'t> {
    pub number: usize,
    pub text: &'t str,
}

/// Every line of `text` that matches `pattern`, in file order.
pub fn matching_lines<'t>(text: &'t str, pattern: &Pattern) -> Vec<LineMatch<'t>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(idx, line)| LineMatch {
            number: idx + 1,
            text: line,
        })
        .collect()
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        log::error!("Failed to read {}: {}", path.display(), e);
        SplaceError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| {
        SplaceError::Io(io::Error::new(
            e.kind(),
            format!("Failed to write {}: {}", path.display(), e),
        ))
    })
}

/// Runs the content-replace pass.
pub fn replace_contents<W: Write>(
    config: &Config,
    pattern: &Pattern,
    to: &str,
    for_real: bool,
    out: &mut W,
) -> Result<PassReport> {
    writeln!(out, "FILES TO SEARCH CONTENT")?;

    let candidates = scan::content_candidates(config)?;
    let mut report = PassReport::new(PassKind::Contents, for_real);

    for rel in &candidates {
        let path = config.root.join(rel);
        let text = read_file(&path)?;

        if !pattern.is_match(&text) {
            continue;
        }

        report.planned += 1;

        let header = rel.to_string_lossy().replace('\\', "/");
        writeln!(out, "{}", header.reversed())?;
        for line in matching_lines(&text, pattern) {
            writeln!(
                out,
                "   {}: {}",
                line.number,
                pattern.highlight_matches(line.text)
            )?;
        }

        if for_real {
            let replaced = pattern.replace_all(&text, to);
            if replaced != text {
                write_file(&path, &replaced)?;
                log::info!("Updated: {}", rel.display());
                report.applied += 1;
            } else {
                log::debug!("Content unchanged, skipping: {}", rel.display());
            }
        }
    }

    writeln!(out)?;
    report.log_summary();

    Ok(report)
}
