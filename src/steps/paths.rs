//! Path-rename pass.
//!
//! Finds every file or directory whose name matches `FROM` and renames it,
//! substituting `TO` into the name. Renames run deepest-first and each one
//! touches only its own final component, so renaming a directory never
//! invalidates a pending rename inside it:
//!
//! ```text
//! git mv models/discussions/discussion.php models/discussions/conversation.php
//! git mv models/discussions models/conversations
//! ```
//!
//! A failed move is printed inline and the pass moves on.

use crate::config::Config;
use crate::error::Result;
use crate::fs::Mover;
use crate::pattern::Pattern;
use crate::report::{PassKind, PassReport};
use crate::scan;
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One planned rename, relative to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl RenamePlan {
    fn depth(&self) -> usize {
        self.from.components().count()
    }
}

/// Turns candidates into renames, deepest paths first.
///
/// Candidates whose name would not change, or would become empty, are dropped.
/// Names that are not valid UTF-8 are never substituted into; they are logged
/// and counted in the second element of the result.
pub fn plan_renames(
    candidates: Vec<PathBuf>,
    pattern: &Pattern,
    to: &str,
) -> (Vec<RenamePlan>, usize) {
    let mut plans = Vec::new();
    let mut skipped = 0;

    for from in candidates {
        let Some(os_name) = from.file_name() else {
            continue;
        };
        let Some(name) = os_name.to_str() else {
            log::warn!("Name is not valid UTF-8, skipping: {}", from.display());
            skipped += 1;
            continue;
        };

        let new_name = pattern.replace_all(name, to);
        if new_name == name {
            log::debug!("Name unchanged, skipping: {}", from.display());
            continue;
        }
        if new_name.is_empty() {
            log::warn!("Rename would leave an empty name, skipping: {}", from.display());
            continue;
        }

        let to = match from.parent() {
            Some(parent) => parent.join(&*new_name),
            None => PathBuf::from(new_name.into_owned()),
        };
        plans.push(RenamePlan { from, to });
    }

    plans.sort_by(|a, b| b.depth().cmp(&a.depth()).then_with(|| a.from.cmp(&b.from)));
    (plans, skipped)
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn escape_spaces(text: &str) -> String {
    text.replace(' ', "\\ ")
}

fn join_display(parent: Option<&Path>, name: &str) -> String {
    match parent.map(display_path) {
        Some(parent) if !parent.is_empty() => format!("{}/{}", parent, name),
        _ => name.to_string(),
    }
}

/// The preview line for one rename, with the changed text in bold.
///
/// For display only; the mover gets the plain paths.
pub fn preview_line(command: &str, plan: &RenamePlan, pattern: &Pattern, to: &str) -> String {
    let parent = plan.from.parent();
    let name = plan.from.file_name().and_then(|n| n.to_str()).unwrap_or_default();

    let before = join_display(parent, &pattern.highlight_matches(name));
    let after = join_display(parent, &pattern.highlight_replacement(name, to));

    format!(
        "{} {} {}",
        command,
        escape_spaces(&before),
        escape_spaces(&after)
    )
}

/// Runs the path-rename pass.
///
/// Moves happen only when `for_real` is set. Move failures and skipped names
/// are counted in the returned report; only scan errors and output errors end
/// the pass.
pub fn rename_paths<W: Write>(
    config: &Config,
    pattern: &Pattern,
    to: &str,
    for_real: bool,
    mover: &mut dyn Mover,
    out: &mut W,
) -> Result<PassReport> {
    writeln!(out, "FILES TO RENAME")?;

    let candidates = scan::rename_candidates(config, pattern)?;
    let (plans, skipped) = plan_renames(candidates, pattern, to);

    let mut report = PassReport::new(PassKind::Paths, for_real);
    report.planned = plans.len();
    report.skipped = skipped;

    for plan in &plans {
        writeln!(out, "{}", preview_line(mover.command(), plan, pattern, to))?;

        if !for_real {
            continue;
        }

        match mover.move_path(&plan.from, &plan.to) {
            Ok(output) => {
                if !output.trim().is_empty() {
                    writeln!(out, "{}", output.trim_end())?;
                }
                report.applied += 1;
            }
            Err(e) => {
                log::debug!("Move failed: {}", e);
                writeln!(out, "{} {}", "error:".red().bold(), e)?;
                report.failed += 1;
            }
        }
    }

    writeln!(out)?;
    report.log_summary();

    Ok(report)
}
