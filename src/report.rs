//! Per-pass counters.
//!
//! The passes return a [`PassReport`] and log its [`summary`](PassReport::summary)
//! at `info` level; nothing here is written to the pass output.

/// Which pass produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    Paths,
    Contents,
}

/// Statistics about one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassReport {
    pub kind: PassKind,
    pub for_real: bool,
    /// Paths (or files) the pass would change.
    pub planned: usize,
    /// Changes actually made. Always zero on a dry run.
    pub applied: usize,
    /// Moves that failed and were skipped.
    pub failed: usize,
    /// Candidates left alone because their name is not valid UTF-8.
    pub skipped: usize,
}

impl PassReport {
    pub fn new(kind: PassKind, for_real: bool) -> Self {
        Self {
            kind,
            for_real,
            planned: 0,
            applied: 0,
            failed: 0,
            skipped: 0,
        }
    }

    fn noun(&self, count: usize) -> &'static str {
        match (self.kind, count == 1) {
            (PassKind::Paths, true) => "path",
            (PassKind::Paths, false) => "paths",
            (PassKind::Contents, true) => "file",
            (PassKind::Contents, false) => "files",
        }
    }

    /// One-line description of the counters, for the log.
    pub fn summary(&self) -> String {
        let verb = match self.kind {
            PassKind::Paths => "renamed",
            PassKind::Contents => "modified",
        };

        let mut line = if self.for_real {
            format!("{} of {} {} {}", self.applied, self.planned, self.noun(self.planned), verb)
        } else {
            format!("{} {} would be {} (dry run)", self.planned, self.noun(self.planned), verb)
        };

        if self.failed > 0 {
            line.push_str(&format!(", {} failed", self.failed));
        }
        if self.skipped > 0 {
            line.push_str(&format!(", {} skipped", self.skipped));
        }
        line
    }

    /// Logs [`summary`](Self::summary) at `info` level.
    pub fn log_summary(&self) {
        log::info!("{}", self.summary());
    }
}
