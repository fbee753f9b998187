//! The compiled `FROM` argument.
//!
//! `FROM` is either a literal substring or a regular expression. Which one is
//! an explicit choice ([`MatchMode`]); both passes go through the same
//! [`Pattern`] so they agree on what a match is.
//!
//! Regex patterns are compiled in multi-line CRLF mode, so `^` and `$` anchor
//! at line boundaries, `\n` or `\r\n`, whether a whole file or a single line
//! is being matched.
//! Replacement text may refer to groups as `$1` or `${name}`.

use crate::error::Result;
use colored::Colorize;
use regex::{Captures, Regex, RegexBuilder};
use std::borrow::Cow;
use std::fmt;

/// How `FROM` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Literal,
    Regex,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Literal => f.write_str("literal"),
            MatchMode::Regex => f.write_str("regex"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(String),
    Regex(Regex),
}

impl Pattern {
    pub fn new(from: &str, mode: MatchMode) -> Result<Self> {
        match mode {
            MatchMode::Literal => Ok(Pattern::Literal(from.to_string())),
            MatchMode::Regex => {
                let re = RegexBuilder::new(from)
                    .multi_line(true)
                    .crlf(true)
                    .build()?;
                Ok(Pattern::Regex(re))
            }
        }
    }

    pub fn mode(&self) -> MatchMode {
        match self {
            Pattern::Literal(_) => MatchMode::Literal,
            Pattern::Regex(_) => MatchMode::Regex,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Literal(s) => s.as_str(),
            Pattern::Regex(re) => re.as_str(),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Pattern::Literal(s) => text.contains(s.as_str()),
            Pattern::Regex(re) => re.is_match(text),
        }
    }

    /// Replaces every match in `text` with `to`.
    ///
    /// Borrows `text` back when nothing matched.
    pub fn replace_all<'t>(&self, text: &'t str, to: &str) -> Cow<'t, str> {
        match self {
            Pattern::Literal(s) => {
                if text.contains(s.as_str()) {
                    Cow::Owned(text.replace(s.as_str(), to))
                } else {
                    Cow::Borrowed(text)
                }
            }
            Pattern::Regex(re) => re.replace_all(text, to),
        }
    }

    /// Returns `text` with every match in bold.
    pub fn highlight_matches(&self, text: &str) -> String {
        match self {
            Pattern::Literal(s) => text.replace(s.as_str(), &s.bold().to_string()),
            Pattern::Regex(re) => re
                .replace_all(text, |caps: &Captures| caps[0].bold().to_string())
                .into_owned(),
        }
    }

    /// Returns `text` with every match replaced by `to`, the replacement in bold.
    pub fn highlight_replacement(&self, text: &str, to: &str) -> String {
        match self {
            Pattern::Literal(s) => text.replace(s.as_str(), &to.bold().to_string()),
            Pattern::Regex(re) => re
                .replace_all(text, |caps: &Captures| {
                    let mut expanded = String::new();
                    caps.expand(to, &mut expanded);
                    expanded.bold().to_string()
                })
                .into_owned(),
        }
    }
}
