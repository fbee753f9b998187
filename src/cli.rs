use crate::config::Config;
use crate::fs::{FsMover, GitMover, Mover};
use crate::pattern::MatchMode;
use clap::{Parser, ValueEnum};
use std::path::Path;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "splace",
    version,
    about = "Rename paths or replace file contents across a source tree",
    override_usage = "splace [OPTIONS] FROM TO"
)]
pub struct Cli {
    /// Text to find
    pub from: Option<String>,

    /// Replacement text
    pub to: Option<String>,

    /// Run for real, no dry run
    #[arg(long, short = 'f')]
    pub for_real: bool,

    /// Type, 'paths' or 'contents'
    #[arg(long = "type", short = 't', value_name = "TYPE", value_enum)]
    pub mode: Option<Mode>,

    /// Treat FROM as a regular expression (default for contents)
    #[arg(long, conflicts_with = "literal")]
    pub regex: bool,

    /// Treat FROM as a literal substring (default for paths)
    #[arg(long)]
    pub literal: bool,

    /// Extensions searched by the contents pass, replacing the defaults
    #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Extra glob to leave alone, relative to the current directory
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// How paths are moved
    #[arg(long, value_enum, default_value_t = MoverKind::Git)]
    pub mover: MoverKind,
}

/// Which pass to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Paths,
    Contents,
}

impl Mode {
    /// Interpretation of `FROM` when neither `--regex` nor `--literal` is given.
    pub fn default_match_mode(self) -> MatchMode {
        match self {
            Mode::Paths => MatchMode::Literal,
            Mode::Contents => MatchMode::Regex,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MoverKind {
    /// `git mv`
    Git,
    /// Plain filesystem rename
    Fs,
}

impl MoverKind {
    pub fn build(self, root: &Path) -> Box<dyn Mover> {
        match self {
            MoverKind::Git => Box::new(GitMover::new(root)),
            MoverKind::Fs => Box::new(FsMover::new(root)),
        }
    }
}

/// Parsed run options. Printed before anything else happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub for_real: bool,
    pub mode: Option<Mode>,
    pub match_mode: MatchMode,
}

impl Cli {
    pub fn options(&self) -> Options {
        let match_mode = if self.regex {
            MatchMode::Regex
        } else if self.literal {
            MatchMode::Literal
        } else {
            self.mode
                .map(Mode::default_match_mode)
                .unwrap_or(MatchMode::Literal)
        };

        Options {
            for_real: self.for_real,
            mode: self.mode,
            match_mode,
        }
    }

    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if !self.extensions.is_empty() {
            config.set_extensions(&self.extensions);
        }
        config.add_ignores(&self.ignore);
        config
    }
}
