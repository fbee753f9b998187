#![doc = include_str!("../README.md")]

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod pattern;
pub mod report;
pub mod scan;
pub mod steps;

pub use error::*;

use clap::{CommandFactory, Parser};
use cli::{Cli, Mode};
use pattern::Pattern;
use std::io::{self, Write};

pub fn run() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    let help = Cli::command().render_help();
    writeln!(out, "{}", help)
}

/// Runs one invocation, writing the report to `out`.
///
/// Usage problems (missing arguments, no `--type`, empty `FROM`) print the
/// help text and return `Ok` without touching the tree.
pub fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let options = cli.options();
    writeln!(out, "Options:")?;
    writeln!(out, "{:?}", options)?;

    let (Some(from), Some(to)) = (cli.from.as_deref(), cli.to.as_deref()) else {
        write_help(out)?;
        return Ok(());
    };

    writeln!(out, "From: {}", from)?;
    writeln!(out, "To: {}", to)?;

    let Some(mode) = options.mode else {
        writeln!(out, "No type specified.")?;
        write_help(out)?;
        return Ok(());
    };

    if from.is_empty() {
        writeln!(out, "FROM must not be empty.")?;
        write_help(out)?;
        return Ok(());
    }

    let config = cli.config();
    let pattern = Pattern::new(from, options.match_mode)?;
    log::debug!("Matching {} pattern: {}", pattern.mode(), pattern.as_str());

    match mode {
        Mode::Paths => {
            let mut mover = cli.mover.build(&config.root);
            steps::rename_paths(&config, &pattern, to, options.for_real, mover.as_mut(), out)?;
        }
        Mode::Contents => {
            steps::replace_contents(&config, &pattern, to, options.for_real, out)?;
        }
    }

    Ok(())
}
