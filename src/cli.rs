//! Command-line surface.
//!
//! `--stats` and `--dup` are mutually exclusive; whichever one is given is
//! turned into a [`Request`] before anything else runs.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// This program analyzes playlist files (.xml) exported from iTunes.
#[derive(Parser, Debug)]
#[command(name = "tunestat", version)]
#[command(group(ArgGroup::new("analysis").args(["stats", "dup"]).multiple(false)))]
pub struct CliArgs {
    /// Plot track duration against rating for the given library file.
    #[arg(long, value_name = "FILE")]
    pub stats: Option<PathBuf>,

    /// Find duplicate tracks in the given library file.
    #[arg(long, value_name = "FILE")]
    pub dup: Option<PathBuf>,
}

/// What the user asked for, decided once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Stats(PathBuf),
    Dups(PathBuf),
    Nothing,
}

impl From<CliArgs> for Request {
    fn from(args: CliArgs) -> Self {
        match (args.stats, args.dup) {
            (Some(path), _) => Request::Stats(path),
            (None, Some(path)) => Request::Dups(path),
            (None, None) => Request::Nothing,
        }
    }
}
