//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Generate a grid of interleaved mergers and splitters connected by belts
#[derive(Parser, Debug)]
#[command(name = "gridgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Grid side length, a positive integer (default: 100)
    ///
    /// Kept as raw text: an invalid value is reported and the default size is used
    /// unless --strict is given.
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub size: Option<String>,

    /// Directory to write the grid file into (created if missing)
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// Fail on an invalid size instead of falling back to the default
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
