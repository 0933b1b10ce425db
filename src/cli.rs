//! CLI argument definitions using clap
//!
//! The benchmark itself takes no configuration: sequence length and
//! transformation functions are fixed. The only flags are the usual
//! binary surface (version, verbose logging).

use clap::Parser;

/// Wall-clock comparison of lazy and eager iteration idioms
#[derive(Parser, Debug)]
#[command(name = "iterbench")]
#[command(about = "Times lazy vs eager filter and map passes over a fixed integer sequence")]
#[command(version)]
pub struct Cli {
    /// Show per-pass debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
