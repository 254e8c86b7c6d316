//! namefix - rename files whose names fight back
//!
//! namefix replaces characters that are problematic on common filesystems
//! (colons, slashes, quotes, wildcards and their fullwidth Unicode variants)
//! with safe substitutes. It previews by default, resolves collisions with
//! numbered alternative names, and only touches the filesystem after an
//! explicit wet run or a confirmed escalation.

use anyhow::Result;
use clap::Parser;

mod cli;
mod prompt;
mod rename;
mod sanitize;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
