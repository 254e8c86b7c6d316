//! CLI module - Command-line interface definition and entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::rename::runner;

/// namefix - replace filesystem-hostile characters in file names.
#[derive(Parser, Debug)]
#[command(name = "namefix")]
#[command(
    author,
    version,
    about,
    long_about = r#"namefix renames files so their names stop breaking shells, scripts and
foreign filesystems.

Every file name is passed through a fixed substitution table (colons, commas,
spaces, semicolons, quotes, wildcards, path separators and their fullwidth
Unicode variants), then runs of '--' and '__' are collapsed. By default
nothing is touched: namefix prints what it would rename and, when renames are
pending, offers to apply them in a second pass.

When a proposed name is already taken, namefix suggests a numbered
alternative ('report.txt' -> 'report_1.txt') and, in a wet run, asks before
using it."#,
    after_help = r#"Character replacements:
  : ; ? < > | " * / \  and curly quotes  ->  _
  , and space                            ->  -
  (fullwidth variants map like their ASCII forms; '--' and '__' collapse)

Examples:
    namefix .                    # dry-run: show what would be renamed
    namefix -w .                 # actually rename files in current directory
    namefix /path/to/dir         # dry-run in specific directory
    namefix -w -r /path/to/dir   # recursively rename files (wet run)
    namefix -r /path/to/dir      # recursive dry-run"#
)]
pub struct Cli {
    /// Directory or file to process.
    #[arg(
        default_value = ".",
        value_name = "PATH",
        long_help = "Directory or file to process (defaults to the current directory).\n\n\
A directory is processed one level deep unless --recursive is given; a single\n\
file is processed on its own."
    )]
    pub path: PathBuf,

    /// Process subdirectories recursively.
    #[arg(short, long)]
    pub recursive: bool,

    /// Actually rename files (default is a dry-run preview).
    #[arg(
        short,
        long,
        long_help = "Actually rename files. Without this flag namefix only previews the\n\
renames and, when any are pending, offers to apply them afterwards."
    )]
    pub wet: bool,

    /// Suppress output except errors.
    #[arg(
        short,
        long,
        long_help = "Suppress non-error output. This also disables the dry-run escalation\n\
prompt, which is only offered when the preview is printed."
    )]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. Useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    runner::run_rename(&cli.path, cli.recursive, cli.wet, cli.quiet)?;
    Ok(())
}
