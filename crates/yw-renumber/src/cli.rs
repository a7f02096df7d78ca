//! CLI argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "yw-renumber")]
#[command(about = "Renumber chapter headings in yWriter 7 projects", long_about = None)]
#[command(version)]
#[command(after_help = "Use 'yw-renumber <command> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Only print the final status line
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite chapter headings with sequence numbers
    #[command(visible_alias = "rn")]
    Renumber {
        /// Path to the .yw7 project file
        path: PathBuf,

        #[command(flatten)]
        options: NumberingArgs,

        /// Read options from this TOML file (overrides the project-local file)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show the new headings without writing the project
        #[arg(long)]
        dry_run: bool,

        /// Store the effective options in yw-renumber.toml next to the project
        #[arg(long)]
        save_config: bool,

        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the chapters of a project in order
    #[command(visible_alias = "ls")]
    Show {
        /// Path to the .yw7 project file
        path: PathBuf,
    },
}

/// Command-line overrides for the numbering options
#[derive(Args, Debug, Default)]
pub struct NumberingArgs {
    /// Number regular chapters
    #[arg(long, overrides_with = "no_regular")]
    pub regular: bool,

    /// Do not number regular chapters
    #[arg(long)]
    pub no_regular: bool,

    /// Number chapters marked "unused"
    #[arg(long, overrides_with = "no_unused")]
    pub unused: bool,

    /// Do not number chapters marked "unused"
    #[arg(long)]
    pub no_unused: bool,

    /// Number section beginnings (parts)
    #[arg(long, overrides_with = "no_parts")]
    pub parts: bool,

    /// Do not number section beginnings (parts)
    #[arg(long)]
    pub no_parts: bool,

    /// Restart numbering after each section beginning
    #[arg(long, overrides_with = "no_reset_at_part")]
    pub reset_at_part: bool,

    /// Number continuously across section beginnings
    #[arg(long)]
    pub no_reset_at_part: bool,

    /// Numbering style (arabic, roman, english)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Letter case of the number (upper, capitalized, lower)
    #[arg(long = "case")]
    pub case: Option<String>,

    /// Text preceding each number
    #[arg(short, long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Text following each number
    #[arg(long, allow_hyphen_values = true)]
    pub suffix: Option<String>,
}

/// Resolve a `--flag` / `--no-flag` pair
pub fn flag_pair(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
