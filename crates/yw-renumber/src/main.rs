//! Chapter renumbering CLI tool

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Execute the command
    let result = match cli.command {
        Commands::Renumber { path, options, config, dry_run, save_config, format } => {
            let run =
                RenumberOptions { path, config, dry_run, save_config, format, quiet: cli.quiet };
            renumber_project(&run, &options)
        }
        Commands::Show { path } => show_project(&path),
    };

    if let Err(e) = result {
        yw_renumber::errors::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
