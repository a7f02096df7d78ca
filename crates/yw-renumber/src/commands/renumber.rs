//! Renumber command implementation

use crate::cli::{flag_pair, NumberingArgs};
use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;
use yw_renumber::config::{PartialConfig, RenumberConfig};
use yw_renumber::numeral::{NumberingCase, NumberingStyle};
use yw_renumber::renumber::{plan, Assignment};
use yw_renumber::{errors, theme, yw7};

/// Everything the renumber command needs besides the numbering flags
pub struct RenumberOptions {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
    pub dry_run: bool,
    pub save_config: bool,
    pub format: String,
    pub quiet: bool,
}

/// Renumber the chapters of a project file
pub fn renumber_project(options: &RenumberOptions, args: &NumberingArgs) -> Result<()> {
    let json = match options.format.as_str() {
        "text" => false,
        "json" => true,
        other => anyhow::bail!("Unsupported format '{}'. Valid formats are: text, json", other),
    };

    let mut config = RenumberConfig::load(&options.path, options.config.as_deref())
        .context("Failed to load configuration")?;
    config.merge(overrides(args)?);

    if options.save_config && options.dry_run {
        errors::print_warning("Dry run: options not saved");
    } else if options.save_config {
        let config_path = RenumberConfig::local_config_path(&options.path);
        config.save(&config_path)?;
        if !options.quiet {
            println!(
                "{} {} {}",
                theme::info_symbol().cyan(),
                theme::info("Saved options to"),
                config_path.display()
            );
        }
    }

    if options.dry_run {
        let project = yw7::read(&options.path)?;
        let assignments = plan(project.ordered(), &config)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&assignments)?);
        } else {
            print_assignments(&assignments);
            println!(
                "\n{} Dry run: {} heading(s) would change, nothing written",
                theme::info_symbol().cyan(),
                assignments.iter().filter(|a| a.is_change()).count()
            );
        }
        return Ok(());
    }

    let result = yw7::run(&options.path, &config);
    let status = errors::status_message(&result);
    let report = result?;

    if json {
        let output = serde_json::json!({
            "path": report.path,
            "changed": report.changed,
            "assignments": report.assignments,
            "status": status,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !options.quiet {
        print_assignments(&report.assignments);
        println!();
        if report.assignments.is_empty() {
            errors::print_warning("No chapter matched the numbering options");
        }
        println!(
            "{} Renumbered {} chapter(s), {} heading(s) changed",
            theme::success_symbol().green().bold(),
            report.assignments.len(),
            report.changed
        );
    }
    println!("{}", theme::success(&status));

    Ok(())
}

/// Turn command-line flags into a partial configuration
fn overrides(args: &NumberingArgs) -> Result<PartialConfig> {
    let numbering_style = args
        .style
        .as_deref()
        .map(|s| {
            NumberingStyle::from_str_flexible(s).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unsupported numbering style '{}'. Valid styles are: {}",
                    s,
                    NumberingStyle::all_names().join(", ")
                )
            })
        })
        .transpose()?;

    let numbering_case = args
        .case
        .as_deref()
        .map(|s| {
            NumberingCase::from_str_flexible(s).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unsupported numbering case '{}'. Valid cases are: {}",
                    s,
                    NumberingCase::all_names().join(", ")
                )
            })
        })
        .transpose()?;

    Ok(PartialConfig {
        include_regular: flag_pair(args.regular, args.no_regular),
        include_unused: flag_pair(args.unused, args.no_unused),
        include_parts: flag_pair(args.parts, args.no_parts),
        reset_at_part: flag_pair(args.reset_at_part, args.no_reset_at_part),
        numbering_style,
        numbering_case,
        prefix: args.prefix.clone(),
        suffix: args.suffix.clone(),
    })
}

fn print_assignments(assignments: &[Assignment]) {
    for assignment in assignments {
        let marker = if assignment.is_change() { "".normal() } else { " (unchanged)".dimmed() };
        println!(
            "{} {} {} {}{}",
            theme::position(assignment.position + 1),
            assignment.old_title,
            theme::info_symbol().cyan(),
            assignment.title.bold(),
            marker
        );
    }
}
