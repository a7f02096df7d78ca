//! Show command implementation

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use yw_renumber::{theme, yw7};

/// List the chapters of a project in traversal order
pub fn show_project(path: &Path) -> Result<()> {
    let project = yw7::read(path).context("Failed to read project")?;

    let title =
        if project.title.is_empty() { "Untitled yWriter project" } else { project.title.as_str() };
    let author =
        if project.author.is_empty() { "Unknown author" } else { project.author.as_str() };

    println!("\n{}", format!("{} by {}", title, author).bold().underline());
    println!();

    for (pos, chapter) in project.ordered().enumerate() {
        println!(
            "{} {:<8} {:<7} {}",
            theme::position(pos + 1),
            theme::level_badge(chapter.level),
            theme::kind_badge(chapter.kind),
            chapter.title
        );
    }

    println!();
    println!("{} {} chapter(s)", theme::info_symbol(), project.len());
    Ok(())
}
