//! Color theme for consistent output

use crate::project::{ChapterKind, ChapterLevel};
use colored::*;

/// Color for success messages
pub fn success(msg: &str) -> ColoredString {
    msg.green()
}

/// Color for error messages
pub fn error(msg: &str) -> ColoredString {
    msg.red()
}

/// Color for warning messages
pub fn warning(msg: &str) -> ColoredString {
    msg.yellow()
}

/// Color for info messages
pub fn info(msg: &str) -> ColoredString {
    msg.cyan()
}

/// Chapter position in project order, 1-based
pub fn position(pos: usize) -> ColoredString {
    format!("{:>3}", pos).dimmed()
}

/// Color for chapter kind badges
pub fn kind_badge(kind: ChapterKind) -> ColoredString {
    let label = kind.as_str();
    match kind {
        ChapterKind::Normal => label.green(),
        ChapterKind::Unused => label.yellow(),
        ChapterKind::Notes => label.blue(),
        ChapterKind::Trash => label.red(),
    }
}

/// Color for chapter level badges
pub fn level_badge(level: ChapterLevel) -> ColoredString {
    match level {
        ChapterLevel::Regular => level.as_str().normal(),
        ChapterLevel::Part => level.as_str().magenta().bold(),
    }
}

/// Symbol for success
pub fn success_symbol() -> &'static str {
    "✓"
}

/// Symbol for info
pub fn info_symbol() -> &'static str {
    "→"
}
