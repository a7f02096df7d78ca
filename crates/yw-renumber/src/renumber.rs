//! Chapter renumbering
//!
//! A single forward pass over the chapters in project order decides which
//! chapters receive a number. The rules are applied with this precedence:
//!
//! 1. Trash chapters are skipped unconditionally.
//! 2. Unused chapters are skipped unless `include_unused` is set.
//! 3. A part resets the counter when `reset_at_part` is set, then is skipped
//!    unless `include_parts` is set. The reset happens even if the part
//!    itself is not numbered.
//! 4. Regular chapters are skipped unless `include_regular` is set.
//! 5. Notes chapters are never numbered.
//!
//! Every remaining chapter takes the next counter value and gets the title
//! `prefix + numeral + suffix`. Skipped chapters keep their title.

use crate::config::RenumberConfig;
use crate::numeral::{format_number, FormatError};
use crate::project::{Chapter, ChapterId, ChapterKind, Project};
use serde::Serialize;

/// A new heading computed for one chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    /// Index of the chapter in traversal order
    pub position: usize,
    pub id: ChapterId,
    pub number: u32,
    pub old_title: String,
    pub title: String,
}

impl Assignment {
    /// Whether applying this assignment changes the chapter title
    pub fn is_change(&self) -> bool {
        self.old_title != self.title
    }
}

/// Compute new headings without touching any chapter.
///
/// Fails on the first number the configured style cannot represent; no
/// partial plan is returned.
pub fn plan<'a, I>(chapters: I, config: &RenumberConfig) -> Result<Vec<Assignment>, FormatError>
where
    I: IntoIterator<Item = &'a Chapter>,
{
    let mut counter: u32 = 0;
    let mut assignments = Vec::new();

    for (position, chapter) in chapters.into_iter().enumerate() {
        match chapter.kind {
            ChapterKind::Trash => continue,
            ChapterKind::Unused if !config.include_unused => continue,
            _ => {}
        }

        if chapter.is_part() {
            if config.reset_at_part {
                counter = 0;
            }
            if !config.include_parts {
                continue;
            }
        } else if !config.include_regular {
            continue;
        }

        if chapter.kind == ChapterKind::Notes {
            continue;
        }

        counter += 1;
        let numeral = format_number(counter, config.numbering_style, config.numbering_case)?;
        assignments.push(Assignment {
            position,
            id: chapter.id.clone(),
            number: counter,
            old_title: chapter.title.clone(),
            title: format!("{}{}{}", config.prefix, numeral, config.suffix),
        });
    }

    Ok(assignments)
}

/// Rewrite chapter titles in project order.
///
/// Returns the number of titles that actually changed. Titles are only
/// written once every number has been formatted, so a formatting error leaves
/// the project untouched.
pub fn renumber(project: &mut Project, config: &RenumberConfig) -> Result<usize, FormatError> {
    let assignments = plan(project.ordered(), config)?;
    Ok(apply(project, &assignments))
}

/// Same as [`renumber`] for a plain ordered slice of chapters
pub fn renumber_chapters(
    chapters: &mut [Chapter],
    config: &RenumberConfig,
) -> Result<usize, FormatError> {
    let assignments = plan(chapters.iter(), config)?;

    let mut changed = 0;
    for assignment in assignments.iter().filter(|a| a.is_change()) {
        chapters[assignment.position].title = assignment.title.clone();
        changed += 1;
    }
    Ok(changed)
}

/// Write planned titles into the project, returning how many changed
pub fn apply(project: &mut Project, assignments: &[Assignment]) -> usize {
    let mut changed = 0;
    for assignment in assignments {
        if let Some(chapter) = project.chapter_mut(&assignment.id) {
            if chapter.title != assignment.title {
                chapter.title = assignment.title.clone();
                changed += 1;
            }
        }
    }
    changed
}
