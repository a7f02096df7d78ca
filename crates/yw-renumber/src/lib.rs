//! Chapter renumbering library for yWriter projects
//!
//! This library provides the numbering engine (numeral formatting and the
//! chapter traversal), the typed configuration, and a loader/saver for
//! yWriter 7 project files.

pub mod config;
pub mod errors;
pub mod numeral;
pub mod project;
pub mod renumber;
pub mod theme;
pub mod yw7;

pub use config::RenumberConfig;
pub use errors::{ProjectError, RenumberError};
pub use numeral::{apply_case, format_number, FormatError, NumberingCase, NumberingStyle};
pub use project::{Chapter, ChapterId, ChapterKind, ChapterLevel, Project};
pub use renumber::{plan, renumber, renumber_chapters, Assignment};

/// Re-export common error types
pub use anyhow::{Error, Result};
