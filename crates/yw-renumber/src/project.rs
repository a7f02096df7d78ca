//! Project and chapter types

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Opaque chapter identifier, stable within a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ChapterId(String);

impl ChapterId {
    pub fn new(id: impl Into<String>) -> Self {
        ChapterId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChapterId {
    fn from(id: &str) -> Self {
        ChapterId::new(id)
    }
}

/// Structural level of a chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChapterLevel {
    /// Level 0: an ordinary chapter
    #[default]
    Regular,
    /// Level 1: the chapter begins a new section ("part")
    Part,
}

impl ChapterLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterLevel::Regular => "chapter",
            ChapterLevel::Part => "part",
        }
    }
}

/// How the host document model classifies a chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChapterKind {
    #[default]
    Normal,
    /// Excluded from the "used" output but still present in the file
    Unused,
    /// Notes or to-do chapters; never numbered and never counted
    Notes,
    /// Marked for deletion; never touched
    Trash,
}

impl ChapterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterKind::Normal => "normal",
            ChapterKind::Unused => "unused",
            ChapterKind::Notes => "notes",
            ChapterKind::Trash => "trash",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
    pub level: ChapterLevel,
    pub kind: ChapterKind,
}

impl Chapter {
    /// A regular, normal chapter
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ChapterId::new(id),
            title: title.into(),
            level: ChapterLevel::Regular,
            kind: ChapterKind::Normal,
        }
    }

    pub fn with_level(mut self, level: ChapterLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_kind(mut self, kind: ChapterKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_part(&self) -> bool {
        self.level == ChapterLevel::Part
    }
}

/// A document project: a chapter table plus the authoritative chapter order.
///
/// The project owns its chapters. Renumbering only ever rewrites titles; it
/// never adds, removes or reorders chapters.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub title: String,
    pub author: String,
    chapters: HashMap<ChapterId, Chapter>,
    srt_chapters: Vec<ChapterId>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a project whose order is the order of `chapters`
    pub fn from_chapters(chapters: impl IntoIterator<Item = Chapter>) -> Self {
        let mut project = Self::new();
        for chapter in chapters {
            project.push(chapter);
        }
        project
    }

    /// Append a chapter at the end of the chapter order.
    ///
    /// A chapter whose id is already known replaces the previous one and keeps
    /// its original position.
    pub fn push(&mut self, chapter: Chapter) {
        if !self.chapters.contains_key(&chapter.id) {
            self.srt_chapters.push(chapter.id.clone());
        }
        self.chapters.insert(chapter.id.clone(), chapter);
    }

    pub fn chapter(&self, id: &ChapterId) -> Option<&Chapter> {
        self.chapters.get(id)
    }

    pub fn chapter_mut(&mut self, id: &ChapterId) -> Option<&mut Chapter> {
        self.chapters.get_mut(id)
    }

    /// Chapter ids in authoritative order
    pub fn chapter_order(&self) -> &[ChapterId] {
        &self.srt_chapters
    }

    /// Chapters in authoritative order
    pub fn ordered(&self) -> impl Iterator<Item = &Chapter> {
        self.srt_chapters.iter().filter_map(|id| self.chapters.get(id))
    }

    pub fn len(&self) -> usize {
        self.srt_chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.srt_chapters.is_empty()
    }
}
