// Test infrastructure and utilities for yw-renumber tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for one `<CHAPTER>` element of a test project
pub struct ChapterBuilder {
    id: u32,
    title: Option<String>,
    part: bool,
    unused: bool,
    chapter_type: u8,
    trash: bool,
}

impl ChapterBuilder {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            title: Some(format!("Chapter title {}", id)),
            part: false,
            unused: false,
            chapter_type: 0,
            trash: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn no_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn part(mut self) -> Self {
        self.part = true;
        self
    }

    pub fn unused(mut self) -> Self {
        self.unused = true;
        self
    }

    pub fn notes(mut self) -> Self {
        self.chapter_type = 1;
        self
    }

    pub fn trash(mut self) -> Self {
        self.trash = true;
        self
    }

    pub fn to_xml(&self) -> String {
        let mut xml =
            format!("<CHAPTER>\n<ID>{}</ID>\n<SortOrder>{}</SortOrder>\n", self.id, self.id);
        if let Some(title) = &self.title {
            xml.push_str(&format!("<Title>{}</Title>\n", escape(title)));
        }
        xml.push_str("<Desc>Some description.</Desc>\n");
        if self.part {
            xml.push_str("<SectionStart>-1</SectionStart>\n");
        }
        if self.unused {
            xml.push_str("<Unused>-1</Unused>\n");
        }
        xml.push_str(&format!("<Type>{}</Type>\n", self.chapter_type));
        xml.push_str(&format!("<ChapterType>{}</ChapterType>\n", self.chapter_type));
        if self.trash {
            xml.push_str("<Fields>\n<Field_IsTrash>1</Field_IsTrash>\n</Fields>\n");
        }
        xml.push_str("</CHAPTER>\n");
        xml
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Complete yWriter 7 document containing the given chapters
pub fn project_xml(chapters: &[ChapterBuilder]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<YWRITER7>\n<PROJECT>\n<Ver>7</Ver>\n\
         <Title>Test Novel</Title>\n<AuthorName>Test Author</AuthorName>\n</PROJECT>\n\
         <LOCATIONS>\n</LOCATIONS>\n<ITEMS>\n</ITEMS>\n<CHARACTERS>\n</CHARACTERS>\n<CHAPTERS>\n",
    );
    for chapter in chapters {
        xml.push_str(&chapter.to_xml());
    }
    xml.push_str("</CHAPTERS>\n<SCENES>\n<SCENE>\n<ID>1</ID>\n<Title>A scene</Title>\n");
    xml.push_str("</SCENE>\n</SCENES>\n</YWRITER7>\n");
    xml
}

/// Three regular chapters, each preceded by nothing special
pub fn three_regular_chapters() -> Vec<ChapterBuilder> {
    vec![ChapterBuilder::new(1), ChapterBuilder::new(2), ChapterBuilder::new(3)]
}

/// A book with two parts, an unused chapter, a notes chapter and a trashed one
pub fn structured_chapters() -> Vec<ChapterBuilder> {
    vec![
        ChapterBuilder::new(1).part().title("Part One"),
        ChapterBuilder::new(2),
        ChapterBuilder::new(3),
        ChapterBuilder::new(4).unused().title("Deleted scenes"),
        ChapterBuilder::new(5).part().title("Part Two"),
        ChapterBuilder::new(6),
        ChapterBuilder::new(7).notes().title("Research"),
        ChapterBuilder::new(8).trash().title("Old draft"),
    ]
}

/// Test project structure builder
pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    /// Create a new test project with temporary directory
    pub fn new() -> std::io::Result<Self> {
        let root = TempDir::new()?;
        Ok(Self { root })
    }

    /// Get the root path
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Write a .yw7 file with the given chapters
    pub fn create_project(
        &self,
        filename: &str,
        chapters: &[ChapterBuilder],
    ) -> std::io::Result<PathBuf> {
        let path = self.root.path().join(filename);
        fs::write(&path, project_xml(chapters))?;
        Ok(path)
    }

    /// Write a file with arbitrary content
    pub fn create_file(&self, filename: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.root.path().join(filename);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Read file content
    pub fn read_file(&self, filename: &str) -> std::io::Result<String> {
        fs::read_to_string(self.root.path().join(filename))
    }

    /// Check if file exists
    pub fn file_exists(&self, filename: &str) -> bool {
        self.root.path().join(filename).exists()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new().expect("Failed to create test project")
    }
}
