//! yWriter 7 project files
//!
//! Reads the chapter list of a `.yw7` project and writes renumbered chapter
//! titles back. Writing streams the original document through the XML reader
//! and only replaces the text of chapter `<Title>` elements, so everything
//! else in the file is preserved.

use crate::config::RenumberConfig;
use crate::errors::{ProjectError, RenumberError};
use crate::project::{Chapter, ChapterId, ChapterKind, ChapterLevel, Project};
use crate::renumber::{self, Assignment};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of yWriter 7 projects
pub const EXTENSION: &str = "yw7";

const BOM: char = '\u{feff}';

/// Outcome of a successful renumbering run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub path: PathBuf,
    pub assignments: Vec<Assignment>,
    /// Number of titles that actually changed
    pub changed: usize,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" written.", self.path.display())
    }
}

/// Read, renumber and write a project file.
///
/// Titles are not rolled back in memory if writing fails.
pub fn run(path: &Path, config: &RenumberConfig) -> Result<RunReport, RenumberError> {
    let mut project = read(path)?;
    let assignments = renumber::plan(project.ordered(), config)?;
    let changed = renumber::apply(&mut project, &assignments);
    write(path, &project)?;

    Ok(RunReport { path: path.to_path_buf(), assignments, changed })
}

/// Reject paths that are not existing `.yw7` files
pub fn check_path(path: &Path) -> Result<(), ProjectError> {
    if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
        return Err(ProjectError::WrongExtension(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(ProjectError::NotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Load a project file
pub fn read(path: &Path) -> Result<Project, ProjectError> {
    check_path(path)?;
    let content = fs::read_to_string(path)?;
    parse(&content).map_err(|message| ProjectError::Parse { path: path.to_path_buf(), message })
}

/// Write the chapter titles of `project` into an existing project file
pub fn write(path: &Path, project: &Project) -> Result<(), ProjectError> {
    check_path(path)?;
    let content = fs::read_to_string(path)?;
    let parse_error = |message| ProjectError::Parse { path: path.to_path_buf(), message };

    // Only touch titles that differ, so unchanged ones keep their exact bytes.
    let on_disk = parse(&content).map_err(parse_error)?;
    let titles: HashMap<ChapterId, String> = project
        .ordered()
        .filter(|c| on_disk.chapter(&c.id).map(|d| d.title != c.title).unwrap_or(false))
        .map(|c| (c.id.clone(), c.title.clone()))
        .collect();

    let updated = rewrite_titles(&content, &titles).map_err(parse_error)?;

    let temp_path = path.with_extension(format!("{}.tmp", EXTENSION));
    replace_file(&temp_path, path, updated.as_bytes())
        .map_err(|source| ProjectError::Write { path: path.to_path_buf(), source })
}

/// Write `contents` to `temp_path`, then move it over `path`.
/// The temp file is removed if either step fails.
fn replace_file(temp_path: &Path, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let result = fs::write(temp_path, contents).and_then(|_| fs::rename(temp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(temp_path);
    }
    result
}

#[derive(Default)]
struct ChapterFields {
    id: Option<String>,
    title: String,
    section_start: bool,
    unused: bool,
    chapter_type: Option<String>,
    legacy_type: Option<String>,
    trash: bool,
}

impl ChapterFields {
    fn into_chapter(self) -> Result<Chapter, String> {
        let id = self.id.ok_or_else(|| "chapter without ID".to_string())?;
        let level = if self.section_start { ChapterLevel::Part } else { ChapterLevel::Regular };

        let chapter_type = self.chapter_type.or(self.legacy_type).unwrap_or_default();
        let kind = if self.trash {
            ChapterKind::Trash
        } else if self.unused {
            ChapterKind::Unused
        } else if matches!(chapter_type.trim(), "1" | "2") {
            ChapterKind::Notes
        } else {
            ChapterKind::Normal
        };

        Ok(Chapter { id: ChapterId::new(id), title: self.title, level, kind })
    }
}

/// Parse yWriter 7 XML into a project
pub fn parse(content: &str) -> Result<Project, String> {
    let mut reader = Reader::from_str(content);

    let mut project = Project::new();
    let mut root: Option<String> = None;
    let mut stack: Vec<String> = Vec::new();
    let mut text = String::new();
    let mut current: Option<ChapterFields> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = element_name(&e);
                if root.is_none() {
                    root = Some(name.clone());
                }
                if name == "CHAPTER" && parent(&stack) == Some("CHAPTERS") {
                    current = Some(ChapterFields::default());
                }
                stack.push(name);
                text.clear();
            }
            Ok(Event::Empty(e)) => {
                let name = element_name(&e);
                if root.is_none() {
                    root = Some(name.clone());
                }
                stack.push(name);
                close_element(&stack, "", &mut current, &mut project)?;
                stack.pop();
            }
            Ok(Event::Text(e)) => {
                let unescaped = e.unescape().map_err(|e| e.to_string())?;
                text.push_str(&unescaped);
            }
            Ok(Event::CData(e)) => {
                text.push_str(&String::from_utf8_lossy(&e));
            }
            Ok(Event::End(_)) => {
                close_element(&stack, &text, &mut current, &mut project)?;
                stack.pop();
                text.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(format!("XML error at position {}: {}", reader.buffer_position(), e))
            }
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(format!("unexpected end of document inside <{}>", stack.join("/")));
    }
    if root.as_deref() != Some("YWRITER7") {
        return Err("not a yWriter 7 document".to_string());
    }

    Ok(project)
}

fn close_element(
    stack: &[String],
    text: &str,
    current: &mut Option<ChapterFields>,
    project: &mut Project,
) -> Result<(), String> {
    let path: Vec<&str> = stack.iter().map(String::as_str).collect();

    match path.as_slice() {
        [.., "PROJECT", "Title"] => project.title = text.trim().to_string(),
        [.., "PROJECT", "AuthorName"] => project.author = text.trim().to_string(),
        [.., "CHAPTERS", "CHAPTER"] => {
            if let Some(fields) = current.take() {
                project.push(fields.into_chapter()?);
            }
        }
        [.., "CHAPTER", field] => {
            if let Some(fields) = current.as_mut() {
                match *field {
                    "ID" => fields.id = Some(text.trim().to_string()),
                    "Title" => fields.title = text.to_string(),
                    "SectionStart" => fields.section_start = true,
                    "Unused" => fields.unused = true,
                    "ChapterType" => fields.chapter_type = Some(text.to_string()),
                    "Type" => fields.legacy_type = Some(text.to_string()),
                    _ => {}
                }
            }
        }
        [.., "CHAPTER", "Fields", "Field_IsTrash"] => {
            if let Some(fields) = current.as_mut() {
                fields.trash = text.trim() == "1";
            }
        }
        _ => {}
    }
    Ok(())
}

/// Replace chapter titles in a yWriter 7 document.
///
/// `titles` maps chapter ids to their new title. A chapter without a
/// `<Title>` element gets one after its `<ID>`.
pub fn rewrite_titles(
    content: &str,
    titles: &HashMap<ChapterId, String>,
) -> Result<String, String> {
    let mut reader = Reader::from_str(content);
    let mut writer = Writer::new(Vec::new());

    let mut stack: Vec<String> = Vec::new();
    // Events of the chapter being read, emitted once its ID is known.
    let mut chapter: Option<Vec<Event<'static>>> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            format!("XML error at position {}: {}", reader.buffer_position(), e)
        })?;

        match &event {
            Event::Eof => break,
            Event::Start(e) => {
                let name = element_name(e);
                if name == "CHAPTER" && parent(&stack) == Some("CHAPTERS") {
                    chapter = Some(Vec::new());
                }
                stack.push(name);
            }
            Event::End(_) => {
                stack.pop();
            }
            _ => {}
        }

        let finished = matches!(&event, Event::End(e) if e.name().as_ref() == b"CHAPTER")
            && parent(&stack) == Some("CHAPTERS");

        match chapter.as_mut() {
            Some(events) => {
                events.push(event.into_owned());
                if finished {
                    if let Some(events) = chapter.take() {
                        write_chapter(&mut writer, events, titles)?;
                    }
                }
            }
            None => write_event(&mut writer, event)?,
        }
    }

    let mut updated = String::from_utf8(writer.into_inner()).map_err(|e| e.to_string())?;
    // The reader consumes a leading byte order mark without reporting it.
    if content.starts_with(BOM) && !updated.starts_with(BOM) {
        updated.insert(0, BOM);
    }
    Ok(updated)
}

fn write_chapter(
    writer: &mut Writer<Vec<u8>>,
    events: Vec<Event<'static>>,
    titles: &HashMap<ChapterId, String>,
) -> Result<(), String> {
    let id = chapter_id(&events);
    let new_title = match id.as_ref().and_then(|id| titles.get(id)) {
        Some(title) => title,
        None => {
            for event in events {
                write_event(writer, event)?;
            }
            return Ok(());
        }
    };

    let has_title = has_child(&events, "Title");
    let mut depth = 0usize;
    let mut in_title = false;

    for event in events {
        match &event {
            Event::Start(e) => {
                depth += 1;
                if depth == 2 && e.name().as_ref() == b"Title" {
                    write_event(writer, event)?;
                    write_event(writer, Event::Text(BytesText::new(new_title)))?;
                    in_title = true;
                    continue;
                }
            }
            Event::Empty(e) if depth == 1 && e.name().as_ref() == b"Title" => {
                write_title(writer, new_title)?;
                continue;
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                if in_title && depth == 1 {
                    in_title = false;
                    write_event(writer, event)?;
                    continue;
                }
                if !has_title && depth == 1 && e.name().as_ref() == b"ID" {
                    write_event(writer, event)?;
                    write_title(writer, new_title)?;
                    continue;
                }
            }
            _ => {}
        }

        if !in_title {
            write_event(writer, event)?;
        }
    }
    Ok(())
}

fn write_title(writer: &mut Writer<Vec<u8>>, title: &str) -> Result<(), String> {
    write_event(writer, Event::Start(BytesStart::new("Title")))?;
    write_event(writer, Event::Text(BytesText::new(title)))?;
    write_event(writer, Event::End(BytesEnd::new("Title")))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), String> {
    writer.write_event(event).map_err(|e| e.to_string())
}

/// Text of the chapter-level `<ID>` element
fn chapter_id(events: &[Event<'static>]) -> Option<ChapterId> {
    let mut depth = 0usize;
    let mut in_id = false;
    let mut id = String::new();

    for event in events {
        match event {
            Event::Start(e) => {
                depth += 1;
                in_id = depth == 2 && e.name().as_ref() == b"ID";
            }
            Event::End(_) => {
                if in_id {
                    return Some(ChapterId::new(id.trim()));
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(e) if in_id => {
                id.push_str(&e.unescape().ok()?);
            }
            _ => {}
        }
    }
    None
}

fn has_child(events: &[Event<'static>], name: &str) -> bool {
    let mut depth = 0usize;
    for event in events {
        match event {
            Event::Start(e) => {
                depth += 1;
                if depth == 2 && e.name().as_ref() == name.as_bytes() {
                    return true;
                }
            }
            Event::Empty(e) if depth == 1 && e.name().as_ref() == name.as_bytes() => return true,
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn parent(stack: &[String]) -> Option<&str> {
    stack.last().map(String::as_str)
}
