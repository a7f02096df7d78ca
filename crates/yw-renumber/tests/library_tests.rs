mod common;

use common::{structured_chapters, three_regular_chapters, ChapterBuilder, TestProject};
use yw_renumber::numeral::{NumberingCase, NumberingStyle};
use yw_renumber::{yw7, ChapterKind, ProjectError, RenumberConfig, RenumberError};

fn titles(path: &std::path::Path) -> Vec<String> {
    yw7::read(path).unwrap().ordered().map(|c| c.title.clone()).collect()
}

#[test]
fn test_roman_headings_end_to_end() {
    let project = TestProject::default();
    let path = project.create_project("novel.yw7", &three_regular_chapters()).unwrap();
    let config = RenumberConfig {
        include_regular: true,
        include_unused: false,
        include_parts: false,
        reset_at_part: false,
        numbering_style: NumberingStyle::Roman,
        numbering_case: NumberingCase::Upper,
        prefix: "Chapter ".to_string(),
        suffix: ":".to_string(),
    };

    let report = yw7::run(&path, &config).unwrap();

    assert_eq!(report.changed, 3);
    assert_eq!(titles(&path), vec!["Chapter I:", "Chapter II:", "Chapter III:"]);
}

#[test]
fn test_structured_book_with_reset() {
    let project = TestProject::default();
    let path = project.create_project("novel.yw7", &structured_chapters()).unwrap();
    let config = RenumberConfig {
        reset_at_part: true,
        numbering_style: NumberingStyle::English,
        ..Default::default()
    };

    yw7::run(&path, &config).unwrap();

    assert_eq!(
        titles(&path),
        vec![
            "Part One",
            "Chapter One",
            "Chapter Two",
            "Deleted scenes",
            "Part Two",
            "Chapter One",
            "Research",
            "Old draft",
        ]
    );
}

#[test]
fn test_unused_included_consumes_numbers() {
    let project = TestProject::default();
    let path = project.create_project("novel.yw7", &structured_chapters()).unwrap();
    let config =
        RenumberConfig { include_unused: true, prefix: String::new(), ..Default::default() };

    yw7::run(&path, &config).unwrap();

    assert_eq!(
        titles(&path),
        vec!["Part One", "1", "2", "3", "Part Two", "4", "Research", "Old draft"]
    );
}

#[test]
fn test_parts_numbered_separately_from_chapters() {
    let project = TestProject::default();
    let path = project.create_project("novel.yw7", &structured_chapters()).unwrap();
    let config = RenumberConfig {
        include_regular: false,
        include_parts: true,
        prefix: "Part ".to_string(),
        numbering_style: NumberingStyle::Roman,
        numbering_case: NumberingCase::Upper,
        ..Default::default()
    };

    let report = yw7::run(&path, &config).unwrap();

    assert_eq!(report.assignments.len(), 2);
    assert_eq!(titles(&path)[0], "Part I");
    assert_eq!(titles(&path)[4], "Part II");
    assert_eq!(titles(&path)[1], "Chapter title 2");
}

#[test]
fn test_second_run_leaves_file_identical() {
    let project = TestProject::default();
    let path = project.create_project("novel.yw7", &structured_chapters()).unwrap();
    let config = RenumberConfig::default();

    let first = yw7::run(&path, &config).unwrap();
    let after_first = project.read_file("novel.yw7").unwrap();
    let second = yw7::run(&path, &config).unwrap();
    let after_second = project.read_file("novel.yw7").unwrap();

    assert_eq!(first.changed, 3);
    assert_eq!(second.changed, 0);
    assert_eq!(after_first, after_second);
}

#[test]
fn test_everything_but_titles_is_preserved() {
    let project = TestProject::default();
    let chapters = three_regular_chapters();
    let path = project.create_project("novel.yw7", &chapters).unwrap();

    yw7::run(&path, &RenumberConfig::default()).unwrap();

    let expected = common::project_xml(&[
        ChapterBuilder::new(1).title("Chapter 1"),
        ChapterBuilder::new(2).title("Chapter 2"),
        ChapterBuilder::new(3).title("Chapter 3"),
    ]);
    assert_eq!(project.read_file("novel.yw7").unwrap(), expected);
}

#[test]
fn test_trash_kind_is_read() {
    let project = TestProject::default();
    let path = project.create_project("novel.yw7", &structured_chapters()).unwrap();

    let loaded = yw7::read(&path).unwrap();

    let kinds: Vec<ChapterKind> = loaded.ordered().map(|c| c.kind).collect();
    assert_eq!(kinds[3], ChapterKind::Unused);
    assert_eq!(kinds[6], ChapterKind::Notes);
    assert_eq!(kinds[7], ChapterKind::Trash);
    assert_eq!(loaded.title, "Test Novel");
}

#[test]
fn test_wrong_extension_is_rejected() {
    let project = TestProject::default();
    let xml = common::project_xml(&three_regular_chapters());
    let path = project.create_file("novel.xml", &xml).unwrap();

    let err = yw7::run(&path, &RenumberConfig::default()).unwrap_err();

    assert!(matches!(err, RenumberError::Project(ProjectError::WrongExtension(_))));
    assert!(err.to_string().contains("is not a yWriter 7 project"));
}

#[test]
fn test_unparsable_project_is_reported() {
    let project = TestProject::default();
    let path = project.create_file("broken.yw7", "<YWRITER7><CHAPTERS><CHAPTER>").unwrap();

    let err = yw7::run(&path, &RenumberConfig::default()).unwrap_err();

    assert!(matches!(err, RenumberError::Project(ProjectError::Parse { .. })));
    assert_eq!(project.read_file("broken.yw7").unwrap(), "<YWRITER7><CHAPTERS><CHAPTER>");
}

#[test]
fn test_status_message_convention() {
    let project = TestProject::default();
    let missing = project.root_path().join("missing.yw7");

    let result = yw7::run(&missing, &RenumberConfig::default());
    let status = yw_renumber::errors::status_message(&result);
    assert!(status.starts_with("ERROR: "));

    let path = project.create_project("novel.yw7", &three_regular_chapters()).unwrap();
    let status = yw_renumber::errors::status_message(&yw7::run(&path, &RenumberConfig::default()));
    assert!(status.ends_with("written."));
    assert!(!project.file_exists("novel.yw7.tmp"));
}
