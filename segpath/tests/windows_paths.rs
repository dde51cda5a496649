//! Integration tests for Windows and generic path handling.
//!
//! This test suite verifies that:
//! - Drive letters and UNC hosts are recognized as roots
//! - Both separators are accepted and the grammar's own is emitted
//! - Characters reserved on Windows are rejected in segments
//! - Operations across different roots report no common base

mod common;

use common::{generic, windows};
use segpath::{Error, FixedEnvironment, Path, PathGrammar, SpecialSegment};

#[test]
fn test_drive_paths_render_with_backslash() {
    assert_eq!(windows("c:/a/b").to_string(), r"c:\a\b");
    assert_eq!(windows(r"C:\").to_string(), r"C:\");
    assert_eq!(windows(r"c:\a").to_string_with("/"), "c:/a");
}

#[test]
fn test_generic_renders_with_slash() {
    assert_eq!(generic(r"c:\a\b").to_string(), "c:/a/b");
    assert_eq!(generic(r"\\network\share\dir").to_string(), r"\\network/share/dir");
}

#[test]
fn test_unc_roots() {
    let share = generic(r"\\network\share");
    assert!(share.is_absolute());
    assert!(!share.is_root());
    assert_eq!(share.segments()[0], r"\\network");

    let host = share.dirname().unwrap();
    assert!(host.is_root());
    assert_eq!(
        host.basename_with(None, &[SpecialSegment::Root]).unwrap(),
        ""
    );
}

#[test]
fn test_windows_has_no_posix_root() {
    let path = Path::with_grammar("/a/b", PathGrammar::windows()).unwrap();
    assert!(!path.is_absolute());
    assert_eq!(path.to_string(), r".\a\b");
}

#[test]
fn test_reserved_characters_are_rejected() {
    for input in ["a<b", "a>b", "a\"b", "a|b", "a?b", "a*b", "c:a"] {
        let err = Path::with_grammar(input, PathGrammar::windows()).unwrap_err();
        assert!(
            matches!(err, Error::InvalidSegment { .. }),
            "{input} should be rejected, got {err}"
        );
    }
}

#[test]
fn test_segments_input_with_drive() {
    let path = Path::with_grammar(vec!["d:", "games", "..", "music"], PathGrammar::windows())
        .unwrap();
    assert_eq!(path.to_string(), r"d:\music");
}

#[test]
fn test_different_drives_share_no_base() {
    let c = windows(r"c:\work");
    assert!(c.common_base_optional([r"d:\work"]).unwrap().is_none());
    assert!(matches!(
        c.relative(r"d:\work").unwrap_err(),
        Error::Unreachable { .. }
    ));
}

#[test]
fn test_drive_letters_compare_case_sensitively() {
    assert!(!windows("c:/a").equals("C:/a").unwrap());
}

#[test]
fn test_resolve_relative_onto_drive() {
    assert_eq!(windows("a").resolve("c:").unwrap().to_string(), r"c:\a");
    assert_eq!(windows(r"b:\a").resolve("c:").unwrap().to_string(), r"b:\a");
}

#[test]
fn test_make_absolute_with_windows_cwd() {
    let env = FixedEnvironment::new(r"D:\Users\me", true);
    let path = windows(r"..\..\tools\bin").make_absolute_with_env(&env).unwrap();
    assert_eq!(path.to_string(), r"D:\tools\bin");
}

#[test]
fn test_switch_grammar_keeps_segments() {
    let generic_path = generic("c:/projects/app");
    let windows_path = generic_path.clone_with_grammar(PathGrammar::windows());
    assert_eq!(windows_path.to_string(), r"c:\projects\app");
    assert_eq!(windows_path.segments(), generic_path.segments());
}

#[test]
fn test_file_url_for_drive_path() {
    let url = windows(r"c:\a\b").to_file_url().unwrap();
    assert!(url.as_str().starts_with("file:///c:"));
    assert!(url.as_str().ends_with("/a/b"));
}
