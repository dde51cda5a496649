//! Integration tests for POSIX path handling.
//!
//! This suite walks through the common scenarios a caller runs into:
//! - parsing and normalizing `.` and `..`
//! - dirname, basename and extensions
//! - common bases and relative paths between project directories
//! - resolving against an injected working directory

mod common;

use common::posix;
use segpath::{Error, FixedEnvironment, Path, PathGrammar, PathRelationship};

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_parse_collapses_markers() {
    assert_eq!(posix("a/b/../c").to_string(), "./a/c");
    assert_eq!(posix("//usr///local/./bin/").to_string(), "/usr/local/bin");
    assert_eq!(posix("").to_string(), ".");
}

#[test]
fn test_posix_accepts_backslashes_and_colons() {
    // Only `/` and NUL are forbidden under POSIX rules
    let path = posix(r"dir/we\ird:name");
    assert_eq!(path.basename().unwrap(), r"we\ird:name");
    assert!(!path.is_absolute());
}

#[test]
fn test_posix_rejects_drive_roots() {
    let path = posix("c:/a");
    assert!(!path.is_absolute());
    assert_eq!(path.to_string(), "./c:/a");
}

#[test]
fn test_nul_is_rejected() {
    let err = Path::with_grammar("a/b\0c", PathGrammar::posix()).unwrap_err();
    assert!(err.is_invalid_path());
}

// =============================================================================
// Components
// =============================================================================

#[test]
fn test_dirname_chain_ends_at_root() {
    let mut path = posix("/usr/local/bin");
    let mut seen = vec![path.to_string()];
    while let Some(parent) = path.dirname_optional() {
        seen.push(parent.to_string());
        path = parent;
    }
    assert_eq!(seen, ["/usr/local/bin", "/usr/local", "/usr", "/"]);
    assert!(matches!(path.dirname().unwrap_err(), Error::NoParent { .. }));
}

#[test]
fn test_dirname_of_relative_climbs() {
    assert_eq!(posix("a").dirname().unwrap().to_string(), ".");
    assert_eq!(posix(".").dirname().unwrap().to_string(), "..");
    assert_eq!(posix("../..").dirname().unwrap().to_string(), "../../..");
}

#[test]
fn test_file_name_parts() {
    let path = posix("/var/log/archive.tar.gz");
    assert_eq!(path.basename().unwrap(), "archive.tar.gz");
    assert_eq!(path.basename_with(Some(".gz"), &[]).unwrap(), "archive.tar");

    let parts = path.stem_and_ext().unwrap();
    assert_eq!(parts.stem, "archive.tar");
    assert_eq!(parts.ext, ".gz");

    let hidden = posix("/home/user/.bashrc").stem_and_ext().unwrap();
    assert_eq!(hidden.stem, ".bashrc");
    assert!(hidden.ext.is_empty());
}

// =============================================================================
// Common base and relative paths
// =============================================================================

#[test]
fn test_common_base_of_project_files() {
    let src = posix("/work/project/src/main.rs");
    let base = src
        .common_base(["/work/project/tests/it.rs", "/work/project/Cargo.toml"])
        .unwrap();
    assert_eq!(base.to_string(), "/work/project");
}

#[test]
fn test_common_base_of_disjoint_relative_paths() {
    assert_eq!(posix("a/b").common_base(["c/d"]).unwrap().to_string(), ".");
    assert!(matches!(
        posix("a/b").common_base(["/a/b"]).unwrap_err(),
        Error::NoCommonBase
    ));
}

#[test]
fn test_relative_between_siblings() {
    let rel = posix("/work/a/src").relative("/work/b/docs").unwrap();
    assert_eq!(rel.to_string(), "../../b/docs");
    assert_eq!(
        posix("/work/a/src").concat([&rel]).unwrap().to_string(),
        "/work/b/docs"
    );
}

#[test]
fn test_relative_unreachable() {
    let err = posix("a/b").relative("/a/d").unwrap_err();
    assert!(err.is_missing_result());
    assert!(posix("a/b").relative_optional("/a/d").unwrap().is_none());
}

// =============================================================================
// Working directory
// =============================================================================

#[test]
fn test_resolve_against_injected_cwd() {
    let env = FixedEnvironment::new("/home/user/project", false);
    let resolved = posix("../shared/lib").resolve_with_env(&env).unwrap();
    assert_eq!(resolved.to_string(), "/home/user/shared/lib");
    assert_eq!(
        resolved.relationship(&posix("/home/user")),
        PathRelationship::Descendant
    );
}

#[test]
fn test_resolve_without_cwd_only_fails_for_relative_paths() {
    let env = FixedEnvironment::without_cwd(false);
    assert!(posix("/etc").resolve_with_env(&env).is_ok());
    assert!(matches!(
        posix("etc").resolve_with_env(&env).unwrap_err(),
        Error::NoProcessEnvironment { .. }
    ));
}

#[test]
fn test_make_absolute_uses_cwd_root_only() {
    let env = FixedEnvironment::new("/home/user", false);
    let absolute = posix("../../etc/hosts").make_absolute_with_env(&env).unwrap();
    assert_eq!(absolute.to_string(), "/etc/hosts");
}

#[test]
fn test_file_url() {
    let url = posix("/srv/www/index.html").to_file_url().unwrap();
    assert_eq!(url.as_str(), "file:///srv/www/index.html");
    assert_eq!(url.scheme(), "file");
}
