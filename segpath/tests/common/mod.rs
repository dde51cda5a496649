//! Common test utilities for integration tests.
//!
//! This module provides helpers for building paths and grammar files in
//! the segpath integration suites.

use std::fs;
use std::path::PathBuf;

use segpath::{Path, PathGrammar};

/// Parses `input` with the POSIX grammar.
///
/// # Panics
///
/// Panics if the input is not a valid POSIX path.
#[allow(dead_code)]
pub fn posix(input: &str) -> Path {
    Path::with_grammar(input, PathGrammar::posix()).unwrap()
}

/// Parses `input` with the Windows grammar.
///
/// # Panics
///
/// Panics if the input is not a valid Windows path.
#[allow(dead_code)]
pub fn windows(input: &str) -> Path {
    Path::with_grammar(input, PathGrammar::windows()).unwrap()
}

/// Parses `input` with the generic grammar.
///
/// # Panics
///
/// Panics if the input is not a valid path.
#[allow(dead_code)]
pub fn generic(input: &str) -> Path {
    Path::new(input).unwrap()
}

/// Writes `contents` to `name` in a fresh temporary directory.
///
/// The directory is kept alive for the rest of the test process.
#[allow(dead_code)]
pub fn write_grammar_file(name: &str, contents: &str) -> std::io::Result<PathBuf> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join(name);
    fs::write(&path, contents)?;
    // Keep the temp_dir alive by forgetting it - this is a test helper
    std::mem::forget(temp_dir);
    Ok(path)
}
