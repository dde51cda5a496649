#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # segpath
//!
//! A library for manipulating filesystem paths as validated segment
//! sequences, without touching the filesystem.
//!
//! Paths are parsed with a [`PathGrammar`] describing roots, separators and
//! forbidden characters. POSIX, Windows (drive letters and UNC hosts) and a
//! lenient generic grammar ship with the crate; custom grammars can be loaded
//! from YAML or JSON.
//!
//! ## Core Types
//!
//! - [`Path`] and [`PathInput`]: The path value and the inputs it accepts
//! - [`PathSegments`]: A normalized, never-empty segment sequence
//! - [`PathGrammar`] and [`GrammarPreset`]: Root and separator rules
//! - [`Environment`]: Access to the working directory and platform
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use segpath::Path;
//!
//! let from = Path::new("/a/b/c").unwrap();
//! let rel = from.relative("/a/d/e").unwrap();
//! assert_eq!(rel.to_string(), "../../d/e");
//! assert!(from.concat([&rel]).unwrap().equals("/a/d/e").unwrap());
//!
//! let windows = Path::new(r"c:\a").unwrap();
//! assert!(windows.is_absolute());
//! assert_eq!(windows.to_string(), "c:/a");
//! ```

pub mod environment;
pub mod error;
pub mod grammar;
pub mod path;
pub mod segments;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export key types at crate root for convenience
pub use environment::{Environment, FixedEnvironment, ProcessEnvironment};
pub use error::{Error, Result};
pub use grammar::{GrammarConfig, GrammarEnvironment, GrammarLoader, GrammarPreset, PathGrammar};
pub use path::{Path, PathInput};
pub use segments::{PathRelationship, PathSegments, SpecialSegment, StemAndExt};
