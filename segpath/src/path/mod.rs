//! The `Path` value type.
//!
//! [`Path`] pairs a normalized [`PathSegments`](crate::PathSegments) with its
//! [`PathGrammar`](crate::PathGrammar) and exposes the segment algorithms as
//! methods. Arguments are accepted as any [`PathInput`]: a string, a list of
//! raw segments, or another `Path`.
//!
//! # Throwing and optional forms
//!
//! Operations that may have no answer come in two forms. `dirname`,
//! `basename`, `stem_and_ext`, `common_base` and `relative` return an error
//! when there is no result; their `*_optional` counterparts return `None`.
//!
//! # Examples
//!
//! ```
//! use segpath::{Path, PathGrammar};
//!
//! let project = Path::with_grammar(r"C:\work\project", PathGrammar::windows()).unwrap();
//! let source = project.concat(["src", "main.rs"]).unwrap();
//!
//! assert_eq!(source.to_string(), r"C:\work\project\src\main.rs");
//! assert_eq!(source.to_string_with("/"), "C:/work/project/src/main.rs");
//! assert_eq!(source.stem_and_ext().unwrap().ext, ".rs");
//! assert!(source.is_sub_path_of(&project).unwrap());
//!
//! assert!(project.dirname().unwrap().dirname().unwrap().is_root());
//! assert!(project.common_base_optional([r"D:\work"]).unwrap().is_none());
//! ```

mod input;
mod types;

pub use input::PathInput;
pub use types::Path;
