//! The segment model and the algorithms over it.
//!
//! Everything here is a pure function of [`PathSegments`] and a
//! [`PathGrammar`](crate::PathGrammar); nothing touches the filesystem or the
//! process. The [`Path`](crate::Path) facade wraps these functions.
//!
//! # Key Concepts
//!
//! ## Segments
//!
//! A segment is one of three kinds, told apart by its text alone:
//! - an entry (`a`, `file.txt`), non-empty and free of forbidden characters
//! - a relative marker, `.` or `..`
//! - a root: `""` for the POSIX root, `c:` for a drive, `\\host` for UNC
//!
//! ## Normalization
//!
//! Every sequence starts with a root, `.` or `..`. Adding a segment always
//! goes through one push rule, which drops `.`, cancels an entry with `..`
//! and refuses to climb above a root.
//!
//! # Examples
//!
//! ```
//! use segpath::segments::{join_many, relative, PathSegments};
//! use segpath::PathGrammar;
//!
//! let posix = PathGrammar::posix();
//! let from = PathSegments::parse("/srv/app/logs", &posix).unwrap();
//! let to = PathSegments::parse("/srv/data", &posix).unwrap();
//!
//! let rel = relative(&from, &to, &posix).unwrap().unwrap();
//! assert_eq!(rel.render(&posix, "/"), "../../data");
//! assert_eq!(join_many(&[&from, &rel], true, &posix).unwrap(), to);
//! ```

pub mod compare;
pub mod components;
pub mod convert;
pub mod join;
pub mod relationship;
pub mod relative;
pub mod sequence;
pub mod validate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use compare::{equivalent, is_absolute, is_pure_parent, is_root, is_sub_path_of};
pub use components::{
    basename, dirname, split_stem_and_ext, stem_and_ext, SpecialSegment, StemAndExt,
};
pub use convert::{make_absolute, make_relative};
pub use join::{join_many, resolve};
pub use relationship::PathRelationship;
pub use relative::{common_base, relative};
pub use sequence::PathSegments;
pub use validate::{is_relative_marker, is_root_marker, is_valid_segment, validate_segment};
