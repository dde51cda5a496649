//! Dirname, basename, stem and extension.

use serde::{Deserialize, Serialize};

use crate::grammar::PathGrammar;
use crate::segments::compare::is_pure_parent;
use crate::segments::sequence::PathSegments;
use crate::segments::validate::{CURRENT, PARENT};

/// Special segments a caller may accept as a basename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialSegment {
    /// The `.` marker.
    Current,
    /// The `..` marker.
    Parent,
    /// Any root marker.
    Root,
}

/// A basename split on its last dot.
///
/// Owns its parts, so it outlives the path it was read from.
///
/// # Examples
///
/// ```
/// use segpath::Path;
///
/// let parts = Path::new("dir/archive.tar.gz").unwrap().stem_and_ext().unwrap();
/// assert_eq!(parts.stem, "archive.tar");
/// assert_eq!(parts.ext, ".gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemAndExt {
    /// Everything before the last dot.
    pub stem: String,
    /// The last dot and what follows it, or `""`.
    pub ext: String,
}

/// The parent of `segments`, or `None` for a lone root.
///
/// A run of `..` gains one more `..`, and `.` becomes `..`.
///
/// # Examples
///
/// ```
/// use segpath::segments::{dirname, PathSegments};
/// use segpath::PathGrammar;
///
/// let posix = PathGrammar::posix();
/// let parse = |path: &str| PathSegments::parse(path, &posix).unwrap();
///
/// assert_eq!(dirname(&parse("/a/b")), Some(parse("/a")));
/// assert_eq!(dirname(&parse("..")), Some(parse("../..")));
/// assert_eq!(dirname(&parse(".")), Some(parse("..")));
/// assert_eq!(dirname(&parse("/")), None);
/// ```
#[must_use]
pub fn dirname(segments: &PathSegments) -> Option<PathSegments> {
    if is_pure_parent(segments) {
        let mut parent = segments.to_vec();
        parent.push(PARENT.to_string());
        Some(PathSegments::from_trusted(parent))
    } else if segments.len() == 1 {
        (segments.start() == CURRENT)
            .then(|| PathSegments::from_trusted(vec![PARENT.to_string()]))
    } else {
        Some(PathSegments::from_trusted(
            segments[..segments.len() - 1].to_vec(),
        ))
    }
}

/// The last segment of `segments`, with `ext` stripped if it ends with it.
///
/// Relative markers and roots yield `None` unless listed in `allowed`. An
/// allowed root reads as `/` for the empty POSIX root and `""` otherwise.
///
/// # Examples
///
/// ```
/// use segpath::segments::{basename, PathSegments, SpecialSegment};
/// use segpath::PathGrammar;
///
/// let generic = PathGrammar::generic();
/// let parse = |path: &str| PathSegments::parse(path, &generic).unwrap();
///
/// assert_eq!(basename(&parse("a/b.txt"), Some(".txt"), &[], &generic), Some("b"));
/// assert_eq!(basename(&parse(".."), None, &[], &generic), None);
/// assert_eq!(basename(&parse(".."), None, &[SpecialSegment::Parent], &generic), Some(".."));
/// assert_eq!(basename(&parse("/"), None, &[SpecialSegment::Root], &generic), Some("/"));
/// assert_eq!(basename(&parse("c:"), None, &[SpecialSegment::Root], &generic), Some(""));
/// ```
#[must_use]
pub fn basename<'s>(
    segments: &'s PathSegments,
    ext: Option<&str>,
    allowed: &[SpecialSegment],
    grammar: &PathGrammar,
) -> Option<&'s str> {
    let last = segments.last_segment();

    if last == CURRENT {
        return allowed.contains(&SpecialSegment::Current).then_some(last);
    }
    if last == PARENT {
        return allowed.contains(&SpecialSegment::Parent).then_some(last);
    }
    if grammar.is_root_segment(last) {
        return allowed
            .contains(&SpecialSegment::Root)
            .then_some(if last.is_empty() { "/" } else { "" });
    }

    match ext {
        Some(ext) if !ext.is_empty() => Some(last.strip_suffix(ext).unwrap_or(last)),
        _ => Some(last),
    }
}

/// Split `name` on its last dot.
///
/// A name without dots, or whose only dot is the first character, has no
/// extension.
#[must_use]
pub fn split_stem_and_ext(name: &str) -> StemAndExt {
    let (stem, ext) = match name.rfind('.') {
        None | Some(0) => (name, ""),
        Some(index) => name.split_at(index),
    };
    StemAndExt {
        stem: stem.to_string(),
        ext: ext.to_string(),
    }
}

/// Stem and extension of the basename, if it is an entry.
#[must_use]
pub fn stem_and_ext(segments: &PathSegments, grammar: &PathGrammar) -> Option<StemAndExt> {
    basename(segments, None, &[], grammar).map(split_stem_and_ext)
}
