//! Switching between absolute and relative sequences.

use crate::error::{Error, Result};
use crate::grammar::PathGrammar;
use crate::segments::sequence::PathSegments;
use crate::segments::validate::{CURRENT, PARENT};

/// Anchor `segments` on `root_segment`.
///
/// `.` is replaced by the root. A leading `..` run is dropped before the
/// root is prepended, so `../../a` becomes `/a`. Absolute sequences are
/// returned unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidRoot`] if `root_segment` is not a root, and
/// [`Error::NotNormalized`] if the first segment is none of the above.
///
/// # Examples
///
/// ```
/// use segpath::segments::{make_absolute, PathSegments};
/// use segpath::PathGrammar;
///
/// let generic = PathGrammar::generic();
/// let parse = |path: &str| PathSegments::parse(path, &generic).unwrap();
///
/// let absolute = make_absolute(&parse("a/b"), "c:", &generic).unwrap();
/// assert_eq!(absolute.render(&generic, "/"), "c:/a/b");
///
/// let absolute = make_absolute(&parse("../../a"), "", &generic).unwrap();
/// assert_eq!(absolute.render(&generic, "/"), "/a");
///
/// assert!(make_absolute(&parse("a"), "a", &generic).is_err());
/// ```
pub fn make_absolute(
    segments: &PathSegments,
    root_segment: &str,
    grammar: &PathGrammar,
) -> Result<PathSegments> {
    if !grammar.is_root_segment(root_segment) {
        return Err(Error::InvalidRoot {
            root: root_segment.to_string(),
            reason: "not a root segment".into(),
        });
    }

    let first = segments.start();
    if first == CURRENT {
        let mut absolute = segments.to_vec();
        absolute[0] = root_segment.to_string();
        Ok(PathSegments::from_trusted(absolute))
    } else if first == PARENT {
        let parents = segments
            .iter()
            .take_while(|segment| *segment == PARENT)
            .count();
        log::debug!(
            "Dropping {parents} leading parent segment(s) when anchoring on {root_segment:?}"
        );
        let mut absolute = Vec::with_capacity(segments.len() - parents + 1);
        absolute.push(root_segment.to_string());
        absolute.extend_from_slice(&segments[parents..]);
        Ok(PathSegments::from_trusted(absolute))
    } else if grammar.is_root_segment(first) {
        Ok(segments.clone())
    } else {
        Err(Error::NotNormalized {
            first: first.to_string(),
        })
    }
}

/// Replace a leading root with `.`.
///
/// # Examples
///
/// ```
/// use segpath::segments::{make_relative, PathSegments};
/// use segpath::PathGrammar;
///
/// let posix = PathGrammar::posix();
/// let relative = make_relative(&PathSegments::parse("/a/b", &posix).unwrap(), &posix);
/// assert_eq!(relative.render(&posix, "/"), "./a/b");
/// ```
#[must_use]
pub fn make_relative(segments: &PathSegments, grammar: &PathGrammar) -> PathSegments {
    let mut relative = segments.to_vec();
    if grammar.is_root_segment(&relative[0]) {
        CURRENT.clone_into(&mut relative[0]);
    }
    PathSegments::from_trusted(relative)
}
