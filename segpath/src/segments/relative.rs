//! Common base and relative sequences.

use crate::error::{Error, Result};
use crate::grammar::PathGrammar;
use crate::segments::sequence::PathSegments;
use crate::segments::validate::PARENT;

/// The longest segment prefix shared by every path.
///
/// Returns `None` when the paths disagree on their first segment, e.g. two
/// different roots or an absolute and a relative path.
///
/// # Errors
///
/// Returns [`Error::EmptyPathList`] for an empty list.
///
/// # Examples
///
/// ```
/// use segpath::segments::{common_base, PathSegments};
/// use segpath::PathGrammar;
///
/// let posix = PathGrammar::posix();
/// let parse = |path: &str| PathSegments::parse(path, &posix).unwrap();
///
/// let (a, b) = (parse("/a/b"), parse("/a/c"));
/// assert_eq!(common_base(&[&a, &b]).unwrap(), Some(parse("/a")));
///
/// let (a, b) = (parse("a/b"), parse("/a/b"));
/// assert_eq!(common_base(&[&a, &b]).unwrap(), None);
/// ```
pub fn common_base(paths: &[&PathSegments]) -> Result<Option<PathSegments>> {
    let (first, rest) = paths.split_first().ok_or(Error::EmptyPathList {
        operation: "common base",
    })?;

    let shared = first
        .iter()
        .enumerate()
        .take_while(|&(index, segment)| rest.iter().all(|path| path.get(index) == Some(segment)))
        .count();

    if shared == 0 {
        return Ok(None);
    }
    Ok(Some(PathSegments::from_trusted(first[..shared].to_vec())))
}

/// The sequence leading from `from` to `to`.
///
/// Climbs one `..` per segment of `from` past the common base, then descends
/// into the rest of `to`. Returns `None` without a common base.
///
/// # Errors
///
/// Propagates the push rule's errors.
///
/// # Examples
///
/// ```
/// use segpath::segments::{relative, PathSegments};
/// use segpath::PathGrammar;
///
/// let posix = PathGrammar::posix();
/// let parse = |path: &str| PathSegments::parse(path, &posix).unwrap();
///
/// let rel = relative(&parse("/a/b/c"), &parse("/a/d/e"), &posix).unwrap().unwrap();
/// assert_eq!(rel.render(&posix, "/"), "../../d/e");
///
/// assert!(relative(&parse("a/b"), &parse("/a/d"), &posix).unwrap().is_none());
/// ```
pub fn relative(
    from: &PathSegments,
    to: &PathSegments,
    grammar: &PathGrammar,
) -> Result<Option<PathSegments>> {
    let Some(base) = common_base(&[from, to])? else {
        return Ok(None);
    };

    let mut path = PathSegments::current();
    for _ in base.len()..from.len() {
        path.push_normalized(PARENT, grammar)?;
    }
    for segment in &to[base.len()..] {
        path.push_normalized(segment, grammar)?;
    }

    Ok(Some(path))
}
