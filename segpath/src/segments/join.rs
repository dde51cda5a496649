//! Joining and resolving sequences.

use crate::error::{Error, Result};
use crate::grammar::PathGrammar;
use crate::segments::compare::is_absolute;
use crate::segments::sequence::PathSegments;
use crate::segments::validate::is_relative_marker;

/// Join `paths` left to right through the push rule.
///
/// Only the first operand may be absolute. In strict mode a later absolute
/// operand is an error; otherwise its root is skipped.
///
/// # Errors
///
/// Returns [`Error::EmptyPathList`] for an empty list,
/// [`Error::AbsoluteOperandNotFirst`] in strict mode, and the push rule's
/// errors when the result would ascend past its root.
///
/// # Examples
///
/// ```
/// use segpath::segments::{join_many, PathSegments};
/// use segpath::PathGrammar;
///
/// let posix = PathGrammar::posix();
/// let base = PathSegments::parse("/a/b", &posix).unwrap();
/// let tail = PathSegments::parse("../c", &posix).unwrap();
///
/// let joined = join_many(&[&base, &tail], true, &posix).unwrap();
/// assert_eq!(joined.render(&posix, "/"), "/a/c");
///
/// let other = PathSegments::parse("/d", &posix).unwrap();
/// assert!(join_many(&[&base, &other], true, &posix).is_err());
/// assert_eq!(
///     join_many(&[&base, &other], false, &posix).unwrap().render(&posix, "/"),
///     "/a/b/d"
/// );
/// ```
pub fn join_many(
    paths: &[&PathSegments],
    strict: bool,
    grammar: &PathGrammar,
) -> Result<PathSegments> {
    let (first, rest) = paths.split_first().ok_or(Error::EmptyPathList {
        operation: "join",
    })?;

    let mut joined = (*first).clone();
    for (offset, path) in rest.iter().enumerate() {
        let mut tail = path.iter();
        if is_absolute(path, grammar) {
            if strict {
                return Err(Error::AbsoluteOperandNotFirst { index: offset + 1 });
            }
            log::debug!(
                "Skipping root {:?} of operand {} in lenient join",
                path.start(),
                offset + 1
            );
            tail.next();
        }
        for segment in tail {
            joined.push_normalized(segment, grammar)?;
        }
    }

    Ok(joined)
}

/// Resolve `segments` against the absolute `root`.
///
/// Relative sequences are joined onto `root`; absolute ones are returned
/// unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidRoot`] if `root` is not absolute, and the join
/// errors otherwise.
///
/// # Examples
///
/// ```
/// use segpath::segments::{resolve, PathSegments};
/// use segpath::PathGrammar;
///
/// let posix = PathGrammar::posix();
/// let root = PathSegments::parse("/home/user", &posix).unwrap();
/// let path = PathSegments::parse("../other", &posix).unwrap();
///
/// let resolved = resolve(&path, &root, &posix).unwrap();
/// assert_eq!(resolved.render(&posix, "/"), "/home/other");
/// ```
pub fn resolve(
    segments: &PathSegments,
    root: &PathSegments,
    grammar: &PathGrammar,
) -> Result<PathSegments> {
    if !is_absolute(root, grammar) {
        return Err(Error::InvalidRoot {
            root: root.render(grammar, grammar.separator()),
            reason: "root path must be absolute".into(),
        });
    }

    if is_relative_marker(segments.start()) {
        join_many(&[root, segments], true, grammar)
    } else {
        Ok(segments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posix(path: &str) -> PathSegments {
        PathSegments::parse(path, &PathGrammar::posix()).unwrap()
    }

    fn join(paths: &[&str], strict: bool) -> Result<String> {
        let grammar = PathGrammar::posix();
        let parsed: Vec<PathSegments> = paths.iter().map(|path| posix(path)).collect();
        let refs: Vec<&PathSegments> = parsed.iter().collect();
        Ok(join_many(&refs, strict, &grammar)?.render(&grammar, "/"))
    }

    #[test]
    fn test_join_single_is_identity() {
        assert_eq!(join(&["a/b"], true).unwrap(), "./a/b");
        assert_eq!(join(&["/"], true).unwrap(), "/");
    }

    #[test]
    fn test_join_relative_operands() {
        assert_eq!(join(&["a", "b"], true).unwrap(), "./a/b");
        assert_eq!(join(&["/a", "b"], true).unwrap(), "/a/b");
        assert_eq!(join(&["a", "../b"], true).unwrap(), "./b");
        assert_eq!(join(&["a", "../../b"], true).unwrap(), "../b");
        assert_eq!(join(&["..", ".."], true).unwrap(), "../..");
    }

    #[test]
    fn test_join_past_root() {
        let err = join(&["/a", "../.."], true).unwrap_err();
        assert!(matches!(err, Error::CannotAscendPastRoot { .. }));
    }

    #[test]
    fn test_join_strict_rejects_absolute() {
        let err = join(&["a", "b", "/c"], true).unwrap_err();
        assert!(matches!(err, Error::AbsoluteOperandNotFirst { index: 2 }));
    }

    #[test]
    fn test_join_lenient_skips_root() {
        assert_eq!(join(&["/a", "/b"], false).unwrap(), "/a/b");
        assert_eq!(join(&["a", "/b"], false).unwrap(), "./a/b");
    }

    #[test]
    fn test_join_empty_list() {
        let err = join_many(&[], true, &PathGrammar::posix()).unwrap_err();
        assert!(matches!(err, Error::EmptyPathList { operation: "join" }));
    }

    #[test]
    fn test_resolve() {
        let grammar = PathGrammar::posix();
        let render = |segments: PathSegments| segments.render(&grammar, "/");

        assert_eq!(render(resolve(&posix("a"), &posix("/b"), &grammar).unwrap()), "/b/a");
        assert_eq!(render(resolve(&posix(".."), &posix("/b/c"), &grammar).unwrap()), "/b");
        assert_eq!(render(resolve(&posix("/a"), &posix("/b"), &grammar).unwrap()), "/a");
        assert_eq!(render(resolve(&posix("."), &posix("/"), &grammar).unwrap()), "/");
    }

    #[test]
    fn test_resolve_requires_absolute_root() {
        let grammar = PathGrammar::posix();
        let err = resolve(&posix("a"), &posix("b"), &grammar).unwrap_err();
        assert!(matches!(err, Error::InvalidRoot { ref root, .. } if root == "./b"));
    }

    #[test]
    fn test_resolve_windows_drive() {
        let grammar = PathGrammar::generic();
        let parse = |path: &str| PathSegments::parse(path, &grammar).unwrap();

        let resolved = resolve(&parse("a"), &parse("c:"), &grammar).unwrap();
        assert_eq!(resolved.render(&grammar, "/"), "c:/a");

        let resolved = resolve(&parse("b:/a"), &parse("c:"), &grammar).unwrap();
        assert_eq!(resolved.render(&grammar, "/"), "b:/a");
    }
}
