//! Comparisons between segment sequences.

use crate::grammar::PathGrammar;
use crate::segments::sequence::PathSegments;
use crate::segments::validate::PARENT;

/// Returns `true` when both sequences have identical segments.
#[must_use]
pub fn equivalent(a: &PathSegments, b: &PathSegments) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// Returns `true` when `path` lies strictly under `parent`.
///
/// With `or_equal`, equal sequences also count as sub-paths.
///
/// # Examples
///
/// ```
/// use segpath::segments::{is_sub_path_of, PathSegments};
/// use segpath::PathGrammar;
///
/// let posix = PathGrammar::posix();
/// let parent = PathSegments::parse("/a/b/c", &posix).unwrap();
/// let child = PathSegments::parse("/a/b/c/d", &posix).unwrap();
///
/// assert!(is_sub_path_of(&child, &parent, false));
/// assert!(!is_sub_path_of(&parent, &child, false));
/// assert!(!is_sub_path_of(&parent, &parent, false));
/// assert!(is_sub_path_of(&parent, &parent, true));
/// ```
#[must_use]
pub fn is_sub_path_of(path: &PathSegments, parent: &PathSegments, or_equal: bool) -> bool {
    if parent.len() >= path.len() + usize::from(or_equal) {
        return false;
    }
    path.starts_with(parent)
}

/// Returns `true` when the first segment is a root.
#[must_use]
pub fn is_absolute(segments: &PathSegments, grammar: &PathGrammar) -> bool {
    grammar.is_root_segment(segments.start())
}

/// Returns `true` for a lone root.
#[must_use]
pub fn is_root(segments: &PathSegments, grammar: &PathGrammar) -> bool {
    segments.len() == 1 && is_absolute(segments, grammar)
}

/// Returns `true` when every segment is `..`.
#[must_use]
pub fn is_pure_parent(segments: &PathSegments) -> bool {
    segments.iter().all(|segment| segment == PARENT)
}
