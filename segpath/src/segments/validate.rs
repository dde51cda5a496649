//! Single-segment checks.

use crate::error::{Error, Result};
use crate::grammar::PathGrammar;

/// The current directory marker.
pub const CURRENT: &str = ".";

/// The parent directory marker.
pub const PARENT: &str = "..";

/// Returns `true` if `segment` is non-empty and free of forbidden characters.
///
/// # Examples
///
/// ```
/// use segpath::segments::is_valid_segment;
/// use segpath::PathGrammar;
///
/// assert!(is_valid_segment("file.txt", &PathGrammar::generic()));
/// assert!(!is_valid_segment("", &PathGrammar::generic()));
/// assert!(!is_valid_segment("a?b", &PathGrammar::generic()));
/// ```
#[must_use]
pub fn is_valid_segment(segment: &str, grammar: &PathGrammar) -> bool {
    !segment.is_empty() && !grammar.has_forbidden_chars(segment)
}

/// Fails with [`Error::InvalidSegment`] unless `segment` is valid.
///
/// # Errors
///
/// Returns an error if the segment is empty or contains forbidden characters.
pub fn validate_segment(segment: &str, grammar: &PathGrammar) -> Result<()> {
    if is_valid_segment(segment, grammar) {
        Ok(())
    } else {
        Err(Error::InvalidSegment {
            segment: segment.to_string(),
        })
    }
}

/// Returns `true` for `.` and `..`.
#[must_use]
pub fn is_relative_marker(segment: &str) -> bool {
    segment == CURRENT || segment == PARENT
}

/// Returns `true` if `segment` is a root under `grammar`.
#[must_use]
pub fn is_root_marker(segment: &str, grammar: &PathGrammar) -> bool {
    grammar.is_root_segment(segment)
}
