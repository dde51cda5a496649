//! Normalized segment sequences.
//!
//! A [`PathSegments`] is never empty. Its first element is a root marker,
//! `.` or `..`; `.` never appears after index 0, and `..` only appears as a
//! leading run. Every way of adding a segment goes through the same push
//! rule, so parsing, joining and relating paths normalize identically.

use std::ops::Deref;

use crate::error::{Error, Result};
use crate::grammar::PathGrammar;
use crate::segments::validate::{validate_segment, CURRENT, PARENT};

/// An ordered, normalized, non-empty list of path segments.
///
/// # Examples
///
/// ```
/// use segpath::segments::PathSegments;
/// use segpath::PathGrammar;
///
/// let posix = PathGrammar::posix();
/// let segments = PathSegments::parse("a/b/../c", &posix).unwrap();
/// assert_eq!(&segments[..], [".", "a", "c"]);
/// assert_eq!(segments.render(&posix, "/"), "./a/c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegments(Vec<String>);

impl PathSegments {
    /// The sequence `['.']`, denoting the current directory.
    #[must_use]
    pub fn current() -> Self {
        Self(vec![CURRENT.to_string()])
    }

    /// Build a sequence from data already known to be normalized.
    ///
    /// Used for prefixes and copies of existing sequences; skips validation.
    pub(crate) fn from_trusted(segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty(), "segment sequences are never empty");
        Self(segments)
    }

    /// Parse a string path.
    ///
    /// A root matched at the start of `path` becomes the first segment and
    /// the remainder is split on the grammar's separator pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment is invalid or the path ascends past
    /// its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::segments::PathSegments;
    /// use segpath::PathGrammar;
    ///
    /// let windows = PathGrammar::windows();
    /// let segments = PathSegments::parse(r"c:\a\\b\", &windows).unwrap();
    /// assert_eq!(&segments[..], ["c:", "a", "b"]);
    ///
    /// assert!(PathSegments::parse("/a/../..", &PathGrammar::posix()).is_err());
    /// ```
    pub fn parse(path: &str, grammar: &PathGrammar) -> Result<Self> {
        if path.is_empty() {
            return Ok(Self::current());
        }

        let (mut segments, rest) = match grammar.match_root(path) {
            Some(found) => (
                Self(vec![found.root.to_string()]),
                &path[found.consumed..],
            ),
            None => (Self::current(), path),
        };

        for token in grammar.split(rest) {
            if !token.is_empty() {
                segments.push(token, grammar)?;
            }
        }

        log::trace!("Parsed {path:?} into {:?}", segments.0);
        Ok(segments)
    }

    /// Normalize a list of raw segments.
    ///
    /// The first token is kept as the root when it is one; empty tokens are
    /// skipped and every other token is validated and pushed.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment is invalid or the sequence ascends past
    /// its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::segments::PathSegments;
    /// use segpath::PathGrammar;
    ///
    /// let generic = PathGrammar::generic();
    /// let segments = PathSegments::from_unchecked(["", "a", "", "b"], &generic).unwrap();
    /// assert_eq!(&segments[..], ["", "a", "b"]);
    ///
    /// let empty: [&str; 0] = [];
    /// assert_eq!(&PathSegments::from_unchecked(empty, &generic).unwrap()[..], ["."]);
    /// ```
    pub fn from_unchecked<I, S>(segments: I, grammar: &PathGrammar) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = segments.into_iter().peekable();

        let starts_with_root = match tokens.peek() {
            None => return Ok(Self::current()),
            Some(first) => grammar.is_root_segment(first.as_ref()),
        };

        let mut normalized = Self::current();
        if starts_with_root {
            if let Some(root) = tokens.next() {
                normalized.0[0] = root.as_ref().to_string();
            }
        }

        for token in tokens {
            let token = token.as_ref();
            if !token.is_empty() {
                normalized.push(token, grammar)?;
            }
        }

        Ok(normalized)
    }

    /// Validate `segment` and append it with the push rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] for an invalid segment, plus the
    /// errors of the push rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::segments::PathSegments;
    /// use segpath::PathGrammar;
    ///
    /// let generic = PathGrammar::generic();
    /// let mut segments = PathSegments::current();
    /// segments.push("..", &generic).unwrap();
    /// segments.push("a", &generic).unwrap();
    /// assert_eq!(&segments[..], ["..", "a"]);
    /// assert!(segments.push("a:b", &generic).is_err());
    /// ```
    pub fn push(&mut self, segment: &str, grammar: &PathGrammar) -> Result<()> {
        validate_segment(segment, grammar)?;
        self.push_normalized(segment, grammar)
    }

    /// Append a segment taken from another normalized sequence.
    ///
    /// - `.` is a no-op
    /// - `..` turns `['.']` into `['..']`, extends a run of `..`, or cancels
    ///   the last entry; it fails on a lone root
    /// - a root fails, roots only live at index 0
    /// - anything else is appended
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotAscendPastRoot`] or [`Error::UnexpectedRoot`].
    pub(crate) fn push_normalized(&mut self, segment: &str, grammar: &PathGrammar) -> Result<()> {
        if segment == CURRENT {
            return Ok(());
        }

        if segment == PARENT {
            let last = self.last_segment();
            if last == CURRENT {
                PARENT.clone_into(&mut self.0[0]);
            } else if last == PARENT {
                self.0.push(PARENT.to_string());
            } else if grammar.is_root_segment(last) {
                return Err(Error::CannotAscendPastRoot {
                    root: last.to_string(),
                });
            } else {
                self.0.pop();
            }
            return Ok(());
        }

        if grammar.is_root_segment(segment) {
            return Err(Error::UnexpectedRoot {
                segment: segment.to_string(),
            });
        }

        self.0.push(segment.to_string());
        Ok(())
    }

    /// Render the sequence with `separator`.
    ///
    /// A lone root is followed by the separator (`/`, `c:/`); otherwise the
    /// segments are joined verbatim (`./a/b`, `../a`, `/a/b`, `c:/a`).
    #[must_use]
    pub fn render(&self, grammar: &PathGrammar, separator: &str) -> String {
        if self.0.len() == 1 && grammar.is_root_segment(&self.0[0]) {
            format!("{}{separator}", self.0[0])
        } else {
            self.0.join(separator)
        }
    }

    /// The first segment: a root, `.` or `..`.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.0[0]
    }

    /// The last segment.
    #[must_use]
    pub fn last_segment(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    /// Consume the sequence and return its segments.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for PathSegments {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for PathSegments {
    fn default() -> Self {
        Self::current()
    }
}
