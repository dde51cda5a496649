//! Path relationship checking.
//!
//! This module determines how two normalized sequences relate in the
//! hierarchy: one containing the other, equal, or on separate branches.

use crate::segments::compare::{equivalent, is_sub_path_of};
use crate::segments::sequence::PathSegments;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use segpath::{Path, PathRelationship};
///
/// let parent = Path::new("/home/user").unwrap();
/// let child = Path::new("/home/user/project").unwrap();
///
/// assert_eq!(parent.relationship(&child), PathRelationship::Ancestor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    ///
    /// The second path starts with every segment of the first and has more.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths have identical segments.
    Same,

    /// Neither path is a prefix of the other.
    ///
    /// This includes an absolute and a relative path, or two paths under
    /// different roots.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two sequences.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::segments::PathSegments;
    /// use segpath::{PathGrammar, PathRelationship};
    ///
    /// let posix = PathGrammar::posix();
    /// let parse = |path: &str| PathSegments::parse(path, &posix).unwrap();
    ///
    /// let rel = PathRelationship::between(&parse("/a"), &parse("/a/b"));
    /// assert_eq!(rel, PathRelationship::Ancestor);
    ///
    /// let rel = PathRelationship::between(&parse("/a/b"), &parse("/a"));
    /// assert_eq!(rel, PathRelationship::Descendant);
    ///
    /// let rel = PathRelationship::between(&parse("/a/"), &parse("/a"));
    /// assert_eq!(rel, PathRelationship::Same);
    ///
    /// let rel = PathRelationship::between(&parse("/a"), &parse("/b"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(first: &PathSegments, second: &PathSegments) -> Self {
        if equivalent(first, second) {
            Self::Same
        } else if is_sub_path_of(second, first, false) {
            Self::Ancestor
        } else if is_sub_path_of(first, second, false) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    #[must_use]
    pub fn is_within(path: &PathSegments, directory: &PathSegments) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains(path: &PathSegments, other: &PathSegments) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathRelationship;
    ///
    /// let desc = PathRelationship::Ancestor.description("/a", "/a/b");
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, first: &str, second: &str) -> String {
        match self {
            Self::Ancestor => format!("{first} is an ancestor of {second}"),
            Self::Descendant => format!("{first} is a descendant of {second}"),
            Self::Same => format!("{first} and {second} are the same path"),
            Self::Unrelated => format!("{first} and {second} are unrelated paths"),
        }
    }
}
