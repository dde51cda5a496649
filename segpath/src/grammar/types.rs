//! The root grammar type.
//!
//! A [`PathGrammar`] is data: three regular expressions and the separator
//! emitted when rendering. The root pattern must be anchored at the start of
//! the input and its first capture group is the root text. The full match
//! may also consume a single trailing separator.

use std::fmt;

use regex::Regex;

use crate::environment::Environment;
use crate::error::{Error, Result};

/// A root found at the start of a string path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMatch<'p> {
    /// The root text (`""` for the POSIX root, `c:`, `\\host`).
    pub root: &'p str,
    /// Number of bytes consumed, including a trailing separator.
    pub consumed: usize,
}

/// Platform-specific rules for roots, separators and forbidden characters.
///
/// # Examples
///
/// ```
/// use segpath::PathGrammar;
///
/// let posix = PathGrammar::posix();
/// assert!(posix.is_root_segment(""));
/// assert!(!posix.is_root_segment("c:"));
///
/// let windows = PathGrammar::windows();
/// assert!(windows.is_root_segment("c:"));
/// assert!(windows.is_root_segment(r"\\network"));
/// ```
#[derive(Debug, Clone)]
pub struct PathGrammar {
    name: String,
    root: Regex,
    separator_pattern: Regex,
    forbidden: Regex,
    separator: String,
}

impl PathGrammar {
    /// Build a grammar from pattern sources.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfigType`] if a pattern does not compile, if
    /// the root pattern has no capture group, or if the separator is empty,
    /// not matched in full by the separator pattern, or allowed inside a
    /// segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathGrammar;
    ///
    /// let grammar = PathGrammar::new("slash-only", r"^()(?:/|$)", "/", r"[/]", "/").unwrap();
    /// assert_eq!(grammar.separator(), "/");
    ///
    /// assert!(PathGrammar::new("broken", r"^/", "/", r"[/]", "/").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        root_pattern: &str,
        separator_pattern: &str,
        forbidden_pattern: &str,
        separator: impl Into<String>,
    ) -> Result<Self> {
        let root = compile("root_pattern", root_pattern)?;
        if root.captures_len() < 2 {
            return Err(Error::InvalidConfigType {
                field: "root_pattern".into(),
                reason: "pattern must capture the root text in group 1".into(),
            });
        }

        let separator_regex = compile("separator_pattern", separator_pattern)?;
        if separator_regex.is_match("") {
            return Err(Error::InvalidConfigType {
                field: "separator_pattern".into(),
                reason: "pattern must not match the empty string".into(),
            });
        }

        let forbidden = compile("forbidden_pattern", forbidden_pattern)?;

        let separator = separator.into();
        if separator.is_empty() {
            return Err(Error::InvalidConfigType {
                field: "separator".into(),
                reason: "separator must not be empty".into(),
            });
        }

        // Rendered paths must split back into the same segments
        let whole_separator = compile("separator_pattern", &format!("^(?:{separator_pattern})$"))?;
        if !whole_separator.is_match(&separator) {
            return Err(Error::InvalidConfigType {
                field: "separator".into(),
                reason: format!("{separator:?} is not matched by separator_pattern"),
            });
        }
        if !forbidden.is_match(&separator) {
            return Err(Error::InvalidConfigType {
                field: "forbidden_pattern".into(),
                reason: format!("pattern must forbid the separator {separator:?}"),
            });
        }

        Ok(Self {
            name: name.into(),
            root,
            separator_pattern: separator_regex,
            forbidden,
            separator,
        })
    }

    /// Select the grammar matching the platform reported by `env`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{FixedEnvironment, PathGrammar};
    ///
    /// let env = FixedEnvironment::new("/home/user", false);
    /// assert_eq!(PathGrammar::current_platform(&env).separator(), "/");
    ///
    /// let env = FixedEnvironment::new(r"C:\Users", true);
    /// assert_eq!(PathGrammar::current_platform(&env).separator(), r"\");
    /// ```
    #[must_use]
    pub fn current_platform(env: &dyn Environment) -> std::sync::Arc<Self> {
        if env.is_windows() {
            Self::windows()
        } else {
            Self::posix()
        }
    }

    /// Name of the grammar, used in logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The separator emitted when rendering.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Source of the root pattern.
    #[must_use]
    pub fn root_pattern(&self) -> &str {
        self.root.as_str()
    }

    /// Source of the separator pattern.
    #[must_use]
    pub fn separator_pattern(&self) -> &str {
        self.separator_pattern.as_str()
    }

    /// Source of the forbidden characters pattern.
    #[must_use]
    pub fn forbidden_pattern(&self) -> &str {
        self.forbidden.as_str()
    }

    /// Match a root at the start of `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathGrammar;
    ///
    /// let generic = PathGrammar::generic();
    /// let found = generic.match_root("c:/a").unwrap();
    /// assert_eq!(found.root, "c:");
    /// assert_eq!(found.consumed, 3);
    ///
    /// assert!(generic.match_root("a/b").is_none());
    /// ```
    #[must_use]
    pub fn match_root<'p>(&self, path: &'p str) -> Option<RootMatch<'p>> {
        let captures = self.root.captures(path)?;
        let whole = captures.get(0)?;
        let root = captures.get(1)?;
        if whole.start() != 0 || root.start() != 0 {
            return None;
        }
        Some(RootMatch {
            root: root.as_str(),
            consumed: whole.end(),
        })
    }

    /// Returns `true` if `segment` is, in full, a root marker.
    #[must_use]
    pub fn is_root_segment(&self, segment: &str) -> bool {
        self.match_root(segment)
            .is_some_and(|found| found.root.len() == segment.len())
    }

    /// Returns `true` if `segment` contains a forbidden character.
    #[must_use]
    pub fn has_forbidden_chars(&self, segment: &str) -> bool {
        self.forbidden.is_match(segment)
    }

    /// Split `path` on the separator pattern. Empty pieces are kept.
    pub fn split<'g, 'p>(&'g self, path: &'p str) -> regex::Split<'g, 'p> {
        self.separator_pattern.split(path)
    }

    /// Returns `true` when both grammars use the same patterns and separator.
    ///
    /// Used as a fast path before comparing segment sequences.
    #[must_use]
    pub fn same_rules(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.root.as_str() == other.root.as_str()
                && self.separator_pattern.as_str() == other.separator_pattern.as_str()
                && self.forbidden.as_str() == other.forbidden.as_str()
                && self.separator == other.separator)
    }
}

impl PartialEq for PathGrammar {
    fn eq(&self, other: &Self) -> bool {
        self.same_rules(other)
    }
}

impl Eq for PathGrammar {}

impl fmt::Display for PathGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn compile(field: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::InvalidConfigType {
        field: field.to_string(),
        reason: e.to_string(),
    })
}
