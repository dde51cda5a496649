//! Error types for the segpath library.
//!
//! This module provides the error hierarchy for every path operation, using
//! `thiserror` for ergonomic error handling. Each failure has its own variant
//! so callers can branch on the cause instead of matching on messages.

use thiserror::Error;

/// Result type alias for operations that may fail with a segpath error.
///
/// # Examples
///
/// ```
/// use segpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the segpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw segment is empty or contains forbidden characters.
    #[error("segment {segment:?} is invalid")]
    InvalidSegment {
        /// The rejected segment.
        segment: String,
    },

    /// A root segment was pushed somewhere other than index 0.
    #[error("cannot push root segment {segment:?} into a path")]
    UnexpectedRoot {
        /// The root segment that was pushed.
        segment: String,
    },

    /// A `..` was pushed onto a path made of a single root.
    #[error("cannot ascend past root {root:?}")]
    CannotAscendPastRoot {
        /// The root the path was reduced to.
        root: String,
    },

    /// A supplied root is not an absolute path or root marker.
    #[error("invalid root {root:?}: {reason}")]
    InvalidRoot {
        /// The rejected root.
        root: String,
        /// Why the root was rejected.
        reason: String,
    },

    /// An absolute conversion was attempted on a non-normalized sequence.
    #[error("path is not normalized: unexpected first segment {first:?}")]
    NotNormalized {
        /// The first segment that broke the normalization invariant.
        first: String,
    },

    /// In strict joining, an operand after the first was absolute.
    #[error("only the first path can be absolute, operand {index} is absolute")]
    AbsoluteOperandNotFirst {
        /// Position of the offending operand in the joined list.
        index: usize,
    },

    /// An operation that needs at least one path received none.
    #[error("{operation} expects at least one path")]
    EmptyPathList {
        /// Name of the operation that was called.
        operation: &'static str,
    },

    /// No common base exists between two paths being related.
    #[error("cannot reach {to} from {from}")]
    Unreachable {
        /// The starting path.
        from: String,
        /// The target path.
        to: String,
    },

    /// The paths share no common base.
    #[error("paths have no common base")]
    NoCommonBase,

    /// The path has no parent directory.
    #[error("{path} has no parent directory")]
    NoParent {
        /// The rendered path.
        path: String,
    },

    /// The path has no basename (root or disallowed relative marker).
    #[error("{path} has no basename")]
    NoBasename {
        /// The rendered path.
        path: String,
    },

    /// The path has no stem and extension.
    #[error("{path} has no stem and extension")]
    NoStemExt {
        /// The rendered path.
        path: String,
    },

    /// A dynamic value could not be coerced into a path input.
    #[error("expected a string or an array of strings as path input, found {found}")]
    InvalidInputType {
        /// Description of the value that was found.
        found: String,
    },

    /// A grammar configuration is malformed.
    #[error("invalid grammar configuration for '{field}': {reason}")]
    InvalidConfigType {
        /// The configuration field at fault.
        field: String,
        /// Why the field was rejected.
        reason: String,
    },

    /// The working directory collaborator is unavailable.
    #[error("no process environment: {reason}")]
    NoProcessEnvironment {
        /// Why the environment could not be queried.
        reason: String,
    },

    /// A validation error occurred while reading an override.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A `file://` URL could not be built.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// An I/O error occurred while reading a grammar file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML grammar file could not be parsed.
    #[error("configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON grammar file could not be parsed.
    #[error("configuration error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if the error is caused by a missing result of an optional
    /// operation (no parent, no basename, no stem/ext, no common base,
    /// unreachable target).
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Error;
    ///
    /// let err = Error::NoParent { path: "/".to_string() };
    /// assert!(err.is_missing_result());
    /// ```
    #[must_use]
    pub fn is_missing_result(&self) -> bool {
        matches!(
            self,
            Self::NoParent { .. }
                | Self::NoBasename { .. }
                | Self::NoStemExt { .. }
                | Self::NoCommonBase
                | Self::Unreachable { .. }
        )
    }

    /// Check if the error comes from invalid path data (segments or roots).
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Error;
    ///
    /// let err = Error::InvalidSegment { segment: "a<b".to_string() };
    /// assert!(err.is_invalid_path());
    /// ```
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(
            self,
            Self::InvalidSegment { .. }
                | Self::UnexpectedRoot { .. }
                | Self::CannotAscendPastRoot { .. }
                | Self::InvalidRoot { .. }
                | Self::NotNormalized { .. }
        )
    }

    /// Check if the error comes from the configuration layer.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfigType { .. }
                | Self::Validation { .. }
                | Self::Io(_)
                | Self::Yaml(_)
                | Self::Json(_)
        )
    }
}
