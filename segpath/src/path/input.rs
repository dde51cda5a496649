//! Accepted forms of path input.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::path::types::Path;

/// Anything that can stand for a path.
///
/// Strings are parsed, segment lists are normalized, and an existing
/// [`Path`] is borrowed as-is together with its grammar.
///
/// # Examples
///
/// ```
/// use segpath::{Path, PathInput};
///
/// let base = Path::new("/a").unwrap();
/// let inputs: Vec<PathInput> = vec!["/a".into(), vec!["", "a"].into(), (&base).into()];
/// for input in inputs {
///     assert!(base.equals(input).unwrap());
/// }
/// ```
#[derive(Debug, Clone)]
pub enum PathInput<'a> {
    /// A string path such as `a/b` or `c:\a`.
    Text(&'a str),
    /// Raw segments, as produced by splitting a string on its separator.
    Segments(Vec<&'a str>),
    /// An existing path.
    Path(&'a Path),
}

impl<'a> PathInput<'a> {
    /// Coerce a dynamic JSON value.
    ///
    /// Strings become [`PathInput::Text`] and arrays of strings become
    /// [`PathInput::Segments`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInputType`] for any other value.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathInput;
    /// use serde_json::json;
    ///
    /// let value = json!(["a", "b"]);
    /// assert!(matches!(PathInput::from_json(&value).unwrap(), PathInput::Segments(_)));
    ///
    /// assert!(PathInput::from_json(&json!(42)).is_err());
    /// ```
    pub fn from_json(value: &'a Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Self::Text(text)),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().ok_or_else(|| invalid_input(item)))
                .collect::<Result<Vec<_>>>()
                .map(Self::Segments),
            other => Err(invalid_input(other)),
        }
    }
}

fn invalid_input(value: &Value) -> Error {
    let found = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    Error::InvalidInputType {
        found: found.to_string(),
    }
}

impl<'a> From<&'a str> for PathInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for PathInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<Vec<&'a str>> for PathInput<'a> {
    fn from(segments: Vec<&'a str>) -> Self {
        Self::Segments(segments)
    }
}

impl<'a> From<&[&'a str]> for PathInput<'a> {
    fn from(segments: &[&'a str]) -> Self {
        Self::Segments(segments.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for PathInput<'a> {
    fn from(segments: [&'a str; N]) -> Self {
        Self::Segments(segments.to_vec())
    }
}

impl<'a> From<&'a [String]> for PathInput<'a> {
    fn from(segments: &'a [String]) -> Self {
        Self::Segments(segments.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for PathInput<'a> {
    fn from(segments: &'a Vec<String>) -> Self {
        Self::from(segments.as_slice())
    }
}

impl<'a> From<&'a Path> for PathInput<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_string() {
        let value = json!("a/b");
        assert!(matches!(PathInput::from_json(&value).unwrap(), PathInput::Text("a/b")));
    }

    #[test]
    fn test_from_json_segments() {
        let value = json!(["", "a", "b"]);
        let PathInput::Segments(segments) = PathInput::from_json(&value).unwrap() else {
            panic!("expected segments");
        };
        assert_eq!(segments, vec!["", "a", "b"]);
    }

    #[test]
    fn test_from_json_rejects_other_values() {
        for value in [json!(null), json!(1), json!({"path": "a"}), json!(["a", 2])] {
            let err = PathInput::from_json(&value).unwrap_err();
            assert!(matches!(err, Error::InvalidInputType { .. }), "{value}");
        }
    }

    #[test]
    fn test_from_json_reports_found_type() {
        let err = PathInput::from_json(&json!(true)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected a string or an array of strings as path input, found a boolean"
        );
    }

    #[test]
    fn test_conversions() {
        let owned = vec!["a".to_string(), "b".to_string()];
        assert!(matches!(PathInput::from(&owned), PathInput::Segments(ref s) if s == &["a", "b"]));
        assert!(matches!(PathInput::from(["a"]), PathInput::Segments(_)));
        let text = String::from("x");
        assert!(matches!(PathInput::from(&text), PathInput::Text("x")));
    }
}
