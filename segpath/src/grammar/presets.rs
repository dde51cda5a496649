//! Built-in grammars.
//!
//! The three presets are compiled once and shared for the lifetime of the
//! process. They are never mutated after construction.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::grammar::types::PathGrammar;

const POSIX_ROOT: &str = r"^()(?:/|$)";
const WINDOWS_ROOT: &str = r#"^((?:[a-zA-Z]:|\\\\[^\\/<>:"|?*]+))(?:[\\/]|$)"#;
const GENERIC_ROOT: &str = r#"^((?:[a-zA-Z]:|\\\\[^\\/<>:"|?*]+)?)(?:[\\/]|$)"#;

const POSIX_SEPARATOR: &str = "/";
const ANY_SLASH_SEPARATOR: &str = r"[\\/]";

const POSIX_FORBIDDEN: &str = r"[/\x00]";
const WINDOWS_FORBIDDEN: &str = r#"[<>:"/\\|?*\x00-\x1F]"#;

lazy_static! {
    static ref POSIX: Arc<PathGrammar> = Arc::new(GrammarPreset::Posix.build());
    static ref WINDOWS: Arc<PathGrammar> = Arc::new(GrammarPreset::Windows.build());
    static ref GENERIC: Arc<PathGrammar> = Arc::new(GrammarPreset::Generic.build());
}

/// Names of the built-in grammars.
///
/// # Examples
///
/// ```
/// use segpath::GrammarPreset;
///
/// assert_eq!(GrammarPreset::parse("Windows").unwrap(), GrammarPreset::Windows);
/// assert_eq!(GrammarPreset::Posix.to_string(), "posix");
/// assert!(GrammarPreset::parse("amiga").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammarPreset {
    /// `/` root and separator.
    Posix,
    /// Drive letter and UNC roots, `\` or `/` separators, `\` emitted.
    Windows,
    /// Every root of the two others, `/` emitted.
    #[default]
    Generic,
}

impl GrammarPreset {
    /// Parses a preset name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            "generic" => Ok(Self::Generic),
            _ => Err(format!("invalid grammar preset: {s}")),
        }
    }

    /// The shared grammar for this preset.
    #[must_use]
    pub fn grammar(self) -> Arc<PathGrammar> {
        match self {
            Self::Posix => Arc::clone(&POSIX),
            Self::Windows => Arc::clone(&WINDOWS),
            Self::Generic => Arc::clone(&GENERIC),
        }
    }

    /// Pattern sources of this preset: root, separator, forbidden, emitted
    /// separator.
    #[must_use]
    pub(crate) fn sources(self) -> (&'static str, &'static str, &'static str, &'static str) {
        match self {
            Self::Posix => (POSIX_ROOT, POSIX_SEPARATOR, POSIX_FORBIDDEN, "/"),
            Self::Windows => (WINDOWS_ROOT, ANY_SLASH_SEPARATOR, WINDOWS_FORBIDDEN, "\\"),
            Self::Generic => (GENERIC_ROOT, ANY_SLASH_SEPARATOR, WINDOWS_FORBIDDEN, "/"),
        }
    }

    fn build(self) -> PathGrammar {
        let (root, separator_pattern, forbidden, separator) = self.sources();
        PathGrammar::new(self.to_string(), root, separator_pattern, forbidden, separator)
            .expect("built-in grammar patterns are valid")
    }
}

impl fmt::Display for GrammarPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

impl FromStr for GrammarPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PathGrammar {
    /// The POSIX grammar.
    #[must_use]
    pub fn posix() -> Arc<Self> {
        GrammarPreset::Posix.grammar()
    }

    /// The Windows grammar.
    #[must_use]
    pub fn windows() -> Arc<Self> {
        GrammarPreset::Windows.grammar()
    }

    /// The lenient grammar accepting every POSIX and Windows root.
    #[must_use]
    pub fn generic() -> Arc<Self> {
        GrammarPreset::Generic.grammar()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_shared() {
        assert!(Arc::ptr_eq(&PathGrammar::posix(), &PathGrammar::posix()));
        assert!(Arc::ptr_eq(&PathGrammar::generic(), &GrammarPreset::Generic.grammar()));
    }

    #[test]
    fn test_preset_separators() {
        assert_eq!(PathGrammar::posix().separator(), "/");
        assert_eq!(PathGrammar::windows().separator(), "\\");
        assert_eq!(PathGrammar::generic().separator(), "/");
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(PathGrammar::posix().name(), "posix");
        assert_eq!(PathGrammar::windows().name(), "windows");
        assert_eq!(PathGrammar::generic().name(), "generic");
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!(GrammarPreset::parse("posix").unwrap(), GrammarPreset::Posix);
        assert_eq!(GrammarPreset::parse("GENERIC").unwrap(), GrammarPreset::Generic);
        assert_eq!("windows".parse::<GrammarPreset>().unwrap(), GrammarPreset::Windows);
        assert!(GrammarPreset::parse("").is_err());
    }

    #[test]
    fn test_preset_default() {
        assert_eq!(GrammarPreset::default(), GrammarPreset::Generic);
    }
}
