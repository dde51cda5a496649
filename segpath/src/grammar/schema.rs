//! Grammar configuration schema.
//!
//! A configuration names a preset to start from and optionally overrides any
//! of its patterns. Fields left out keep the preset's value.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grammar::presets::GrammarPreset;
use crate::grammar::types::PathGrammar;

/// Serializable description of a grammar.
///
/// # Examples
///
/// ```
/// use segpath::{GrammarConfig, GrammarPreset};
///
/// let config = GrammarConfig {
///     preset: Some(GrammarPreset::Posix),
///     separator_pattern: Some("[/|]".to_string()),
///     forbidden_pattern: Some(r"[/|\x00]".to_string()),
///     separator: Some("|".to_string()),
///     ..Default::default()
/// };
/// let grammar = config.compile().unwrap();
/// assert_eq!(grammar.separator(), "|");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GrammarConfig {
    /// Display name of the compiled grammar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Preset providing the patterns that are not overridden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<GrammarPreset>,

    /// Anchored root pattern; group 1 captures the root text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_pattern: Option<String>,

    /// Pattern matching a separator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator_pattern: Option<String>,

    /// Pattern matching any character forbidden in a segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forbidden_pattern: Option<String>,

    /// Separator emitted when rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

impl GrammarConfig {
    /// Configuration equivalent to a preset.
    #[must_use]
    pub fn from_preset(preset: GrammarPreset) -> Self {
        Self {
            preset: Some(preset),
            ..Self::default()
        }
    }

    /// Configuration describing `grammar`.
    ///
    /// A built-in grammar is described by its preset alone; any other
    /// grammar by all of its patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{GrammarConfig, GrammarPreset, PathGrammar};
    ///
    /// let config = GrammarConfig::from_grammar(&PathGrammar::windows());
    /// assert_eq!(config, GrammarConfig::from_preset(GrammarPreset::Windows));
    /// ```
    #[must_use]
    pub fn from_grammar(grammar: &PathGrammar) -> Self {
        let preset = [
            GrammarPreset::Posix,
            GrammarPreset::Windows,
            GrammarPreset::Generic,
        ]
        .into_iter()
        .find(|preset| {
            grammar.name() == preset.to_string() && grammar.same_rules(&preset.grammar())
        });

        match preset {
            Some(preset) => Self::from_preset(preset),
            None => Self {
                name: Some(grammar.name().to_string()),
                preset: None,
                root_pattern: Some(grammar.root_pattern().to_string()),
                separator_pattern: Some(grammar.separator_pattern().to_string()),
                forbidden_pattern: Some(grammar.forbidden_pattern().to_string()),
                separator: Some(grammar.separator().to_string()),
            },
        }
    }

    /// Returns `true` if the configuration only names a preset.
    #[must_use]
    pub fn is_plain_preset(&self) -> bool {
        self.name.is_none()
            && self.root_pattern.is_none()
            && self.separator_pattern.is_none()
            && self.forbidden_pattern.is_none()
            && self.separator.is_none()
    }

    /// Compile the configuration into a grammar.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfigType`] if a pattern is invalid.
    pub fn compile(&self) -> Result<PathGrammar> {
        let preset = self.preset.unwrap_or_default();
        let (root, separator_pattern, forbidden, separator) = preset.sources();

        let name = match &self.name {
            Some(name) => name.clone(),
            None if self.is_plain_preset() => preset.to_string(),
            None => format!("custom-{preset}"),
        };

        PathGrammar::new(
            name,
            self.root_pattern.as_deref().unwrap_or(root),
            self.separator_pattern.as_deref().unwrap_or(separator_pattern),
            self.forbidden_pattern.as_deref().unwrap_or(forbidden),
            self.separator.as_deref().unwrap_or(separator),
        )
    }

    /// The grammar this configuration describes, shared with the preset
    /// when nothing is overridden.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfigType`] if a pattern is invalid.
    pub fn to_grammar(&self) -> Result<Arc<PathGrammar>> {
        if self.is_plain_preset() {
            return Ok(self.preset.unwrap_or_default().grammar());
        }
        self.compile().map(Arc::new)
    }
}
