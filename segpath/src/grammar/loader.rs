//! Grammar configuration loading.
//!
//! Grammars can be described in YAML or JSON. Files are dispatched on their
//! extension; anything that is not `.json` is read as YAML.

use std::fs;
use std::path::Path as FsPath;

use crate::error::Result;
use crate::grammar::schema::GrammarConfig;
use crate::grammar::types::PathGrammar;

/// Loads grammar configurations from strings and files.
///
/// # Examples
///
/// ```
/// use segpath::GrammarLoader;
///
/// let grammar = GrammarLoader::from_yaml_str("preset: windows\n").unwrap();
/// assert!(grammar.is_root_segment("c:"));
/// ```
pub struct GrammarLoader;

impl GrammarLoader {
    /// Parse a YAML configuration and compile it.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a pattern is invalid.
    pub fn from_yaml_str(content: &str) -> Result<PathGrammar> {
        Self::parse_yaml(content)?.compile()
    }

    /// Parse a JSON configuration and compile it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a pattern is invalid.
    pub fn from_json_str(content: &str) -> Result<PathGrammar> {
        Self::parse_json(content)?.compile()
    }

    /// Read, parse and compile a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be parsed, or
    /// describes an invalid grammar.
    pub fn load_file(path: &FsPath) -> Result<PathGrammar> {
        let config = Self::load_config(path)?;
        log::debug!("Loaded grammar configuration from {}", path.display());
        config.compile()
    }

    /// Read and parse a configuration file without compiling it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_config(path: &FsPath) -> Result<GrammarConfig> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_yaml(&content)
        }
    }

    fn parse_yaml(content: &str) -> Result<GrammarConfig> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn parse_json(content: &str) -> Result<GrammarConfig> {
        Ok(serde_json::from_str(content)?)
    }
}
