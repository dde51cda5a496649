//! Environment variable overrides for the default grammar.
//!
//! - `SEGPATH_GRAMMAR`: a preset name (`posix`, `windows`, `generic`)
//! - `SEGPATH_GRAMMAR_FILE`: a YAML or JSON grammar file
//!
//! The file wins when both are set. Without overrides the grammar follows
//! the platform reported by the [`Environment`].
//!
//! Overrides are opt-in: [`crate::Path::cwd`] applies them, while
//! [`crate::Path::cwd_with_env`] only asks the injected environment.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::grammar::loader::GrammarLoader;
use crate::grammar::presets::GrammarPreset;
use crate::grammar::types::PathGrammar;

/// Name of the preset override variable.
pub const GRAMMAR_VAR: &str = "SEGPATH_GRAMMAR";

/// Name of the grammar file override variable.
pub const GRAMMAR_FILE_VAR: &str = "SEGPATH_GRAMMAR_FILE";

/// Resolves the default grammar from environment variables.
///
/// # Examples
///
/// ```no_run
/// use segpath::{GrammarEnvironment, ProcessEnvironment};
///
/// let grammar = GrammarEnvironment::default_grammar(&ProcessEnvironment).unwrap();
/// println!("using {grammar}");
/// ```
pub struct GrammarEnvironment;

impl GrammarEnvironment {
    /// The grammar to use when the caller supplies none.
    ///
    /// # Errors
    ///
    /// Returns an error if an override variable holds an invalid value or
    /// names an unreadable grammar file.
    pub fn default_grammar(platform: &dyn Environment) -> Result<Arc<PathGrammar>> {
        if let Some(grammar) = Self::override_grammar()? {
            return Ok(grammar);
        }
        Ok(PathGrammar::current_platform(platform))
    }

    /// The grammar selected by environment variables, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if an override variable holds an invalid value.
    pub fn override_grammar() -> Result<Option<Arc<PathGrammar>>> {
        if let Ok(file) = env::var(GRAMMAR_FILE_VAR) {
            if file.is_empty() {
                return Err(Error::Validation {
                    field: GRAMMAR_FILE_VAR.into(),
                    message: "Must name a grammar file".into(),
                });
            }
            log::debug!("{GRAMMAR_FILE_VAR} selects grammar file {file}");
            let grammar = GrammarLoader::load_file(&PathBuf::from(file))?;
            return Ok(Some(Arc::new(grammar)));
        }

        if let Ok(name) = env::var(GRAMMAR_VAR) {
            let preset = GrammarPreset::parse(&name).map_err(|message| Error::Validation {
                field: GRAMMAR_VAR.into(),
                message,
            })?;
            log::debug!("{GRAMMAR_VAR} selects the {preset} grammar");
            return Ok(Some(preset.grammar()));
        }

        Ok(None)
    }
}
