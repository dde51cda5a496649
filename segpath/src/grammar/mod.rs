//! Root grammars.
//!
//! A grammar tells the parser what a root looks like, what separates
//! segments, and which characters a segment may not contain. Three presets
//! ship with the crate; custom grammars are built from a [`GrammarConfig`],
//! usually loaded from YAML or JSON.
//!
//! # Examples
//!
//! ```
//! use segpath::{GrammarLoader, PathGrammar};
//!
//! let windows = PathGrammar::windows();
//! assert!(windows.is_root_segment("C:"));
//!
//! let custom = GrammarLoader::from_yaml_str("preset: windows\nseparator: /\n").unwrap();
//! assert_eq!(custom.separator(), "/");
//!
//! // A separator the grammar could not split on is refused
//! assert!(GrammarLoader::from_yaml_str("preset: posix\nseparator: \":\"\n").is_err());
//! ```

pub mod environment;
pub mod loader;
pub mod presets;
pub mod schema;
mod types;

pub use environment::GrammarEnvironment;
pub use loader::GrammarLoader;
pub use presets::GrammarPreset;
pub use schema::GrammarConfig;
pub use types::{PathGrammar, RootMatch};
