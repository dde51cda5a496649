//! The `Path` value type.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use crate::environment::{Environment, ProcessEnvironment};
use crate::error::{Error, Result};
use crate::grammar::{GrammarConfig, GrammarEnvironment, PathGrammar};
use crate::path::input::PathInput;
use crate::segments::{self, PathRelationship, PathSegments, SpecialSegment, StemAndExt};

/// An immutable, normalized path paired with its grammar.
///
/// Every operation returns a new `Path` that shares the grammar of the
/// receiver. Inputs that are not already a `Path` are interpreted with the
/// receiver's grammar.
///
/// # Examples
///
/// ```
/// use segpath::Path;
///
/// let path = Path::new("/srv/app/../data/").unwrap();
/// assert_eq!(path.to_string(), "/srv/data");
/// assert_eq!(path.basename().unwrap(), "data");
/// assert_eq!(path.dirname().unwrap().to_string(), "/srv");
///
/// let file = path.concat(["logs", "today.log"]).unwrap();
/// assert_eq!(file.relative("/srv").unwrap().to_string(), "../../..");
/// ```
#[derive(Debug, Clone)]
pub struct Path {
    segments: PathSegments,
    grammar: Arc<PathGrammar>,
}

impl Path {
    /// Create a path from `input`.
    ///
    /// A borrowed `Path` is copied with its grammar; anything else is read
    /// with the generic grammar.
    ///
    /// # Errors
    ///
    /// Returns an error if the input contains an invalid segment or ascends
    /// past its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// assert_eq!(Path::new(r"c:\a\b").unwrap().to_string(), "c:/a/b");
    /// assert_eq!(Path::new(vec!["a", "..", "b"]).unwrap().to_string(), "./b");
    /// assert!(Path::new("/a/../..").is_err());
    /// ```
    pub fn new<'i>(input: impl Into<PathInput<'i>>) -> Result<Self> {
        match input.into() {
            PathInput::Path(path) => Ok(path.clone()),
            other => Self::with_grammar(other, PathGrammar::generic()),
        }
    }

    /// Create a path from `input` using `grammar`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input contains an invalid segment or ascends
    /// past its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{Path, PathGrammar};
    ///
    /// let path = Path::with_grammar("a:b/c", PathGrammar::posix()).unwrap();
    /// assert_eq!(path.basename().unwrap(), "c");
    /// assert!(Path::with_grammar("a:b/c", PathGrammar::windows()).is_err());
    /// ```
    pub fn with_grammar<'i>(
        input: impl Into<PathInput<'i>>,
        grammar: Arc<PathGrammar>,
    ) -> Result<Self> {
        let segments = coerce(input.into(), &grammar)?.into_owned();
        Ok(Self { segments, grammar })
    }

    /// The working directory of the current process.
    ///
    /// The grammar follows the host platform unless overridden through
    /// `SEGPATH_GRAMMAR` or `SEGPATH_GRAMMAR_FILE`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProcessEnvironment`] if the working directory is
    /// unavailable, or a grammar override error.
    pub fn cwd() -> Result<Self> {
        let env = ProcessEnvironment;
        let grammar = GrammarEnvironment::default_grammar(&env)?;
        Self::cwd_with_grammar(&env, grammar)
    }

    /// The working directory reported by `env`, read with the grammar of
    /// the platform `env` reports.
    ///
    /// Only `env` is consulted; process environment variables are not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProcessEnvironment`] if `env` has no working
    /// directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{FixedEnvironment, Path};
    ///
    /// let env = FixedEnvironment::new(r"C:\Users\me", true);
    /// let cwd = Path::cwd_with_env(&env).unwrap();
    /// assert_eq!(cwd.to_string(), r"C:\Users\me");
    /// ```
    pub fn cwd_with_env(env: &dyn Environment) -> Result<Self> {
        Self::cwd_with_grammar(env, PathGrammar::current_platform(env))
    }

    /// The working directory reported by `env`, read with `grammar`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProcessEnvironment`] if `env` has no working
    /// directory.
    pub fn cwd_with_grammar(env: &dyn Environment, grammar: Arc<PathGrammar>) -> Result<Self> {
        let cwd = env.current_dir()?;
        log::debug!("Working directory {cwd:?} read with the {grammar} grammar");
        Self::with_grammar(cwd.as_str(), grammar)
    }

    fn derive(&self, segments: PathSegments) -> Self {
        Self {
            segments,
            grammar: Arc::clone(&self.grammar),
        }
    }

    fn coerce<'i>(&self, input: impl Into<PathInput<'i>>) -> Result<Cow<'i, PathSegments>> {
        coerce(input.into(), &self.grammar)
    }

    fn coerce_all<'i, I>(&self, inputs: I) -> Result<Vec<Cow<'i, PathSegments>>>
    where
        I: IntoIterator,
        I::Item: Into<PathInput<'i>>,
    {
        inputs.into_iter().map(|input| self.coerce(input)).collect()
    }

    /// The normalized segments.
    #[must_use]
    pub fn segments(&self) -> &PathSegments {
        &self.segments
    }

    /// The grammar this path was read with.
    #[must_use]
    pub fn grammar(&self) -> &Arc<PathGrammar> {
        &self.grammar
    }

    /// Returns `true` if the path starts with a root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        segments::is_absolute(&self.segments, &self.grammar)
    }

    /// Returns `true` if the path is a lone root (`/`, `c:`, `\\host`).
    #[must_use]
    pub fn is_root(&self) -> bool {
        segments::is_root(&self.segments, &self.grammar)
    }

    /// Returns `true` if this path lies strictly under `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` cannot be read as a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// let path = Path::new("a/b/").unwrap();
    /// assert!(path.is_sub_path_of("a/").unwrap());
    /// assert!(!path.is_sub_path_of("a/b").unwrap());
    /// assert!(path.is_sub_path_of_or_equal("a/b").unwrap());
    /// ```
    pub fn is_sub_path_of<'i>(&self, parent: impl Into<PathInput<'i>>) -> Result<bool> {
        let parent = self.coerce(parent)?;
        Ok(segments::is_sub_path_of(&self.segments, &parent, false))
    }

    /// Returns `true` if this path lies under or equals `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` cannot be read as a path.
    pub fn is_sub_path_of_or_equal<'i>(&self, parent: impl Into<PathInput<'i>>) -> Result<bool> {
        let parent = self.coerce(parent)?;
        Ok(segments::is_sub_path_of(&self.segments, &parent, true))
    }

    /// Returns `true` if both paths have the same normalized segments.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` cannot be read as a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// let path = Path::new("/a/b/../c").unwrap();
    /// assert!(path.equals("/a/c").unwrap());
    /// assert!(!path.equals("/a/b").unwrap());
    /// ```
    pub fn equals<'i>(&self, other: impl Into<PathInput<'i>>) -> Result<bool> {
        let other = self.coerce(other)?;
        Ok(segments::equivalent(&self.segments, &other))
    }

    /// How this path relates to `other` in the hierarchy.
    #[must_use]
    pub fn relationship(&self, other: &Path) -> PathRelationship {
        PathRelationship::between(&self.segments, &other.segments)
    }

    /// The parent directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoParent`] for a lone root.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// assert_eq!(Path::new("/a").unwrap().dirname().unwrap().to_string(), "/");
    /// assert_eq!(Path::new(".").unwrap().dirname().unwrap().to_string(), "..");
    /// assert!(Path::new("/").unwrap().dirname().is_err());
    /// ```
    pub fn dirname(&self) -> Result<Self> {
        self.dirname_optional().ok_or_else(|| Error::NoParent {
            path: self.to_string(),
        })
    }

    /// The parent directory, or `None` for a lone root.
    #[must_use]
    pub fn dirname_optional(&self) -> Option<Self> {
        segments::dirname(&self.segments).map(|parent| self.derive(parent))
    }

    /// The last entry of the path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoBasename`] when the path ends with `.`, `..` or a
    /// root.
    pub fn basename(&self) -> Result<&str> {
        self.basename_with(None, &[])
    }

    /// The last entry of the path, or `None`.
    #[must_use]
    pub fn basename_optional(&self) -> Option<&str> {
        self.basename_with_optional(None, &[])
    }

    /// The last segment with `ext` stripped, accepting the `allowed` specials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoBasename`] when the last segment is a special not
    /// listed in `allowed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{Path, SpecialSegment};
    ///
    /// assert_eq!(Path::new("a.txt").unwrap().basename_with(Some(".txt"), &[]).unwrap(), "a");
    ///
    /// let root = Path::new("/").unwrap();
    /// assert!(root.basename().is_err());
    /// assert_eq!(root.basename_with(None, &[SpecialSegment::Root]).unwrap(), "/");
    /// ```
    pub fn basename_with(&self, ext: Option<&str>, allowed: &[SpecialSegment]) -> Result<&str> {
        self.basename_with_optional(ext, allowed)
            .ok_or_else(|| Error::NoBasename {
                path: self.to_string(),
            })
    }

    /// Like [`Path::basename_with`], returning `None` instead of failing.
    #[must_use]
    pub fn basename_with_optional(
        &self,
        ext: Option<&str>,
        allowed: &[SpecialSegment],
    ) -> Option<&str> {
        segments::basename(&self.segments, ext, allowed, &self.grammar)
    }

    /// The basename split on its last dot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoStemExt`] when the path has no basename.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// let parts = Path::new("a.").unwrap().stem_and_ext().unwrap();
    /// assert_eq!((parts.stem.as_str(), parts.ext.as_str()), ("a", "."));
    ///
    /// let parts = Path::new(".a").unwrap().stem_and_ext().unwrap();
    /// assert_eq!((parts.stem.as_str(), parts.ext.as_str()), (".a", ""));
    /// ```
    pub fn stem_and_ext(&self) -> Result<StemAndExt> {
        self.stem_and_ext_optional()
            .ok_or_else(|| Error::NoStemExt {
                path: self.to_string(),
            })
    }

    /// The basename split on its last dot, or `None`.
    #[must_use]
    pub fn stem_and_ext_optional(&self) -> Option<StemAndExt> {
        segments::stem_and_ext(&self.segments, &self.grammar)
    }

    /// The longest prefix shared by this path and all `others`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCommonBase`] when the paths disagree on their first
    /// segment, or an error if an input cannot be read as a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// let path = Path::new("/a/b").unwrap();
    /// assert_eq!(path.common_base(["/a/c", "/a/d"]).unwrap().to_string(), "/a");
    /// assert_eq!(path.common_base(["/c/d"]).unwrap().to_string(), "/");
    /// assert!(path.common_base(["a/c"]).is_err());
    /// ```
    pub fn common_base<'i, I>(&self, others: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<PathInput<'i>>,
    {
        self.common_base_optional(others)?
            .ok_or(Error::NoCommonBase)
    }

    /// Like [`Path::common_base`], returning `None` without a common base.
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be read as a path.
    pub fn common_base_optional<'i, I>(&self, others: I) -> Result<Option<Self>>
    where
        I: IntoIterator,
        I::Item: Into<PathInput<'i>>,
    {
        let others = self.coerce_all(others)?;
        let mut all = Vec::with_capacity(others.len() + 1);
        all.push(&self.segments);
        all.extend(others.iter().map(|other| &**other));

        Ok(segments::common_base(&all)?.map(|base| self.derive(base)))
    }

    /// The relative path leading from this path to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unreachable`] when the paths share no base, or an
    /// error if `to` cannot be read as a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// let from = Path::new("a/b/").unwrap();
    /// assert_eq!(from.relative("a/d").unwrap().to_string(), "../d");
    /// assert_eq!(from.relative("c/d").unwrap().to_string(), "../../c/d");
    /// assert!(from.relative("/a/d").is_err());
    /// ```
    pub fn relative<'i>(&self, to: impl Into<PathInput<'i>>) -> Result<Self> {
        let to = self.coerce(to)?;
        self.relative_to_segments(&to)?
            .ok_or_else(|| Error::Unreachable {
                from: self.to_string(),
                to: to.render(&self.grammar, self.grammar.separator()),
            })
    }

    /// Like [`Path::relative`], returning `None` when `to` is unreachable.
    ///
    /// # Errors
    ///
    /// Returns an error if `to` cannot be read as a path.
    pub fn relative_optional<'i>(&self, to: impl Into<PathInput<'i>>) -> Result<Option<Self>> {
        let to = self.coerce(to)?;
        self.relative_to_segments(&to)
    }

    fn relative_to_segments(&self, to: &PathSegments) -> Result<Option<Self>> {
        Ok(segments::relative(&self.segments, to, &self.grammar)?.map(|rel| self.derive(rel)))
    }

    /// Append `others` to this path. Only this path may be absolute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AbsoluteOperandNotFirst`] if an operand is absolute,
    /// or an error if the result ascends past its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// let path = Path::new("/").unwrap();
    /// assert_eq!(path.concat(["c/d"]).unwrap().to_string(), "/c/d");
    /// assert!(path.concat(["/c/d"]).is_err());
    /// ```
    pub fn concat<'i, I>(&self, others: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<PathInput<'i>>,
    {
        self.join(others, true)
    }

    /// Append `others` to this path, dropping the roots of absolute operands.
    ///
    /// # Errors
    ///
    /// Returns an error if an operand cannot be read or the result ascends
    /// past its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// let path = Path::new("/a").unwrap();
    /// assert_eq!(path.concat_lenient(["/b"]).unwrap().to_string(), "/a/b");
    /// ```
    pub fn concat_lenient<'i, I>(&self, others: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<PathInput<'i>>,
    {
        self.join(others, false)
    }

    fn join<'i, I>(&self, others: I, strict: bool) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<PathInput<'i>>,
    {
        let others = self.coerce_all(others)?;
        let mut all = Vec::with_capacity(others.len() + 1);
        all.push(&self.segments);
        all.extend(others.iter().map(|other| &**other));

        Ok(self.derive(segments::join_many(&all, strict, &self.grammar)?))
    }

    /// Resolve this path against the absolute `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoot`] if `root` is not absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// assert_eq!(Path::new("a").unwrap().resolve("c:").unwrap().to_string(), "c:/a");
    /// assert_eq!(Path::new("b:/a").unwrap().resolve("c:").unwrap().to_string(), "b:/a");
    /// assert!(Path::new("/a/b").unwrap().resolve("a").is_err());
    /// ```
    pub fn resolve<'i>(&self, root: impl Into<PathInput<'i>>) -> Result<Self> {
        let root = self.coerce(root)?;
        Ok(self.derive(segments::resolve(&self.segments, &root, &self.grammar)?))
    }

    /// Resolve this path against the process working directory.
    ///
    /// # Errors
    ///
    /// See [`Path::resolve_with_env`].
    pub fn resolve_from_cwd(&self) -> Result<Self> {
        self.resolve_with_env(&ProcessEnvironment)
    }

    /// Resolve this path against the working directory of `env`.
    ///
    /// Absolute paths are returned as-is without consulting `env`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProcessEnvironment`] if `env` has no working
    /// directory, or [`Error::InvalidRoot`] if it is not absolute under this
    /// path's grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{FixedEnvironment, Path};
    ///
    /// let env = FixedEnvironment::new("/home/me", false);
    /// let path = Path::new("../you").unwrap();
    /// assert_eq!(path.resolve_with_env(&env).unwrap().to_string(), "/home/you");
    /// ```
    pub fn resolve_with_env(&self, env: &dyn Environment) -> Result<Self> {
        if self.is_absolute() {
            return Ok(self.clone());
        }
        let cwd = env.current_dir()?;
        log::debug!("Resolving {self} against working directory {cwd:?}");
        self.resolve(cwd.as_str())
    }

    /// A copy of this path with another grammar.
    #[must_use]
    pub fn clone_with_grammar(&self, grammar: Arc<PathGrammar>) -> Self {
        Self {
            segments: self.segments.clone(),
            grammar,
        }
    }

    /// Anchor this path on the root of `root`.
    ///
    /// Leading `..` segments are dropped: `../../a` on `/` gives `/a`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoot`] if `root` is not absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// let path = Path::new("../../a").unwrap();
    /// assert_eq!(path.make_absolute("/").unwrap().to_string(), "/a");
    /// assert!(Path::new("a").unwrap().make_absolute("b").is_err());
    /// ```
    pub fn make_absolute<'i>(&self, root: impl Into<PathInput<'i>>) -> Result<Self> {
        let root = self.coerce(root)?;
        Ok(self.derive(segments::make_absolute(
            &self.segments,
            root.start(),
            &self.grammar,
        )?))
    }

    /// Anchor this path on the root of the process working directory.
    ///
    /// # Errors
    ///
    /// See [`Path::make_absolute_with_env`].
    pub fn make_absolute_from_cwd(&self) -> Result<Self> {
        self.make_absolute_with_env(&ProcessEnvironment)
    }

    /// Anchor this path on the root of the working directory of `env`.
    ///
    /// Absolute paths are returned as-is without consulting `env`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProcessEnvironment`] if `env` has no working
    /// directory, or [`Error::InvalidRoot`] if it is not absolute.
    pub fn make_absolute_with_env(&self, env: &dyn Environment) -> Result<Self> {
        if self.is_absolute() {
            return Ok(self.clone());
        }
        let cwd = env.current_dir()?;
        log::debug!("Anchoring {self} on the root of {cwd:?}");
        self.make_absolute(cwd.as_str())
    }

    /// Replace a leading root with `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// assert_eq!(Path::new("c:/a").unwrap().make_relative().to_string(), "./a");
    /// assert_eq!(Path::new("/").unwrap().make_relative().to_string(), ".");
    /// ```
    #[must_use]
    pub fn make_relative(&self) -> Self {
        self.derive(segments::make_relative(&self.segments, &self.grammar))
    }

    /// Render with `separator` instead of the grammar's.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// assert_eq!(Path::new("a/b").unwrap().to_string_with("\\"), r".\a\b");
    /// ```
    #[must_use]
    pub fn to_string_with(&self, separator: &str) -> String {
        self.segments.render(&self.grammar, separator)
    }

    /// A `file://` URL for this path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if the URL cannot be built.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Path;
    ///
    /// let url = Path::new("/a/b").unwrap().to_file_url().unwrap();
    /// assert_eq!(url.as_str(), "file:///a/b");
    /// ```
    pub fn to_file_url(&self) -> Result<Url> {
        let mut url = Url::parse("file://")?;
        url.set_path(&self.to_string_with("/"));
        Ok(url)
    }
}

/// Read `input` as segments under `grammar`, borrowing from a `Path` input.
fn coerce<'i>(input: PathInput<'i>, grammar: &PathGrammar) -> Result<Cow<'i, PathSegments>> {
    match input {
        PathInput::Text(text) => PathSegments::parse(text, grammar).map(Cow::Owned),
        PathInput::Segments(raw) => PathSegments::from_unchecked(raw, grammar).map(Cow::Owned),
        PathInput::Path(path) => Ok(Cow::Borrowed(&path.segments)),
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.render(&self.grammar, self.grammar.separator()))
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments && self.grammar.same_rules(&other.grammar)
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Serialized form: the rendered path with the grammar that reads it back.
#[derive(Deserialize)]
#[serde(untagged)]
enum SerializedPath {
    Text(String),
    WithGrammar {
        path: String,
        grammar: GrammarConfig,
    },
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Path", 2)?;
        state.serialize_field("path", &self.to_string())?;
        state.serialize_field("grammar", &GrammarConfig::from_grammar(&self.grammar))?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let path = match SerializedPath::deserialize(deserializer)? {
            SerializedPath::Text(text) => Self::new(text.as_str()),
            SerializedPath::WithGrammar { path, grammar } => grammar
                .to_grammar()
                .and_then(|grammar| Self::with_grammar(path.as_str(), grammar)),
        };
        path.map_err(serde::de::Error::custom)
    }
}
