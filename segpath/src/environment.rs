//! Access to the process environment.
//!
//! Path algorithms never query the process directly. Whenever a working
//! directory or the platform is needed, it is obtained through an
//! [`Environment`], so callers can inject fixed values.

use std::env;

use crate::error::{Error, Result};

/// The two capabilities path operations need from their host.
pub trait Environment {
    /// The current working directory as a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProcessEnvironment`] when it is unavailable.
    fn current_dir(&self) -> Result<String>;

    /// Returns `true` when running on Windows.
    fn is_windows(&self) -> bool;
}

/// Environment backed by the running process.
///
/// # Examples
///
/// ```
/// use segpath::{Environment, ProcessEnvironment};
///
/// let env = ProcessEnvironment;
/// assert_eq!(env.is_windows(), cfg!(windows));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn current_dir(&self) -> Result<String> {
        let cwd = env::current_dir().map_err(|e| Error::NoProcessEnvironment {
            reason: format!("cannot get current directory: {e}"),
        })?;
        cwd.into_os_string()
            .into_string()
            .map_err(|raw| Error::NoProcessEnvironment {
                reason: format!("current directory is not valid UTF-8: {raw:?}"),
            })
    }

    fn is_windows(&self) -> bool {
        cfg!(windows)
    }
}

/// Environment with injected values.
///
/// # Examples
///
/// ```
/// use segpath::{Environment, FixedEnvironment};
///
/// let env = FixedEnvironment::new("/srv/app", false);
/// assert_eq!(env.current_dir().unwrap(), "/srv/app");
///
/// let detached = FixedEnvironment::without_cwd(false);
/// assert!(detached.current_dir().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedEnvironment {
    cwd: Option<String>,
    windows: bool,
}

impl FixedEnvironment {
    /// Create an environment reporting `cwd` and the given platform.
    #[must_use]
    pub fn new(cwd: impl Into<String>, windows: bool) -> Self {
        Self {
            cwd: Some(cwd.into()),
            windows,
        }
    }

    /// Create an environment without a working directory.
    #[must_use]
    pub fn without_cwd(windows: bool) -> Self {
        Self { cwd: None, windows }
    }
}

impl Environment for FixedEnvironment {
    fn current_dir(&self) -> Result<String> {
        self.cwd.clone().ok_or_else(|| Error::NoProcessEnvironment {
            reason: "no working directory in this context".to_string(),
        })
    }

    fn is_windows(&self) -> bool {
        self.windows
    }
}
