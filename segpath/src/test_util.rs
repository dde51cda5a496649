//! Shared test utilities for unit tests.
//!
//! Provides a mock [`Environment`] so tests can assert whether, and how
//! often, the working directory is queried.

use crate::environment::Environment;
use crate::error::Result;

mockall::mock! {
    pub Env {}

    impl Environment for Env {
        fn current_dir(&self) -> Result<String>;
        fn is_windows(&self) -> bool;
    }
}

/// A mock environment reporting `cwd` exactly `times` times.
#[must_use]
pub fn env_with_cwd(cwd: &'static str, times: usize) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_current_dir()
        .times(times)
        .returning(move || Ok(cwd.to_string()));
    env.expect_is_windows().return_const(false);
    env
}
