//! Skip patterns for template rendering.
//! Files whose base name matches one of these glob patterns are still copied
//! into the new project, but their contents are left untouched.

use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::ffi::OsStr;

/// A compiled set of glob patterns matched against base names.
///
/// Supports `*`, `?` and `[...]` classes. Matching is case-sensitive on every
/// platform.
#[derive(Debug, Clone)]
pub struct SkipPatterns {
    globs: GlobSet,
}

impl SkipPatterns {
    /// Compiles the given patterns.
    ///
    /// # Errors
    /// * `Error::PatternError` if a pattern is not a valid glob
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            debug!("Adding skip pattern '{pattern}'");
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self { globs: builder.build()? })
    }

    /// A set that never matches.
    pub fn empty() -> Self {
        Self { globs: GlobSet::empty() }
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    /// Returns true if `name` matches any pattern.
    ///
    /// `name` is expected to be a base name; no path separator handling is done.
    pub fn should_skip<S: AsRef<OsStr>>(&self, name: S) -> bool {
        !self.globs.is_empty() && self.globs.is_match(name.as_ref())
    }
}

impl Default for SkipPatterns {
    fn default() -> Self {
        Self::empty()
    }
}

/// Returns true if `name` matches any of `patterns`.
///
/// Compiles `patterns` on every call, so it only suits a single check. Code
/// that tests many names, like a project walk, should build one
/// [`SkipPatterns`] and reuse it.
///
/// # Errors
/// * `Error::PatternError` if a pattern is not a valid glob
pub fn should_skip<S: AsRef<str>>(name: &str, patterns: &[S]) -> Result<bool> {
    Ok(SkipPatterns::new(patterns)?.should_skip(name))
}
