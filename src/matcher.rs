//! Glob expansion seam.
//! The classifier only needs raw match strings with directories marked by a
//! trailing separator; `GlobMatcher` provides that on top of the `glob` crate.

use anyhow::Result;
use std::path::MAIN_SEPARATOR;
use tracing::debug;

use crate::config::GlobOptions;
use crate::errors::GlobMoveError;

/// Expands a pattern against the filesystem.
///
/// Implementations return matches in a stable order; directories end with a
/// path separator so callers can tell them apart without another stat.
pub trait Matcher: Send + Sync {
    fn matches(&self, pattern: &str, options: &GlobOptions) -> Result<Vec<String>>;
}

/// Default matcher backed by `glob::glob_with`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobMatcher;

impl Matcher for GlobMatcher {
    fn matches(&self, pattern: &str, options: &GlobOptions) -> Result<Vec<String>> {
        let entries = glob::glob_with(pattern, options.match_options()).map_err(|source| {
            GlobMoveError::Match {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        let mut out = Vec::new();
        for entry in entries {
            let path = entry.map_err(|source| GlobMoveError::Traversal {
                pattern: pattern.to_string(),
                source,
            })?;
            let mut s = path
                .to_str()
                .ok_or_else(|| GlobMoveError::NonUtf8Path(path.clone()))?
                .to_string();
            if path.is_dir() {
                s.push(MAIN_SEPARATOR);
            }
            out.push(s);
        }

        debug!(pattern, matches = out.len(), "glob expanded");
        Ok(out)
    }
}
