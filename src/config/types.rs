//! Core configuration types.
//! - MoveSpec is the ordered list of (source pattern, destination) pairs.
//! - MoveOptions/GlobOptions carry the knobs forwarded to the planner and matcher.
//! - TaskConfig bundles both with host-side logging settings.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::DEFAULT_CONCURRENCY;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// One line per move (default)
    #[default]
    Normal,
    /// Classification and planning details
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Options forwarded to the glob matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobOptions {
    pub case_sensitive: bool,
    /// `*` and `?` never match a separator.
    pub require_literal_separator: bool,
    /// Hidden entries only match a pattern segment that starts with a literal `.`.
    pub require_literal_leading_dot: bool,
    /// Rewrite trailing `/**/*` runs to a single `/*` before matching.
    pub collapse_recursive_suffix: bool,
}

impl Default for GlobOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: true,
            collapse_recursive_suffix: true,
        }
    }
}

impl GlobOptions {
    /// The subset understood by the `glob` crate.
    pub fn match_options(&self) -> glob::MatchOptions {
        glob::MatchOptions {
            case_sensitive: self.case_sensitive,
            require_literal_separator: self.require_literal_separator,
            require_literal_leading_dot: self.require_literal_leading_dot,
        }
    }
}

/// Runtime options for a relocation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOptions {
    pub glob: GlobOptions,
    /// If true, plan and log every move but do not modify the filesystem
    pub dry_run: bool,
    /// Upper bound on entity moves in flight for one pattern
    pub concurrency: usize,
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self {
            glob: GlobOptions::default(),
            dry_run: false,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Ordered (source pattern, destination) pairs.
///
/// Destinations stay strings so a trailing separator survives as a directory hint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSpec {
    entries: Vec<(String, String)>,
}

impl MoveSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pattern: impl Into<String>, destination: impl Into<String>) {
        self.entries.push((pattern.into(), destination.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, d)| (p.as_str(), d.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: Into<String>, D: Into<String>> FromIterator<(P, D)> for MoveSpec {
    fn from_iter<I: IntoIterator<Item = (P, D)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(p, d)| (p.into(), d.into()))
                .collect(),
        }
    }
}

/// Everything a host needs to run one relocation task.
#[derive(Debug, Clone, Default)]
pub struct TaskConfig {
    pub spec: MoveSpec,
    pub options: MoveOptions,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}
