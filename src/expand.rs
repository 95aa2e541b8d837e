//! Expansion classifier.
//! Runs the matcher for one pattern, splits the results into files and
//! directories, and decides whether the pattern named a single literal entity
//! (direct match) or a set of entities (pattern match).

use anyhow::Result;
use tracing::debug;

use crate::cleanup::cleanup;
use crate::config::GlobOptions;
use crate::matcher::Matcher;
use crate::normalize::{has_trailing_separator, normalize, strip_trailing_separator};

const RECURSIVE_SUFFIX: &str = "/**/*";

/// Classified matches for one pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    pub files: Vec<String>,
    pub dirs: Vec<String>,
    /// Exactly one match, equal to the pattern itself.
    pub is_direct: bool,
}

impl Expansion {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    /// The single matched entity of a direct match.
    pub fn direct_source(&self) -> Option<&str> {
        if !self.is_direct {
            return None;
        }
        self.files.first().or(self.dirs.first()).map(String::as_str)
    }
}

/// Rewrite any run of trailing `/**/*` into one `/*`.
///
/// The immediate children already cover everything below them, and the
/// overlap pass would discard the deeper matches anyway.
pub fn collapse_recursive_suffix(pattern: &str) -> String {
    let mut base = pattern;
    while let Some(stripped) = base.strip_suffix(RECURSIVE_SUFFIX) {
        base = stripped;
    }
    if base.len() == pattern.len() {
        pattern.to_string()
    } else {
        format!("{base}/*")
    }
}

/// Expand `pattern` and classify the result.
pub fn expand(pattern: &str, options: &GlobOptions, matcher: &dyn Matcher) -> Result<Expansion> {
    let search = if options.collapse_recursive_suffix {
        collapse_recursive_suffix(pattern)
    } else {
        pattern.to_string()
    };

    let raw = matcher.matches(&search, options)?;

    let mut files = Vec::new();
    let mut dirs = Vec::new();
    for entry in &raw {
        if has_trailing_separator(entry) {
            dirs.push(strip_trailing_separator(entry).to_string());
        } else {
            files.push(entry.clone());
        }
    }

    let is_direct = matches!(raw.as_slice(), [only] if normalize(only) == normalize(pattern));
    if !is_direct {
        (files, dirs) = cleanup(files, dirs);
    }

    debug!(
        pattern,
        search = %search,
        files = files.len(),
        dirs = dirs.len(),
        is_direct,
        "classified expansion"
    );
    Ok(Expansion {
        files,
        dirs,
        is_direct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Returns canned results and records the pattern it was asked for.
    struct Canned {
        results: Vec<String>,
        seen: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(results: &[&str]) -> Self {
            Self {
                results: results.iter().map(|s| s.to_string()).collect(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl Matcher for Canned {
        fn matches(&self, pattern: &str, _options: &GlobOptions) -> Result<Vec<String>> {
            self.seen.lock().unwrap().push(pattern.to_string());
            Ok(self.results.clone())
        }
    }

    #[test]
    fn collapses_trailing_recursive_runs() {
        assert_eq!(collapse_recursive_suffix("src/**/*"), "src/*");
        assert_eq!(collapse_recursive_suffix("src/**/*/**/*"), "src/*");
        assert_eq!(collapse_recursive_suffix("src/**/*.js"), "src/**/*.js");
        assert_eq!(collapse_recursive_suffix("src/*"), "src/*");
    }

    #[test]
    fn collapse_can_be_disabled() {
        let m = Canned::new(&[]);
        let opts = GlobOptions {
            collapse_recursive_suffix: false,
            ..GlobOptions::default()
        };
        expand("src/**/*", &opts, &m).unwrap();
        expand("src/**/*", &GlobOptions::default(), &m).unwrap();
        assert_eq!(*m.seen.lock().unwrap(), vec!["src/**/*", "src/*"]);
    }

    #[test]
    fn single_literal_match_is_direct() {
        let m = Canned::new(&["docs/"]);
        let exp = expand("./docs", &GlobOptions::default(), &m).unwrap();
        assert!(exp.is_direct);
        assert_eq!(exp.dirs, vec!["docs".to_string()]);
        assert!(exp.files.is_empty());
        assert_eq!(exp.direct_source(), Some("docs"));
    }

    #[test]
    fn metacharacters_resolving_to_themselves_are_direct() {
        let m = Canned::new(&["weird[1].txt"]);
        let exp = expand("weird[1].txt", &GlobOptions::default(), &m).unwrap();
        assert!(exp.is_direct);
    }

    #[test]
    fn single_wildcard_match_is_not_direct() {
        let m = Canned::new(&["src/only.js"]);
        let exp = expand("src/*.js", &GlobOptions::default(), &m).unwrap();
        assert!(!exp.is_direct);
        assert_eq!(exp.files, vec!["src/only.js".to_string()]);
        assert_eq!(exp.direct_source(), None);
    }

    #[test]
    fn multiple_matches_are_cleaned() {
        let m = Canned::new(&["src/a.js", "src/lib/", "src/lib/b.js", "src/lib/deep/"]);
        let exp = expand("src/**/*", &GlobOptions::default(), &m).unwrap();
        assert!(!exp.is_direct);
        assert_eq!(exp.files, vec!["src/a.js".to_string()]);
        assert_eq!(exp.dirs, vec!["src/lib".to_string()]);
    }

    #[test]
    fn no_matches_is_empty() {
        let m = Canned::new(&[]);
        let exp = expand("nothing/*", &GlobOptions::default(), &m).unwrap();
        assert!(exp.is_empty());
        assert!(!exp.is_direct);
    }
}
