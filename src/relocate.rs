//! Orchestrator.
//! Runs the (pattern, destination) pairs of a [`MoveSpec`] strictly one after
//! another: expand, plan, execute. Pattern N+1 is not expanded before every
//! move of pattern N has finished. The first failure ends the run; moves that
//! already completed stay where they are.

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::config::{MoveOptions, MoveSpec};
use crate::errors::GlobMoveError;
use crate::execute::execute_plans;
use crate::expand::expand;
use crate::fs_ops::{DirEnsurer, FsDirEnsurer, FsMover, Mover};
use crate::matcher::{GlobMatcher, Matcher};
use crate::normalize::normalize;
use crate::plan::{MovePlan, plan_direct, plan_pattern};

/// A configured run over injected collaborators.
pub struct Relocator<'a> {
    options: &'a MoveOptions,
    matcher: &'a dyn Matcher,
    dirs: &'a dyn DirEnsurer,
    mover: &'a dyn Mover,
}

impl<'a> Relocator<'a> {
    pub fn new(
        options: &'a MoveOptions,
        matcher: &'a dyn Matcher,
        dirs: &'a dyn DirEnsurer,
        mover: &'a dyn Mover,
    ) -> Self {
        Self {
            options,
            matcher,
            dirs,
            mover,
        }
    }

    /// Process every entry in order and return the plans that were executed
    /// (in dry-run mode: the plans that would have been).
    pub fn run(&self, spec: &MoveSpec) -> Result<Vec<MovePlan>> {
        let mut done = Vec::new();
        for (pattern, destination) in spec.iter() {
            match self.run_one(pattern, destination) {
                Ok(plans) => done.extend(plans),
                Err(e) => {
                    if let Some(typed) = e.downcast_ref::<GlobMoveError>() {
                        error!(code = typed.code(), kind = typed.kind(), pattern, "{e:#}");
                    } else {
                        error!(pattern, "{e:#}");
                    }
                    return Err(e);
                }
            }
        }
        info!(moves = done.len(), dry_run = self.options.dry_run, "run complete");
        Ok(done)
    }

    fn run_one(&self, pattern: &str, destination: &str) -> Result<Vec<MovePlan>> {
        let normalized = normalize(pattern);
        let expansion = expand(&normalized, &self.options.glob, self.matcher)?;
        if expansion.is_empty() {
            return Err(GlobMoveError::NotFound {
                pattern: pattern.to_string(),
            }
            .into());
        }

        let plans = match expansion.direct_source() {
            Some(source) => vec![plan_direct(source, destination)?],
            None => plan_pattern(&normalized, &expansion.files, &expansion.dirs, destination),
        };

        execute_plans(&plans, self.dirs, self.mover, self.options)
            .with_context(|| format!("moving '{pattern}' -> '{destination}'"))?;
        Ok(plans)
    }
}

/// Run `spec` against the local filesystem with the default collaborators.
pub fn run(spec: &MoveSpec, options: &MoveOptions) -> Result<Vec<MovePlan>> {
    Relocator::new(options, &GlobMatcher, &FsDirEnsurer, &FsMover).run(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::path::Path;
    use std::sync::Mutex;

    /// Returns canned matches per pattern and records the call order.
    struct Script {
        answers: Vec<(&'static str, Vec<&'static str>)>,
        calls: Mutex<Vec<String>>,
    }

    impl Matcher for Script {
        fn matches(&self, pattern: &str, _options: &crate::config::GlobOptions) -> Result<Vec<String>> {
            self.calls.lock().unwrap().push(format!("match {pattern}"));
            Ok(self
                .answers
                .iter()
                .find(|(p, _)| *p == pattern)
                .map(|(_, m)| m.iter().map(|s| s.to_string()).collect())
                .unwrap_or_default())
        }
    }

    struct Log<'a>(&'a Mutex<Vec<String>>);

    impl DirEnsurer for Log<'_> {
        fn ensure_dir(&self, _path: &Path) -> Result<()> {
            Ok(())
        }
    }

    impl Mover for Log<'_> {
        fn move_path(&self, source: &Path, _destination: &Path) -> Result<()> {
            if source == Path::new("bad/x") {
                bail!("refused");
            }
            self.0.lock().unwrap().push(format!("move {}", source.display()));
            Ok(())
        }
    }

    fn script(answers: Vec<(&'static str, Vec<&'static str>)>) -> Script {
        Script {
            answers,
            calls: Mutex::new(Vec::new()),
        }
    }

    #[test]
    fn patterns_run_strictly_in_order() {
        let m = script(vec![("a/*", vec!["a/1", "a/2"]), ("b/*", vec!["b/1", "b/2"])]);
        let log = Log(&m.calls);
        let options = MoveOptions {
            concurrency: 1,
            ..MoveOptions::default()
        };
        let spec: MoveSpec = [("a/*", "out"), ("b/*", "out")].into_iter().collect();

        Relocator::new(&options, &m, &log, &log).run(&spec).unwrap();

        let calls = m.calls.lock().unwrap().clone();
        let second = calls.iter().position(|c| c == "match b/*").unwrap();
        assert!(calls[..second].iter().filter(|c| c.starts_with("move a/")).count() == 2);
    }

    #[test]
    fn empty_match_is_not_found_and_stops_the_run() {
        let m = script(vec![("later", vec!["later"])]);
        let log = Log(&m.calls);
        let options = MoveOptions::default();
        let spec: MoveSpec = [("nothing/*", "out"), ("later", "x")].into_iter().collect();

        let err = Relocator::new(&options, &m, &log, &log).run(&spec).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GlobMoveError>(),
            Some(GlobMoveError::NotFound { pattern }) if pattern == "nothing/*"
        ));
        assert!(!m.calls.lock().unwrap().iter().any(|c| c == "match later"));
    }

    #[test]
    fn mover_failure_carries_pattern_context() {
        let m = script(vec![("bad/*", vec!["bad/x", "bad/y"])]);
        let log = Log(&m.calls);
        let options = MoveOptions::default();
        let spec: MoveSpec = [("bad/*", "out")].into_iter().collect();

        let err = Relocator::new(&options, &m, &log, &log).run(&spec).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("moving 'bad/*' -> 'out'"), "{msg}");
        assert!(msg.contains("refused"), "{msg}");
    }

    #[test]
    fn pattern_is_normalized_before_matching() {
        let m = script(vec![("src/*", vec!["src/a", "src/b"])]);
        let log = Log(&m.calls);
        let options = MoveOptions::default();
        let spec: MoveSpec = [("./src//*", "out")].into_iter().collect();

        let plans = Relocator::new(&options, &m, &log, &log).run(&spec).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].destination, Path::new("out/a"));
    }
}
