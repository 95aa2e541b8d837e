//! Plan execution.
//! Every plan gets its parent directory ensured and is then handed to the
//! mover. Plans of one pattern run on a bounded rayon pool; the first failure
//! stops further dispatch.

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::info;

use crate::config::MoveOptions;
use crate::fs_ops::{DirEnsurer, Mover};
use crate::plan::MovePlan;

fn execute_one(plan: &MovePlan, dirs: &dyn DirEnsurer, mover: &dyn Mover) -> Result<()> {
    if let Some(parent) = &plan.required_parent_dir {
        dirs.ensure_dir(parent)?;
    }
    mover.move_path(&plan.source, &plan.destination)?;
    info!(
        src = %plan.source.display(),
        dest = %plan.destination.display(),
        "moved"
    );
    Ok(())
}

/// Run `plans` with at most `options.concurrency` in flight.
///
/// In dry-run mode each plan is only logged.
pub fn execute_plans(
    plans: &[MovePlan],
    dirs: &dyn DirEnsurer,
    mover: &dyn Mover,
    options: &MoveOptions,
) -> Result<()> {
    if options.dry_run {
        for plan in plans {
            info!(
                src = %plan.source.display(),
                dest = %plan.destination.display(),
                "dry-run: would move"
            );
        }
        return Ok(());
    }

    match plans {
        [] => Ok(()),
        [only] => execute_one(only, dirs, mover),
        many => {
            let threads = options.concurrency.clamp(1, many.len());
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("glob-move-{i}"))
                .build()
                .context("failed to build move worker pool")?;
            pool.install(|| {
                many.par_iter()
                    .try_for_each(|plan| execute_one(plan, dirs, mover))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        ensured: Mutex<Vec<PathBuf>>,
        moved: Mutex<Vec<(PathBuf, PathBuf)>>,
        fail_on: Option<&'static str>,
    }

    impl DirEnsurer for Recorder {
        fn ensure_dir(&self, path: &Path) -> Result<()> {
            self.ensured.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    impl Mover for Recorder {
        fn move_path(&self, source: &Path, destination: &Path) -> Result<()> {
            if self.fail_on.is_some_and(|f| source == Path::new(f)) {
                bail!("boom: {}", source.display());
            }
            self.moved
                .lock()
                .unwrap()
                .push((source.to_path_buf(), destination.to_path_buf()));
            Ok(())
        }
    }

    #[test]
    fn ensures_parent_before_moving() {
        let rec = Recorder::default();
        let plans = vec![MovePlan::new("a", "out/a")];
        execute_plans(&plans, &rec, &rec, &MoveOptions::default()).unwrap();
        assert_eq!(*rec.ensured.lock().unwrap(), vec![PathBuf::from("out")]);
        assert_eq!(rec.moved.lock().unwrap().len(), 1);
    }

    #[test]
    fn dry_run_touches_nothing() {
        let rec = Recorder::default();
        let plans = vec![MovePlan::new("a", "out/a"), MovePlan::new("b", "out/b")];
        let options = MoveOptions {
            dry_run: true,
            ..MoveOptions::default()
        };
        execute_plans(&plans, &rec, &rec, &options).unwrap();
        assert!(rec.ensured.lock().unwrap().is_empty());
        assert!(rec.moved.lock().unwrap().is_empty());
    }

    #[test]
    fn runs_every_plan_of_a_pattern() {
        let rec = Recorder::default();
        let plans: Vec<_> = (0..50)
            .map(|i| MovePlan::new(format!("s{i}"), format!("d/{i}")))
            .collect();
        execute_plans(&plans, &rec, &rec, &MoveOptions::default()).unwrap();
        assert_eq!(rec.moved.lock().unwrap().len(), 50);
    }

    #[test]
    fn first_failure_is_returned() {
        let rec = Recorder {
            fail_on: Some("s3"),
            ..Recorder::default()
        };
        let plans: Vec<_> = (0..8)
            .map(|i| MovePlan::new(format!("s{i}"), format!("d/{i}")))
            .collect();
        let err = execute_plans(&plans, &rec, &rec, &MoveOptions::default()).unwrap_err();
        assert!(err.to_string().contains("boom: s3"));
    }
}
