use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use glob_move::{DirEnsurer, GlobOptions, MoveOptions, MoveSpec, Mover, Relocator};

/// Reports `n` files under `in/` for any pattern.
struct Many(usize);

impl glob_move::Matcher for Many {
    fn matches(&self, _pattern: &str, _options: &GlobOptions) -> Result<Vec<String>> {
        Ok((0..self.0).map(|i| format!("in/f{i}")).collect())
    }
}

/// Tracks how many moves are running at once.
#[derive(Default)]
struct Gauge {
    current: AtomicUsize,
    peak: AtomicUsize,
    total: AtomicUsize,
}

impl Mover for Gauge {
    fn move_path(&self, _source: &Path, _destination: &Path) -> Result<()> {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(5));
        self.current.fetch_sub(1, Ordering::SeqCst);
        self.total.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl DirEnsurer for Gauge {
    fn ensure_dir(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

#[test]
fn moves_in_flight_never_exceed_concurrency() {
    let gauge = Gauge::default();
    let options = MoveOptions {
        concurrency: 4,
        ..MoveOptions::default()
    };
    let spec: MoveSpec = [("in/*", "out")].into_iter().collect();

    let plans = Relocator::new(&options, &Many(64), &gauge, &gauge)
        .run(&spec)
        .unwrap();

    assert_eq!(plans.len(), 64);
    assert_eq!(gauge.total.load(Ordering::SeqCst), 64);
    let peak = gauge.peak.load(Ordering::SeqCst);
    assert!((1..=4).contains(&peak), "peak in-flight was {peak}");
}

#[test]
fn concurrency_one_is_sequential() {
    let gauge = Gauge::default();
    let options = MoveOptions {
        concurrency: 1,
        ..MoveOptions::default()
    };
    let spec: MoveSpec = [("in/*", "out")].into_iter().collect();

    Relocator::new(&options, &Many(10), &gauge, &gauge)
        .run(&spec)
        .unwrap();

    assert_eq!(gauge.peak.load(Ordering::SeqCst), 1);
}
