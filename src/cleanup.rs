//! Overlap removal for pattern expansions.
//!
//! A recursive pattern reports a directory and everything beneath it. The
//! directory is moved wholesale, so its descendants must not be moved again.
//! Containment is segment-aware: `foo` covers `foo/x` but not `foobar/x`.

use std::path::Path;

use crate::normalize::normalize;

/// Return `(files, dirs)` with every entry already covered by a reported
/// directory removed.
///
/// - A file is dropped when its parent lies at or below a reported directory.
/// - A directory is dropped when it lies below another reported directory, or
///   repeats an earlier one.
///
/// Relative order of the survivors is preserved. Applying this to its own
/// output is a no-op.
pub fn cleanup(files: Vec<String>, dirs: Vec<String>) -> (Vec<String>, Vec<String>) {
    let norm_dirs: Vec<String> = dirs.iter().map(|d| normalize(d)).collect();

    let kept_idx: Vec<usize> = (0..dirs.len())
        .filter(|&i| {
            let d = Path::new(&norm_dirs[i]);
            !norm_dirs.iter().enumerate().any(|(j, other)| {
                let o = Path::new(other);
                if i == j {
                    false
                } else if d == o {
                    j < i
                } else {
                    d.starts_with(o)
                }
            })
        })
        .collect();

    let kept_files: Vec<String> = files
        .into_iter()
        .filter(|f| {
            let norm = normalize(f);
            let parent = Path::new(&norm).parent().unwrap_or(Path::new(""));
            !kept_idx
                .iter()
                .any(|&i| parent.starts_with(Path::new(&norm_dirs[i])))
        })
        .collect();

    let kept_dirs = dirs
        .into_iter()
        .enumerate()
        .filter(|(i, _)| kept_idx.contains(i))
        .map(|(_, d)| d)
        .collect();

    (kept_files, kept_dirs)
}
