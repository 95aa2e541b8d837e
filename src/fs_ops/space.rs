//! Free-space precheck before a cross-filesystem copy.

use anyhow::{Result, bail};
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::platform::free_space_bytes;

use super::helpers::io_error_with_help;

/// Headroom kept free on the destination beyond the payload itself.
const CUSHION: u64 = 4 * 1024 * 1024;

pub(super) fn format_bytes(n: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    let f = n as f64;
    if f >= GB {
        format!("{:.1} GiB", f / GB)
    } else if f >= MB {
        format!("{:.1} MiB", f / MB)
    } else if f >= KB {
        format!("{:.1} KiB", f / KB)
    } else {
        format!("{n} B")
    }
}

/// Bytes a copy of `src` would need (recursive for directories, links not followed).
fn payload_size(src: &Path) -> Result<u64> {
    let meta = fs::symlink_metadata(src).map_err(io_error_with_help("stat source", src))?;
    if !meta.is_dir() {
        return Ok(meta.len());
    }
    Ok(WalkDir::new(src)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter_map(|e| e.metadata().ok())
        .filter(|m| m.is_file())
        .map(|m| m.len())
        .sum())
}

/// Fail early when `dest_dir`'s filesystem cannot hold a copy of `src`.
/// Platforms without a free-space query skip the check.
pub(super) fn ensure_space_for(src: &Path, dest_dir: &Path) -> Result<()> {
    let Some(free) = free_space_bytes(dest_dir)
        .map_err(io_error_with_help("query free space", dest_dir))?
    else {
        return Ok(());
    };
    let required = payload_size(src)?;
    debug!(required, free, dest = %dest_dir.display(), "space check");
    if free < required.saturating_add(CUSHION) {
        bail!(
            "not enough free space in '{}': need ~{}, free {}",
            dest_dir.display(),
            format_bytes(required),
            format_bytes(free)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn formats_human_sizes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn payload_size_sums_tree() {
        let td = tempdir().unwrap();
        let d = td.path().join("d");
        fs::create_dir_all(d.join("sub")).unwrap();
        fs::write(d.join("a"), [0u8; 10]).unwrap();
        fs::write(d.join("sub/b"), [0u8; 5]).unwrap();
        assert_eq!(payload_size(&d).unwrap(), 15);
        assert_eq!(payload_size(&d.join("a")).unwrap(), 10);
    }

    #[test]
    fn small_copy_fits_in_tempdir() {
        let td = tempdir().unwrap();
        let f = td.path().join("tiny");
        fs::write(&f, b"abc").unwrap();
        ensure_space_for(&f, td.path()).unwrap();
    }
}
