//! Directory move implementation.
//! Tries a rename first; across filesystems copies the tree (files in
//! parallel), recreates symlinks on Unix, then removes the source.

use anyhow::{Result, anyhow, bail};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use super::copy::safe_copy_and_rename_with_metadata;
use super::helpers::io_error_with_help;
use super::space::ensure_space_for;
use super::util::is_cross_device;

/// Move the directory `src_dir` so that it becomes `target`.
pub fn move_dir(src_dir: &Path, target: &Path) -> Result<()> {
    match fs::rename(src_dir, target) {
        Ok(()) => {
            info!(src = %src_dir.display(), dest = %target.display(), "Renamed directory atomically");
            return Ok(());
        }
        Err(e) if is_cross_device(&e) => {
            warn!(error = %e, "Directory rename crosses filesystems; copying tree");
        }
        Err(e) => return Err(io_error_with_help("rename directory", src_dir)(e)),
    }

    let parent = target
        .parent()
        .ok_or_else(|| anyhow!("destination has no parent: {}", target.display()))?;
    ensure_space_for(src_dir, parent)?;

    let mut dirs: Vec<PathBuf> = Vec::new();
    let mut files: Vec<PathBuf> = Vec::new();
    let mut links: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(src_dir) {
        let entry = entry.map_err(|e| anyhow!("walk '{}': {}", src_dir.display(), e))?;
        let ft = entry.file_type();
        if ft.is_dir() {
            dirs.push(entry.into_path());
        } else if ft.is_file() {
            files.push(entry.into_path());
        } else if ft.is_symlink() {
            links.push(entry.into_path());
        } else {
            bail!(
                "Refusing to copy special file '{}' across filesystems",
                entry.path().display()
            );
        }
    }

    for d in &dirs {
        let new_dir = target.join(d.strip_prefix(src_dir)?);
        fs::create_dir_all(&new_dir).map_err(io_error_with_help("create directory", &new_dir))?;
    }

    files.par_iter().try_for_each(|path| -> Result<()> {
        let dst = target.join(path.strip_prefix(src_dir)?);
        safe_copy_and_rename_with_metadata(path, &dst)
    })?;

    for link in &links {
        copy_symlink(link, &target.join(link.strip_prefix(src_dir)?))?;
    }

    fs::remove_dir_all(src_dir).map_err(io_error_with_help("remove source directory", src_dir))?;
    info!(src = %src_dir.display(), dest = %target.display(), files = files.len(), "Copied directory tree and removed source");
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(link: &Path, dst: &Path) -> Result<()> {
    let points_to = fs::read_link(link).map_err(io_error_with_help("read symlink", link))?;
    std::os::unix::fs::symlink(&points_to, dst).map_err(io_error_with_help("create symlink", dst))
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, _dst: &Path) -> Result<()> {
    bail!(
        "Refusing to copy symlink '{}' across filesystems",
        link.display()
    )
}
