use anyhow::{Result, anyhow, bail};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::dir_move::move_dir;
use super::file_move::move_file;
use super::helpers::io_error_with_help;

/// Top-level dispatcher for moving a single path (file, directory or symlink).
/// - Stats once without following links and branches on the file type.
/// - Symlinks are renamed as links; they are never followed or copied.
pub fn move_entry(src: &Path, dest: &Path) -> Result<()> {
    let lmeta = fs::symlink_metadata(src).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            anyhow!("Source does not exist: {}", src.display())
        } else {
            io_error_with_help("stat source", src)(e)
        }
    })?;

    let ftype = lmeta.file_type();
    debug!(
        src = %src.display(),
        dest = %dest.display(),
        is_file = ftype.is_file(),
        is_dir = ftype.is_dir(),
        is_symlink = ftype.is_symlink(),
        "dispatch move_entry"
    );

    if ftype.is_symlink() {
        fs::rename(src, dest).map_err(io_error_with_help("rename symlink", src))
    } else if ftype.is_file() {
        move_file(src, dest)
    } else if ftype.is_dir() {
        move_dir(src, dest)
    } else {
        bail!(
            "Source path is neither a regular file nor a directory: {}",
            src.display()
        )
    }
}
