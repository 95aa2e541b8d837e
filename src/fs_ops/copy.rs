//! Safe copy-and-rename helper used for cross-filesystem moves:
//! - Copies to a temp file next to the destination
//! - io_copy::copy_streaming fsyncs the temp file before returning
//! - Atomically renames temp -> dest (Windows overwrite-safe)

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help;
use super::{io_copy, meta, util};

/// Copy `src` to `dest` through a temp sibling so `dest` never holds a partial file.
/// An existing file at `dest` is replaced.
pub fn safe_copy_and_rename(src: &Path, dest: &Path) -> Result<()> {
    let dest_dir = dest
        .parent()
        .ok_or_else(|| anyhow!("destination has no parent: {}", dest.display()))?;

    let tmp_path = util::unique_temp_path(dest_dir);

    if let Err(e) = io_copy::copy_streaming(src, &tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error_with_help("copy to temporary file", &tmp_path)(e));
    }

    if let Err(e) = try_atomic_move(&tmp_path, dest) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| {
            format!(
                "rename temporary file '{}' -> '{}'",
                tmp_path.display(),
                dest.display()
            )
        });
    }

    Ok(())
}

/// Copy as above, then carry over timestamps and permission bits from `src`.
pub(super) fn safe_copy_and_rename_with_metadata(src: &Path, dest: &Path) -> Result<()> {
    let src_meta = fs::metadata(src).with_context(|| format!("stat {}", src.display()))?;
    safe_copy_and_rename(src, dest)?;
    meta::preserve_metadata(&src_meta, dest)
        .with_context(|| format!("preserve metadata for {}", dest.display()))
}
