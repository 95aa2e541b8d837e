//! File move implementation.
//! Attempts an atomic rename; across filesystems falls back to a safe
//! copy+rename that keeps timestamps and permissions, then removes the source.

use anyhow::{Result, anyhow};
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use super::atomic::try_atomic_move;
use super::copy::safe_copy_and_rename_with_metadata;
use super::helpers::io_error_with_help;
use super::space::ensure_space_for;
use super::util::is_cross_device;

/// Move a single file to exactly `dest`, replacing an existing file there.
pub fn move_file(src: &Path, dest: &Path) -> Result<()> {
    match try_atomic_move(src, dest) {
        Ok(()) => {
            debug!(src = %src.display(), dest = %dest.display(), "Renamed file atomically");
            Ok(())
        }
        Err(e) if e.downcast_ref::<io::Error>().is_some_and(is_cross_device) => {
            warn!(error = %e, hint = "cross-filesystem; will copy instead", "Atomic rename failed, using safe copy+rename");
            let dest_dir = dest
                .parent()
                .ok_or_else(|| anyhow!("destination has no parent: {}", dest.display()))?;
            ensure_space_for(src, dest_dir)?;
            safe_copy_and_rename_with_metadata(src, dest)?;
            std::fs::remove_file(src).map_err(io_error_with_help("remove original file", src))?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}
