//! Filesystem operations.
//! - `Mover` / `DirEnsurer` are the seams the planner executes against.
//! - `FsMover` renames when possible and falls back to a durable copy+remove
//!   across filesystems; `FsDirEnsurer` is a recursive, idempotent mkdir.

mod atomic;
mod copy;
mod dir_move;
mod entry;
mod file_move;
mod helpers;
mod io_copy;
mod meta;
mod space;
mod util;

pub use copy::safe_copy_and_rename;
pub use dir_move::move_dir;
pub use entry::move_entry;
pub use file_move::move_file;
pub use helpers::io_error_with_help;

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::trace;

use crate::errors::GlobMoveError;

/// Relocates one file or directory tree.
///
/// Must handle both entity kinds and cross-device destinations; from the
/// caller's perspective the move either completes or fails.
pub trait Mover: Send + Sync {
    fn move_path(&self, source: &Path, destination: &Path) -> Result<()>;
}

/// Creates a directory and its ancestors; succeeds when it already exists.
pub trait DirEnsurer: Send + Sync {
    fn ensure_dir(&self, path: &Path) -> Result<()>;
}

/// Default mover backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsMover;

impl Mover for FsMover {
    fn move_path(&self, source: &Path, destination: &Path) -> Result<()> {
        move_entry(source, destination)
    }
}

/// Default directory creator (`create_dir_all`).
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirEnsurer;

impl DirEnsurer for FsDirEnsurer {
    fn ensure_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|source| GlobMoveError::DirEnsure {
            path: path.to_path_buf(),
            source,
        })?;
        trace!(path = %path.display(), "ensured directory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn ensure_dir_is_recursive_and_idempotent() {
        let temp = assert_fs::TempDir::new().unwrap();
        let deep = temp.child("a/b/c");
        FsDirEnsurer.ensure_dir(deep.path()).unwrap();
        FsDirEnsurer.ensure_dir(deep.path()).unwrap();
        assert!(deep.path().is_dir());
    }

    #[test]
    fn ensure_dir_over_file_is_typed_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("plain");
        file.touch().unwrap();
        let err = FsDirEnsurer.ensure_dir(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GlobMoveError>(),
            Some(GlobMoveError::DirEnsure { .. })
        ));
    }
}
