//! Destination planning.
//! Turns a classified expansion into concrete (source, destination) moves.
//! Direct matches follow the file/dir decision table; pattern matches map
//! every entity under the destination root, keeping its relative structure.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::GlobMoveError;
use crate::normalize::{base_name, has_trailing_separator, strip_trailing_separator};
use crate::relative::relative_path;

/// What a path is at planning time (symlinks followed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    File,
    Directory,
    Missing,
}

impl EntityKind {
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(m) if m.is_dir() => EntityKind::Directory,
            Ok(_) => EntityKind::File,
            Err(_) => EntityKind::Missing,
        }
    }
}

/// One move to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Created recursively before the move runs.
    pub required_parent_dir: Option<PathBuf>,
}

impl MovePlan {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        let destination = destination.into();
        let required_parent_dir = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf);
        Self {
            source: source.into(),
            destination,
            required_parent_dir,
        }
    }
}

/// Plan the move of a single literal entity.
///
/// A trailing separator on `destination` asks for "inside this directory"
/// even when it does not exist yet. A directory is never moved onto a file.
pub fn plan_direct(source: &str, destination: &str) -> Result<MovePlan> {
    let src = Path::new(strip_trailing_separator(source));
    let dst = Path::new(strip_trailing_separator(destination));
    let hint = has_trailing_separator(destination);

    let src_kind = EntityKind::of(src);
    let dst_kind = EntityKind::of(dst);

    let into_dir = match (src_kind, dst_kind) {
        (EntityKind::Missing, _) => {
            return Err(GlobMoveError::NotFound {
                pattern: source.to_string(),
            }
            .into());
        }
        (EntityKind::Directory, EntityKind::File) => {
            return Err(GlobMoveError::NotADirectory {
                source_path: src.to_path_buf(),
                destination: dst.to_path_buf(),
            }
            .into());
        }
        (_, EntityKind::Directory) => true,
        (_, EntityKind::Missing) => hint,
        (EntityKind::File, EntityKind::File) => false,
    };

    let plan = if into_dir {
        MovePlan::new(src, dst.join(base_name(source)))
    } else {
        MovePlan::new(src, dst)
    };
    debug!(
        ?src_kind,
        ?dst_kind,
        into_dir,
        destination = %plan.destination.display(),
        "planned direct move"
    );
    Ok(plan)
}

/// Plan one move per matched entity, files first, under `dest_root`.
pub fn plan_pattern(pattern: &str, files: &[String], dirs: &[String], dest_root: &str) -> Vec<MovePlan> {
    let root = Path::new(dest_root);
    files
        .iter()
        .chain(dirs)
        .map(|entity| MovePlan::new(entity, root.join(relative_path(entity, pattern))))
        .collect()
}
