//! Metadata carried across a copy: access/modify times and permission bits.

use anyhow::Result;
use filetime::{FileTime, set_file_times};
use std::fs::{self, Metadata};
use std::path::Path;

pub(super) fn preserve_metadata(src_meta: &Metadata, dest: &Path) -> Result<()> {
    let mtime = FileTime::from_last_modification_time(src_meta);
    let atime = FileTime::from_last_access_time(src_meta);
    set_file_times(dest, atime, mtime)?;
    fs::set_permissions(dest, src_meta.permissions())?;
    Ok(())
}
