//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::{free_space_bytes, open_log_file_secure_append};

#[cfg(windows)]
pub use windows::{free_space_bytes, open_log_file_secure_append};

#[cfg(not(any(unix, windows)))]
pub fn open_log_file_secure_append(path: &std::path::Path) -> std::io::Result<std::fs::File> {
    std::fs::OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(not(any(unix, windows)))]
pub fn free_space_bytes(_path: &std::path::Path) -> std::io::Result<Option<u64>> {
    Ok(None)
}
