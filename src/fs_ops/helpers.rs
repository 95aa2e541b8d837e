//! I/O error adapters.
//!
//! Enrich io::Error with the operation, the path and an actionable hint, for
//! use with `map_err` in both anyhow::Result and io::Result code paths:
//!
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create directory", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        libc::EACCES | libc::EPERM => "permission denied; check ownership and write permissions",
        libc::EXDEV => "cross-filesystem; atomic rename not possible",
        libc::EBUSY => "resource busy; ensure no other process holds it",
        libc::ENOENT => "path not found; verify it exists",
        libc::EEXIST => "already exists; remove the target or pick another name",
        libc::ENOTEMPTY => "destination directory is not empty",
        libc::ENOTDIR => "a path component is a file, not a directory",
        libc::EISDIR => "destination is a directory",
        libc::ENOSPC => "insufficient space on device",
        libc::EROFS => "read-only filesystem; cannot write here",
        libc::ELOOP => "too many symbolic link levels; possible symlink cycle",
        libc::ENAMETOOLONG => "filename or path too long; shorten path segments",
        libc::EMFILE => "process file descriptor limit reached",
        libc::ENFILE => "system-wide file table overflow",
        _ => return None,
    };
    Some(hint)
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        5 => "access denied; check permissions",
        17 => "not same device; cross-filesystem move",
        32 => "sharing violation; file is in use",
        2 | 3 => "path not found; verify it exists",
        80 | 183 => "already exists; pick another name",
        145 => "destination directory is not empty",
        112 => "insufficient disk space",
        19 => "write protected / read-only media",
        206 => "filename or path too long",
        4 => "too many open files",
        _ => return None,
    };
    Some(hint)
}

#[cfg(not(any(unix, windows)))]
fn os_hint(_code: i32) -> Option<&'static str> {
    None
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists; remove the target or pick another name"),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => Some("busy/timed out"),
        _ => None,
    }
}

/// Format "<op> '<path>': <error> (hint: <hint>) [os code: N]".
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    match e.raw_os_error() {
        Some(code) => {
            if let Some(hint) = os_hint(code) {
                msg.push_str(&format!(" (hint: {hint})"));
            }
            msg.push_str(&format!(" [os code: {code}]"));
        }
        None => {
            if let Some(hint) = kind_hint(e.kind()) {
                msg.push_str(&format!(" (hint: {hint})"));
            }
        }
    }
    msg
}

/// Adapter for anyhow::Result code: io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notfound_fallback_hint_includes_path() {
        let p = Path::new("/nonexistent/path/for/test");
        let err = io_error_with_help("open", p)(io::Error::from(io::ErrorKind::NotFound));
        let msg = format!("{err}");
        assert!(msg.contains("open"));
        assert!(msg.contains("/nonexistent/path/for/test"));
        assert!(msg.contains("path not found"));
    }

    #[cfg(unix)]
    #[test]
    fn raw_os_codes_get_hints_and_code() {
        let p = Path::new("/tmp");
        let msg = format!(
            "{}",
            io_error_with_help("rename", p)(io::Error::from_raw_os_error(libc::ENOTEMPTY))
        );
        assert!(msg.contains("not empty"), "msg was: {msg}");
        assert!(msg.contains("os code"), "msg was: {msg}");
    }
}
