//! Lexical path-string helpers.
//! Patterns and glob matches are compared as strings, so both sides are first
//! reduced to a canonical `/`-separated form. Nothing here touches the filesystem.

use std::path::MAIN_SEPARATOR;

#[inline]
pub(crate) fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// True when `s` ends in a path separator (the "directory hint").
pub fn has_trailing_separator(s: &str) -> bool {
    s.chars().last().is_some_and(is_separator)
}

/// Remove trailing separators, keeping a lone root separator intact.
pub fn strip_trailing_separator(s: &str) -> &str {
    let trimmed = s.trim_end_matches(is_separator);
    if trimmed.is_empty() && !s.is_empty() {
        &s[..1]
    } else {
        trimmed
    }
}

fn has_glob_meta(seg: &str) -> bool {
    seg.contains(['*', '?', '['])
}

/// Lexically normalize a path string.
///
/// - Both `/` and the platform separator split segments; output always uses `/`.
/// - Empty and `.` segments are dropped.
/// - `..` folds into a preceding literal segment. This is lexical: `link/../x`
///   becomes `x` even when `link` is a symlink. A `..` after a segment holding
///   glob metacharacters is kept so the matcher resolves it.
/// - Trailing separators are dropped; an empty relative result becomes `.`.
pub fn normalize(s: &str) -> String {
    let absolute = s.starts_with(is_separator);
    let mut parts: Vec<&str> = Vec::new();
    for seg in s.split(is_separator) {
        match seg {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last == ".." || has_glob_meta(last) => parts.push(".."),
                Some(_) => {
                    parts.pop();
                }
                // `/..` is still `/`
                None if absolute => {}
                None => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Last segment of a path string, ignoring trailing separators.
pub fn base_name(s: &str) -> &str {
    let stripped = strip_trailing_separator(s);
    match stripped.rfind(is_separator) {
        Some(idx) if idx + 1 < stripped.len() => &stripped[idx + 1..],
        _ => stripped,
    }
}
