//! Structure-preserving destination suffixes.

use crate::normalize::{base_name, normalize};

/// The part of `file` below the literal prefix it shares with `pattern`.
///
/// Both inputs are normalized and compared character by character. The
/// result is `file` from the first differing character on, without a leading
/// separator (`src/a*.txt` against `src/abc.txt` yields `bc.txt`). When `file`
/// runs out before any difference, its base name is returned.
pub fn relative_path(file: &str, pattern: &str) -> String {
    let file = normalize(file);
    let pattern = normalize(pattern);

    let first_diff = file
        .char_indices()
        .zip(pattern.chars().map(Some).chain(std::iter::repeat(None)))
        .find(|((_, f), p)| Some(*f) != *p)
        .map(|((idx, _), _)| idx);

    let Some(idx) = first_diff else {
        return base_name(&file).to_string();
    };

    let rest = &file[idx..];
    match rest.strip_prefix('/').unwrap_or(rest) {
        "" => base_name(&file).to_string(),
        rest => rest.to_string(),
    }
}
