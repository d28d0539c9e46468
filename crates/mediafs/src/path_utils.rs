// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! String-level path helpers.
//!
//! These operate on `/`-separated path strings without touching the
//! filesystem. Directory and basename extraction follow POSIX `dirname`
//! and `basename`, except that a path without any separator (the empty
//! string included) is its own basename.

/// Path separator used by the virtual namespace
pub const SEPARATOR: char = '/';

/// Appends a separator unless the path already ends with one
#[must_use]
pub fn ensure_trailing_separator(path: &str) -> String {
    let mut out = path.to_string();
    if !out.ends_with(SEPARATOR) {
        out.push(SEPARATOR);
    }
    out
}

/// Joins a filename onto a directory path with a separator in between
#[must_use]
pub fn append_filename(path: &str, name: &str) -> String {
    let mut out = ensure_trailing_separator(path);
    out.push_str(name);
    out
}

/// Directory part of a path, like POSIX `dirname`
#[must_use]
pub fn strip_filename(path: &str) -> String {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return if path.is_empty() { "." } else { "/" }.to_string();
    }

    match trimmed.rfind(SEPARATOR) {
        None => ".".to_string(),
        Some(pos) => {
            let dir = trimmed[..pos].trim_end_matches(SEPARATOR);
            if dir.is_empty() {
                "/".to_string()
            } else {
                dir.to_string()
            }
        }
    }
}

/// Final component of a path, like POSIX `basename`
///
/// Trailing separators are ignored. A path consisting only of separators
/// yields `/`.
#[must_use]
pub fn strip_directory(path: &str) -> String {
    if !path.contains(SEPARATOR) {
        return path.to_string();
    }

    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return "/".to_string();
    }

    match trimmed.rfind(SEPARATOR) {
        None => trimmed.to_string(),
        Some(pos) => trimmed[pos + 1..].to_string(),
    }
}

/// Text after the last `.` of a filename, if there is one
#[must_use]
pub fn find_extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|pos| &name[pos + 1..])
}
