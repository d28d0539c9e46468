// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Mapping source files to their names in the mounted namespace.

use crate::catalog::FormatSpec;
use crate::path_utils::{SEPARATOR, ensure_trailing_separator, strip_directory};

/// Replace the extension of `filename` with `ext`, or add one if missing.
///
/// Idempotent: applying it twice with the same `ext` is the same as once.
#[must_use]
pub fn replace_extension(filename: &str, ext: &str) -> String {
    let stem = match filename.rfind('.') {
        Some(pos) => &filename[..=pos],
        None => filename,
    };
    let mut out = String::with_capacity(stem.len() + ext.len() + 1);
    out.push_str(stem);
    if !stem.ends_with('.') {
        out.push('.');
    }
    out.push_str(ext);
    out
}

/// Bare destination filename for a source path.
///
/// An unknown spec has no target extension, so the basename is kept.
#[must_use]
pub fn destination_name(source_path: &str, spec: &FormatSpec) -> String {
    let name = strip_directory(source_path);
    match spec.extension() {
        Some(ext) => replace_extension(&name, ext),
        None => name,
    }
}

/// Full destination path of `source_path` under `mount_root`.
///
/// Exactly one separator joins the root and the name, whatever the root
/// ends with.
#[must_use]
pub fn destination_path(source_path: &str, mount_root: &str, spec: &FormatSpec) -> String {
    let name = destination_name(source_path, spec);
    let mut out = ensure_trailing_separator(mount_root.trim_end_matches(SEPARATOR));
    out.push_str(name.trim_start_matches(SEPARATOR));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;

    #[test]
    fn test_replace_extension() {
        assert_eq!(replace_extension("track.flac", "mp3"), "track.mp3");
        assert_eq!(replace_extension("archive", "mp3"), "archive.mp3");
        assert_eq!(replace_extension("a.b.c", "ogg"), "a.b.ogg");
        assert_eq!(replace_extension("trailing.", "wav"), "trailing.wav");
        assert_eq!(replace_extension("", "mp3"), ".mp3");
    }

    #[test]
    fn test_replace_extension_idempotent() {
        for name in ["track.flac", "archive", "a.b.c", ".hidden", "", "x."] {
            for ext in ["mp3", "mov", "webm"] {
                let once = replace_extension(name, ext);
                assert_eq!(replace_extension(&once, ext), once, "{name} -> {ext}");
            }
        }
    }

    #[test]
    fn test_destination_path_shape() {
        let mp3 = resolve("mp3");
        assert_eq!(
            destination_path("/src/music/track.flac", "/mnt", &mp3),
            "/mnt/track.mp3"
        );
        assert_eq!(
            destination_path("/src/music/track.flac", "/mnt/", &mp3),
            "/mnt/track.mp3"
        );
        assert_eq!(
            destination_path("/src/music/track.flac", "/mnt//", &mp3),
            "/mnt/track.mp3"
        );
        assert_eq!(destination_path("/src/track.flac", "/", &mp3), "/track.mp3");
        assert_eq!(destination_path("/src/track.flac", "///", &mp3), "/track.mp3");
    }

    #[test]
    fn test_container_name_drives_extension() {
        let prores = resolve("prores");
        assert_eq!(
            destination_path("/videos/clip.mkv", "/mnt/video", &prores),
            "/mnt/video/clip.mov"
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        let mp3 = resolve("mp3");
        assert_eq!(destination_path("", "/mnt", &mp3), "/mnt/.mp3");
        assert_eq!(destination_path("/", "/mnt", &mp3), "/mnt/.mp3");
        assert_eq!(destination_path("song", "/mnt", &mp3), "/mnt/song.mp3");
        assert_eq!(destination_path("/a/song.ogg/", "/mnt", &mp3), "/mnt/song.mp3");
    }

    #[test]
    fn test_unknown_spec_keeps_name() {
        let unknown = resolve("nope");
        assert_eq!(destination_name("/src/track.flac", &unknown), "track.flac");
        assert_eq!(
            destination_path("/src/track.flac", "/mnt", &unknown),
            "/mnt/track.flac"
        );
    }
}
