// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Checks and mutations made before the mount touches the host filesystem.

use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::os::unix::fs::{DirBuilderExt, MetadataExt};
use std::path::{Component, Path, PathBuf};

/// Identity of a filesystem object, as far as mount detection cares
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileIdentity {
    pub dev: u64,
    pub ino: u64,
    pub is_dir: bool,
}

/// Source of stat information. Tests substitute a fake.
pub trait FileStat {
    fn stat(&self, path: &Path) -> std::io::Result<FileIdentity>;
}

/// Stat provider backed by the host filesystem
#[derive(Clone, Copy, Debug, Default)]
pub struct HostStat;

impl FileStat for HostStat {
    fn stat(&self, path: &Path) -> std::io::Result<FileIdentity> {
        let md = std::fs::metadata(path)?;
        Ok(FileIdentity {
            dev: md.dev(),
            ino: md.ino(),
            is_dir: md.is_dir(),
        })
    }
}

/// Create `path` and every missing ancestor with permission bits `mode`.
///
/// Components that already exist as directories are fine, including ones
/// created concurrently by someone else. An existing non-directory, or any
/// other failure, stops at that component; whatever was created before it
/// stays.
pub fn make_directory_tree<P: AsRef<Path>>(path: P, mode: u32) -> Result<()> {
    let path = path.as_ref();
    let mut builder = std::fs::DirBuilder::new();
    builder.mode(mode);

    let mut current = PathBuf::new();
    for comp in path.components() {
        current.push(comp);
        if !matches!(comp, Component::Normal(_)) {
            continue;
        }

        match builder.create(&current) {
            Ok(()) => {
                let dir = current.display().to_string();
                diagnostics::log_debug!("Created directory {dir}", dir: dir);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                if !current.is_dir() {
                    let dir = current.display().to_string();
                    diagnostics::log_debug!("Not a directory: {dir}", dir: dir);
                    return Err(Error::create_directory(
                        &current,
                        std::io::Error::from(ErrorKind::NotADirectory),
                    ));
                }
            }
            Err(e) => {
                let dir = current.display().to_string();
                let reason = e.to_string();
                diagnostics::log_debug!(
                    "Failed to create {dir}: {reason}",
                    dir: dir,
                    reason: reason
                );
                return Err(Error::create_directory(&current, e));
            }
        }
    }

    Ok(())
}

/// Whether `path` is a mount boundary, using the host filesystem
pub fn is_mount_point<P: AsRef<Path>>(path: P) -> Result<bool> {
    is_mount_point_with(&HostStat, path.as_ref())
}

/// Mount detection against an arbitrary stat provider.
///
/// A directory is a mount point when its device differs from that of
/// `path/..`, or when both are the same object (the root). Anything that
/// is not a directory is never a mount point. Stat failures are errors,
/// not a "no".
pub fn is_mount_point_with<S: FileStat + ?Sized>(stat: &S, path: &Path) -> Result<bool> {
    let this = stat.stat(path).map_err(|e| Error::mount_check(path, e))?;
    if !this.is_dir {
        return Ok(false);
    }

    let parent_path = path.join("..");
    let parent = stat
        .stat(&parent_path)
        .map_err(|e| Error::mount_check(&parent_path, e))?;

    let mounted = this.dev != parent.dev || this.ino == parent.ino;
    let shown = path.display().to_string();
    diagnostics::log_debug!(
        "Mount check {path}: dev {dev} parent dev {parent_dev} -> {mounted}",
        path: shown,
        dev: this.dev,
        parent_dev: parent.dev,
        mounted: mounted
    );
    Ok(mounted)
}

/// Free bytes on the filesystem holding `path`
pub fn available_space<P: AsRef<Path>>(path: P) -> Result<u64> {
    let vfs = nix::sys::statvfs::statvfs(path.as_ref())
        .map_err(|errno| Error::Io(std::io::Error::from(errno)))?;
    Ok(u64::from(vfs.blocks_free()).saturating_mul(u64::from(vfs.block_size())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Stat provider answering from a fixed table
    #[derive(Default)]
    struct FakeStat {
        entries: HashMap<PathBuf, FileIdentity>,
    }

    impl FakeStat {
        fn dir(mut self, path: &str, dev: u64, ino: u64) -> Self {
            let _ = self.entries.insert(
                PathBuf::from(path),
                FileIdentity {
                    dev,
                    ino,
                    is_dir: true,
                },
            );
            self
        }

        fn file(mut self, path: &str, dev: u64, ino: u64) -> Self {
            let _ = self.entries.insert(
                PathBuf::from(path),
                FileIdentity {
                    dev,
                    ino,
                    is_dir: false,
                },
            );
            self
        }
    }

    impl FileStat for FakeStat {
        fn stat(&self, path: &Path) -> std::io::Result<FileIdentity> {
            self.entries
                .get(path)
                .copied()
                .ok_or_else(|| std::io::Error::from(ErrorKind::NotFound))
        }
    }

    #[test]
    fn test_device_change_is_mount_point() {
        let fake = FakeStat::default()
            .dir("/mnt/media", 2, 100)
            .dir("/mnt/media/..", 1, 50);
        assert!(is_mount_point_with(&fake, Path::new("/mnt/media")).unwrap());
    }

    #[test]
    fn test_same_device_is_not_mount_point() {
        let fake = FakeStat::default()
            .dir("/home/user", 1, 100)
            .dir("/home/user/..", 1, 50);
        assert!(!is_mount_point_with(&fake, Path::new("/home/user")).unwrap());
    }

    #[test]
    fn test_root_is_mount_point() {
        let fake = FakeStat::default().dir("/", 1, 2).dir("/..", 1, 2);
        assert!(is_mount_point_with(&fake, Path::new("/")).unwrap());
    }

    #[test]
    fn test_regular_file_is_not_mount_point() {
        let fake = FakeStat::default().file("/home/user/song.flac", 1, 7);
        assert!(!is_mount_point_with(&fake, Path::new("/home/user/song.flac")).unwrap());
    }

    #[test]
    fn test_missing_path_is_indeterminate() {
        let fake = FakeStat::default();
        let result = is_mount_point_with(&fake, Path::new("/nowhere"));
        assert!(matches!(result, Err(Error::MountCheck { .. })));
    }

    #[test]
    fn test_missing_parent_is_indeterminate() {
        let fake = FakeStat::default().dir("/orphan", 3, 9);
        match is_mount_point_with(&fake, Path::new("/orphan")) {
            Err(Error::MountCheck { path, .. }) => assert_eq!(path, PathBuf::from("/orphan/..")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
