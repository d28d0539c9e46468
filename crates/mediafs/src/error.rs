// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the filesystem-touching parts of mediafs.
///
/// Format and path resolution never fail; they are total functions and
/// report "no acceptable format" through `ContainerType::Unknown`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A directory component could not be created for a reason other
    /// than already existing
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Mount-point status could not be determined
    #[error("Cannot determine whether {} is a mount point: {source}", path.display())]
    MountCheck {
        path: PathBuf,
        source: std::io::Error,
    },

    /// None of the configured destination types is known
    #[error("No acceptable destination format in '{0}'")]
    NoDestinationFormat(String),

    /// Mounting here would expose the mount inside its own source tree
    #[error("Mount root {} lies inside source root {}", mount_root.display(), source_root.display())]
    MountInsideSource {
        mount_root: PathBuf,
        source_root: PathBuf,
    },

    #[error("Already a mount point: {}", .0.display())]
    AlreadyMounted(PathBuf),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn create_directory<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Error::CreateDirectory {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn mount_check<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Error::MountCheck {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn already_mounted<P: AsRef<Path>>(path: P) -> Self {
        Error::AlreadyMounted(path.as_ref().to_path_buf())
    }

    pub fn config<S: AsRef<str>>(msg: S) -> Self {
        Error::Config(msg.as_ref().into())
    }
}
