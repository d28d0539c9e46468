// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Mount configuration and the checks run before a mount is accepted.

use crate::catalog::FormatSpec;
use crate::dest_path::destination_path;
use crate::error::{Error, Result};
use crate::fs_safety::{FileStat, HostStat, is_mount_point_with, make_directory_tree};
use crate::host::{expand_path, sanitise_name};
use crate::resolver::resolve;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_desttype() -> String {
    "mp4".to_string()
}

fn default_cache_dir() -> PathBuf {
    std::env::temp_dir().join("mediafs")
}

const fn default_dir_mode() -> u32 {
    0o755
}

/// Settings for one mount, usually read from a YAML file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MediaFsConfig {
    /// Directory holding the original media files
    pub source_root: PathBuf,
    /// Where the transcoded namespace is exposed
    pub mount_root: PathBuf,
    /// Comma-separated destination types, most preferred first
    #[serde(default = "default_desttype")]
    pub desttype: String,
    /// Directory for transcoded output kept between reads
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    /// Permission bits for directories created under `cache_dir`
    #[serde(default = "default_dir_mode")]
    pub dir_mode: u32,
}

impl MediaFsConfig {
    #[must_use]
    pub fn new<S: Into<PathBuf>, M: Into<PathBuf>>(source_root: S, mount_root: M) -> Self {
        Self {
            source_root: source_root.into(),
            mount_root: mount_root.into(),
            desttype: default_desttype(),
            cache_dir: default_cache_dir(),
            dir_mode: default_dir_mode(),
        }
    }

    /// Parse YAML, expand `~` and environment variables in the paths and
    /// check the fields that do not need the filesystem
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let mut config: MediaFsConfig = serde_yaml_ng::from_str(yaml)?;
        config.source_root = expand(&config.source_root);
        config.mount_root = expand(&config.mount_root);
        config.cache_dir = expand(&config.cache_dir);
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml_str(&text)?;
        let shown = path.display().to_string();
        diagnostics::log_info!("Loaded configuration from {path}", path: shown);
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.desttype.trim().is_empty() {
            return Err(Error::config("desttype must name at least one format"));
        }
        if self.source_root.as_os_str().is_empty() {
            return Err(Error::config("source_root is empty"));
        }
        if self.mount_root.as_os_str().is_empty() {
            return Err(Error::config("mount_root is empty"));
        }
        if self.dir_mode > 0o7777 {
            return Err(Error::config(format!(
                "dir_mode {:o} is not a permission mode",
                self.dir_mode
            )));
        }
        Ok(())
    }

    /// The format transcoded files are produced in
    #[must_use]
    pub fn format(&self) -> FormatSpec {
        resolve(&self.desttype)
    }

    /// Where `source` appears inside the mount
    #[must_use]
    pub fn destination_path(&self, source: &str) -> String {
        destination_path(source, &self.mount_root.to_string_lossy(), &self.format())
    }

    /// Refuse mounts that cannot work, using the host filesystem
    pub fn validate_mount(&self) -> Result<()> {
        self.validate_mount_with(&HostStat)
    }

    /// Refuse mounts that cannot work:
    /// - no configured destination type is known
    /// - the mount root is the source root or lies inside it, so the mount
    ///   would list itself
    /// - the mount root is not a directory
    /// - the mount root is already a mount point
    ///
    /// An undecidable mount check is a refusal too.
    pub fn validate_mount_with<S: FileStat + ?Sized>(&self, stat: &S) -> Result<()> {
        self.validate()?;

        if !self.format().is_known() {
            let list = self.desttype.as_str();
            diagnostics::log_warn!("No known destination type in {list}", list: list);
            return Err(Error::NoDestinationFormat(self.desttype.clone()));
        }

        let source_root = sanitise_name(&self.source_root);
        let mount_root = sanitise_name(&self.mount_root);
        if mount_root.starts_with(&source_root) {
            let shown = mount_root.display().to_string();
            diagnostics::log_warn!("Refusing mount at {mount} inside its source", mount: shown);
            return Err(Error::MountInsideSource {
                mount_root,
                source_root,
            });
        }

        let target = stat
            .stat(&mount_root)
            .map_err(|e| Error::mount_check(&mount_root, e))?;
        if !target.is_dir {
            let shown = mount_root.display().to_string();
            diagnostics::log_warn!("Refusing mount at {mount}: not a directory", mount: shown);
            return Err(Error::config(format!(
                "mount root {} is not a directory",
                mount_root.display()
            )));
        }

        if is_mount_point_with(stat, &mount_root)? {
            let shown = mount_root.display().to_string();
            diagnostics::log_warn!("Refusing mount at {mount}: already mounted", mount: shown);
            return Err(Error::already_mounted(mount_root));
        }

        Ok(())
    }

    /// Create the cache directory tree with `dir_mode`
    pub fn prepare_cache_dir(&self) -> Result<&Path> {
        make_directory_tree(&self.cache_dir, self.dir_mode)?;
        let shown = self.cache_dir.display().to_string();
        diagnostics::log_info!("Cache directory ready at {dir}", dir: shown);
        Ok(&self.cache_dir)
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(expand_path(&path.to_string_lossy()))
}
