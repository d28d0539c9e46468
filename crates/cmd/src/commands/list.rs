// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::path::{Component, Path};

use anyhow::{Context, Result, anyhow};
use diagnostics::{log_debug, log_warn};
use mediafs::{MediaFsConfig, destination_name};

use crate::common::format_file_size;

/// One line of the virtual listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Name as it appears inside the mount
    pub name: String,
    pub is_dir: bool,
    /// Size of the source file, zero for directories
    pub source_size: u64,
}

impl ListEntry {
    #[must_use]
    pub fn format_line(&self) -> String {
        if self.is_dir {
            format!("{:>10}  {}/", "-", self.name)
        } else {
            format!("{:>10}  {}", format_file_size(self.source_size), self.name)
        }
    }
}

/// Entries of `dir` (relative to the source root) as the mount shows them.
///
/// Files get their destination names; when no destination type is known
/// they are hidden, since nothing could be produced for them. Dotfiles
/// are always hidden. When several sources map to one name, the first
/// source in name order wins.
pub fn list_entries(config: &MediaFsConfig, dir: &str) -> Result<Vec<ListEntry>> {
    let relative = Path::new(dir.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(anyhow!("Directory '{}' leaves the source root", dir));
    }
    let host_dir = config.source_root.join(relative);
    let spec = config.format();

    let shown = host_dir.display().to_string();
    log_debug!("Listing source directory {dir}", dir: shown);

    let read_dir = std::fs::read_dir(&host_dir)
        .with_context(|| format!("Failed to read directory {}", host_dir.display()))?;

    let mut sourced = Vec::new();
    for entry in read_dir {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }

        // Symlinks are followed; dangling ones are skipped
        let Ok(metadata) = std::fs::metadata(entry.path()) else {
            log_debug!("Skipping unreadable entry {name}", name: name);
            continue;
        };
        if metadata.is_dir() {
            let entry = ListEntry {
                name: name.clone(),
                is_dir: true,
                source_size: 0,
            };
            sourced.push((name, entry));
        } else if spec.is_known() {
            let entry = ListEntry {
                name: destination_name(&name, &spec),
                is_dir: false,
                source_size: metadata.len(),
            };
            sourced.push((name, entry));
        }
    }

    sourced.sort_by(|a, b| a.0.cmp(&b.0));
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(sourced.len());
    for (source, entry) in sourced {
        if seen.insert(entry.name.clone()) {
            entries.push(entry);
        } else {
            let shown = entry.name.as_str();
            log_warn!("Hiding {file}: {name} is already listed", file: source, name: shown);
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Print the virtual listing of a source directory
pub fn list_command(config: &MediaFsConfig, dir: &str, mut out: impl FnMut(String)) -> Result<()> {
    for entry in list_entries(config, dir)? {
        out(entry.format_line());
    }
    Ok(())
}
