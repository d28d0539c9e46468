// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use diagnostics::log_info;
use mediafs::{MediaFsConfig, available_space};

use crate::common::{describe_format, format_file_size};

/// Run the mount guard and get the cache directory ready
pub fn check_command(config: &MediaFsConfig, mut out: impl FnMut(String)) -> Result<()> {
    config
        .validate_mount()
        .with_context(|| format!("Mount at {} refused", config.mount_root.display()))?;
    out(format!("format: {}", describe_format(&config.format())));
    out(format!("source: {}", config.source_root.display()));
    out(format!("mount: {}", config.mount_root.display()));

    let cache_dir = config.prepare_cache_dir()?;
    let free = available_space(cache_dir)?;
    out(format!(
        "cache: {} ({} free)",
        cache_dir.display(),
        format_file_size(free)
    ));

    let mount = config.mount_root.display().to_string();
    log_info!("Mount at {mount} accepted", mount: mount);
    Ok(())
}
