// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Result, anyhow};
use mediafs::MediaFsConfig;

/// Print the in-mount path of each source file
pub fn destname_command(
    config: &MediaFsConfig,
    sources: &[String],
    mut out: impl FnMut(String),
) -> Result<()> {
    if !config.format().is_known() {
        return Err(anyhow!(
            "No acceptable destination format in '{}'",
            config.desttype
        ));
    }

    for source in sources {
        out(config.destination_path(source));
    }
    Ok(())
}
