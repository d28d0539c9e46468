// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use diagnostics::log_info;
use mediafs::make_directory_tree;

/// Create a directory and any missing parents
pub fn mkdir_command(path: &str, mode: u32, mut out: impl FnMut(String)) -> Result<()> {
    make_directory_tree(path, mode)?;

    log_info!("Directory tree ready: {path}", path: path);
    out(path.to_string());
    Ok(())
}
