// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use mediafs::is_mount_point;

/// Report whether a path is a mount point.
///
/// An undecidable check is an error, never a "no".
pub fn mountpoint_command(path: &str, mut out: impl FnMut(String)) -> Result<()> {
    if is_mount_point(path)? {
        out(format!("{path} is a mount point"));
    } else {
        out(format!("{path} is not a mount point"));
    }
    Ok(())
}
