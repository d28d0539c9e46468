// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use mediafs::{ContainerType, FormatSpec};

use crate::common::describe_format;

/// Print every destination type the catalog knows
pub fn formats_command(mut out: impl FnMut(String)) -> Result<()> {
    for &container in ContainerType::known() {
        let spec = FormatSpec::from_container(container);
        let art = if spec.supports_album_art() {
            " album-art"
        } else {
            ""
        };
        out(format!("{}{}", describe_format(&spec), art));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_whole_catalog() {
        let mut lines = Vec::new();
        formats_command(|line| lines.push(line)).unwrap();
        assert_eq!(lines.len(), ContainerType::known().len());
        assert_eq!(lines[0], "mp3 (.mp3) audio=mp3 video=none album-art");
        assert!(lines.contains(&"webm (.webm) audio=opus video=vp9".to_string()));
    }
}
