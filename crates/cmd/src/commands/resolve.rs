// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use mediafs::resolve;

use crate::common::describe_format;

/// Show which format a destination list selects
pub fn resolve_command(types: &str, json: bool, mut out: impl FnMut(String)) -> Result<()> {
    let spec = resolve(types);
    if json {
        out(serde_json::to_string(&spec)?);
    } else {
        out(describe_format(&spec));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_text() {
        let mut lines = Vec::new();
        resolve_command("xyz,mp3,mp4", false, |line| lines.push(line)).unwrap();
        assert_eq!(lines, vec!["mp3 (.mp3) audio=mp3 video=none".to_string()]);
    }

    #[test]
    fn test_resolve_json() {
        let mut lines = Vec::new();
        resolve_command("WEBM", true, |line| lines.push(line)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["container_type"], "webm");
        assert_eq!(value["container_name"], "webm");
        assert_eq!(value["audio_codec"], "opus");
        assert_eq!(value["video_codec"], "vp9");
        assert_eq!(value["destination_token"], "webm");
    }

    #[test]
    fn test_resolve_miss_is_not_an_error() {
        let mut lines = Vec::new();
        resolve_command("xyz,abc", false, |line| lines.push(line)).unwrap();
        assert_eq!(lines, vec!["unknown".to_string()]);
    }
}
