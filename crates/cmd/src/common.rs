// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use mediafs::{CodecId, FormatSpec, MediaFsConfig};

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "MEDIAFS_CONFIG";

/// Get the config path with an optional override, falling back to MEDIAFS_CONFIG
pub fn get_config_path_with_override(override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }

    env::var(CONFIG_ENV)
        .map_err(|_| anyhow!("{CONFIG_ENV} environment variable not set and no --config given"))
        .map(PathBuf::from)
}

/// Load the mount configuration, applying a command-line destination list
pub fn load_config(
    override_path: Option<PathBuf>,
    desttype_override: Option<&str>,
) -> Result<MediaFsConfig> {
    let path = get_config_path_with_override(override_path)?;
    let mut config = MediaFsConfig::load(&path)
        .with_context(|| format!("Failed to load configuration {}", path.display()))?;

    if let Some(desttype) = desttype_override {
        diagnostics::log_debug!("Destination types overridden: {desttype}", desttype: desttype);
        config.desttype = desttype.to_string();
    }
    Ok(config)
}

/// Parse an octal permission mode such as `755` or `0o700`
pub fn parse_mode(text: &str) -> Result<u32> {
    let digits = text.trim_start_matches("0o");
    let mode = u32::from_str_radix(digits, 8)
        .map_err(|e| anyhow!("Invalid mode '{}': {}", text, e))?;
    if mode > 0o7777 {
        return Err(anyhow!("Invalid mode '{}': too large", text));
    }
    Ok(mode)
}

/// Human-readable byte count
#[must_use]
pub fn format_file_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut value = size as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{}{}", size, UNITS[unit])
    } else {
        format!("{:.1}{}", value, UNITS[unit])
    }
}

fn codec_label(codec: Option<CodecId>) -> &'static str {
    codec.map_or("none", CodecId::name)
}

/// One-line summary of a format, e.g. `mp4 (.mp4) audio=aac video=h264`
#[must_use]
pub fn describe_format(spec: &FormatSpec) -> String {
    if !spec.is_known() {
        return "unknown".to_string();
    }
    format!(
        "{} (.{}) audio={} video={}",
        spec.destination_token,
        spec.container_name,
        codec_label(spec.audio_codec),
        codec_label(spec.video_codec)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0B");
        assert_eq!(format_file_size(1023), "1023B");
        assert_eq!(format_file_size(1536), "1.5KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0GB");
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("755").unwrap(), 0o755);
        assert_eq!(parse_mode("0o700").unwrap(), 0o700);
        assert_eq!(parse_mode("0755").unwrap(), 0o755);
        assert!(parse_mode("789").is_err());
        assert!(parse_mode("77777").is_err());
    }

    #[test]
    fn test_describe_format() {
        assert_eq!(
            describe_format(&mediafs::resolve("prores")),
            "prores (.mov) audio=pcm_s16le video=prores"
        );
        assert_eq!(
            describe_format(&mediafs::resolve("mp3")),
            "mp3 (.mp3) audio=mp3 video=none"
        );
        assert_eq!(describe_format(&mediafs::resolve("bogus")), "unknown");
    }

    #[test]
    fn test_config_path_override_wins() {
        let path = get_config_path_with_override(Some(PathBuf::from("/etc/mediafs.yaml")))
            .unwrap();
        assert_eq!(path, PathBuf::from("/etc/mediafs.yaml"));
    }
}
