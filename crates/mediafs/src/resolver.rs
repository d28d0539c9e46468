// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{FormatSpec, lookup};
use std::fmt;

/// Ordered destination-type tokens, most preferred first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestinationTypeList {
    tokens: Vec<String>,
}

impl DestinationTypeList {
    /// Split a comma-separated list. Empty tokens are kept; they simply
    /// never match.
    #[must_use]
    pub fn parse(csv: &str) -> Self {
        Self {
            tokens: csv.split(',').map(|t| t.trim().to_string()).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First token known to the catalog wins. Unknown when none is.
    #[must_use]
    pub fn resolve(&self) -> FormatSpec {
        self.iter()
            .find_map(|token| Some(lookup(token)).filter(FormatSpec::is_known))
            .unwrap_or_default()
    }
}

impl fmt::Display for DestinationTypeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(","))
    }
}

/// Pick the destination format for a comma-separated type list
#[must_use]
pub fn resolve(type_list_csv: &str) -> FormatSpec {
    let spec = DestinationTypeList::parse(type_list_csv).resolve();
    let container = spec.container_type.to_string();
    diagnostics::log_debug!(
        "Resolved destination types {list} to {container}",
        list: type_list_csv,
        container: container
    );
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ContainerType;

    #[test]
    fn test_parse_keeps_order_and_empties() {
        let list = DestinationTypeList::parse("mp4, ,MP3,");
        let tokens: Vec<&str> = list.iter().collect();
        assert_eq!(tokens, vec!["mp4", "", "MP3", ""]);
        assert_eq!(list.len(), 4);
        assert_eq!(list.to_string(), "mp4,,MP3,");
    }

    #[test]
    fn test_first_valid_token_wins() {
        assert_eq!(resolve("xyz,mp3,mp4").container_type, ContainerType::Mp3);
        assert_eq!(resolve("mp4,mp3").container_type, ContainerType::Mp4);
        assert_eq!(resolve(",,webm").container_type, ContainerType::WebM);
        assert_eq!(resolve(" opus , mp3").container_type, ContainerType::Opus);
    }

    #[test]
    fn test_total_miss() {
        assert_eq!(resolve("xyz,abc").container_type, ContainerType::Unknown);
        assert_eq!(resolve("").container_type, ContainerType::Unknown);
        assert_eq!(resolve(",,,"), FormatSpec::unknown());
    }

    #[test]
    fn test_duplicates_follow_configured_order() {
        assert_eq!(
            resolve("bogus,wav,bogus,wav,mp3").container_type,
            ContainerType::Wav
        );
    }

    #[test]
    fn test_deterministic() {
        let csv = "flac,PRORES,mp4";
        let first = resolve(csv);
        for _ in 0..10 {
            assert_eq!(resolve(csv), first);
        }
        assert_eq!(first.container_type, ContainerType::ProRes);
    }
}
