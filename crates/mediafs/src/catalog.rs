// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The destination format catalog.
//!
//! Every supported output container is a variant of [`ContainerType`]
//! and owns exactly one [`CatalogEntry`]. The mapping is an exhaustive
//! `match`, so adding a container without a table entry does not compile.

use serde::Serialize;
use std::fmt;

/// Audio or video stream
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

/// Codec identifiers known to the catalog.
///
/// `Mjpeg`, `Png` and `Bmp` never appear as a destination codec. They
/// identify embedded cover pictures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecId {
    Mp3,
    Aac,
    H264,
    PcmS16le,
    PcmS16be,
    Vorbis,
    Theora,
    Opus,
    Vp9,
    ProRes,
    Mjpeg,
    Png,
    Bmp,
}

impl CodecId {
    /// Short codec name, as FFmpeg spells it
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Aac => "aac",
            Self::H264 => "h264",
            Self::PcmS16le => "pcm_s16le",
            Self::PcmS16be => "pcm_s16be",
            Self::Vorbis => "vorbis",
            Self::Theora => "theora",
            Self::Opus => "opus",
            Self::Vp9 => "vp9",
            Self::ProRes => "prores",
            Self::Mjpeg => "mjpeg",
            Self::Png => "png",
            Self::Bmp => "bmp",
        }
    }

    /// Descriptive codec name
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Mp3 => "MP3 (MPEG audio layer 3)",
            Self::Aac => "AAC (Advanced Audio Coding)",
            Self::H264 => "H.264 / AVC / MPEG-4 AVC / MPEG-4 part 10",
            Self::PcmS16le => "PCM signed 16-bit little-endian",
            Self::PcmS16be => "PCM signed 16-bit big-endian",
            Self::Vorbis => "Vorbis",
            Self::Theora => "Theora",
            Self::Opus => "Opus (Opus Interactive Audio Codec)",
            Self::Vp9 => "Google VP9",
            Self::ProRes => "Apple ProRes",
            Self::Mjpeg => "Motion JPEG",
            Self::Png => "PNG (Portable Network Graphics) image",
            Self::Bmp => "BMP (Windows and OS/2 bitmap)",
        }
    }

    #[must_use]
    pub const fn media_kind(self) -> MediaKind {
        match self {
            Self::Mp3
            | Self::Aac
            | Self::PcmS16le
            | Self::PcmS16be
            | Self::Vorbis
            | Self::Opus => MediaKind::Audio,
            Self::H264
            | Self::Theora
            | Self::Vp9
            | Self::ProRes
            | Self::Mjpeg
            | Self::Png
            | Self::Bmp => MediaKind::Video,
        }
    }

    /// True for codecs that carry cover art rather than a video track
    #[must_use]
    pub const fn is_album_art(self) -> bool {
        matches!(self, Self::Mjpeg | Self::Png | Self::Bmp)
    }
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supported destination containers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerType {
    Mp3,
    Mp4,
    Wav,
    Ogg,
    WebM,
    Mov,
    Aiff,
    Opus,
    ProRes,
    /// No acceptable destination
    #[default]
    Unknown,
}

/// One row of the catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Configuration token selecting this entry
    pub token: &'static str,
    /// Container name, also used as the filename extension
    pub container_name: &'static str,
    pub audio_codec: CodecId,
    pub video_codec: Option<CodecId>,
}

const fn entry(
    token: &'static str,
    container_name: &'static str,
    audio_codec: CodecId,
    video_codec: Option<CodecId>,
) -> CatalogEntry {
    CatalogEntry {
        token,
        container_name,
        audio_codec,
        video_codec,
    }
}

impl ContainerType {
    const KNOWN: [ContainerType; 9] = [
        Self::Mp3,
        Self::Mp4,
        Self::Wav,
        Self::Ogg,
        Self::WebM,
        Self::Mov,
        Self::Aiff,
        Self::Opus,
        Self::ProRes,
    ];

    /// Every container except `Unknown`, in catalog order
    #[must_use]
    pub fn known() -> &'static [ContainerType] {
        &Self::KNOWN
    }

    /// The catalog row for this container, `None` for `Unknown`
    #[must_use]
    pub const fn entry(self) -> Option<CatalogEntry> {
        use CodecId as C;
        let row = match self {
            Self::Mp3 => entry("mp3", "mp3", C::Mp3, None),
            Self::Mp4 => entry("mp4", "mp4", C::Aac, Some(C::H264)),
            Self::Wav => entry("wav", "wav", C::PcmS16le, None),
            Self::Ogg => entry("ogg", "ogg", C::Vorbis, Some(C::Theora)),
            Self::WebM => entry("webm", "webm", C::Opus, Some(C::Vp9)),
            Self::Mov => entry("mov", "mov", C::Aac, Some(C::H264)),
            Self::Aiff => entry("aiff", "aiff", C::PcmS16be, None),
            Self::Opus => entry("opus", "opus", C::Opus, None),
            Self::ProRes => entry("prores", "mov", C::PcmS16le, Some(C::ProRes)),
            Self::Unknown => return None,
        };
        Some(row)
    }

    /// Canonical configuration token, empty for `Unknown`
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self.entry() {
            Some(row) => row.token,
            None => "",
        }
    }

    /// Case-insensitive token match; anything unrecognised is `Unknown`
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        Self::KNOWN
            .iter()
            .copied()
            .find(|ct| ct.token().eq_ignore_ascii_case(token))
            .unwrap_or(Self::Unknown)
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Whether the container can carry an embedded cover picture.
    ///
    /// Ogg could in principle, but needs a different embedding scheme.
    #[must_use]
    pub const fn supports_album_art(self) -> bool {
        matches!(self, Self::Mp3 | Self::Mp4)
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            other => f.write_str(other.token()),
        }
    }
}

/// The chosen output format: container plus codec pair.
///
/// A spec with `container_type == Unknown` carries no other information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FormatSpec {
    /// Canonical token of the matched catalog entry
    pub destination_token: String,
    pub audio_codec: Option<CodecId>,
    pub video_codec: Option<CodecId>,
    pub container_type: ContainerType,
    pub container_name: &'static str,
}

impl FormatSpec {
    /// The "no acceptable format" spec
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_container(container_type: ContainerType) -> Self {
        match container_type.entry() {
            None => Self::unknown(),
            Some(row) => Self {
                destination_token: row.token.to_string(),
                audio_codec: Some(row.audio_codec),
                video_codec: row.video_codec,
                container_type,
                container_name: row.container_name,
            },
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.container_type.is_known()
    }

    /// Filename extension for transcoded files, `None` if unknown
    #[must_use]
    pub fn extension(&self) -> Option<&'static str> {
        self.is_known().then_some(self.container_name)
    }

    #[must_use]
    pub const fn supports_album_art(&self) -> bool {
        self.container_type.supports_album_art()
    }
}

/// Look up a single destination-type token
#[must_use]
pub fn lookup(token: &str) -> FormatSpec {
    FormatSpec::from_container(ContainerType::from_token(token))
}
