// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! mediafs -- destination format and path resolution for a filesystem
//! that exposes transcoded media files.
//!
//! Given a configured list of acceptable output containers, mediafs picks
//! the container and codec pair to produce ([`resolve`]) and the name each
//! source file gets inside the mount ([`destination_path`]). Before the
//! mount touches the host, [`is_mount_point`] and [`make_directory_tree`]
//! guard against self-referential mounts and materialise output
//! directories.
//!
//! Resolution is pure and total; only the filesystem-facing calls return
//! [`Result`].

pub mod catalog;
pub mod config;
pub mod dest_path;
pub mod error;
pub mod fs_safety;
pub mod host;
pub mod path_utils;
pub mod resolver;

pub use catalog::{CatalogEntry, CodecId, ContainerType, FormatSpec, MediaKind, lookup};
pub use config::MediaFsConfig;
pub use dest_path::{destination_name, destination_path, replace_extension};
pub use error::{Error, Result};
pub use fs_safety::{
    FileIdentity, FileStat, HostStat, available_space, is_mount_point, is_mount_point_with,
    make_directory_tree,
};
pub use host::{expand_path, sanitise_name};
pub use resolver::{DestinationTypeList, resolve};
