// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod commands;
pub mod common;

pub use commands::check::check_command;
pub use commands::destname::destname_command;
pub use commands::formats::formats_command;
pub use commands::list::list_command;
pub use commands::mkdir::mkdir_command;
pub use commands::mountpoint::mountpoint_command;
pub use commands::resolve::resolve_command;
