// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod check;
pub mod destname;
pub mod formats;
pub mod list;
pub mod mkdir;
pub mod mountpoint;
pub mod resolve;
