// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cmd::common::{load_config, parse_mode};
use cmd::{
    check_command, destname_command, formats_command, list_command, mkdir_command,
    mountpoint_command, resolve_command,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "mediafs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to $MEDIAFS_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Comma-separated destination types, overriding the configuration
    #[arg(long, global = true)]
    desttype: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported destination types
    Formats,
    /// Show which format a destination type list selects
    Resolve {
        /// Comma-separated destination types, most preferred first
        types: String,
        /// Print the format as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the in-mount path of source files
    Destname {
        /// Source file paths
        #[arg(required = true)]
        sources: Vec<String>,
    },
    /// List a source directory the way the mount presents it
    List {
        /// Directory relative to the source root
        #[arg(default_value = "/")]
        dir: String,
    },
    /// Create a directory and any missing parents
    Mkdir {
        path: String,
        /// Permission bits in octal
        #[arg(short, long, default_value = "755", value_parser = parse_mode)]
        mode: u32,
    },
    /// Report whether a path is a mount point
    Mountpoint { path: String },
    /// Validate the mount configuration and prepare the cache directory
    Check,
}

#[allow(clippy::print_stdout)]
fn print_line(line: String) {
    println!("{line}");
}

fn main() -> Result<()> {
    diagnostics::init_diagnostics();

    let cli = Cli::parse();
    let desttype = cli.desttype.as_deref();

    match &cli.command {
        Commands::Formats => formats_command(print_line),
        Commands::Resolve { types, json } => resolve_command(types, *json, print_line),
        Commands::Destname { sources } => {
            let config = load_config(cli.config.clone(), desttype)?;
            destname_command(&config, sources, print_line)
        }
        Commands::List { dir } => {
            let config = load_config(cli.config.clone(), desttype)?;
            list_command(&config, dir, print_line)
        }
        Commands::Mkdir { path, mode } => mkdir_command(path, *mode, print_line),
        Commands::Mountpoint { path } => mountpoint_command(path, print_line),
        Commands::Check => {
            let config = load_config(cli.config.clone(), desttype)?;
            check_command(&config, print_line)
        }
    }
}
