// Copyright © 2024 Vite. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line interface for Vite
//!
//! This module provides the command-line interface for the Vite static site generator.
//! It handles argument parsing and dispatches to the build, serve and scaffolding code.
//!
//! # Examples
//!
//! ```
//! use vite::cli::{self, Action};
//! use std::path::PathBuf;
//!
//! let action = cli::parse_from(["vite", "new", "my-site"]).unwrap();
//! assert_eq!(action, Action::New { path: PathBuf::from("my-site") });
//! ```

use crate::core::config::{ProjectLayout, SiteConfig, DEFAULT_PORT};
use crate::{scaffold, server, site, ui, Result};
use clap::{value_parser, Arg, Command};
use log::{debug, info};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// The current version of Vite, as defined in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Scaffold a new project at `path`.
    New {
        /// Directory to create.
        path: PathBuf,
    },
    /// Build the project in the current directory.
    Build,
    /// Serve the build directory of the current project.
    Serve,
}

/// Builds and configures the Vite command-line interface.
pub fn build() -> Command {
    debug!("Building CLI command structure");

    Command::new("vite")
        .about("A simple and minimal static site generator.")
        .version(VERSION)
        .override_usage("vite [new | build | serve]")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("new")
                .about("Create a new project")
                .arg(
                    Arg::new("path")
                        .help("Directory for the new project")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("build")
                .about("Render pages/ and static/ into build/"),
        )
        .subcommand(
            Command::new("serve").about(format!(
                "Serve build/ at http://localhost:{}",
                DEFAULT_PORT
            )),
        )
}

/// Parses command-line arguments into an [`Action`].
///
/// Extra positional arguments after `build` or `serve` are rejected.
pub fn parse_from<I, T>(args: I) -> std::result::Result<Action, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build().try_get_matches_from(args)?;

    match matches.subcommand() {
        Some(("new", sub_matches)) => {
            let path = sub_matches
                .get_one::<PathBuf>("path")
                .cloned()
                .ok_or_else(|| {
                    build().error(
                        clap::error::ErrorKind::MissingRequiredArgument,
                        "a project path is required",
                    )
                })?;
            Ok(Action::New { path })
        }
        Some(("build", _)) => Ok(Action::Build),
        Some(("serve", _)) => Ok(Action::Serve),
        _ => Err(build().error(
            clap::error::ErrorKind::InvalidSubcommand,
            "unknown action",
        )),
    }
}

/// Executes `action` for the project rooted at `cwd`.
///
/// Returns the process exit code for outcomes that are not errors: an
/// interrupted `serve` ends with failure.
pub fn execute(action: &Action, cwd: &Path) -> Result<ExitCode> {
    info!("Parsed arguments: {:?}", action);

    match action {
        Action::New { path } => {
            let target = cwd.join(path);
            scaffold::create_project(&target)?;
            ui::good(&format!("Created a new project at {}.", path.display()));
            Ok(ExitCode::SUCCESS)
        }
        Action::Build => {
            let layout = ProjectLayout::new(cwd);
            let config = SiteConfig::load(&layout.config_file())?;
            let report = site::build_site(&layout, &config)?;
            ui::good(&format!(
                "Done in {:.5}s.",
                report.elapsed.as_secs_f64()
            ));
            Ok(ExitCode::SUCCESS)
        }
        Action::Serve => {
            let layout = ProjectLayout::new(cwd);
            server::serve(&layout.build_dir(), DEFAULT_PORT)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
