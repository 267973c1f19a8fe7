// Copyright © 2024 Vite. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Vite CLI
//!
//! This is the main entry point for the Vite command-line interface.
//! It initializes the logger, parses the command line and runs the chosen action.

use anyhow::Context;
use clap::error::ErrorKind;
use env_logger::Env;
use std::env;
use std::process::ExitCode;
use vite::cli;
use vite::ui;

/// Runs the parsed action against the current working directory.
fn run(action: &cli::Action) -> anyhow::Result<ExitCode> {
    let cwd = env::current_dir()
        .context("Failed to determine the current directory")?;

    match cli::execute(action, &cwd) {
        Ok(code) => Ok(code),
        Err(err) => {
            ui::bad(&format!("Error: {}", err));
            if let Some(hint) = err.hint() {
                ui::que(hint);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// The main entry point for the Vite CLI.
fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let action = match cli::parse_from(env::args_os()) {
        Ok(action) => action,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&action) {
        Ok(code) => code,
        Err(err) => {
            ui::bad(&format!("Error: {:#}", err));
            ExitCode::FAILURE
        }
    }
}
