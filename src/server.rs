// Copyright © 2024 Vite. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Development Server
//!
//! Serves the build directory over plain HTTP. Directories answer with their
//! `index.html`, or a listing when they have none. The server stops on
//! Ctrl+C.

use std::path::{Path, PathBuf};

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::info;

use crate::{ui, Result, ViteError};

/// Registers the static file service for `root`.
pub fn configure(root: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |conf| {
        let _ = conf.service(
            Files::new("/", root)
                .index_file("index.html")
                .show_files_listing()
                .redirect_to_slash_directory()
                .use_last_modified(true),
        );
    }
}

/// Serves `build_dir` on `0.0.0.0:<port>` until interrupted.
///
/// Returns once the server has shut down after a stop signal.
pub fn serve(build_dir: &Path, port: u16) -> Result<()> {
    if !build_dir.is_dir() {
        return Err(ViteError::BuildDirMissing {
            path: build_dir.to_path_buf(),
        });
    }

    let root = build_dir.to_path_buf();
    actix_web::rt::System::new().block_on(run(root, port))
}

async fn run(root: PathBuf, port: u16) -> Result<()> {
    info!("Serving {} on port {}", root.display(), port);
    let bind_root = root.clone();
    let addr = format!("0.0.0.0:{}", port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(configure(root.clone()))
    })
    .bind(&addr)
    .map_err(|source| ViteError::BindError {
        addr: addr.clone(),
        source,
    })?
    .run();

    ui::run(&format!(
        "Serving the {} directory at http://localhost:{}",
        ui::emphasis("build"),
        port
    ));
    ui::info("Ctrl+C to stop.");

    server.await.map_err(|e| ViteError::io_error(&bind_root, e))?;
    ui::info("Stopping server.");
    Ok(())
}
