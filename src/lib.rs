// Copyright © 2024 Vite. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Vite Library
//!
//! Vite is a simple and minimal static site generator. A project holds
//! Markdown pages in `pages/`, a template in `templates/`, assets in
//! `static/` and site metadata in `config.toml`. A build renders each page
//! through the template into `build/<page>/index.html` and copies the
//! assets to `build/static/`.
//!
//! The pipeline is split along three traits so each stage can be swapped:
//! [`ContentProcessor`] turns a page into an HTML fragment,
//! [`TemplateRenderer`] wraps it into a document, and [`OutputGenerator`]
//! writes it out.

#![doc = include_str!("../README.md")]

use std::fs;
use std::path::{Path, PathBuf};

/// Module containing core utilities, such as configuration and error handling.
pub mod core;

/// Provides command-line interface utilities.
pub mod cli;

/// Provides Markdown rendering.
pub mod content;

/// Provides output generation utilities.
pub mod generators;

/// Project scaffolding.
pub mod scaffold;

/// Development HTTP server.
pub mod server;

/// The build pipeline.
pub mod site;

/// Provides template rendering utilities.
pub mod template;

/// Terminal status lines.
pub mod ui;

pub use crate::core::config::{ProjectLayout, SiteConfig};
pub use crate::core::error::{Result, ViteError};
pub use crate::site::{build_site, BuildReport, SiteBuilder};

/// Trait for content processing implementations.
///
/// Implementations turn the source text of one page into an HTML fragment.
pub trait ContentProcessor: Send + Sync + std::fmt::Debug {
    /// Renders page source text into HTML.
    fn render(&self, source: &str) -> Result<String>;

    /// Reads the page at `path` and renders it.
    ///
    /// Read failures keep the page path in [`ViteError::IOError`].
    fn render_path(&self, path: &Path) -> Result<String> {
        let source = fs::read_to_string(path)
            .map_err(|e| ViteError::io_error(path, e))?;
        self.render(&source)
    }
}

/// Trait for template rendering implementations.
pub trait TemplateRenderer: Send + Sync + std::fmt::Debug {
    /// Renders a full document from a page body and the site metadata.
    fn render(&self, body: &str, config: &SiteConfig) -> Result<String>;
}

/// Trait for output generation implementations.
pub trait OutputGenerator: Send + Sync + std::fmt::Debug {
    /// Writes a rendered document for the page named `page_name` and
    /// returns the path of the written file.
    fn generate(&self, content: &str, page_name: &str) -> Result<PathBuf>;
}
