// Copyright © 2024 Vite. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Site Builder
//!
//! One build pass: every page under `pages/` is rendered from Markdown,
//! wrapped in the configured template and written to
//! `build/<page>/index.html`; then `static/` is merged into `build/static/`.
//!
//! The build output is never cleaned. Pages overwrite their previous
//! `index.html`, static files are merged without deleting stale ones.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cpu_time::ProcessTime;
use log::{debug, info, warn};

use crate::content::MarkdownProcessor;
use crate::core::config::{ProjectLayout, SiteConfig};
use crate::generators::{assets, HtmlGenerator};
use crate::template::HandlebarsRenderer;
use crate::{
    ui, ContentProcessor, OutputGenerator, Result, TemplateRenderer,
    ViteError,
};

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Output directory names written, in build order.
    pub pages: Vec<String>,
    /// Number of static files copied.
    pub assets: usize,
    /// Process CPU time spent rendering pages and copying assets.
    pub elapsed: Duration,
}

/// Lists the pages to build, sorted by file name.
///
/// Fails with [`ViteError::EmptyPages`] when `pages_dir` has no entries at
/// all. Subdirectories are not pages and are skipped.
pub fn discover_pages(pages_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(pages_dir)
        .map_err(|e| ViteError::io_error(pages_dir, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| ViteError::io_error(pages_dir, e))?;

    if entries.is_empty() {
        return Err(ViteError::EmptyPages {
            path: pages_dir.to_path_buf(),
        });
    }

    let mut pages = Vec::with_capacity(entries.len());
    for path in entries {
        if path.is_dir() {
            warn!("Skipping directory {} in pages", path.display());
            continue;
        }
        pages.push(path);
    }
    pages.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(pages)
}

/// Output directory name for a page: its file name minus the extension.
pub fn page_name(page: &Path) -> String {
    page.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Build pipeline over pluggable renderers.
#[derive(Debug)]
pub struct SiteBuilder {
    layout: ProjectLayout,
    config: SiteConfig,
    content_processor: Box<dyn ContentProcessor>,
    template_renderer: Box<dyn TemplateRenderer>,
    output_generator: Box<dyn OutputGenerator>,
}

impl SiteBuilder {
    /// Creates a new `SiteBuilder`.
    pub fn new(
        layout: ProjectLayout,
        config: SiteConfig,
        content_processor: Box<dyn ContentProcessor>,
        template_renderer: Box<dyn TemplateRenderer>,
        output_generator: Box<dyn OutputGenerator>,
    ) -> Self {
        Self {
            layout,
            config,
            content_processor,
            template_renderer,
            output_generator,
        }
    }

    /// Renders `pages` and copies static assets.
    ///
    /// The first failing page aborts the build; pages written before it
    /// stay on disk.
    pub fn build(&self, pages: &[PathBuf]) -> Result<BuildReport> {
        let started = ProcessTime::now();
        let mut written = Vec::with_capacity(pages.len());

        for page in pages {
            let name = self.render_page(page)?;
            let file_name = page
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui::run(&format!("Rendered {}.", file_name));
            written.push(name);
        }

        let copied = assets::copy_tree(
            &self.layout.static_dir(),
            &self.layout.build_static_dir(),
        )?;
        debug!("Copied {} static file(s)", copied);

        Ok(BuildReport {
            pages: written,
            assets: copied,
            elapsed: started.elapsed(),
        })
    }

    fn render_page(&self, page: &Path) -> Result<String> {
        let body = self.content_processor.render_path(page)?;
        let document = self.template_renderer.render(&body, &self.config)?;
        let name = page_name(page);
        let _ = self.output_generator.generate(&document, &name)?;
        Ok(name)
    }
}

/// Runs a full build of the project at `layout` with the stock renderers.
///
/// The pages directory is checked before the template is loaded, and the
/// template is loaded before anything is written: a missing template leaves
/// `build/` untouched.
pub fn build_site(
    layout: &ProjectLayout,
    config: &SiteConfig,
) -> Result<BuildReport> {
    let pages = discover_pages(&layout.pages_dir())?;
    info!("Building {} page(s) in {}", pages.len(), layout.root().display());

    let renderer = HandlebarsRenderer::load(layout, config)?;
    let generator =
        HtmlGenerator::new(layout.build_dir()).with_minification(config.minify);

    let builder = SiteBuilder::new(
        layout.clone(),
        config.clone(),
        Box::new(MarkdownProcessor::default()),
        Box::new(renderer),
        Box::new(generator),
    );

    builder.build(&pages)
}
