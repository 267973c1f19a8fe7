//! # HTML Output Generation
//!
//! Writes one rendered page to `<output_dir>/<page>/index.html`, optionally
//! minifying it first.
//!
//! # Examples
//!
//! ```rust,no_run
//! use vite::generators::html::HtmlGenerator;
//! use vite::OutputGenerator;
//!
//! let generator = HtmlGenerator::new("build").with_minification(true);
//! let written = generator
//!     .generate("<html><body>Hello</body></html>", "about")
//!     .unwrap();
//! assert!(written.ends_with("about/index.html"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use minify_html::{minify, Cfg};

use crate::{OutputGenerator, Result, ViteError};

/// Name of the file written inside each page directory.
pub const INDEX_FILE: &str = "index.html";

/// HTML page writer rooted at a build directory.
#[derive(Debug, Clone)]
pub struct HtmlGenerator {
    output_dir: PathBuf,
    minify: bool,
}

impl HtmlGenerator {
    /// Creates a generator writing under `output_dir`.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            minify: false,
        }
    }

    /// Enables or disables HTML minification.
    pub fn with_minification(mut self, enable: bool) -> Self {
        self.minify = enable;
        self
    }

    fn minify_html(&self, content: &str) -> Result<String> {
        let cfg = Cfg {
            minify_css: true,
            minify_js: true,
            ..Cfg::default()
        };
        String::from_utf8(minify(content.as_bytes(), &cfg)).map_err(|e| {
            ViteError::io_error(
                &self.output_dir,
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }
}

impl OutputGenerator for HtmlGenerator {
    fn generate(&self, content: &str, page_name: &str) -> Result<PathBuf> {
        let page_dir = self.output_dir.join(page_name);
        if !page_dir.exists() {
            fs::create_dir_all(&page_dir)
                .map_err(|e| ViteError::io_error(&page_dir, e))?;
        }

        let document = if self.minify {
            self.minify_html(content)?
        } else {
            content.to_string()
        };

        let index = page_dir.join(INDEX_FILE);
        fs::write(&index, document)
            .map_err(|e| ViteError::io_error(&index, e))?;
        log::debug!("Wrote {}", index.display());
        Ok(index)
    }
}
