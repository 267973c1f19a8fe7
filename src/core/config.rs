//! # Configuration Module
//!
//! Site-wide settings are read from a `config.toml` at the project root and
//! handed to each component explicitly. The directory layout of a project is
//! fixed and described by [`ProjectLayout`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use vite::core::config::{ProjectLayout, SiteConfig};
//!
//! let layout = ProjectLayout::new(".");
//! let config = SiteConfig::load(&layout.config_file()).unwrap();
//! assert!(!config.template.is_empty());
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, ViteError};

/// Directory holding the Markdown pages.
pub const PAGES_DIR: &str = "pages";
/// Directory holding assets copied verbatim into the build.
pub const STATIC_DIR: &str = "static";
/// Directory holding template files.
pub const TEMPLATES_DIR: &str = "templates";
/// Output root of a build.
pub const BUILD_DIR: &str = "build";
/// Project configuration file name.
pub const CONFIG_FILE: &str = "config.toml";
/// Port used by the development server.
pub const DEFAULT_PORT: u16 = 1911;

/// Site-wide metadata shared by every rendered page.
///
/// The five metadata fields are exposed to the template as `title`, `author`,
/// `header`, `footer`; `template` names the file under `templates/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title.
    #[serde(default)]
    pub title: String,

    /// Site author.
    #[serde(default)]
    pub author: String,

    /// Text placed in the page header.
    #[serde(default)]
    pub header: String,

    /// Text placed in the page footer.
    #[serde(default)]
    pub footer: String,

    /// Template file name, relative to the templates directory.
    #[serde(default = "default_template")]
    pub template: String,

    /// Minify each rendered page before writing it.
    #[serde(default)]
    pub minify: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            header: String::new(),
            footer: String::new(),
            template: default_template(),
            minify: false,
        }
    }
}

impl SiteConfig {
    /// Reads and validates the configuration file at `path`.
    ///
    /// A missing file yields [`ViteError::ConfigMissing`]; any other read or
    /// parse failure yields [`ViteError::ConfigError`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ViteError::ConfigMissing {
                    path: path.to_path_buf(),
                }
            } else {
                ViteError::config_error(
                    format!("Failed to read config file: {}", e),
                    Some(path.to_path_buf()),
                )
            }
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            ViteError::ConfigError { message, .. } => {
                ViteError::config_error(message, Some(path.to_path_buf()))
            }
            other => other,
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from TOML source text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            ViteError::config_error(
                format!("Failed to parse config file: {}", e),
                None,
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects template names that are empty or escape the templates directory.
    pub fn validate(&self) -> Result<()> {
        let template = Path::new(&self.template);
        if self.template.trim().is_empty() {
            return Err(ViteError::config_error(
                "`template` must not be empty",
                None,
            ));
        }
        if template.is_absolute()
            || template
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(ViteError::config_error(
                format!(
                    "`template` must be relative to {}/: {}",
                    TEMPLATES_DIR, self.template
                ),
                None,
            ));
        }
        Ok(())
    }

    /// The template path relative to the project root, as shown to users.
    pub fn template_display_name(&self) -> String {
        format!("{}/{}", TEMPLATES_DIR, self.template)
    }
}

/// The fixed directory layout of a project rooted at one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Creates a layout for the project rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `pages/`
    pub fn pages_dir(&self) -> PathBuf {
        self.root.join(PAGES_DIR)
    }

    /// `static/`
    pub fn static_dir(&self) -> PathBuf {
        self.root.join(STATIC_DIR)
    }

    /// `templates/`
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    /// `build/`
    pub fn build_dir(&self) -> PathBuf {
        self.root.join(BUILD_DIR)
    }

    /// `build/static/`
    pub fn build_static_dir(&self) -> PathBuf {
        self.build_dir().join(STATIC_DIR)
    }

    /// `config.toml`
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}

fn default_template() -> String {
    "index.html".to_string()
}
