//! # Error Handling for Vite
//!
//! This module defines the error type shared by every stage of the build
//! pipeline, the dev server and the project scaffolder. The `thiserror`
//! crate derives the `Display` and `Error` implementations.

use std::path::PathBuf;
use thiserror::Error;

/// A unified result type for the Vite library.
///
/// This type alias simplifies function signatures by defining a result type that always uses `ViteError` as the error variant.
pub type Result<T> = std::result::Result<T, ViteError>;

/// The main error type for Vite, encompassing all potential error cases.
#[derive(Error, Debug)]
pub enum ViteError {
    /// No `config.toml` was found in the project directory.
    #[error("{} not found.", .path.display())]
    ConfigMissing {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// The configuration file exists but could not be read or parsed.
    #[error("Configuration error: {message}.")]
    ConfigError {
        /// Detailed description of the configuration error.
        message: String,
        /// Optional path of the configuration file that caused the error.
        path: Option<PathBuf>,
    },

    /// The pages directory contains no entries.
    #[error("{} directory is empty. Nothing to build.", .path.display())]
    EmptyPages {
        /// The pages directory that was inspected.
        path: PathBuf,
    },

    /// The template named in the configuration does not exist.
    #[error("specified template not found: {name}")]
    TemplateNotFound {
        /// Template path relative to the project root, e.g. `templates/index.html`.
        name: String,
    },

    /// Error related to template compilation or rendering.
    #[error(
        "Template rendering error: {message} in template `{template}`."
    )]
    TemplateRenderingError {
        /// Description of the template rendering error.
        message: String,
        /// The template file associated with the error.
        template: String,
        /// Optional source error providing additional context, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `serve` was invoked before anything was built.
    #[error("{} directory not found.", .path.display())]
    BuildDirMissing {
        /// The expected build output directory.
        path: PathBuf,
    },

    /// The dev server could not listen on its address.
    #[error("Failed to bind {addr}: {source}")]
    BindError {
        /// The address the server tried to listen on.
        addr: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// `new` was pointed at a directory that already has content.
    #[error("{} already exists and is not empty.", .path.display())]
    ProjectExists {
        /// The requested project directory.
        path: PathBuf,
    },

    /// IO error encountered during file operations.
    #[error("File IO error at `{path:?}`: {source}")]
    IOError {
        /// Path associated with the IO error.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for ViteError {
    /// Converts a standard IO error into a `ViteError::IOError` with an empty path.
    fn from(source: std::io::Error) -> Self {
        ViteError::IOError {
            path: PathBuf::new(),
            source,
        }
    }
}

impl ViteError {
    /// Creates a `ConfigError` with a specific message.
    ///
    /// # Parameters
    /// - `message`: A description of the configuration error.
    /// - `path`: Optional path of the configuration file causing the error.
    pub fn config_error<S: Into<String>>(
        message: S,
        path: Option<PathBuf>,
    ) -> Self {
        ViteError::ConfigError {
            message: message.into(),
            path,
        }
    }

    /// Creates a `TemplateRenderingError` with a message, template name, and optional source.
    pub fn template_rendering_error<S: Into<String>>(
        message: S,
        template: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ViteError::TemplateRenderingError {
            message: message.into(),
            template,
            source,
        }
    }

    /// Wraps an IO error as an `IOError` variant with the specified path.
    pub fn io_error<P: Into<PathBuf>>(
        path: P,
        source: std::io::Error,
    ) -> Self {
        ViteError::IOError {
            path: path.into(),
            source,
        }
    }

    /// Returns a follow-up hint for errors the user can fix from the shell.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ViteError::ConfigMissing { .. } => {
                Some("Are you sure you're in a project directory?")
            }
            ViteError::BuildDirMissing { .. } => {
                Some("Run `vite build` inside the project first.")
            }
            ViteError::BindError { .. } => {
                Some("Is another server already using this port?")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_template_not_found_message() {
        let err = ViteError::TemplateNotFound {
            name: "templates/missing.html".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "specified template not found: templates/missing.html"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = ViteError::io_error(
            "pages/index.md",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        match err {
            ViteError::IOError { path, .. } => {
                assert_eq!(path, PathBuf::from("pages/index.md"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_config_missing_has_hint() {
        let err = ViteError::ConfigMissing {
            path: PathBuf::from("config.toml"),
        };
        assert_eq!(err.to_string(), "config.toml not found.");
        assert!(err.hint().is_some());
        assert!(ViteError::EmptyPages {
            path: PathBuf::from("pages")
        }
        .hint()
        .is_none());
    }
}
