//! # Template Rendering Module
//!
//! Merges a rendered page body and the site metadata into a full HTML
//! document using a single Handlebars template.
//!
//! Templates see `title`, `author`, `header`, `footer` and `body`. Only the
//! metadata fields are HTML-escaped; write `{{{body}}}` to emit the page.

use crate::core::config::{ProjectLayout, SiteConfig};
use crate::{Result, TemplateRenderer, ViteError};
use handlebars::Handlebars;
use serde_json::json;
use std::fs;
use std::io::ErrorKind;

/// Renderer for a single Handlebars page template.
pub struct HandlebarsRenderer {
    engine: Handlebars<'static>,
    name: String,
}

impl std::fmt::Debug for HandlebarsRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlebarsRenderer")
            .field("name", &self.name)
            .finish()
    }
}

impl HandlebarsRenderer {
    /// Loads the template `config` names from the project's templates
    /// directory and compiles it.
    ///
    /// Returns [`ViteError::TemplateNotFound`] when the file is missing and
    /// [`ViteError::TemplateRenderingError`] when it does not compile.
    pub fn load(layout: &ProjectLayout, config: &SiteConfig) -> Result<Self> {
        let display_name = config.template_display_name();
        let path = layout.templates_dir().join(&config.template);

        let source = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ViteError::TemplateNotFound {
                    name: display_name.clone(),
                }
            } else {
                ViteError::io_error(&path, e)
            }
        })?;

        Self::from_source(&display_name, &source)
    }

    /// Compiles a template from source text under the given name.
    pub fn from_source(name: &str, source: &str) -> Result<Self> {
        let mut engine = Handlebars::new();
        engine.register_escape_fn(handlebars::html_escape);
        engine
            .register_template_string(name, source)
            .map_err(|e| {
                ViteError::template_rendering_error(
                    format!("Failed to register template: {}", e),
                    name.to_string(),
                    Some(Box::new(e)),
                )
            })?;

        log::debug!("Compiled template {}", name);
        Ok(Self {
            engine,
            name: name.to_string(),
        })
    }

    /// The name the template was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, body: &str, config: &SiteConfig) -> Result<String> {
        let context = json!({
            "title": config.title,
            "author": config.author,
            "header": config.header,
            "footer": config.footer,
            "body": body,
        });

        self.engine.render(&self.name, &context).map_err(|e| {
            ViteError::template_rendering_error(
                format!("Template rendering failed: {}", e),
                self.name.clone(),
                Some(Box::new(e)),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site() -> SiteConfig {
        SiteConfig {
            title: "Tom & Jerry".to_string(),
            author: "Ana".to_string(),
            header: "Hi".to_string(),
            footer: "Bye".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_render_fields_and_body() {
        let renderer = HandlebarsRenderer::from_source(
            "page",
            "<title>{{title}}</title><h1>{{header}}</h1>{{{body}}}<p>{{author}} {{footer}}</p>",
        )
        .unwrap();

        let html = renderer.render("<p>x</p>", &site()).unwrap();
        assert_eq!(
            html,
            "<title>Tom &amp; Jerry</title><h1>Hi</h1><p>x</p><p>Ana Bye</p>"
        );
    }

    #[test]
    fn test_double_stash_body_is_escaped() {
        let renderer =
            HandlebarsRenderer::from_source("page", "{{body}}").unwrap();
        let html = renderer.render("<b>x</b>", &site()).unwrap();
        assert_eq!(html, "&lt;b&gt;x&lt;/b&gt;");
    }

    #[test]
    fn test_load_missing_template() {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp_dir.path());
        fs::create_dir(layout.templates_dir()).unwrap();
        let config = SiteConfig {
            template: "nope.html".to_string(),
            ..site()
        };

        let err = HandlebarsRenderer::load(&layout, &config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "specified template not found: templates/nope.html"
        );
    }

    #[test]
    fn test_load_existing_template() {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp_dir.path());
        fs::create_dir(layout.templates_dir()).unwrap();
        fs::write(layout.templates_dir().join("index.html"), "[{{{body}}}]")
            .unwrap();

        let renderer = HandlebarsRenderer::load(&layout, &site()).unwrap();
        assert_eq!(renderer.name(), "templates/index.html");
        assert_eq!(renderer.render("ok", &site()).unwrap(), "[ok]");
    }

    #[test]
    fn test_invalid_template_syntax() {
        let err =
            HandlebarsRenderer::from_source("broken", "{{#if}}").unwrap_err();
        assert!(matches!(err, ViteError::TemplateRenderingError { .. }));
    }
}
