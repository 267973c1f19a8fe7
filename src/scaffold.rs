//! Project scaffolding for `vite new`.

use std::fs;
use std::path::Path;

use log::debug;

use crate::core::config::{
    ProjectLayout, SiteConfig, BUILD_DIR, PAGES_DIR, STATIC_DIR,
    TEMPLATES_DIR,
};
use crate::{Result, ViteError};

const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="author" content="{{author}}">
  <title>{{title}}</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <header>{{{header}}}</header>
  <main>
{{{body}}}
  </main>
  <footer>{{{footer}}}</footer>
</body>
</html>
"#;

const DEFAULT_PAGE: &str = "# Hello, world\n\nEdit `pages/index.md` and run `vite build`.\n";

const DEFAULT_STYLE: &str = "body {\n  max-width: 40em;\n  margin: 2em auto;\n  font-family: sans-serif;\n}\n";

fn default_config() -> SiteConfig {
    SiteConfig {
        title: "My Site".to_string(),
        author: "Anonymous".to_string(),
        header: "My Site".to_string(),
        footer: "Built with vite".to_string(),
        ..SiteConfig::default()
    }
}

/// Creates a new project skeleton at `path`.
///
/// The directory may already exist as long as it is empty.
pub fn create_project(path: &Path) -> Result<()> {
    if path.exists() {
        let mut entries =
            fs::read_dir(path).map_err(|e| ViteError::io_error(path, e))?;
        if entries.next().is_some() {
            return Err(ViteError::ProjectExists {
                path: path.to_path_buf(),
            });
        }
    }

    let layout = ProjectLayout::new(path);
    for dir in [PAGES_DIR, STATIC_DIR, TEMPLATES_DIR, BUILD_DIR] {
        let dir = layout.root().join(dir);
        fs::create_dir_all(&dir).map_err(|e| ViteError::io_error(&dir, e))?;
    }

    let config = default_config();
    let config_toml = toml::to_string(&config).map_err(|e| {
        ViteError::config_error(
            format!("Failed to serialise default config: {}", e),
            Some(layout.config_file()),
        )
    })?;

    let files = [
        (layout.config_file(), config_toml),
        (
            layout.templates_dir().join(&config.template),
            DEFAULT_TEMPLATE.to_string(),
        ),
        (layout.pages_dir().join("index.md"), DEFAULT_PAGE.to_string()),
        (layout.static_dir().join("style.css"), DEFAULT_STYLE.to_string()),
    ];
    for (file, content) in files {
        fs::write(&file, content).map_err(|e| ViteError::io_error(&file, e))?;
        debug!("Created {}", file.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::build_site;
    use tempfile::TempDir;

    #[test]
    fn test_creates_skeleton() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("blog");

        create_project(&root).unwrap();

        let layout = ProjectLayout::new(&root);
        assert!(layout.pages_dir().is_dir());
        assert!(layout.static_dir().is_dir());
        assert!(layout.templates_dir().is_dir());
        assert!(layout.config_file().is_file());
        assert_eq!(
            SiteConfig::load(&layout.config_file()).unwrap(),
            default_config()
        );
    }

    #[test]
    fn test_skeleton_builds() {
        let temp_dir = TempDir::new().unwrap();
        create_project(temp_dir.path()).unwrap();
        let layout = ProjectLayout::new(temp_dir.path());

        let config = SiteConfig::load(&layout.config_file()).unwrap();
        let report = build_site(&layout, &config).unwrap();

        assert_eq!(report.pages, vec!["index"]);
        let html =
            fs::read_to_string(layout.build_dir().join("index/index.html"))
                .unwrap();
        assert!(html.contains("<h1>Hello, world</h1>"));
        assert!(html.contains("<title>My Site</title>"));
    }

    #[test]
    fn test_header_and_footer_keep_markup() {
        let temp_dir = TempDir::new().unwrap();
        create_project(temp_dir.path()).unwrap();
        let layout = ProjectLayout::new(temp_dir.path());

        let config = SiteConfig {
            title: "A & B".to_string(),
            header: "<em>Hi</em>".to_string(),
            footer: "<a href=\"/\">home</a>".to_string(),
            ..default_config()
        };
        let _ = build_site(&layout, &config).unwrap();

        let html =
            fs::read_to_string(layout.build_dir().join("index/index.html"))
                .unwrap();
        assert!(html.contains("<header><em>Hi</em></header>"));
        assert!(html.contains("<footer><a href=\"/\">home</a></footer>"));
        assert!(html.contains("<title>A &amp; B</title>"));
    }

    #[test]
    fn test_refuses_non_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("keep.txt"), "mine").unwrap();

        let err = create_project(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ViteError::ProjectExists { .. }));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("keep.txt")).unwrap(),
            "mine"
        );
    }
}
