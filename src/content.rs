//! # Content Processing Module
//!
//! Converts Markdown pages into HTML fragments with `pulldown-cmark`.
//! Syntax the parser does not recognise is emitted according to CommonMark
//! rules; nothing here tries to redefine them.

use crate::{ContentProcessor, Result};
use pulldown_cmark::{html, Options as MarkdownOptions, Parser};

/// Processor for Markdown content with configurable extensions.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownProcessor {
    options: MarkdownOptions,
}

impl Default for MarkdownProcessor {
    /// Tables, strikethrough and footnotes enabled.
    fn default() -> Self {
        Self::new()
            .with_tables(true)
            .with_strikethrough(true)
            .with_footnotes(true)
    }
}

impl MarkdownProcessor {
    /// Creates a new `MarkdownProcessor` accepting plain CommonMark only.
    ///
    /// # Examples
    ///
    /// ```
    /// use vite::content::MarkdownProcessor;
    /// use vite::ContentProcessor;
    ///
    /// let html = MarkdownProcessor::new().render("# Hi").unwrap();
    /// assert_eq!(html, "<h1>Hi</h1>\n");
    /// ```
    pub fn new() -> Self {
        Self {
            options: MarkdownOptions::empty(),
        }
    }

    /// Enables or disables table support in Markdown processing.
    pub fn with_tables(mut self, enable: bool) -> Self {
        self.options.set(MarkdownOptions::ENABLE_TABLES, enable);
        self
    }

    /// Enables or disables strikethrough support in Markdown processing.
    pub fn with_strikethrough(mut self, enable: bool) -> Self {
        self.options
            .set(MarkdownOptions::ENABLE_STRIKETHROUGH, enable);
        self
    }

    /// Enables or disables footnote support in Markdown processing.
    pub fn with_footnotes(mut self, enable: bool) -> Self {
        self.options.set(MarkdownOptions::ENABLE_FOOTNOTES, enable);
        self
    }
}

impl ContentProcessor for MarkdownProcessor {
    fn render(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        Ok(html_output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ViteError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_basic_markdown() {
        let html = MarkdownProcessor::default()
            .render("# Title\n\nSome **bold** text.")
            .unwrap();
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_tables_toggle() {
        let source = "| a | b |\n|---|---|\n| 1 | 2 |\n";

        let with = MarkdownProcessor::new().with_tables(true);
        assert!(with.render(source).unwrap().contains("<table>"));

        let without = MarkdownProcessor::new().with_tables(false);
        assert!(!without.render(source).unwrap().contains("<table>"));
    }

    #[test]
    fn test_copies_are_independent() {
        let source = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        let base = MarkdownProcessor::default();
        let plain = base.with_tables(false);

        assert!(base.render(source).unwrap().contains("<table>"));
        assert!(!plain.render(source).unwrap().contains("<table>"));
    }

    #[test]
    fn test_strikethrough() {
        let html = MarkdownProcessor::default().render("~~old~~").unwrap();
        assert!(html.contains("<del>old</del>"));
    }

    #[test]
    fn test_render_path_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let page = temp_dir.path().join("about.md");
        fs::write(&page, "Hello *world*").unwrap();

        let html = MarkdownProcessor::default().render_path(&page).unwrap();
        assert_eq!(html, "<p>Hello <em>world</em></p>\n");
    }

    #[test]
    fn test_render_path_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let page = temp_dir.path().join("missing.md");

        match MarkdownProcessor::default().render_path(&page) {
            Err(ViteError::IOError { path, .. }) => assert_eq!(path, page),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
