//! Static asset copying.
//!
//! `static/` is merged into `build/static/`: files present in the source
//! overwrite their counterpart, files only present in the destination stay.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::{Result, ViteError};

/// Recursively copies `source` into `destination`, returning the number of
/// files copied.
///
/// `destination` is created if needed. A missing `source` copies nothing.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<usize> {
    fs::create_dir_all(destination)
        .map_err(|e| ViteError::io_error(destination, e))?;

    if !source.is_dir() {
        log::warn!(
            "{} does not exist; no static assets copied",
            source.display()
        );
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(source).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| source.to_path_buf());
            let io = e.into_io_error().unwrap_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "filesystem loop",
                )
            });
            ViteError::io_error(path, io)
        })?;

        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| {
                ViteError::io_error(
                    entry.path(),
                    std::io::Error::new(std::io::ErrorKind::Other, e),
                )
            })?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| ViteError::io_error(&target, e))?;
        } else {
            let _ = fs::copy(entry.path(), &target)
                .map_err(|e| ViteError::io_error(&target, e))?;
            log::debug!("Copied {}", relative.display());
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seed(root: &Path) {
        fs::create_dir_all(root.join("css")).unwrap();
        fs::write(root.join("css/site.css"), "body {}").unwrap();
        fs::write(root.join("logo.svg"), "<svg/>").unwrap();
    }

    #[test]
    fn test_copy_nested_tree() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("static");
        let destination = temp_dir.path().join("build/static");
        seed(&source);

        assert_eq!(copy_tree(&source, &destination).unwrap(), 2);
        assert_eq!(
            fs::read_to_string(destination.join("css/site.css")).unwrap(),
            "body {}"
        );
        assert!(destination.join("logo.svg").is_file());
    }

    #[test]
    fn test_copy_is_a_merge() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("static");
        let destination = temp_dir.path().join("build/static");
        seed(&source);

        let _ = copy_tree(&source, &destination).unwrap();
        fs::remove_file(source.join("logo.svg")).unwrap();
        fs::write(source.join("css/site.css"), "main {}").unwrap();
        let _ = copy_tree(&source, &destination).unwrap();

        assert!(destination.join("logo.svg").is_file());
        assert_eq!(
            fs::read_to_string(destination.join("css/site.css")).unwrap(),
            "main {}"
        );
    }

    #[test]
    fn test_missing_source_copies_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("build/static");

        let copied =
            copy_tree(&temp_dir.path().join("static"), &destination).unwrap();
        assert_eq!(copied, 0);
        assert!(destination.is_dir());
    }
}
