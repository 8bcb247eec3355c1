//! Source icon discovery.

use std::fs;
use std::path::{Path, PathBuf};

use glyphic_svg::IconName;
use walkdir::WalkDir;

use crate::builder::BuildError;

/// An icon file found in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIcon {
    /// Absolute path to the SVG file
    pub path: PathBuf,

    /// Names derived from the file name
    pub name: IconName,
}

/// Find all `*.svg` files directly inside `source_dir`, sorted by file name.
pub fn discover_icons(source_dir: &Path) -> Result<Vec<SourceIcon>, BuildError> {
    if !source_dir.is_dir() {
        return Err(BuildError::Discovery(format!(
            "Source directory not found: {}",
            source_dir.display()
        )));
    }

    let root = fs::canonicalize(source_dir)
        .map_err(|e| BuildError::Discovery(format!("{}: {}", source_dir.display(), e)))?;

    let mut icons = Vec::new();

    for entry in WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| BuildError::Discovery(e.to_string()))?;
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
        if !is_svg {
            continue;
        }

        icons.push(SourceIcon {
            path: path.to_path_buf(),
            name: IconName::from_path(path),
        });
    }

    Ok(icons)
}
