//! List discovered icons and their component names.

use std::path::{Path, PathBuf};

use anyhow::Result;
use glyphic_build::{check_names, discover_icons};

use crate::config::load_config;

/// Run the list command.
pub fn run(config_path: &Path, source: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?.build_config(source, None, true);
    let icons = discover_icons(&config.source_dir)?;

    let width = icons
        .iter()
        .map(|i| i.name.filename.len())
        .max()
        .unwrap_or(0);

    for icon in &icons {
        println!(
            "{:width$}  {}",
            icon.name.filename,
            icon.name.component_name,
            width = width
        );
    }

    tracing::info!(
        "{} icons in {}",
        icons.len(),
        config.source_dir.display()
    );

    check_names(&icons, &config.emit)?;

    Ok(())
}
