//! Icon component generation command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use glyphic_build::IconBuilder;

use crate::config::load_config;

/// Run the generate command.
pub async fn run(
    config_path: &Path,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    tracing::info!("Generating icon components...");

    let config = load_config(config_path)?.build_config(source, output, dry_run);
    let result = IconBuilder::new(config).build().await?;

    if result.dry_run {
        tracing::info!(
            "Dry run: {} components would be generated in {}ms",
            result.components,
            result.duration_ms
        );
    } else {
        tracing::info!(
            "Generated {} components in {}ms",
            result.components,
            result.duration_ms
        );
    }

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
