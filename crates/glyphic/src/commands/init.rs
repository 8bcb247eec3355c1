//! Initialize icon generation in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::load_config;

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing glyphic...");

    // Create default config
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    } else {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
    }

    let config = load_config(config_path)?;

    // Create source directory
    let source_dir = Path::new(&config.source.dir);
    if !source_dir.exists() {
        fs::create_dir_all(source_dir).context("Failed to create source directory")?;
        tracing::info!("Created {}/", source_dir.display());
    }

    // Scaffold the shared wrapper next to the output directory, where the
    // default imports ("../icon", "../icon/type") point.
    let output_dir = Path::new(&config.output.dir);
    let icon_dir = output_dir
        .parent()
        .unwrap_or(Path::new(""))
        .join("icon");
    fs::create_dir_all(&icon_dir).context("Failed to create icon directory")?;

    let wrapper_path = icon_dir.join("index.tsx");
    if !wrapper_path.exists() || yes {
        fs::write(&wrapper_path, DEFAULT_WRAPPER).context("Failed to write icon wrapper")?;
        tracing::info!("Created {}", wrapper_path.display());
    }

    let type_path = icon_dir.join("type.ts");
    if !type_path.exists() || yes {
        fs::write(&type_path, DEFAULT_TYPES).context("Failed to write icon prop types")?;
        tracing::info!("Created {}", type_path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!(
        "Add SVG files to {}/ and run 'glyphic generate'.",
        source_dir.display()
    );

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Glyphic Configuration

[source]
# Directory containing the SVG icons (not searched recursively)
dir = "src/svg"

[output]
# Generated components directory. Emptied on every run!
dir = "src/components"

# Extension of generated component files
component_ext = "tsx"

# Extension of the barrel file (index.<entry_ext>)
entry_ext = "ts"

[imports]
# Shared prop type, imported by every component
props = "../icon/type"
props_type = "IconProps"

# Shared wrapper component, rendered around every <svg>
wrapper = "../icon"
wrapper_name = "Icon"
"#;

const DEFAULT_TYPES: &str = r#"import type { CSSProperties, ReactNode } from 'react'

export interface IconProps {
  size?: number | string
  color?: string
  className?: string
  style?: CSSProperties
  onClick?: () => void
}

export interface IconBaseProps extends IconProps {
  children?: ReactNode
}
"#;

const DEFAULT_WRAPPER: &str = r#"import { IconBaseProps } from './type'

const Icon: React.FC<IconBaseProps> = ({ size, color, style, children, ...rest }) => {
  return (
    <span
      role="img"
      style={{ display: 'inline-flex', fontSize: size, color, ...style }}
      {...rest}
    >
      {children}
    </span>
  )
}

export default Icon
"#;
