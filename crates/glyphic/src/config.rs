//! Configuration file structure (glyphic.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glyphic_build::BuildConfig;
use glyphic_emit::EmitContext;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub imports: ImportsConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// Directory holding the `*.svg` icons
    #[serde(default = "default_source_dir")]
    pub dir: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Generated components directory (emptied on every run)
    #[serde(default = "default_output_dir")]
    pub dir: String,
    #[serde(default = "default_component_ext")]
    pub component_ext: String,
    #[serde(default = "default_entry_ext")]
    pub entry_ext: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ImportsConfig {
    #[serde(default = "default_props")]
    pub props: String,
    #[serde(default = "default_props_type")]
    pub props_type: String,
    #[serde(default = "default_wrapper")]
    pub wrapper: String,
    #[serde(default = "default_wrapper_name")]
    pub wrapper_name: String,
}

fn default_source_dir() -> String {
    "src/svg".to_string()
}
fn default_output_dir() -> String {
    "src/components".to_string()
}
fn default_component_ext() -> String {
    "tsx".to_string()
}
fn default_entry_ext() -> String {
    "ts".to_string()
}
fn default_props() -> String {
    "../icon/type".to_string()
}
fn default_props_type() -> String {
    "IconProps".to_string()
}
fn default_wrapper() -> String {
    "../icon".to_string()
}
fn default_wrapper_name() -> String {
    "Icon".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: default_source_dir(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            component_ext: default_component_ext(),
            entry_ext: default_entry_ext(),
        }
    }
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            props: default_props(),
            props_type: default_props_type(),
            wrapper: default_wrapper(),
            wrapper_name: default_wrapper_name(),
        }
    }
}

impl ConfigFile {
    /// Build pipeline settings, with command line overrides applied.
    pub fn build_config(
        self,
        source: Option<PathBuf>,
        output: Option<PathBuf>,
        dry_run: bool,
    ) -> BuildConfig {
        BuildConfig {
            source_dir: source.unwrap_or_else(|| PathBuf::from(&self.source.dir)),
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.output.dir)),
            emit: EmitContext {
                props_import: self.imports.props,
                props_type: self.imports.props_type,
                wrapper_import: self.imports.wrapper,
                wrapper_name: self.imports.wrapper_name,
                component_ext: self.output.component_ext,
                entry_ext: self.output.entry_ext,
            },
            dry_run,
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = load_config(&temp.path().join("glyphic.toml")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("glyphic.toml");
        fs::write(&path, "[source]\ndir = \"assets/icons\"\n\n[imports]\nwrapper_name = \"Svg\"\n")
            .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.source.dir, "assets/icons");
        assert_eq!(config.output.dir, "src/components");
        assert_eq!(config.imports.wrapper_name, "Svg");
        assert_eq!(config.imports.props_type, "IconProps");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("glyphic.toml");
        fs::write(&path, "[source\n").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn command_line_overrides_paths() {
        let build = ConfigFile::default().build_config(
            Some(PathBuf::from("icons")),
            None,
            true,
        );

        assert_eq!(build.source_dir, PathBuf::from("icons"));
        assert_eq!(build.output_dir, PathBuf::from("src/components"));
        assert_eq!(build.emit, EmitContext::default());
        assert!(build.dry_run);
    }
}
