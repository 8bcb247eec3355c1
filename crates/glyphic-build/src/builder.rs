//! Icon component builder.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use glyphic_emit::{ComponentTarget, EmitContext, ReactTarget, RenderedFile, ENTRY_STEM};
use glyphic_svg::{normalize, IconName};

use crate::discover::{discover_icons, SourceIcon};
use crate::output::{reset_output_dir, write_files};

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory containing the `*.svg` sources (not searched recursively)
    pub source_dir: PathBuf,

    /// Directory that receives the generated files; emptied on every run
    pub output_dir: PathBuf,

    /// Import paths, names and extensions of the generated source
    pub emit: EmitContext,

    /// Render everything but leave the output directory untouched
    pub dry_run: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src/svg"),
            output_dir: PathBuf::from("src/components"),
            emit: EmitContext::default(),
            dry_run: false,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of components generated
    pub components: usize,

    /// Paths of every generated file, components first, barrel file last
    pub files: Vec<PathBuf>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,

    /// Whether the run skipped writing
    pub dry_run: bool,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read source directory: {0}")]
    Discovery(String),

    #[error("Component name {name} is derived from both {first} and {second}")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    #[error("{path} maps to the reserved name {name}")]
    ReservedName { name: String, path: String },

    #[error("Malformed input: {path}: {message}")]
    MalformedInput { path: String, message: String },

    #[error("Failed to generate {path}: {message}")]
    Format { path: String, message: String },

    #[error("Failed to reset output directory: {0}")]
    OutputReset(String),

    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Render task failed: {0}")]
    Task(String),
}

/// Generates one component per icon plus a barrel file.
#[derive(Clone)]
pub struct IconBuilder {
    config: Arc<BuildConfig>,
    target: Arc<dyn ComponentTarget>,
}

impl IconBuilder {
    /// Create a builder for React components.
    pub fn new(config: BuildConfig) -> Self {
        Self::with_target(config, Arc::new(ReactTarget::new()))
    }

    /// Create a builder for a specific component target.
    pub fn with_target(config: BuildConfig, target: Arc<dyn ComponentTarget>) -> Self {
        Self {
            config: Arc::new(config),
            target,
        }
    }

    /// Run the full pipeline.
    ///
    /// Nothing in the output directory changes unless every file rendered
    /// successfully.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let builder = self.clone();
        let (components, rendered) = tokio::task::spawn_blocking(move || builder.prepare())
            .await
            .map_err(|e| BuildError::Task(e.to_string()))??;

        let files: Vec<PathBuf> = rendered
            .iter()
            .map(|f| self.config.output_dir.join(&f.file_name))
            .collect();

        if self.config.dry_run {
            for path in &files {
                tracing::info!("Would write {}", path.display());
            }
        } else {
            reset_output_dir(&self.config.output_dir, &self.config.source_dir).await?;
            write_files(&self.config.output_dir, &rendered).await?;
        }

        Ok(BuildResult {
            components,
            files,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
            dry_run: self.config.dry_run,
        })
    }

    /// Discover, check and render every icon. Blocks on file IO and rayon.
    fn prepare(&self) -> Result<(usize, Vec<RenderedFile>), BuildError> {
        let icons = discover_icons(&self.config.source_dir)?;
        tracing::info!(
            "Found {} icons in {}",
            icons.len(),
            self.config.source_dir.display()
        );

        check_names(&icons, &self.config.emit)?;

        let rendered = self.render(&icons)?;
        Ok((icons.len(), rendered))
    }

    /// Render every component in parallel, then the barrel file.
    pub fn render(&self, icons: &[SourceIcon]) -> Result<Vec<RenderedFile>, BuildError> {
        let mut files: Vec<RenderedFile> = icons
            .par_iter()
            .map(|icon| self.render_icon(icon))
            .collect::<Result<_, _>>()?;

        let names: Vec<IconName> = icons.iter().map(|i| i.name.clone()).collect();
        let entry = self
            .target
            .render_entry(&names, &self.config.emit)
            .map_err(|e| BuildError::Format {
                path: self.config.emit.entry_file(),
                message: e.to_string(),
            })?;
        files.push(entry);

        Ok(files)
    }

    fn render_icon(&self, icon: &SourceIcon) -> Result<RenderedFile, BuildError> {
        let malformed = |message: String| BuildError::MalformedInput {
            path: icon.path.display().to_string(),
            message,
        };

        let source = fs::read_to_string(&icon.path).map_err(|e| malformed(e.to_string()))?;
        let svg = normalize(&source).map_err(|e| malformed(e.to_string()))?;

        let file = self
            .target
            .render_component(&icon.name, &svg, &self.config.emit)
            .map_err(|e| BuildError::Format {
                path: icon.path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            "Rendered {} as {} ({})",
            icon.name.filename,
            icon.name.component_name,
            self.target.name()
        );

        Ok(file)
    }
}

/// Fail when two icons share a component name, one shadows an import, or
/// one would be written over the barrel module.
pub fn check_names(icons: &[SourceIcon], ctx: &EmitContext) -> Result<(), BuildError> {
    let reserved = ctx.reserved_names();
    let mut seen: HashMap<&str, &Path> = HashMap::new();

    for icon in icons {
        let name = icon.name.component_name.as_str();

        if icon.name.filename.eq_ignore_ascii_case(ENTRY_STEM) {
            return Err(BuildError::ReservedName {
                name: icon.name.filename.clone(),
                path: icon.path.display().to_string(),
            });
        }

        if reserved.contains(&name) {
            return Err(BuildError::ReservedName {
                name: name.to_string(),
                path: icon.path.display().to_string(),
            });
        }

        if let Some(first) = seen.insert(name, &icon.path) {
            return Err(BuildError::NameCollision {
                name: name.to_string(),
                first: first.display().to_string(),
                second: icon.path.display().to_string(),
            });
        }
    }

    Ok(())
}
