//! Output directory reset and file commit.

use std::path::{Path, PathBuf};

use glyphic_emit::RenderedFile;
use tokio::fs;
use tokio::task::JoinSet;

use crate::builder::BuildError;

/// Ensure `output_dir` exists and is empty.
///
/// Refuses to touch a directory that is, or contains, `source_dir`.
pub async fn reset_output_dir(output_dir: &Path, source_dir: &Path) -> Result<(), BuildError> {
    if fs::try_exists(output_dir).await.unwrap_or(false) {
        let output = fs::canonicalize(output_dir)
            .await
            .map_err(|e| BuildError::OutputReset(format!("{}: {}", output_dir.display(), e)))?;

        if let Ok(source) = fs::canonicalize(source_dir).await {
            if source.starts_with(&output) {
                return Err(BuildError::OutputReset(format!(
                    "{} contains the source directory {}",
                    output.display(),
                    source.display()
                )));
            }
        }
    }

    fs::create_dir_all(output_dir)
        .await
        .map_err(|e| BuildError::OutputReset(format!("{}: {}", output_dir.display(), e)))?;

    let mut entries = fs::read_dir(output_dir)
        .await
        .map_err(|e| BuildError::OutputReset(format!("{}: {}", output_dir.display(), e)))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| BuildError::OutputReset(e.to_string()))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| BuildError::OutputReset(format!("{}: {}", path.display(), e)))?;

        let removed = if file_type.is_dir() {
            fs::remove_dir_all(&path).await
        } else {
            fs::remove_file(&path).await
        };
        removed.map_err(|e| BuildError::OutputReset(format!("{}: {}", path.display(), e)))?;
    }

    tracing::debug!("Reset output directory {}", output_dir.display());

    Ok(())
}

/// Write every file into `output_dir` concurrently and wait for all of them.
///
/// The first failure is returned; files already written are left in place.
pub async fn write_files(
    output_dir: &Path,
    files: &[RenderedFile],
) -> Result<Vec<PathBuf>, BuildError> {
    let mut tasks = JoinSet::new();

    for file in files {
        let path = output_dir.join(&file.file_name);
        let contents = file.contents.clone();
        tasks.spawn(async move {
            fs::write(&path, contents)
                .await
                .map_err(|e| BuildError::Write(format!("{}: {}", path.display(), e)))?;
            Ok::<_, BuildError>(path)
        });
    }

    let mut written = Vec::with_capacity(files.len());
    while let Some(joined) = tasks.join_next().await {
        let path = joined.map_err(|e| BuildError::Write(e.to_string()))??;
        tracing::debug!("Wrote {}", path.display());
        written.push(path);
    }

    written.sort();
    Ok(written)
}
