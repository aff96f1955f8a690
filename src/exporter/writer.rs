// file: src/exporter/writer.rs
// description: stages rendered artifacts in temp files and renames them into place
// reference: https://docs.rs/tempfile

use crate::error::{ExportError, Result};
use crate::models::ExportArtifact;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| ExportError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn stage(&self, artifact: &ExportArtifact) -> Result<NamedTempFile> {
        let file_error = |source: std::io::Error| ExportError::FileOperation {
            path: self.output_dir.clone(),
            source,
        };

        let mut staged = NamedTempFile::new_in(&self.output_dir).map_err(file_error)?;
        staged
            .write_all(artifact.contents.as_bytes())
            .map_err(file_error)?;
        staged.as_file().sync_all().map_err(file_error)?;

        debug!(
            "Staged {} ({} bytes, {})",
            artifact.filename,
            artifact.contents.len(),
            artifact.mime_type()
        );
        Ok(staged)
    }

    /// Writes every artifact or, when a late rename fails, reports which
    /// files already landed. Staged temp files are removed on drop.
    pub fn write_all(&self, artifacts: &[ExportArtifact]) -> Result<Vec<PathBuf>> {
        let mut staged = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            staged.push((self.output_dir.join(&artifact.filename), self.stage(artifact)?));
        }

        let mut written = Vec::with_capacity(staged.len());
        for (path, file) in staged {
            if let Err(err) = file.persist(&path) {
                let failure = ExportError::FileOperation {
                    path: path.clone(),
                    source: err.error,
                };
                if written.is_empty() {
                    return Err(failure);
                }
                return Err(ExportError::PartialExport {
                    written,
                    source: Box::new(failure),
                });
            }

            info!("Wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}
