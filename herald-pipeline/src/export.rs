//! Applying configured exports after a run completes.

use std::path::PathBuf;

use herald_core::copy_recursively;

use crate::{
    context::FrozenContext,
    error::{PipelineError, Result},
};

/// A configured destination for a packaged artifact.
#[derive(Debug, Clone)]
pub struct ExportEntry {
    /// Logical identifier to resolve against the registered artifacts.
    pub artifact: String,
    /// Destination file or directory path.
    pub destination: PathBuf,
}

impl ExportEntry {
    pub fn new(artifact: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            artifact: artifact.into(),
            destination: destination.into(),
        }
    }
}

/// Copy each exported artifact to its destination, in configuration order.
///
/// An unknown artifact id is detected before anything is written for that
/// entry; it aborts the remaining exports. Artifacts exported before the
/// failure stay on disk.
pub fn apply_exports(entries: &[ExportEntry], ctx: &FrozenContext) -> Result<Vec<PathBuf>> {
    let mut exported = Vec::with_capacity(entries.len());
    for entry in entries {
        let artifact = ctx
            .artifact(&entry.artifact)
            .ok_or_else(|| PipelineError::UnknownArtifact {
                artifact: entry.artifact.clone(),
            })?;
        copy_recursively(&artifact.source, &entry.destination).map_err(|source| {
            PipelineError::ExportCopy {
                artifact: entry.artifact.clone(),
                destination: entry.destination.clone(),
                source,
            }
        })?;
        exported.push(entry.destination.clone());
    }
    Ok(exported)
}
