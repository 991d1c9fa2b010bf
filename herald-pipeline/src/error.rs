//! Structured errors surfaced by the orchestrator.

use std::path::PathBuf;

use thiserror::Error;

use crate::stage::Stage;

/// Result type for pipeline operations.
pub type Result<T, E = PipelineError> = std::result::Result<T, E>;

/// A fatal pipeline failure, carrying enough context for the adapter to
/// render an actionable build error.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no source files were provided")]
    EmptySources,

    #[error("source file '{path}' is not an absolute path")]
    RelativeSource { path: PathBuf },

    #[error("base directory '{path}' does not exist")]
    MissingBaseDir { path: PathBuf },

    #[error("failed to create staging directory '{path}'")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("module discovery failed: {reason}")]
    Discovery { reason: String },

    #[error("module ordering cycle involving {members}")]
    OrderingCycle { members: String },

    #[error("module '{module}' failed during the {stage} stage: {cause:#}")]
    Stage {
        stage: Stage,
        module: String,
        cause: eyre::Report,
    },

    #[error("observer '{observer}' failed after the {stage} stage: {cause:#}")]
    Observer {
        stage: Stage,
        observer: &'static str,
        cause: eyre::Report,
    },

    #[error("unknown export artifact '{artifact}'")]
    UnknownArtifact { artifact: String },

    #[error("failed to export '{artifact}' to '{destination}'")]
    ExportCopy {
        artifact: String,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
