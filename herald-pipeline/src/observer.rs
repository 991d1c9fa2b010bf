//! Run observers notified as stages complete.

use std::path::PathBuf;

use eyre::Result;

use crate::{context::PipelineContext, stage::Stage};

/// Receives a callback after every module has completed a stage.
///
/// Observers get read access to the shared context; they cannot mutate it.
pub trait RunObserver: Send + Sync {
    /// The name of this observer (for failure attribution).
    fn name(&self) -> &'static str;

    /// Called once per completed stage.
    ///
    /// # Errors
    ///
    /// Return an error to abort the run.
    #[allow(unused_variables)]
    fn on_stage_complete(&self, stage: Stage, ctx: &PipelineContext) -> Result<()> {
        Ok(())
    }
}

/// Observer that dumps the context as JSON after each stage.
///
/// Snapshots land in the configured directory as `<stage>.json`. The adapter
/// enables this with its debug flag, pointing it at the scratch directory.
pub struct SnapshotObserver {
    output_dir: PathBuf,
}

impl SnapshotObserver {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl RunObserver for SnapshotObserver {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_stage_complete(&self, stage: Stage, ctx: &PipelineContext) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{stage}.json"));
        let json = serde_json::to_string_pretty(ctx)?;
        std::fs::write(&path, json)?;
        Ok(())
    }
}
