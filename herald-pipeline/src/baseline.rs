//! The always-present baseline module.

use eyre::Result;

use crate::{
    context::{Artifact, PipelineContext},
    module::PipelineModule,
};

/// Default module guaranteeing minimal pipeline behavior when no optional
/// modules are installed.
///
/// It contributes nothing to the earlier stages and, during packaging,
/// registers the build directory as the default application artifact unless
/// an optional module already claimed that id.
pub struct BaselineModule;

impl BaselineModule {
    /// Stable name the orchestrator and discovery recognize it by.
    pub const NAME: &'static str = "basic-app";

    /// Artifact id the default application output is registered under.
    pub const ARTIFACT_ID: &'static str = "app";

    pub fn new() -> Self {
        Self
    }
}

impl Default for BaselineModule {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineModule for BaselineModule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn package(&self, ctx: &mut PipelineContext) -> Result<()> {
        if ctx.artifact(Self::ARTIFACT_ID).is_none() {
            let build_dir = ctx.dirs().build.clone();
            ctx.register_artifact(Artifact::new(Self::ARTIFACT_ID, build_dir));
        }
        Ok(())
    }
}
