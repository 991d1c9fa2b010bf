//! The capability contract implemented by every pipeline module.

use eyre::Result;

use crate::context::PipelineContext;

/// A pluggable unit contributing behavior to one or more pipeline stages.
///
/// Modules are instantiated once at discovery time, owned by the orchestrator
/// for the duration of a run, and dropped when the run ends. Each stage hook
/// is invoked at most once per run, in pipeline order within its stage.
///
/// Hooks may mutate the shared context — append classpath entries, set
/// properties, register artifacts — but nothing a module adds can be removed
/// by another module.
///
/// # Example
///
/// ```ignore
/// struct TypescriptClientModule {
///     mappers: MappingRegistry,
/// }
///
/// impl PipelineModule for TypescriptClientModule {
///     fn name(&self) -> &str {
///         "typescript-client"
///     }
///
///     fn generate(&self, ctx: &mut PipelineContext) -> Result<()> {
///         let out = ctx.dirs().generate.join("client.ts");
///         write_file(&out, &self.render_client(ctx)?)?;
///         Ok(())
///     }
/// }
/// ```
pub trait PipelineModule: Send + Sync {
    /// Stable name identifying this module in diagnostics and ordering hints.
    fn name(&self) -> &str;

    /// Names of modules that must run earlier in every stage.
    ///
    /// A hint naming a module that was not discovered is reported as a
    /// warning and ignored.
    fn runs_after(&self) -> Vec<String> {
        Vec::new()
    }

    /// Emit target sources into the generate directory.
    ///
    /// # Errors
    ///
    /// Return an error to abort the run.
    #[allow(unused_variables)]
    fn generate(&self, ctx: &mut PipelineContext) -> Result<()> {
        Ok(())
    }

    /// Compile generated sources into the compile directory.
    ///
    /// # Errors
    ///
    /// Return an error to abort the run.
    #[allow(unused_variables)]
    fn compile(&self, ctx: &mut PipelineContext) -> Result<()> {
        Ok(())
    }

    /// Assemble compiled output in the build directory.
    ///
    /// # Errors
    ///
    /// Return an error to abort the run.
    #[allow(unused_variables)]
    fn build(&self, ctx: &mut PipelineContext) -> Result<()> {
        Ok(())
    }

    /// Produce distributables in the package directory and register them as
    /// artifacts for export.
    ///
    /// # Errors
    ///
    /// Return an error to abort the run.
    #[allow(unused_variables)]
    fn package(&self, ctx: &mut PipelineContext) -> Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for dyn PipelineModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineModule")
            .field("name", &self.name())
            .finish()
    }
}
