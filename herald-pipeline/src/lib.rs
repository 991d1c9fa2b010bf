//! Multi-stage code-generation and artifact-packaging pipeline.
//!
//! This crate provides the [`Pipeline`] orchestrator that drives discovered
//! [`PipelineModule`]s through four fixed stages:
//!
//! generate → compile → build → package
//!
//! Every hook receives the shared [`PipelineContext`]; the first failing hook
//! aborts the whole run, tagged with the stage and module it occurred in.
//! After packaging the context is frozen and [`apply_exports`] copies the
//! registered artifacts to their configured destinations.
//!
//! # Example
//!
//! ```ignore
//! use herald_pipeline::{Pipeline, RunConfig, StaticDiscovery};
//!
//! let discovery = StaticDiscovery::new().with(|| Ok(Box::new(TypescriptClientModule::new())));
//! let pipeline = Pipeline::with_discovery(discovery);
//!
//! let result = pipeline.run(RunConfig::new("/work/petstore", sources))?;
//! for artifact in result.context.artifacts() {
//!     println!("packaged {}", artifact.id);
//! }
//! ```

mod baseline;
mod context;
mod discovery;
mod error;
mod export;
mod module;
mod observer;
mod orchestrator;
mod stage;

pub use baseline::BaselineModule;
pub use context::{
    Artifact, Classpath, DirOverrides, FrozenContext, PipelineContext, PropertyBag, StagingDirs,
};
pub use discovery::{
    Discovered, DiscoveryScope, ModuleConstructor, ModuleDiscovery, StaticDiscovery,
    discover_modules,
};
pub use error::{PipelineError, Result};
pub use export::{ExportEntry, apply_exports};
pub use module::PipelineModule;
pub use observer::{RunObserver, SnapshotObserver};
pub use orchestrator::{Pipeline, RunConfig, RunResult};
pub use stage::Stage;
