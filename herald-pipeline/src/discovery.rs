//! Locating the modules available to a run.

use std::path::PathBuf;

use herald_core::Diagnostic;

use crate::{
    baseline::BaselineModule,
    error::{PipelineError, Result},
    module::PipelineModule,
};

/// The search scope handed to a discovery mechanism.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryScope {
    /// Path entries to search for module providers (the classpath
    /// equivalent). Every entry must exist.
    pub search_path: Vec<PathBuf>,
    /// Explicit module names to keep; empty keeps everything discovered.
    pub only: Vec<String>,
}

/// Modules produced by a discovery pass, in the order they were found.
#[derive(Debug)]
pub struct Discovered {
    pub modules: Vec<Box<dyn PipelineModule>>,
    /// Per-candidate problems that caused a skip.
    pub warnings: Vec<Diagnostic>,
}

/// A pluggable mechanism that locates modules for a scope.
///
/// Discovery reports candidates in the order it finds them; dependency-based
/// reordering belongs to the orchestrator. A malformed individual candidate
/// is a warning and a skip; only a scope the mechanism cannot work with
/// fails discovery as a whole.
pub trait ModuleDiscovery: Send + Sync {
    fn discover(&self, scope: &DiscoveryScope) -> Result<Discovered>;
}

/// Fallible constructor for a statically linked module.
pub type ModuleConstructor = Box<dyn Fn() -> eyre::Result<Box<dyn PipelineModule>> + Send + Sync>;

/// Discovery over a compiled-in list of module constructors.
///
/// The explicit-registry replacement for runtime service loading: providers
/// link their constructors in, and each run instantiates fresh modules from
/// them.
#[derive(Default)]
pub struct StaticDiscovery {
    constructors: Vec<ModuleConstructor>,
}

impl StaticDiscovery {
    pub fn new() -> Self {
        Self {
            constructors: Vec::new(),
        }
    }

    /// Add a module constructor; candidates are reported in insertion order.
    pub fn with(
        mut self,
        constructor: impl Fn() -> eyre::Result<Box<dyn PipelineModule>> + Send + Sync + 'static,
    ) -> Self {
        self.constructors.push(Box::new(constructor));
        self
    }
}

impl ModuleDiscovery for StaticDiscovery {
    fn discover(&self, scope: &DiscoveryScope) -> Result<Discovered> {
        if let Some(missing) = scope.search_path.iter().find(|p| !p.exists()) {
            return Err(PipelineError::Discovery {
                reason: format!("search path entry '{}' does not exist", missing.display()),
            });
        }

        let mut modules: Vec<Box<dyn PipelineModule>> = Vec::new();
        let mut warnings = Vec::new();
        for constructor in &self.constructors {
            match constructor() {
                Ok(module) => {
                    if !scope.only.is_empty() && !scope.only.iter().any(|n| n == module.name()) {
                        continue;
                    }
                    modules.push(module);
                }
                Err(err) => warnings.push(Diagnostic::warning(
                    "discovery",
                    format!("skipping module candidate: {err:#}"),
                )),
            }
        }

        Ok(Discovered { modules, warnings })
    }
}

/// Run discovery and guarantee the baseline module is present.
///
/// The baseline is appended last when no discovered module claims its name,
/// so a run with zero optional modules still has default behavior.
pub fn discover_modules(
    discovery: &dyn ModuleDiscovery,
    scope: &DiscoveryScope,
) -> Result<Discovered> {
    let mut found = discovery.discover(scope)?;
    let has_baseline = found
        .modules
        .iter()
        .any(|m| m.name() == BaselineModule::NAME);
    if !has_baseline {
        found.modules.push(Box::new(BaselineModule::new()));
    }
    Ok(found)
}
