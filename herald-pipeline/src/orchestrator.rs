//! Pipeline orchestrator.

use std::path::PathBuf;

use herald_core::Diagnostic;
use indexmap::IndexMap;

use crate::{
    context::{Classpath, DirOverrides, FrozenContext, PipelineContext, PropertyBag, StagingDirs},
    discovery::{DiscoveryScope, ModuleDiscovery, StaticDiscovery, discover_modules},
    error::{PipelineError, Result},
    export::{ExportEntry, apply_exports},
    module::PipelineModule,
    observer::RunObserver,
    stage::Stage,
};

/// Fixed name of the working root created under the base directory.
const WORK_DIR_NAME: &str = ".herald";

/// Inputs for a single pipeline run.
#[derive(Debug)]
pub struct RunConfig {
    /// Base directory the working root is computed under. Must exist.
    pub base_dir: PathBuf,
    /// Absolute paths of the source files describing the service model.
    /// Must be non-empty.
    pub source_files: Vec<PathBuf>,
    /// Staging directory overrides.
    pub dirs: DirOverrides,
    /// Build classpath entries seeded before any module runs.
    pub classpath: Vec<PathBuf>,
    /// Properties seeded into the context property bag.
    pub properties: IndexMap<String, String>,
    /// Scope handed to module discovery.
    pub scope: DiscoveryScope,
    /// Exports applied after packaging, in configuration order.
    pub exports: Vec<ExportEntry>,
    /// Last stage to execute. Stages after it are skipped, and exports only
    /// run when packaging ran.
    pub target: Stage,
}

impl RunConfig {
    pub fn new(base_dir: impl Into<PathBuf>, source_files: Vec<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            source_files,
            dirs: DirOverrides::default(),
            classpath: Vec::new(),
            properties: IndexMap::new(),
            scope: DiscoveryScope::default(),
            exports: Vec::new(),
            target: Stage::Package,
        }
    }
}

/// Successful run output.
#[derive(Debug)]
pub struct RunResult {
    /// The frozen context, including everything modules registered.
    pub context: FrozenContext,
    /// Destinations written by the export step, in order.
    pub exported: Vec<PathBuf>,
    /// Non-fatal problems accumulated during the run.
    pub warnings: Vec<Diagnostic>,
}

/// Drives discovered modules through the pipeline stages.
///
/// Stages execute strictly sequentially, and modules within a stage execute
/// sequentially in pipeline order; a later module may depend on filesystem
/// or context state an earlier one wrote in the same stage. The first hook
/// failure aborts the run.
pub struct Pipeline {
    discovery: Box<dyn ModuleDiscovery>,
    observers: Vec<Box<dyn RunObserver>>,
}

impl Pipeline {
    /// Create a pipeline with an empty static discovery (baseline only).
    pub fn new() -> Self {
        Self::with_discovery(StaticDiscovery::new())
    }

    /// Create a pipeline over a specific discovery mechanism.
    pub fn with_discovery(discovery: impl ModuleDiscovery + 'static) -> Self {
        Self {
            discovery: Box::new(discovery),
            observers: Vec::new(),
        }
    }

    /// Add an observer to receive stage-completion callbacks.
    pub fn observer(mut self, observer: impl RunObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Execute a run.
    ///
    /// # Errors
    ///
    /// Configuration problems are reported before any stage executes; a
    /// failing module hook aborts the run tagged with its stage and module.
    pub fn run(&self, config: RunConfig) -> Result<RunResult> {
        validate_config(&config)?;

        let work_root = config.base_dir.join(WORK_DIR_NAME);
        let dirs = StagingDirs::resolve(&work_root, &config.dirs);
        for dir in dirs.all() {
            std::fs::create_dir_all(dir).map_err(|source| PipelineError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }

        let mut found = discover_modules(self.discovery.as_ref(), &config.scope)?;
        let mut warnings = std::mem::take(&mut found.warnings);
        let modules = order_modules(found.modules, &mut warnings)?;

        let mut ctx = PipelineContext::new(
            config.source_files,
            dirs,
            Classpath::from(config.classpath),
            PropertyBag::from(config.properties),
        );

        for stage in Stage::ALL {
            if stage > config.target {
                break;
            }
            for module in &modules {
                run_hook(module.as_ref(), stage, &mut ctx).map_err(|cause| {
                    PipelineError::Stage {
                        stage,
                        module: module.name().to_string(),
                        cause,
                    }
                })?;
            }
            for observer in &self.observers {
                observer
                    .on_stage_complete(stage, &ctx)
                    .map_err(|cause| PipelineError::Observer {
                        stage,
                        observer: observer.name(),
                        cause,
                    })?;
            }
        }

        let context = ctx.freeze();
        let exported = if config.target == Stage::Package {
            apply_exports(&config.exports, &context)?
        } else {
            Vec::new()
        };

        Ok(RunResult {
            context,
            exported,
            warnings,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn run_hook(
    module: &dyn PipelineModule,
    stage: Stage,
    ctx: &mut PipelineContext,
) -> eyre::Result<()> {
    match stage {
        Stage::Generate => module.generate(ctx),
        Stage::Compile => module.compile(ctx),
        Stage::Build => module.build(ctx),
        Stage::Package => module.package(ctx),
    }
}

fn validate_config(config: &RunConfig) -> Result<()> {
    if config.source_files.is_empty() {
        return Err(PipelineError::EmptySources);
    }
    if let Some(path) = config.source_files.iter().find(|p| !p.is_absolute()) {
        return Err(PipelineError::RelativeSource { path: path.clone() });
    }
    if !config.base_dir.is_dir() {
        return Err(PipelineError::MissingBaseDir {
            path: config.base_dir.clone(),
        });
    }
    Ok(())
}

/// Reorder modules so every declared predecessor runs first.
///
/// Stable topological order over the declared edges: modules with no
/// constraints keep their discovery order, and modules sharing a predecessor
/// stay in discovery order after it. A cycle in the declared ordering is a
/// fatal configuration error.
fn order_modules(
    modules: Vec<Box<dyn PipelineModule>>,
    warnings: &mut Vec<Diagnostic>,
) -> Result<Vec<Box<dyn PipelineModule>>> {
    let names: Vec<String> = modules.iter().map(|m| m.name().to_string()).collect();

    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); modules.len()];
    for (i, module) in modules.iter().enumerate() {
        for hint in module.runs_after() {
            match names.iter().position(|n| *n == hint) {
                Some(j) if j != i => predecessors[i].push(j),
                Some(_) => warnings.push(Diagnostic::warning(
                    "ordering",
                    format!("module '{}' declares itself as a predecessor", names[i]),
                )),
                None => warnings.push(Diagnostic::warning(
                    "ordering",
                    format!(
                        "module '{}' declares unknown predecessor '{}'",
                        names[i], hint
                    ),
                )),
            }
        }
    }

    let total = modules.len();
    let mut slots: Vec<Option<Box<dyn PipelineModule>>> = modules.into_iter().map(Some).collect();
    let mut placed = vec![false; total];
    let mut ordered = Vec::with_capacity(total);

    while ordered.len() < total {
        let ready = (0..total).find(|&i| !placed[i] && predecessors[i].iter().all(|&j| placed[j]));
        match ready {
            Some(i) => {
                placed[i] = true;
                ordered.push(slots[i].take().expect("module placed twice"));
            }
            None => {
                let members: Vec<&str> = (0..total)
                    .filter(|&i| !placed[i])
                    .map(|i| names[i].as_str())
                    .collect();
                return Err(PipelineError::OrderingCycle {
                    members: members.join(", "),
                });
            }
        }
    }

    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubModule {
        name: &'static str,
        after: Vec<String>,
    }

    impl StubModule {
        fn boxed(name: &'static str, after: &[&str]) -> Box<dyn PipelineModule> {
            Box::new(Self {
                name,
                after: after.iter().map(|s| s.to_string()).collect(),
            })
        }
    }

    impl PipelineModule for StubModule {
        fn name(&self) -> &str {
            self.name
        }

        fn runs_after(&self) -> Vec<String> {
            self.after.clone()
        }
    }

    fn ordered_names(modules: Vec<Box<dyn PipelineModule>>) -> Vec<String> {
        let mut warnings = Vec::new();
        order_modules(modules, &mut warnings)
            .unwrap()
            .iter()
            .map(|m| m.name().to_string())
            .collect()
    }

    #[test]
    fn test_order_without_hints_is_discovery_order() {
        let names = ordered_names(vec![
            StubModule::boxed("c", &[]),
            StubModule::boxed("a", &[]),
            StubModule::boxed("b", &[]),
        ]);
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn test_declared_predecessor_moves_earlier() {
        let names = ordered_names(vec![
            StubModule::boxed("b", &["a"]),
            StubModule::boxed("a", &[]),
        ]);
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_shared_predecessor_keeps_discovery_order() {
        let names = ordered_names(vec![
            StubModule::boxed("y", &["base"]),
            StubModule::boxed("x", &["base"]),
            StubModule::boxed("base", &[]),
        ]);
        assert_eq!(names, ["base", "y", "x"]);
    }

    #[test]
    fn test_cycle_is_fatal() {
        let mut warnings = Vec::new();
        let err = order_modules(
            vec![
                StubModule::boxed("a", &["b"]),
                StubModule::boxed("b", &["a"]),
            ],
            &mut warnings,
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::OrderingCycle { .. }));
    }

    #[test]
    fn test_unknown_predecessor_warns_and_is_ignored() {
        let mut warnings = Vec::new();
        let ordered = order_modules(
            vec![StubModule::boxed("a", &["phantom"])],
            &mut warnings,
        )
        .unwrap();
        assert_eq!(ordered.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("phantom"));
    }

    #[test]
    fn test_validate_rejects_empty_sources() {
        let config = RunConfig::new("/tmp", Vec::new());
        assert!(matches!(
            validate_config(&config),
            Err(PipelineError::EmptySources)
        ));
    }

    #[test]
    fn test_validate_rejects_relative_sources() {
        let config = RunConfig::new("/tmp", vec![PathBuf::from("relative/model.xml")]);
        assert!(matches!(
            validate_config(&config),
            Err(PipelineError::RelativeSource { .. })
        ));
    }
}
