//! Shared per-run pipeline state.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

/// Resolved staging directories for a run.
#[derive(Debug, Clone, Serialize)]
pub struct StagingDirs {
    pub generate: PathBuf,
    pub compile: PathBuf,
    pub build: PathBuf,
    pub package: PathBuf,
    pub scratch: PathBuf,
}

impl StagingDirs {
    /// Resolve the staging directories, honoring overrides and defaulting
    /// the rest to fixed locations under `work_root`.
    pub fn resolve(work_root: &Path, overrides: &DirOverrides) -> Self {
        let pick = |dir: &Option<PathBuf>, name: &str| {
            dir.clone().unwrap_or_else(|| work_root.join(name))
        };
        Self {
            generate: pick(&overrides.generate, "generate"),
            compile: pick(&overrides.compile, "compile"),
            build: pick(&overrides.build, "build"),
            package: pick(&overrides.package, "package"),
            scratch: pick(&overrides.scratch, "scratch"),
        }
    }

    pub(crate) fn all(&self) -> [&PathBuf; 5] {
        [
            &self.generate,
            &self.compile,
            &self.build,
            &self.package,
            &self.scratch,
        ]
    }
}

/// Optional staging directory overrides supplied by the adapter.
#[derive(Debug, Clone, Default)]
pub struct DirOverrides {
    pub generate: Option<PathBuf>,
    pub compile: Option<PathBuf>,
    pub build: Option<PathBuf>,
    pub package: Option<PathBuf>,
    pub scratch: Option<PathBuf>,
}

/// Append-only list of build classpath entries.
///
/// Entries accumulate across modules and stages; there is no removal.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Classpath(Vec<PathBuf>);

impl Classpath {
    pub fn push(&mut self, entry: impl Into<PathBuf>) {
        self.0.push(entry.into());
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.0
    }

    pub fn contains(&self, entry: &Path) -> bool {
        self.0.iter().any(|e| e == entry)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PathBuf>> for Classpath {
    fn from(entries: Vec<PathBuf>) -> Self {
        Self(entries)
    }
}

/// Keyed properties for module-to-module signaling.
///
/// Setting an existing key replaces its value (last writer wins); keys are
/// never removed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PropertyBag(IndexMap<String, String>);

impl PropertyBag {
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<IndexMap<String, String>> for PropertyBag {
    fn from(properties: IndexMap<String, String>) -> Self {
        Self(properties)
    }
}

/// A distributable produced during the package stage.
#[derive(Debug, Clone, Serialize)]
pub struct Artifact {
    /// Logical identifier export entries resolve against.
    pub id: String,
    /// File or directory holding the artifact's content.
    pub source: PathBuf,
}

impl Artifact {
    pub fn new(id: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
        }
    }
}

/// Mutable shared state handed to every module hook during a run.
///
/// Exactly one context exists per run. The orchestrator creates it before
/// the generate stage and freezes it after the package stage; exports only
/// ever see the frozen view.
#[derive(Debug, Serialize)]
pub struct PipelineContext {
    source_files: Vec<PathBuf>,
    dirs: StagingDirs,
    classpath: Classpath,
    properties: PropertyBag,
    artifacts: IndexMap<String, Artifact>,
}

impl PipelineContext {
    pub(crate) fn new(
        source_files: Vec<PathBuf>,
        dirs: StagingDirs,
        classpath: Classpath,
        properties: PropertyBag,
    ) -> Self {
        Self {
            source_files,
            dirs,
            classpath,
            properties,
            artifacts: IndexMap::new(),
        }
    }

    /// The base source-file set for the run.
    pub fn source_files(&self) -> &[PathBuf] {
        &self.source_files
    }

    /// The resolved staging directories.
    pub fn dirs(&self) -> &StagingDirs {
        &self.dirs
    }

    pub fn classpath(&self) -> &Classpath {
        &self.classpath
    }

    /// Append a build classpath entry, visible to every later hook.
    pub fn add_classpath_entry(&mut self, entry: impl Into<PathBuf>) {
        self.classpath.push(entry);
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    /// Set a property, visible to every later hook. Last writer wins.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.set(key, value);
    }

    /// Register a distributable for export. Re-registering an id replaces
    /// the earlier artifact.
    pub fn register_artifact(&mut self, artifact: Artifact) {
        self.artifacts.insert(artifact.id.clone(), artifact);
    }

    pub fn artifact(&self, id: &str) -> Option<&Artifact> {
        self.artifacts.get(id)
    }

    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.values()
    }

    pub(crate) fn freeze(self) -> FrozenContext {
        FrozenContext {
            source_files: self.source_files,
            dirs: self.dirs,
            classpath: self.classpath,
            properties: self.properties,
            artifacts: self.artifacts,
        }
    }
}

/// Read-only view of the context after the package stage completed.
#[derive(Debug, Clone, Serialize)]
pub struct FrozenContext {
    source_files: Vec<PathBuf>,
    dirs: StagingDirs,
    classpath: Classpath,
    properties: PropertyBag,
    artifacts: IndexMap<String, Artifact>,
}

impl FrozenContext {
    pub fn source_files(&self) -> &[PathBuf] {
        &self.source_files
    }

    pub fn dirs(&self) -> &StagingDirs {
        &self.dirs
    }

    pub fn classpath(&self) -> &Classpath {
        &self.classpath
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    pub fn artifact(&self, id: &str) -> Option<&Artifact> {
        self.artifacts.get(id)
    }

    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.values()
    }
}
