//! Export registry behavior after successful runs.

use herald_core::write_file;
use herald_pipeline::{
    Artifact, ExportEntry, Pipeline, PipelineContext, PipelineError, PipelineModule, RunConfig,
    StaticDiscovery,
};
use tempfile::TempDir;

/// Packages a single text file and registers it under `client`.
struct FileEmitter;

impl PipelineModule for FileEmitter {
    fn name(&self) -> &str {
        "file-emitter"
    }

    fn package(&self, ctx: &mut PipelineContext) -> eyre::Result<()> {
        let path = ctx.dirs().package.join("client.txt");
        write_file(&path, "generated client stub")?;
        ctx.register_artifact(Artifact::new("client", path));
        Ok(())
    }
}

/// Packages a small directory tree and registers it under `docs`.
struct TreeEmitter;

impl PipelineModule for TreeEmitter {
    fn name(&self) -> &str {
        "tree-emitter"
    }

    fn package(&self, ctx: &mut PipelineContext) -> eyre::Result<()> {
        let root = ctx.dirs().package.join("docs");
        write_file(&root.join("index.html"), "<html/>")?;
        write_file(&root.join("api").join("types.html"), "<table/>")?;
        ctx.register_artifact(Artifact::new("docs", root));
        Ok(())
    }
}

fn base_run(temp: &TempDir) -> RunConfig {
    let source = temp.path().join("model.xml");
    std::fs::write(&source, "<service/>").unwrap();
    RunConfig::new(temp.path(), vec![source])
}

fn emitting_pipeline() -> Pipeline {
    Pipeline::with_discovery(
        StaticDiscovery::new()
            .with(|| Ok(Box::new(FileEmitter)))
            .with(|| Ok(Box::new(TreeEmitter))),
    )
}

#[test]
fn exported_file_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("dist").join("client-copy.txt");

    let mut run = base_run(&temp);
    run.exports.push(ExportEntry::new("client", &dest));

    let result = emitting_pipeline().run(run).unwrap();

    assert_eq!(result.exported, [dest.clone()]);
    let original = result.context.artifact("client").unwrap();
    assert_eq!(
        std::fs::read(&dest).unwrap(),
        std::fs::read(&original.source).unwrap()
    );
}

#[test]
fn exported_directory_is_structurally_identical() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("site");

    let mut run = base_run(&temp);
    run.exports.push(ExportEntry::new("docs", &dest));

    emitting_pipeline().run(run).unwrap();

    assert_eq!(
        std::fs::read_to_string(dest.join("index.html")).unwrap(),
        "<html/>"
    );
    assert_eq!(
        std::fs::read_to_string(dest.join("api").join("types.html")).unwrap(),
        "<table/>"
    );
}

#[test]
fn unknown_artifact_aborts_and_writes_nothing_for_that_entry() {
    let temp = TempDir::new().unwrap();
    let ghost_dest = temp.path().join("ghost-out");

    let mut run = base_run(&temp);
    run.exports.push(ExportEntry::new("ghost", &ghost_dest));

    let err = emitting_pipeline().run(run).unwrap_err();

    match err {
        PipelineError::UnknownArtifact { artifact } => assert_eq!(artifact, "ghost"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!ghost_dest.exists());
}

#[test]
fn exports_before_a_failure_stay_on_disk() {
    let temp = TempDir::new().unwrap();
    let first_dest = temp.path().join("dist").join("client.txt");

    let mut run = base_run(&temp);
    run.exports.push(ExportEntry::new("client", &first_dest));
    run.exports.push(ExportEntry::new("ghost", temp.path().join("ghost-out")));

    let err = emitting_pipeline().run(run).unwrap_err();

    assert!(matches!(err, PipelineError::UnknownArtifact { .. }));
    // No rollback: the entry that completed before the failure remains.
    assert_eq!(
        std::fs::read_to_string(&first_dest).unwrap(),
        "generated client stub"
    );
}

#[test]
fn entries_apply_in_configuration_order() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("out").join("a.txt");
    let second = temp.path().join("out").join("b.txt");

    let mut run = base_run(&temp);
    run.exports.push(ExportEntry::new("client", &first));
    run.exports.push(ExportEntry::new("client", &second));

    let result = emitting_pipeline().run(run).unwrap();
    assert_eq!(result.exported, [first, second]);
}
