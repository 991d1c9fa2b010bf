use std::path::PathBuf;

use clap::Args;
use eyre::{Result, eyre};
use herald_config::Config;
use herald_pipeline::{
    DirOverrides, ExportEntry, Pipeline, RunConfig, SnapshotObserver, Stage,
};
use indexmap::IndexMap;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct RunCommand {
    /// Absolute paths of the source files describing the service model
    #[arg(required = true)]
    pub sources: Vec<PathBuf>,

    /// Base directory the working root is computed under
    #[arg(short, long, default_value = ".")]
    pub basedir: PathBuf,

    /// Path to the run configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project variable for config expansion (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// Override the generate directory
    #[arg(long)]
    pub generate_dir: Option<PathBuf>,

    /// Override the compile directory
    #[arg(long)]
    pub compile_dir: Option<PathBuf>,

    /// Override the build directory
    #[arg(long)]
    pub build_dir: Option<PathBuf>,

    /// Override the package directory
    #[arg(long)]
    pub package_dir: Option<PathBuf>,

    /// Override the scratch directory
    #[arg(long)]
    pub scratch_dir: Option<PathBuf>,

    /// Build classpath entry (repeatable)
    #[arg(long = "classpath", value_name = "PATH")]
    pub classpath: Vec<PathBuf>,

    /// Export a packaged artifact (repeatable)
    #[arg(long = "export", value_name = "ARTIFACT=DEST")]
    pub exports: Vec<String>,

    /// Last stage to execute
    #[arg(long, default_value = "package")]
    pub target: Stage,

    /// Target-platform identifier exposed to modules
    #[arg(long)]
    pub platform: Option<String>,

    /// Print a run summary
    #[arg(short, long)]
    pub verbose: bool,

    /// Dump pipeline context snapshots after each stage
    #[arg(long)]
    pub debug: bool,
}

impl RunCommand {
    /// Run the pipeline command
    pub fn run(&self) -> Result<()> {
        let vars = parse_pairs(&self.vars, "--var")?;
        let config = match &self.config {
            Some(path) => Config::from_file(path, &vars).unwrap_or_exit(),
            None => Config::default(),
        };

        let run = self.build_run_config(&config)?;
        let snapshot_dir = run
            .dirs
            .scratch
            .clone()
            .unwrap_or_else(|| self.basedir.join(".herald").join("scratch"))
            .join("snapshots");

        let mut pipeline = Pipeline::new();
        if self.debug {
            pipeline = pipeline.observer(SnapshotObserver::new(&snapshot_dir));
        }

        let result = pipeline.run(run)?;

        for warning in &result.warnings {
            eprintln!("{warning}");
        }

        if self.verbose {
            println!("Artifacts ({}):", result.context.artifacts().count());
            for artifact in result.context.artifacts() {
                println!("  - {} ({})", artifact.id, artifact.source.display());
            }
            if !result.exported.is_empty() {
                println!("Exported:");
                for dest in &result.exported {
                    println!("  + {}", dest.display());
                }
            }
            if self.debug {
                println!("Snapshots: {}", snapshot_dir.display());
            }
        }

        println!(
            "✓ pipeline completed through the {} stage ({} artifacts, {} exported)",
            self.target,
            result.context.artifacts().count(),
            result.exported.len()
        );
        Ok(())
    }

    /// Merge the config file and command-line flags; flags win.
    fn build_run_config(&self, config: &Config) -> Result<RunConfig> {
        let mut run = RunConfig::new(&self.basedir, self.sources.clone());

        run.dirs = DirOverrides {
            generate: self.generate_dir.clone().or_else(|| config.dirs.generate.clone()),
            compile: self.compile_dir.clone().or_else(|| config.dirs.compile.clone()),
            build: self.build_dir.clone().or_else(|| config.dirs.build.clone()),
            package: self.package_dir.clone().or_else(|| config.dirs.package.clone()),
            scratch: self.scratch_dir.clone().or_else(|| config.dirs.scratch.clone()),
        };

        run.classpath = config.classpath.clone();
        run.classpath.extend(self.classpath.iter().cloned());
        run.scope.search_path = run.classpath.clone();
        run.scope.only = config.modules.clone();

        run.properties = config.properties.clone();
        if let Some(name) = &config.project.name {
            run.properties.insert("project.name".to_string(), name.clone());
        }
        let platform = self
            .platform
            .clone()
            .or_else(|| config.project.platform.clone());
        if let Some(platform) = platform {
            run.properties.insert("target.platform".to_string(), platform);
        }

        run.exports = config
            .exports
            .iter()
            .map(|e| ExportEntry::new(&e.artifact, &e.destination))
            .collect();
        // The same artifact may export to several destinations, so entries
        // stay a list rather than a keyed map.
        for pair in &self.exports {
            let (artifact, dest) = pair
                .split_once('=')
                .ok_or_else(|| eyre!("invalid --export '{pair}', expected ARTIFACT=DEST"))?;
            run.exports.push(ExportEntry::new(artifact, dest));
        }

        run.target = self.target;
        Ok(run)
    }
}

/// Parse repeated `NAME=VALUE` flags, preserving order.
fn parse_pairs(pairs: &[String], flag: &str) -> Result<IndexMap<String, String>> {
    let mut parsed = IndexMap::new();
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| eyre!("invalid {flag} '{pair}', expected NAME=VALUE"))?;
        parsed.insert(name.to_string(), value.to_string());
    }
    Ok(parsed)
}
