//! The parsed run configuration.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result, expand::expand_variables};

/// Project metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSection {
    pub name: Option<String>,
    /// Target-platform identifier handed to modules through the property bag.
    pub platform: Option<String>,
}

/// Staging directory overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirsSection {
    pub generate: Option<PathBuf>,
    pub compile: Option<PathBuf>,
    pub build: Option<PathBuf>,
    pub package: Option<PathBuf>,
    pub scratch: Option<PathBuf>,
}

/// A configured export of a packaged artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportSection {
    /// Logical identifier the artifact was registered under during packaging.
    pub artifact: String,
    /// Destination file or directory path.
    pub destination: PathBuf,
}

/// A parsed herald.toml.
///
/// ```toml
/// [project]
/// name = "petstore"
/// platform = "typescript"
///
/// [dirs]
/// generate = "out/generate"
///
/// classpath = ["lib/model.jar"]
///
/// [properties]
/// client.namespace = "petstore.client"
///
/// [[export]]
/// artifact = "client.bundle"
/// destination = "dist/client"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub dirs: DirsSection,
    /// Build classpath entries appended before any module runs.
    #[serde(default)]
    pub classpath: Vec<PathBuf>,
    /// Explicit module names to run; empty runs everything discovered.
    #[serde(default)]
    pub modules: Vec<String>,
    /// Seed properties exposed to modules through the context property bag.
    #[serde(default)]
    pub properties: IndexMap<String, String>,
    #[serde(default, rename = "export")]
    pub exports: Vec<ExportSection>,
}

impl Config {
    /// Load a configuration file, expanding `${name}` references from `vars`
    /// before parsing.
    pub fn from_file(path: impl AsRef<Path>, vars: &IndexMap<String, String>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string(), vars)
    }

    /// Parse configuration text with a custom filename for error reporting.
    pub fn from_str_with_vars(
        content: &str,
        filename: &str,
        vars: &IndexMap<String, String>,
    ) -> Result<Self> {
        parse_config(content, filename, vars)
    }
}

fn parse_config(content: &str, filename: &str, vars: &IndexMap<String, String>) -> Result<Config> {
    let expanded = expand_variables(content, filename, vars)?;
    let config: Config =
        toml::from_str(&expanded).map_err(|e| Error::parse(e, &expanded, filename))?;
    validate_config(&config, &expanded, filename)?;
    Ok(config)
}

fn validate_config(config: &Config, src: &str, filename: &str) -> Result<()> {
    for export in &config.exports {
        if export.artifact.is_empty() {
            return Err(Error::validation(
                "export entry has an empty artifact identifier",
                src,
                filename,
            ));
        }
        if export.destination.as_os_str().is_empty() {
            return Err(Error::validation(
                format!("export of '{}' has an empty destination", export.artifact),
                src,
                filename,
            ));
        }
    }
    Ok(())
}
