//! Declarative run configuration for the herald pipeline.
//!
//! A run is configured by a TOML file whose raw text first goes through
//! project-variable expansion: every `${name}` reference is substituted from
//! the variables supplied by the adapter, and a reference to an undefined
//! variable fails the load. Only the expanded text reaches the parser.

mod config;
mod error;
mod expand;

pub use config::{Config, DirsSection, ExportSection, ProjectSection};
pub use error::{Error, Result};
pub use expand::expand_variables;
