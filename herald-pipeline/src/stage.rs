//! The fixed pipeline stages.

use std::{fmt, str::FromStr};

use serde::Serialize;

/// One of the four fixed pipeline stages, in execution order.
///
/// Ordering follows execution order, so `Stage::Compile < Stage::Package`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Emit target sources.
    Generate,
    /// Compile generated sources.
    Compile,
    /// Assemble compiled output.
    Build,
    /// Produce distributable artifacts.
    Package,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 4] = [Stage::Generate, Stage::Compile, Stage::Build, Stage::Package];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Generate => "generate",
            Stage::Compile => "compile",
            Stage::Build => "build",
            Stage::Package => "package",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generate" => Ok(Stage::Generate),
            "compile" => Ok(Stage::Compile),
            "build" => Ok(Stage::Build),
            "package" => Ok(Stage::Package),
            other => Err(format!(
                "unknown stage '{other}', expected one of: generate, compile, build, package"
            )),
        }
    }
}
