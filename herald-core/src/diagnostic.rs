//! Non-fatal diagnostics reported alongside a pipeline run.
//!
//! Fatal problems are structured errors; these types only carry the messages
//! a run can survive, such as a skipped module candidate.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A problem the run survived but the user should address.
    Warning,
    /// Informational message about the run.
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message attributed to a pipeline step.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The step that produced this diagnostic (e.g., "discovery").
    pub step: String,
    /// The diagnostic message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            step: step.into(),
            message: message.into(),
        }
    }

    /// Create a new info diagnostic.
    pub fn info(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            step: step.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}
