use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for config loading (boxed to reduce size on the stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse run configuration")]
    #[diagnostic(code(herald::config::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("undefined project variable '${{{name}}}'")]
    #[diagnostic(
        code(herald::config::undefined_variable),
        help("define '{name}' with --var {name}=VALUE or remove the reference")
    )]
    UndefinedVariable {
        #[source_code]
        src: NamedSource<String>,
        #[label("referenced here")]
        span: SourceSpan,
        name: String,
    },

    #[error("unterminated variable reference")]
    #[diagnostic(
        code(herald::config::unterminated_variable),
        help("variable references look like ${{name}}")
    )]
    UnterminatedVariable {
        #[source_code]
        src: NamedSource<String>,
        #[label("reference starts here")]
        span: SourceSpan,
    },

    #[error("{message}")]
    #[diagnostic(code(herald::config::validation))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            message: message.into(),
        })
    }
}
