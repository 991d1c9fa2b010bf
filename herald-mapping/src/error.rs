use thiserror::Error;

use crate::value::DomainType;

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;

/// Failure reported by a mapping call.
///
/// The registry never retries or substitutes a default; the calling module
/// decides whether a mapping failure is fatal to its stage contribution.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("no mapper registered for domain type '{0}'")]
    Unmapped(DomainType),

    #[error("cannot map {found} value as domain type '{domain_type}'")]
    Mismatch {
        domain_type: DomainType,
        found: &'static str,
    },

    #[error("malformed text '{text}' for domain type '{domain_type}': {reason}")]
    MalformedText {
        domain_type: DomainType,
        text: String,
        reason: String,
    },

    #[error("mapping recursion exceeded {limit} levels")]
    DepthExceeded { limit: usize },
}
