//! Bidirectional value mapping between the canonical service model and a
//! target platform's native representation.
//!
//! Modules consult a [`MappingRegistry`] during the generate stage whenever a
//! domain value must be rendered in a target-specific form. Each registered
//! [`TypeMapper`] is a stateless pair of conversions:
//!
//! - `to_target` renders a [`DomainValue`] as a [`TargetValue`]
//! - `to_domain` parses a [`TargetValue`] back into a [`DomainValue`]
//!
//! Lookup is exact-match by [`DomainType`]; there is no inheritance-based
//! fallback. Null propagates in both directions before any mapper runs, so a
//! mapper never sees a null value and can never substitute a default for one.
//!
//! # Example
//!
//! ```
//! use herald_mapping::{DomainType, DomainValue, MappingRegistry, TargetValue};
//!
//! let registry = MappingRegistry::with_defaults();
//! let rendered = registry
//!     .to_target(&DomainType::BigInt, &DomainValue::BigInt(42))
//!     .unwrap();
//! assert_eq!(rendered, TargetValue::Text("42".to_string()));
//! ```

mod context;
mod error;
mod mappers;
mod registry;
mod value;

pub use context::MappingContext;
pub use error::{MappingError, Result};
pub use mappers::{
    BigIntMapper, BoolMapper, FloatMapper, IntMapper, ListMapper, RecordMapper, TextMapper,
};
pub use registry::{MappingRegistry, TypeMapper};
pub use value::{DomainType, DomainValue, TargetValue};
