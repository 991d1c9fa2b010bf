//! Registry of bidirectional type mappers.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::{
    MappingError, Result,
    context::MappingContext,
    mappers::{BigIntMapper, BoolMapper, FloatMapper, IntMapper, TextMapper},
    value::{DomainType, DomainValue, TargetValue},
};

/// A stateless bidirectional converter for one canonical domain type.
///
/// Implementations must be side-effect-free and safe to invoke concurrently
/// for different values; the [`MappingContext`] is the only mutable state and
/// is scoped to a single top-level call. Mappers never see null values — the
/// context short-circuits them in both directions.
pub trait TypeMapper: Send + Sync {
    /// Render a domain value in the target platform's representation.
    fn to_target(&self, value: &DomainValue, ctx: &MappingContext<'_>) -> Result<TargetValue>;

    /// Parse a target value back into the canonical representation.
    fn to_domain(&self, value: &TargetValue, ctx: &MappingContext<'_>) -> Result<DomainValue>;
}

/// Exact-match registry from canonical domain type to mapper.
///
/// Populated at module-initialization time, before any generate-stage hook
/// runs; immutable afterwards and safe to read from concurrent mapping
/// calls. Registering a second mapper for the same type replaces the first.
pub struct MappingRegistry {
    mappers: IndexMap<DomainType, Arc<dyn TypeMapper>>,
}

impl MappingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            mappers: IndexMap::new(),
        }
    }

    /// Create a registry with the builtin scalar mappers registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(DomainType::Bool, Arc::new(BoolMapper));
        registry.register(DomainType::Int, Arc::new(IntMapper));
        registry.register(DomainType::BigInt, Arc::new(BigIntMapper));
        registry.register(DomainType::Float, Arc::new(FloatMapper));
        registry.register(DomainType::Text, Arc::new(TextMapper));
        registry
    }

    /// Register a mapper for a domain type. Last registration wins.
    pub fn register(&mut self, ty: DomainType, mapper: Arc<dyn TypeMapper>) {
        self.mappers.insert(ty, mapper);
    }

    /// Whether a mapper is registered for `ty`.
    pub fn contains(&self, ty: &DomainType) -> bool {
        self.mappers.contains_key(ty)
    }

    pub(crate) fn lookup(&self, ty: &DomainType) -> Result<&Arc<dyn TypeMapper>> {
        self.mappers
            .get(ty)
            .ok_or_else(|| MappingError::Unmapped(ty.clone()))
    }

    /// Map a domain value to the target representation.
    pub fn to_target(&self, ty: &DomainType, value: &DomainValue) -> Result<TargetValue> {
        MappingContext::new(self).to_target(ty, value)
    }

    /// Map a target value back to the canonical representation.
    pub fn to_domain(&self, ty: &DomainType, value: &TargetValue) -> Result<DomainValue> {
        MappingContext::new(self).to_domain(ty, value)
    }
}

impl Default for MappingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
