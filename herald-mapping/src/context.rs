//! Per-call mapping state.

use std::cell::Cell;

use crate::{
    MappingError, MappingRegistry, Result,
    value::{DomainType, DomainValue, TargetValue},
};

/// Recursion limit for composite mappings.
const MAX_DEPTH: usize = 64;

/// State threaded through one top-level mapping call.
///
/// Composite mappers convert their members by calling back through the
/// context, which consults the registry and tracks recursion depth. A fresh
/// context is created for every top-level call, so mappers stay stateless
/// and independent calls never share mutable state.
pub struct MappingContext<'a> {
    registry: &'a MappingRegistry,
    depth: Cell<usize>,
}

impl<'a> MappingContext<'a> {
    pub(crate) fn new(registry: &'a MappingRegistry) -> Self {
        Self {
            registry,
            depth: Cell::new(0),
        }
    }

    /// The registry this call resolves mappers against.
    pub fn registry(&self) -> &MappingRegistry {
        self.registry
    }

    /// Map a member value into the target representation.
    ///
    /// Null short-circuits to [`TargetValue::Null`] before any mapper runs.
    pub fn to_target(&self, ty: &DomainType, value: &DomainValue) -> Result<TargetValue> {
        if value.is_null() {
            return Ok(TargetValue::Null);
        }
        let mapper = self.registry.lookup(ty)?;
        self.descend()?;
        let mapped = mapper.to_target(value, self);
        self.ascend();
        mapped
    }

    /// Map a member value back into the canonical representation.
    ///
    /// Null short-circuits to [`DomainValue::Null`] before any mapper runs.
    pub fn to_domain(&self, ty: &DomainType, value: &TargetValue) -> Result<DomainValue> {
        if value.is_null() {
            return Ok(DomainValue::Null);
        }
        let mapper = self.registry.lookup(ty)?;
        self.descend()?;
        let mapped = mapper.to_domain(value, self);
        self.ascend();
        mapped
    }

    fn descend(&self) -> Result<()> {
        let depth = self.depth.get() + 1;
        if depth > MAX_DEPTH {
            return Err(MappingError::DepthExceeded { limit: MAX_DEPTH });
        }
        self.depth.set(depth);
        Ok(())
    }

    fn ascend(&self) {
        self.depth.set(self.depth.get() - 1);
    }
}
