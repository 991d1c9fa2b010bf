//! Builtin mappers for the canonical scalar and composite types.

use indexmap::IndexMap;

use crate::{
    MappingError, Result,
    context::MappingContext,
    registry::TypeMapper,
    value::{DomainType, DomainValue, TargetValue},
};

/// Boolean passthrough.
pub struct BoolMapper;

impl TypeMapper for BoolMapper {
    fn to_target(&self, value: &DomainValue, _ctx: &MappingContext<'_>) -> Result<TargetValue> {
        match value {
            DomainValue::Bool(b) => Ok(TargetValue::Bool(*b)),
            other => Err(mismatch(DomainType::Bool, other.kind())),
        }
    }

    fn to_domain(&self, value: &TargetValue, _ctx: &MappingContext<'_>) -> Result<DomainValue> {
        match value {
            TargetValue::Bool(b) => Ok(DomainValue::Bool(*b)),
            other => Err(mismatch(DomainType::Bool, other.kind())),
        }
    }
}

/// Machine-width integer passthrough.
pub struct IntMapper;

impl TypeMapper for IntMapper {
    fn to_target(&self, value: &DomainValue, _ctx: &MappingContext<'_>) -> Result<TargetValue> {
        match value {
            DomainValue::Int(i) => Ok(TargetValue::Int(*i)),
            other => Err(mismatch(DomainType::Int, other.kind())),
        }
    }

    fn to_domain(&self, value: &TargetValue, _ctx: &MappingContext<'_>) -> Result<DomainValue> {
        match value {
            TargetValue::Int(i) => Ok(DomainValue::Int(*i)),
            other => Err(mismatch(DomainType::Int, other.kind())),
        }
    }
}

/// Floating-point passthrough.
pub struct FloatMapper;

impl TypeMapper for FloatMapper {
    fn to_target(&self, value: &DomainValue, _ctx: &MappingContext<'_>) -> Result<TargetValue> {
        match value {
            DomainValue::Float(x) => Ok(TargetValue::Float(*x)),
            other => Err(mismatch(DomainType::Float, other.kind())),
        }
    }

    fn to_domain(&self, value: &TargetValue, _ctx: &MappingContext<'_>) -> Result<DomainValue> {
        match value {
            TargetValue::Float(x) => Ok(DomainValue::Float(*x)),
            other => Err(mismatch(DomainType::Float, other.kind())),
        }
    }
}

/// Text passthrough.
pub struct TextMapper;

impl TypeMapper for TextMapper {
    fn to_target(&self, value: &DomainValue, _ctx: &MappingContext<'_>) -> Result<TargetValue> {
        match value {
            DomainValue::Text(s) => Ok(TargetValue::Text(s.clone())),
            other => Err(mismatch(DomainType::Text, other.kind())),
        }
    }

    fn to_domain(&self, value: &TargetValue, _ctx: &MappingContext<'_>) -> Result<DomainValue> {
        match value {
            TargetValue::Text(s) => Ok(DomainValue::Text(s.clone())),
            other => Err(mismatch(DomainType::Text, other.kind())),
        }
    }
}

/// Arbitrary-precision integer, mapped via canonical textual round-trip.
///
/// The target side carries the canonical decimal rendering; parsing it back
/// fails on malformed text rather than producing a zero or default.
pub struct BigIntMapper;

impl TypeMapper for BigIntMapper {
    fn to_target(&self, value: &DomainValue, _ctx: &MappingContext<'_>) -> Result<TargetValue> {
        match value {
            DomainValue::BigInt(i) => Ok(TargetValue::Text(i.to_string())),
            other => Err(mismatch(DomainType::BigInt, other.kind())),
        }
    }

    fn to_domain(&self, value: &TargetValue, _ctx: &MappingContext<'_>) -> Result<DomainValue> {
        match value {
            TargetValue::Text(s) => {
                s.parse::<i128>()
                    .map(DomainValue::BigInt)
                    .map_err(|e| MappingError::MalformedText {
                        domain_type: DomainType::BigInt,
                        text: s.clone(),
                        reason: e.to_string(),
                    })
            }
            other => Err(mismatch(DomainType::BigInt, other.kind())),
        }
    }
}

/// Homogeneous list of a fixed element type.
///
/// Elements are mapped recursively through the mapping context; a null
/// element stays null on both sides.
pub struct ListMapper {
    element: DomainType,
}

impl ListMapper {
    pub fn new(element: DomainType) -> Self {
        Self { element }
    }

    fn domain_type(&self) -> DomainType {
        DomainType::named(format!("list<{}>", self.element))
    }
}

impl TypeMapper for ListMapper {
    fn to_target(&self, value: &DomainValue, ctx: &MappingContext<'_>) -> Result<TargetValue> {
        match value {
            DomainValue::List(items) => {
                let mapped = items
                    .iter()
                    .map(|item| ctx.to_target(&self.element, item))
                    .collect::<Result<Vec<_>>>()?;
                Ok(TargetValue::List(mapped))
            }
            other => Err(mismatch(self.domain_type(), other.kind())),
        }
    }

    fn to_domain(&self, value: &TargetValue, ctx: &MappingContext<'_>) -> Result<DomainValue> {
        match value {
            TargetValue::List(items) => {
                let mapped = items
                    .iter()
                    .map(|item| ctx.to_domain(&self.element, item))
                    .collect::<Result<Vec<_>>>()?;
                Ok(DomainValue::List(mapped))
            }
            other => Err(mismatch(self.domain_type(), other.kind())),
        }
    }
}

/// Named record with declared member types.
///
/// Members are mapped recursively through the mapping context in declaration
/// order. A member absent from the value is treated as null; members not
/// declared are dropped.
pub struct RecordMapper {
    name: String,
    fields: IndexMap<String, DomainType>,
}

impl RecordMapper {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Declare a member field and its domain type.
    pub fn field(mut self, name: impl Into<String>, ty: DomainType) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    fn domain_type(&self) -> DomainType {
        DomainType::named(self.name.clone())
    }
}

impl TypeMapper for RecordMapper {
    fn to_target(&self, value: &DomainValue, ctx: &MappingContext<'_>) -> Result<TargetValue> {
        match value {
            DomainValue::Record(members) => {
                let mut mapped = IndexMap::new();
                for (field, ty) in &self.fields {
                    let member = members.get(field).unwrap_or(&DomainValue::Null);
                    mapped.insert(field.clone(), ctx.to_target(ty, member)?);
                }
                Ok(TargetValue::Object(mapped))
            }
            other => Err(mismatch(self.domain_type(), other.kind())),
        }
    }

    fn to_domain(&self, value: &TargetValue, ctx: &MappingContext<'_>) -> Result<DomainValue> {
        match value {
            TargetValue::Object(members) => {
                let mut mapped = IndexMap::new();
                for (field, ty) in &self.fields {
                    let member = members.get(field).unwrap_or(&TargetValue::Null);
                    mapped.insert(field.clone(), ctx.to_domain(ty, member)?);
                }
                Ok(DomainValue::Record(mapped))
            }
            other => Err(mismatch(self.domain_type(), other.kind())),
        }
    }
}

fn mismatch(domain_type: DomainType, found: &'static str) -> MappingError {
    MappingError::Mismatch { domain_type, found }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::MappingRegistry;

    #[test]
    fn test_big_int_textual_round_trip() {
        let registry = MappingRegistry::with_defaults();
        let value = DomainValue::BigInt(12345678901234567890);

        let rendered = registry.to_target(&DomainType::BigInt, &value).unwrap();
        assert_eq!(
            rendered,
            TargetValue::Text("12345678901234567890".to_string())
        );

        let parsed = registry.to_domain(&DomainType::BigInt, &rendered).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_big_int_malformed_text_fails() {
        let registry = MappingRegistry::with_defaults();
        let err = registry
            .to_domain(
                &DomainType::BigInt,
                &TargetValue::Text("not-a-number".to_string()),
            )
            .unwrap_err();
        assert!(matches!(err, MappingError::MalformedText { .. }));
    }

    #[test]
    fn test_scalar_mismatch() {
        let registry = MappingRegistry::with_defaults();
        let err = registry
            .to_target(&DomainType::Bool, &DomainValue::Int(1))
            .unwrap_err();
        assert!(matches!(
            err,
            MappingError::Mismatch {
                domain_type: DomainType::Bool,
                found: "int"
            }
        ));
    }

    #[test]
    fn test_list_recursion_with_nulls() {
        let mut registry = MappingRegistry::with_defaults();
        registry.register(
            DomainType::named("big-int-list"),
            Arc::new(ListMapper::new(DomainType::BigInt)),
        );

        let ty = DomainType::named("big-int-list");
        let value = DomainValue::List(vec![
            DomainValue::BigInt(7),
            DomainValue::Null,
            DomainValue::BigInt(-3),
        ]);

        let rendered = registry.to_target(&ty, &value).unwrap();
        assert_eq!(
            rendered,
            TargetValue::List(vec![
                TargetValue::Text("7".to_string()),
                TargetValue::Null,
                TargetValue::Text("-3".to_string()),
            ])
        );
        assert_eq!(registry.to_domain(&ty, &rendered).unwrap(), value);
    }

    #[test]
    fn test_record_recursion() {
        let mut registry = MappingRegistry::with_defaults();
        registry.register(
            DomainType::named("Account"),
            Arc::new(
                RecordMapper::new("Account")
                    .field("owner", DomainType::Text)
                    .field("balance", DomainType::BigInt),
            ),
        );

        let ty = DomainType::named("Account");
        let mut members = IndexMap::new();
        members.insert("owner".to_string(), DomainValue::Text("ada".into()));
        members.insert(
            "balance".to_string(),
            DomainValue::BigInt(99999999999999999999),
        );
        let value = DomainValue::Record(members);

        let rendered = registry.to_target(&ty, &value).unwrap();
        let TargetValue::Object(fields) = &rendered else {
            panic!("expected an object");
        };
        assert_eq!(fields["owner"], TargetValue::Text("ada".to_string()));
        assert_eq!(
            fields["balance"],
            TargetValue::Text("99999999999999999999".to_string())
        );

        assert_eq!(registry.to_domain(&ty, &rendered).unwrap(), value);
    }

    #[test]
    fn test_record_missing_member_is_null() {
        let mut registry = MappingRegistry::with_defaults();
        registry.register(
            DomainType::named("Partial"),
            Arc::new(RecordMapper::new("Partial").field("note", DomainType::Text)),
        );

        let rendered = registry
            .to_target(
                &DomainType::named("Partial"),
                &DomainValue::Record(IndexMap::new()),
            )
            .unwrap();
        assert_eq!(
            rendered,
            TargetValue::Object(IndexMap::from_iter([(
                "note".to_string(),
                TargetValue::Null
            )]))
        );
    }

    #[test]
    fn test_nested_record_unmapped_member_fails() {
        let mut registry = MappingRegistry::new();
        registry.register(
            DomainType::named("Wrapper"),
            Arc::new(RecordMapper::new("Wrapper").field("inner", DomainType::Text)),
        );

        let mut members = IndexMap::new();
        members.insert("inner".to_string(), DomainValue::Text("x".into()));

        let err = registry
            .to_target(
                &DomainType::named("Wrapper"),
                &DomainValue::Record(members),
            )
            .unwrap_err();
        assert!(matches!(err, MappingError::Unmapped(DomainType::Text)));
    }
}
