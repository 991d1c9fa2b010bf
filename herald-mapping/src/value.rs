//! Canonical domain values and target-platform values.

use std::fmt;

use indexmap::IndexMap;

/// Key identifying a canonical domain type in the mapping registry.
///
/// The set of scalar tags is closed; composite and user-defined types
/// register under [`DomainType::Named`]. Lookup is exact-match only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DomainType {
    Bool,
    Int,
    /// Arbitrary-precision integer, carried textually on the target side.
    BigInt,
    Float,
    Text,
    /// A named composite or user-defined type.
    Named(String),
}

impl DomainType {
    /// Key for a named composite type.
    pub fn named(name: impl Into<String>) -> Self {
        DomainType::Named(name.into())
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainType::Bool => write!(f, "bool"),
            DomainType::Int => write!(f, "int"),
            DomainType::BigInt => write!(f, "big-int"),
            DomainType::Float => write!(f, "float"),
            DomainType::Text => write!(f, "text"),
            DomainType::Named(name) => write!(f, "{}", name),
        }
    }
}

/// A value in the canonical service model.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainValue {
    /// Canonical absence. Maps to [`TargetValue::Null`] without conversion.
    Null,
    Bool(bool),
    Int(i64),
    BigInt(i128),
    Float(f64),
    Text(String),
    List(Vec<DomainValue>),
    Record(IndexMap<String, DomainValue>),
}

impl DomainValue {
    pub fn is_null(&self) -> bool {
        matches!(self, DomainValue::Null)
    }

    /// Shape of this value, for mismatch reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainValue::Null => "null",
            DomainValue::Bool(_) => "bool",
            DomainValue::Int(_) => "int",
            DomainValue::BigInt(_) => "big-int",
            DomainValue::Float(_) => "float",
            DomainValue::Text(_) => "text",
            DomainValue::List(_) => "list",
            DomainValue::Record(_) => "record",
        }
    }
}

/// A value in a target platform's native representation.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetValue {
    /// Absence in the target representation.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<TargetValue>),
    Object(IndexMap<String, TargetValue>),
}

impl TargetValue {
    pub fn is_null(&self) -> bool {
        matches!(self, TargetValue::Null)
    }

    /// Shape of this value, for mismatch reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            TargetValue::Null => "null",
            TargetValue::Bool(_) => "bool",
            TargetValue::Int(_) => "int",
            TargetValue::Float(_) => "float",
            TargetValue::Text(_) => "text",
            TargetValue::List(_) => "list",
            TargetValue::Object(_) => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_type_display() {
        assert_eq!(DomainType::BigInt.to_string(), "big-int");
        assert_eq!(DomainType::named("Person").to_string(), "Person");
    }

    #[test]
    fn test_named_equality() {
        assert_eq!(DomainType::named("Person"), DomainType::named("Person"));
        assert_ne!(DomainType::named("Person"), DomainType::named("Order"));
        assert_ne!(DomainType::named("bool"), DomainType::Bool);
    }

    #[test]
    fn test_is_null() {
        assert!(DomainValue::Null.is_null());
        assert!(!DomainValue::Int(0).is_null());
        assert!(TargetValue::Null.is_null());
        assert!(!TargetValue::Text(String::new()).is_null());
    }
}
