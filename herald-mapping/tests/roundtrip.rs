//! Round-trip and null-propagation laws for the builtin mappers.

use herald_mapping::{DomainType, DomainValue, MappingRegistry, TargetValue};

fn representable_values() -> Vec<(DomainType, DomainValue)> {
    vec![
        (DomainType::Bool, DomainValue::Bool(true)),
        (DomainType::Bool, DomainValue::Bool(false)),
        (DomainType::Int, DomainValue::Int(0)),
        (DomainType::Int, DomainValue::Int(i64::MIN)),
        (DomainType::Int, DomainValue::Int(i64::MAX)),
        (DomainType::BigInt, DomainValue::BigInt(0)),
        (
            DomainType::BigInt,
            DomainValue::BigInt(12345678901234567890),
        ),
        (
            DomainType::BigInt,
            DomainValue::BigInt(-12345678901234567890),
        ),
        (DomainType::Float, DomainValue::Float(-2.5)),
        (DomainType::Text, DomainValue::Text(String::new())),
        (DomainType::Text, DomainValue::Text("héllo wörld".into())),
    ]
}

#[test]
fn round_trip_preserves_every_representable_value() {
    let registry = MappingRegistry::with_defaults();

    for (ty, value) in representable_values() {
        let rendered = registry
            .to_target(&ty, &value)
            .unwrap_or_else(|e| panic!("to_target failed for {ty}: {e}"));
        let back = registry
            .to_domain(&ty, &rendered)
            .unwrap_or_else(|e| panic!("to_domain failed for {ty}: {e}"));
        assert_eq!(back, value, "round trip changed a {ty} value");
    }
}

#[test]
fn round_trip_preserves_null_for_every_mapper() {
    let registry = MappingRegistry::with_defaults();

    for ty in [
        DomainType::Bool,
        DomainType::Int,
        DomainType::BigInt,
        DomainType::Float,
        DomainType::Text,
    ] {
        let rendered = registry.to_target(&ty, &DomainValue::Null).unwrap();
        assert_eq!(rendered, TargetValue::Null, "to_target(null) for {ty}");

        let back = registry.to_domain(&ty, &TargetValue::Null).unwrap();
        assert_eq!(back, DomainValue::Null, "to_domain(null) for {ty}");
    }
}
