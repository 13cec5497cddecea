//! Tests for qiimp-model types.

use qiimp_model::{DataType, FieldDefinition, FieldType, InputName, ValidationRule};
use serde_json::{Value, json};

#[test]
fn field_types_round_trip_through_form_tokens() {
    for field_type in FieldType::ALL {
        assert_eq!(field_type.as_str().parse::<FieldType>().unwrap(), field_type);
    }
}

#[test]
fn data_type_serializes_as_validator_token() {
    let json = serde_json::to_value(DataType::Decimal).expect("serialize data type");
    assert_eq!(json, json!("number"));
    let parsed: DataType = serde_json::from_value(json!("text")).expect("deserialize alias");
    assert_eq!(parsed, DataType::Text);
}

#[test]
fn every_input_name_is_recognized() {
    for name in InputName::ALL {
        assert!(InputName::is_recognized(name.as_str()), "{name}");
        assert_eq!(name.as_str().parse::<InputName>().unwrap(), name);
    }
}

#[test]
fn field_definition_builder_keeps_json_values() {
    let field = FieldDefinition::new()
        .with("field_name", "depth")
        .with("minimum_value", 0)
        .with("allowed_missing_vals[]", json!(["ebi_not_applicable"]));

    assert_eq!(field.len(), 3);
    assert_eq!(field.input(InputName::MinimumValue), Some(&json!(0)));
    assert_eq!(
        field.get("allowed_missing_vals[]"),
        Some(&json!(["ebi_not_applicable"]))
    );
}

#[test]
fn rule_converts_into_json_object() {
    let mut rule = ValidationRule::new();
    rule.insert("empty", false);
    rule.insert("required", true);
    let value = Value::from(rule);
    assert_eq!(value, json!({"empty": false, "required": true}));
}
