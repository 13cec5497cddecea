//! Type-specific rule generators.
//!
//! Every generator starts from the basic rule (`empty = false`,
//! `required = true`) and adds the keywords its field type needs.

use qiimp_model::{DataType, FieldDefinition, FieldType, InputName, ValidationRule};
use qiimp_standards::Vocabulary;
use serde_json::{Number, Value};

use crate::error::{Result, TranslateError};
use crate::form::{data_type, require, require_str};

/// Separator the form uses between categorical values.
pub const CATEGORICAL_SEPARATOR: &str = "\r\n";

/// Dispatch to the generator for `field_type`.
pub fn generate(
    vocabulary: &Vocabulary,
    field_type: FieldType,
    field: &FieldDefinition,
) -> Result<ValidationRule> {
    match field_type {
        FieldType::Text => Ok(text_rule(vocabulary)),
        FieldType::Boolean => boolean_rule(vocabulary, field),
        FieldType::Categorical => categorical_rule(vocabulary, field),
        FieldType::Continuous => continuous_rule(vocabulary, field),
    }
}

pub fn basic_rule(vocabulary: &Vocabulary) -> ValidationRule {
    let mut rule = ValidationRule::new();
    rule.insert(vocabulary.keywords.empty.clone(), false);
    rule.insert(vocabulary.keywords.required.clone(), true);
    rule
}

pub fn text_rule(vocabulary: &Vocabulary) -> ValidationRule {
    let mut rule = basic_rule(vocabulary);
    rule.insert(
        vocabulary.keywords.type_.clone(),
        vocabulary.data_types.text.clone(),
    );
    rule
}

/// Text rule restricted to the field's true and false literals, in that order.
pub fn boolean_rule(vocabulary: &Vocabulary, field: &FieldDefinition) -> Result<ValidationRule> {
    let true_value = require(field, InputName::TrueValue)?.clone();
    let false_value = require(field, InputName::FalseValue)?.clone();

    let mut rule = text_rule(vocabulary);
    rule.insert(
        vocabulary.keywords.allowed.clone(),
        Value::Array(vec![true_value, false_value]),
    );
    Ok(rule)
}

pub fn categorical_rule(
    vocabulary: &Vocabulary,
    field: &FieldDefinition,
) -> Result<ValidationRule> {
    let (data_type, mut rule) = typed_rule(vocabulary, field)?;

    let raw_values = require_str(field, InputName::CategoricalValues)?;
    let allowed = raw_values
        .split(CATEGORICAL_SEPARATOR)
        .map(|value| cast_value(data_type, value.trim()))
        .collect::<Result<Vec<_>>>()?;

    rule.insert(vocabulary.keywords.allowed.clone(), Value::Array(allowed));
    Ok(rule)
}

/// Typed rule with optional bounds.
///
/// Bound values are copied as posted; the validator casts them against the
/// declared type.
pub fn continuous_rule(
    vocabulary: &Vocabulary,
    field: &FieldDefinition,
) -> Result<ValidationRule> {
    let (_, mut rule) = typed_rule(vocabulary, field)?;
    insert_comparison(
        field,
        InputName::MinimumValue,
        InputName::MinimumComparison,
        &mut rule,
    )?;
    insert_comparison(
        field,
        InputName::MaximumValue,
        InputName::MaximumComparison,
        &mut rule,
    )?;
    Ok(rule)
}

/// Basic rule typed with the field's declared data type.
fn typed_rule(
    vocabulary: &Vocabulary,
    field: &FieldDefinition,
) -> Result<(DataType, ValidationRule)> {
    let data_type = data_type(vocabulary, field)?;
    let mut rule = basic_rule(vocabulary);
    rule.insert(
        vocabulary.keywords.type_.clone(),
        vocabulary.data_types.token(data_type).to_string(),
    );
    Ok((data_type, rule))
}

/// The comparison input names the validation keyword the threshold goes under.
fn insert_comparison(
    field: &FieldDefinition,
    threshold: InputName,
    comparison: InputName,
    rule: &mut ValidationRule,
) -> Result<()> {
    let Some(threshold_value) = field.input(threshold) else {
        return Ok(());
    };
    let keyword = require_str(field, comparison)?;
    rule.insert(keyword, threshold_value.clone());
    Ok(())
}

/// Cast one categorical candidate to its declared primitive.
pub fn cast_value(data_type: DataType, raw: &str) -> Result<Value> {
    let invalid = || TranslateError::InvalidCategoricalValue {
        value: raw.to_string(),
        data_type,
    };
    match data_type {
        DataType::Text => Ok(Value::String(raw.to_string())),
        DataType::Decimal => raw
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(invalid),
        DataType::Integer => raw
            .parse::<i64>()
            .map(Value::from)
            .or_else(|_| raw.parse::<u64>().map(Value::from))
            .map_err(|_| invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vocabulary() -> Vocabulary {
        Vocabulary::default()
    }

    #[test]
    fn text_rule_has_basic_keys_and_type() {
        let rule = text_rule(&vocabulary());
        assert_eq!(
            Value::from(rule),
            json!({"empty": false, "required": true, "type": "string"})
        );
    }

    #[test]
    fn boolean_requires_both_literals() {
        let field = FieldDefinition::from_pairs([("true_value", "Yes")]);
        let err = boolean_rule(&vocabulary(), &field).unwrap_err();
        assert!(
            matches!(err, TranslateError::MissingRequiredKey { ref key } if key == "false_value")
        );
    }

    #[test]
    fn cast_value_by_type() {
        assert_eq!(cast_value(DataType::Text, "a b").unwrap(), json!("a b"));
        assert_eq!(cast_value(DataType::Integer, "-4").unwrap(), json!(-4));
        assert_eq!(cast_value(DataType::Decimal, "2.5").unwrap(), json!(2.5));
        assert!(cast_value(DataType::Integer, "2.5").is_err());
        assert!(cast_value(DataType::Decimal, "NaN").is_err());
        assert!(cast_value(DataType::Integer, "").is_err());
    }

    #[test]
    fn integer_cast_covers_the_full_json_integer_range() {
        assert_eq!(
            cast_value(DataType::Integer, "-9223372036854775808").unwrap(),
            json!(i64::MIN)
        );
        assert_eq!(
            cast_value(DataType::Integer, "18446744073709551615").unwrap(),
            json!(u64::MAX)
        );
        assert!(matches!(
            cast_value(DataType::Integer, "99999999999999999999"),
            Err(TranslateError::InvalidCategoricalValue { .. })
        ));
    }

    #[test]
    fn continuous_bound_without_comparison_is_missing_key() {
        let field = FieldDefinition::from_pairs([("data_type", "number")]).with("maximum_value", 10);
        let err = continuous_rule(&vocabulary(), &field).unwrap_err();
        assert!(
            matches!(err, TranslateError::MissingRequiredKey { ref key } if key == "maximum_comparison")
        );
    }

    #[test]
    fn categorical_decimal_values() {
        let field = FieldDefinition::from_pairs([
            ("data_type", "decimal"),
            ("categorical_values", "0.5\r\n1\r\n 1.25"),
        ]);
        let rule = categorical_rule(&vocabulary(), &field).unwrap();
        assert_eq!(rule.get("type"), Some(&json!("number")));
        assert_eq!(rule.get("allowed"), Some(&json!([0.5, 1.0, 1.25])));
    }
}
