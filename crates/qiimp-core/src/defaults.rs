use qiimp_model::{DefaultType, FieldDefinition, InputName, ValidationRule};
use qiimp_standards::Vocabulary;
use serde_json::Value;

use crate::error::{Result, TranslateError};
use crate::form::require_str;

/// Resolve the field's default-mechanism tag.
pub fn default_type(field: &FieldDefinition) -> Result<DefaultType> {
    let raw = require_str(field, InputName::DefaultValue)?;
    raw.parse().map_err(|_| TranslateError::UnknownDefaultType {
        value: raw.to_string(),
    })
}

/// Returns the default value the field declares, if any.
///
/// A default naming a missing-value sentinel is replaced by the sentinel's
/// literal.
pub fn declared_default(vocabulary: &Vocabulary, field: &FieldDefinition) -> Result<Option<Value>> {
    let Some(source) = default_type(field)?.source_key() else {
        return Ok(None);
    };
    let value = field
        .input(source)
        .ok_or_else(|| TranslateError::missing(source.as_str()))?;
    let resolved = match value
        .as_str()
        .and_then(|name| vocabulary.missing_values.value_of(name))
    {
        Some(literal) => Value::String(literal.to_string()),
        None => value.clone(),
    };
    Ok(Some(resolved))
}

/// Set the rule's default keyword when the field declares a default.
pub fn apply_default_if_any(
    vocabulary: &Vocabulary,
    field: &FieldDefinition,
    rule: &mut ValidationRule,
) -> Result<()> {
    if let Some(value) = declared_default(vocabulary, field)? {
        rule.insert(vocabulary.keywords.default.clone(), value);
    }
    Ok(())
}
