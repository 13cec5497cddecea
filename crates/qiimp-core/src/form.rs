//! Typed lookups over a posted field definition.

use qiimp_model::{DataType, FieldDefinition, FieldType, InputName};
use qiimp_standards::Vocabulary;
use serde_json::Value;

use crate::error::{Result, TranslateError};

pub(crate) fn require(field: &FieldDefinition, name: InputName) -> Result<&Value> {
    field
        .input(name)
        .ok_or_else(|| TranslateError::missing(name.as_str()))
}

pub(crate) fn require_str(field: &FieldDefinition, name: InputName) -> Result<&str> {
    require(field, name)?
        .as_str()
        .ok_or_else(|| TranslateError::invalid_type(name.as_str(), "a string"))
}

pub(crate) fn field_name(field: &FieldDefinition) -> Result<&str> {
    require_str(field, InputName::FieldName)
}

/// The text field type is posted with the validator's text token, so the
/// vocabulary is consulted before the fixed spellings.
pub(crate) fn field_type(vocabulary: &Vocabulary, field: &FieldDefinition) -> Result<FieldType> {
    let raw = require_str(field, InputName::FieldType)?;
    if raw == vocabulary.data_types.text {
        return Ok(FieldType::Text);
    }
    raw.parse()
        .map_err(|_| TranslateError::UnknownFieldType {
            value: raw.to_string(),
        })
}

pub(crate) fn data_type(vocabulary: &Vocabulary, field: &FieldDefinition) -> Result<DataType> {
    let raw = require_str(field, InputName::DataType)?;
    vocabulary
        .data_types
        .resolve(raw)
        .or_else(|| raw.parse().ok())
        .ok_or_else(|| TranslateError::UnknownDataType {
            value: raw.to_string(),
        })
}

/// Resolve a sentinel name to its literal.
pub(crate) fn missing_value_literal(vocabulary: &Vocabulary, name: &str) -> Result<String> {
    vocabulary
        .missing_values
        .value_of(name)
        .map(str::to_string)
        .ok_or_else(|| TranslateError::UnknownMissingValueName {
            name: name.to_string(),
        })
}

/// Sentinel names from `allowed_missing_vals[]`, if the field declares any.
///
/// A single string is accepted as a one-element list.
pub(crate) fn allowed_missing_names(field: &FieldDefinition) -> Result<Option<Vec<&str>>> {
    let key = InputName::AllowedMissingVals;
    let Some(value) = field.input(key) else {
        return Ok(None);
    };
    let names = match value {
        Value::String(name) => vec![name.as_str()],
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .ok_or_else(|| TranslateError::invalid_type(key.as_str(), "a list of strings"))
            })
            .collect::<Result<Vec<_>>>()?,
        _ => return Err(TranslateError::invalid_type(key.as_str(), "a list of strings")),
    };
    Ok(Some(names))
}
