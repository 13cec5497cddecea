use qiimp_model::{FieldDefinition, InputName, ValidationSchema};
use tracing::info;

use crate::error::{Result, TranslateError};
use crate::translator::SchemaTranslator;

/// Name reported for a failing field that has no usable `field_name`.
pub const UNNAMED_FIELD: &str = "<unnamed>";

/// Translate every field, in order, into one schema keyed by field name.
///
/// Failures are wrapped in [`TranslateError::Field`] with the offending
/// field's name.
pub fn build_schema<'f, I>(translator: &SchemaTranslator<'_>, fields: I) -> Result<ValidationSchema>
where
    I: IntoIterator<Item = &'f FieldDefinition>,
{
    let mut schema = ValidationSchema::new();
    for field in fields {
        let (field_name, rule) = translator.translate(field).map_err(|source| {
            let field_name = field
                .input(InputName::FieldName)
                .and_then(serde_json::Value::as_str)
                .unwrap_or(UNNAMED_FIELD)
                .to_string();
            TranslateError::Field {
                field_name,
                source: Box::new(source),
            }
        })?;
        if schema.insert(field_name.clone(), rule).is_err() {
            return Err(TranslateError::DuplicateFieldName { field_name });
        }
    }
    info!(field_count = schema.len(), "schema assembled");
    Ok(schema)
}
