//! Field definition → validation rule translation.
//!
//! # Steps
//!
//! 1. Generate the base rule for the declared field type.
//! 2. Merge extension keys (anything outside [`qiimp_model::InputName`]) over it.
//! 3. With `allowed_missing_vals[]`, wrap it as
//!    `anyof: [missing-value schema, base rule]` and apply the default to
//!    the missing-value schema; otherwise apply the default to the base rule.

use qiimp_model::{FieldDefinition, ValidationRule};
use qiimp_standards::Vocabulary;
use serde_json::Value;
use tracing::debug;

use crate::defaults::apply_default_if_any;
use crate::error::Result;
use crate::form::{allowed_missing_names, field_name, field_type, missing_value_literal};
use crate::generators::{generate, text_rule};

/// Translates field definitions against one validator vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct SchemaTranslator<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> SchemaTranslator<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// Produce the field's name and its finished validation rule.
    pub fn translate(&self, field: &FieldDefinition) -> Result<(String, ValidationRule)> {
        let name = field_name(field)?;
        let mut rule = self.base_rule(field)?;

        if let Some(names) = allowed_missing_names(field)? {
            let literals = names
                .into_iter()
                .map(|name| missing_value_literal(self.vocabulary, name).map(Value::String))
                .collect::<Result<Vec<_>>>()?;
            debug!(
                field_name = %name,
                missing_value_count = literals.len(),
                "field accepts missing values"
            );

            let mut missing_rule = text_rule(self.vocabulary);
            missing_rule.insert(
                self.vocabulary.keywords.allowed.clone(),
                Value::Array(literals),
            );
            apply_default_if_any(self.vocabulary, field, &mut missing_rule)?;

            let mut alternatives = ValidationRule::new();
            alternatives.insert(
                self.vocabulary.keywords.anyof.clone(),
                Value::Array(vec![missing_rule.into(), rule.into()]),
            );
            rule = alternatives;
        } else {
            apply_default_if_any(self.vocabulary, field, &mut rule)?;
        }

        debug!(field_name = %name, keys = rule.len(), "translated field");
        Ok((name.to_string(), rule))
    }

    /// Type-specific rule with extension keys merged over it.
    pub fn base_rule(&self, field: &FieldDefinition) -> Result<ValidationRule> {
        let field_type = field_type(self.vocabulary, field)?;
        let mut rule = generate(self.vocabulary, field_type, field)?;
        rule.merge_overriding(
            field
                .extension_entries()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        Ok(rule)
    }
}

/// Translate a field against the built-in vocabulary.
pub fn translate(field: &FieldDefinition) -> Result<(String, ValidationRule)> {
    let vocabulary = Vocabulary::default();
    SchemaTranslator::new(&vocabulary).translate(field)
}
