//! Validator vocabulary consumed by the schema translator.
//!
//! The downstream validator owns the spelling of its validation keywords,
//! its primitive data type tokens, and the table of standardized
//! missing-value sentinels. This module models those tables as data so the
//! translator can be driven by a different validator release (or a test
//! fixture) without code changes.
//!
//! ## File format
//!
//! ```toml
//! [keywords]
//! empty = "empty"
//! required = "required"
//! type = "type"
//! allowed = "allowed"
//! default = "default"
//! anyof = "anyof"
//!
//! [data_types]
//! text = "string"
//! decimal = "number"
//! integer = "integer"
//!
//! [[missing_values]]
//! name = "ebi_not_collected"
//! value = "missing: not collected"
//! ```
//!
//! Sentinels keep file order; it is the order they are listed to users.

use std::collections::BTreeSet;
use std::path::Path;

use qiimp_model::DataType;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StandardsError};

/// Validation keyword spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationKeywords {
    /// Whether an empty value is accepted.
    pub empty: String,
    /// Whether the field must be present.
    pub required: String,
    /// Primitive type of the value.
    #[serde(rename = "type")]
    pub type_: String,
    /// Enumerated accepted values.
    pub allowed: String,
    /// Value substituted when the field is absent.
    pub default: String,
    /// Alternative of several schemas.
    pub anyof: String,
}

impl ValidationKeywords {
    fn all(&self) -> [(&'static str, &str); 6] {
        [
            ("empty", self.empty.as_str()),
            ("required", self.required.as_str()),
            ("type", self.type_.as_str()),
            ("allowed", self.allowed.as_str()),
            ("default", self.default.as_str()),
            ("anyof", self.anyof.as_str()),
        ]
    }
}

impl Default for ValidationKeywords {
    fn default() -> Self {
        Self {
            empty: "empty".to_string(),
            required: "required".to_string(),
            type_: "type".to_string(),
            allowed: "allowed".to_string(),
            default: "default".to_string(),
            anyof: "anyof".to_string(),
        }
    }
}

/// Validator tokens for each primitive data type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTypeTokens {
    pub text: String,
    pub decimal: String,
    pub integer: String,
}

impl DataTypeTokens {
    /// Returns the validator token for a data type.
    pub fn token(&self, data_type: DataType) -> &str {
        match data_type {
            DataType::Text => &self.text,
            DataType::Decimal => &self.decimal,
            DataType::Integer => &self.integer,
        }
    }

    /// Resolve a validator token back to its data type (exact match).
    pub fn resolve(&self, token: &str) -> Option<DataType> {
        DataType::ALL
            .into_iter()
            .find(|data_type| self.token(*data_type) == token)
    }
}

impl Default for DataTypeTokens {
    fn default() -> Self {
        Self {
            text: DataType::Text.as_str().to_string(),
            decimal: DataType::Decimal.as_str().to_string(),
            integer: DataType::Integer.as_str().to_string(),
        }
    }
}

/// A standardized token usable in place of any real value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingValue {
    /// Symbolic name posted by the form (e.g. `ebi_not_collected`).
    pub name: String,
    /// Literal written into validated data (e.g. `missing: not collected`).
    pub value: String,
}

impl MissingValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered name → literal table of missing-value sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissingValueTable {
    entries: Vec<MissingValue>,
}

impl MissingValueTable {
    pub fn new(entries: Vec<MissingValue>) -> Self {
        Self { entries }
    }

    /// Returns the literal for a sentinel name.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MissingValue> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MissingValueTable {
    /// EBI/INSDC missing-value terms.
    fn default() -> Self {
        Self::new(vec![
            MissingValue::new("ebi_not_applicable", "not applicable"),
            MissingValue::new("ebi_missing", "missing"),
            MissingValue::new("ebi_not_collected", "missing: not collected"),
            MissingValue::new("ebi_not_provided", "missing: not provided"),
            MissingValue::new("ebi_restricted", "missing: restricted access"),
        ])
    }
}

/// Everything the translator needs to know about the target validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub keywords: ValidationKeywords,
    #[serde(default)]
    pub data_types: DataTypeTokens,
    #[serde(default)]
    pub missing_values: MissingValueTable,
}

impl Vocabulary {
    /// Parse and validate a vocabulary from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let vocabulary: Vocabulary = toml::from_str(text)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Load and validate a vocabulary file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        let vocabulary: Vocabulary = toml::from_str(&text).map_err(|source| StandardsError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Check the tables are usable: keywords and data type tokens must be
    /// non-empty and distinct, sentinel names non-empty and unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for (role, keyword) in self.keywords.all() {
            if keyword.trim().is_empty() {
                return Err(StandardsError::invalid(format!("keyword `{role}` is empty")));
            }
            if !seen.insert(keyword) {
                return Err(StandardsError::invalid(format!(
                    "keyword `{keyword}` is used for more than one role"
                )));
            }
        }

        let mut tokens = BTreeSet::new();
        for data_type in DataType::ALL {
            let token = self.data_types.token(data_type);
            if token.trim().is_empty() {
                return Err(StandardsError::invalid(format!(
                    "data type token for `{data_type}` is empty"
                )));
            }
            if !tokens.insert(token) {
                return Err(StandardsError::invalid(format!(
                    "data type token `{token}` is used for more than one data type"
                )));
            }
        }

        let mut names = BTreeSet::new();
        for entry in self.missing_values.iter() {
            if entry.name.trim().is_empty() {
                return Err(StandardsError::invalid("missing-value sentinel with empty name"));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(StandardsError::DuplicateSentinel {
                    name: entry.name.clone(),
                });
            }
        }
        Ok(())
    }
}
