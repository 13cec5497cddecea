//! Form-submitted field definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::InputName;

/// One field definition as posted by the metadata form.
///
/// Keys keep their submission order so that extension keys are merged into
/// the generated rule in the order the user supplied them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldDefinition {
    entries: Map<String, Value>,
}

impl FieldDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a definition from flat string pairs, as a form post delivers them.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), Value::String(value.into())))
            .collect();
        Self { entries }
    }

    /// Insert a value, returning the previous one for that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style [`FieldDefinition::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up one of the recognized form keys.
    pub fn input(&self, name: InputName) -> Option<&Value> {
        self.entries.get(name.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Entries whose key is outside the fixed form vocabulary.
    pub fn extension_entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries
            .iter()
            .filter(|(key, _)| !InputName::is_recognized(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Map<String, Value>> for FieldDefinition {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}
