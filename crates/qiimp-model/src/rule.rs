//! Validation rules produced for the downstream validator.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Validation keywords and values for a single field.
///
/// Keys are kept in insertion order; inserting an existing key replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationRule {
    entries: Map<String, Value>,
}

impl ValidationRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Merge entries into the rule; incoming values win on key collision.
    pub fn merge_overriding<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (key, value) in entries {
            self.entries.insert(key.into(), value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<ValidationRule> for Value {
    fn from(rule: ValidationRule) -> Self {
        Value::Object(rule.entries)
    }
}

impl From<Map<String, Value>> for ValidationRule {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

/// Complete schema: one rule per field name, in field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationSchema {
    fields: Vec<(String, ValidationRule)>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field rule. Returns the rule back if the name is taken.
    pub fn insert(
        &mut self,
        field_name: impl Into<String>,
        rule: ValidationRule,
    ) -> Result<(), ValidationRule> {
        let field_name = field_name.into();
        if self.contains(&field_name) {
            return Err(rule);
        }
        self.fields.push((field_name, rule));
        Ok(())
    }

    pub fn get(&self, field_name: &str) -> Option<&ValidationRule> {
        self.fields
            .iter()
            .find(|(name, _)| name == field_name)
            .map(|(_, rule)| rule)
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == field_name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationRule)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, rule)| (name.clone(), Value::from(rule.clone())))
                .collect(),
        )
    }
}

impl Serialize for ValidationSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, rule) in &self.fields {
            map.serialize_entry(name, rule)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_overriding_replaces_in_place() {
        let mut rule = ValidationRule::new();
        rule.insert("empty", false);
        rule.insert("required", true);
        rule.insert("type", "string");
        rule.merge_overriding([("required", json!(false)), ("regex", json!("^a"))]);

        let keys: Vec<&str> = rule.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["empty", "required", "type", "regex"]);
        assert_eq!(rule.get("required"), Some(&json!(false)));
    }

    #[test]
    fn schema_rejects_duplicate_names() {
        let mut schema = ValidationSchema::new();
        assert!(schema.insert("ph", ValidationRule::new()).is_ok());
        assert!(schema.insert("ph", ValidationRule::new()).is_err());
        assert_eq!(schema.len(), 1);
    }

    #[test]
    fn schema_serializes_in_field_order() {
        let mut schema = ValidationSchema::new();
        let mut rule = ValidationRule::new();
        rule.insert("type", "string");
        schema.insert("zeta", rule.clone()).unwrap();
        schema.insert("alpha", rule).unwrap();

        let json = serde_json::to_string(&schema).expect("serialize schema");
        assert_eq!(json, r#"{"zeta":{"type":"string"},"alpha":{"type":"string"}}"#);
        assert_eq!(schema.to_value(), serde_json::from_str::<Value>(&json).unwrap());
    }
}
