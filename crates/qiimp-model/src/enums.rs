//! Type-safe enumerations for form-submitted field definitions.
//!
//! The web form posts every value as a string. These enums give the
//! closed vocabularies of that form (field types, data types, default
//! mechanisms, and the recognized input keys) compile-time exhaustiveness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of metadata field a researcher defined on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Two-valued field whose true/false literals are chosen by the user.
    Boolean,
    /// Free text.
    #[serde(rename = "string", alias = "text")]
    Text,
    /// Value drawn from an enumerated list.
    Categorical,
    /// Numeric value, optionally bounded.
    Continuous,
}

impl FieldType {
    /// All field types, in form order.
    pub const ALL: [FieldType; 4] = [
        FieldType::Boolean,
        FieldType::Text,
        FieldType::Categorical,
        FieldType::Continuous,
    ];

    /// Returns the token the form posts for this field type.
    ///
    /// The text variant shares the validator's text data type token.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Boolean => "boolean",
            FieldType::Text => "string",
            FieldType::Categorical => "categorical",
            FieldType::Continuous => "continuous",
        }
    }

}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    /// Tokens match exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(FieldType::Boolean),
            "string" | "text" => Ok(FieldType::Text),
            "categorical" => Ok(FieldType::Categorical),
            "continuous" => Ok(FieldType::Continuous),
            _ => Err(format!("Unknown field type: {s}")),
        }
    }
}

/// Primitive type used to cast categorical values and to type the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "string", alias = "text")]
    Text,
    #[serde(rename = "number", alias = "decimal")]
    Decimal,
    #[serde(rename = "integer")]
    Integer,
}

impl DataType {
    pub const ALL: [DataType; 3] = [DataType::Text, DataType::Decimal, DataType::Integer];

    /// Returns the validator's default token for this data type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Text => "string",
            DataType::Decimal => "number",
            DataType::Integer => "integer",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    /// Accepts both the validator tokens and the form's descriptive names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" | "text" => Ok(DataType::Text),
            "number" | "decimal" => Ok(DataType::Decimal),
            "integer" => Ok(DataType::Integer),
            _ => Err(format!("Unknown data type: {s}")),
        }
    }
}

/// Default-mechanism tag selected on the form.
///
/// Each tag other than [`DefaultType::NoDefault`] names the input key that
/// holds the actual default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultType {
    NoDefault,
    BooleanDefault,
    AllowedMissingDefault,
    CategoricalDefault,
    ContinuousDefault,
    TextDefault,
}

impl DefaultType {
    pub const ALL: [DefaultType; 6] = [
        DefaultType::NoDefault,
        DefaultType::BooleanDefault,
        DefaultType::AllowedMissingDefault,
        DefaultType::CategoricalDefault,
        DefaultType::ContinuousDefault,
        DefaultType::TextDefault,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultType::NoDefault => "no_default",
            DefaultType::BooleanDefault => "boolean_default",
            DefaultType::AllowedMissingDefault => "allowed_missing_default",
            DefaultType::CategoricalDefault => "categorical_default",
            DefaultType::ContinuousDefault => "continuous_default",
            DefaultType::TextDefault => "text_default",
        }
    }

    /// Returns the input key holding the default value, if any.
    pub fn source_key(&self) -> Option<InputName> {
        match self {
            DefaultType::NoDefault => None,
            DefaultType::BooleanDefault => Some(InputName::BooleanDefaultSelect),
            DefaultType::AllowedMissingDefault => Some(InputName::AllowedMissingDefaultSelect),
            DefaultType::CategoricalDefault => Some(InputName::CategoricalDefaultSelect),
            DefaultType::ContinuousDefault => Some(InputName::ContinuousDefault),
            DefaultType::TextDefault => Some(InputName::TextDefault),
        }
    }
}

impl fmt::Display for DefaultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DefaultType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DefaultType::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("Unknown default type: {s}"))
    }
}

/// Input keys the form posts with a fixed meaning.
///
/// Any key outside this set is an extension key and is copied into the
/// generated rule unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputName {
    StudyName,
    FieldName,
    FieldType,
    AllowedMissingVals,
    DefaultValue,
    AllowedMissingDefaultSelect,
    CategoricalDefaultSelect,
    ContinuousDefault,
    BooleanDefaultSelect,
    TextDefault,
    TrueValue,
    FalseValue,
    DataType,
    CategoricalValues,
    MinimumComparison,
    MinimumValue,
    MaximumComparison,
    MaximumValue,
    Units,
}

impl InputName {
    pub const ALL: [InputName; 19] = [
        InputName::StudyName,
        InputName::FieldName,
        InputName::FieldType,
        InputName::AllowedMissingVals,
        InputName::DefaultValue,
        InputName::AllowedMissingDefaultSelect,
        InputName::CategoricalDefaultSelect,
        InputName::ContinuousDefault,
        InputName::BooleanDefaultSelect,
        InputName::TextDefault,
        InputName::TrueValue,
        InputName::FalseValue,
        InputName::DataType,
        InputName::CategoricalValues,
        InputName::MinimumComparison,
        InputName::MinimumValue,
        InputName::MaximumComparison,
        InputName::MaximumValue,
        InputName::Units,
    ];

    /// Returns the key exactly as the form posts it.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputName::StudyName => "study_name",
            InputName::FieldName => "field_name",
            InputName::FieldType => "field_type",
            InputName::AllowedMissingVals => "allowed_missing_vals[]",
            InputName::DefaultValue => "default_value",
            InputName::AllowedMissingDefaultSelect => "allowed_missing_default_select",
            InputName::CategoricalDefaultSelect => "categorical_default_select",
            InputName::ContinuousDefault => "continuous_default",
            InputName::BooleanDefaultSelect => "boolean_default_select",
            InputName::TextDefault => "text_default",
            InputName::TrueValue => "true_value",
            InputName::FalseValue => "false_value",
            InputName::DataType => "data_type",
            InputName::CategoricalValues => "categorical_values",
            InputName::MinimumComparison => "minimum_comparison",
            InputName::MinimumValue => "minimum_value",
            InputName::MaximumComparison => "maximum_comparison",
            InputName::MaximumValue => "maximum_value",
            InputName::Units => "units",
        }
    }

    /// Returns true if `key` is part of the fixed form vocabulary.
    pub fn is_recognized(key: &str) -> bool {
        InputName::ALL.iter().any(|name| name.as_str() == key)
    }
}

impl fmt::Display for InputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("Unknown input name: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_from_str() {
        assert_eq!(
            "boolean".parse::<FieldType>().unwrap(),
            FieldType::Boolean
        );
        assert_eq!("string".parse::<FieldType>().unwrap(), FieldType::Text);
        assert_eq!("text".parse::<FieldType>().unwrap(), FieldType::Text);
        assert_eq!(
            "continuous".parse::<FieldType>().unwrap(),
            FieldType::Continuous
        );
        assert!("datetime".parse::<FieldType>().is_err());
        assert!("Boolean".parse::<FieldType>().is_err());
        assert!(" categorical ".parse::<FieldType>().is_err());
    }

    #[test]
    fn test_data_type_aliases() {
        assert_eq!("text".parse::<DataType>().unwrap(), DataType::Text);
        assert_eq!("decimal".parse::<DataType>().unwrap(), DataType::Decimal);
        assert_eq!("number".parse::<DataType>().unwrap(), DataType::Decimal);
        assert_eq!("integer".parse::<DataType>().unwrap(), DataType::Integer);
        assert!("boolean".parse::<DataType>().is_err());
        assert!("Integer".parse::<DataType>().is_err());
    }

    #[test]
    fn test_default_type_source_keys() {
        assert_eq!(DefaultType::NoDefault.source_key(), None);
        assert_eq!(
            DefaultType::TextDefault.source_key(),
            Some(InputName::TextDefault)
        );
        assert_eq!(
            DefaultType::AllowedMissingDefault.source_key(),
            Some(InputName::AllowedMissingDefaultSelect)
        );
        for tag in DefaultType::ALL {
            assert_eq!(tag.as_str().parse::<DefaultType>().unwrap(), tag);
        }
        assert!(" no_default ".parse::<DefaultType>().is_err());
    }

    #[test]
    fn test_input_name_recognition() {
        assert!(InputName::is_recognized("allowed_missing_vals[]"));
        assert!(InputName::is_recognized("units"));
        assert!(!InputName::is_recognized("allowed_missing_vals"));
        assert!(!InputName::is_recognized("regex"));
    }
}
