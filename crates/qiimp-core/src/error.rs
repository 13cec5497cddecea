use qiimp_model::DataType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("missing required key `{key}`")]
    MissingRequiredKey { key: String },

    #[error("unknown field type `{value}`")]
    UnknownFieldType { value: String },

    #[error("unknown data type `{value}`")]
    UnknownDataType { value: String },

    #[error("unknown default type `{value}`")]
    UnknownDefaultType { value: String },

    #[error("unknown missing-value name `{name}`")]
    UnknownMissingValueName { name: String },

    #[error("categorical value `{value}` cannot be cast to {data_type}")]
    InvalidCategoricalValue { value: String, data_type: DataType },

    #[error("value of `{key}` must be {expected}")]
    InvalidValueType { key: String, expected: &'static str },

    #[error("duplicate field name `{field_name}`")]
    DuplicateFieldName { field_name: String },

    #[error("field `{field_name}`: {source}")]
    Field {
        field_name: String,
        #[source]
        source: Box<TranslateError>,
    },
}

impl TranslateError {
    pub(crate) fn missing(key: impl Into<String>) -> Self {
        Self::MissingRequiredKey { key: key.into() }
    }

    pub(crate) fn invalid_type(key: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidValueType {
            key: key.into(),
            expected,
        }
    }

    /// Returns the underlying error, looking through [`TranslateError::Field`].
    pub fn root(&self) -> &TranslateError {
        match self {
            TranslateError::Field { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
