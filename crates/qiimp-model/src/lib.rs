pub mod enums;
pub mod field;
pub mod rule;

pub use enums::{DataType, DefaultType, FieldType, InputName};
pub use field::FieldDefinition;
pub use rule::{ValidationRule, ValidationSchema};
