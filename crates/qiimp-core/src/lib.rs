//! Translate QIIMP form field definitions into Cerberus-style validation
//! schemas.

pub mod defaults;
pub mod error;
mod form;
pub mod generators;
pub mod schema;
pub mod translator;

pub use defaults::apply_default_if_any;
pub use error::{Result, TranslateError};
pub use schema::build_schema;
pub use translator::{SchemaTranslator, translate};
