#![deny(unsafe_code)]

pub mod error;
pub mod vocabulary;

pub use crate::error::{Result, StandardsError};
pub use crate::vocabulary::{
    DataTypeTokens, MissingValue, MissingValueTable, ValidationKeywords, Vocabulary,
};
