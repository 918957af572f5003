//! Converts AI-generated recruiting documents (職務経歴書, 推薦文,
//! キャリアプラン) into flat records for a hosted table store.

pub mod cli;
pub mod config;
pub mod convert;
pub mod detector;
pub mod error;
pub mod extract;
pub mod format;
pub mod store;
pub mod types;
pub mod utils;

#[cfg(test)]
mod fixtures;

pub use config::ConfigManager;
pub use convert::{
    convert_document, convert_str, convert_value, CompanyLimit, Conversion, ConversionOptions,
    ImportPreview,
};
pub use detector::{detect_document_type, inspect_document, validate_document};
pub use error::ConvertError;
pub use types::{CandidateDocument, DocumentType, FieldMap, Record, StartDateField};
