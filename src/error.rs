// src/error.rs
use thiserror::Error;

use crate::types::document::DocumentType;

/// Why a pasted document could not be converted.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unrecognized document_type: {}", .found.as_deref().unwrap_or("<missing>"))]
    UnrecognizedType { found: Option<String> },

    #[error("{0} document has no sections array")]
    MissingSections(DocumentType),

    /// A tag outside the three known types reached a place that assumed
    /// detection had already happened.
    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),
}

impl ConvertError {
    /// Message shown to the recruiter in the import form.
    pub fn user_message(&self) -> String {
        match self {
            ConvertError::InvalidJson(e) => format!("JSONパースエラー: {}", e),
            ConvertError::UnrecognizedType { .. } => {
                "document_type が認識できません。「職務経歴書」「推薦文」「キャリアプラン」のいずれかを指定してください。"
                    .to_string()
            }
            ConvertError::MissingSections(_) => {
                "JSONの形式が不正です。sectionsフィールドが必要です。".to_string()
            }
            ConvertError::UnknownDocumentType(tag) => {
                format!("未対応のドキュメントタイプです: {}", tag)
            }
        }
    }
}
