// src/store/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{DocumentType, FieldMap};

#[derive(Debug, Serialize)]
pub struct CreateRecordRequest<'a> {
    pub fields: &'a FieldMap,
}

/// Envelope of every table-store response. `code` 0 means success.
#[derive(Debug, Deserialize)]
pub struct StoreResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct CreatedRecord {
    pub record: StoredRecord,
}

#[derive(Debug, Deserialize)]
pub struct StoredRecord {
    pub record_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportOutcome {
    pub document_type: DocumentType,
    pub candidate_name: String,
    pub table_id: String,
    pub record_id: String,
    pub imported_at: DateTime<Utc>,
}

impl fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✓ {}をインポートしました（候補者: {}、レコードID: {}）",
            self.document_type, self.candidate_name, self.record_id
        )
    }
}
