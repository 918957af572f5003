// src/convert/mod.rs
//! Record builders and the dispatcher that routes a validated document to
//! the builder for its type.

pub mod career_history;
pub mod career_plan;
pub mod recommendation;

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{info, warn};

use crate::detector::inspect_document;
use crate::error::ConvertError;
use crate::types::{CandidateDocument, DocumentBody, DocumentType, Record, StartDateField};

/// How many per-company field groups a career history record carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyLimit {
    /// One group per company, however many there are.
    #[default]
    Unbounded,
    /// Exactly `n` groups; further companies go to `職務経歴_その他`.
    Inline(usize),
}

impl CompanyLimit {
    /// Parses `unbounded` or a company count.
    pub fn from_setting(setting: &str) -> Option<Self> {
        match setting.trim() {
            "" | "unbounded" => Some(CompanyLimit::Unbounded),
            n => n.parse().ok().map(CompanyLimit::Inline),
        }
    }
}

impl From<Option<usize>> for CompanyLimit {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(CompanyLimit::Unbounded, CompanyLimit::Inline)
    }
}

impl fmt::Display for CompanyLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanyLimit::Unbounded => f.write_str("unbounded"),
            CompanyLimit::Inline(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    pub company_limit: CompanyLimit,
    pub start_date_field: StartDateField,
}

impl ConversionOptions {
    pub fn with_company_limit(mut self, company_limit: CompanyLimit) -> Self {
        self.company_limit = company_limit;
        self
    }

    pub fn with_start_date_field(mut self, start_date_field: StartDateField) -> Self {
        self.start_date_field = start_date_field;
        self
    }
}

/// A converted document: its type tag and the flat record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub document_type: DocumentType,
    pub record: Record,
}

impl Conversion {
    pub fn preview(&self) -> ImportPreview {
        ImportPreview {
            document_type: self.document_type,
            candidate_name: self.record.candidate_name().to_string(),
            field_count: self.record.field_count(),
        }
    }
}

/// What the import form shows before the record is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportPreview {
    pub document_type: DocumentType,
    pub candidate_name: String,
    pub field_count: usize,
}

impl fmt::Display for ImportPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✓ {}として認識しました（候補者: {}、{}項目）",
            self.document_type, self.candidate_name, self.field_count
        )
    }
}

/// Two-space indented copy of the input, kept as a lossless fallback.
pub(crate) fn raw_json(doc: &CandidateDocument) -> String {
    serde_json::to_string_pretty(doc.raw()).unwrap_or_else(|e| {
        warn!("Failed to serialize raw document: {}", e);
        String::new()
    })
}

/// Routes a validated document to its builder.
pub fn convert_document(doc: &CandidateDocument, options: &ConversionOptions) -> Conversion {
    let raw = raw_json(doc);
    let record = match doc.body() {
        DocumentBody::CareerHistory(body) => Record::CareerHistory(
            career_history::convert_career_history(body, raw, options.company_limit),
        ),
        DocumentBody::Recommendation(body) => {
            Record::Recommendation(recommendation::convert_recommendation(
                body,
                raw,
                options.start_date_field,
            ))
        }
        DocumentBody::CareerPlan(body) => {
            Record::CareerPlan(career_plan::convert_career_plan(body, raw))
        }
    };

    info!(
        "Converted {} for '{}' into {} fields",
        doc.document_type(),
        record.candidate_name(),
        record.field_count()
    );

    Conversion {
        document_type: doc.document_type(),
        record,
    }
}

/// Detects, validates and converts an already parsed value.
pub fn convert_value(value: &Value, options: &ConversionOptions) -> Result<Conversion, ConvertError> {
    let doc = inspect_document(value)?;
    Ok(convert_document(&doc, options))
}

/// Full pipeline from pasted JSON text.
pub fn convert_str(input: &str, options: &ConversionOptions) -> Result<Conversion, ConvertError> {
    let value: Value = serde_json::from_str(input)?;
    convert_value(&value, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::types::RAW_JSON_FIELD;
    use serde_json::json;

    fn samples() -> Vec<Value> {
        vec![
            fixtures::career_history(),
            fixtures::recommendation(),
            fixtures::career_plan(),
        ]
    }

    #[test]
    fn test_dispatches_by_document_type() {
        for sample in samples() {
            let conversion = convert_value(&sample, &ConversionOptions::default()).unwrap();
            assert_eq!(
                conversion.document_type.as_str(),
                sample["document_type"].as_str().unwrap()
            );
            assert_eq!(conversion.record.document_type(), conversion.document_type);

            let fields = conversion.record.to_fields();
            assert!(fields[RAW_JSON_FIELD]
                .as_str()
                .unwrap()
                .contains("\"document_type\""));
        }
    }

    #[test]
    fn test_raw_json_round_trip() {
        let mut documents = samples();
        documents.push(fixtures::recommendation_cells());
        documents.push(fixtures::career_plan_phases());
        documents.push(fixtures::career_history_with_companies(7));

        for sample in documents {
            let conversion = convert_value(&sample, &ConversionOptions::default()).unwrap();
            let reparsed: Value = serde_json::from_str(conversion.record.raw_json()).unwrap();
            assert_eq!(reparsed["document_type"], sample["document_type"]);
            assert_eq!(
                reparsed["sections"].as_array().unwrap().len(),
                sample["sections"].as_array().unwrap().len()
            );
            assert_eq!(reparsed, sample);
        }
    }

    #[test]
    fn test_raw_json_is_two_space_indented() {
        let doc = crate::detector::validate_document(&json!({
            "document_type": "推薦文",
            "sections": []
        }))
        .unwrap();
        assert_eq!(
            raw_json(&doc),
            "{\n  \"document_type\": \"推薦文\",\n  \"sections\": []\n}"
        );
    }

    #[test]
    fn test_convert_str_failures() {
        let options = ConversionOptions::default();
        assert!(matches!(
            convert_str("{not json", &options),
            Err(ConvertError::InvalidJson(_))
        ));
        assert!(matches!(
            convert_str(r#"{"document_type": "履歴書", "sections": []}"#, &options),
            Err(ConvertError::UnrecognizedType { .. })
        ));
        assert!(matches!(
            convert_str(r#"{"document_type": "推薦文"}"#, &options),
            Err(ConvertError::MissingSections(DocumentType::Recommendation))
        ));
    }

    #[test]
    fn test_empty_sections_convert_to_empty_record() {
        let conversion = convert_str(
            r#"{"document_type": "キャリアプラン", "sections": []}"#,
            &ConversionOptions::default(),
        )
        .unwrap();
        let fields = conversion.record.to_fields();
        assert_eq!(fields.len(), 12);
        assert_eq!(fields["短期計画"], "");
        assert_eq!(fields["候補者名"], "");
    }

    #[test]
    fn test_preview() {
        let conversion =
            convert_value(&fixtures::career_history(), &ConversionOptions::default()).unwrap();
        let preview = conversion.preview();
        assert_eq!(preview.document_type, DocumentType::CareerHistory);
        assert_eq!(preview.candidate_name, "山田太郎");
        // 7 fixed fields plus one company group
        assert_eq!(preview.field_count, 19);
        assert_eq!(
            preview.to_string(),
            "✓ 職務経歴書として認識しました（候補者: 山田太郎、19項目）"
        );
    }

    #[test]
    fn test_company_limit_settings() {
        assert_eq!(CompanyLimit::from_setting("unbounded"), Some(CompanyLimit::Unbounded));
        assert_eq!(CompanyLimit::from_setting(" 5 "), Some(CompanyLimit::Inline(5)));
        assert_eq!(CompanyLimit::from_setting("five"), None);
        assert_eq!(CompanyLimit::from(Some(3)), CompanyLimit::Inline(3));
        assert_eq!(CompanyLimit::from(None), CompanyLimit::Unbounded);
        assert_eq!(CompanyLimit::Inline(5).to_string(), "5");
    }
}
