// src/detector.rs
//! Type detection and structural validation of pasted documents.

use serde_json::Value;
use tracing::debug;

use crate::error::ConvertError;
use crate::types::{CandidateDocument, DocumentType};

/// Classifies a parsed value by its `document_type` tag.
///
/// Only an object whose tag exactly equals one of the three known literals
/// is recognized; everything else, including `null` and primitives, is not.
pub fn detect_document_type(value: &Value) -> Option<DocumentType> {
    let tag = value.as_object()?.get("document_type")?.as_str()?;
    DocumentType::from_tag(tag)
}

/// Narrows a value to a convertible document, or `None` when the type is
/// unrecognized or `sections` is not an array.
pub fn validate_document(value: &Value) -> Option<CandidateDocument> {
    inspect_document(value).ok()
}

/// Same gate as [`validate_document`], reporting which check failed.
///
/// Only the presence of a `sections` array is checked here; section
/// contents are decoded leniently afterwards.
pub fn inspect_document(value: &Value) -> Result<CandidateDocument, ConvertError> {
    let document_type = detect_document_type(value).ok_or_else(|| {
        ConvertError::UnrecognizedType {
            found: value
                .get("document_type")
                .map(|tag| tag.as_str().map_or_else(|| tag.to_string(), String::from)),
        }
    })?;

    let sections = value
        .get("sections")
        .and_then(Value::as_array)
        .ok_or(ConvertError::MissingSections(document_type))?;

    debug!(
        "Validated {} document with {} sections",
        document_type,
        sections.len()
    );

    Ok(CandidateDocument::decode(document_type, value, sections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use serde_json::json;

    #[test]
    fn test_detects_all_known_types() {
        assert_eq!(
            detect_document_type(&fixtures::career_history()),
            Some(DocumentType::CareerHistory)
        );
        assert_eq!(
            detect_document_type(&fixtures::recommendation()),
            Some(DocumentType::Recommendation)
        );
        assert_eq!(
            detect_document_type(&fixtures::career_plan()),
            Some(DocumentType::CareerPlan)
        );
    }

    #[test]
    fn test_rejects_unknown_inputs() {
        assert_eq!(detect_document_type(&json!({})), None);
        assert_eq!(detect_document_type(&json!({"document_type": "不正"})), None);
        assert_eq!(detect_document_type(&json!({"document_type": 1})), None);
        assert_eq!(detect_document_type(&json!({"document_type": "推薦文 "})), None);
        assert_eq!(detect_document_type(&Value::Null), None);
        assert_eq!(detect_document_type(&json!("string")), None);
        assert_eq!(detect_document_type(&json!(12)), None);
        assert_eq!(detect_document_type(&json!(["推薦文"])), None);
    }

    #[test]
    fn test_validate_requires_sections_array() {
        assert!(validate_document(&json!({"document_type": "職務経歴書"})).is_none());
        assert!(
            validate_document(&json!({"document_type": "職務経歴書", "sections": {}})).is_none()
        );
        assert!(validate_document(&json!({"sections": []})).is_none());
    }

    #[test]
    fn test_validate_keeps_input_unchanged() {
        let empty = json!({"document_type": "推薦文", "sections": []});
        let doc = validate_document(&empty).unwrap();
        assert_eq!(doc.raw(), &empty);
        assert_eq!(doc.section_count(), 0);

        let sample = fixtures::career_history();
        let doc = validate_document(&sample).unwrap();
        assert_eq!(doc.document_type(), DocumentType::CareerHistory);
        assert_eq!(doc.raw(), &sample);
    }

    #[test]
    fn test_inspect_reports_failure_kind() {
        let err = inspect_document(&json!({"document_type": "履歴書"})).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnrecognizedType { found: Some(ref tag) } if tag == "履歴書"
        ));

        let err = inspect_document(&json!({"document_type": "キャリアプラン"})).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MissingSections(DocumentType::CareerPlan)
        ));

        let err = inspect_document(&json!(null)).unwrap_err();
        assert!(matches!(err, ConvertError::UnrecognizedType { found: None }));
    }
}
