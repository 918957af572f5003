// src/types/document.rs
//! Candidate documents: the three supported document types and their
//! decoded form.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::content::text;
use super::section::{CareerHistorySection, CareerPlanSection, RecommendationSection, Section};
use crate::error::ConvertError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "職務経歴書")]
    CareerHistory,
    #[serde(rename = "推薦文")]
    Recommendation,
    #[serde(rename = "キャリアプラン")]
    CareerPlan,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [
        DocumentType::CareerHistory,
        DocumentType::Recommendation,
        DocumentType::CareerPlan,
    ];

    /// The literal `document_type` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::CareerHistory => "職務経歴書",
            DocumentType::Recommendation => "推薦文",
            DocumentType::CareerPlan => "キャリアプラン",
        }
    }

    /// Exact tag match; no trimming or case folding.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| ConvertError::UnknownDocumentType(s.to_string()))
    }
}

/// Career histories carry `{value, format}`; the other types a plain string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CandidateName {
    Plain(String),
    Formatted {
        #[serde(default, deserialize_with = "text")]
        value: String,
        #[serde(default, deserialize_with = "text")]
        format: String,
    },
}

impl Default for CandidateName {
    fn default() -> Self {
        CandidateName::Plain(String::new())
    }
}

impl CandidateName {
    pub fn value(&self) -> &str {
        match self {
            CandidateName::Plain(name) => name,
            CandidateName::Formatted { value, .. } => value,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CareerHistoryFooter {
    #[serde(deserialize_with = "text")]
    pub text: String,
    #[serde(deserialize_with = "text")]
    pub alignment: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecommendationFooter {
    #[serde(deserialize_with = "text")]
    pub recommender: String,
    #[serde(deserialize_with = "text")]
    pub creation_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CareerPlanFooter {
    #[serde(deserialize_with = "text")]
    pub author: String,
    #[serde(deserialize_with = "text")]
    pub creation_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CareerHistoryDocument {
    pub candidate_name: CandidateName,
    pub last_updated: String,
    pub sections: Vec<Section<CareerHistorySection>>,
    pub footer: CareerHistoryFooter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationDocument {
    pub candidate_name: String,
    pub creation_date: String,
    pub sections: Vec<Section<RecommendationSection>>,
    pub footer: RecommendationFooter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CareerPlanDocument {
    pub candidate_name: String,
    pub creation_date: String,
    pub sections: Vec<Section<CareerPlanSection>>,
    pub footer: CareerPlanFooter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentBody {
    CareerHistory(CareerHistoryDocument),
    Recommendation(RecommendationDocument),
    CareerPlan(CareerPlanDocument),
}

/// A document that passed type detection and structural validation.
///
/// Holds the input verbatim next to its decoded form so the raw JSON can be
/// written back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateDocument {
    raw: Value,
    body: DocumentBody,
}

/// Reads a top-level field, falling back to the default on absence or
/// mismatch.
fn field<T>(value: &Value, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    value
        .get(key)
        .and_then(|v| T::deserialize(v).ok())
        .unwrap_or_default()
}

fn text_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

impl CandidateDocument {
    pub(crate) fn decode(document_type: DocumentType, value: &Value, sections: &[Value]) -> Self {
        let body = match document_type {
            DocumentType::CareerHistory => DocumentBody::CareerHistory(CareerHistoryDocument {
                candidate_name: field(value, "candidate_name"),
                last_updated: text_field(value, "last_updated"),
                sections: sections
                    .iter()
                    .map(|s| Section::decode(s, CareerHistorySection::decode))
                    .collect(),
                footer: field(value, "footer"),
            }),
            DocumentType::Recommendation => DocumentBody::Recommendation(RecommendationDocument {
                candidate_name: field::<CandidateName>(value, "candidate_name")
                    .value()
                    .to_string(),
                creation_date: text_field(value, "creation_date"),
                sections: sections
                    .iter()
                    .map(|s| Section::decode(s, RecommendationSection::decode))
                    .collect(),
                footer: field(value, "footer"),
            }),
            DocumentType::CareerPlan => DocumentBody::CareerPlan(CareerPlanDocument {
                candidate_name: field::<CandidateName>(value, "candidate_name")
                    .value()
                    .to_string(),
                creation_date: text_field(value, "creation_date"),
                sections: sections
                    .iter()
                    .map(|s| Section::decode(s, CareerPlanSection::decode))
                    .collect(),
                footer: field(value, "footer"),
            }),
        };

        Self {
            raw: value.clone(),
            body,
        }
    }

    pub fn document_type(&self) -> DocumentType {
        match &self.body {
            DocumentBody::CareerHistory(_) => DocumentType::CareerHistory,
            DocumentBody::Recommendation(_) => DocumentType::Recommendation,
            DocumentBody::CareerPlan(_) => DocumentType::CareerPlan,
        }
    }

    pub fn body(&self) -> &DocumentBody {
        &self.body
    }

    /// The input exactly as it was validated.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn candidate_name(&self) -> &str {
        match &self.body {
            DocumentBody::CareerHistory(doc) => doc.candidate_name.value(),
            DocumentBody::Recommendation(doc) => &doc.candidate_name,
            DocumentBody::CareerPlan(doc) => &doc.candidate_name,
        }
    }

    pub fn section_count(&self) -> usize {
        match &self.body {
            DocumentBody::CareerHistory(doc) => doc.sections.len(),
            DocumentBody::Recommendation(doc) => doc.sections.len(),
            DocumentBody::CareerPlan(doc) => doc.sections.len(),
        }
    }
}
