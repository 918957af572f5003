// src/types/section.rs
//! Per-document section sum types, decoded once from `section_id`.

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use tracing::warn;

use super::content::{
    lenient_items, text, CompanyEntry, ConclusionContent, ConditionsContent, ListGroup, PlanContent,
    PotentialContent, ReasonsContent, SelfPrContent, TextContent,
};

/// A decoded section: its header fields plus a typed body.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<B> {
    pub section_id: String,
    pub heading: String,
    pub heading_level: String,
    pub body: B,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SectionHeader {
    #[serde(deserialize_with = "text")]
    section_id: String,
    #[serde(deserialize_with = "text")]
    heading: String,
    #[serde(deserialize_with = "text")]
    heading_level: String,
}

impl<B> Section<B> {
    pub(crate) fn decode(value: &Value, body: impl FnOnce(&str, &Value) -> B) -> Self {
        let header = SectionHeader::deserialize(value).unwrap_or_default();
        let body = body(&header.section_id, value);
        Self {
            section_id: header.section_id,
            heading: header.heading,
            heading_level: header.heading_level,
            body,
        }
    }
}

/// Decodes a section's `content`. A missing or `null` payload is the default
/// shape; a payload of the wrong shape yields `None` and a warning.
fn payload<T>(section_id: &str, section: &Value, key: &str) -> Option<T>
where
    T: DeserializeOwned + Default,
{
    match section.get(key) {
        None | Some(Value::Null) => Some(T::default()),
        Some(value) => match T::deserialize(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!("Ignoring section '{}': malformed {}: {}", section_id, key, e);
                None
            }
        },
    }
}

/// Company entries are decoded one at a time; only a `companies` value that
/// is not a list rejects the section.
fn companies(section_id: &str, holder: &Value) -> Option<Vec<CompanyEntry>> {
    match holder.get("companies") {
        None | Some(Value::Null) => Some(Vec::new()),
        Some(Value::Array(items)) => Some(lenient_items(items)),
        Some(other) => {
            warn!(
                "Ignoring section '{}': malformed companies: {}",
                section_id, other
            );
            None
        }
    }
}

// ===== Career history =====

#[derive(Debug, Clone, PartialEq)]
pub enum CareerHistorySection {
    Summary(TextContent),
    WorkHistory(Vec<CompanyEntry>),
    Skills(ListGroup),
    SelfPr(SelfPrContent),
    Unknown(String),
}

impl CareerHistorySection {
    pub(crate) fn decode(section_id: &str, section: &Value) -> Self {
        let decoded = match section_id {
            "summary" => payload(section_id, section, "content").map(Self::Summary),
            // companies normally sit beside the heading, not under content
            "work_history" => {
                let holder = match section.get("companies") {
                    Some(_) => section,
                    None => section.get("content").unwrap_or(&Value::Null),
                };
                companies(section_id, holder).map(Self::WorkHistory)
            }
            "skills" => payload(section_id, section, "content").map(Self::Skills),
            "self_pr" => payload(section_id, section, "content").map(Self::SelfPr),
            _ => None,
        };
        decoded.unwrap_or_else(|| Self::Unknown(section_id.to_string()))
    }
}

// ===== Recommendation =====

#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationSection {
    CandidateOverview(TextContent),
    ReasonForChange(TextContent),
    RecommendationReason(ReasonsContent),
    Conditions(ConditionsContent),
    Summary(TextContent),
    Unknown(String),
}

impl RecommendationSection {
    pub(crate) fn decode(section_id: &str, section: &Value) -> Self {
        let decoded = match section_id {
            "candidate_overview" => {
                payload(section_id, section, "content").map(Self::CandidateOverview)
            }
            "reason_for_job_change" | "reason_for_change" => {
                payload(section_id, section, "content").map(Self::ReasonForChange)
            }
            "recommendation_reason" => {
                payload(section_id, section, "content").map(Self::RecommendationReason)
            }
            "conditions" => payload(section_id, section, "content").map(Self::Conditions),
            "summary" => payload(section_id, section, "content").map(Self::Summary),
            _ => None,
        };
        decoded.unwrap_or_else(|| Self::Unknown(section_id.to_string()))
    }
}

// ===== Career plan =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanTerm {
    Short,
    Mid,
    Long,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CareerPlanSection {
    Introduction(TextContent),
    CareerVision(TextContent),
    Plan(PlanTerm, PlanContent),
    Potential(PotentialContent),
    Conclusion(ConclusionContent),
    Unknown(String),
}

impl CareerPlanSection {
    pub(crate) fn decode(section_id: &str, section: &Value) -> Self {
        let plan = |term: PlanTerm| {
            payload(section_id, section, "content").map(|content| Self::Plan(term, content))
        };
        let decoded = match section_id {
            "introduction" => payload(section_id, section, "content").map(Self::Introduction),
            "career_vision" => payload(section_id, section, "content").map(Self::CareerVision),
            "short_term_plan" | "short_term" => plan(PlanTerm::Short),
            "mid_term_plan" | "mid_term" => plan(PlanTerm::Mid),
            "long_term_plan" | "long_term" => plan(PlanTerm::Long),
            "potential" | "hidden_potential" => {
                payload(section_id, section, "content").map(Self::Potential)
            }
            "summary" | "conclusion" => {
                payload(section_id, section, "content").map(Self::Conclusion)
            }
            _ => None,
        };
        decoded.unwrap_or_else(|| Self::Unknown(section_id.to_string()))
    }
}
