// src/extract/recommendation.rs
use super::first;
use crate::types::content::{ConditionRow, ReasonsContent, TextContent};
use crate::types::document::RecommendationDocument;
use crate::types::RecommendationSection;

/// Row labels accepted for each desired-condition field.
pub const SALARY_LABELS: &[&str] = &["希望年収"];
pub const START_LABELS: &[&str] = &["入社希望時期", "転職時期"];
pub const LOCATION_LABELS: &[&str] = &["勤務地", "希望勤務地"];
pub const HOLIDAY_LABELS: &[&str] = &["休日", "希望休日"];
pub const WORK_STYLE_LABELS: &[&str] = &["働き方", "希望働き方"];
pub const POSITION_LABELS: &[&str] = &["職種", "希望職種"];
pub const OTHER_LABELS: &[&str] = &["その他", "その他条件"];

pub fn candidate_overview(doc: &RecommendationDocument) -> Option<&TextContent> {
    first(&doc.sections, |body| match body {
        RecommendationSection::CandidateOverview(content) => Some(content),
        _ => None,
    })
}

pub fn reason_for_change(doc: &RecommendationDocument) -> Option<&TextContent> {
    first(&doc.sections, |body| match body {
        RecommendationSection::ReasonForChange(content) => Some(content),
        _ => None,
    })
}

pub fn recommendation_reasons(doc: &RecommendationDocument) -> Option<&ReasonsContent> {
    first(&doc.sections, |body| match body {
        RecommendationSection::RecommendationReason(content) => Some(content),
        _ => None,
    })
}

pub fn summary(doc: &RecommendationDocument) -> Option<&TextContent> {
    first(&doc.sections, |body| match body {
        RecommendationSection::Summary(content) => Some(content),
        _ => None,
    })
}

pub fn condition_rows(doc: &RecommendationDocument) -> Option<&[ConditionRow]> {
    first(&doc.sections, |body| match body {
        RecommendationSection::Conditions(content) => Some(content.table.rows.as_slice()),
        _ => None,
    })
}

/// Value of the first row whose label is one of `labels`.
pub fn condition_value<'a>(rows: &'a [ConditionRow], labels: &[&str]) -> Option<&'a str> {
    rows.iter()
        .filter_map(ConditionRow::label_and_value)
        .find(|(label, _)| labels.contains(&label.trim()))
        .map(|(_, value)| value)
}
