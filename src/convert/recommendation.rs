// src/convert/recommendation.rs
use crate::extract::recommendation::{self as extract, condition_value};
use crate::format;
use crate::types::document::RecommendationDocument;
use crate::types::{RecommendationRecord, StartDateField};

pub fn convert_recommendation(
    doc: &RecommendationDocument,
    raw_json: String,
    start_date_field: StartDateField,
) -> RecommendationRecord {
    let reasons = extract::recommendation_reasons(doc);
    let rows = extract::condition_rows(doc).unwrap_or_default();
    let condition = |labels: &[&str]| condition_value(rows, labels).unwrap_or_default().to_string();

    // the header date is authoritative; older footers carried their own
    let creation_date = if doc.creation_date.is_empty() {
        doc.footer.creation_date.clone()
    } else {
        doc.creation_date.clone()
    };

    RecommendationRecord {
        candidate_name: doc.candidate_name.clone(),
        creation_date,
        overview: extract::candidate_overview(doc)
            .map(|content| content.text.clone())
            .unwrap_or_default(),
        reason_for_change: extract::reason_for_change(doc)
            .map(|content| content.text.clone())
            .unwrap_or_default(),
        recommendation_reasons: reasons.map(format::format_reasons).unwrap_or_default(),
        aspiration_and_potential: reasons
            .map(|r| format::bracket_text(r.aspiration_and_potential.as_ref()))
            .unwrap_or_default(),
        overall_assessment: reasons
            .map(|r| format::bracket_text(r.overall_assessment.as_ref()))
            .unwrap_or_default(),
        summary: extract::summary(doc)
            .map(|content| content.text.clone())
            .unwrap_or_default(),
        desired_salary: condition(extract::SALARY_LABELS),
        desired_start: condition(extract::START_LABELS),
        start_date_field,
        desired_location: condition(extract::LOCATION_LABELS),
        desired_holidays: condition(extract::HOLIDAY_LABELS),
        desired_work_style: condition(extract::WORK_STYLE_LABELS),
        desired_position: condition(extract::POSITION_LABELS),
        other_conditions: condition(extract::OTHER_LABELS),
        recommender: doc.footer.recommender.clone(),
        raw_json,
    }
}
