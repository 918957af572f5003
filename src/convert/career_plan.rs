// src/convert/career_plan.rs
use crate::extract::career_plan as extract;
use crate::format;
use crate::types::document::CareerPlanDocument;
use crate::types::{CareerPlanRecord, PlanTerm};

pub fn convert_career_plan(doc: &CareerPlanDocument, raw_json: String) -> CareerPlanRecord {
    let plan = |term| {
        extract::plan(doc, term)
            .map(format::format_plan)
            .unwrap_or_default()
    };
    let conclusion = extract::conclusion(doc);
    let creation_date = if doc.creation_date.is_empty() {
        doc.footer.creation_date.clone()
    } else {
        doc.creation_date.clone()
    };

    CareerPlanRecord {
        candidate_name: doc.candidate_name.clone(),
        creation_date,
        introduction: extract::introduction(doc)
            .map(|content| content.text.clone())
            .unwrap_or_default(),
        career_vision: extract::career_vision(doc)
            .map(|content| content.text.clone())
            .unwrap_or_default(),
        short_term: plan(PlanTerm::Short),
        mid_term: plan(PlanTerm::Mid),
        long_term: plan(PlanTerm::Long),
        potential: extract::potential(doc)
            .map(format::format_potentials)
            .unwrap_or_default(),
        summary: conclusion.map(format::format_conclusion).unwrap_or_default(),
        roadmap: conclusion
            .map(|c| format::format_roadmap(c.roadmap.as_ref()))
            .unwrap_or_default(),
        author: doc.footer.author.clone(),
        raw_json,
    }
}
