// src/extract/career_plan.rs
use super::first;
use crate::types::content::{ConclusionContent, PlanContent, PotentialContent, TextContent};
use crate::types::document::CareerPlanDocument;
use crate::types::{CareerPlanSection, PlanTerm};

pub fn introduction(doc: &CareerPlanDocument) -> Option<&TextContent> {
    first(&doc.sections, |body| match body {
        CareerPlanSection::Introduction(content) => Some(content),
        _ => None,
    })
}

pub fn career_vision(doc: &CareerPlanDocument) -> Option<&TextContent> {
    first(&doc.sections, |body| match body {
        CareerPlanSection::CareerVision(content) => Some(content),
        _ => None,
    })
}

pub fn plan(doc: &CareerPlanDocument, term: PlanTerm) -> Option<&PlanContent> {
    first(&doc.sections, |body| match body {
        CareerPlanSection::Plan(t, content) if *t == term => Some(content),
        _ => None,
    })
}

pub fn potential(doc: &CareerPlanDocument) -> Option<&PotentialContent> {
    first(&doc.sections, |body| match body {
        CareerPlanSection::Potential(content) => Some(content),
        _ => None,
    })
}

pub fn conclusion(doc: &CareerPlanDocument) -> Option<&ConclusionContent> {
    first(&doc.sections, |body| match body {
        CareerPlanSection::Conclusion(content) => Some(content),
        _ => None,
    })
}
