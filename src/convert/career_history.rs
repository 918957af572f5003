// src/convert/career_history.rs
use std::collections::BTreeMap;
use tracing::debug;

use super::CompanyLimit;
use crate::extract::career_history as extract;
use crate::format;
use crate::types::document::CareerHistoryDocument;
use crate::types::{CareerHistoryRecord, CompanyFields};

pub fn convert_career_history(
    doc: &CareerHistoryDocument,
    raw_json: String,
    company_limit: CompanyLimit,
) -> CareerHistoryRecord {
    let companies: Vec<CompanyFields> = extract::companies(doc)
        .unwrap_or_default()
        .iter()
        .map(extract::extract_company)
        .collect();
    let company_count = companies.len();
    let (companies, other_companies) = place_companies(companies, company_limit);

    debug!(
        "Career history has {} companies, {} inline ({})",
        company_count,
        companies.len(),
        company_limit
    );

    CareerHistoryRecord {
        candidate_name: doc.candidate_name.value().to_string(),
        last_updated: doc.last_updated.clone(),
        summary: extract::summary(doc)
            .map(|content| content.text.clone())
            .unwrap_or_default(),
        companies,
        other_companies,
        company_count,
        skills: extract::skills(doc)
            .map(|group| format::format_skills(&group.list_items))
            .unwrap_or_default(),
        self_pr: extract::self_pr(doc)
            .map(|content| format::format_self_pr(&content.pr_points))
            .unwrap_or_default(),
        raw_json,
    }
}

/// Assigns 1-based indexes. An inline limit pads to exactly `n` groups and
/// renders the rest as spillover text.
fn place_companies(
    companies: Vec<CompanyFields>,
    limit: CompanyLimit,
) -> (BTreeMap<usize, CompanyFields>, Option<String>) {
    match limit {
        CompanyLimit::Unbounded => (
            companies
                .into_iter()
                .enumerate()
                .map(|(i, company)| (i + 1, company))
                .collect(),
            None,
        ),
        CompanyLimit::Inline(n) => {
            let overflow = companies.get(n..).unwrap_or_default();
            let other = format::format_overflow_companies(overflow);
            let inline = (1..=n)
                .map(|index| {
                    let company = companies.get(index - 1).cloned().unwrap_or_default();
                    (index, company)
                })
                .collect();
            (inline, Some(other))
        }
    }
}
