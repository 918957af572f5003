// src/extract/career_history.rs
use super::first;
use crate::format;
use crate::types::content::{
    CellPayload, CompanyEntry, CompanyInfo, DepartmentDetails, ListGroup, ListItem, SelfPrContent,
    TextContent, TopicItem,
};
use crate::types::document::CareerHistoryDocument;
use crate::types::{CareerHistorySection, CompanyFields};

const EMPLOYMENT_SUFFIX: &str = "として勤務";

pub fn summary(doc: &CareerHistoryDocument) -> Option<&TextContent> {
    first(&doc.sections, |body| match body {
        CareerHistorySection::Summary(content) => Some(content),
        _ => None,
    })
}

pub fn companies(doc: &CareerHistoryDocument) -> Option<&[CompanyEntry]> {
    first(&doc.sections, |body| match body {
        CareerHistorySection::WorkHistory(companies) => Some(companies.as_slice()),
        _ => None,
    })
}

pub fn skills(doc: &CareerHistoryDocument) -> Option<&ListGroup> {
    first(&doc.sections, |body| match body {
        CareerHistorySection::Skills(content) => Some(content),
        _ => None,
    })
}

pub fn self_pr(doc: &CareerHistoryDocument) -> Option<&SelfPrContent> {
    first(&doc.sections, |body| match body {
        CareerHistorySection::SelfPr(content) => Some(content),
        _ => None,
    })
}

/// Collects one company's fields from every cell of its table, keyed by the
/// cell's `type` rather than its row position.
///
/// The first non-empty period is kept. Company info and department cells
/// overwrite earlier ones. Topics from any details cell are appended to the
/// achievements.
pub fn extract_company(entry: &CompanyEntry) -> CompanyFields {
    let mut fields = CompanyFields::default();
    let mut topics: Vec<TopicItem> = Vec::new();

    for cell in entry.table.rows.iter().flat_map(|row| &row.cells) {
        match cell.payload() {
            CellPayload::Period(period) => {
                if fields.period.is_empty() {
                    fields.period = period;
                }
            }
            CellPayload::CompanyInfo(info) => apply_company_info(&mut fields, &info),
            CellPayload::Details {
                department,
                topics: cell_topics,
            } => {
                if let Some(department) = department {
                    apply_department(&mut fields, &department);
                }
                if let Some(cell_topics) = cell_topics {
                    topics.extend(cell_topics.topics);
                }
            }
            CellPayload::Other => {}
        }
    }

    fields.achievements = format::append_topics(std::mem::take(&mut fields.achievements), &topics);
    fields
}

fn strip_label(value: &str, label: &str) -> String {
    value.replace(label, "").trim().to_string()
}

fn apply_company_info(fields: &mut CompanyFields, info: &CompanyInfo) {
    fields.company_name = info.company_name.clone();
    fields.employment_type = strip_label(&info.employment_type, EMPLOYMENT_SUFFIX);

    if let Some(details) = &info.company_details {
        fields.business = strip_label(&details.business, "事業内容:");
        fields.capital = strip_label(&details.capital, "資本金:");
        fields.revenue = strip_label(&details.revenue, "売上高:");
        fields.employees = strip_label(&details.employees, "従業員数:");
        fields.listing = strip_label(&details.listing, "上場:");
    }
}

fn list_items(group: &Option<ListGroup>) -> &[ListItem] {
    group
        .as_ref()
        .map(|g| g.list_items.as_slice())
        .unwrap_or_default()
}

fn apply_department(fields: &mut CompanyFields, details: &DepartmentDetails) {
    fields.department = details.department.clone();
    fields.duties = format::bullet_list(list_items(&details.duties).iter().map(|i| &i.content));
    fields.achievements =
        format::bullet_list(list_items(&details.achievements).iter().map(format::achievement));
    fields.initiatives =
        format::bullet_list(list_items(&details.initiatives).iter().map(|i| &i.content));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::types::DocumentBody;
    use serde::Deserialize;
    use serde_json::json;

    fn document(value: &serde_json::Value) -> CareerHistoryDocument {
        let doc = crate::detector::validate_document(value).unwrap();
        match doc.body() {
            DocumentBody::CareerHistory(body) => body.clone(),
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_extracts_fixture_company() {
        let doc = document(&fixtures::career_history());
        let companies = companies(&doc).unwrap();
        assert_eq!(companies.len(), 1);

        let fields = extract_company(&companies[0]);
        assert_eq!(fields.company_name, "株式会社テスト");
        assert_eq!(fields.period, "2020年1月〜2024年12月");
        assert_eq!(fields.employment_type, "正社員");
        assert_eq!(fields.business, "IT事業");
        assert_eq!(fields.capital, "1億円");
        assert_eq!(fields.revenue, "100億円");
        assert_eq!(fields.employees, "500人");
        assert_eq!(fields.listing, "東証プライム上場");
        assert_eq!(fields.department, "開発部");
        assert_eq!(fields.duties, "・システム開発\n・コードレビュー");
        assert_eq!(fields.achievements, "・売上向上（前年比20%増）\n・障害件数の削減");
        assert_eq!(fields.initiatives, "・CI/CD導入");
    }

    #[test]
    fn test_first_non_empty_period_wins() {
        let entry = CompanyEntry::deserialize(&json!({
            "company_id": "company_1",
            "table": {"rows": [
                {"cells": [{"type": "period", "content": "2019年4月〜"}]},
                {"cells": [{"type": "period", "content": ""}]},
                {"cells": [{"type": "period", "content": "2030年"}]}
            ]}
        }))
        .unwrap();
        assert_eq!(extract_company(&entry).period, "2019年4月〜");

        let entry = CompanyEntry::deserialize(&json!({
            "table": {"rows": [
                {"cells": [{"type": "period", "content": ""}]},
                {"cells": [{"type": "period", "content": "2021年"}]}
            ]}
        }))
        .unwrap();
        assert_eq!(extract_company(&entry).period, "2021年");
    }

    #[test]
    fn test_department_and_topics_in_one_entry() {
        let entry = CompanyEntry::deserialize(&json!({
            "table": {"rows": [
                {"cells": [{"type": "details", "content": {
                    "department": "営業部",
                    "主な実績": {"list_items": [{"content": "新規開拓", "metrics": 15}]}
                }}]},
                {"cells": [{"type": "details", "content": {
                    "heading": "トピックス",
                    "topics": [{"id": "t1", "title": "社長賞", "description": "2022年度"}]
                }}]}
            ]}
        }))
        .unwrap();

        let fields = extract_company(&entry);
        assert_eq!(fields.department, "営業部");
        assert_eq!(
            fields.achievements,
            "・新規開拓（15）\n\n【トピックス】\n社長賞\n2022年度"
        );
        assert_eq!(fields.duties, "");
    }

    #[test]
    fn test_unknown_cells_are_ignored() {
        let entry = CompanyEntry::deserialize(&json!({
            "table": {"rows": [{"cells": [
                {"type": "note", "content": "備考"},
                {"type": "company_info", "content": "not an object"}
            ]}]}
        }))
        .unwrap();
        assert!(extract_company(&entry).is_empty());
    }

    #[test]
    fn test_missing_sections_yield_none() {
        let doc = document(&json!({"document_type": "職務経歴書", "sections": []}));
        assert!(summary(&doc).is_none());
        assert!(companies(&doc).is_none());
        assert!(skills(&doc).is_none());
        assert!(self_pr(&doc).is_none());
    }

    #[test]
    fn test_first_matching_section_wins() {
        let doc = document(&json!({
            "document_type": "職務経歴書",
            "sections": [
                {"section_id": "summary", "content": {"text": "一つ目"}},
                {"section_id": "summary", "content": {"text": "二つ目"}}
            ]
        }));
        assert_eq!(summary(&doc).unwrap().text, "一つ目");
    }
}
