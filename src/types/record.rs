// src/types/record.rs
//! Flat, store-ready records.
//!
//! Records stay typed in memory; the localized column names only appear when
//! a record is flattened with [`Record::to_fields`]. Those names are the
//! contract with the table store and must not change.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::document::DocumentType;

/// Ordered column name -> value mapping sent to the table store.
pub type FieldMap = Map<String, Value>;

pub const RAW_JSON_FIELD: &str = "元データJSON";
pub const COMPANY_COUNT_FIELD: &str = "会社数";
pub const OTHER_COMPANIES_FIELD: &str = "職務経歴_その他";

/// Field stems of one per-company group, in column order.
pub const COMPANY_FIELD_STEMS: [&str; 12] = [
    "会社名",
    "期間",
    "雇用形態",
    "事業内容",
    "資本金",
    "売上高",
    "従業員数",
    "上場区分",
    "部署",
    "業務内容",
    "主な実績",
    "主な取り組み",
];

/// Column that receives the desired start date of a recommendation. Newer
/// tables name it `転職時期`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartDateField {
    #[default]
    #[serde(rename = "入社希望時期")]
    DesiredStart,
    #[serde(rename = "転職時期")]
    JobChangeTiming,
}

impl StartDateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            StartDateField::DesiredStart => "入社希望時期",
            StartDateField::JobChangeTiming => "転職時期",
        }
    }

    /// Accepts the column name itself or `desired_start`/`job_change_timing`.
    pub fn from_setting(value: &str) -> Option<Self> {
        match value.trim() {
            "入社希望時期" | "desired_start" => Some(StartDateField::DesiredStart),
            "転職時期" | "job_change_timing" => Some(StartDateField::JobChangeTiming),
            _ => None,
        }
    }
}

/// `会社名` + 1 -> `会社名_会社1`
pub fn company_field_name(stem: &str, index: usize) -> String {
    format!("{}_会社{}", stem, index)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyFields {
    pub company_name: String,
    pub period: String,
    pub employment_type: String,
    pub business: String,
    pub capital: String,
    pub revenue: String,
    pub employees: String,
    pub listing: String,
    pub department: String,
    pub duties: String,
    pub achievements: String,
    pub initiatives: String,
}

impl CompanyFields {
    /// Values in the same order as [`COMPANY_FIELD_STEMS`].
    pub fn values(&self) -> [&str; 12] {
        [
            &self.company_name,
            &self.period,
            &self.employment_type,
            &self.business,
            &self.capital,
            &self.revenue,
            &self.employees,
            &self.listing,
            &self.department,
            &self.duties,
            &self.achievements,
            &self.initiatives,
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.values().iter().all(|v| v.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerHistoryRecord {
    pub candidate_name: String,
    pub last_updated: String,
    pub summary: String,
    /// 1-based company index -> field group.
    pub companies: BTreeMap<usize, CompanyFields>,
    /// Spillover text; only present when the inline company count is capped.
    pub other_companies: Option<String>,
    pub company_count: usize,
    pub skills: String,
    pub self_pr: String,
    pub raw_json: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationRecord {
    pub candidate_name: String,
    pub creation_date: String,
    pub overview: String,
    pub reason_for_change: String,
    pub recommendation_reasons: String,
    pub aspiration_and_potential: String,
    pub overall_assessment: String,
    pub summary: String,
    pub desired_salary: String,
    pub desired_start: String,
    pub start_date_field: StartDateField,
    pub desired_location: String,
    pub desired_holidays: String,
    pub desired_work_style: String,
    pub desired_position: String,
    pub other_conditions: String,
    pub recommender: String,
    pub raw_json: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerPlanRecord {
    pub candidate_name: String,
    pub creation_date: String,
    pub introduction: String,
    pub career_vision: String,
    pub short_term: String,
    pub mid_term: String,
    pub long_term: String,
    pub potential: String,
    pub summary: String,
    pub roadmap: String,
    pub author: String,
    pub raw_json: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    CareerHistory(CareerHistoryRecord),
    Recommendation(RecommendationRecord),
    CareerPlan(CareerPlanRecord),
}

fn put(fields: &mut FieldMap, key: &str, value: &str) {
    fields.insert(key.to_string(), Value::String(value.to_string()));
}

impl Record {
    pub fn document_type(&self) -> DocumentType {
        match self {
            Record::CareerHistory(_) => DocumentType::CareerHistory,
            Record::Recommendation(_) => DocumentType::Recommendation,
            Record::CareerPlan(_) => DocumentType::CareerPlan,
        }
    }

    pub fn candidate_name(&self) -> &str {
        match self {
            Record::CareerHistory(r) => &r.candidate_name,
            Record::Recommendation(r) => &r.candidate_name,
            Record::CareerPlan(r) => &r.candidate_name,
        }
    }

    pub fn raw_json(&self) -> &str {
        match self {
            Record::CareerHistory(r) => &r.raw_json,
            Record::Recommendation(r) => &r.raw_json,
            Record::CareerPlan(r) => &r.raw_json,
        }
    }

    /// Flattens the record into its wire shape.
    pub fn to_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        match self {
            Record::CareerHistory(r) => {
                put(&mut fields, "候補者名", &r.candidate_name);
                put(&mut fields, "最終更新日", &r.last_updated);
                put(&mut fields, "職務要約", &r.summary);
                for (index, company) in &r.companies {
                    for (stem, value) in COMPANY_FIELD_STEMS.iter().zip(company.values()) {
                        put(&mut fields, &company_field_name(stem, *index), value);
                    }
                }
                if let Some(other) = &r.other_companies {
                    put(&mut fields, OTHER_COMPANIES_FIELD, other);
                }
                fields.insert(COMPANY_COUNT_FIELD.to_string(), Value::from(r.company_count));
                put(&mut fields, "活かせる経験・知識・技術", &r.skills);
                put(&mut fields, "自己PR", &r.self_pr);
                put(&mut fields, RAW_JSON_FIELD, &r.raw_json);
            }
            Record::Recommendation(r) => {
                put(&mut fields, "候補者名", &r.candidate_name);
                put(&mut fields, "作成日", &r.creation_date);
                put(&mut fields, "候補者概要", &r.overview);
                put(&mut fields, "転職理由", &r.reason_for_change);
                put(&mut fields, "推薦理由", &r.recommendation_reasons);
                put(&mut fields, "志向性と将来性", &r.aspiration_and_potential);
                put(&mut fields, "総評", &r.overall_assessment);
                put(&mut fields, "まとめ", &r.summary);
                put(&mut fields, "希望年収", &r.desired_salary);
                put(&mut fields, r.start_date_field.as_str(), &r.desired_start);
                put(&mut fields, "希望勤務地", &r.desired_location);
                put(&mut fields, "希望休日", &r.desired_holidays);
                put(&mut fields, "希望働き方", &r.desired_work_style);
                put(&mut fields, "希望職種", &r.desired_position);
                put(&mut fields, "その他条件", &r.other_conditions);
                put(&mut fields, "推薦者", &r.recommender);
                put(&mut fields, RAW_JSON_FIELD, &r.raw_json);
            }
            Record::CareerPlan(r) => {
                put(&mut fields, "候補者名", &r.candidate_name);
                put(&mut fields, "作成日", &r.creation_date);
                put(&mut fields, "はじめに", &r.introduction);
                put(&mut fields, "キャリアビジョン", &r.career_vision);
                put(&mut fields, "短期計画", &r.short_term);
                put(&mut fields, "中期計画", &r.mid_term);
                put(&mut fields, "長期計画", &r.long_term);
                put(&mut fields, "ポテンシャル", &r.potential);
                put(&mut fields, "まとめ", &r.summary);
                put(&mut fields, "キャリアロードマップ", &r.roadmap);
                put(&mut fields, "作成者", &r.author);
                put(&mut fields, RAW_JSON_FIELD, &r.raw_json);
            }
        }
        fields
    }

    pub fn field_count(&self) -> usize {
        self.to_fields().len()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_fields().serialize(serializer)
    }
}
