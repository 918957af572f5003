// src/types/content.rs
//! Section payload shapes shared by the three document types.
//!
//! Every struct is tolerant: missing fields fall back to their defaults and
//! scalar values that arrive as numbers or booleans are read as text, since
//! the documents are generated by a model and rarely match a schema exactly.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Reads any scalar as a string. `null`, arrays and objects become empty.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(&Value::deserialize(deserializer)?).unwrap_or_default())
}

pub(crate) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(&Value::deserialize(deserializer)?))
}

/// Reads a list of scalars, skipping anything that is not one.
pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_array()
        .map(|items| items.iter().filter_map(scalar_to_string).collect())
        .unwrap_or_default())
}

/// Reads a list element by element. Elements of the wrong shape are skipped
/// so one bad entry does not cost the rest of the list.
pub(crate) fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(lenient_items(&items)),
        Value::Null => Ok(Vec::new()),
        other => {
            warn!("Expected a list, ignoring {}", other);
            Ok(Vec::new())
        }
    }
}

pub(crate) fn lenient_items<T>(items: &[Value]) -> Vec<T>
where
    T: DeserializeOwned,
{
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match T::deserialize(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!("Skipping malformed list entry {}: {}", index, e);
                None
            }
        })
        .collect()
}

/// Reads an optional block, treating one of the wrong shape as absent.
pub(crate) fn lenient_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => match T::deserialize(&value) {
            Ok(decoded) => Ok(Some(decoded)),
            Err(e) => {
                warn!("Ignoring malformed block: {}", e);
                Ok(None)
            }
        },
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// ===== Generic building blocks =====

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextContent {
    #[serde(deserialize_with = "text")]
    pub text: String,
    #[serde(deserialize_with = "lenient_opt")]
    pub max_length: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListItem {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub content: String,
    #[serde(deserialize_with = "opt_text")]
    pub metrics: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListGroup {
    #[serde(deserialize_with = "lenient_vec")]
    pub list_items: Vec<ListItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeadedText {
    #[serde(deserialize_with = "text")]
    pub heading: String,
    #[serde(deserialize_with = "text")]
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeadedList {
    #[serde(deserialize_with = "text")]
    pub heading: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub list_items: Vec<ListItem>,
}

/// A cell of a label/value table (conditions, roadmap).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableCell {
    #[serde(deserialize_with = "text")]
    pub content: String,
    #[serde(rename = "type", deserialize_with = "text")]
    pub kind: String,
}

// ===== Career history =====

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PrPoint {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub heading: String,
    #[serde(deserialize_with = "text")]
    pub heading_level: String,
    #[serde(deserialize_with = "text")]
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelfPrContent {
    #[serde(deserialize_with = "lenient_vec")]
    pub pr_points: Vec<PrPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompanyEntry {
    #[serde(deserialize_with = "text")]
    pub company_id: String,
    pub table: CompanyTable,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompanyTable {
    #[serde(deserialize_with = "text")]
    pub format: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub rows: Vec<CompanyRow>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompanyRow {
    #[serde(deserialize_with = "text")]
    pub row_type: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub cells: Vec<CompanyCell>,
}

/// Cells are tagged by `type`; the content shape depends on the tag and is
/// resolved lazily through [`CompanyCell::payload`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompanyCell {
    #[serde(rename = "type", deserialize_with = "text")]
    pub kind: String,
    pub content: Value,
    #[serde(deserialize_with = "text")]
    pub width: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellPayload {
    Period(String),
    CompanyInfo(CompanyInfo),
    /// A details cell may describe a department, list topics, or both.
    Details {
        department: Option<DepartmentDetails>,
        topics: Option<TopicsContent>,
    },
    Other,
}

impl CompanyCell {
    pub fn payload(&self) -> CellPayload {
        match (self.kind.as_str(), &self.content) {
            ("period", Value::String(period)) => CellPayload::Period(period.clone()),
            ("company_info", content @ Value::Object(_)) => CompanyInfo::deserialize(content)
                .map(CellPayload::CompanyInfo)
                .unwrap_or(CellPayload::Other),
            ("details", content @ Value::Object(map)) => {
                let department = DepartmentDetails::deserialize(content)
                    .ok()
                    .filter(|details| !details.department.is_empty());
                let topics = map
                    .get("topics")
                    .filter(|topics| topics.is_array())
                    .and_then(|_| TopicsContent::deserialize(content).ok());
                CellPayload::Details { department, topics }
            }
            _ => CellPayload::Other,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompanyInfo {
    #[serde(deserialize_with = "text")]
    pub company_name: String,
    #[serde(deserialize_with = "text")]
    pub employment_type: String,
    #[serde(deserialize_with = "lenient_opt")]
    pub company_details: Option<CompanyDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompanyDetails {
    #[serde(deserialize_with = "text")]
    pub business: String,
    #[serde(deserialize_with = "text")]
    pub capital: String,
    #[serde(deserialize_with = "text")]
    pub revenue: String,
    #[serde(deserialize_with = "text")]
    pub employees: String,
    #[serde(deserialize_with = "text")]
    pub listing: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DepartmentDetails {
    #[serde(deserialize_with = "text")]
    pub department: String,
    #[serde(rename = "業務内容", deserialize_with = "lenient_opt")]
    pub duties: Option<ListGroup>,
    #[serde(rename = "主な実績", deserialize_with = "lenient_opt")]
    pub achievements: Option<ListGroup>,
    #[serde(rename = "主な取り組み", deserialize_with = "lenient_opt")]
    pub initiatives: Option<ListGroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TopicsContent {
    #[serde(deserialize_with = "opt_text")]
    pub heading: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub topics: Vec<TopicItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TopicItem {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
}

// ===== Recommendation =====

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReasonsContent {
    #[serde(deserialize_with = "text")]
    pub introduction: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub reasons: Vec<RecommendationReason>,
    #[serde(deserialize_with = "lenient_opt")]
    pub aspiration_and_potential: Option<HeadedText>,
    #[serde(deserialize_with = "lenient_opt")]
    pub overall_assessment: Option<HeadedText>,
}

/// Older generators wrote the reason body under `content`, newer ones under
/// `description`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecommendationReason {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub heading: String,
    #[serde(deserialize_with = "text")]
    pub content: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
}

impl RecommendationReason {
    pub fn body(&self) -> &str {
        if self.description.is_empty() {
            &self.content
        } else {
            &self.description
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConditionsContent {
    pub table: ConditionTable,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConditionTable {
    #[serde(deserialize_with = "lenient_vec")]
    pub rows: Vec<ConditionRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ConditionRow {
    /// `{"cells": [{"content": "希望年収", "type": "label"}, {"content": "…", "type": "value"}]}`
    Cells {
        #[serde(deserialize_with = "lenient_vec")]
        cells: Vec<TableCell>,
    },
    /// `{"item": "希望年収", "detail": "…"}`
    Pair {
        #[serde(default, deserialize_with = "text")]
        item: String,
        #[serde(default, deserialize_with = "text")]
        detail: String,
    },
}

impl ConditionRow {
    pub fn label_and_value(&self) -> Option<(&str, &str)> {
        match self {
            ConditionRow::Pair { item, detail } => Some((item.as_str(), detail.as_str())),
            ConditionRow::Cells { cells } => {
                let label = cells.iter().find(|c| c.kind == "label")?;
                let value = cells.iter().find(|c| c.kind == "value")?;
                Some((label.content.as_str(), value.content.as_str()))
            }
        }
    }
}

// ===== Career plan =====

/// Plan sections come in two generations: a goal list framed by an
/// introduction and a conclusion, or a single phase with headed blocks.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum PlanContent {
    Goals(GoalPlan),
    Phase(PhasePlan),
}

impl Default for PlanContent {
    fn default() -> Self {
        PlanContent::Goals(GoalPlan::default())
    }
}

impl<'de> Deserialize<'de> for PlanContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let plan = if value.get("goals").is_some() {
            GoalPlan::deserialize(&value).map(PlanContent::Goals)
        } else {
            PhasePlan::deserialize(&value).map(PlanContent::Phase)
        };
        plan.map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GoalPlan {
    #[serde(deserialize_with = "text")]
    pub introduction: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub goals: Vec<PlanGoal>,
    #[serde(deserialize_with = "text")]
    pub conclusion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanGoal {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub heading: String,
    #[serde(deserialize_with = "text")]
    pub content: String,
    #[serde(deserialize_with = "text_list")]
    pub targets: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub initiatives: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub roles: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub activities: Vec<String>,
    #[serde(deserialize_with = "text")]
    pub conclusion: String,
}

impl PlanGoal {
    /// All bulleted sub-lists in display order.
    pub fn items(&self) -> impl Iterator<Item = &String> {
        self.targets
            .iter()
            .chain(&self.initiatives)
            .chain(&self.skills)
            .chain(&self.roles)
            .chain(&self.activities)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhasePlan {
    #[serde(deserialize_with = "text")]
    pub phase: String,
    #[serde(deserialize_with = "text")]
    pub goal: String,
    #[serde(deserialize_with = "lenient_opt")]
    pub recommended_positions: Option<HeadedList>,
    #[serde(deserialize_with = "lenient_opt")]
    pub target_income: Option<HeadedText>,
    #[serde(deserialize_with = "lenient_opt")]
    pub skills_to_acquire: Option<HeadedList>,
    #[serde(deserialize_with = "lenient_opt")]
    pub career_strategy: Option<HeadedText>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PotentialContent {
    #[serde(deserialize_with = "text")]
    pub introduction: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub potentials: Vec<HeadedText>,
    #[serde(deserialize_with = "lenient_opt")]
    pub summary: Option<HeadedText>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConclusionContent {
    #[serde(deserialize_with = "text")]
    pub text: String,
    #[serde(deserialize_with = "text")]
    pub final_message: String,
    #[serde(deserialize_with = "lenient_opt")]
    pub roadmap: Option<Roadmap>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Roadmap {
    #[serde(deserialize_with = "text")]
    pub heading: String,
    pub table: RoadmapTable,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoadmapTable {
    #[serde(deserialize_with = "lenient_vec")]
    pub rows: Vec<RoadmapRow>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoadmapRow {
    #[serde(deserialize_with = "lenient_vec")]
    pub cells: Vec<TableCell>,
}
