// src/format.rs
//! Text rendering for multi-line record fields.
//!
//! Conventions: list items are one per line behind a `・` bullet, headed
//! blocks put the heading on its own line, and independent blocks are
//! separated by a blank line. Every function is total; empty input renders
//! as an empty string.

use crate::types::content::{
    ConclusionContent, GoalPlan, HeadedList, HeadedText, ListItem, PhasePlan, PlanContent,
    PotentialContent, PrPoint, ReasonsContent, Roadmap, TopicItem,
};
use crate::types::CompanyFields;

pub const BULLET: &str = "・";
pub const TOPICS_MARKER: &str = "【トピックス】";

/// `・a\n・b`
pub fn bullet_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("{}{}", BULLET, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Joins the non-empty parts with single newlines.
pub fn join_lines<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_non_empty(parts, "\n")
}

/// Joins the non-empty parts with a blank line between each.
pub fn join_blocks<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_non_empty(blocks, "\n\n")
}

fn join_non_empty<I, S>(parts: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter(|part| !part.as_ref().is_empty())
        .map(|part| part.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// The heading verbatim on its own line, then its bulleted items.
pub fn headed_list<I, S>(heading: &str, items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_lines([heading.to_string(), bullet_list(items)])
}

/// `【heading】\nbody`
pub fn bracket_block(heading: &str, body: &str) -> String {
    let heading = if heading.is_empty() {
        String::new()
    } else {
        format!("【{}】", heading)
    };
    join_lines([heading.as_str(), body])
}

pub fn bracket_text(block: Option<&HeadedText>) -> String {
    block
        .map(|b| bracket_block(&b.heading, &b.content))
        .unwrap_or_default()
}

/// `content（metrics）`, or the bare content without metrics.
pub fn achievement(item: &ListItem) -> String {
    match item.metrics.as_deref() {
        Some(metrics) if !metrics.is_empty() => format!("{}（{}）", item.content, metrics),
        _ => item.content.clone(),
    }
}

pub fn item_contents(items: &[ListItem]) -> impl Iterator<Item = &str> {
    items.iter().map(|item| item.content.as_str())
}

pub fn format_skills(items: &[ListItem]) -> String {
    bullet_list(item_contents(items))
}

pub fn format_self_pr(points: &[PrPoint]) -> String {
    join_blocks(
        points
            .iter()
            .map(|point| join_lines([point.heading.as_str(), point.content.as_str()])),
    )
}

/// Appends topic blocks under the `【トピックス】` marker.
pub fn append_topics(achievements: String, topics: &[TopicItem]) -> String {
    if topics.is_empty() {
        return achievements;
    }
    let topics = join_blocks(
        topics
            .iter()
            .map(|topic| join_lines([topic.title.as_str(), topic.description.as_str()])),
    );
    join_blocks([achievements, format!("{}\n{}", TOPICS_MARKER, topics)])
}

pub fn format_reasons(content: &ReasonsContent) -> String {
    let reasons = content
        .reasons
        .iter()
        .map(|reason| bracket_block(&reason.heading, reason.body()));
    join_blocks(std::iter::once(content.introduction.clone()).chain(reasons))
}

pub fn format_plan(content: &PlanContent) -> String {
    match content {
        PlanContent::Goals(plan) => format_goal_plan(plan),
        PlanContent::Phase(plan) => format_phase_plan(plan),
    }
}

fn format_goal_plan(plan: &GoalPlan) -> String {
    let goals = plan.goals.iter().map(|goal| {
        join_lines([
            goal.heading.clone(),
            goal.content.clone(),
            bullet_list(goal.items()),
            goal.conclusion.clone(),
        ])
    });
    join_blocks(
        std::iter::once(plan.introduction.clone())
            .chain(goals)
            .chain(std::iter::once(plan.conclusion.clone())),
    )
}

fn format_phase_plan(plan: &PhasePlan) -> String {
    let phase = if plan.phase.is_empty() {
        String::new()
    } else {
        format!("【{}】", plan.phase)
    };
    let goal = if plan.goal.is_empty() {
        String::new()
    } else {
        format!("目標: {}", plan.goal)
    };
    let labeled_list = |list: Option<&HeadedList>| {
        list.map(|l| headed_list(&format!("{}:", l.heading), item_contents(&l.list_items)))
            .unwrap_or_default()
    };

    join_blocks([
        join_lines([phase, goal]),
        labeled_list(plan.recommended_positions.as_ref()),
        plan.target_income
            .as_ref()
            .map(|t| format!("{}: {}", t.heading, t.content))
            .unwrap_or_default(),
        labeled_list(plan.skills_to_acquire.as_ref()),
        plan.career_strategy
            .as_ref()
            .map(|s| join_lines([format!("{}:", s.heading), s.content.clone()]))
            .unwrap_or_default(),
    ])
}

pub fn format_potentials(content: &PotentialContent) -> String {
    let potentials = content
        .potentials
        .iter()
        .map(|p| bracket_block(&p.heading, &p.content));
    join_blocks(
        std::iter::once(content.introduction.clone())
            .chain(potentials)
            .chain(std::iter::once(bracket_text(content.summary.as_ref()))),
    )
}

pub fn format_conclusion(content: &ConclusionContent) -> String {
    join_blocks([content.text.as_str(), content.final_message.as_str()])
}

/// `【heading】` when there is one, then one line per row with cells joined by ` | `.
pub fn format_roadmap(roadmap: Option<&Roadmap>) -> String {
    let Some(roadmap) = roadmap else {
        return String::new();
    };
    let rows = roadmap.table.rows.iter().map(|row| {
        row.cells
            .iter()
            .map(|cell| cell.content.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    });
    bracket_block(&roadmap.heading, &join_lines(rows))
}

/// Free-text rendering of companies that did not fit the inline groups.
pub fn format_overflow_companies(companies: &[CompanyFields]) -> String {
    join_blocks(companies.iter().map(|company| {
        let title = match (company.company_name.is_empty(), company.period.is_empty()) {
            (false, false) => format!("【{}】{}", company.company_name, company.period),
            (false, true) => format!("【{}】", company.company_name),
            (true, _) => company.period.clone(),
        };
        let labeled = |label: &str, value: &str| {
            if value.is_empty() {
                String::new()
            } else {
                format!("{}: {}", label, value)
            }
        };
        let labeled_block = |label: &str, value: &str| {
            if value.is_empty() {
                String::new()
            } else {
                format!("{}:\n{}", label, value)
            }
        };
        join_lines([
            title,
            labeled("雇用形態", &company.employment_type),
            labeled("事業内容", &company.business),
            labeled("部署", &company.department),
            labeled_block("業務内容", &company.duties),
            labeled_block("主な実績", &company.achievements),
            labeled_block("主な取り組み", &company.initiatives),
        ])
    }))
}
