// File: ./src/engine.rs
//! Orchestrates extraction: section by section, line by line.

use crate::model::item::{Category, LineOutcome, Person, TaskRecord};
use crate::model::{parser, section};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One recognized section heading and how its lines are classified.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SectionRule {
    /// Label inside the heading brackets, e.g. "ToDo".
    pub heading: String,
    /// Bracketed tag prefixed to generated titles, e.g. "持ち物".
    pub tag: String,
    pub category: Category,
}

impl SectionRule {
    pub fn new(heading: &str, tag: &str, category: Category) -> Self {
        Self {
            heading: heading.to_string(),
            tag: tag.to_string(),
            category,
        }
    }

    /// The stock rule set: a to-do list and an items-to-bring list.
    pub fn defaults() -> Vec<SectionRule> {
        vec![
            SectionRule::new("ToDo", "ToDo", Category::Todo),
            SectionRule::new("持ち物", "持ち物", Category::Item),
        ]
    }
}

/// Extracts task records from a summary, in rule order then line order.
///
/// An absent section contributes zero records. Skipped lines are reported
/// on the diagnostic side channel (debug log) with their reason. The call
/// is stateless, holds no I/O, and never fails: callers always get a
/// sequence, possibly empty.
pub fn extract_tasks(
    summary: &str,
    people: &[Person],
    rules: &[SectionRule],
    reference: NaiveDate,
) -> Vec<TaskRecord> {
    let mut records = Vec::new();
    for rule in rules {
        let Some(body) = section::section_body(summary, &rule.heading) else {
            log::debug!("No 【{}】 section in summary", rule.heading);
            continue;
        };
        for line in section::section_lines(&body) {
            match parser::parse_line(line, people, rule, reference) {
                LineOutcome::Task(record) => records.push(record),
                LineOutcome::Skipped(reason) => {
                    log::debug!("Skipped line in 【{}】 ({}): {}", rule.heading, reason, line);
                }
            }
        }
    }
    records
}

/// Convenience wrapper resolving the reference date from the local clock.
/// Bare month/day expressions always land in the current year, so a
/// newsletter read near a year boundary that means a date in the following
/// year resolves wrongly. Pass an explicit reference to
/// [`extract_tasks`] when that matters.
pub fn extract_tasks_today(
    summary: &str,
    people: &[Person],
    rules: &[SectionRule],
) -> Vec<TaskRecord> {
    extract_tasks(summary, people, rules, Local::now().date_naive())
}
