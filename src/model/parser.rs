// File: src/model/parser.rs
use crate::engine::SectionRule;
use crate::model::item::{ALL_MEMBERS, LineOutcome, Person, SkipReason, TaskRecord};
use crate::model::{dates, matcher};
use chrono::NaiveDate;

/// Characters that only decorate a line: list bullets.
const BULLET_CHARS: &[char] = &['-', '・'];

/// Longest title body kept verbatim.
pub const TITLE_MAX_CHARS: usize = 50;
/// Chars kept when clipping, leaving room for the ellipsis.
const TITLE_CLIP_CHARS: usize = 47;
const ELLIPSIS: &str = "...";

/// Converts one raw section line into a task record.
///
/// Blank and decoration-only lines are skipped with a reason rather than
/// silently dropped, so the engine can report them. Every sub-parser here
/// is a total function; nothing a single malformed line contains can abort
/// its siblings.
pub fn parse_line(
    line: &str,
    people: &[Person],
    rule: &SectionRule,
    reference: NaiveDate,
) -> LineOutcome {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineOutcome::Skipped(SkipReason::Blank);
    }
    if is_decorative(trimmed) {
        return LineOutcome::Skipped(SkipReason::DecorativeOnly);
    }

    let person = matcher::match_person(trimmed, people);
    let due_date = dates::parse_due_date(trimmed, reference);
    let title = build_title(trimmed, &rule.tag, person.map(|p| p.name.as_str()));

    LineOutcome::Task(TaskRecord {
        title,
        notes: trimmed.to_string(),
        target_person: person
            .map(|p| p.name.clone())
            .unwrap_or_else(|| ALL_MEMBERS.to_string()),
        due_date,
        category: rule.category,
    })
}

/// True when the line is only bullets and whitespace.
fn is_decorative(trimmed: &str) -> bool {
    trimmed
        .chars()
        .all(|c| c.is_whitespace() || BULLET_CHARS.contains(&c))
}

/// Strips leading bullet markers and surrounding whitespace.
fn strip_bullets(line: &str) -> &str {
    line.trim_start_matches(|c: char| c.is_whitespace() || BULLET_CHARS.contains(&c))
        .trim_end()
}

/// `[tag][person] body`, person tag omitted when nobody matched.
fn build_title(line: &str, tag: &str, person: Option<&str>) -> String {
    let body = clip_title_body(strip_bullets(line));
    match person {
        Some(name) => format!("[{tag}][{name}] {body}"),
        None => format!("[{tag}] {body}"),
    }
}

/// Clips the body to at most [`TITLE_MAX_CHARS`] characters, replacing the
/// tail with an ellipsis when over. Counts chars, not bytes, so kana and
/// kanji clip cleanly.
fn clip_title_body(body: &str) -> String {
    if body.chars().count() <= TITLE_MAX_CHARS {
        return body.to_string();
    }
    let clipped: String = body.chars().take(TITLE_CLIP_CHARS).collect();
    format!("{clipped}{ELLIPSIS}")
}
