// File: ./src/model/item.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Target assigned when no registered person is named on a line.
pub const ALL_MEMBERS: &str = "all";

/// A person the extractor can assign tasks to. Reference data owned by the
/// caller; the engine never mutates it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    /// Phonetic (kana) spelling. Newsletters sometimes write the kana
    /// reading instead of the registered name.
    #[serde(default)]
    pub phonetic_alias: String,
}

impl Person {
    pub fn new(name: &str, phonetic_alias: &str) -> Self {
        Self {
            name: name.to_string(),
            phonetic_alias: phonetic_alias.to_string(),
        }
    }

    /// True when the person's name or phonetic alias occurs in `text`.
    /// Empty fields never match: an empty needle is a substring of
    /// everything and would shadow every other registrant.
    pub fn appears_in(&self, text: &str) -> bool {
        (!self.name.is_empty() && text.contains(&self.name))
            || (!self.phonetic_alias.is_empty() && text.contains(&self.phonetic_alias))
    }
}

/// Classification derived from the section a line came from.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Todo,
    Item,
    Event,
}

/// One extracted, normalized actionable item.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Display-friendly title: `[tag][person] body`, clipped to 50 chars.
    pub title: String,
    /// The originating line verbatim (trimmed). Nothing is lost for human
    /// review even when the title is clipped.
    pub notes: String,
    /// Matched person's name, or [`ALL_MEMBERS`].
    pub target_person: String,
    /// Fully resolved deadline, when one was recognized. The year comes
    /// from the reference date supplied at extraction time.
    pub due_date: Option<NaiveDate>,
    pub category: Category,
}

/// Per-line parse result. A line either yields a record or is skipped for a
/// stated reason; a bad line never aborts its siblings.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LineOutcome {
    Task(TaskRecord),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum SkipReason {
    /// Nothing left after trimming.
    Blank,
    /// Only bullets and whitespace.
    DecorativeOnly,
}
