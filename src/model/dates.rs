// File: ./src/model/dates.rs
//! Recognizes date expressions inside free text and resolves them against a
//! reference date.
//
// Recognizers form an ordered strategy list; the first one that matches
// wins. New date notations slot in as new entries without touching the
// existing rules.
//
// The source text never carries a year: the reference date supplies it.
// A summary written near a year boundary that refers to a date in the
// following year therefore resolves into the wrong year. Known limitation;
// callers that care must choose the reference date accordingly.

use chrono::{Datelike, NaiveDate};

/// Word that turns a date expression into a deadline ("by"/"until").
const DEADLINE_MARKER: &str = "まで";

type DateRule = fn(&str, NaiveDate) -> Option<NaiveDate>;

/// Priority order: deadline phrasing, numeric M/D, textual M月D日.
const RULES: &[DateRule] = &[deadline_phrase, slash_month_day, kanji_month_day];

/// Scans `text` for a date expression and resolves it to a concrete date in
/// the reference year. `None` is not an error, merely "no deadline found".
pub fn parse_due_date(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    RULES.iter().find_map(|rule| rule(text, reference))
}

/// Rule 1: a textual month/day expression immediately followed by the
/// deadline marker, e.g. "5月10日までに提出". Resolves the inner
/// expression with the textual rule.
fn deadline_phrase(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let mut offset = 0;
    while let Some((_, _, end)) = find_kanji_month_day(&text[offset..]) {
        let end = offset + end;
        if text[end..].starts_with(DEADLINE_MARKER) {
            return kanji_month_day(&text[offset..end], reference);
        }
        offset = end;
    }
    None
}

/// Rule 2: numeric month/day separated by a slash, e.g. "5/15".
fn slash_month_day(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].1.is_ascii_digit() {
            let (month, next) = take_number(&chars, i);
            if next + 1 < chars.len() && chars[next].1 == '/' && chars[next + 1].1.is_ascii_digit()
            {
                let (day, _) = take_number(&chars, next + 1);
                return resolve(month, day, reference);
            }
            i = next;
        } else {
            i += 1;
        }
    }
    None
}

/// Rule 3: localized textual form, e.g. "5月2日".
fn kanji_month_day(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let (month, day, _) = find_kanji_month_day(text)?;
    resolve(month, day, reference)
}

/// Builds the concrete date. Month and day are taken as-is, 1-based and
/// unvalidated; `from_ymd_opt` rejects out-of-range pairs, so an impossible
/// expression deterministically yields no date from this rule.
fn resolve(month: u32, day: u32, reference: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(reference.year(), month, day)
}

/// Finds the first `M月D日` expression, returning month, day, and the byte
/// offset just past the `日`.
fn find_kanji_month_day(text: &str) -> Option<(u32, u32, usize)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].1.is_ascii_digit() {
            let (month, next) = take_number(&chars, i);
            if next + 1 < chars.len() && chars[next].1 == '月' && chars[next + 1].1.is_ascii_digit()
            {
                let (day, after_day) = take_number(&chars, next + 1);
                if after_day < chars.len() && chars[after_day].1 == '日' {
                    let end = chars[after_day].0 + '日'.len_utf8();
                    return Some((month, day, end));
                }
            }
            i = next;
        } else {
            i += 1;
        }
    }
    None
}

/// Reads a run of at most two ASCII digits starting at `start`, returning
/// the value and the index past the run.
fn take_number(chars: &[(usize, char)], start: usize) -> (u32, usize) {
    let mut value = 0u32;
    let mut i = start;
    while i < chars.len() && chars[i].1.is_ascii_digit() && i - start < 2 {
        value = value * 10 + (chars[i].1 as u32 - '0' as u32);
        i += 1;
    }
    (value, i)
}
