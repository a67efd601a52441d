// File: ./src/model/section.rs
//! Splits a newsletter summary into labeled sections.
//
// A heading is a bracket token at the start of a line: 【ToDo】, 【持ち物】.
// The body runs from that marker to the next heading line (any label) or
// the end of the text. Lookups are stateless and re-entrant: multiple calls
// for different labels operate independently on the same source text.

/// Opening bracket of a section heading.
pub const HEADING_OPEN: char = '【';
/// Closing bracket of a section heading.
pub const HEADING_CLOSE: char = '】';

/// Returns the body of the first section labeled `label`, or `None` when no
/// such heading exists. Text on the heading line after the closing bracket
/// belongs to the body. An empty body is `Some("")`, not an error: it just
/// yields zero lines downstream.
pub fn section_body(summary: &str, label: &str) -> Option<String> {
    let marker = format!("{HEADING_OPEN}{label}{HEADING_CLOSE}");
    let mut found = false;
    let mut body = String::new();

    for line in summary.lines() {
        let trimmed = line.trim_start();
        if found {
            if trimmed.starts_with(HEADING_OPEN) {
                break;
            }
            body.push_str(line);
            body.push('\n');
        } else if let Some(rest) = trimmed.strip_prefix(marker.as_str()) {
            found = true;
            if !rest.trim().is_empty() {
                body.push_str(rest);
                body.push('\n');
            }
        }
    }

    if found { Some(body) } else { None }
}

/// Trimmed, non-empty lines of a section body, in document order.
pub fn section_lines(body: &str) -> Vec<&str> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
