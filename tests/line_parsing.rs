use chrono::NaiveDate;
use otayori::engine::SectionRule;
use otayori::model::parser::parse_line;
use otayori::model::{ALL_MEMBERS, Category, LineOutcome, Person, SkipReason};

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
}

fn todo_rule() -> SectionRule {
    SectionRule::new("ToDo", "ToDo", Category::Todo)
}

fn registry() -> Vec<Person> {
    vec![
        Person::new("太郎", "たろう"),
        Person::new("花子", "はなこ"),
    ]
}

fn expect_task(outcome: LineOutcome) -> otayori::model::TaskRecord {
    match outcome {
        LineOutcome::Task(record) => record,
        LineOutcome::Skipped(reason) => panic!("expected a task, got skip: {reason}"),
    }
}

#[test]
fn full_line_becomes_a_record() {
    let record = expect_task(parse_line(
        "- 太郎：遠足の参加確認書を5月10日までに提出",
        &registry(),
        &todo_rule(),
        reference(),
    ));

    assert_eq!(record.title, "[ToDo][太郎] 太郎：遠足の参加確認書を5月10日までに提出");
    assert_eq!(record.notes, "- 太郎：遠足の参加確認書を5月10日までに提出");
    assert_eq!(record.target_person, "太郎");
    assert_eq!(record.due_date, NaiveDate::from_ymd_opt(2026, 5, 10));
    assert_eq!(record.category, Category::Todo);
}

#[test]
fn blank_lines_are_skipped() {
    let outcome = parse_line("   ", &registry(), &todo_rule(), reference());
    assert_eq!(outcome, LineOutcome::Skipped(SkipReason::Blank));
}

#[test]
fn decorative_lines_are_skipped() {
    for line in ["- ", "・", " - ・ - ", "----"] {
        let outcome = parse_line(line, &registry(), &todo_rule(), reference());
        assert_eq!(
            outcome,
            LineOutcome::Skipped(SkipReason::DecorativeOnly),
            "line {:?} should be decorative",
            line
        );
    }
}

#[test]
fn unmatched_line_targets_everyone() {
    let record = expect_task(parse_line(
        "- 避難訓練を5月20日に実施",
        &registry(),
        &todo_rule(),
        reference(),
    ));
    assert_eq!(record.target_person, ALL_MEMBERS);
    assert_eq!(record.title, "[ToDo] 避難訓練を5月20日に実施");
}

#[test]
fn notes_keep_the_line_verbatim_when_the_title_is_clipped() {
    let body = "あ".repeat(60);
    let line = format!("- {body}");
    let record = expect_task(parse_line(&line, &registry(), &todo_rule(), reference()));

    // Body portion: exactly 47 chars then the ellipsis marker.
    let expected_body = "あ".repeat(47);
    assert_eq!(record.title, format!("[ToDo] {expected_body}..."));
    assert_eq!(record.notes, line.trim());
}

#[test]
fn a_50_char_body_is_not_clipped() {
    let body = "x".repeat(50);
    let record = expect_task(parse_line(&body, &registry(), &todo_rule(), reference()));
    assert_eq!(record.title, format!("[ToDo] {body}"));
}

#[test]
fn leading_bullets_are_stripped_from_the_title_only() {
    let record = expect_task(parse_line(
        "・- 花子：こいのぼりを持参",
        &registry(),
        &todo_rule(),
        reference(),
    ));
    assert_eq!(record.title, "[ToDo][花子] 花子：こいのぼりを持参");
    assert_eq!(record.notes, "・- 花子：こいのぼりを持参");
}

#[test]
fn category_tag_follows_the_section_rule() {
    let rule = SectionRule::new("持ち物", "持ち物", Category::Item);
    let record = expect_task(parse_line(
        "- 太郎：お弁当",
        &registry(),
        &rule,
        reference(),
    ));
    assert_eq!(record.title, "[持ち物][太郎] 太郎：お弁当");
    assert_eq!(record.category, Category::Item);
}
