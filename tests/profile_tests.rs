use otayori::config::{Config, InstitutionKind};
use otayori::model::Category;
use std::io::Write;

const PROFILE: &str = r#"
[[children]]
name = "太郎"
name_kana = "たろう"
gender = "男性"
birth_date = "2020年3月16日"

[[children]]
name = "花子"
name_kana = "はなこ"

[[institutions]]
name = "○○保育園"
kind = "school"
school_type = "保育園"
address = "〒000-0000 ○○県○○市○○町1-1-1"
classes = "2歳児クラス=りす組,5歳児クラス=らいおん組"
group_definitions = "乳児組=りす組 幼児組=らいおん組"

[[institutions.students]]
name = "太郎"
class = "らいおん組"
current_year = "2026年4月現在"

[[institutions]]
name = "○○音楽教室"
kind = "activity"

[[institutions.students]]
name = "太郎"
schedule = "毎週土曜日 16:30～17:00"
"#;

#[test]
fn profile_parses() {
    let config: Config = toml::from_str(PROFILE).unwrap();

    assert_eq!(config.children.len(), 2);
    assert_eq!(config.children[0].name_kana, "たろう");
    assert_eq!(config.children[1].gender, None);

    assert_eq!(config.institutions.len(), 2);
    assert_eq!(config.institutions[0].kind, InstitutionKind::School);
    assert_eq!(config.institutions[1].kind, InstitutionKind::Activity);
    assert_eq!(
        config.institutions[1].students[0].schedule.as_deref(),
        Some("毎週土曜日 16:30～17:00")
    );
}

#[test]
fn people_follow_file_order() {
    let config: Config = toml::from_str(PROFILE).unwrap();
    let people = config.people();

    assert_eq!(people.len(), 2);
    assert_eq!(people[0].name, "太郎");
    assert_eq!(people[0].phonetic_alias, "たろう");
    assert_eq!(people[1].name, "花子");
}

#[test]
fn stock_section_rules_when_none_configured() {
    let config: Config = toml::from_str(PROFILE).unwrap();
    let rules = config.section_rules();

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].heading, "ToDo");
    assert_eq!(rules[0].category, Category::Todo);
    assert_eq!(rules[1].heading, "持ち物");
    assert_eq!(rules[1].category, Category::Item);
}

#[test]
fn configured_section_rules_replace_the_stock_set() {
    let profile = r#"
[[sections]]
heading = "イベント"
tag = "イベント"
category = "event"
"#;
    let config: Config = toml::from_str(profile).unwrap();
    let rules = config.section_rules();

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].heading, "イベント");
    assert_eq!(rules[0].category, Category::Event);
}

#[test]
fn load_reads_a_profile_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PROFILE.as_bytes()).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.children.len(), 2);
}

#[test]
fn load_reports_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn load_reports_a_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"children = \"not a table\"").unwrap();

    let err = Config::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}

#[test]
fn empty_profile_is_valid() {
    let config: Config = toml::from_str("").unwrap();
    assert!(config.children.is_empty());
    assert!(config.people().is_empty());
    assert_eq!(config.section_rules().len(), 2);
}
