// File: ./src/prompt.rs
//! Renders the household profile into the natural-language prompt handed to
//! the external summarization process. Straightforward template fill; the
//! interesting parsing lives on the extraction side.

use crate::config::{Config, Institution, InstitutionKind};
use std::fmt::Write;

const PREAMBLE: &str = "
#指示
主とする指示の前に以下の前提となる指示を理解してください
## 前提指示１ 対象外ファイル
1ファイル5ページ以上のファイルは取り込み対象外とし、トークンを消費しないでください
## 前提指示2  対象外ファイル
pdfまたは画像以外のファイルは取り込み対象外とし、トークンを消費しないでください
## 前提指示3  ハルシネーション対策
ハルシネーションしないでください。主とする指示の判断において疑わしい場合、要約の中に判断がつかなかった箇所とその理由を必ず明示してください

## 前提知識1 私のこどもの情報
";

/// Builds the full prompt: fixed preamble, one numbered line per child,
/// then one knowledge block per institution.
pub fn render_prompt(config: &Config) -> String {
    let mut prompt = String::from(PREAMBLE);

    for (index, child) in config.children.iter().enumerate() {
        let _ = write!(prompt, "{}人目:{}", index + 1, child.name);
        if !child.name_kana.is_empty() {
            let _ = write!(prompt, "（{}）", child.name_kana);
        }
        if let Some(gender) = &child.gender {
            let _ = write!(prompt, "{}", gender);
        }
        if let Some(birth_date) = &child.birth_date {
            let _ = write!(prompt, " {}生まれ", birth_date);
        }
        prompt.push('\n');
    }

    for (index, institution) in config.institutions.iter().enumerate() {
        let _ = writeln!(
            prompt,
            "## 前提知識{} {}の情報",
            index + 2,
            institution.name
        );
        match institution.kind {
            InstitutionKind::School => render_school(&mut prompt, institution),
            InstitutionKind::Activity => render_activity(&mut prompt, institution),
        }
    }

    prompt
}

fn render_school(prompt: &mut String, institution: &Institution) {
    if let Some(school_type) = &institution.school_type {
        let _ = writeln!(prompt, "私の子供は以下の{}に通っています。", school_type);
    }
    let _ = writeln!(prompt, "施設名：{}", institution.name);
    if let Some(address) = &institution.address {
        let _ = writeln!(prompt, "所在地：{}", address);
    }
    if let Some(classes) = &institution.classes {
        let _ = writeln!(prompt, "クラス名：{}", classes);
    }
    for student in &institution.students {
        let year = student.current_year.as_deref().unwrap_or_default();
        let class = student.class.as_deref().unwrap_or_default();
        let _ = writeln!(prompt, "{}：{}（{}）", year, student.name, class);
    }
    if let Some(groups) = &institution.group_definitions {
        let _ = writeln!(prompt, "## {}の組分け定義", institution.name);
        let _ = writeln!(prompt, "{}", groups);
    }
}

fn render_activity(prompt: &mut String, institution: &Institution) {
    let _ = writeln!(prompt, "以下の習い事に通っている子供がいます。");
    let _ = writeln!(prompt, "習い事名：{}", institution.name);
    if let Some(address) = &institution.address {
        let _ = writeln!(prompt, "所在地：{}", address);
    }
    for student in &institution.students {
        let _ = writeln!(prompt, "通っている人：{}", student.name);
        if let Some(schedule) = &student.schedule {
            let _ = writeln!(prompt, "レッスン日時：{}", schedule);
        }
        if let Some(notes) = &student.notes {
            let _ = writeln!(prompt, "{}", notes);
        }
    }
}
