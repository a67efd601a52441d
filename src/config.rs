// File: ./src/config.rs
// Handles household profile loading and defaults.
use crate::engine::SectionRule;
use crate::model::item::Person;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One child in the household. Order in the file matters: the person
/// matcher prefers the LAST match, so later entries take precedence on
/// lines naming several children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Child {
    pub name: String,
    /// Kana reading, matched as an alias of the written name.
    #[serde(default)]
    pub name_kana: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
}

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InstitutionKind {
    School,
    Activity,
}

/// A child enrolled at an institution, as the prompt renderer needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub current_year: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub name: String,
    pub kind: InstitutionKind,
    /// School category shown in the prompt, e.g. "保育園".
    #[serde(default)]
    pub school_type: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Class roster, e.g. "0歳児クラス=ひよこ組,...".
    #[serde(default)]
    pub classes: Option<String>,
    /// Named groupings of classes, e.g. "乳児組=ひよこ組,うさぎ組".
    #[serde(default)]
    pub group_definitions: Option<String>,
    #[serde(default)]
    pub students: Vec<Student>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub children: Vec<Child>,
    #[serde(default)]
    pub institutions: Vec<Institution>,
    /// Overrides the stock section rules when non-empty; order is
    /// extraction order.
    #[serde(default)]
    pub sections: Vec<SectionRule>,
}

impl Config {
    /// Platform default location of the profile file.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "otayori", "otayori")
            .ok_or_else(|| anyhow::anyhow!("Could not determine a config directory"))?;
        Ok(dirs.config_dir().join("profile.toml"))
    }

    /// Load the profile from disk.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(path: &Path) -> Result<Self> {
        // Explicitly detect missing file so callers can behave accordingly.
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "Profile file not found: {}",
                path.display()
            ));
        }

        // Read the file with contextualized error (covers permission/IO issues).
        let contents = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read profile file '{}': {}", path.display(), e)
        })?;

        // Parse TOML with contextualized error (covers syntax issues).
        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse profile file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// The person registry derived from the children, in file order.
    pub fn people(&self) -> Vec<Person> {
        self.children
            .iter()
            .map(|child| Person::new(&child.name, &child.name_kana))
            .collect()
    }

    /// Section rules from the profile, or the stock set when none given.
    pub fn section_rules(&self) -> Vec<SectionRule> {
        if self.sections.is_empty() {
            SectionRule::defaults()
        } else {
            self.sections.clone()
        }
    }
}
