use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::lang::Localized;

#[derive(Embed)]
#[folder = "data"]
pub struct Assets;

/// A single portfolio entry. Records are defined once in the embedded JSON
/// files under `data/` and never change at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: Localized,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub background_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    pub date: NaiveDate,
}

#[derive(Error, Debug, Clone)]
pub enum ProjectDataError {
    #[error("Project data file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse project data in {0}: {1}")]
    Parse(String, String),
}

fn load(file: &str) -> Result<Vec<Project>, ProjectDataError> {
    let asset = Assets::get(file).ok_or_else(|| ProjectDataError::Missing(file.to_string()))?;
    serde_json::from_slice(&asset.data)
        .map_err(|e| ProjectDataError::Parse(file.to_string(), e.to_string()))
}

fn load_or_empty(file: &str) -> Vec<Project> {
    load(file).unwrap_or_else(|e| {
        log::error!("{e}");
        Vec::new()
    })
}

static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| load_or_empty("projects.json"));

static JAM_ENTRIES: LazyLock<Vec<Project>> = LazyLock::new(|| {
    let mut entries = load_or_empty("jams.json");
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
});

static TOOLS: LazyLock<Vec<Project>> = LazyLock::new(|| load_or_empty("tools.json"));

/// Main works. The first entry is the hero project; the rest fill the grid.
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// Game jam entries, newest first.
pub fn jam_entries() -> &'static [Project] {
    &JAM_ENTRIES
}

/// Tools and utilities. May be empty.
pub fn tools() -> &'static [Project] {
    &TOOLS
}

/// Look up a routable record (main works and tools) by its id.
pub fn project_by_id(id: u32) -> Option<&'static Project> {
    projects()
        .iter()
        .chain(tools().iter())
        .find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::lang::Language;

    #[test]
    fn test_embedded_data_parses() {
        assert!(load("projects.json").is_ok());
        assert!(load("jams.json").is_ok());
        assert!(load("tools.json").is_ok());
    }

    #[test]
    fn test_missing_file_is_an_error_not_a_panic() {
        assert!(matches!(
            load("nonexistent.json"),
            Err(ProjectDataError::Missing(_))
        ));
        assert!(load_or_empty("nonexistent.json").is_empty());
    }

    #[test]
    fn test_hero_project_exists() {
        let hero = projects().first().expect("should have a hero project");
        assert!(!hero.title.is_empty());
        assert!(!hero.image_urls.is_empty());
    }

    #[test]
    fn test_routable_ids_are_unique() {
        let mut seen = HashSet::new();
        for p in projects().iter().chain(tools().iter()) {
            assert!(seen.insert(p.id), "duplicate project id {}", p.id);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let hero = &projects()[0];
        let found = project_by_id(hero.id).expect("hero should be routable");
        assert_eq!(found.title, hero.title);
        assert!(project_by_id(u32::MAX).is_none());
    }

    #[test]
    fn test_jam_entries_sorted_newest_first() {
        let entries = jam_entries();
        for pair in entries.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_descriptions_have_english_base() {
        for p in projects()
            .iter()
            .chain(jam_entries().iter())
            .chain(tools().iter())
        {
            assert!(!p.description.get(Language::En).is_empty());
            assert!(!p.description.get(Language::Ja).is_empty());
        }
    }
}
