//! Story and choice definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// Identifier of a story (event) as reported by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StoryId(pub u64);

impl From<u64> for StoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The canonical text of one selectable option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceDefinition {
    /// Label shown for the option. May be empty for single-option events.
    #[serde(default)]
    pub option: String,

    /// Effect text when the choice succeeds.
    #[serde(default)]
    pub success_effect: String,

    /// Effect text when the choice fails. Empty means the event has no
    /// success/failure split.
    #[serde(default)]
    pub failed_effect: String,
}

impl ChoiceDefinition {
    /// Create a choice with the given option label and no effects.
    pub fn new(option: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            ..Default::default()
        }
    }

    /// Set the success effect text.
    pub fn with_success(mut self, text: impl Into<String>) -> Self {
        self.success_effect = text.into();
        self
    }

    /// Set the failure effect text.
    pub fn with_failure(mut self, text: impl Into<String>) -> Self {
        self.failed_effect = text.into();
        self
    }
}

/// A story as recorded in the local database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDefinition {
    pub id: StoryId,

    /// Who triggers the event (a character or support card name).
    #[serde(default)]
    pub trigger_name: String,

    /// Human-readable event name.
    #[serde(default)]
    pub name: String,

    /// Candidates per choice position. The first candidate is canonical.
    #[serde(default)]
    pub choices: Vec<Vec<ChoiceDefinition>>,
}

impl StoryDefinition {
    /// Create a story with no recorded choices.
    pub fn new(id: impl Into<StoryId>, trigger_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            trigger_name: trigger_name.into(),
            name: name.into(),
            choices: Vec::new(),
        }
    }

    /// Append a choice position with a single candidate.
    pub fn with_choice(mut self, choice: ChoiceDefinition) -> Self {
        self.choices.push(vec![choice]);
        self
    }

    /// Canonical choice at a position, if one was recorded.
    pub fn choice(&self, index: usize) -> Option<&ChoiceDefinition> {
        self.choices.get(index).and_then(|candidates| candidates.first())
    }
}

/// Read access to story definitions.
pub trait StoryLookup {
    fn story(&self, id: StoryId) -> Option<&StoryDefinition>;
}

/// In-memory story database keyed by story id.
#[derive(Debug, Clone, Default)]
pub struct StoryDatabase {
    stories: HashMap<StoryId, StoryDefinition>,
}

impl StoryDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load stories from a JSON array.
    pub fn from_json(json: &str) -> Result<Self> {
        let stories: Vec<StoryDefinition> = serde_json::from_str(json)?;
        let mut db = Self::new();
        for story in stories {
            db.insert(story);
        }
        tracing::debug!("Loaded {} stories", db.len());
        Ok(db)
    }

    /// Load stories from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Insert or replace a story.
    pub fn insert(&mut self, story: StoryDefinition) -> StoryId {
        let id = story.id;
        self.stories.insert(id, story);
        id
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

impl StoryLookup for StoryDatabase {
    fn story(&self, id: StoryId) -> Option<&StoryDefinition> {
        self.stories.get(&id)
    }
}

impl FromIterator<StoryDefinition> for StoryDatabase {
    fn from_iter<I: IntoIterator<Item = StoryDefinition>>(iter: I) -> Self {
        let mut db = Self::new();
        for story in iter {
            db.insert(story);
        }
        db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_builder() {
        let story = StoryDefinition::new(100u64, "Trainer", "Morning Run")
            .with_choice(ChoiceDefinition::new("Go").with_success("Speed +10"));

        assert_eq!(story.id, StoryId(100));
        assert_eq!(story.choices.len(), 1);
        assert_eq!(story.choice(0).unwrap().success_effect, "Speed +10");
        assert!(story.choice(1).is_none());
    }

    #[test]
    fn test_first_candidate_is_canonical() {
        let mut story = StoryDefinition::new(1u64, "A", "B");
        story.choices.push(vec![
            ChoiceDefinition::new("first"),
            ChoiceDefinition::new("second"),
        ]);

        assert_eq!(story.choice(0).unwrap().option, "first");
    }

    #[test]
    fn test_empty_candidate_list_is_unrecorded() {
        let mut story = StoryDefinition::new(1u64, "A", "B");
        story.choices.push(Vec::new());

        assert!(story.choice(0).is_none());
    }

    #[test]
    fn test_database_from_json() {
        let json = r#"[
            {
                "id": 501001524,
                "trigger_name": "Special Week",
                "name": "Extra Training",
                "choices": [[{
                    "option": "Keep going",
                    "success_effect": "Stamina +5",
                    "failed_effect": "Energy -10"
                }]]
            },
            { "id": 7 }
        ]"#;

        let db = StoryDatabase::from_json(json).unwrap();
        assert_eq!(db.len(), 2);

        let story = db.story(StoryId(501001524)).unwrap();
        assert_eq!(story.trigger_name, "Special Week");
        assert_eq!(story.choice(0).unwrap().failed_effect, "Energy -10");

        let bare = db.story(StoryId(7)).unwrap();
        assert!(bare.name.is_empty());
        assert!(bare.choices.is_empty());
        assert!(db.story(StoryId(8)).is_none());
    }

    #[test]
    fn test_database_rejects_bad_json() {
        assert!(StoryDatabase::from_json("{ not json").is_err());
    }

    #[test]
    fn test_story_id_display() {
        assert_eq!(StoryId(830137001).to_string(), "830137001");
    }
}
