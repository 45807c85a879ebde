//! Skill definitions and lookup by name.

mod proper;

pub use proper::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// A skill as recorded in the skill database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub name: String,

    /// Skill group. Together with `rarity` this identifies the skill in the
    /// player's hint table.
    pub group_id: i32,

    pub rarity: i32,

    /// Activation conditions. Empty when the skill can trigger anywhere.
    #[serde(default)]
    pub propers: Vec<SkillProper>,
}

impl SkillDefinition {
    /// Create a skill without activation conditions.
    pub fn new(name: impl Into<String>, group_id: i32, rarity: i32) -> Self {
        Self {
            name: name.into(),
            group_id,
            rarity,
            propers: Vec::new(),
        }
    }

    /// Add an activation condition tuple.
    pub fn with_proper(mut self, proper: SkillProper) -> Self {
        self.propers.push(proper);
        self
    }

    /// Whether any condition tuple constrains at least one axis.
    pub fn has_conditions(&self) -> bool {
        self.propers.iter().any(|p| !p.is_unconstrained())
    }
}

/// Lookup of skills by display name.
pub trait SkillLookup {
    fn skill_by_name(&self, name: &str) -> Option<&SkillDefinition>;
}

/// In-memory skill database indexed by name.
#[derive(Debug, Clone, Default)]
pub struct SkillDatabase {
    skills: Vec<SkillDefinition>,
    by_name: HashMap<String, usize>,
}

impl SkillDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load skills from a JSON array.
    pub fn from_json(json: &str) -> Result<Self> {
        let skills: Vec<SkillDefinition> = serde_json::from_str(json)?;
        let db: Self = skills.into_iter().collect();
        tracing::debug!("Loaded {} skills", db.len());
        Ok(db)
    }

    /// Load skills from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Add a skill. When a name is already present the earlier definition
    /// keeps answering lookups.
    pub fn insert(&mut self, skill: SkillDefinition) {
        let index = self.skills.len();
        self.by_name.entry(skill.name.clone()).or_insert(index);
        self.skills.push(skill);
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl SkillLookup for SkillDatabase {
    fn skill_by_name(&self, name: &str) -> Option<&SkillDefinition> {
        self.by_name.get(name).and_then(|&i| self.skills.get(i))
    }
}

impl FromIterator<SkillDefinition> for SkillDatabase {
    fn from_iter<I: IntoIterator<Item = SkillDefinition>>(iter: I) -> Self {
        let mut db = Self::new();
        for skill in iter {
            db.insert(skill);
        }
        db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        let db: SkillDatabase = vec![
            SkillDefinition::new("Corner Recovery", 20001, 1),
            SkillDefinition::new("Straightaway Adept", 20002, 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(db.skill_by_name("Corner Recovery").unwrap().group_id, 20001);
        assert!(db.skill_by_name("corner recovery").is_none());
        assert!(db.skill_by_name("").is_none());
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let mut db = SkillDatabase::new();
        db.insert(SkillDefinition::new("Concentration", 1, 1));
        db.insert(SkillDefinition::new("Concentration", 2, 2));

        assert_eq!(db.len(), 2);
        assert_eq!(db.skill_by_name("Concentration").unwrap().group_id, 1);
    }

    #[test]
    fn test_has_conditions() {
        let plain = SkillDefinition::new("Plain", 1, 1);
        assert!(!plain.has_conditions());

        let empty_tuple = SkillDefinition::new("Empty", 1, 1).with_proper(SkillProper::default());
        assert!(!empty_tuple.has_conditions());

        let front = SkillDefinition::new("Front", 1, 1)
            .with_proper(SkillProper::new(Some(RunningStyle::Nige), None, None));
        assert!(front.has_conditions());
    }

    #[test]
    fn test_database_from_json() {
        let json = r#"[
            { "name": "Early Lead", "group_id": 20014, "rarity": 1,
              "propers": [{ "style": 1 }] },
            { "name": "Swinging Maestro", "group_id": 20010, "rarity": 1 }
        ]"#;

        let db = SkillDatabase::from_json(json).unwrap();
        let lead = db.skill_by_name("Early Lead").unwrap();
        assert_eq!(lead.propers.len(), 1);
        assert_eq!(lead.propers[0].running_style(), Ok(Some(RunningStyle::Nige)));
        assert!(db.skill_by_name("Swinging Maestro").unwrap().propers.is_empty());
    }
}
