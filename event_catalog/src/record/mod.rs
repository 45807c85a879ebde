//! Unchecked-event records extracted from a check-event response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::story::StoryId;

/// One selectable choice as reported by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSelection {
    pub select_index: i32,
}

/// An event the player has not confirmed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncheckedEvent {
    pub story_id: StoryId,
    pub choices: Vec<ChoiceSelection>,
}

impl UncheckedEvent {
    /// Create an event with choices reporting the given selection indices.
    pub fn new(story_id: impl Into<StoryId>, select_indices: impl IntoIterator<Item = i32>) -> Self {
        Self {
            story_id: story_id.into(),
            choices: select_indices
                .into_iter()
                .map(|select_index| ChoiceSelection { select_index })
                .collect(),
        }
    }
}

/// A player's known hint level for one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTip {
    pub group_id: i32,
    pub rarity: i32,
    pub level: i32,
}

/// Snapshot of the player's skill hint levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintLevels {
    tips: Vec<SkillTip>,
}

impl HintLevels {
    pub fn new(tips: Vec<SkillTip>) -> Self {
        Self { tips }
    }

    /// Level for a (group, rarity) pair; the first matching entry wins and an
    /// absent pair counts as level 0.
    pub fn level_for(&self, group_id: i32, rarity: i32) -> i32 {
        self.tips
            .iter()
            .find(|t| t.group_id == group_id && t.rarity == rarity)
            .map(|t| t.level)
            .unwrap_or(0)
    }

    pub fn tips(&self) -> &[SkillTip] {
        &self.tips
    }
}

impl FromIterator<SkillTip> for HintLevels {
    fn from_iter<I: IntoIterator<Item = SkillTip>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// All unchecked events of one response, plus the hint levels at that time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub events: Vec<UncheckedEvent>,
    pub hint_levels: HintLevels,
}

impl EventRecord {
    pub fn new(events: Vec<UncheckedEvent>, hint_levels: HintLevels) -> Self {
        Self { events, hint_levels }
    }

    /// Extract the record from a raw check-event response.
    ///
    /// Returns `Ok(None)` when `data` is not an object or carries no
    /// character info object or no unchecked event array; such responses are
    /// not event responses. Only text that is not JSON at all, or event
    /// entries of the wrong shape, are errors.
    pub fn from_response_json(json: &str) -> Result<Option<Self>> {
        let mut response: Value = serde_json::from_str(json)?;
        let data = match response.get_mut("data").map(Value::take) {
            Some(data) if is_event_data(&data) => data,
            _ => return Ok(None),
        };
        let data: wire::Data = serde_json::from_value(data)?;
        Ok(Some(data.into_record()))
    }
}

fn is_event_data(data: &Value) -> bool {
    data.get("chara_info").is_some_and(Value::is_object)
        && data.get("unchecked_event_array").is_some_and(Value::is_array)
}

/// Wire shapes of the check-event response. Unknown fields are ignored.
mod wire {
    use serde::Deserialize;

    use super::{ChoiceSelection, EventRecord, HintLevels, SkillTip, UncheckedEvent};
    use crate::story::StoryId;

    #[derive(Deserialize)]
    pub(super) struct Data {
        chara_info: CharaInfo,
        unchecked_event_array: Vec<Event>,
    }

    #[derive(Deserialize)]
    struct CharaInfo {
        #[serde(default)]
        skill_tips_array: Vec<SkillTip>,
    }

    #[derive(Deserialize)]
    struct Event {
        story_id: u64,
        event_contents_info: Option<EventContents>,
    }

    #[derive(Deserialize)]
    struct EventContents {
        #[serde(default)]
        choice_array: Vec<ChoiceSelection>,
    }

    impl Data {
        pub(super) fn into_record(self) -> EventRecord {
            EventRecord {
                events: self
                    .unchecked_event_array
                    .into_iter()
                    .map(|e| UncheckedEvent {
                        story_id: StoryId(e.story_id),
                        choices: e
                            .event_contents_info
                            .map(|c| c.choice_array)
                            .unwrap_or_default(),
                    })
                    .collect(),
                hint_levels: HintLevels::new(self.chara_info.skill_tips_array),
            }
        }
    }
}
