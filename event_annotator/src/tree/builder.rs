//! Event tree builder - turns unchecked events into render trees.
//!
//! Shape of a tree for a known story:
//!
//! ```text
//! trigger name
//! └── event name(story id)
//!     ├── option label
//!     │   └── effect
//!     └── ...
//! ```

use event_catalog::{EventRecord, HintLevels, SkillLookup, StoryDefinition, StoryLookup, UncheckedEvent};

use super::{RenderNode, StyledText};
use crate::annotation::annotate;
use crate::config::{AnnotationOptions, Strings};
use crate::effect::format_effect;
use crate::error::Result;
use crate::resolver::resolve_choice;

/// Builds one render tree per unchecked event.
pub struct EventTreeBuilder<'a> {
    stories: &'a dyn StoryLookup,
    skills: &'a dyn SkillLookup,
    strings: Strings,
}

impl<'a> EventTreeBuilder<'a> {
    /// Create a builder over the given databases with default strings.
    pub fn new(stories: &'a dyn StoryLookup, skills: &'a dyn SkillLookup) -> Self {
        Self::with_strings(stories, skills, Strings::default())
    }

    /// Create a builder with a custom string table.
    pub fn with_strings(stories: &'a dyn StoryLookup, skills: &'a dyn SkillLookup, strings: Strings) -> Self {
        Self {
            stories,
            skills,
            strings,
        }
    }

    /// Build trees for every event of a record, in input order.
    pub fn build_forest(&self, record: &EventRecord, options: AnnotationOptions) -> Result<Vec<RenderNode>> {
        record
            .events
            .iter()
            .map(|event| self.build(event, &record.hint_levels, options))
            .collect()
    }

    /// Build the tree for one event, looking its story up in the database.
    pub fn build(
        &self,
        event: &UncheckedEvent,
        hint_levels: &HintLevels,
        options: AnnotationOptions,
    ) -> Result<RenderNode> {
        let story = self.stories.story(event.story_id);
        self.build_with_story(event, story, hint_levels, options)
    }

    /// Build the tree for one event against an already looked-up story.
    pub fn build_with_story(
        &self,
        event: &UncheckedEvent,
        story: Option<&StoryDefinition>,
        hint_levels: &HintLevels,
        options: AnnotationOptions,
    ) -> Result<RenderNode> {
        match story {
            Some(story) => self.build_known(event, story, hint_levels, options),
            None => {
                tracing::debug!(story_id = %event.story_id, "Story not in database");
                Ok(self.build_unknown(event))
            }
        }
    }

    fn build_known(
        &self,
        event: &UncheckedEvent,
        story: &StoryDefinition,
        hint_levels: &HintLevels,
        options: AnnotationOptions,
    ) -> Result<RenderNode> {
        let mut event_node = RenderNode::new(format!("{}({})", story.name, event.story_id));

        for (position, selection) in event.choices.iter().enumerate() {
            let resolved = resolve_choice(Some(story), position, selection.select_index, &self.strings);
            let choice = resolved.choice;

            let mut success = StyledText::plain(choice.success_effect);
            let mut failure = StyledText::plain(choice.failed_effect);
            if options.any() {
                success = annotate(&success, hint_levels, options, self.skills)?;
                failure = annotate(&failure, hint_levels, options, self.skills)?;
            }

            let effect = format_effect(success, failure, &self.strings).into_text(&self.strings);

            let label = if choice.option.is_empty() {
                self.strings.no_option.clone()
            } else {
                choice.option
            };

            event_node.add_child(RenderNode::new(label).with_child(RenderNode::new(effect)));
        }

        Ok(RenderNode::new(story.trigger_name.as_str()).with_child(event_node))
    }

    fn build_unknown(&self, event: &UncheckedEvent) -> RenderNode {
        let mut event_node = RenderNode::new(format!("{}({})", self.strings.unknown_event, event.story_id));

        for selection in &event.choices {
            let label = self.strings.unknown_option_label(selection.select_index);
            event_node.add_child(
                RenderNode::new(label).with_child(RenderNode::new(self.strings.unknown_effect.as_str())),
            );
        }

        RenderNode::new(self.strings.unknown_source.as_str()).with_child(event_node)
    }
}
