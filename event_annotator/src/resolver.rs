//! Choice resolution against the story database.

use event_catalog::{ChoiceDefinition, StoryDefinition};

use crate::config::Strings;

/// A choice definition together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChoice {
    pub choice: ChoiceDefinition,

    /// The story exists in the database.
    pub story_known: bool,

    /// The choice itself was recorded for that story.
    pub recorded: bool,
}

/// Placeholder for a choice the database knows nothing about.
pub fn placeholder_choice(reported_index: i32, strings: &Strings) -> ChoiceDefinition {
    ChoiceDefinition {
        option: strings.unknown_option_label(reported_index),
        success_effect: strings.unknown_effect.clone(),
        failed_effect: strings.unknown_effect.clone(),
    }
}

/// Resolve the choice at `selection_index` (its position in the event).
///
/// Missing stories and stories with fewer recorded choices both resolve to
/// a placeholder labelled with `reported_index`.
pub fn resolve_choice(
    story: Option<&StoryDefinition>,
    selection_index: usize,
    reported_index: i32,
    strings: &Strings,
) -> ResolvedChoice {
    match story {
        None => ResolvedChoice {
            choice: placeholder_choice(reported_index, strings),
            story_known: false,
            recorded: false,
        },
        Some(story) => match story.choice(selection_index) {
            Some(choice) => ResolvedChoice {
                choice: choice.clone(),
                story_known: true,
                recorded: true,
            },
            None => {
                tracing::debug!(
                    story_id = %story.id,
                    selection_index,
                    reported_index,
                    "Choice not recorded for known story"
                );
                ResolvedChoice {
                    choice: placeholder_choice(reported_index, strings),
                    story_known: true,
                    recorded: false,
                }
            }
        },
    }
}
