//! Effect formatting - picks how a choice's outcome text is displayed.

use serde::{Deserialize, Serialize};

use crate::config::Strings;
use crate::tree::{Span, StyledText, Tint};

/// Outcome state of an effect text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayState {
    Unknown,
    Fail,
    Success,
    /// Not selected by any formatting rule today; the data has no separate
    /// great-success text yet.
    GreatSuccess,
    Neutral,
}

/// How a choice's effect should be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayInstruction {
    /// No failure text was ever recorded, so the outcome is fixed. Shown as-is.
    OutcomeFree(StyledText),
    /// Neither outcome is known.
    Unresolved,
    /// Separate success and failure outcomes.
    Outcomes {
        success: StyledText,
        failure: StyledText,
    },
}

/// Decide the display for a success/failure text pair.
pub fn format_effect(success: StyledText, failure: StyledText, strings: &Strings) -> DisplayInstruction {
    if failure.is_empty() {
        return DisplayInstruction::OutcomeFree(success);
    }

    if success.plain_text() == strings.unknown_effect && failure.plain_text() == strings.unknown_effect {
        return DisplayInstruction::Unresolved;
    }

    DisplayInstruction::Outcomes { success, failure }
}

/// Re-tint every plain span of `text` with `state`, keeping severity tints.
fn tint_plain(text: StyledText, state: DisplayState) -> StyledText {
    let mut out = StyledText::new();
    for mut span in text.spans().iter().cloned() {
        if span.tint == Tint::Plain {
            span.tint = Tint::State(state);
        }
        out.push(span);
    }
    out
}

impl DisplayInstruction {
    /// Flatten into the text of an effect node.
    pub fn into_text(self, strings: &Strings) -> StyledText {
        match self {
            DisplayInstruction::OutcomeFree(text) => text,
            DisplayInstruction::Unresolved => StyledText::tinted(
                strings.unknown_effect.clone(),
                Tint::State(DisplayState::Neutral),
            ),
            DisplayInstruction::Outcomes { success, failure } => {
                let mut out = StyledText::tinted(
                    format!("({})", strings.when_success),
                    Tint::State(DisplayState::Success),
                );
                out.extend(tint_plain(success, DisplayState::Success));
                out.push_plain("\n");
                out.push(Span::tinted(
                    format!("({})", strings.when_fail),
                    Tint::State(DisplayState::Fail),
                ));
                out.extend(tint_plain(failure, DisplayState::Fail));
                out
            }
        }
    }
}
