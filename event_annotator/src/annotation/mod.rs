//! Skill annotation - enriches skill mentions inside effect text.
//!
//! A mention is a skill name between `「` and `」`. For every mention whose
//! name is found in the skill database, the player's hint level and/or the
//! skill's activation conditions are inserted right after the name:
//!
//! ```text
//! 「Early Lead」 hint +1   →   「Early Lead(Lv.3)[逃]」 hint +1
//! ```
//!
//! Unknown names are left exactly as they were.

mod condition;

pub use condition::*;

use event_catalog::{HintLevels, SchemaError, SkillDefinition, SkillLookup, SkillProper};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::AnnotationOptions;
use crate::tree::{Span, StyledText, Tint};

/// Opening delimiter of a skill mention.
pub const MENTION_OPEN: &str = "「";

/// Closing delimiter of a skill mention.
pub const MENTION_CLOSE: &str = "」";

/// How urgently a hint level should be drawn to attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// No hint yet (level 0 or below).
    Critical,
    /// Some hints (levels 1 to 4).
    Caution,
    /// Maxed out or close (level 5 and above).
    Ok,
}

impl Severity {
    pub fn for_level(level: i32) -> Self {
        match level {
            i32::MIN..=0 => Severity::Critical,
            1..=4 => Severity::Caution,
            5..=i32::MAX => Severity::Ok,
        }
    }
}

/// A skill mention found in a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mention<'a> {
    /// The skill name between the delimiters.
    pub name: &'a str,
    /// Byte offset just past the name, where a suffix is inserted.
    pub name_end: usize,
}

/// Iterate over the skill mentions of `text`, left to right.
///
/// The first `」` after an opening `「` closes the mention. A mention never
/// spans a line break.
pub fn mentions(text: &str) -> impl Iterator<Item = Mention<'_>> + '_ {
    let mut cursor = 0;
    std::iter::from_fn(move || {
        while let Some(offset) = text[cursor..].find(MENTION_OPEN) {
            let start = cursor + offset;
            let name_start = start + MENTION_OPEN.len();
            let Some(close) = text[name_start..].find(MENTION_CLOSE) else {
                cursor = text.len();
                return None;
            };
            let name = &text[name_start..name_start + close];
            if name.contains('\n') {
                cursor = name_start;
                continue;
            }
            let name_end = name_start + close;
            cursor = name_end + MENTION_CLOSE.len();
            return Some(Mention { name, name_end });
        }
        cursor = text.len();
        None
    })
}

/// `(Lv.N)` with the level tinted by its severity.
pub fn level_marker(level: i32) -> StyledText {
    let mut marker = StyledText::plain("(Lv.");
    marker.push(Span::tinted(
        level.to_string(),
        Tint::Severity(Severity::for_level(level)),
    ));
    marker.push_plain(")");
    marker
}

/// `[conditions]`, or nothing when no tuple constrains any axis.
pub fn condition_marker(propers: &[SkillProper]) -> Result<StyledText, SchemaError> {
    if propers.iter().all(SkillProper::is_unconstrained) {
        return Ok(StyledText::new());
    }
    Ok(StyledText::plain(format!("[{}]", render_conditions(propers)?)))
}

/// Everything inserted after a recognised skill name.
pub fn skill_suffix(
    skill: &SkillDefinition,
    hint_levels: &HintLevels,
    options: AnnotationOptions,
) -> Result<StyledText, SchemaError> {
    let mut suffix = StyledText::new();
    if options.show_skill_hint_level {
        suffix.extend(level_marker(hint_levels.level_for(skill.group_id, skill.rarity)));
    }
    if options.show_skill_condition {
        suffix.extend(condition_marker(&skill.propers)?);
    }
    Ok(suffix)
}

/// Annotate every skill mention in `text`.
///
/// Only plain spans are scanned, so annotating the output again changes
/// nothing. Each distinct name is looked up once and its suffix applied to
/// every occurrence.
pub fn annotate(
    text: &StyledText,
    hint_levels: &HintLevels,
    options: AnnotationOptions,
    skills: &dyn SkillLookup,
) -> Result<StyledText, SchemaError> {
    if !options.any() {
        return Ok(text.clone());
    }

    let mut suffixes: HashMap<&str, Option<StyledText>> = HashMap::new();
    let mut out = StyledText::new();

    for span in text.spans() {
        if span.tint != Tint::Plain {
            out.push(span.clone());
            continue;
        }

        let mut copied = 0;
        for mention in mentions(&span.text) {
            if !suffixes.contains_key(mention.name) {
                let suffix = match skills.skill_by_name(mention.name) {
                    Some(skill) => Some(skill_suffix(skill, hint_levels, options)?),
                    None => {
                        tracing::trace!(skill = mention.name, "No skill matches mention");
                        None
                    }
                };
                suffixes.insert(mention.name, suffix);
            }

            if let Some(Some(suffix)) = suffixes.get(mention.name) {
                out.push_plain(&span.text[copied..mention.name_end]);
                out.extend(suffix.clone());
                copied = mention.name_end;
            }
        }
        out.push_plain(&span.text[copied..]);
    }

    Ok(out)
}

/// [`annotate`] for plain input text.
pub fn annotate_str(
    text: &str,
    hint_levels: &HintLevels,
    options: AnnotationOptions,
    skills: &dyn SkillLookup,
) -> Result<StyledText, SchemaError> {
    annotate(&StyledText::plain(text), hint_levels, options, skills)
}
