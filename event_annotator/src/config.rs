//! Annotator configuration.
//!
//! Two switches control enrichment; everything else here is the string table
//! for sentinel and label text. A config file is sparse TOML:
//!
//! ```toml
//! [annotation]
//! show_skill_hint_level = true
//! show_skill_condition = true
//!
//! [strings]
//! unknown_effect = "未知效果"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Placeholder in [`Strings::unknown_option`] replaced by the reported index.
pub const INDEX_PLACEHOLDER: &str = "{index}";

/// Errors from loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Per-call enrichment switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationOptions {
    /// Append the player's hint level to each recognised skill.
    pub show_skill_hint_level: bool,

    /// Append the skill's activation conditions to each recognised skill.
    pub show_skill_condition: bool,
}

impl Default for AnnotationOptions {
    fn default() -> Self {
        Self {
            show_skill_hint_level: true,
            show_skill_condition: false,
        }
    }
}

impl AnnotationOptions {
    /// Whether any enrichment is requested.
    pub fn any(&self) -> bool {
        self.show_skill_hint_level || self.show_skill_condition
    }
}

/// User-visible labels and sentinel texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strings {
    /// Root label for stories missing from the database.
    pub unknown_source: String,
    /// Event label prefix for stories missing from the database.
    pub unknown_event: String,
    /// Option label for unrecorded choices; `{index}` is the reported index.
    pub unknown_option: String,
    /// Option label when the recorded label is empty.
    pub no_option: String,
    /// Effect text of unrecorded choices, also shown as the neutral block
    /// when both outcomes are unknown.
    pub unknown_effect: String,
    pub when_success: String,
    pub when_fail: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            unknown_source: "Unknown source".to_string(),
            unknown_event: "Unknown event".to_string(),
            unknown_option: "Unknown option ({index})".to_string(),
            no_option: "No option".to_string(),
            unknown_effect: "(unknown, reason: unresolved)".to_string(),
            when_success: "when successful".to_string(),
            when_fail: "when failed".to_string(),
        }
    }
}

impl Strings {
    /// Option label for an unrecorded choice.
    pub fn unknown_option_label(&self, reported_index: i32) -> String {
        self.unknown_option
            .replace(INDEX_PLACEHOLDER, &reported_index.to_string())
    }
}

/// Complete configuration of the annotator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    pub annotation: AnnotationOptions,
    pub strings: Strings,
}

impl AnnotatorConfig {
    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// The switches to pass to each build call.
    pub fn options(&self) -> AnnotationOptions {
        self.annotation
    }
}
