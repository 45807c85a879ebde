//! # Event Annotator
//!
//! Turns the unchecked events of a check-event response into readable trees:
//! who triggered the event, which event it is, and what each choice does on
//! success and on failure. Skill mentions inside effect text are enriched with
//! the player's hint level and the skill's activation conditions.
//!
//! ## Core Components
//!
//! - **annotation**: skill mention scanning, hint level tiers, condition symbols
//! - **resolver**: choice lookup with placeholders for unrecorded content
//! - **effect**: success/failure display policy
//! - **tree**: styled text, render nodes and the event tree builder
//! - **render**: box-drawn text output with pluggable palettes
//!
//! Unknown stories, choices and skills never fail a build; they degrade to
//! sentinel text. A skill condition code outside the known set does fail it.

pub mod annotation;
pub mod config;
pub mod effect;
pub mod error;
pub mod render;
pub mod resolver;
pub mod tree;

pub use annotation::*;
pub use config::*;
pub use effect::*;
pub use error::*;
pub use render::*;
pub use resolver::*;
pub use tree::*;
