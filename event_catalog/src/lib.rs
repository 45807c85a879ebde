//! # Event Catalog
//!
//! The read-only data side of the event annotator: story and choice
//! definitions, skill definitions with their activation conditions, and the
//! unchecked-event record extracted from a check-event response.
//!
//! Nothing in this crate renders text. It is loaded once and then only read.

pub mod error;
pub mod record;
pub mod skills;
pub mod story;

pub use error::*;
pub use record::*;
pub use skills::*;
pub use story::*;
