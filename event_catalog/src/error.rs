//! Error types for catalogue loading and schema checks.

use thiserror::Error;

/// A raw database code fell outside its closed enumeration.
///
/// The condition code space is fixed by the database schema, so this means the
/// catalogue and the code disagree. Callers should surface it loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("unknown running style code: {0}")]
    UnknownStyle(i32),

    #[error("unknown distance code: {0}")]
    UnknownDistance(i32),

    #[error("unknown ground code: {0}")]
    UnknownGround(i32),
}

/// Errors that can occur when loading catalogue data or responses.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
