use event_catalog::{CatalogError, SchemaError};
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AnnotatorError {
    #[error("Schema violation: {0}")]
    Schema(#[from] SchemaError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnnotatorError>;
