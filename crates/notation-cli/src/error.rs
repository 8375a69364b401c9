//! CLI error types

use notation_core::NotationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error(transparent)]
    Notation(#[from] NotationError),
}
