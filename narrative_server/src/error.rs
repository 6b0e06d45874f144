//! Host-level error types.

use story_graph::{StoryError, ValidationError};
use thiserror::Error;

use crate::template::TemplateError;

/// Anything that can stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load story from {path}: {source}")]
    Story {
        path: String,
        #[source]
        source: StoryError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid template {path}: {source}")]
    Template {
        path: String,
        #[source]
        source: TemplateError,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
