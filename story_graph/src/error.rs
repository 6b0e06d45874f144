//! Error types for loading and validating stories.

use thiserror::Error;

/// Failure to decode a story from its JSON form.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The input was not well-formed JSON, or did not have the story shape.
    #[error("failed to decode story at line {line}, column {column}: {source}")]
    Decode {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The story could not be re-encoded.
    #[error("failed to encode story: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoryError {
    pub(crate) fn decode(source: serde_json::Error) -> Self {
        Self::Decode {
            line: source.line(),
            column: source.column(),
            source,
        }
    }

    /// Check if the input was truncated rather than malformed.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Decode { source, .. } if source.is_eof())
    }
}

/// A strict validation pass found problems in an otherwise decodable story.
#[derive(Debug, Error)]
#[error("story failed validation with {count} issue(s): {summary}")]
pub struct ValidationError {
    pub count: usize,
    pub summary: String,
}
