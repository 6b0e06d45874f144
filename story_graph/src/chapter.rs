//! Chapter definitions - the nodes of a story graph and their outgoing choices.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Identifier of a chapter within a story.
///
/// Identifiers are arbitrary, case-sensitive text. They are serialized as a
/// plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ChapterId(pub String);

impl ChapterId {
    /// The chapter served when a reader arrives at the root path.
    pub const ENTRY: &'static str = "intro";

    /// Create a chapter ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier of the entry chapter.
    pub fn entry() -> Self {
        Self::new(Self::ENTRY)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ChapterId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChapterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ChapterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ChapterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A choice offered at the end of a chapter - a directed edge to another chapter.
///
/// The destination is not required to exist in the story; a dangling choice
/// only surfaces as "not found" when a reader follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Label shown to the reader.
    #[serde(default)]
    pub text: String,

    /// Destination chapter.
    #[serde(default)]
    pub chapter: ChapterId,
}

impl Choice {
    pub fn new(text: impl Into<String>, chapter: impl Into<ChapterId>) -> Self {
        Self {
            text: text.into(),
            chapter: chapter.into(),
        }
    }
}

/// A single node of the narrative: a heading, some prose, and the choices
/// leading onward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Chapter {
    #[serde(default)]
    pub title: String,

    /// Text blocks, rendered in order.
    #[serde(default)]
    pub paragraphs: Vec<String>,

    /// Outgoing choices, rendered in order. Empty for an ending.
    #[serde(default)]
    pub options: Vec<Choice>,
}

impl Chapter {
    /// Create a chapter with the given title and no content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Append a paragraph.
    pub fn with_paragraph(mut self, paragraph: impl Into<String>) -> Self {
        self.paragraphs.push(paragraph.into());
        self
    }

    /// Append a choice.
    pub fn with_option(mut self, text: impl Into<String>, chapter: impl Into<ChapterId>) -> Self {
        self.options.push(Choice::new(text, chapter));
        self
    }

    /// Check if the chapter ends the story (offers no choices).
    pub fn is_ending(&self) -> bool {
        self.options.is_empty()
    }

    /// Destinations of all choices, in order.
    pub fn targets(&self) -> impl Iterator<Item = &ChapterId> {
        self.options.iter().map(|o| &o.chapter)
    }
}
