//! The story graph - every chapter of a narrative, keyed by identifier.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

use crate::chapter::{Chapter, ChapterId};
use crate::error::StoryError;

/// The complete, static narrative.
///
/// Chapters are keyed by [`ChapterId`]. Choices may point at identifiers that
/// are not present; cycles are allowed. A story is built once and then only
/// read, so it is typically shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Story {
    chapters: HashMap<ChapterId, Chapter>,
}

/// Decode a story from a byte stream.
///
/// Shorthand for [`Story::from_reader`].
pub fn parse<R: Read>(reader: R) -> Result<Story, StoryError> {
    Story::from_reader(reader)
}

impl Story {
    /// Create a new empty story.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a story from a byte stream containing a JSON object of chapters.
    ///
    /// Only the shape is checked. A later duplicate key replaces an earlier
    /// one, and dangling choice targets are accepted.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoryError> {
        serde_json::from_reader(reader).map_err(StoryError::decode)
    }

    /// Decode a story from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, StoryError> {
        serde_json::from_str(json).map_err(StoryError::decode)
    }

    /// Encode the story back to compact JSON.
    pub fn to_json_string(&self) -> Result<String, StoryError> {
        serde_json::to_string(self).map_err(StoryError::Encode)
    }

    /// Encode the story back to indented JSON.
    pub fn to_json_string_pretty(&self) -> Result<String, StoryError> {
        serde_json::to_string_pretty(self).map_err(StoryError::Encode)
    }

    /// Add a chapter, returning the one it replaced if the ID was taken.
    pub fn insert(&mut self, id: impl Into<ChapterId>, chapter: Chapter) -> Option<Chapter> {
        self.chapters.insert(id.into(), chapter)
    }

    /// Add a chapter, builder style.
    pub fn with_chapter(mut self, id: impl Into<ChapterId>, chapter: Chapter) -> Self {
        self.insert(id, chapter);
        self
    }

    /// Look up a chapter by identifier.
    pub fn get(&self, id: &str) -> Option<&Chapter> {
        self.chapters.get(id)
    }

    pub(crate) fn get_key_value(&self, id: &str) -> Option<(&ChapterId, &Chapter)> {
        self.chapters.get_key_value(id)
    }

    /// Check if a chapter exists.
    pub fn contains(&self, id: &str) -> bool {
        self.chapters.contains_key(id)
    }

    /// The chapter readers start at, if the story has one.
    pub fn entry_chapter(&self) -> Option<&Chapter> {
        self.get(ChapterId::ENTRY)
    }

    /// Get the total number of chapters.
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// All chapter identifiers, in no particular order.
    pub fn chapter_ids(&self) -> impl Iterator<Item = &ChapterId> {
        self.chapters.keys()
    }

    /// All chapters with their identifiers, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&ChapterId, &Chapter)> {
        self.chapters.iter()
    }
}

impl FromIterator<(ChapterId, Chapter)> for Story {
    fn from_iter<I: IntoIterator<Item = (ChapterId, Chapter)>>(iter: I) -> Self {
        Self {
            chapters: iter.into_iter().collect(),
        }
    }
}
