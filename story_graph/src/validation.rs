//! Optional structural checks over a loaded story.
//!
//! Loading never runs these. They exist for hosts that want a stricter
//! contract than "it decoded", e.g. refusing to serve a story with broken links.

use std::collections::{HashSet, VecDeque};

use crate::chapter::ChapterId;
use crate::error::ValidationError;
use crate::story::Story;

/// A single structural problem found in a story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A choice points at a chapter that does not exist.
    DanglingChoice {
        from: ChapterId,
        text: String,
        target: ChapterId,
    },

    /// There is no entry chapter to start from.
    MissingEntry,

    /// A chapter cannot be reached from the entry chapter.
    Unreachable { chapter: ChapterId },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::DanglingChoice { from, text, target } => {
                write!(f, "choice '{text}' in '{from}' points to missing chapter '{target}'")
            }
            ValidationIssue::MissingEntry => {
                write!(f, "missing entry chapter '{}'", ChapterId::ENTRY)
            }
            ValidationIssue::Unreachable { chapter } => {
                write!(f, "chapter '{chapter}' is unreachable from '{}'", ChapterId::ENTRY)
            }
        }
    }
}

/// Result of [`Story::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Dangling choices only.
    pub fn dangling(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i, ValidationIssue::DanglingChoice { .. }))
    }

    /// Turn the report into an error if it found anything.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_clean() {
            return Ok(());
        }
        let summary = self
            .issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(ValidationError {
            count: self.issues.len(),
            summary,
        })
    }
}

impl Story {
    /// Check the story for dangling choices, a missing entry chapter, and
    /// chapters unreachable from the entry.
    ///
    /// Issues are reported in a stable order: dangling choices (by source
    /// chapter, then choice order), then the missing entry, then unreachable
    /// chapters sorted by ID.
    pub fn validate(&self) -> ValidationReport {
        let mut issues = Vec::new();

        let mut ids: Vec<&ChapterId> = self.chapter_ids().collect();
        ids.sort();

        for id in &ids {
            let Some(chapter) = self.get(id.as_str()) else {
                continue;
            };
            for choice in &chapter.options {
                if !self.contains(choice.chapter.as_str()) {
                    issues.push(ValidationIssue::DanglingChoice {
                        from: (*id).clone(),
                        text: choice.text.clone(),
                        target: choice.chapter.clone(),
                    });
                }
            }
        }

        if self.entry_chapter().is_none() {
            issues.push(ValidationIssue::MissingEntry);
        } else {
            let reachable = self.reachable_from(ChapterId::ENTRY);
            for id in ids {
                if !reachable.contains(id) {
                    issues.push(ValidationIssue::Unreachable {
                        chapter: id.clone(),
                    });
                }
            }
        }

        ValidationReport { issues }
    }

    /// All chapters reachable from `start` by following choices, including
    /// `start` itself. Dangling targets are skipped.
    pub fn reachable_from(&self, start: &str) -> HashSet<&ChapterId> {
        let mut visited: HashSet<&ChapterId> = HashSet::new();
        let mut queue: VecDeque<&ChapterId> = VecDeque::new();

        if let Some((id, _)) = self.get_key_value(start) {
            visited.insert(id);
            queue.push_back(id);
        }

        while let Some(id) = queue.pop_front() {
            let Some(chapter) = self.get(id.as_str()) else {
                continue;
            };
            for target in chapter.targets() {
                // Use the key owned by the story so the set borrows from `self`.
                if let Some((key, _)) = self.get_key_value(target.as_str()) {
                    if visited.insert(key) {
                        queue.push_back(key);
                    }
                }
            }
        }

        visited
    }
}
