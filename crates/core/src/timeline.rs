//! Validated, ordered collection of timeline entries.

use std::collections::HashSet;
use std::ops::Index;

use crate::error::{Result, TimelineError};
use crate::models::TimelineEntry;

/// An ordered, non-empty sequence of entries with unique decade labels.
///
/// Constructed once and shared read-only (typically behind `Arc`) with the
/// navigation controller and the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Build a timeline, rejecting empty input and duplicate decades.
    pub fn new(entries: Vec<TimelineEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(TimelineError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.decade) {
                return Err(TimelineError::DuplicateDecade(entry.decade.to_string()));
            }
        }

        Ok(Self { entries })
    }

    /// Number of entries. Always at least one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TimelineEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }

    /// Index of the entry with the given decade label.
    pub fn position_of(&self, decade: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.decade == decade)
    }

    /// Index of the last entry.
    pub fn last_index(&self) -> usize {
        self.entries.len() - 1
    }
}

impl Index<usize> for Timeline {
    type Output = TimelineEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
