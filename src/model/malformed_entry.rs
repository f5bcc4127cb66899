//! Records that could not be turned into content.
//!
//! When a content record lacks a required field we keep a `MalformedRecord`
//! so the problem can be logged and counted while the rest of the document
//! still loads.

use crate::model::RecordError;
use std::fmt;

/// Top-level section of the content document a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentSection {
    /// `posts` array.
    Posts,
    /// `projects` array.
    Projects,
    /// `videos` array.
    Videos,
}

impl ContentSection {
    /// Key of the section in the content document.
    pub fn key(&self) -> &'static str {
        match self {
            ContentSection::Posts => "posts",
            ContentSection::Projects => "projects",
            ContentSection::Videos => "videos",
        }
    }
}

impl fmt::Display for ContentSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A content record that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    section: ContentSection,
    index: usize,
    error: RecordError,
}

impl MalformedRecord {
    /// Create a new malformed record.
    ///
    /// # Arguments
    ///
    /// * `section` - Section the record was read from
    /// * `index` - 0-based position of the record within its section
    /// * `error` - Why the record was rejected
    pub fn new(section: ContentSection, index: usize, error: RecordError) -> Self {
        Self {
            section,
            index,
            error,
        }
    }

    /// Section the record belongs to.
    pub fn section(&self) -> ContentSection {
        self.section
    }

    /// 0-based position within the section.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Why the record was rejected.
    pub fn error(&self) -> &RecordError {
        &self.error
    }

    /// Human-readable message for logs.
    pub fn error_message(&self) -> String {
        format!("{}[{}]: {}", self.section, self.index, self.error)
    }
}
