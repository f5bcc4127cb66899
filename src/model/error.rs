//! Error types for folio.
//!
//! Errors are structured `thiserror` enums composed with `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Content file/stdin reading failures
//!   - [`ContentError`] - The content document as a whole is unusable
//!   - [`ConfigError`] - Config file cannot be read or parsed
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Per-record problems are **non-fatal**: a record with a missing field becomes a
//! [`RecordError`] attached to a `MalformedRecord` and is skipped, a record with an
//! unusable tag field still loads with `FacetTags::Malformed`. The discovery engine
//! itself has no error paths: page requests clamp and empty results are a state.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the content document.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// The content document could not be interpreted.
    #[error("Invalid content: {0}")]
    Content(#[from] ContentError),

    /// The configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading content from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified content file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use folio::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// No content path was given on the command line or in the configuration.
    #[error("No content source: pass a content file, `-` for stdin, or set content_path")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The content document as a whole could not be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The document is not valid JSON.
    #[error("Invalid JSON: {message}")]
    InvalidJson {
        /// Parser error message from `serde_json`.
        message: String,
    },

    /// The document parsed but its top level is not a JSON object.
    #[error("Content document must be a JSON object with posts/projects/videos arrays")]
    NotAnObject,

    /// A top-level section is present but is not an array.
    #[error("Section '{section}' must be an array")]
    SectionNotArray {
        /// Section name ("posts", "projects" or "videos").
        section: &'static str,
    },
}

/// Why a single content record was skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record is not a JSON object.
    #[error("record is not an object")]
    NotAnObject,

    /// A required field is missing or not a string.
    #[error("missing required field '{field}'")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A field has the wrong JSON type.
    #[error("invalid record: {message}")]
    InvalidRecord {
        /// Deserializer error message.
        message: String,
    },

    /// The date field could not be parsed as `YYYY-MM-DD` or RFC 3339.
    #[error("invalid date '{raw}'")]
    InvalidDate {
        /// The raw date value.
        raw: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn input_error_file_not_found_display() {
        let err = InputError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("File not found"));
        assert!(msg.contains("/tmp/missing.json"));
    }

    #[test]
    fn input_error_no_input_display() {
        let msg = InputError::NoInput.to_string();
        assert!(msg.contains("No content source"));
    }

    #[test]
    fn input_error_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let input_err: InputError = io_err.into();
        let msg = input_err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn content_error_section_display_names_section() {
        let err = ContentError::SectionNotArray { section: "posts" };
        assert!(err.to_string().contains("'posts'"));
    }

    #[test]
    fn record_error_missing_field_display() {
        let err = RecordError::MissingField { field: "title" };
        assert_eq!(err.to_string(), "missing required field 'title'");
    }

    #[test]
    fn app_error_from_content_error() {
        let app_err: AppError = ContentError::NotAnObject.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Invalid content"));
        assert!(msg.contains("JSON object"));
    }

    #[test]
    fn app_error_nested_io_through_input_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let input_err: InputError = io_err.into();
        let app_err: AppError = input_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to read input"));
        assert!(msg.contains("IO error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        assert!(app_err.to_string().contains("Terminal error"));
    }
}
