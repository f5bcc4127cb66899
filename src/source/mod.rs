//! Content sources.
//!
//! A content document is read once, either from a file or from piped stdin,
//! and handed to the parser. Skipped records are logged here so both the
//! terminal browser and `--print` report them the same way.

use crate::model::error::InputError;
use crate::model::{AppError, ContentDocument};
use crate::parser::parse_document;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Path argument that selects stdin.
pub const STDIN_MARKER: &str = "-";

/// Where the content document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// A JSON file on disk.
    File(PathBuf),
    /// JSON piped on stdin.
    Stdin,
}

impl ContentSource {
    /// Read the raw document text.
    ///
    /// # Errors
    ///
    /// `InputError::FileNotFound` for a missing file, `InputError::NoInput`
    /// when stdin is an interactive terminal, `InputError::Io` otherwise.
    pub fn read_to_string(&self) -> Result<String, InputError> {
        match self {
            ContentSource::File(path) => read_file(path),
            ContentSource::Stdin => {
                let stdin = std::io::stdin();
                if stdin.is_terminal() {
                    return Err(InputError::NoInput);
                }
                read_all(stdin.lock())
            }
        }
    }

    /// Read and parse the document.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InputRead` if the source can't be read and
    /// `AppError::Content` if the document as a whole is unusable.
    pub fn load(&self) -> Result<ContentDocument, AppError> {
        let raw = self.read_to_string()?;
        let document = load_from_str(&raw)?;
        info!(
            source = %self,
            loaded = document.loaded_count(),
            skipped = document.malformed.len(),
            "Content loaded"
        );
        Ok(document)
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::File(path) => write!(f, "{}", path.display()),
            ContentSource::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Pick the content source from the positional argument.
///
/// `-` selects stdin; any other path must exist.
///
/// # Errors
///
/// Returns `InputError::NoInput` when no path is given and
/// `InputError::FileNotFound` when the path does not exist.
pub fn detect_content_source(path: Option<PathBuf>) -> Result<ContentSource, InputError> {
    match path {
        None => Err(InputError::NoInput),
        Some(path) if path.as_os_str() == STDIN_MARKER => Ok(ContentSource::Stdin),
        Some(path) if !path.exists() => Err(InputError::FileNotFound { path }),
        Some(path) => Ok(ContentSource::File(path)),
    }
}

/// Parse a document and log every skipped record.
pub fn load_from_str(raw: &str) -> Result<ContentDocument, AppError> {
    let document = parse_document(raw)?;
    for record in &document.malformed {
        warn!("Skipped content record {}", record.error_message());
    }
    Ok(document)
}

fn read_file(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

fn read_all<R: Read>(mut reader: R) -> Result<String, InputError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(raw)
}
