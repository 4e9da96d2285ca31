//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization:
//!
//! - [`LoadError`] - whole-file failures surfaced to the user
//! - [`ParseError`] - a single archive member's text does not decode
//!
//! A [`ParseError`] is contained at the extractor boundary: the member is
//! dropped and extraction continues. A [`LoadError`] aborts the load.

use std::fmt;

/// Whole-file failures raised while loading a takeout.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// Top-level file has an unsupported extension (validation).
    UnsupportedFile,
    /// The browser could not read the selected file.
    FileRead,
    /// The container could not be opened or enumerated.
    Archive(String),
    /// A single-file load did not decode.
    Parse(String),
    /// The container produced zero usable entries.
    NoEntries,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFile => write!(f, "Please load a zip or json file"),
            Self::FileRead => write!(f, "Could not read the selected file"),
            Self::Archive(msg) => write!(f, "Could not process the archive: {}", msg),
            Self::Parse(msg) => write!(f, "Could not parse the file: {}", msg),
            Self::NoEntries => write!(f, "No decodable files found in the archive"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Decode failure for one archive member.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Member path inside the archive.
    pub name: String,
    /// Human-readable decode failure.
    pub message: String,
}

impl ParseError {
    pub fn new(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error parsing {}: {}", self.name, self.message)
    }
}

impl std::error::Error for ParseError {}
