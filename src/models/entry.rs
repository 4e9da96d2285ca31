use serde_json::Value;

/// One decoded unit of content extracted from the loaded file.
///
/// The `name` is the member path inside the archive, or the bare filename for
/// a single-file load. Entries are immutable once created and are replaced
/// wholesale whenever a new top-level file is loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct TakeoutEntry {
    pub name: String,
    pub content: Value,
}

/// Top-level file kinds accepted by the loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Compressed multi-member container.
    Zip,
    /// A single JSON document.
    Json,
}

impl SourceKind {
    /// Detect the source kind from a filename extension.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.rsplit('.').next().map(|s| s.to_lowercase()).as_deref() {
            Some("zip") => Some(Self::Zip),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Archive member kinds that reach a decoder.
///
/// Members with any other extension are filtered out before decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    /// Plain JSON document (`.json`).
    Json,
    /// Script file holding a single `<name> = <json>` assignment (`.js`).
    Script,
    /// Delimiter-separated table with a header row (`.csv`).
    Tabular,
}

impl MemberKind {
    /// Detect the member kind from a path extension.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.rsplit('.').next().map(|s| s.to_lowercase()).as_deref() {
            Some("json") => Some(Self::Json),
            Some("js") => Some(Self::Script),
            Some("csv") => Some(Self::Tabular),
            _ => None,
        }
    }
}
