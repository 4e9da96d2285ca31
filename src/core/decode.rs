//! Per-format member decoders.
//!
//! Each decoder turns raw member text into a JSON-compatible value:
//!
//! - `.json` members are strict-parsed.
//! - `.js` members hold a single `<name> = <json>` assignment (Twitter-style
//!   takeouts); the prefix is stripped and the remainder strict-parsed. Script
//!   members outside the `data/` directory decode to `None` (skip, not error).
//! - `.csv` members are parsed as a header row plus typed records; only the
//!   first record is surfaced, matching the one-representative-record layout
//!   of tabular export files.

use serde_json::Value;

use crate::config::DATA_PATH_MARKER;
use crate::core::error::ParseError;
use crate::models::MemberKind;

/// Successful decode of one archive member.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedMember {
    pub content: Value,
    /// Non-fatal problems encountered while decoding (e.g. malformed CSV rows).
    pub warnings: Vec<String>,
}

impl DecodedMember {
    fn new(content: Value) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }
}

/// Decode one member by extension.
///
/// Returns `Ok(None)` when the member should be silently omitted (unrecognized
/// extension, or a script member outside the data-path convention).
pub fn decode_member(name: &str, text: &str) -> Result<Option<DecodedMember>, ParseError> {
    match MemberKind::from_path(name) {
        Some(MemberKind::Json) => parse_json(name, text).map(|v| Some(DecodedMember::new(v))),
        Some(MemberKind::Script) => decode_script(name, text),
        Some(MemberKind::Tabular) => decode_tabular(name, text).map(Some),
        None => Ok(None),
    }
}

/// Strict JSON parse.
fn parse_json(name: &str, text: &str) -> Result<Value, ParseError> {
    serde_json::from_str(text).map_err(|e| ParseError::new(name, e.to_string()))
}

/// Decode an assignment-wrapped script member.
///
/// Strips the shortest leading `<anything> = ` prefix (split at the first
/// ` = `) and strict-parses the remainder. Text without the separator is
/// parsed as-is, which fails with a [`ParseError`] unless it happens to be
/// valid JSON.
fn decode_script(name: &str, text: &str) -> Result<Option<DecodedMember>, ParseError> {
    if !name.contains(DATA_PATH_MARKER) {
        return Ok(None);
    }
    let payload = text.split_once(" = ").map(|(_, rest)| rest).unwrap_or(text);
    parse_json(name, payload).map(|v| Some(DecodedMember::new(v)))
}

/// Decode a tabular member.
///
/// The first row is the header (cells trimmed); the first well-formed data
/// row becomes the member content as a header-to-typed-cell mapping. Rows
/// with a field-count mismatch or a CSV-level error are recorded as warnings
/// and skipped.
fn decode_tabular(name: &str, text: &str) -> Result<DecodedMember, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ParseError::new(name, e.to_string()))?
        .clone();

    let mut warnings = Vec::new();
    let mut first_row: Option<Value> = None;

    for (index, result) in reader.records().enumerate() {
        // Header is row 1, so data rows start at 2.
        let row_number = index + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warnings.push(format!("row {}: {}", row_number, e));
                continue;
            }
        };
        if record.len() != headers.len() {
            warnings.push(format!(
                "row {}: expected {} fields, got {}",
                row_number,
                headers.len(),
                record.len()
            ));
            continue;
        }
        if first_row.is_none() {
            let mut row = serde_json::Map::new();
            for (header, cell) in headers.iter().zip(record.iter()) {
                row.insert(header.to_string(), coerce_cell(cell));
            }
            first_row = Some(Value::Object(row));
        }
    }

    match first_row {
        Some(content) => Ok(DecodedMember { content, warnings }),
        None => Err(ParseError::new(name, "no data rows")),
    }
}

/// Best-effort cell typing: boolean, integer, float, then string.
fn coerce_cell(cell: &str) -> Value {
    if cell.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if cell.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(n) = cell.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = cell.parse::<f64>()
        && f.is_finite()
    {
        return Value::from(f);
    }
    Value::String(cell.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decoded(name: &str, text: &str) -> DecodedMember {
        decode_member(name, text)
            .expect("decode should succeed")
            .expect("member should not be skipped")
    }

    #[test]
    fn test_json_round_trip() {
        let member = decoded("profile.json", r#"{"x": 1, "y": [true, null]}"#);
        let serialized = serde_json::to_string(&member.content).unwrap();
        let reparsed: Value = serde_json::from_str(&serialized).unwrap();
        assert_eq!(reparsed, member.content);
    }

    #[test]
    fn test_malformed_json_fails() {
        let result = decode_member("broken.json", "{not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_script_with_data_path() {
        let member = decoded("takeout/data/tweets.js", r#"window.YTD.tweets = {"a":1}"#);
        assert_eq!(member.content, json!({"a": 1}));
    }

    #[test]
    fn test_script_outside_data_path_skipped() {
        let result = decode_member("assets/app.js", r#"window.YTD.tweets = {"a":1}"#).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_script_splits_at_first_separator_only() {
        let member = decoded("x/data/note.js", r#"const note = {"text":"a = b"}"#);
        assert_eq!(member.content, json!({"text": "a = b"}));
    }

    #[test]
    fn test_tabular_first_row_with_typed_cells() {
        let member = decoded(
            "ads.csv",
            " id , seen ,score,label\n42,true,4.5,hello\n43,false,1.0,world\n",
        );
        assert_eq!(
            member.content,
            json!({"id": 42, "seen": true, "score": 4.5, "label": "hello"})
        );
        assert!(member.warnings.is_empty());
    }

    #[test]
    fn test_tabular_short_row_is_warning_not_error() {
        let member = decoded("t.csv", "a,b\n1\n2,3\n");
        assert_eq!(member.content, json!({"a": 2, "b": 3}));
        assert_eq!(member.warnings.len(), 1);
        assert!(member.warnings[0].contains("row 2"));
    }

    #[test]
    fn test_tabular_without_data_rows_fails() {
        assert!(decode_member("empty.csv", "a,b\n").is_err());
    }

    #[test]
    fn test_unrecognized_extension_skipped() {
        assert_eq!(decode_member("photo.png", "binary").unwrap(), None);
    }
}
