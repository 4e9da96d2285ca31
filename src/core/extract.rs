//! Archive/single-file extraction.
//!
//! Works over in-memory bytes; the async boundary (reading the browser
//! `File`) lives in `utils::file`. Members are decoded in enumeration order,
//! so the resulting entry order is reproducible.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::core::decode::decode_member;
use crate::core::error::LoadError;
use crate::models::{MemberKind, SourceKind, TakeoutEntry};
use crate::utils::console;

/// Extract all decodable entries from a top-level file.
///
/// Dispatches on the filename extension: `.json` yields a single entry,
/// `.zip` enumerates the container. Anything else fails validation before
/// extraction is attempted.
pub fn extract_entries(file_name: &str, bytes: &[u8]) -> Result<Vec<TakeoutEntry>, LoadError> {
    match SourceKind::from_path(file_name) {
        Some(SourceKind::Json) => extract_single_json(file_name, bytes),
        Some(SourceKind::Zip) => extract_zip(bytes),
        None => Err(LoadError::UnsupportedFile),
    }
}

/// Single-file mode: the whole file is one JSON document.
fn extract_single_json(file_name: &str, bytes: &[u8]) -> Result<Vec<TakeoutEntry>, LoadError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| LoadError::Parse("file is not valid UTF-8 text".to_string()))?;
    let content = serde_json::from_str(text).map_err(|e| LoadError::Parse(e.to_string()))?;
    Ok(vec![TakeoutEntry {
        name: file_name.to_string(),
        content,
    }])
}

/// Container mode: enumerate members and decode each independently.
///
/// A member that fails to decode is logged and dropped; it never aborts
/// extraction of the remaining members. Directories and unrecognized
/// extensions are skipped before decoding.
fn extract_zip(bytes: &[u8]) -> Result<Vec<TakeoutEntry>, LoadError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| LoadError::Archive(e.to_string()))?;

    let mut entries = Vec::new();
    for index in 0..archive.len() {
        let mut member = match archive.by_index(index) {
            Ok(member) => member,
            Err(e) => {
                console::warn(&format!("skipping unreadable member {}: {}", index, e));
                continue;
            }
        };
        if member.is_dir() {
            continue;
        }
        let name = member.name().to_string();
        if MemberKind::from_path(&name).is_none() {
            continue;
        }

        let mut text = String::new();
        if let Err(e) = member.read_to_string(&mut text) {
            console::warn(&format!("error reading {}: {}", name, e));
            continue;
        }

        match decode_member(&name, &text) {
            Ok(Some(decoded)) => {
                for warning in &decoded.warnings {
                    console::warn(&format!("{}: {}", name, warning));
                }
                entries.push(TakeoutEntry {
                    name,
                    content: decoded.content,
                });
            }
            // Script member outside the data-path convention: omit silently.
            Ok(None) => {}
            Err(e) => console::warn(&e.to_string()),
        }
    }

    if entries.is_empty() {
        return Err(LoadError::NoEntries);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn build_zip(members: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, contents) in members {
            writer.start_file(*name, options).unwrap();
            writer.write_all(contents.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_single_json_file() {
        let entries = extract_entries("export.json", br#"{"x": 1}"#).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "export.json");
        assert_eq!(entries[0].content, json!({"x": 1}));
    }

    #[test]
    fn test_single_json_parse_failure() {
        assert!(matches!(
            extract_entries("export.json", b"{oops"),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_unsupported_top_level_extension() {
        assert!(matches!(
            extract_entries("export.tar", b""),
            Err(LoadError::UnsupportedFile)
        ));
    }

    #[test]
    fn test_corrupt_container() {
        assert!(matches!(
            extract_entries("takeout.zip", b"not a zip"),
            Err(LoadError::Archive(_))
        ));
    }

    #[test]
    fn test_malformed_member_is_dropped() {
        let bytes = build_zip(&[("good.json", r#"{"a":1}"#), ("bad.json", "{oops")]);
        let entries = extract_entries("takeout.zip", &bytes).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "good.json");
    }

    #[test]
    fn test_no_matching_members_is_distinguishable() {
        let bytes = build_zip(&[("readme.txt", "hello"), ("photo.png", "bits")]);
        assert!(matches!(
            extract_entries("takeout.zip", &bytes),
            Err(LoadError::NoEntries)
        ));
    }

    #[test]
    fn test_directories_and_non_data_scripts_skipped() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        writer.add_directory("data/", options).unwrap();
        writer.start_file("assets/app.js", options).unwrap();
        writer.write_all(b"window.x = {\"a\":1}").unwrap();
        writer.start_file("data/tweets.js", options).unwrap();
        writer
            .write_all(br#"window.YTD.tweets = [{"id": 7}]"#)
            .unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let entries = extract_entries("takeout.zip", &bytes).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "data/tweets.js");
        assert_eq!(entries[0].content, json!([{"id": 7}]));
    }

    #[test]
    fn test_enumeration_order_preserved() {
        let bytes = build_zip(&[
            ("c.json", "1"),
            ("a.json", "2"),
            ("b.csv", "k\n3\n"),
            ("d.json", "4"),
        ]);
        let entries = extract_entries("takeout.zip", &bytes).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["c.json", "a.json", "b.csv", "d.json"]);
    }
}
