//! Structure inference and report export.
//!
//! [`infer_shape`] recursively maps a decoded value to a [`ShapeDescriptor`]:
//! same nesting, keys preserved in order, every scalar replaced by its type
//! tag. Pure and total over any JSON-compatible input; recursion terminates
//! because structural depth strictly decreases and decoded text is acyclic.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::models::{ArrayPolicy, ShapeDescriptor, TakeoutEntry};

/// Infer the shape of a decoded value.
pub fn infer_shape(value: &Value, policy: ArrayPolicy) -> ShapeDescriptor {
    match value {
        Value::Null => ShapeDescriptor::Null,
        Value::Bool(_) => ShapeDescriptor::Boolean,
        Value::Number(_) => ShapeDescriptor::Number,
        Value::String(_) => ShapeDescriptor::String,
        Value::Array(items) => {
            if items.is_empty() {
                return ShapeDescriptor::EmptyArray;
            }
            let shapes = match policy {
                ArrayPolicy::SampleFirst => vec![infer_shape(&items[0], policy)],
                ArrayPolicy::EveryElement => {
                    items.iter().map(|item| infer_shape(item, policy)).collect()
                }
            };
            ShapeDescriptor::Array(shapes)
        }
        Value::Object(fields) => {
            if fields.is_empty() {
                return ShapeDescriptor::EmptyObject;
            }
            ShapeDescriptor::Object(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), infer_shape(value, policy)))
                    .collect(),
            )
        }
    }
}

/// Aggregate, exportable mapping of entry identifier to shape descriptor.
///
/// Built only at export time; preserves entry order.
#[derive(Clone, Debug, PartialEq)]
pub struct StructureReport(Vec<(String, ShapeDescriptor)>);

impl StructureReport {
    /// Infer the shape of every entry in collection order.
    pub fn build(entries: &[TakeoutEntry], policy: ArrayPolicy) -> Self {
        Self(
            entries
                .iter()
                .map(|entry| (entry.name.clone(), infer_shape(&entry.content, policy)))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize to the downloadable artifact: pretty-printed (2-space
    /// indent) JSON mapping identifier to descriptor.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for StructureReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, shape) in &self.0 {
            map.serialize_entry(name, shape)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract_entries;
    use serde_json::json;

    fn sample_first(value: &Value) -> ShapeDescriptor {
        infer_shape(value, ArrayPolicy::SampleFirst)
    }

    #[test]
    fn test_scalar_tags() {
        assert_eq!(sample_first(&Value::Null), ShapeDescriptor::Null);
        assert_eq!(sample_first(&json!(42)), ShapeDescriptor::Number);
        assert_eq!(sample_first(&json!("hi")), ShapeDescriptor::String);
        assert_eq!(sample_first(&json!(true)), ShapeDescriptor::Boolean);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(sample_first(&json!([])), ShapeDescriptor::EmptyArray);
        assert_eq!(sample_first(&json!({})), ShapeDescriptor::EmptyObject);
    }

    #[test]
    fn test_object_keys_preserved_in_order() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": [1, 2], "m": "x"}"#).unwrap();
        let shape = sample_first(&value);
        let ShapeDescriptor::Object(fields) = shape else {
            panic!("expected object shape");
        };
        let keys: Vec<_> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(
            fields[1].1,
            ShapeDescriptor::Array(vec![ShapeDescriptor::Number])
        );
        assert_eq!(fields[2].1, ShapeDescriptor::String);
    }

    #[test]
    fn test_array_policies() {
        let value = json!([1, "two", null]);
        assert_eq!(
            infer_shape(&value, ArrayPolicy::SampleFirst),
            ShapeDescriptor::Array(vec![ShapeDescriptor::Number])
        );
        assert_eq!(
            infer_shape(&value, ArrayPolicy::EveryElement),
            ShapeDescriptor::Array(vec![
                ShapeDescriptor::Number,
                ShapeDescriptor::String,
                ShapeDescriptor::Null,
            ])
        );
    }

    #[test]
    fn test_report_serialization_is_two_space_pretty() {
        let entries = vec![TakeoutEntry {
            name: "a.json".to_string(),
            content: json!({"x": 1}),
        }];
        let report = StructureReport::build(&entries, ArrayPolicy::SampleFirst);
        let text = report.to_pretty_json().unwrap();
        assert_eq!(text, "{\n  \"a.json\": {\n    \"x\": \"number\"\n  }\n}");
    }

    #[test]
    fn test_end_to_end_zip_to_report() {
        use std::io::{Cursor, Write};
        use zip::write::SimpleFileOptions;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        writer.start_file("a.json", options).unwrap();
        writer.write_all(br#"{"x":1}"#).unwrap();
        writer.start_file("b.csv", options).unwrap();
        writer.write_all(b"count,name\n3,alice\n").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let entries = extract_entries("takeout.zip", &bytes).unwrap();
        let report = StructureReport::build(&entries, ArrayPolicy::SampleFirst);
        let value: Value = serde_json::from_str(&report.to_pretty_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "a.json": {"x": "number"},
                "b.csv": {"count": "number", "name": "string"},
            })
        );
    }
}
