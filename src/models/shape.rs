//! Privacy-scrubbed structure summaries.
//!
//! A [`ShapeDescriptor`] mirrors the nesting of a decoded value but replaces
//! every leaf with a primitive-type tag, so it can be shared without exposing
//! any content.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// How non-empty arrays are summarized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArrayPolicy {
    /// Represent an array by the shape of its first element only.
    #[default]
    SampleFirst,
    /// Represent an array by the shape of every element.
    EveryElement,
}

/// Structural summary of a decoded value.
///
/// Isomorphic in nesting to the source value: objects keep their keys in
/// order, arrays are collapsed or mapped per [`ArrayPolicy`], and scalars
/// become type tags. Serializes to the wire tags used in the exported report
/// (`"string"`, `"number"`, `"boolean"`, `"null"`, `"emptyarray"`,
/// `"emptydict"`).
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeDescriptor {
    Null,
    Boolean,
    Number,
    String,
    EmptyArray,
    EmptyObject,
    Array(Vec<ShapeDescriptor>),
    Object(Vec<(String, ShapeDescriptor)>),
}

impl ShapeDescriptor {
    /// Wire tag for leaf descriptors; `None` for arrays and objects.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Null => Some("null"),
            Self::Boolean => Some("boolean"),
            Self::Number => Some("number"),
            Self::String => Some("string"),
            Self::EmptyArray => Some("emptyarray"),
            Self::EmptyObject => Some("emptydict"),
            Self::Array(_) | Self::Object(_) => None,
        }
    }
}

impl Serialize for ShapeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            leaf => serializer.serialize_str(leaf.tag().expect("leaf descriptor has a tag")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_tags() {
        assert_eq!(ShapeDescriptor::Null.tag(), Some("null"));
        assert_eq!(ShapeDescriptor::Number.tag(), Some("number"));
        assert_eq!(ShapeDescriptor::EmptyArray.tag(), Some("emptyarray"));
        assert_eq!(ShapeDescriptor::EmptyObject.tag(), Some("emptydict"));
        assert_eq!(ShapeDescriptor::Array(vec![]).tag(), None);
    }

    #[test]
    fn test_serialize_nested() {
        let shape = ShapeDescriptor::Object(vec![
            (
                "a".to_string(),
                ShapeDescriptor::Array(vec![ShapeDescriptor::Number]),
            ),
            ("b".to_string(), ShapeDescriptor::String),
        ]);
        let json = serde_json::to_string(&shape).unwrap();
        assert_eq!(json, r#"{"a":["number"],"b":"string"}"#);
    }
}
