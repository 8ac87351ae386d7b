//! Smithy JSON AST model types for deserialization.
//!
//! Structure and enum members keep the order in which they appear in the
//! model document, so generated fields follow the service's declaration order.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Trait holding shape and member documentation.
pub const DOCUMENTATION_TRAIT: &str = "smithy.api#documentation";

/// Top-level Smithy model document.
#[derive(Debug, Deserialize)]
pub struct SmithyModel {
    /// Smithy version (e.g., "2.0").
    pub smithy: String,
    /// All shapes defined in the model, keyed by their full shape ID.
    pub shapes: HashMap<String, Shape>,
}

/// A single Smithy shape.
///
/// Only structures, operations, enums and lists carry data the generator
/// reads; every other kind is recognized by its `type` tag alone.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// A structure shape (struct).
    #[serde(rename = "structure")]
    Structure(StructureShape),
    /// An operation shape.
    #[serde(rename = "operation")]
    Operation(OperationShape),
    /// A string shape (simple type or alias).
    #[serde(rename = "string")]
    String,
    /// A boolean shape.
    #[serde(rename = "boolean")]
    Boolean,
    /// A 32-bit integer shape.
    #[serde(rename = "integer")]
    Integer,
    /// A 64-bit integer shape.
    #[serde(rename = "long")]
    Long,
    /// A double-precision float shape.
    #[serde(rename = "double")]
    Double,
    /// A timestamp shape.
    #[serde(rename = "timestamp")]
    Timestamp,
    /// A blob (binary data) shape.
    #[serde(rename = "blob")]
    Blob,
    /// An enum shape.
    #[serde(rename = "enum")]
    Enum(EnumShape),
    /// A list shape.
    #[serde(rename = "list")]
    List(ListShape),
    /// A map shape.
    #[serde(rename = "map")]
    Map,
    /// A union shape.
    #[serde(rename = "union")]
    Union,
    /// A service shape (ignored).
    #[serde(rename = "service")]
    Service,
    /// A resource shape (ignored).
    #[serde(rename = "resource")]
    Resource,
    /// An integer enum shape.
    #[serde(rename = "intEnum")]
    IntEnum,
    /// A float shape.
    #[serde(rename = "float")]
    Float,
}

impl Shape {
    /// The Smithy type keyword of this shape.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Structure(_) => "structure",
            Self::Operation(_) => "operation",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Double => "double",
            Self::Timestamp => "timestamp",
            Self::Blob => "blob",
            Self::Enum(_) => "enum",
            Self::List(_) => "list",
            Self::Map => "map",
            Self::Union => "union",
            Self::Service => "service",
            Self::Resource => "resource",
            Self::IntEnum => "intEnum",
            Self::Float => "float",
        }
    }
}

/// Shape or member traits, keyed by trait shape ID.
pub type Traits = HashMap<String, serde_json::Value>;

/// A structure (struct) shape.
#[derive(Debug, Deserialize)]
pub struct StructureShape {
    /// Members of the structure, in declaration order.
    #[serde(default)]
    pub members: Members,
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: Traits,
}

/// A member within a structure or enum.
#[derive(Debug, Deserialize)]
pub struct MemberShape {
    /// Target shape ID this member points to.
    pub target: String,
    /// Traits applied to this member.
    #[serde(default)]
    pub traits: Traits,
}

/// Named members in declaration order.
#[derive(Debug, Default)]
pub struct Members(Vec<(String, MemberShape)>);

impl Members {
    /// Iterate members in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MemberShape)> {
        self.0.iter().map(|(name, member)| (name.as_str(), member))
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'de> Deserialize<'de> for Members {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = Members;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of member names to member shapes")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, member)) = map.next_entry::<String, MemberShape>()? {
                    members.push((name, member));
                }
                Ok(Members(members))
            }
        }

        deserializer.deserialize_map(MembersVisitor)
    }
}

/// An operation shape.
#[derive(Debug, Deserialize)]
pub struct OperationShape {
    /// Input shape reference.
    pub input: Option<ShapeRef>,
    /// Output shape reference.
    pub output: Option<ShapeRef>,
}

/// A reference to another shape.
#[derive(Debug, Deserialize)]
pub struct ShapeRef {
    /// The full shape ID being referenced.
    pub target: String,
}

/// An enum shape.
#[derive(Debug, Deserialize)]
pub struct EnumShape {
    /// Enum variants (member name -> member shape), in declaration order.
    #[serde(default)]
    pub members: Members,
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: Traits,
}

/// A list shape.
#[derive(Debug, Deserialize)]
pub struct ListShape {
    /// The shape of the list's elements.
    pub member: ShapeRef,
}

impl SmithyModel {
    /// Read and parse a Smithy JSON AST file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model file: {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse Smithy JSON model: {}", path.display()))
    }

    /// Get the short name from a fully qualified shape ID.
    ///
    /// For example, `com.amazonaws.rds#DBCluster` returns `DBCluster`.
    pub fn short_name(shape_id: &str) -> &str {
        shape_id.rsplit_once('#').map_or(shape_id, |(_, name)| name)
    }
}

/// First sentence of a documentation trait, with HTML markup removed.
pub fn documentation(traits: &Traits) -> Option<String> {
    let html = traits.get(DOCUMENTATION_TRAIT)?.as_str()?;
    let summary = doc_summary(html);
    (!summary.is_empty()).then_some(summary)
}

/// Strip tags, collapse whitespace and keep the first sentence.
pub fn doc_summary(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' if !in_tag => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            _ => text.push(c),
        }
    }

    let mut collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if let Some(idx) = collapsed.find(". ") {
        collapsed.truncate(idx + 1);
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_keep_member_declaration_order() {
        let json = r#"{
            "smithy": "2.0",
            "shapes": {
                "com.amazonaws.rds#Tag": {
                    "type": "structure",
                    "members": {
                        "Value": { "target": "com.amazonaws.rds#String" },
                        "Key": { "target": "com.amazonaws.rds#String" },
                        "Another": { "target": "com.amazonaws.rds#String" }
                    }
                }
            }
        }"#;
        let model: SmithyModel = serde_json::from_str(json).unwrap();
        let Some(Shape::Structure(tag)) = model.shapes.get("com.amazonaws.rds#Tag") else {
            panic!("expected structure shape");
        };
        let names: Vec<&str> = tag.members.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Value", "Key", "Another"]);
        assert_eq!(tag.members.len(), 3);
    }

    #[test]
    fn test_should_parse_operation_and_service_shapes() {
        let json = r#"{
            "smithy": "2.0",
            "shapes": {
                "com.amazonaws.rds#AmazonRDSv19": {
                    "type": "service",
                    "version": "2014-10-31",
                    "operations": []
                },
                "com.amazonaws.rds#AddTagsToResource": {
                    "type": "operation",
                    "input": { "target": "com.amazonaws.rds#AddTagsToResourceMessage" },
                    "output": { "target": "smithy.api#Unit" }
                }
            }
        }"#;
        let model: SmithyModel = serde_json::from_str(json).unwrap();
        let Some(Shape::Operation(op)) = model.shapes.get("com.amazonaws.rds#AddTagsToResource")
        else {
            panic!("expected operation shape");
        };
        assert_eq!(
            op.input.as_ref().map(|r| r.target.as_str()),
            Some("com.amazonaws.rds#AddTagsToResourceMessage")
        );
        assert_eq!(
            model.shapes["com.amazonaws.rds#AmazonRDSv19"].kind(),
            "service"
        );
    }

    #[test]
    fn test_should_parse_simple_shapes_by_type_tag_alone() {
        let json = r#"{
            "smithy": "2.0",
            "shapes": {
                "com.amazonaws.rds#String": { "type": "string" },
                "com.amazonaws.rds#DoubleOptional": {
                    "type": "double",
                    "traits": { "smithy.api#documentation": "<p>A double.</p>" }
                },
                "com.amazonaws.rds#Settings": {
                    "type": "map",
                    "key": { "target": "com.amazonaws.rds#String" },
                    "value": { "target": "com.amazonaws.rds#String" }
                }
            }
        }"#;
        let model: SmithyModel = serde_json::from_str(json).unwrap();
        assert!(matches!(model.shapes["com.amazonaws.rds#String"], Shape::String));
        assert_eq!(
            model.shapes["com.amazonaws.rds#DoubleOptional"].kind(),
            "double"
        );
        assert_eq!(model.shapes["com.amazonaws.rds#Settings"].kind(), "map");
    }

    #[test]
    fn test_should_return_short_name() {
        assert_eq!(
            SmithyModel::short_name("com.amazonaws.rds#DBCluster"),
            "DBCluster"
        );
        assert_eq!(SmithyModel::short_name("DBCluster"), "DBCluster");
    }

    #[test]
    fn test_should_summarize_html_documentation() {
        assert_eq!(
            doc_summary("<p>The name of the tag.  Up to 128 characters.</p>"),
            "The name of the tag."
        );
        assert_eq!(
            doc_summary("<p>Contains the <code>DBClusterIdentifier</code>.</p>"),
            "Contains the DBClusterIdentifier ."
        );
        assert_eq!(doc_summary("<p></p>"), "");
    }

    #[test]
    fn test_should_skip_empty_documentation() {
        let mut traits = Traits::new();
        assert_eq!(documentation(&traits), None);
        traits.insert(
            DOCUMENTATION_TRAIT.to_owned(),
            serde_json::Value::String("<p> </p>".to_owned()),
        );
        assert_eq!(documentation(&traits), None);
    }
}
