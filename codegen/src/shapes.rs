//! Shape resolution and type mapping from Smithy shapes to Rust types.
//!
//! This module collects the transitive closure of shapes reachable from the
//! configured operations and maps every member onto a [`FieldKind`].

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::config::CodegenConfig;
use crate::model::{self, EnumShape, Shape, SmithyModel, StructureShape};

/// Target of operations without input or output.
pub const UNIT_SHAPE: &str = "smithy.api#Unit";

/// Shape names that would shadow prelude types once generated.
const RESERVED_TYPE_NAMES: &[&str] = &["Option", "Result", "Box", "String", "Vec"];

/// Rust keywords that need a raw identifier when used as field names.
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type", "unsafe",
    "use", "where", "while", "yield",
];

/// Value kind of a generated field; every field is wrapped in `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form string.
    String,
    /// Tri-state boolean.
    Bool,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Long,
    /// Double-precision float, stored as the hashable `Double` wrapper.
    Double,
    /// UTC timestamp.
    Timestamp,
    /// String constrained by the named generated enum.
    Enum(String),
    /// Nested generated shape.
    Shape(String),
    /// Ordered list of elements.
    List(Box<FieldKind>),
}

impl FieldKind {
    /// The Rust type held inside the field's `Option`.
    pub fn rust_type(&self) -> String {
        match self {
            Self::String | Self::Enum(_) => "String".to_owned(),
            Self::Bool => "bool".to_owned(),
            Self::Integer => "i32".to_owned(),
            Self::Long => "i64".to_owned(),
            Self::Double => "Double".to_owned(),
            Self::Timestamp => "chrono::DateTime<chrono::Utc>".to_owned(),
            Self::Shape(name) => name.clone(),
            Self::List(element) => format!("Vec<{}>", element.rust_type()),
        }
    }

    /// Whether values are stored as `String` and accepted as `impl Into<String>`.
    pub fn is_string_like(&self) -> bool {
        matches!(self, Self::String | Self::Enum(_))
    }

    /// Whether the field or its elements hold a `Double`.
    pub fn uses_double(&self) -> bool {
        match self {
            Self::Double => true,
            Self::List(element) => element.uses_double(),
            _ => false,
        }
    }

    /// The enum documenting known values for this field or its elements.
    pub fn enum_name(&self) -> Option<&str> {
        match self {
            Self::Enum(name) => Some(name),
            Self::List(element) => match element.as_ref() {
                Self::Enum(name) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }

    /// Collect generated shape types this kind refers to.
    pub fn collect_shape_refs(&self, refs: &mut BTreeSet<String>) {
        match self {
            Self::Shape(name) => {
                refs.insert(name.clone());
            }
            Self::List(element) => element.collect_shape_refs(refs),
            _ => {}
        }
    }
}

/// Information about a struct member field for code generation.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// Original Smithy member name (PascalCase).
    pub smithy_name: String,
    /// Rust field name (snake_case, raw identifier for keywords).
    pub rust_name: String,
    /// Value kind.
    pub kind: FieldKind,
    /// Whether the service marks this member as required.
    pub required: bool,
    /// First sentence of the member documentation.
    pub doc: Option<String>,
}

impl FieldInfo {
    /// Field name without any raw identifier prefix.
    pub fn bare_name(&self) -> &str {
        self.rust_name.strip_prefix("r#").unwrap_or(&self.rust_name)
    }

    /// Whether serde's PascalCase rule misses the model member name.
    pub fn needs_rename(&self) -> bool {
        serde_pascal_case(self.bare_name()) != self.smithy_name
    }
}

/// A generated struct.
#[derive(Debug, Clone)]
pub struct StructInfo {
    /// Rust type name.
    pub rust_name: String,
    /// Shape name in the model.
    pub shape_name: String,
    /// One-line type documentation.
    pub doc: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldInfo>,
}

/// Enum variant information for code generation.
#[derive(Debug, Clone)]
pub struct EnumVariantInfo {
    /// Rust variant name (PascalCase).
    pub rust_name: String,
    /// The string value from `@enumValue`.
    pub string_value: String,
}

/// A generated enum.
#[derive(Debug, Clone)]
pub struct EnumInfo {
    /// Rust type name.
    pub rust_name: String,
    /// One-line type documentation.
    pub doc: String,
    /// Variants in model order.
    pub variants: Vec<EnumVariantInfo>,
}

/// A generated operation.
#[derive(Debug, Clone)]
pub struct OperationInfo {
    /// Short operation name (e.g., "AddRoleToDBCluster").
    pub name: String,
}

/// Resolved information about all shapes needed for code generation.
#[derive(Debug, Default)]
pub struct ResolvedModel {
    /// All operations, by group name and then in configured order.
    pub operations: Vec<OperationInfo>,
    /// Enums keyed by Rust name.
    pub enums: BTreeMap<String, EnumInfo>,
    /// Shared structs keyed by Rust name.
    pub shared_structs: BTreeMap<String, StructInfo>,
    /// `<Op>Input` structs per group, sorted by name.
    pub input_structs: BTreeMap<String, Vec<StructInfo>>,
    /// `<Op>Output` structs per group, sorted by name.
    pub output_structs: BTreeMap<String, Vec<StructInfo>>,
}

impl ResolvedModel {
    /// Number of generated input structs.
    pub fn input_count(&self) -> usize {
        self.input_structs.values().map(Vec::len).sum()
    }

    /// Number of generated output structs.
    pub fn output_count(&self) -> usize {
        self.output_structs.values().map(Vec::len).sum()
    }
}

/// Convert a Smithy PascalCase member name to Rust snake_case.
pub fn to_snake_case(name: &str) -> String {
    use heck::ToSnakeCase;
    let snake = name.to_snake_case();
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        format!("r#{snake}")
    } else {
        snake
    }
}

/// Convert a Smithy enum member name to a Rust variant name.
///
/// Handles SCREAMING_SNAKE_CASE, snake_case and already-PascalCase names.
pub fn to_pascal_case(name: &str) -> String {
    use heck::ToPascalCase;
    name.to_pascal_case()
}

/// The field name serde derives from `rename_all = "PascalCase"`.
fn serde_pascal_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut capitalize = true;
    for c in snake.chars() {
        if c == '_' {
            capitalize = true;
        } else if capitalize {
            out.push(c.to_ascii_uppercase());
            capitalize = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Resolve built-in smithy.api types.
fn resolve_builtin_kind(target: &str) -> Option<FieldKind> {
    match target {
        "smithy.api#String" => Some(FieldKind::String),
        "smithy.api#Boolean" | "smithy.api#PrimitiveBoolean" => Some(FieldKind::Bool),
        "smithy.api#Integer" | "smithy.api#PrimitiveInteger" => Some(FieldKind::Integer),
        "smithy.api#Long" | "smithy.api#PrimitiveLong" => Some(FieldKind::Long),
        "smithy.api#Double" | "smithy.api#PrimitiveDouble" => Some(FieldKind::Double),
        "smithy.api#Timestamp" => Some(FieldKind::Timestamp),
        _ => None,
    }
}

struct Resolver<'a> {
    model: &'a SmithyModel,
    namespace: String,
    type_prefix: &'a str,
    display_name: &'a str,
}

impl Resolver<'_> {
    fn type_name(&self, short: &str) -> String {
        if RESERVED_TYPE_NAMES.contains(&short) {
            format!("{}{short}", self.type_prefix)
        } else {
            short.to_owned()
        }
    }

    fn field_kind(&self, target: &str) -> Result<FieldKind> {
        if let Some(kind) = resolve_builtin_kind(target) {
            return Ok(kind);
        }

        let shape = self
            .model
            .shapes
            .get(target)
            .with_context(|| format!("Shape {target} not found in model"))?;
        let short = SmithyModel::short_name(target);

        let kind = match shape {
            Shape::String => FieldKind::String,
            Shape::Boolean => FieldKind::Bool,
            Shape::Integer => FieldKind::Integer,
            Shape::Long => FieldKind::Long,
            Shape::Double => FieldKind::Double,
            Shape::Timestamp => FieldKind::Timestamp,
            Shape::Enum(_) => FieldKind::Enum(self.type_name(short)),
            Shape::Structure(_) => FieldKind::Shape(self.type_name(short)),
            Shape::List(list) => FieldKind::List(Box::new(
                self.field_kind(&list.member.target)
                    .with_context(|| format!("in list {target}"))?,
            )),
            other => bail!("Unsupported {} shape {target}", other.kind()),
        };
        Ok(kind)
    }

    fn structure(&self, shape_id: &str) -> Result<&StructureShape> {
        match self.model.shapes.get(shape_id) {
            Some(Shape::Structure(structure)) => Ok(structure),
            Some(other) => bail!("{shape_id} is a {} shape, not a structure", other.kind()),
            None => bail!("Shape {shape_id} not found in model"),
        }
    }

    fn struct_info(
        &self,
        rust_name: String,
        shape_id: &str,
        doc: String,
        structure: &StructureShape,
    ) -> Result<StructInfo> {
        let fields = structure
            .members
            .iter()
            .map(|(name, member)| {
                let kind = self
                    .field_kind(&member.target)
                    .with_context(|| format!("Failed to resolve member {name} of {shape_id}"))?;
                Ok(FieldInfo {
                    smithy_name: name.to_owned(),
                    rust_name: to_snake_case(name),
                    kind,
                    required: member.traits.contains_key("smithy.api#required"),
                    doc: model::documentation(&member.traits),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            shape = %shape_id,
            rust_name = %rust_name,
            fields = structure.members.len(),
            "resolved structure"
        );

        Ok(StructInfo {
            rust_name,
            shape_name: SmithyModel::short_name(shape_id).to_owned(),
            doc,
            fields,
        })
    }

    fn enum_info(&self, shape_id: &str, enum_shape: &EnumShape) -> EnumInfo {
        let rust_name = self.type_name(SmithyModel::short_name(shape_id));
        let variants = enum_shape
            .members
            .iter()
            .map(|(variant_name, member)| {
                let string_value = member
                    .traits
                    .get("smithy.api#enumValue")
                    .and_then(|v| v.as_str())
                    .unwrap_or(variant_name)
                    .to_owned();
                EnumVariantInfo {
                    rust_name: to_pascal_case(variant_name),
                    string_value,
                }
            })
            .collect();

        debug!(shape = %shape_id, rust_name = %rust_name, "resolved enum");

        EnumInfo {
            doc: model::documentation(&enum_shape.traits)
                .unwrap_or_else(|| format!("{} {rust_name} enum.", self.display_name)),
            rust_name,
            variants,
        }
    }

    /// Collect every shape ID reachable from `shape_id`.
    fn collect_referenced_shapes(&self, shape_id: &str, visited: &mut BTreeSet<String>) {
        if shape_id.starts_with("smithy.api#") || !visited.insert(shape_id.to_owned()) {
            return;
        }

        match self.model.shapes.get(shape_id) {
            Some(Shape::Structure(s)) => {
                for (_, member) in s.members.iter() {
                    self.collect_referenced_shapes(&member.target, visited);
                }
            }
            Some(Shape::List(l)) => self.collect_referenced_shapes(&l.member.target, visited),
            _ => {}
        }
    }
}

/// Resolve all shapes needed by the configured operations.
pub fn resolve_model(model: &SmithyModel, config: &CodegenConfig) -> Result<ResolvedModel> {
    let resolver = Resolver {
        model,
        namespace: config.namespace_prefix(),
        type_prefix: &config.service.type_prefix,
        display_name: &config.service.display_name,
    };

    let mut resolved = ResolvedModel::default();
    let mut referenced = BTreeSet::new();

    // Step 1: operation inputs and outputs, plus everything their members reach.
    for (group, op_names) in &config.operations {
        for op_name in op_names {
            let full_name = format!("{}{op_name}", resolver.namespace);
            let shape = model
                .shapes
                .get(&full_name)
                .with_context(|| format!("Operation {op_name} not found in model"))?;
            let Shape::Operation(op) = shape else {
                bail!("{op_name} is not an operation shape");
            };

            let input = op
                .input
                .as_ref()
                .map(|r| r.target.as_str())
                .filter(|t| *t != UNIT_SHAPE);
            let output = op
                .output
                .as_ref()
                .map(|r| r.target.as_str())
                .filter(|t| *t != UNIT_SHAPE);

            if let Some(target) = input {
                let structure = resolver.structure(target)?;
                for (_, member) in structure.members.iter() {
                    resolver.collect_referenced_shapes(&member.target, &mut referenced);
                }
                let info = resolver.struct_info(
                    format!("{op_name}Input"),
                    target,
                    format!("Input for the `{op_name}` operation."),
                    structure,
                )?;
                resolved
                    .input_structs
                    .entry(group.clone())
                    .or_default()
                    .push(info);
            }

            if let Some(target) = output {
                let structure = resolver.structure(target)?;
                for (_, member) in structure.members.iter() {
                    resolver.collect_referenced_shapes(&member.target, &mut referenced);
                }
                let info = resolver.struct_info(
                    format!("{op_name}Output"),
                    target,
                    format!("Output of the `{op_name}` operation."),
                    structure,
                )?;
                resolved
                    .output_structs
                    .entry(group.clone())
                    .or_default()
                    .push(info);
            }

            debug!(operation = %op_name, group = %group, "resolved operation");
            resolved.operations.push(OperationInfo {
                name: op_name.clone(),
            });
        }
    }

    for structs in resolved
        .input_structs
        .values_mut()
        .chain(resolved.output_structs.values_mut())
    {
        structs.sort_by(|a, b| a.rust_name.cmp(&b.rust_name));
    }

    // Step 2: shared enums and structs reachable from any operation.
    for shape_id in &referenced {
        match model.shapes.get(shape_id.as_str()) {
            Some(Shape::Enum(enum_shape)) => {
                let info = resolver.enum_info(shape_id, enum_shape);
                resolved.enums.insert(info.rust_name.clone(), info);
            }
            Some(Shape::Structure(structure)) => {
                if structure.traits.contains_key("smithy.api#error") {
                    continue;
                }
                let short = SmithyModel::short_name(shape_id);
                let rust_name = resolver.type_name(short);
                let doc = model::documentation(&structure.traits)
                    .unwrap_or_else(|| format!("{} {rust_name}.", resolver.display_name));
                let info = resolver.struct_info(rust_name.clone(), shape_id, doc, structure)?;
                resolved.shared_structs.insert(rust_name, info);
            }
            _ => {}
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MODEL: &str = r#"{
        "smithy": "2.0",
        "shapes": {
            "com.amazonaws.rds#AddTagsToResource": {
                "type": "operation",
                "input": { "target": "com.amazonaws.rds#AddTagsToResourceMessage" },
                "output": { "target": "smithy.api#Unit" }
            },
            "com.amazonaws.rds#DescribeOptionGroups": {
                "type": "operation",
                "input": { "target": "com.amazonaws.rds#DescribeOptionGroupsMessage" },
                "output": { "target": "com.amazonaws.rds#OptionGroups" }
            },
            "com.amazonaws.rds#AddTagsToResourceMessage": {
                "type": "structure",
                "members": {
                    "ResourceName": {
                        "target": "com.amazonaws.rds#String",
                        "traits": { "smithy.api#required": {} }
                    },
                    "Tags": { "target": "com.amazonaws.rds#TagList" }
                }
            },
            "com.amazonaws.rds#DescribeOptionGroupsMessage": {
                "type": "structure",
                "members": {
                    "OptionGroupName": { "target": "com.amazonaws.rds#String" },
                    "MaxRecords": { "target": "com.amazonaws.rds#IntegerOptional" }
                }
            },
            "com.amazonaws.rds#OptionGroups": {
                "type": "structure",
                "members": {
                    "OptionGroupsList": { "target": "com.amazonaws.rds#OptionGroupsList" },
                    "Marker": { "target": "com.amazonaws.rds#String" }
                }
            },
            "com.amazonaws.rds#OptionGroupsList": {
                "type": "list",
                "member": { "target": "com.amazonaws.rds#OptionGroup" }
            },
            "com.amazonaws.rds#OptionGroup": {
                "type": "structure",
                "members": {
                    "OptionGroupName": { "target": "com.amazonaws.rds#String" },
                    "Options": { "target": "com.amazonaws.rds#OptionsList" },
                    "AllowsVpcAndNonVpcInstanceMemberships": { "target": "com.amazonaws.rds#Boolean" }
                }
            },
            "com.amazonaws.rds#OptionsList": {
                "type": "list",
                "member": { "target": "com.amazonaws.rds#Option" }
            },
            "com.amazonaws.rds#Option": {
                "type": "structure",
                "members": {
                    "OptionName": { "target": "com.amazonaws.rds#String" },
                    "Port": { "target": "com.amazonaws.rds#IntegerOptional" },
                    "ApplyMethod": { "target": "com.amazonaws.rds#ApplyMethod" },
                    "MinIopsPerGib": { "target": "com.amazonaws.rds#DoubleOptional" }
                },
                "traits": { "smithy.api#documentation": "<p>An option. Of an option group.</p>" }
            },
            "com.amazonaws.rds#ApplyMethod": {
                "type": "enum",
                "members": {
                    "pending_reboot": {
                        "target": "smithy.api#Unit",
                        "traits": { "smithy.api#enumValue": "pending-reboot" }
                    },
                    "immediate": {
                        "target": "smithy.api#Unit",
                        "traits": { "smithy.api#enumValue": "immediate" }
                    }
                }
            },
            "com.amazonaws.rds#TagList": {
                "type": "list",
                "member": { "target": "com.amazonaws.rds#Tag" }
            },
            "com.amazonaws.rds#Tag": {
                "type": "structure",
                "members": {
                    "Key": { "target": "com.amazonaws.rds#String" },
                    "Value": { "target": "com.amazonaws.rds#String" }
                }
            },
            "com.amazonaws.rds#String": { "type": "string" },
            "com.amazonaws.rds#Boolean": { "type": "boolean" },
            "com.amazonaws.rds#IntegerOptional": { "type": "integer" },
            "com.amazonaws.rds#DoubleOptional": { "type": "double" },
            "com.amazonaws.rds#Settings": {
                "type": "map",
                "key": { "target": "com.amazonaws.rds#String" },
                "value": { "target": "com.amazonaws.rds#String" }
            }
        }
    }"#;

    const TEST_CONFIG: &str = r#"
[service]
namespace = "com.amazonaws.rds"
display_name = "RDS"
type_prefix = "Rds"
crate_name = "rdskit_model"
header = "//! Generated."

[paths]
model = "rds.json"
output = "out"

[operations]
tagging = ["AddTagsToResource"]
option_group = ["DescribeOptionGroups"]

[[errors]]
code = "OptionGroupNotFoundFault"
message = "The specified option group could not be found"
status = 404
"#;

    fn resolve_test_model() -> ResolvedModel {
        let model: SmithyModel = serde_json::from_str(TEST_MODEL).unwrap();
        let config = CodegenConfig::from_toml(TEST_CONFIG).unwrap();
        resolve_model(&model, &config).unwrap()
    }

    #[test]
    fn test_should_convert_member_names_to_snake_case() {
        assert_eq!(
            to_snake_case("DBClusterIdentifier"),
            "db_cluster_identifier"
        );
        assert_eq!(
            to_snake_case("VpnTunnelOriginatorIP"),
            "vpn_tunnel_originator_ip"
        );
        assert_eq!(to_snake_case("IAMRoleName"), "iam_role_name");
        assert_eq!(to_snake_case("MultiAZ"), "multi_az");
        assert_eq!(to_snake_case("Type"), "r#type");
    }

    #[test]
    fn test_should_convert_enum_members_to_pascal_case() {
        assert_eq!(to_pascal_case("pending_reboot"), "PendingReboot");
        assert_eq!(to_pascal_case("SECRETS"), "Secrets");
        assert_eq!(to_pascal_case("db_cluster_snapshot"), "DbClusterSnapshot");
    }

    #[test]
    fn test_should_detect_names_serde_cannot_derive() {
        let field = |name: &str| FieldInfo {
            smithy_name: name.to_owned(),
            rust_name: to_snake_case(name),
            kind: FieldKind::String,
            required: false,
            doc: None,
        };
        assert!(field("DBClusterIdentifier").needs_rename());
        assert!(field("VpnPSK").needs_rename());
        assert!(!field("RoleArn").needs_rename());
        assert!(!field("DbiResourceId").needs_rename());
        assert!(!field("Type").needs_rename());
    }

    #[test]
    fn test_should_map_kinds_to_rust_types() {
        let list = FieldKind::List(Box::new(FieldKind::Shape("Tag".to_owned())));
        assert_eq!(list.rust_type(), "Vec<Tag>");
        assert_eq!(
            FieldKind::Timestamp.rust_type(),
            "chrono::DateTime<chrono::Utc>"
        );
        assert_eq!(
            FieldKind::Enum("ApplyMethod".to_owned()).rust_type(),
            "String"
        );
        let enums = FieldKind::List(Box::new(FieldKind::Enum("SourceType".to_owned())));
        assert_eq!(enums.enum_name(), Some("SourceType"));
        assert!(!enums.uses_double());

        let doubles = FieldKind::List(Box::new(FieldKind::Double));
        assert_eq!(doubles.rust_type(), "Vec<Double>");
        assert!(doubles.uses_double());
    }

    #[test]
    fn test_should_classify_inputs_outputs_and_shared_shapes() {
        let resolved = resolve_test_model();

        let ops: Vec<&str> = resolved
            .operations
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(ops, vec!["DescribeOptionGroups", "AddTagsToResource"]);

        assert_eq!(
            resolved.input_structs["tagging"][0].rust_name,
            "AddTagsToResourceInput"
        );
        assert!(!resolved.output_structs.contains_key("tagging"));
        assert_eq!(
            resolved.output_structs["option_group"][0].shape_name,
            "OptionGroups"
        );

        let shared: Vec<&str> = resolved.shared_structs.keys().map(String::as_str).collect();
        assert_eq!(shared, vec!["OptionGroup", "RdsOption", "Tag"]);
        assert_eq!(resolved.enums.len(), 1);
    }

    #[test]
    fn test_should_keep_field_and_variant_declaration_order() {
        let resolved = resolve_test_model();

        let group = &resolved.shared_structs["OptionGroup"];
        let names: Vec<&str> = group
            .fields
            .iter()
            .map(|f| f.smithy_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "OptionGroupName",
                "Options",
                "AllowsVpcAndNonVpcInstanceMemberships",
            ]
        );

        let variants: Vec<&str> = resolved.enums["ApplyMethod"]
            .variants
            .iter()
            .map(|v| v.string_value.as_str())
            .collect();
        assert_eq!(variants, vec!["pending-reboot", "immediate"]);
    }

    #[test]
    fn test_should_resolve_field_kinds_and_docs() {
        let resolved = resolve_test_model();

        let option = &resolved.shared_structs["RdsOption"];
        assert_eq!(option.shape_name, "Option");
        assert_eq!(option.doc, "An option.");
        assert_eq!(option.fields[1].kind, FieldKind::Integer);
        assert_eq!(
            option.fields[2].kind,
            FieldKind::Enum("ApplyMethod".to_owned())
        );
        assert_eq!(option.fields[3].kind, FieldKind::Double);

        let input = &resolved.input_structs["tagging"][0];
        assert!(input.fields[0].required);
        assert_eq!(
            input.fields[1].kind,
            FieldKind::List(Box::new(FieldKind::Shape("Tag".to_owned())))
        );

        assert_eq!(resolved.shared_structs["Tag"].doc, "RDS Tag.");
        assert_eq!(resolved.enums["ApplyMethod"].doc, "RDS ApplyMethod enum.");
    }

    #[test]
    fn test_should_fail_for_missing_operation() {
        let model: SmithyModel = serde_json::from_str(TEST_MODEL).unwrap();
        let text = TEST_CONFIG.replace("[\"AddTagsToResource\"]", "[\"CopyDBSnapshot\"]");
        let config = CodegenConfig::from_toml(&text).unwrap();
        let err = resolve_model(&model, &config).unwrap_err();
        assert!(err.to_string().contains("CopyDBSnapshot"));
    }

    #[test]
    fn test_should_fail_for_non_operation_shape() {
        let model: SmithyModel = serde_json::from_str(TEST_MODEL).unwrap();
        let text = TEST_CONFIG.replace("[\"AddTagsToResource\"]", "[\"Tag\"]");
        let config = CodegenConfig::from_toml(&text).unwrap();
        let err = resolve_model(&model, &config).unwrap_err();
        assert_eq!(err.to_string(), "Tag is not an operation shape");
    }

    #[test]
    fn test_should_reject_unsupported_member_kind() {
        let json = TEST_MODEL.replace(
            r#""Value": { "target": "com.amazonaws.rds#String" }"#,
            r#""Value": { "target": "com.amazonaws.rds#Settings" }"#,
        );
        let model: SmithyModel = serde_json::from_str(&json).unwrap();
        let config = CodegenConfig::from_toml(TEST_CONFIG).unwrap();
        let err = resolve_model(&model, &config).unwrap_err();
        assert!(format!("{err:#}").contains("Unsupported map shape"));
    }
}
