//! Rust code generation from resolved Smithy shapes.
//!
//! This module takes a `ResolvedModel` and produces Rust source code strings
//! for types, input/output structs, operations, errors, and the crate root.
//! Layout follows rustfmt's default width heuristics, so generated files are
//! left unchanged by `cargo fmt`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use anyhow::{Result, bail};

use crate::config::{CodegenConfig, ErrorCodeConfig};
use crate::shapes::{EnumInfo, FieldInfo, FieldKind, ResolvedModel, StructInfo};

/// Maximum width of a generated line before it is wrapped.
const MAX_LINE_WIDTH: usize = 100;

/// Maximum width of the arguments of a call kept on one line.
const FN_CALL_WIDTH: usize = 60;

/// Maximum width of the arguments of a function-like attribute kept on one line.
const ATTR_FN_LIKE_WIDTH: usize = 70;

/// Maximum width of a method chain kept on one line.
const CHAIN_WIDTH: usize = 60;

/// Maximum width of an array literal kept on one line.
const ARRAY_WIDTH: usize = 60;

/// Columns an or-pattern match arm spends outside the pattern: indent plus ` => {`.
const ARM_OVERHEAD: usize = 17;

/// Generate all source files and return them as a map of path -> content.
pub fn generate_all(
    resolved: &ResolvedModel,
    config: &CodegenConfig,
) -> Result<BTreeMap<String, String>> {
    let header = config.service.header.as_str();
    let mut files = BTreeMap::new();

    files.insert("types.rs".to_owned(), generate_types(resolved, config)?);
    files.insert(
        "operations.rs".to_owned(),
        generate_operations(resolved, config)?,
    );
    files.insert("error.rs".to_owned(), generate_error(config)?);
    files.insert("lib.rs".to_owned(), generate_lib(resolved, config)?);

    generate_io_modules(&mut files, "input", &resolved.input_structs, header)?;
    generate_io_modules(&mut files, "output", &resolved.output_structs, header)?;

    Ok(files
        .into_iter()
        .map(|(path, content)| (path, finalize(content)))
        .collect())
}

/// Ensure a file ends with exactly one newline.
fn finalize(mut content: String) -> String {
    let trimmed = content.trim_end_matches('\n').len();
    content.truncate(trimmed);
    content.push('\n');
    content
}

/// Write a `use path::{..}` declaration, wrapping the item list when it is too long.
fn write_use_list(out: &mut String, path: &str, items: &[&str]) -> Result<()> {
    if let [item] = items {
        writeln!(out, "use {path}::{item};")?;
        return Ok(());
    }

    let line = format!("use {path}::{{{}}};", items.join(", "));
    if line.len() <= MAX_LINE_WIDTH {
        writeln!(out, "{line}")?;
        return Ok(());
    }

    writeln!(out, "use {path}::{{")?;
    let mut current = String::from("   ");
    for item in items {
        let piece = format!(" {item},");
        if current.len() > 3 && current.len() + piece.len() > MAX_LINE_WIDTH {
            writeln!(out, "{current}")?;
            current.truncate(3);
        }
        current.push_str(&piece);
    }
    writeln!(out, "{current}")?;
    writeln!(out, "}};")?;
    Ok(())
}

/// Write an attribute, one argument per line when it does not fit.
fn write_attr(out: &mut String, indent: &str, name: &str, args: &[String]) -> Result<()> {
    let joined = args.join(", ");
    let line = format!("{indent}#[{name}({joined})]");
    if line.len() <= MAX_LINE_WIDTH && joined.len() <= ATTR_FN_LIKE_WIDTH {
        writeln!(out, "{line}")?;
    } else {
        writeln!(out, "{indent}#[{name}(")?;
        for arg in args {
            writeln!(out, "{indent}    {arg},")?;
        }
        writeln!(out, "{indent})]")?;
    }
    Ok(())
}

/// Write a `&'static [Self]` constant, one item per line when it does not fit.
fn write_const_array(out: &mut String, name: &str, items: &[String]) -> Result<()> {
    let joined = items.join(", ");
    let line = format!("    pub const {name}: &'static [Self] = &[{joined}];");
    if line.len() <= MAX_LINE_WIDTH && joined.len() <= ARRAY_WIDTH {
        writeln!(out, "{line}")?;
    } else {
        writeln!(out, "    pub const {name}: &'static [Self] = &[")?;
        for item in items {
            writeln!(out, "        {item},")?;
        }
        writeln!(out, "    ];")?;
    }
    Ok(())
}

/// Whether any field of the structs holds a `Double`.
fn uses_double<'a>(mut structs: impl Iterator<Item = &'a StructInfo>) -> bool {
    structs.any(|info| info.fields.iter().any(|field| field.kind.uses_double()))
}

/// Write a builder method signature taking `mut self` and one parameter.
fn write_builder_sig(out: &mut String, fn_name: &str, param: &str) -> Result<()> {
    let line = format!("    pub fn {fn_name}(mut self, {param}) -> Self {{");
    if line.len() <= MAX_LINE_WIDTH {
        writeln!(out, "{line}")?;
    } else {
        writeln!(out, "    pub fn {fn_name}(")?;
        writeln!(out, "        mut self,")?;
        writeln!(out, "        {param},")?;
        writeln!(out, "    ) -> Self {{")?;
    }
    Ok(())
}

/// Write a match arm, moving the value into a block when it does not fit.
fn write_match_arm(out: &mut String, pattern: &str, value: &str) -> Result<()> {
    let line = format!("            {pattern} => {value},");
    if line.len() <= MAX_LINE_WIDTH {
        writeln!(out, "{line}")?;
    } else {
        writeln!(out, "            {pattern} => {{")?;
        writeln!(out, "                {value}")?;
        writeln!(out, "            }}")?;
    }
    Ok(())
}

/// Generate types.rs with all shared enums and structs.
fn generate_types(resolved: &ResolvedModel, config: &CodegenConfig) -> Result<String> {
    let mut out = String::with_capacity(128 * 1024);
    writeln!(out, "{}", config.service.header)?;
    writeln!(out)?;

    let has_enums = !resolved.enums.is_empty();
    let has_structs = !resolved.shared_structs.is_empty();
    if !has_enums && !has_structs {
        return Ok(out);
    }

    writeln!(out, "use std::fmt;")?;
    if has_enums {
        writeln!(out, "use std::str::FromStr;")?;
    }
    writeln!(out)?;
    writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
    writeln!(out)?;

    let mut shape_items = Vec::new();
    if uses_double(resolved.shared_structs.values()) {
        shape_items.push("Double");
    }
    if has_enums {
        shape_items.push("ParseEnumError");
    }
    if has_structs {
        shape_items.extend(["Shape", "ShapeFormatter"]);
    }
    write_use_list(&mut out, "crate::shape", &shape_items)?;
    writeln!(out)?;

    for info in resolved.enums.values() {
        write_enum(&mut out, info)?;
        writeln!(out)?;
    }

    for info in resolved.shared_structs.values() {
        write_struct(&mut out, info)?;
        writeln!(out)?;
    }

    Ok(out)
}

/// Generate a Rust enum with wire-value conversions.
fn write_enum(out: &mut String, info: &EnumInfo) -> Result<()> {
    let name = &info.rust_name;
    writeln!(out, "/// {}", info.doc)?;
    writeln!(
        out,
        "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]"
    )?;
    writeln!(out, "pub enum {name} {{")?;
    for variant in &info.variants {
        if variant.rust_name != variant.string_value {
            writeln!(out, "    #[serde(rename = \"{}\")]", variant.string_value)?;
        }
        writeln!(out, "    {},", variant.rust_name)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl {name} {{")?;
    writeln!(out, "    /// Every known value, in model order.")?;
    let items = info
        .variants
        .iter()
        .map(|v| format!("Self::{}", v.rust_name))
        .collect::<Vec<_>>();
    write_const_array(out, "VALUES", &items)?;
    writeln!(out)?;

    writeln!(out, "    /// Returns the wire value of this variant.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn as_str(&self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for variant in &info.variants {
        writeln!(
            out,
            "            Self::{} => \"{}\",",
            variant.rust_name, variant.string_value
        )?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl fmt::Display for {name} {{")?;
    writeln!(
        out,
        "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{"
    )?;
    writeln!(out, "        f.write_str(self.as_str())")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl FromStr for {name} {{")?;
    writeln!(out, "    type Err = ParseEnumError;")?;
    writeln!(out)?;
    writeln!(
        out,
        "    fn from_str(s: &str) -> Result<Self, Self::Err> {{"
    )?;
    writeln!(out, "        match s {{")?;
    for variant in &info.variants {
        writeln!(
            out,
            "            \"{}\" => Ok(Self::{}),",
            variant.string_value, variant.rust_name
        )?;
    }
    writeln!(
        out,
        "            _ => Err(ParseEnumError::new(\"{name}\", s)),"
    )?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl From<{name}> for String {{")?;
    writeln!(out, "    fn from(value: {name}) -> Self {{")?;
    writeln!(out, "        value.as_str().to_owned()")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;

    Ok(())
}

/// Generate a shape struct with its builder methods, `Display` and `Shape` impls.
fn write_struct(out: &mut String, info: &StructInfo) -> Result<()> {
    let name = &info.rust_name;
    writeln!(out, "/// {}", info.doc)?;
    writeln!(
        out,
        "#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]"
    )?;
    writeln!(out, "#[serde(rename_all = \"PascalCase\")]")?;

    if info.fields.is_empty() {
        writeln!(out, "pub struct {name} {{}}")?;
    } else {
        writeln!(out, "pub struct {name} {{")?;
        for field in &info.fields {
            write_field(out, field)?;
        }
        writeln!(out, "}}")?;
    }
    writeln!(out)?;

    if !info.fields.is_empty() {
        writeln!(out, "impl {name} {{")?;
        for (i, field) in info.fields.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            write_builder(out, field)?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;
    }

    write_display(out, info)?;
    writeln!(out)?;

    writeln!(out, "impl Shape for {name} {{")?;
    writeln!(
        out,
        "    const SHAPE_NAME: &'static str = \"{}\";",
        info.shape_name
    )?;
    writeln!(out, "}}")?;

    Ok(())
}

fn write_field(out: &mut String, field: &FieldInfo) -> Result<()> {
    let mut docs = Vec::new();
    if let Some(doc) = &field.doc {
        docs.push(doc.clone());
    }
    if field.required {
        docs.push("Required.".to_owned());
    }
    if let Some(enum_name) = field.kind.enum_name() {
        docs.push(format!("See [`{enum_name}`](crate::types::{enum_name}) for known values."));
    }
    for (i, doc) in docs.iter().enumerate() {
        if i > 0 {
            writeln!(out, "    ///")?;
        }
        writeln!(out, "    /// {doc}")?;
    }

    let mut args = Vec::with_capacity(2);
    if field.needs_rename() {
        args.push(format!("rename = \"{}\"", field.smithy_name));
    }
    args.push("skip_serializing_if = \"Option::is_none\"".to_owned());
    write_attr(out, "    ", "serde", &args)?;

    writeln!(
        out,
        "    pub {}: Option<{}>,",
        field.rust_name,
        field.kind.rust_type()
    )?;
    Ok(())
}

fn write_builder(out: &mut String, field: &FieldInfo) -> Result<()> {
    let fn_name = format!("with_{}", field.bare_name());
    let ident = &field.rust_name;

    if let FieldKind::List(element) = &field.kind {
        let (item, mapping) = if element.is_string_like() {
            ("impl Into<String>".to_owned(), ".into_iter().map(Into::into)")
        } else {
            (element.rust_type(), "")
        };
        writeln!(
            out,
            "    /// Appends to `{}`, allocating the list when absent.",
            field.smithy_name
        )?;
        writeln!(out, "    #[must_use]")?;
        write_builder_sig(
            out,
            &fn_name,
            &format!("inputs: impl IntoIterator<Item = {item}>"),
        )?;
        let chain = format!("self.{ident}.get_or_insert_with(Vec::new).extend(inputs{mapping})");
        if chain.len() <= CHAIN_WIDTH {
            writeln!(out, "        {chain};")?;
        } else {
            writeln!(out, "        self.{ident}")?;
            writeln!(out, "            .get_or_insert_with(Vec::new)")?;
            writeln!(out, "            .extend(inputs{mapping});")?;
        }
    } else {
        let (param, conversion) = match &field.kind {
            FieldKind::Double => ("f64".to_owned(), "Double(input)"),
            kind if kind.is_string_like() => ("impl Into<String>".to_owned(), "input.into()"),
            kind => (kind.rust_type(), "input"),
        };
        writeln!(out, "    /// Sets `{}`.", field.smithy_name)?;
        writeln!(out, "    #[must_use]")?;
        write_builder_sig(out, &fn_name, &format!("input: {param}"))?;
        writeln!(out, "        self.{ident} = Some({conversion});")?;
    }

    writeln!(out, "        self")?;
    writeln!(out, "    }}")?;
    Ok(())
}

fn write_display(out: &mut String, info: &StructInfo) -> Result<()> {
    writeln!(out, "impl fmt::Display for {} {{", info.rust_name)?;
    writeln!(
        out,
        "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{"
    )?;

    let mut one_line = String::from("ShapeFormatter::new(f)");
    for field in &info.fields {
        let (method, access) = display_accessor(&field.kind);
        write!(
            one_line,
            ".{method}(\"{}\", self.{}.{access}())",
            field.smithy_name, field.rust_name
        )?;
    }
    one_line.push_str(".finish()");

    if one_line.len() <= CHAIN_WIDTH {
        writeln!(out, "        {one_line}")?;
    } else {
        writeln!(out, "        ShapeFormatter::new(f)")?;
        for field in &info.fields {
            let (method, access) = display_accessor(&field.kind);
            let name = format!("\"{}\"", field.smithy_name);
            let value = format!("self.{}.{access}()", field.rust_name);
            if name.len() + 2 + value.len() <= FN_CALL_WIDTH {
                writeln!(out, "            .{method}({name}, {value})")?;
                continue;
            }
            writeln!(out, "            .{method}(")?;
            writeln!(out, "                {name},")?;
            if value.len() <= CHAIN_WIDTH {
                writeln!(out, "                {value},")?;
            } else {
                writeln!(out, "                self.{}", field.rust_name)?;
                writeln!(out, "                    .{access}(),")?;
            }
            writeln!(out, "            )")?;
        }
        writeln!(out, "            .finish()")?;
    }

    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(())
}

/// The `ShapeFormatter` method and `Option` accessor that display a field.
fn display_accessor(kind: &FieldKind) -> (&'static str, &'static str) {
    match kind {
        FieldKind::List(_) => ("list", "as_deref"),
        kind if kind.is_string_like() => ("field", "as_deref"),
        _ => ("field", "as_ref"),
    }
}

/// Generate input or output module files.
fn generate_io_modules(
    files: &mut BTreeMap<String, String>,
    kind: &str, // "input" or "output"
    groups: &BTreeMap<String, Vec<StructInfo>>,
    header: &str,
) -> Result<()> {
    // Generate mod.rs
    let mut mod_out = String::with_capacity(1024);
    writeln!(mod_out, "{header}")?;
    writeln!(mod_out)?;
    for group in groups.keys() {
        writeln!(mod_out, "mod {group};")?;
    }
    writeln!(mod_out)?;
    for group in groups.keys() {
        writeln!(mod_out, "pub use {group}::*;")?;
    }
    files.insert(format!("{kind}/mod.rs"), mod_out);

    // Generate each group file
    for (group, structs) in groups {
        let mut out = String::with_capacity(32 * 1024);
        writeln!(out, "{header}")?;
        writeln!(out)?;
        writeln!(out, "use std::fmt;")?;
        writeln!(out)?;
        writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
        writeln!(out)?;
        let mut shape_items = Vec::new();
        if uses_double(structs.iter()) {
            shape_items.push("Double");
        }
        shape_items.extend(["Shape", "ShapeFormatter"]);
        write_use_list(&mut out, "crate::shape", &shape_items)?;

        let mut refs = BTreeSet::new();
        for info in structs {
            for field in &info.fields {
                field.kind.collect_shape_refs(&mut refs);
            }
        }
        if !refs.is_empty() {
            let items = refs.iter().map(String::as_str).collect::<Vec<_>>();
            write_use_list(&mut out, "crate::types", &items)?;
        }
        writeln!(out)?;

        for info in structs {
            write_struct(&mut out, info)?;
            writeln!(out)?;
        }

        files.insert(format!("{kind}/{group}.rs"), out);
    }

    Ok(())
}

/// Generate operations.rs with the operation enum.
fn generate_operations(resolved: &ResolvedModel, config: &CodegenConfig) -> Result<String> {
    let op_type = format!("{}Operation", config.service.type_prefix);
    let mut out = String::with_capacity(16 * 1024);
    writeln!(out, "{}", config.service.header)?;
    writeln!(out)?;
    writeln!(out, "use std::fmt;")?;
    writeln!(out)?;

    writeln!(
        out,
        "/// All {} operations covered by this model.",
        config.service.display_name
    )?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
    writeln!(out, "pub enum {op_type} {{")?;
    for op in &resolved.operations {
        writeln!(out, "    /// The {} operation.", op.name)?;
        writeln!(out, "    {},", op.name)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl {op_type} {{")?;
    writeln!(out, "    /// Every operation, in generation order.")?;
    let items = resolved
        .operations
        .iter()
        .map(|op| format!("Self::{}", op.name))
        .collect::<Vec<_>>();
    write_const_array(&mut out, "ALL", &items)?;
    writeln!(out)?;

    // Generate as_str()
    writeln!(out, "    /// Returns the AWS operation name string.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn as_str(&self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for op in &resolved.operations {
        write_match_arm(
            &mut out,
            &format!("Self::{}", op.name),
            &format!("\"{}\"", op.name),
        )?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    // Generate from_name()
    writeln!(
        out,
        "    /// Parse an operation name string into an `{op_type}`."
    )?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn from_name(name: &str) -> Option<Self> {{")?;
    writeln!(out, "        match name {{")?;
    for op in &resolved.operations {
        write_match_arm(
            &mut out,
            &format!("\"{}\"", op.name),
            &format!("Some(Self::{})", op.name),
        )?;
    }
    writeln!(out, "            _ => None,")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl fmt::Display for {op_type} {{")?;
    writeln!(
        out,
        "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{"
    )?;
    writeln!(out, "        f.write_str(self.as_str())")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;

    Ok(out)
}

/// The `http::StatusCode` constant for a modelled fault status.
fn status_const(status: u16) -> Result<&'static str> {
    let name = match status {
        400 => "BAD_REQUEST",
        403 => "FORBIDDEN",
        404 => "NOT_FOUND",
        409 => "CONFLICT",
        429 => "TOO_MANY_REQUESTS",
        500 => "INTERNAL_SERVER_ERROR",
        503 => "SERVICE_UNAVAILABLE",
        other => bail!("Unsupported error status code {other}"),
    };
    Ok(name)
}

/// Write the `default_status_code` arms, one per distinct status.
fn write_status_arms(out: &mut String, errors: &[ErrorCodeConfig]) -> Result<()> {
    let mut by_status: BTreeMap<u16, Vec<&str>> = BTreeMap::new();
    for error in errors {
        by_status
            .entry(error.status)
            .or_default()
            .push(error.code.as_str());
    }

    for (status, codes) in &by_status {
        let value = format!("http::StatusCode::{}", status_const(*status)?);
        let patterns = codes
            .iter()
            .map(|code| format!("Self::{code}"))
            .collect::<Vec<_>>();
        let joined = patterns.join(" | ");
        let Some((first, rest)) = patterns.split_first() else {
            continue;
        };
        if rest.is_empty() || joined.len() + ARM_OVERHEAD <= MAX_LINE_WIDTH {
            write_match_arm(out, &joined, &value)?;
            continue;
        }
        writeln!(out, "            {first}")?;
        for (i, pattern) in rest.iter().enumerate() {
            if i + 1 == rest.len() {
                write_match_arm(out, &format!("| {pattern}"), &value)?;
            } else {
                writeln!(out, "            | {pattern}")?;
            }
        }
    }
    Ok(())
}

/// Generate error.rs with the fault code enum, error struct and macro.
fn generate_error(config: &CodegenConfig) -> Result<String> {
    let prefix = &config.service.type_prefix;
    let display = &config.service.display_name;
    let code_type = format!("{prefix}ErrorCode");
    let error_type = format!("{prefix}Error");
    let macro_name = format!("{}_error", prefix.to_lowercase());
    let errors = &config.errors;

    let mut out = String::with_capacity(32 * 1024);
    writeln!(out, "{}", config.service.header)?;
    writeln!(out)?;
    writeln!(out, "use std::fmt;")?;
    writeln!(out)?;

    // Error code enum
    writeln!(out, "/// Well-known {display} fault codes.")?;
    writeln!(
        out,
        "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]"
    )?;
    writeln!(out, "#[non_exhaustive]")?;
    writeln!(out, "pub enum {code_type} {{")?;
    for (i, error) in errors.iter().enumerate() {
        if i == 0 {
            writeln!(out, "    /// Default error code.")?;
            writeln!(out, "    #[default]")?;
        }
        writeln!(out, "    /// {} fault.", error.code)?;
        writeln!(out, "    {},", error.code)?;
    }
    writeln!(out, "    /// A custom error code not in the standard set.")?;
    writeln!(out, "    Custom(&'static str),")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl {code_type} {{")?;
    writeln!(out, "    /// Returns the error code as a string.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn as_str(&self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for error in errors {
        write_match_arm(
            &mut out,
            &format!("Self::{}", error.code),
            &format!("\"{}\"", error.code),
        )?;
    }
    writeln!(out, "            Self::Custom(s) => s,")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(
        out,
        "    /// Returns the default HTTP status code for this error."
    )?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    #[allow(clippy::match_same_arms)]")?;
    writeln!(
        out,
        "    pub fn default_status_code(&self) -> http::StatusCode {{"
    )?;
    writeln!(out, "        match self {{")?;
    write_status_arms(&mut out, errors)?;
    writeln!(
        out,
        "            Self::Custom(_) => http::StatusCode::INTERNAL_SERVER_ERROR,"
    )?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    /// Returns the default message for this error.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn default_message(&self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for error in errors {
        write_match_arm(
            &mut out,
            &format!("Self::{}", error.code),
            &format!("\"{}\"", error.message),
        )?;
    }
    writeln!(out, "            Self::Custom(s) => s,")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl fmt::Display for {code_type} {{")?;
    writeln!(
        out,
        "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{"
    )?;
    writeln!(out, "        f.write_str(self.as_str())")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    // Error struct
    writeln!(out, "/// An {display} fault.")?;
    writeln!(out, "#[derive(Debug)]")?;
    writeln!(out, "pub struct {error_type} {{")?;
    writeln!(out, "    /// The error code.")?;
    writeln!(out, "    pub code: {code_type},")?;
    writeln!(out, "    /// A human-readable error message.")?;
    writeln!(out, "    pub message: String,")?;
    writeln!(out, "    /// The request ID.")?;
    writeln!(out, "    pub request_id: Option<String>,")?;
    writeln!(out, "    /// The HTTP status code.")?;
    writeln!(out, "    pub status_code: http::StatusCode,")?;
    writeln!(out, "    /// The underlying source error, if any.")?;
    writeln!(
        out,
        "    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,"
    )?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl fmt::Display for {error_type} {{")?;
    writeln!(
        out,
        "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{"
    )?;
    writeln!(
        out,
        "        write!(f, \"{error_type}({{}}): {{}}\", self.code, self.message)"
    )?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl std::error::Error for {error_type} {{")?;
    writeln!(
        out,
        "    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {{"
    )?;
    writeln!(out, "        self.source")?;
    writeln!(out, "            .as_ref()")?;
    writeln!(
        out,
        "            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))"
    )?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl {error_type} {{")?;
    writeln!(out, "    /// Create a new {error_type} from an error code.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn new(code: {code_type}) -> Self {{")?;
    writeln!(out, "        let status_code = code.default_status_code();")?;
    writeln!(
        out,
        "        let message = code.default_message().to_owned();"
    )?;
    writeln!(out, "        Self {{")?;
    writeln!(out, "            code,")?;
    writeln!(out, "            message,")?;
    writeln!(out, "            request_id: None,")?;
    writeln!(out, "            status_code,")?;
    writeln!(out, "            source: None,")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(
        out,
        "    /// Create a new {error_type} with a custom message."
    )?;
    writeln!(out, "    #[must_use]")?;
    writeln!(
        out,
        "    pub fn with_message(code: {code_type}, message: impl Into<String>) -> Self {{"
    )?;
    writeln!(out, "        Self {{")?;
    writeln!(out, "            status_code: code.default_status_code(),")?;
    writeln!(out, "            message: message.into(),")?;
    writeln!(out, "            code,")?;
    writeln!(out, "            request_id: None,")?;
    writeln!(out, "            source: None,")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    /// Set the request ID.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(
        out,
        "    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {{"
    )?;
    writeln!(out, "        self.request_id = Some(request_id.into());")?;
    writeln!(out, "        self")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    /// Set the source error.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(
        out,
        "    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {{"
    )?;
    writeln!(out, "        self.source = Some(Box::new(source));")?;
    writeln!(out, "        self")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    // Error macro
    let example = errors
        .first()
        .map_or("InternalFailure", |error| error.code.as_str());
    let crate_name = &config.service.crate_name;
    writeln!(out, "/// Create an {error_type} from an error code.")?;
    writeln!(out, "///")?;
    writeln!(out, "/// # Examples")?;
    writeln!(out, "///")?;
    writeln!(out, "/// ```")?;
    writeln!(out, "/// use {crate_name}::{macro_name};")?;
    writeln!(out, "/// use {crate_name}::error::{code_type};")?;
    writeln!(out, "///")?;
    writeln!(out, "/// let err = {macro_name}!({example});")?;
    writeln!(out, "/// assert_eq!(err.code, {code_type}::{example});")?;
    writeln!(out, "///")?;
    writeln!(
        out,
        "/// let err = {macro_name}!({example}, \"Something went wrong\");"
    )?;
    writeln!(
        out,
        "/// assert_eq!(err.message, \"Something went wrong\");"
    )?;
    writeln!(out, "/// ```")?;
    writeln!(out, "#[macro_export]")?;
    writeln!(out, "macro_rules! {macro_name} {{")?;
    writeln!(out, "    ($code:ident) => {{")?;
    writeln!(
        out,
        "        $crate::error::{error_type}::new($crate::error::{code_type}::$code)"
    )?;
    writeln!(out, "    }};")?;
    writeln!(out, "    ($code:ident, $msg:expr) => {{")?;
    writeln!(
        out,
        "        $crate::error::{error_type}::with_message($crate::error::{code_type}::$code, $msg)"
    )?;
    writeln!(out, "    }};")?;
    writeln!(out, "}}")?;

    Ok(out)
}

/// Generate lib.rs that re-exports all modules.
fn generate_lib(resolved: &ResolvedModel, config: &CodegenConfig) -> Result<String> {
    let prefix = &config.service.type_prefix;
    let mut out = String::with_capacity(2048);
    writeln!(out, "{}", config.service.header)?;
    writeln!(out, "#![allow(clippy::too_many_lines)]")?;
    writeln!(out, "#![allow(clippy::struct_excessive_bools)]")?;
    writeln!(out, "#![allow(missing_docs)]")?;
    writeln!(out)?;

    writeln!(out, "pub mod error;")?;
    writeln!(out, "pub mod input;")?;
    writeln!(out, "pub mod operations;")?;
    writeln!(out, "pub mod output;")?;
    writeln!(out, "pub mod shape;")?;
    writeln!(out, "pub mod types;")?;
    writeln!(out)?;

    // Re-exports
    writeln!(out, "pub use error::{{{prefix}Error, {prefix}ErrorCode}};")?;
    writeln!(out, "pub use operations::{prefix}Operation;")?;
    writeln!(
        out,
        "pub use shape::{{Double, ParseEnumError, Shape, ShapeFormatter}};"
    )?;
    writeln!(out)?;

    // Count generated items
    let n_ops = resolved.operations.len();
    let n_enums = resolved.enums.len();
    let n_shared = resolved.shared_structs.len();
    let n_inputs = resolved.input_count();
    let n_outputs = resolved.output_count();

    writeln!(
        out,
        "// Generated: {n_ops} operations, {n_enums} enums, {n_shared} shared structs, {n_inputs} input structs, {n_outputs} output structs"
    )?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::EnumVariantInfo;

    fn field(smithy_name: &str, kind: FieldKind) -> FieldInfo {
        FieldInfo {
            smithy_name: smithy_name.to_owned(),
            rust_name: crate::shapes::to_snake_case(smithy_name),
            kind,
            required: false,
            doc: None,
        }
    }

    fn render_struct(info: &StructInfo) -> String {
        let mut out = String::new();
        write_struct(&mut out, info).unwrap();
        out
    }

    fn error(code: &str, status: u16) -> ErrorCodeConfig {
        ErrorCodeConfig {
            code: code.to_owned(),
            message: format!("{code} message"),
            status,
        }
    }

    #[test]
    fn test_should_render_struct_with_builders_and_display() {
        let mut identifier = field("DBClusterIdentifier", FieldKind::String);
        identifier.required = true;
        identifier.doc = Some("The name of the DB cluster.".to_owned());
        let info = StructInfo {
            rust_name: "RemoveRoleFromDBClusterInput".to_owned(),
            shape_name: "RemoveRoleFromDBClusterMessage".to_owned(),
            doc: "Input for the `RemoveRoleFromDBCluster` operation.".to_owned(),
            fields: vec![identifier, field("RoleArn", FieldKind::String)],
        };

        let out = render_struct(&info);
        assert!(out.contains(
            "    /// The name of the DB cluster.\n    ///\n    /// Required.\n    #[serde(\n        rename = \"DBClusterIdentifier\",\n        skip_serializing_if = \"Option::is_none\",\n    )]\n    pub db_cluster_identifier: Option<String>,\n",
        ));
        assert!(out.contains(
            "    #[serde(skip_serializing_if = \"Option::is_none\")]\n    pub role_arn: Option<String>,\n",
        ));
        assert!(out.contains(
            "    pub fn with_role_arn(mut self, input: impl Into<String>) -> Self {\n        self.role_arn = Some(input.into());\n",
        ));
        assert!(out.contains(
            "        ShapeFormatter::new(f)\n            .field(\"DBClusterIdentifier\", self.db_cluster_identifier.as_deref())\n",
        ));
        assert!(out.contains(
            "            .field(\"RoleArn\", self.role_arn.as_deref())\n            .finish()\n",
        ));
        assert!(out.contains(
            "impl Shape for RemoveRoleFromDBClusterInput {\n    const SHAPE_NAME: &'static str = \"RemoveRoleFromDBClusterMessage\";\n}",
        ));
    }

    #[test]
    fn test_should_render_list_builders() {
        let info = StructInfo {
            rust_name: "AddTagsToResourceInput".to_owned(),
            shape_name: "AddTagsToResourceMessage".to_owned(),
            doc: "Input for the `AddTagsToResource` operation.".to_owned(),
            fields: vec![
                field(
                    "Tags",
                    FieldKind::List(Box::new(FieldKind::Shape("Tag".to_owned()))),
                ),
                field(
                    "VpcSecurityGroupIds",
                    FieldKind::List(Box::new(FieldKind::String)),
                ),
            ],
        };

        let out = render_struct(&info);
        assert!(out.contains("    /// Appends to `Tags`, allocating the list when absent.\n"));
        assert!(out.contains(
            "    pub fn with_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {\n        self.tags.get_or_insert_with(Vec::new).extend(inputs);\n",
        ));
        assert!(out.contains(
            "        self.vpc_security_group_ids\n            .get_or_insert_with(Vec::new)\n            .extend(inputs.into_iter().map(Into::into));\n",
        ));
        assert!(out.contains("            .list(\"Tags\", self.tags.as_deref())\n"));
    }

    #[test]
    fn test_should_render_empty_struct() {
        let info = StructInfo {
            rust_name: "Empty".to_owned(),
            shape_name: "Empty".to_owned(),
            doc: "RDS Empty.".to_owned(),
            fields: Vec::new(),
        };

        let out = render_struct(&info);
        assert!(out.contains("pub struct Empty {}\n"));
        assert!(!out.contains("impl Empty {"));
        assert!(out.contains("        ShapeFormatter::new(f).finish()\n"));
    }

    #[test]
    fn test_should_split_display_chain_over_sixty_columns() {
        let info = StructInfo {
            rust_name: "Tag".to_owned(),
            shape_name: "Tag".to_owned(),
            doc: "RDS Tag.".to_owned(),
            fields: vec![field("Key", FieldKind::String)],
        };

        let out = render_struct(&info);
        assert!(out.contains(
            "        ShapeFormatter::new(f)\n            .field(\"Key\", self.key.as_deref())\n            .finish()\n",
        ));
        assert!(!out.contains("ShapeFormatter::new(f).field("));
    }

    #[test]
    fn test_should_wrap_long_lines() {
        let info = StructInfo {
            rust_name: "DBCluster".to_owned(),
            shape_name: "DBCluster".to_owned(),
            doc: "RDS DBCluster.".to_owned(),
            fields: vec![field(
                "EnabledCloudwatchLogsExportsForDatabaseActivityStreams",
                FieldKind::List(Box::new(FieldKind::Enum("LogType".to_owned()))),
            )],
        };

        let out = render_struct(&info);
        assert!(out.contains("    /// See [`LogType`](crate::types::LogType) for known values.\n"));
        assert!(out.contains(
            "    pub fn with_enabled_cloudwatch_logs_exports_for_database_activity_streams(\n        mut self,\n        inputs: impl IntoIterator<Item = impl Into<String>>,\n    ) -> Self {\n",
        ));
        assert!(out.contains(
            "            .list(\n                \"EnabledCloudwatchLogsExportsForDatabaseActivityStreams\",\n                self.enabled_cloudwatch_logs_exports_for_database_activity_streams\n                    .as_deref(),\n            )\n",
        ));
    }

    #[test]
    fn test_should_split_display_call_args_over_sixty_columns() {
        let info = StructInfo {
            rust_name: "CreateDBClusterInput".to_owned(),
            shape_name: "CreateDBClusterMessage".to_owned(),
            doc: "Input for the `CreateDBCluster` operation.".to_owned(),
            fields: vec![
                field("PreSignedUrl", FieldKind::String),
                field("DBClusterParameterGroupName", FieldKind::String),
            ],
        };

        let out = render_struct(&info);
        assert!(out.contains(
            "            .field(\"PreSignedUrl\", self.pre_signed_url.as_deref())\n",
        ));
        assert!(out.contains(
            "            .field(\n                \"DBClusterParameterGroupName\",\n                self.db_cluster_parameter_group_name.as_deref(),\n            )\n",
        ));
    }

    #[test]
    fn test_should_wrap_attribute_args_over_seventy_columns() {
        let skip = "skip_serializing_if = \"Option::is_none\"".to_owned();

        let mut out = String::new();
        let args = ["rename = \"VpnPSK\"".to_owned(), skip.clone()];
        write_attr(&mut out, "    ", "serde", &args).unwrap();
        assert_eq!(
            out,
            "    #[serde(rename = \"VpnPSK\", skip_serializing_if = \"Option::is_none\")]\n"
        );

        let mut out = String::new();
        let args = ["rename = \"DBClusterIdentifier\"".to_owned(), skip];
        write_attr(&mut out, "    ", "serde", &args).unwrap();
        assert_eq!(
            out,
            "    #[serde(\n        rename = \"DBClusterIdentifier\",\n        skip_serializing_if = \"Option::is_none\",\n    )]\n"
        );
    }

    #[test]
    fn test_should_render_double_fields() {
        let info = StructInfo {
            rust_name: "OrderableDBInstanceOption".to_owned(),
            shape_name: "OrderableDBInstanceOption".to_owned(),
            doc: "RDS OrderableDBInstanceOption.".to_owned(),
            fields: vec![field("MinIopsPerGib", FieldKind::Double)],
        };

        let out = render_struct(&info);
        assert!(out.contains("    pub min_iops_per_gib: Option<Double>,\n"));
        assert!(out.contains(
            "    pub fn with_min_iops_per_gib(mut self, input: f64) -> Self {\n        self.min_iops_per_gib = Some(Double(input));\n",
        ));
        assert!(out.contains(
            "            .field(\"MinIopsPerGib\", self.min_iops_per_gib.as_ref())\n",
        ));
    }

    #[test]
    fn test_should_import_double_only_where_used() {
        let plain = StructInfo {
            rust_name: "DescribeOrderableDBInstanceOptionsInput".to_owned(),
            shape_name: "DescribeOrderableDBInstanceOptionsMessage".to_owned(),
            doc: "Input.".to_owned(),
            fields: vec![field("Engine", FieldKind::String)],
        };
        let with_double = StructInfo {
            rust_name: "DescribeCapacityOutput".to_owned(),
            shape_name: "CapacityMessage".to_owned(),
            doc: "Output.".to_owned(),
            fields: vec![field("Capacity", FieldKind::Double)],
        };
        let groups = BTreeMap::from([
            ("instance".to_owned(), vec![plain]),
            ("cluster".to_owned(), vec![with_double]),
        ]);

        let mut files = BTreeMap::new();
        generate_io_modules(&mut files, "output", &groups, "//! Header.").unwrap();
        let cluster = &files["output/cluster.rs"];
        let instance = &files["output/instance.rs"];
        let module = &files["output/mod.rs"];
        assert!(cluster.contains("use crate::shape::{Double, Shape, ShapeFormatter};\n"));
        assert!(instance.contains("use crate::shape::{Shape, ShapeFormatter};\n"));
        assert!(module.contains("mod cluster;\nmod instance;\n"));
    }

    #[test]
    fn test_should_render_enum_conversions() {
        let info = EnumInfo {
            rust_name: "ApplyMethod".to_owned(),
            doc: "When a parameter change takes effect.".to_owned(),
            variants: vec![
                EnumVariantInfo {
                    rust_name: "Immediate".to_owned(),
                    string_value: "immediate".to_owned(),
                },
                EnumVariantInfo {
                    rust_name: "PendingReboot".to_owned(),
                    string_value: "pending-reboot".to_owned(),
                },
            ],
        };

        let mut out = String::new();
        write_enum(&mut out, &info).unwrap();
        assert!(out.contains("    #[serde(rename = \"pending-reboot\")]\n    PendingReboot,\n"));
        assert!(out.contains(
            "    pub const VALUES: &'static [Self] = &[Self::Immediate, Self::PendingReboot];\n",
        ));
        assert!(out.contains("            \"pending-reboot\" => Ok(Self::PendingReboot),\n"));
        assert!(out.contains("            _ => Err(ParseEnumError::new(\"ApplyMethod\", s)),\n"));
    }

    #[test]
    fn test_should_wrap_const_array_over_sixty_columns() {
        let items = [
            "Self::RestoreDBClusterToPointInTime".to_owned(),
            "Self::DescribeDBClusters".to_owned(),
        ];
        let mut out = String::new();
        write_const_array(&mut out, "ALL", &items).unwrap();
        assert_eq!(
            out,
            "    pub const ALL: &'static [Self] = &[\n        Self::RestoreDBClusterToPointInTime,\n        Self::DescribeDBClusters,\n    ];\n"
        );

        let mut out = String::new();
        write_const_array(&mut out, "ALL", &items[1..]).unwrap();
        assert_eq!(
            out,
            "    pub const ALL: &'static [Self] = &[Self::DescribeDBClusters];\n"
        );
    }

    #[test]
    fn test_should_wrap_long_use_lists() {
        let items = [
            "AvailabilityZone",
            "DBClusterMember",
            "DBClusterOptionGroupStatus",
            "DBClusterRole",
            "DomainMembership",
            "Endpoint",
            "Filter",
            "Tag",
            "VpcSecurityGroupMembership",
        ];
        let mut out = String::new();
        write_use_list(&mut out, "crate::types", &items).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "use crate::types::{");
        assert_eq!(*lines.last().unwrap(), "};");
        assert!(lines.iter().all(|l| l.len() <= MAX_LINE_WIDTH));
        assert!(lines[1].starts_with("    AvailabilityZone, "));

        let mut out = String::new();
        write_use_list(&mut out, "crate::types", &["Tag"]).unwrap();
        assert_eq!(out, "use crate::types::Tag;\n");
    }

    #[test]
    fn test_should_group_status_arms() {
        let errors = vec![
            error("InternalFailure", 500),
            error("InvalidSubnet", 400),
            error("InvalidParameterValue", 400),
        ];
        let mut out = String::new();
        write_status_arms(&mut out, &errors).unwrap();
        assert_eq!(
            out,
            "            Self::InvalidSubnet | Self::InvalidParameterValue => http::StatusCode::BAD_REQUEST,\n            Self::InternalFailure => http::StatusCode::INTERNAL_SERVER_ERROR,\n"
        );
    }

    #[test]
    fn test_should_split_long_status_patterns_one_per_line() {
        let errors = vec![
            error("DBClusterNotFoundFault", 404),
            error("DBInstanceNotFound", 404),
            error("DBSnapshotNotFound", 404),
            error("DBSubnetGroupNotFoundFault", 404),
        ];
        let mut out = String::new();
        write_status_arms(&mut out, &errors).unwrap();
        assert_eq!(
            out,
            "            Self::DBClusterNotFoundFault\n            | Self::DBInstanceNotFound\n            | Self::DBSnapshotNotFound\n            | Self::DBSubnetGroupNotFoundFault => http::StatusCode::NOT_FOUND,\n"
        );
    }

    #[test]
    fn test_should_move_long_arm_values_into_block() {
        let mut out = String::new();
        let message = "\"The specified CIDR IP range or Amazon EC2 security group isn't found.\"";
        write_match_arm(&mut out, "Self::AuthorizationNotFound", message).unwrap();
        assert_eq!(
            out,
            "            Self::AuthorizationNotFound => {\n                \"The specified CIDR IP range or Amazon EC2 security group isn't found.\"\n            }\n"
        );

        let mut out = String::new();
        write_match_arm(&mut out, "Self::CreateDBCluster", "\"CreateDBCluster\"").unwrap();
        assert_eq!(
            out,
            "            Self::CreateDBCluster => \"CreateDBCluster\",\n"
        );
    }

    #[test]
    fn test_should_reject_unknown_status() {
        assert!(status_const(418).is_err());
        assert_eq!(status_const(409).unwrap(), "CONFLICT");
    }

    #[test]
    fn test_should_end_files_with_single_newline() {
        assert_eq!(finalize("a\n\n\n".to_owned()), "a\n");
        assert_eq!(finalize("a".to_owned()), "a\n");
    }
}
