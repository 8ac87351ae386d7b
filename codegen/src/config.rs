//! Generator configuration loaded from a TOML file.
//!
//! Relative paths in the `[paths]` table resolve against the directory that
//! contains the configuration file.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use serde::Deserialize;

/// Default configuration file name, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "rds.toml";

/// Top-level generator configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodegenConfig {
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Service naming.
    pub service: ServiceConfig,
    /// Model input and source output locations.
    pub paths: PathsConfig,
    /// Operation groups: group name to operation names, in generation order.
    pub operations: BTreeMap<String, Vec<String>>,
    /// Service faults rendered into the error catalogue.
    #[serde(default)]
    pub errors: Vec<ErrorCodeConfig>,
}

/// Naming of the generated service model.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Smithy namespace of the service shapes, e.g. `com.amazonaws.rds`.
    pub namespace: String,
    /// Human-readable service name used in generated docs.
    pub display_name: String,
    /// Prefix for generated catalogue types and reserved shape names.
    pub type_prefix: String,
    /// Rust crate name of the generated model, used in doc examples.
    pub crate_name: String,
    /// First line of every generated file.
    pub header: String,
}

/// Input and output locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Smithy JSON AST model file.
    pub model: PathBuf,
    /// Directory receiving the generated sources.
    pub output: PathBuf,
}

/// One modelled service fault.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorCodeConfig {
    /// Fault code as returned by the service.
    pub code: String,
    /// Default message.
    pub message: String,
    /// Default HTTP status.
    pub status: u16,
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl CodegenConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_toml(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.paths.model = base.join(&config.paths.model);
        config.paths.output = base.join(&config.paths.output);
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Shape ID prefix of the service namespace, e.g. `com.amazonaws.rds#`.
    pub fn namespace_prefix(&self) -> String {
        format!("{}#", self.service.namespace)
    }

    /// Total number of configured operations.
    pub fn operation_count(&self) -> usize {
        self.operations.values().map(Vec::len).sum()
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            !self.service.type_prefix.is_empty(),
            "service.type_prefix must not be empty"
        );
        ensure!(
            self.operation_count() > 0,
            "at least one operation must be configured"
        );
        ensure!(
            !self.errors.is_empty(),
            "at least one error code must be configured"
        );

        let mut seen = BTreeSet::new();
        for (group, ops) in &self.operations {
            if !is_module_name(group) {
                bail!("operation group {group:?} is not a valid module name");
            }
            for op in ops {
                if !seen.insert(op.as_str()) {
                    bail!("operation {op} is configured more than once");
                }
            }
        }

        let mut codes = BTreeSet::new();
        for error in &self.errors {
            if !codes.insert(error.code.as_str()) {
                bail!("error code {} is configured more than once", error.code);
            }
            if error.message.contains(['"', '\\']) {
                bail!(
                    "message of error code {} must not contain quotes or backslashes",
                    error.code
                );
            }
        }
        Ok(())
    }
}

fn is_module_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[service]
namespace = "com.amazonaws.rds"
display_name = "RDS"
type_prefix = "Rds"
crate_name = "rdskit_model"
header = "//! Generated."

[paths]
model = "smithy-model/rds.json"
output = "../crates/rdskit-model/src"

[operations]
tagging = ["AddTagsToResource", "ListTagsForResource"]
cluster = ["DescribeDBClusters"]

[[errors]]
code = "DBClusterNotFoundFault"
message = "DBClusterIdentifier doesn't refer to an existing DB cluster"
status = 404
"#;

    #[test]
    fn test_should_parse_minimal_config() {
        let config = CodegenConfig::from_toml(MINIMAL).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.namespace_prefix(), "com.amazonaws.rds#");
        assert_eq!(config.operation_count(), 3);
        assert_eq!(config.errors[0].status, 404);
    }

    #[test]
    fn test_should_keep_groups_sorted_and_operations_in_order() {
        let config = CodegenConfig::from_toml(MINIMAL).unwrap();
        let groups: Vec<&str> = config.operations.keys().map(String::as_str).collect();
        assert_eq!(groups, vec!["cluster", "tagging"]);
        assert_eq!(
            config.operations["tagging"],
            vec!["AddTagsToResource", "ListTagsForResource"]
        );
    }

    #[test]
    fn test_should_reject_duplicate_operation() {
        let text = MINIMAL.replace(
            r#"cluster = ["DescribeDBClusters"]"#,
            r#"cluster = ["DescribeDBClusters", "AddTagsToResource"]"#,
        );
        let err = CodegenConfig::from_toml(&text).unwrap_err();
        assert!(err.to_string().contains("AddTagsToResource"));
    }

    #[test]
    fn test_should_reject_invalid_group_name() {
        let text = MINIMAL.replace("cluster = [", "Cluster-Ops = [");
        assert!(CodegenConfig::from_toml(&text).is_err());
    }

    #[test]
    fn test_should_reject_unknown_keys() {
        let text = format!("verbose = true\n{MINIMAL}");
        assert!(CodegenConfig::from_toml(&text).is_err());
    }

    #[test]
    fn test_should_resolve_paths_against_config_directory() {
        let dir_name = format!("rdskit-codegen-config-{}", std::process::id());
        let dir = std::env::temp_dir().join(dir_name);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rds.toml");
        fs::write(&path, MINIMAL).unwrap();

        let config = CodegenConfig::load(&path).unwrap();
        assert_eq!(config.paths.model, dir.join("smithy-model/rds.json"));
        assert_eq!(config.paths.output, dir.join("../crates/rdskit-model/src"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
