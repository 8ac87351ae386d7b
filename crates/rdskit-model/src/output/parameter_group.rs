//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::{DBClusterParameterGroup, EngineDefaults};

/// Output of the `CreateDBClusterParameterGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDBClusterParameterGroupOutput {
    #[serde(
        rename = "DBClusterParameterGroup",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group: Option<DBClusterParameterGroup>,
}

impl CreateDBClusterParameterGroupOutput {
    /// Sets `DBClusterParameterGroup`.
    #[must_use]
    pub fn with_db_cluster_parameter_group(mut self, input: DBClusterParameterGroup) -> Self {
        self.db_cluster_parameter_group = Some(input);
        self
    }
}

impl fmt::Display for CreateDBClusterParameterGroupOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBClusterParameterGroup",
                self.db_cluster_parameter_group.as_ref(),
            )
            .finish()
    }
}

impl Shape for CreateDBClusterParameterGroupOutput {
    const SHAPE_NAME: &'static str = "CreateDBClusterParameterGroupResult";
}

/// Output of the `DescribeDBClusterParameterGroups` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDBClusterParameterGroupsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(
        rename = "DBClusterParameterGroups",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_groups: Option<Vec<DBClusterParameterGroup>>,
}

impl DescribeDBClusterParameterGroupsOutput {
    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }

    /// Appends to `DBClusterParameterGroups`, allocating the list when absent.
    #[must_use]
    pub fn with_db_cluster_parameter_groups(
        mut self,
        inputs: impl IntoIterator<Item = DBClusterParameterGroup>,
    ) -> Self {
        self.db_cluster_parameter_groups
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }
}

impl fmt::Display for DescribeDBClusterParameterGroupsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Marker", self.marker.as_deref())
            .list(
                "DBClusterParameterGroups",
                self.db_cluster_parameter_groups.as_deref(),
            )
            .finish()
    }
}

impl Shape for DescribeDBClusterParameterGroupsOutput {
    const SHAPE_NAME: &'static str = "DBClusterParameterGroupsMessage";
}

/// Output of the `DescribeEngineDefaultClusterParameters` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEngineDefaultClusterParametersOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_defaults: Option<EngineDefaults>,
}

impl DescribeEngineDefaultClusterParametersOutput {
    /// Sets `EngineDefaults`.
    #[must_use]
    pub fn with_engine_defaults(mut self, input: EngineDefaults) -> Self {
        self.engine_defaults = Some(input);
        self
    }
}

impl fmt::Display for DescribeEngineDefaultClusterParametersOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("EngineDefaults", self.engine_defaults.as_ref())
            .finish()
    }
}

impl Shape for DescribeEngineDefaultClusterParametersOutput {
    const SHAPE_NAME: &'static str = "DescribeEngineDefaultClusterParametersResult";
}

/// Output of the `ModifyDBClusterParameterGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDBClusterParameterGroupOutput {
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group_name: Option<String>,
}

impl ModifyDBClusterParameterGroupOutput {
    /// Sets `DBClusterParameterGroupName`.
    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
        self
    }
}

impl fmt::Display for ModifyDBClusterParameterGroupOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBClusterParameterGroupName",
                self.db_cluster_parameter_group_name.as_deref(),
            )
            .finish()
    }
}

impl Shape for ModifyDBClusterParameterGroupOutput {
    const SHAPE_NAME: &'static str = "DBClusterParameterGroupNameMessage";
}
