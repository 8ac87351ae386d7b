//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::{Filter, Parameter, Tag};

/// Input for the `CreateDBClusterParameterGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDBClusterParameterGroupInput {
    /// Required.
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group_name: Option<String>,
    /// Required.
    #[serde(
        rename = "DBParameterGroupFamily",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_parameter_group_family: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateDBClusterParameterGroupInput {
    /// Sets `DBClusterParameterGroupName`.
    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
        self
    }

    /// Sets `DBParameterGroupFamily`.
    #[must_use]
    pub fn with_db_parameter_group_family(mut self, input: impl Into<String>) -> Self {
        self.db_parameter_group_family = Some(input.into());
        self
    }

    /// Sets `Description`.
    #[must_use]
    pub fn with_description(mut self, input: impl Into<String>) -> Self {
        self.description = Some(input.into());
        self
    }

    /// Appends to `Tags`, allocating the list when absent.
    #[must_use]
    pub fn with_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(inputs);
        self
    }
}

impl fmt::Display for CreateDBClusterParameterGroupInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBClusterParameterGroupName",
                self.db_cluster_parameter_group_name.as_deref(),
            )
            .field(
                "DBParameterGroupFamily",
                self.db_parameter_group_family.as_deref(),
            )
            .field("Description", self.description.as_deref())
            .list("Tags", self.tags.as_deref())
            .finish()
    }
}

impl Shape for CreateDBClusterParameterGroupInput {
    const SHAPE_NAME: &'static str = "CreateDBClusterParameterGroupMessage";
}

/// Input for the `DescribeDBClusterParameterGroups` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDBClusterParameterGroupsInput {
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeDBClusterParameterGroupsInput {
    /// Sets `DBClusterParameterGroupName`.
    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
        self
    }

    /// Appends to `Filters`, allocating the list when absent.
    #[must_use]
    pub fn with_filters(mut self, inputs: impl IntoIterator<Item = Filter>) -> Self {
        self.filters.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `MaxRecords`.
    #[must_use]
    pub fn with_max_records(mut self, input: i32) -> Self {
        self.max_records = Some(input);
        self
    }

    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }
}

impl fmt::Display for DescribeDBClusterParameterGroupsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBClusterParameterGroupName",
                self.db_cluster_parameter_group_name.as_deref(),
            )
            .list("Filters", self.filters.as_deref())
            .field("MaxRecords", self.max_records.as_ref())
            .field("Marker", self.marker.as_deref())
            .finish()
    }
}

impl Shape for DescribeDBClusterParameterGroupsInput {
    const SHAPE_NAME: &'static str = "DescribeDBClusterParameterGroupsMessage";
}

/// Input for the `DescribeEngineDefaultClusterParameters` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEngineDefaultClusterParametersInput {
    /// Required.
    #[serde(
        rename = "DBParameterGroupFamily",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_parameter_group_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeEngineDefaultClusterParametersInput {
    /// Sets `DBParameterGroupFamily`.
    #[must_use]
    pub fn with_db_parameter_group_family(mut self, input: impl Into<String>) -> Self {
        self.db_parameter_group_family = Some(input.into());
        self
    }

    /// Appends to `Filters`, allocating the list when absent.
    #[must_use]
    pub fn with_filters(mut self, inputs: impl IntoIterator<Item = Filter>) -> Self {
        self.filters.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `MaxRecords`.
    #[must_use]
    pub fn with_max_records(mut self, input: i32) -> Self {
        self.max_records = Some(input);
        self
    }

    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }
}

impl fmt::Display for DescribeEngineDefaultClusterParametersInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBParameterGroupFamily",
                self.db_parameter_group_family.as_deref(),
            )
            .list("Filters", self.filters.as_deref())
            .field("MaxRecords", self.max_records.as_ref())
            .field("Marker", self.marker.as_deref())
            .finish()
    }
}

impl Shape for DescribeEngineDefaultClusterParametersInput {
    const SHAPE_NAME: &'static str = "DescribeEngineDefaultClusterParametersMessage";
}

/// Input for the `ModifyDBClusterParameterGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDBClusterParameterGroupInput {
    /// Required.
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group_name: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
}

impl ModifyDBClusterParameterGroupInput {
    /// Sets `DBClusterParameterGroupName`.
    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
        self
    }

    /// Appends to `Parameters`, allocating the list when absent.
    #[must_use]
    pub fn with_parameters(mut self, inputs: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.get_or_insert_with(Vec::new).extend(inputs);
        self
    }
}

impl fmt::Display for ModifyDBClusterParameterGroupInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBClusterParameterGroupName",
                self.db_cluster_parameter_group_name.as_deref(),
            )
            .list("Parameters", self.parameters.as_deref())
            .finish()
    }
}

impl Shape for ModifyDBClusterParameterGroupInput {
    const SHAPE_NAME: &'static str = "ModifyDBClusterParameterGroupMessage";
}
