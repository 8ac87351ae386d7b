//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::{Filter, OptionConfiguration};

/// Input for the `DescribeOptionGroups` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOptionGroupsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_engine_version: Option<String>,
}

impl DescribeOptionGroupsInput {
    /// Sets `OptionGroupName`.
    #[must_use]
    pub fn with_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Appends to `Filters`, allocating the list when absent.
    #[must_use]
    pub fn with_filters(mut self, inputs: impl IntoIterator<Item = Filter>) -> Self {
        self.filters.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }

    /// Sets `MaxRecords`.
    #[must_use]
    pub fn with_max_records(mut self, input: i32) -> Self {
        self.max_records = Some(input);
        self
    }

    /// Sets `EngineName`.
    #[must_use]
    pub fn with_engine_name(mut self, input: impl Into<String>) -> Self {
        self.engine_name = Some(input.into());
        self
    }

    /// Sets `MajorEngineVersion`.
    #[must_use]
    pub fn with_major_engine_version(mut self, input: impl Into<String>) -> Self {
        self.major_engine_version = Some(input.into());
        self
    }
}

impl fmt::Display for DescribeOptionGroupsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("OptionGroupName", self.option_group_name.as_deref())
            .list("Filters", self.filters.as_deref())
            .field("Marker", self.marker.as_deref())
            .field("MaxRecords", self.max_records.as_ref())
            .field("EngineName", self.engine_name.as_deref())
            .field("MajorEngineVersion", self.major_engine_version.as_deref())
            .finish()
    }
}

impl Shape for DescribeOptionGroupsInput {
    const SHAPE_NAME: &'static str = "DescribeOptionGroupsMessage";
}

/// Input for the `ModifyOptionGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyOptionGroupInput {
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_to_include: Option<Vec<OptionConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_to_remove: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_immediately: Option<bool>,
}

impl ModifyOptionGroupInput {
    /// Sets `OptionGroupName`.
    #[must_use]
    pub fn with_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Appends to `OptionsToInclude`, allocating the list when absent.
    #[must_use]
    pub fn with_options_to_include(
        mut self,
        inputs: impl IntoIterator<Item = OptionConfiguration>,
    ) -> Self {
        self.options_to_include
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Appends to `OptionsToRemove`, allocating the list when absent.
    #[must_use]
    pub fn with_options_to_remove(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.options_to_remove
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Sets `ApplyImmediately`.
    #[must_use]
    pub fn with_apply_immediately(mut self, input: bool) -> Self {
        self.apply_immediately = Some(input);
        self
    }
}

impl fmt::Display for ModifyOptionGroupInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("OptionGroupName", self.option_group_name.as_deref())
            .list("OptionsToInclude", self.options_to_include.as_deref())
            .list("OptionsToRemove", self.options_to_remove.as_deref())
            .field("ApplyImmediately", self.apply_immediately.as_ref())
            .finish()
    }
}

impl Shape for ModifyOptionGroupInput {
    const SHAPE_NAME: &'static str = "ModifyOptionGroupMessage";
}
