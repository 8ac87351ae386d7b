//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::OptionGroup;

/// Output of the `DescribeOptionGroups` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOptionGroupsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_groups_list: Option<Vec<OptionGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeOptionGroupsOutput {
    /// Appends to `OptionGroupsList`, allocating the list when absent.
    #[must_use]
    pub fn with_option_groups_list(
        mut self,
        inputs: impl IntoIterator<Item = OptionGroup>,
    ) -> Self {
        self.option_groups_list
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }
}

impl fmt::Display for DescribeOptionGroupsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("OptionGroupsList", self.option_groups_list.as_deref())
            .field("Marker", self.marker.as_deref())
            .finish()
    }
}

impl Shape for DescribeOptionGroupsOutput {
    const SHAPE_NAME: &'static str = "OptionGroups";
}

/// Output of the `ModifyOptionGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyOptionGroupOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group: Option<OptionGroup>,
}

impl ModifyOptionGroupOutput {
    /// Sets `OptionGroup`.
    #[must_use]
    pub fn with_option_group(mut self, input: OptionGroup) -> Self {
        self.option_group = Some(input);
        self
    }
}

impl fmt::Display for ModifyOptionGroupOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("OptionGroup", self.option_group.as_ref())
            .finish()
    }
}

impl Shape for ModifyOptionGroupOutput {
    const SHAPE_NAME: &'static str = "ModifyOptionGroupResult";
}
