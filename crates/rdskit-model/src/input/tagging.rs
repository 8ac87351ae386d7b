//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::{Filter, Tag};

/// Input for the `AddTagsToResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddTagsToResourceInput {
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl AddTagsToResourceInput {
    /// Sets `ResourceName`.
    #[must_use]
    pub fn with_resource_name(mut self, input: impl Into<String>) -> Self {
        self.resource_name = Some(input.into());
        self
    }

    /// Appends to `Tags`, allocating the list when absent.
    #[must_use]
    pub fn with_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(inputs);
        self
    }
}

impl fmt::Display for AddTagsToResourceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ResourceName", self.resource_name.as_deref())
            .list("Tags", self.tags.as_deref())
            .finish()
    }
}

impl Shape for AddTagsToResourceInput {
    const SHAPE_NAME: &'static str = "AddTagsToResourceMessage";
}

/// Input for the `ListTagsForResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceInput {
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
}

impl ListTagsForResourceInput {
    /// Sets `ResourceName`.
    #[must_use]
    pub fn with_resource_name(mut self, input: impl Into<String>) -> Self {
        self.resource_name = Some(input.into());
        self
    }

    /// Appends to `Filters`, allocating the list when absent.
    #[must_use]
    pub fn with_filters(mut self, inputs: impl IntoIterator<Item = Filter>) -> Self {
        self.filters.get_or_insert_with(Vec::new).extend(inputs);
        self
    }
}

impl fmt::Display for ListTagsForResourceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ResourceName", self.resource_name.as_deref())
            .list("Filters", self.filters.as_deref())
            .finish()
    }
}

impl Shape for ListTagsForResourceInput {
    const SHAPE_NAME: &'static str = "ListTagsForResourceMessage";
}

/// Input for the `RemoveTagsFromResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveTagsFromResourceInput {
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

impl RemoveTagsFromResourceInput {
    /// Sets `ResourceName`.
    #[must_use]
    pub fn with_resource_name(mut self, input: impl Into<String>) -> Self {
        self.resource_name = Some(input.into());
        self
    }

    /// Appends to `TagKeys`, allocating the list when absent.
    #[must_use]
    pub fn with_tag_keys(mut self, inputs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tag_keys
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for RemoveTagsFromResourceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ResourceName", self.resource_name.as_deref())
            .list("TagKeys", self.tag_keys.as_deref())
            .finish()
    }
}

impl Shape for RemoveTagsFromResourceInput {
    const SHAPE_NAME: &'static str = "RemoveTagsFromResourceMessage";
}
