//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::Tag;

/// Output of the `ListTagsForResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_list: Option<Vec<Tag>>,
}

impl ListTagsForResourceOutput {
    /// Appends to `TagList`, allocating the list when absent.
    #[must_use]
    pub fn with_tag_list(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tag_list.get_or_insert_with(Vec::new).extend(inputs);
        self
    }
}

impl fmt::Display for ListTagsForResourceOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("TagList", self.tag_list.as_deref())
            .finish()
    }
}

impl Shape for ListTagsForResourceOutput {
    const SHAPE_NAME: &'static str = "TagListMessage";
}
