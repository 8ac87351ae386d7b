//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::Filter;

/// Input for the `DescribeEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEventsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_identifier: Option<String>,
    /// See [`SourceType`](crate::types::SourceType) for known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    /// The number of minutes to retrieve events for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeEventsInput {
    /// Sets `SourceIdentifier`.
    #[must_use]
    pub fn with_source_identifier(mut self, input: impl Into<String>) -> Self {
        self.source_identifier = Some(input.into());
        self
    }

    /// Sets `SourceType`.
    #[must_use]
    pub fn with_source_type(mut self, input: impl Into<String>) -> Self {
        self.source_type = Some(input.into());
        self
    }

    /// Sets `StartTime`.
    #[must_use]
    pub fn with_start_time(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.start_time = Some(input);
        self
    }

    /// Sets `EndTime`.
    #[must_use]
    pub fn with_end_time(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.end_time = Some(input);
        self
    }

    /// Sets `Duration`.
    #[must_use]
    pub fn with_duration(mut self, input: i32) -> Self {
        self.duration = Some(input);
        self
    }

    /// Appends to `EventCategories`, allocating the list when absent.
    #[must_use]
    pub fn with_event_categories(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.event_categories
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
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

impl fmt::Display for DescribeEventsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("SourceIdentifier", self.source_identifier.as_deref())
            .field("SourceType", self.source_type.as_deref())
            .field("StartTime", self.start_time.as_ref())
            .field("EndTime", self.end_time.as_ref())
            .field("Duration", self.duration.as_ref())
            .list("EventCategories", self.event_categories.as_deref())
            .list("Filters", self.filters.as_deref())
            .field("MaxRecords", self.max_records.as_ref())
            .field("Marker", self.marker.as_deref())
            .finish()
    }
}

impl Shape for DescribeEventsInput {
    const SHAPE_NAME: &'static str = "DescribeEventsMessage";
}
