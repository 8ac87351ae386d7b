//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::Event;

/// Output of the `DescribeEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEventsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
}

impl DescribeEventsOutput {
    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }

    /// Appends to `Events`, allocating the list when absent.
    #[must_use]
    pub fn with_events(mut self, inputs: impl IntoIterator<Item = Event>) -> Self {
        self.events.get_or_insert_with(Vec::new).extend(inputs);
        self
    }
}

impl fmt::Display for DescribeEventsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Marker", self.marker.as_deref())
            .list("Events", self.events.as_deref())
            .finish()
    }
}

impl Shape for DescribeEventsOutput {
    const SHAPE_NAME: &'static str = "EventsMessage";
}
