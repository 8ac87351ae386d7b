//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::CustomAvailabilityZone;

/// Output of the `CreateCustomAvailabilityZone` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCustomAvailabilityZoneOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_availability_zone: Option<CustomAvailabilityZone>,
}

impl CreateCustomAvailabilityZoneOutput {
    /// Sets `CustomAvailabilityZone`.
    #[must_use]
    pub fn with_custom_availability_zone(mut self, input: CustomAvailabilityZone) -> Self {
        self.custom_availability_zone = Some(input);
        self
    }
}

impl fmt::Display for CreateCustomAvailabilityZoneOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "CustomAvailabilityZone",
                self.custom_availability_zone.as_ref(),
            )
            .finish()
    }
}

impl Shape for CreateCustomAvailabilityZoneOutput {
    const SHAPE_NAME: &'static str = "CreateCustomAvailabilityZoneResult";
}

/// Output of the `DeleteCustomAvailabilityZone` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCustomAvailabilityZoneOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_availability_zone: Option<CustomAvailabilityZone>,
}

impl DeleteCustomAvailabilityZoneOutput {
    /// Sets `CustomAvailabilityZone`.
    #[must_use]
    pub fn with_custom_availability_zone(mut self, input: CustomAvailabilityZone) -> Self {
        self.custom_availability_zone = Some(input);
        self
    }
}

impl fmt::Display for DeleteCustomAvailabilityZoneOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "CustomAvailabilityZone",
                self.custom_availability_zone.as_ref(),
            )
            .finish()
    }
}

impl Shape for DeleteCustomAvailabilityZoneOutput {
    const SHAPE_NAME: &'static str = "DeleteCustomAvailabilityZoneResult";
}

/// Output of the `DescribeCustomAvailabilityZones` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCustomAvailabilityZonesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_availability_zones: Option<Vec<CustomAvailabilityZone>>,
}

impl DescribeCustomAvailabilityZonesOutput {
    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }

    /// Appends to `CustomAvailabilityZones`, allocating the list when absent.
    #[must_use]
    pub fn with_custom_availability_zones(
        mut self,
        inputs: impl IntoIterator<Item = CustomAvailabilityZone>,
    ) -> Self {
        self.custom_availability_zones
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }
}

impl fmt::Display for DescribeCustomAvailabilityZonesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Marker", self.marker.as_deref())
            .list(
                "CustomAvailabilityZones",
                self.custom_availability_zones.as_deref(),
            )
            .finish()
    }
}

impl Shape for DescribeCustomAvailabilityZonesOutput {
    const SHAPE_NAME: &'static str = "CustomAvailabilityZoneMessage";
}
