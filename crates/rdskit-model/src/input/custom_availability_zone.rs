//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::Filter;

/// Input for the `CreateCustomAvailabilityZone` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCustomAvailabilityZoneInput {
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_availability_zone_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_vpn_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_vpn_tunnel_name: Option<String>,
    #[serde(
        rename = "VpnTunnelOriginatorIP",
        skip_serializing_if = "Option::is_none",
    )]
    pub vpn_tunnel_originator_ip: Option<String>,
}

impl CreateCustomAvailabilityZoneInput {
    /// Sets `CustomAvailabilityZoneName`.
    #[must_use]
    pub fn with_custom_availability_zone_name(mut self, input: impl Into<String>) -> Self {
        self.custom_availability_zone_name = Some(input.into());
        self
    }

    /// Sets `ExistingVpnId`.
    #[must_use]
    pub fn with_existing_vpn_id(mut self, input: impl Into<String>) -> Self {
        self.existing_vpn_id = Some(input.into());
        self
    }

    /// Sets `NewVpnTunnelName`.
    #[must_use]
    pub fn with_new_vpn_tunnel_name(mut self, input: impl Into<String>) -> Self {
        self.new_vpn_tunnel_name = Some(input.into());
        self
    }

    /// Sets `VpnTunnelOriginatorIP`.
    #[must_use]
    pub fn with_vpn_tunnel_originator_ip(mut self, input: impl Into<String>) -> Self {
        self.vpn_tunnel_originator_ip = Some(input.into());
        self
    }
}

impl fmt::Display for CreateCustomAvailabilityZoneInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "CustomAvailabilityZoneName",
                self.custom_availability_zone_name.as_deref(),
            )
            .field("ExistingVpnId", self.existing_vpn_id.as_deref())
            .field("NewVpnTunnelName", self.new_vpn_tunnel_name.as_deref())
            .field(
                "VpnTunnelOriginatorIP",
                self.vpn_tunnel_originator_ip.as_deref(),
            )
            .finish()
    }
}

impl Shape for CreateCustomAvailabilityZoneInput {
    const SHAPE_NAME: &'static str = "CreateCustomAvailabilityZoneMessage";
}

/// Input for the `DeleteCustomAvailabilityZone` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCustomAvailabilityZoneInput {
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_availability_zone_id: Option<String>,
}

impl DeleteCustomAvailabilityZoneInput {
    /// Sets `CustomAvailabilityZoneId`.
    #[must_use]
    pub fn with_custom_availability_zone_id(mut self, input: impl Into<String>) -> Self {
        self.custom_availability_zone_id = Some(input.into());
        self
    }
}

impl fmt::Display for DeleteCustomAvailabilityZoneInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "CustomAvailabilityZoneId",
                self.custom_availability_zone_id.as_deref(),
            )
            .finish()
    }
}

impl Shape for DeleteCustomAvailabilityZoneInput {
    const SHAPE_NAME: &'static str = "DeleteCustomAvailabilityZoneMessage";
}

/// Input for the `DescribeCustomAvailabilityZones` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCustomAvailabilityZonesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_availability_zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeCustomAvailabilityZonesInput {
    /// Sets `CustomAvailabilityZoneId`.
    #[must_use]
    pub fn with_custom_availability_zone_id(mut self, input: impl Into<String>) -> Self {
        self.custom_availability_zone_id = Some(input.into());
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

impl fmt::Display for DescribeCustomAvailabilityZonesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "CustomAvailabilityZoneId",
                self.custom_availability_zone_id.as_deref(),
            )
            .list("Filters", self.filters.as_deref())
            .field("MaxRecords", self.max_records.as_ref())
            .field("Marker", self.marker.as_deref())
            .finish()
    }
}

impl Shape for DescribeCustomAvailabilityZonesInput {
    const SHAPE_NAME: &'static str = "DescribeCustomAvailabilityZonesMessage";
}
