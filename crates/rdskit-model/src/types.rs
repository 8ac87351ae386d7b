//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shape::{Double, ParseEnumError, Shape, ShapeFormatter};

/// RDS ActivityStreamMode enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityStreamMode {
    #[serde(rename = "sync")]
    Sync,
    #[serde(rename = "async")]
    Async,
}

impl ActivityStreamMode {
    /// Every known value, in model order.
    pub const VALUES: &'static [Self] = &[Self::Sync, Self::Async];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Async => "async",
        }
    }
}

impl fmt::Display for ActivityStreamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityStreamMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sync" => Ok(Self::Sync),
            "async" => Ok(Self::Async),
            _ => Err(ParseEnumError::new("ActivityStreamMode", s)),
        }
    }
}

impl From<ActivityStreamMode> for String {
    fn from(value: ActivityStreamMode) -> Self {
        value.as_str().to_owned()
    }
}

/// RDS ActivityStreamStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityStreamStatus {
    #[serde(rename = "stopped")]
    Stopped,
    #[serde(rename = "starting")]
    Starting,
    #[serde(rename = "started")]
    Started,
    #[serde(rename = "stopping")]
    Stopping,
}

impl ActivityStreamStatus {
    /// Every known value, in model order.
    pub const VALUES: &'static [Self] = &[
        Self::Stopped,
        Self::Starting,
        Self::Started,
        Self::Stopping,
    ];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Starting => "starting",
            Self::Started => "started",
            Self::Stopping => "stopping",
        }
    }
}

impl fmt::Display for ActivityStreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityStreamStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stopped" => Ok(Self::Stopped),
            "starting" => Ok(Self::Starting),
            "started" => Ok(Self::Started),
            "stopping" => Ok(Self::Stopping),
            _ => Err(ParseEnumError::new("ActivityStreamStatus", s)),
        }
    }
}

impl From<ActivityStreamStatus> for String {
    fn from(value: ActivityStreamStatus) -> Self {
        value.as_str().to_owned()
    }
}

/// When a parameter change takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplyMethod {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "pending-reboot")]
    PendingReboot,
}

impl ApplyMethod {
    /// Every known value, in model order.
    pub const VALUES: &'static [Self] = &[Self::Immediate, Self::PendingReboot];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::PendingReboot => "pending-reboot",
        }
    }
}

impl fmt::Display for ApplyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplyMethod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "immediate" => Ok(Self::Immediate),
            "pending-reboot" => Ok(Self::PendingReboot),
            _ => Err(ParseEnumError::new("ApplyMethod", s)),
        }
    }
}

impl From<ApplyMethod> for String {
    fn from(value: ApplyMethod) -> Self {
        value.as_str().to_owned()
    }
}

/// RDS AuthScheme enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthScheme {
    #[serde(rename = "SECRETS")]
    Secrets,
}

impl AuthScheme {
    /// Every known value, in model order.
    pub const VALUES: &'static [Self] = &[Self::Secrets];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Secrets => "SECRETS",
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthScheme {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SECRETS" => Ok(Self::Secrets),
            _ => Err(ParseEnumError::new("AuthScheme", s)),
        }
    }
}

impl From<AuthScheme> for String {
    fn from(value: AuthScheme) -> Self {
        value.as_str().to_owned()
    }
}

/// The lifecycle state of a DB proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DBProxyStatus {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "modifying")]
    Modifying,
    #[serde(rename = "incompatible-network")]
    IncompatibleNetwork,
    #[serde(rename = "insufficient-resource-limits")]
    InsufficientResourceLimits,
    #[serde(rename = "creating")]
    Creating,
    #[serde(rename = "deleting")]
    Deleting,
    #[serde(rename = "suspended")]
    Suspended,
    #[serde(rename = "suspending")]
    Suspending,
    #[serde(rename = "reactivating")]
    Reactivating,
}

impl DBProxyStatus {
    /// Every known value, in model order.
    pub const VALUES: &'static [Self] = &[
        Self::Available,
        Self::Modifying,
        Self::IncompatibleNetwork,
        Self::InsufficientResourceLimits,
        Self::Creating,
        Self::Deleting,
        Self::Suspended,
        Self::Suspending,
        Self::Reactivating,
    ];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Modifying => "modifying",
            Self::IncompatibleNetwork => "incompatible-network",
            Self::InsufficientResourceLimits => "insufficient-resource-limits",
            Self::Creating => "creating",
            Self::Deleting => "deleting",
            Self::Suspended => "suspended",
            Self::Suspending => "suspending",
            Self::Reactivating => "reactivating",
        }
    }
}

impl fmt::Display for DBProxyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DBProxyStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "modifying" => Ok(Self::Modifying),
            "incompatible-network" => Ok(Self::IncompatibleNetwork),
            "insufficient-resource-limits" => Ok(Self::InsufficientResourceLimits),
            "creating" => Ok(Self::Creating),
            "deleting" => Ok(Self::Deleting),
            "suspended" => Ok(Self::Suspended),
            "suspending" => Ok(Self::Suspending),
            "reactivating" => Ok(Self::Reactivating),
            _ => Err(ParseEnumError::new("DBProxyStatus", s)),
        }
    }
}

impl From<DBProxyStatus> for String {
    fn from(value: DBProxyStatus) -> Self {
        value.as_str().to_owned()
    }
}

/// RDS EngineFamily enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineFamily {
    #[serde(rename = "MYSQL")]
    Mysql,
    #[serde(rename = "POSTGRESQL")]
    Postgresql,
}

impl EngineFamily {
    /// Every known value, in model order.
    pub const VALUES: &'static [Self] = &[Self::Mysql, Self::Postgresql];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mysql => "MYSQL",
            Self::Postgresql => "POSTGRESQL",
        }
    }
}

impl fmt::Display for EngineFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineFamily {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MYSQL" => Ok(Self::Mysql),
            "POSTGRESQL" => Ok(Self::Postgresql),
            _ => Err(ParseEnumError::new("EngineFamily", s)),
        }
    }
}

impl From<EngineFamily> for String {
    fn from(value: EngineFamily) -> Self {
        value.as_str().to_owned()
    }
}

/// RDS IAMAuthMode enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IAMAuthMode {
    #[serde(rename = "DISABLED")]
    Disabled,
    #[serde(rename = "REQUIRED")]
    Required,
}

impl IAMAuthMode {
    /// Every known value, in model order.
    pub const VALUES: &'static [Self] = &[Self::Disabled, Self::Required];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "DISABLED",
            Self::Required => "REQUIRED",
        }
    }
}

impl fmt::Display for IAMAuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IAMAuthMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DISABLED" => Ok(Self::Disabled),
            "REQUIRED" => Ok(Self::Required),
            _ => Err(ParseEnumError::new("IAMAuthMode", s)),
        }
    }
}

impl From<IAMAuthMode> for String {
    fn from(value: IAMAuthMode) -> Self {
        value.as_str().to_owned()
    }
}

/// The type of resource an event originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    #[serde(rename = "db-instance")]
    DbInstance,
    #[serde(rename = "db-parameter-group")]
    DbParameterGroup,
    #[serde(rename = "db-security-group")]
    DbSecurityGroup,
    #[serde(rename = "db-snapshot")]
    DbSnapshot,
    #[serde(rename = "db-cluster")]
    DbCluster,
    #[serde(rename = "db-cluster-snapshot")]
    DbClusterSnapshot,
}

impl SourceType {
    /// Every known value, in model order.
    pub const VALUES: &'static [Self] = &[
        Self::DbInstance,
        Self::DbParameterGroup,
        Self::DbSecurityGroup,
        Self::DbSnapshot,
        Self::DbCluster,
        Self::DbClusterSnapshot,
    ];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DbInstance => "db-instance",
            Self::DbParameterGroup => "db-parameter-group",
            Self::DbSecurityGroup => "db-security-group",
            Self::DbSnapshot => "db-snapshot",
            Self::DbCluster => "db-cluster",
            Self::DbClusterSnapshot => "db-cluster-snapshot",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "db-instance" => Ok(Self::DbInstance),
            "db-parameter-group" => Ok(Self::DbParameterGroup),
            "db-security-group" => Ok(Self::DbSecurityGroup),
            "db-snapshot" => Ok(Self::DbSnapshot),
            "db-cluster" => Ok(Self::DbCluster),
            "db-cluster-snapshot" => Ok(Self::DbClusterSnapshot),
            _ => Err(ParseEnumError::new("SourceType", s)),
        }
    }
}

impl From<SourceType> for String {
    fn from(value: SourceType) -> Self {
        value.as_str().to_owned()
    }
}

/// RDS WriteForwardingStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WriteForwardingStatus {
    #[serde(rename = "enabled")]
    Enabled,
    #[serde(rename = "disabled")]
    Disabled,
    #[serde(rename = "enabling")]
    Enabling,
    #[serde(rename = "disabling")]
    Disabling,
    #[serde(rename = "unknown")]
    Unknown,
}

impl WriteForwardingStatus {
    /// Every known value, in model order.
    pub const VALUES: &'static [Self] = &[
        Self::Enabled,
        Self::Disabled,
        Self::Enabling,
        Self::Disabling,
        Self::Unknown,
    ];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Enabling => "enabling",
            Self::Disabling => "disabling",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for WriteForwardingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WriteForwardingStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            "enabling" => Ok(Self::Enabling),
            "disabling" => Ok(Self::Disabling),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseEnumError::new("WriteForwardingStatus", s)),
        }
    }
}

impl From<WriteForwardingStatus> for String {
    fn from(value: WriteForwardingStatus) -> Self {
        value.as_str().to_owned()
    }
}

/// RDS AvailabilityZone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailabilityZone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AvailabilityZone {
    /// Sets `Name`.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }
}

impl fmt::Display for AvailabilityZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Name", self.name.as_deref())
            .finish()
    }
}

impl Shape for AvailabilityZone {
    const SHAPE_NAME: &'static str = "AvailabilityZone";
}

/// Contains the available processor feature information for the DB instance class of a DB instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailableProcessorFeature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<String>,
}

impl AvailableProcessorFeature {
    /// Sets `Name`.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// Sets `DefaultValue`.
    #[must_use]
    pub fn with_default_value(mut self, input: impl Into<String>) -> Self {
        self.default_value = Some(input.into());
        self
    }

    /// Sets `AllowedValues`.
    #[must_use]
    pub fn with_allowed_values(mut self, input: impl Into<String>) -> Self {
        self.allowed_values = Some(input.into());
        self
    }
}

impl fmt::Display for AvailableProcessorFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Name", self.name.as_deref())
            .field("DefaultValue", self.default_value.as_deref())
            .field("AllowedValues", self.allowed_values.as_deref())
            .finish()
    }
}

impl Shape for AvailableProcessorFeature {
    const SHAPE_NAME: &'static str = "AvailableProcessorFeature";
}

/// The configuration setting for the log types to be enabled for export to CloudWatch Logs for a specific DB instance or DB cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudwatchLogsExportConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_log_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_log_types: Option<Vec<String>>,
}

impl CloudwatchLogsExportConfiguration {
    /// Appends to `EnableLogTypes`, allocating the list when absent.
    #[must_use]
    pub fn with_enable_log_types(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.enable_log_types
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Appends to `DisableLogTypes`, allocating the list when absent.
    #[must_use]
    pub fn with_disable_log_types(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.disable_log_types
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CloudwatchLogsExportConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("EnableLogTypes", self.enable_log_types.as_deref())
            .list("DisableLogTypes", self.disable_log_types.as_deref())
            .finish()
    }
}

impl Shape for CloudwatchLogsExportConfiguration {
    const SHAPE_NAME: &'static str = "CloudwatchLogsExportConfiguration";
}

/// A custom Availability Zone (AZ) is an on-premises AZ that is integrated with a VMware vSphere cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomAvailabilityZone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_availability_zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_availability_zone_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_availability_zone_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_details: Option<VpnDetails>,
}

impl CustomAvailabilityZone {
    /// Sets `CustomAvailabilityZoneId`.
    #[must_use]
    pub fn with_custom_availability_zone_id(mut self, input: impl Into<String>) -> Self {
        self.custom_availability_zone_id = Some(input.into());
        self
    }

    /// Sets `CustomAvailabilityZoneName`.
    #[must_use]
    pub fn with_custom_availability_zone_name(mut self, input: impl Into<String>) -> Self {
        self.custom_availability_zone_name = Some(input.into());
        self
    }

    /// Sets `CustomAvailabilityZoneStatus`.
    #[must_use]
    pub fn with_custom_availability_zone_status(mut self, input: impl Into<String>) -> Self {
        self.custom_availability_zone_status = Some(input.into());
        self
    }

    /// Sets `VpnDetails`.
    #[must_use]
    pub fn with_vpn_details(mut self, input: VpnDetails) -> Self {
        self.vpn_details = Some(input);
        self
    }
}

impl fmt::Display for CustomAvailabilityZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "CustomAvailabilityZoneId",
                self.custom_availability_zone_id.as_deref(),
            )
            .field(
                "CustomAvailabilityZoneName",
                self.custom_availability_zone_name.as_deref(),
            )
            .field(
                "CustomAvailabilityZoneStatus",
                self.custom_availability_zone_status.as_deref(),
            )
            .field("VpnDetails", self.vpn_details.as_ref())
            .finish()
    }
}

impl Shape for CustomAvailabilityZone {
    const SHAPE_NAME: &'static str = "CustomAvailabilityZone";
}

/// An Amazon Aurora DB cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBCluster {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(
        rename = "DBClusterIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_identifier: Option<String>,
    #[serde(
        rename = "DBClusterParameterGroup",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group: Option<String>,
    #[serde(rename = "DBSubnetGroup", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The progress of the operation as a percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_progress: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_restorable_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reader_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_endpoints: Option<Vec<String>>,
    #[serde(rename = "MultiAZ", skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_restorable_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    #[serde(
        rename = "DBClusterOptionGroupMemberships",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_option_group_memberships: Option<Vec<DBClusterOptionGroupStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_source_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_replica_identifiers: Option<Vec<String>>,
    #[serde(rename = "DBClusterMembers", skip_serializing_if = "Option::is_none")]
    pub db_cluster_members: Option<Vec<DBClusterMember>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_groups: Option<Vec<VpcSecurityGroupMembership>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_resource_id: Option<String>,
    #[serde(rename = "DBClusterArn", skip_serializing_if = "Option::is_none")]
    pub db_cluster_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_roles: Option<Vec<DBClusterRole>>,
    #[serde(
        rename = "IAMDatabaseAuthenticationEnabled",
        skip_serializing_if = "Option::is_none",
    )]
    pub iam_database_authentication_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_create_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_backtrack_time: Option<chrono::DateTime<chrono::Utc>>,
    /// The target backtrack window, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_consumed_change_records: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_cloudwatch_logs_exports: Option<Vec<String>>,
    /// The current capacity of an Aurora Serverless DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    /// The DB engine mode of the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_configuration_info: Option<ScalingConfigurationInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_endpoint_enabled: Option<bool>,
    /// See [`ActivityStreamMode`](crate::types::ActivityStreamMode) for known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_stream_mode: Option<String>,
    /// See [`ActivityStreamStatus`](crate::types::ActivityStreamStatus) for known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_stream_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_stream_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_stream_kinesis_stream_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_account_clone: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_memberships: Option<Vec<DomainMembership>>,
    /// See [`WriteForwardingStatus`](crate::types::WriteForwardingStatus) for known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_write_forwarding_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_write_forwarding_requested: Option<bool>,
}

impl DBCluster {
    /// Sets `AllocatedStorage`.
    #[must_use]
    pub fn with_allocated_storage(mut self, input: i32) -> Self {
        self.allocated_storage = Some(input);
        self
    }

    /// Appends to `AvailabilityZones`, allocating the list when absent.
    #[must_use]
    pub fn with_availability_zones(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Sets `BackupRetentionPeriod`.
    #[must_use]
    pub fn with_backup_retention_period(mut self, input: i32) -> Self {
        self.backup_retention_period = Some(input);
        self
    }

    /// Sets `CharacterSetName`.
    #[must_use]
    pub fn with_character_set_name(mut self, input: impl Into<String>) -> Self {
        self.character_set_name = Some(input.into());
        self
    }

    /// Sets `DatabaseName`.
    #[must_use]
    pub fn with_database_name(mut self, input: impl Into<String>) -> Self {
        self.database_name = Some(input.into());
        self
    }

    /// Sets `DBClusterIdentifier`.
    #[must_use]
    pub fn with_db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(input.into());
        self
    }

    /// Sets `DBClusterParameterGroup`.
    #[must_use]
    pub fn with_db_cluster_parameter_group(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group = Some(input.into());
        self
    }

    /// Sets `DBSubnetGroup`.
    #[must_use]
    pub fn with_db_subnet_group(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group = Some(input.into());
        self
    }

    /// Sets `Status`.
    #[must_use]
    pub fn with_status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets `PercentProgress`.
    #[must_use]
    pub fn with_percent_progress(mut self, input: impl Into<String>) -> Self {
        self.percent_progress = Some(input.into());
        self
    }

    /// Sets `EarliestRestorableTime`.
    #[must_use]
    pub fn with_earliest_restorable_time(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.earliest_restorable_time = Some(input);
        self
    }

    /// Sets `Endpoint`.
    #[must_use]
    pub fn with_endpoint(mut self, input: impl Into<String>) -> Self {
        self.endpoint = Some(input.into());
        self
    }

    /// Sets `ReaderEndpoint`.
    #[must_use]
    pub fn with_reader_endpoint(mut self, input: impl Into<String>) -> Self {
        self.reader_endpoint = Some(input.into());
        self
    }

    /// Appends to `CustomEndpoints`, allocating the list when absent.
    #[must_use]
    pub fn with_custom_endpoints(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.custom_endpoints
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Sets `MultiAZ`.
    #[must_use]
    pub fn with_multi_az(mut self, input: bool) -> Self {
        self.multi_az = Some(input);
        self
    }

    /// Sets `Engine`.
    #[must_use]
    pub fn with_engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
        self
    }

    /// Sets `EngineVersion`.
    #[must_use]
    pub fn with_engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets `LatestRestorableTime`.
    #[must_use]
    pub fn with_latest_restorable_time(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.latest_restorable_time = Some(input);
        self
    }

    /// Sets `Port`.
    #[must_use]
    pub fn with_port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets `MasterUsername`.
    #[must_use]
    pub fn with_master_username(mut self, input: impl Into<String>) -> Self {
        self.master_username = Some(input.into());
        self
    }

    /// Appends to `DBClusterOptionGroupMemberships`, allocating the list when absent.
    #[must_use]
    pub fn with_db_cluster_option_group_memberships(
        mut self,
        inputs: impl IntoIterator<Item = DBClusterOptionGroupStatus>,
    ) -> Self {
        self.db_cluster_option_group_memberships
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `PreferredBackupWindow`.
    #[must_use]
    pub fn with_preferred_backup_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(input.into());
        self
    }

    /// Sets `PreferredMaintenanceWindow`.
    #[must_use]
    pub fn with_preferred_maintenance_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(input.into());
        self
    }

    /// Sets `ReplicationSourceIdentifier`.
    #[must_use]
    pub fn with_replication_source_identifier(mut self, input: impl Into<String>) -> Self {
        self.replication_source_identifier = Some(input.into());
        self
    }

    /// Appends to `ReadReplicaIdentifiers`, allocating the list when absent.
    #[must_use]
    pub fn with_read_replica_identifiers(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.read_replica_identifiers
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Appends to `DBClusterMembers`, allocating the list when absent.
    #[must_use]
    pub fn with_db_cluster_members(
        mut self,
        inputs: impl IntoIterator<Item = DBClusterMember>,
    ) -> Self {
        self.db_cluster_members
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Appends to `VpcSecurityGroups`, allocating the list when absent.
    #[must_use]
    pub fn with_vpc_security_groups(
        mut self,
        inputs: impl IntoIterator<Item = VpcSecurityGroupMembership>,
    ) -> Self {
        self.vpc_security_groups
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `HostedZoneId`.
    #[must_use]
    pub fn with_hosted_zone_id(mut self, input: impl Into<String>) -> Self {
        self.hosted_zone_id = Some(input.into());
        self
    }

    /// Sets `StorageEncrypted`.
    #[must_use]
    pub fn with_storage_encrypted(mut self, input: bool) -> Self {
        self.storage_encrypted = Some(input);
        self
    }

    /// Sets `KmsKeyId`.
    #[must_use]
    pub fn with_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets `DbClusterResourceId`.
    #[must_use]
    pub fn with_db_cluster_resource_id(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_resource_id = Some(input.into());
        self
    }

    /// Sets `DBClusterArn`.
    #[must_use]
    pub fn with_db_cluster_arn(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_arn = Some(input.into());
        self
    }

    /// Appends to `AssociatedRoles`, allocating the list when absent.
    #[must_use]
    pub fn with_associated_roles(
        mut self,
        inputs: impl IntoIterator<Item = DBClusterRole>,
    ) -> Self {
        self.associated_roles
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `IAMDatabaseAuthenticationEnabled`.
    #[must_use]
    pub fn with_iam_database_authentication_enabled(mut self, input: bool) -> Self {
        self.iam_database_authentication_enabled = Some(input);
        self
    }

    /// Sets `CloneGroupId`.
    #[must_use]
    pub fn with_clone_group_id(mut self, input: impl Into<String>) -> Self {
        self.clone_group_id = Some(input.into());
        self
    }

    /// Sets `ClusterCreateTime`.
    #[must_use]
    pub fn with_cluster_create_time(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.cluster_create_time = Some(input);
        self
    }

    /// Sets `EarliestBacktrackTime`.
    #[must_use]
    pub fn with_earliest_backtrack_time(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.earliest_backtrack_time = Some(input);
        self
    }

    /// Sets `BacktrackWindow`.
    #[must_use]
    pub fn with_backtrack_window(mut self, input: i64) -> Self {
        self.backtrack_window = Some(input);
        self
    }

    /// Sets `BacktrackConsumedChangeRecords`.
    #[must_use]
    pub fn with_backtrack_consumed_change_records(mut self, input: i64) -> Self {
        self.backtrack_consumed_change_records = Some(input);
        self
    }

    /// Appends to `EnabledCloudwatchLogsExports`, allocating the list when absent.
    #[must_use]
    pub fn with_enabled_cloudwatch_logs_exports(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.enabled_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Sets `Capacity`.
    #[must_use]
    pub fn with_capacity(mut self, input: i32) -> Self {
        self.capacity = Some(input);
        self
    }

    /// Sets `EngineMode`.
    #[must_use]
    pub fn with_engine_mode(mut self, input: impl Into<String>) -> Self {
        self.engine_mode = Some(input.into());
        self
    }

    /// Sets `ScalingConfigurationInfo`.
    #[must_use]
    pub fn with_scaling_configuration_info(mut self, input: ScalingConfigurationInfo) -> Self {
        self.scaling_configuration_info = Some(input);
        self
    }

    /// Sets `DeletionProtection`.
    #[must_use]
    pub fn with_deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets `HttpEndpointEnabled`.
    #[must_use]
    pub fn with_http_endpoint_enabled(mut self, input: bool) -> Self {
        self.http_endpoint_enabled = Some(input);
        self
    }

    /// Sets `ActivityStreamMode`.
    #[must_use]
    pub fn with_activity_stream_mode(mut self, input: impl Into<String>) -> Self {
        self.activity_stream_mode = Some(input.into());
        self
    }

    /// Sets `ActivityStreamStatus`.
    #[must_use]
    pub fn with_activity_stream_status(mut self, input: impl Into<String>) -> Self {
        self.activity_stream_status = Some(input.into());
        self
    }

    /// Sets `ActivityStreamKmsKeyId`.
    #[must_use]
    pub fn with_activity_stream_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.activity_stream_kms_key_id = Some(input.into());
        self
    }

    /// Sets `ActivityStreamKinesisStreamName`.
    #[must_use]
    pub fn with_activity_stream_kinesis_stream_name(mut self, input: impl Into<String>) -> Self {
        self.activity_stream_kinesis_stream_name = Some(input.into());
        self
    }

    /// Sets `CopyTagsToSnapshot`.
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
        self
    }

    /// Sets `CrossAccountClone`.
    #[must_use]
    pub fn with_cross_account_clone(mut self, input: bool) -> Self {
        self.cross_account_clone = Some(input);
        self
    }

    /// Appends to `DomainMemberships`, allocating the list when absent.
    #[must_use]
    pub fn with_domain_memberships(
        mut self,
        inputs: impl IntoIterator<Item = DomainMembership>,
    ) -> Self {
        self.domain_memberships
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `GlobalWriteForwardingStatus`.
    #[must_use]
    pub fn with_global_write_forwarding_status(mut self, input: impl Into<String>) -> Self {
        self.global_write_forwarding_status = Some(input.into());
        self
    }

    /// Sets `GlobalWriteForwardingRequested`.
    #[must_use]
    pub fn with_global_write_forwarding_requested(mut self, input: bool) -> Self {
        self.global_write_forwarding_requested = Some(input);
        self
    }
}

impl fmt::Display for DBCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("AllocatedStorage", self.allocated_storage.as_ref())
            .list("AvailabilityZones", self.availability_zones.as_deref())
            .field(
                "BackupRetentionPeriod",
                self.backup_retention_period.as_ref(),
            )
            .field("CharacterSetName", self.character_set_name.as_deref())
            .field("DatabaseName", self.database_name.as_deref())
            .field("DBClusterIdentifier", self.db_cluster_identifier.as_deref())
            .field(
                "DBClusterParameterGroup",
                self.db_cluster_parameter_group.as_deref(),
            )
            .field("DBSubnetGroup", self.db_subnet_group.as_deref())
            .field("Status", self.status.as_deref())
            .field("PercentProgress", self.percent_progress.as_deref())
            .field(
                "EarliestRestorableTime",
                self.earliest_restorable_time.as_ref(),
            )
            .field("Endpoint", self.endpoint.as_deref())
            .field("ReaderEndpoint", self.reader_endpoint.as_deref())
            .list("CustomEndpoints", self.custom_endpoints.as_deref())
            .field("MultiAZ", self.multi_az.as_ref())
            .field("Engine", self.engine.as_deref())
            .field("EngineVersion", self.engine_version.as_deref())
            .field("LatestRestorableTime", self.latest_restorable_time.as_ref())
            .field("Port", self.port.as_ref())
            .field("MasterUsername", self.master_username.as_deref())
            .list(
                "DBClusterOptionGroupMemberships",
                self.db_cluster_option_group_memberships.as_deref(),
            )
            .field(
                "PreferredBackupWindow",
                self.preferred_backup_window.as_deref(),
            )
            .field(
                "PreferredMaintenanceWindow",
                self.preferred_maintenance_window.as_deref(),
            )
            .field(
                "ReplicationSourceIdentifier",
                self.replication_source_identifier.as_deref(),
            )
            .list(
                "ReadReplicaIdentifiers",
                self.read_replica_identifiers.as_deref(),
            )
            .list("DBClusterMembers", self.db_cluster_members.as_deref())
            .list("VpcSecurityGroups", self.vpc_security_groups.as_deref())
            .field("HostedZoneId", self.hosted_zone_id.as_deref())
            .field("StorageEncrypted", self.storage_encrypted.as_ref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field(
                "DbClusterResourceId",
                self.db_cluster_resource_id.as_deref(),
            )
            .field("DBClusterArn", self.db_cluster_arn.as_deref())
            .list("AssociatedRoles", self.associated_roles.as_deref())
            .field(
                "IAMDatabaseAuthenticationEnabled",
                self.iam_database_authentication_enabled.as_ref(),
            )
            .field("CloneGroupId", self.clone_group_id.as_deref())
            .field("ClusterCreateTime", self.cluster_create_time.as_ref())
            .field(
                "EarliestBacktrackTime",
                self.earliest_backtrack_time.as_ref(),
            )
            .field("BacktrackWindow", self.backtrack_window.as_ref())
            .field(
                "BacktrackConsumedChangeRecords",
                self.backtrack_consumed_change_records.as_ref(),
            )
            .list(
                "EnabledCloudwatchLogsExports",
                self.enabled_cloudwatch_logs_exports.as_deref(),
            )
            .field("Capacity", self.capacity.as_ref())
            .field("EngineMode", self.engine_mode.as_deref())
            .field(
                "ScalingConfigurationInfo",
                self.scaling_configuration_info.as_ref(),
            )
            .field("DeletionProtection", self.deletion_protection.as_ref())
            .field("HttpEndpointEnabled", self.http_endpoint_enabled.as_ref())
            .field("ActivityStreamMode", self.activity_stream_mode.as_deref())
            .field(
                "ActivityStreamStatus",
                self.activity_stream_status.as_deref(),
            )
            .field(
                "ActivityStreamKmsKeyId",
                self.activity_stream_kms_key_id.as_deref(),
            )
            .field(
                "ActivityStreamKinesisStreamName",
                self.activity_stream_kinesis_stream_name.as_deref(),
            )
            .field("CopyTagsToSnapshot", self.copy_tags_to_snapshot.as_ref())
            .field("CrossAccountClone", self.cross_account_clone.as_ref())
            .list("DomainMemberships", self.domain_memberships.as_deref())
            .field(
                "GlobalWriteForwardingStatus",
                self.global_write_forwarding_status.as_deref(),
            )
            .field(
                "GlobalWriteForwardingRequested",
                self.global_write_forwarding_requested.as_ref(),
            )
            .finish()
    }
}

impl Shape for DBCluster {
    const SHAPE_NAME: &'static str = "DBCluster";
}

/// RDS DBClusterMember.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBClusterMember {
    #[serde(
        rename = "DBInstanceIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_instance_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cluster_writer: Option<bool>,
    #[serde(
        rename = "DBClusterParameterGroupStatus",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_tier: Option<i32>,
}

impl DBClusterMember {
    /// Sets `DBInstanceIdentifier`.
    #[must_use]
    pub fn with_db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets `IsClusterWriter`.
    #[must_use]
    pub fn with_is_cluster_writer(mut self, input: bool) -> Self {
        self.is_cluster_writer = Some(input);
        self
    }

    /// Sets `DBClusterParameterGroupStatus`.
    #[must_use]
    pub fn with_db_cluster_parameter_group_status(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_status = Some(input.into());
        self
    }

    /// Sets `PromotionTier`.
    #[must_use]
    pub fn with_promotion_tier(mut self, input: i32) -> Self {
        self.promotion_tier = Some(input);
        self
    }
}

impl fmt::Display for DBClusterMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBInstanceIdentifier",
                self.db_instance_identifier.as_deref(),
            )
            .field("IsClusterWriter", self.is_cluster_writer.as_ref())
            .field(
                "DBClusterParameterGroupStatus",
                self.db_cluster_parameter_group_status.as_deref(),
            )
            .field("PromotionTier", self.promotion_tier.as_ref())
            .finish()
    }
}

impl Shape for DBClusterMember {
    const SHAPE_NAME: &'static str = "DBClusterMember";
}

/// RDS DBClusterOptionGroupStatus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBClusterOptionGroupStatus {
    #[serde(
        rename = "DBClusterOptionGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl DBClusterOptionGroupStatus {
    /// Sets `DBClusterOptionGroupName`.
    #[must_use]
    pub fn with_db_cluster_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_option_group_name = Some(input.into());
        self
    }

    /// Sets `Status`.
    #[must_use]
    pub fn with_status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }
}

impl fmt::Display for DBClusterOptionGroupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBClusterOptionGroupName",
                self.db_cluster_option_group_name.as_deref(),
            )
            .field("Status", self.status.as_deref())
            .finish()
    }
}

impl Shape for DBClusterOptionGroupStatus {
    const SHAPE_NAME: &'static str = "DBClusterOptionGroupStatus";
}

/// RDS DBClusterParameterGroup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBClusterParameterGroup {
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group_name: Option<String>,
    #[serde(
        rename = "DBParameterGroupFamily",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_parameter_group_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "DBClusterParameterGroupArn",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group_arn: Option<String>,
}

impl DBClusterParameterGroup {
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

    /// Sets `DBClusterParameterGroupArn`.
    #[must_use]
    pub fn with_db_cluster_parameter_group_arn(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_arn = Some(input.into());
        self
    }
}

impl fmt::Display for DBClusterParameterGroup {
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
            .field(
                "DBClusterParameterGroupArn",
                self.db_cluster_parameter_group_arn.as_deref(),
            )
            .finish()
    }
}

impl Shape for DBClusterParameterGroup {
    const SHAPE_NAME: &'static str = "DBClusterParameterGroup";
}

/// RDS DBClusterRole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBClusterRole {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
}

impl DBClusterRole {
    /// Sets `RoleArn`.
    #[must_use]
    pub fn with_role_arn(mut self, input: impl Into<String>) -> Self {
        self.role_arn = Some(input.into());
        self
    }

    /// Sets `Status`.
    #[must_use]
    pub fn with_status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets `FeatureName`.
    #[must_use]
    pub fn with_feature_name(mut self, input: impl Into<String>) -> Self {
        self.feature_name = Some(input.into());
        self
    }
}

impl fmt::Display for DBClusterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("RoleArn", self.role_arn.as_deref())
            .field("Status", self.status.as_deref())
            .field("FeatureName", self.feature_name.as_deref())
            .finish()
    }
}

impl Shape for DBClusterRole {
    const SHAPE_NAME: &'static str = "DBClusterRole";
}

/// Contains the details for an Amazon RDS DB cluster snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBClusterSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    #[serde(
        rename = "DBClusterSnapshotIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_snapshot_identifier: Option<String>,
    #[serde(
        rename = "DBClusterIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_create_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_create_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_progress: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(
        rename = "DBClusterSnapshotArn",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_snapshot_arn: Option<String>,
    #[serde(
        rename = "SourceDBClusterSnapshotArn",
        skip_serializing_if = "Option::is_none",
    )]
    pub source_db_cluster_snapshot_arn: Option<String>,
    #[serde(
        rename = "IAMDatabaseAuthenticationEnabled",
        skip_serializing_if = "Option::is_none",
    )]
    pub iam_database_authentication_enabled: Option<bool>,
}

impl DBClusterSnapshot {
    /// Appends to `AvailabilityZones`, allocating the list when absent.
    #[must_use]
    pub fn with_availability_zones(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Sets `DBClusterSnapshotIdentifier`.
    #[must_use]
    pub fn with_db_cluster_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets `DBClusterIdentifier`.
    #[must_use]
    pub fn with_db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(input.into());
        self
    }

    /// Sets `SnapshotCreateTime`.
    #[must_use]
    pub fn with_snapshot_create_time(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.snapshot_create_time = Some(input);
        self
    }

    /// Sets `Engine`.
    #[must_use]
    pub fn with_engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
        self
    }

    /// Sets `AllocatedStorage`.
    #[must_use]
    pub fn with_allocated_storage(mut self, input: i32) -> Self {
        self.allocated_storage = Some(input);
        self
    }

    /// Sets `Status`.
    #[must_use]
    pub fn with_status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets `Port`.
    #[must_use]
    pub fn with_port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets `VpcId`.
    #[must_use]
    pub fn with_vpc_id(mut self, input: impl Into<String>) -> Self {
        self.vpc_id = Some(input.into());
        self
    }

    /// Sets `ClusterCreateTime`.
    #[must_use]
    pub fn with_cluster_create_time(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.cluster_create_time = Some(input);
        self
    }

    /// Sets `MasterUsername`.
    #[must_use]
    pub fn with_master_username(mut self, input: impl Into<String>) -> Self {
        self.master_username = Some(input.into());
        self
    }

    /// Sets `EngineVersion`.
    #[must_use]
    pub fn with_engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets `LicenseModel`.
    #[must_use]
    pub fn with_license_model(mut self, input: impl Into<String>) -> Self {
        self.license_model = Some(input.into());
        self
    }

    /// Sets `SnapshotType`.
    #[must_use]
    pub fn with_snapshot_type(mut self, input: impl Into<String>) -> Self {
        self.snapshot_type = Some(input.into());
        self
    }

    /// Sets `PercentProgress`.
    #[must_use]
    pub fn with_percent_progress(mut self, input: i32) -> Self {
        self.percent_progress = Some(input);
        self
    }

    /// Sets `StorageEncrypted`.
    #[must_use]
    pub fn with_storage_encrypted(mut self, input: bool) -> Self {
        self.storage_encrypted = Some(input);
        self
    }

    /// Sets `KmsKeyId`.
    #[must_use]
    pub fn with_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets `DBClusterSnapshotArn`.
    #[must_use]
    pub fn with_db_cluster_snapshot_arn(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_snapshot_arn = Some(input.into());
        self
    }

    /// Sets `SourceDBClusterSnapshotArn`.
    #[must_use]
    pub fn with_source_db_cluster_snapshot_arn(mut self, input: impl Into<String>) -> Self {
        self.source_db_cluster_snapshot_arn = Some(input.into());
        self
    }

    /// Sets `IAMDatabaseAuthenticationEnabled`.
    #[must_use]
    pub fn with_iam_database_authentication_enabled(mut self, input: bool) -> Self {
        self.iam_database_authentication_enabled = Some(input);
        self
    }
}

impl fmt::Display for DBClusterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("AvailabilityZones", self.availability_zones.as_deref())
            .field(
                "DBClusterSnapshotIdentifier",
                self.db_cluster_snapshot_identifier.as_deref(),
            )
            .field("DBClusterIdentifier", self.db_cluster_identifier.as_deref())
            .field("SnapshotCreateTime", self.snapshot_create_time.as_ref())
            .field("Engine", self.engine.as_deref())
            .field("AllocatedStorage", self.allocated_storage.as_ref())
            .field("Status", self.status.as_deref())
            .field("Port", self.port.as_ref())
            .field("VpcId", self.vpc_id.as_deref())
            .field("ClusterCreateTime", self.cluster_create_time.as_ref())
            .field("MasterUsername", self.master_username.as_deref())
            .field("EngineVersion", self.engine_version.as_deref())
            .field("LicenseModel", self.license_model.as_deref())
            .field("SnapshotType", self.snapshot_type.as_deref())
            .field("PercentProgress", self.percent_progress.as_ref())
            .field("StorageEncrypted", self.storage_encrypted.as_ref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field(
                "DBClusterSnapshotArn",
                self.db_cluster_snapshot_arn.as_deref(),
            )
            .field(
                "SourceDBClusterSnapshotArn",
                self.source_db_cluster_snapshot_arn.as_deref(),
            )
            .field(
                "IAMDatabaseAuthenticationEnabled",
                self.iam_database_authentication_enabled.as_ref(),
            )
            .finish()
    }
}

impl Shape for DBClusterSnapshot {
    const SHAPE_NAME: &'static str = "DBClusterSnapshot";
}

/// An Amazon RDS DB instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBInstance {
    #[serde(
        rename = "DBInstanceIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_instance_identifier: Option<String>,
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(rename = "DBInstanceStatus", skip_serializing_if = "Option::is_none")]
    pub db_instance_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    #[serde(rename = "DBName", skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_create_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(rename = "DBSecurityGroups", skip_serializing_if = "Option::is_none")]
    pub db_security_groups: Option<Vec<DBSecurityGroupMembership>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_groups: Option<Vec<VpcSecurityGroupMembership>>,
    #[serde(rename = "DBParameterGroups", skip_serializing_if = "Option::is_none")]
    pub db_parameter_groups: Option<Vec<DBParameterGroupStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "DBSubnetGroup", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group: Option<DBSubnetGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_modified_values: Option<PendingModifiedValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_restorable_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "MultiAZ", skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<bool>,
    #[serde(
        rename = "ReadReplicaSourceDBInstanceIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub read_replica_source_db_instance_identifier: Option<String>,
    #[serde(
        rename = "ReadReplicaDBInstanceIdentifiers",
        skip_serializing_if = "Option::is_none",
    )]
    pub read_replica_db_instance_identifiers: Option<Vec<String>>,
    #[serde(
        rename = "ReadReplicaDBClusterIdentifiers",
        skip_serializing_if = "Option::is_none",
    )]
    pub read_replica_db_cluster_identifiers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_memberships: Option<Vec<OptionGroupMembership>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_infos: Option<Vec<DBInstanceStatusInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_credential_arn: Option<String>,
    /// The port that the DB instance listens on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_port: Option<i32>,
    #[serde(
        rename = "DBClusterIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbi_resource_id: Option<String>,
    #[serde(
        rename = "CACertificateIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub ca_certificate_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_memberships: Option<Vec<DomainMembership>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_monitoring_resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_tier: Option<i32>,
    #[serde(rename = "DBInstanceArn", skip_serializing_if = "Option::is_none")]
    pub db_instance_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(
        rename = "IAMDatabaseAuthenticationEnabled",
        skip_serializing_if = "Option::is_none",
    )]
    pub iam_database_authentication_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_enabled: Option<bool>,
    #[serde(
        rename = "PerformanceInsightsKMSKeyId",
        skip_serializing_if = "Option::is_none",
    )]
    pub performance_insights_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_roles: Option<Vec<DBInstanceRole>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener_endpoint: Option<Endpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allocated_storage: Option<i32>,
}

impl DBInstance {
    /// Sets `DBInstanceIdentifier`.
    #[must_use]
    pub fn with_db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets `DBInstanceClass`.
    #[must_use]
    pub fn with_db_instance_class(mut self, input: impl Into<String>) -> Self {
        self.db_instance_class = Some(input.into());
        self
    }

    /// Sets `Engine`.
    #[must_use]
    pub fn with_engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
        self
    }

    /// Sets `DBInstanceStatus`.
    #[must_use]
    pub fn with_db_instance_status(mut self, input: impl Into<String>) -> Self {
        self.db_instance_status = Some(input.into());
        self
    }

    /// Sets `MasterUsername`.
    #[must_use]
    pub fn with_master_username(mut self, input: impl Into<String>) -> Self {
        self.master_username = Some(input.into());
        self
    }

    /// Sets `DBName`.
    #[must_use]
    pub fn with_db_name(mut self, input: impl Into<String>) -> Self {
        self.db_name = Some(input.into());
        self
    }

    /// Sets `Endpoint`.
    #[must_use]
    pub fn with_endpoint(mut self, input: Endpoint) -> Self {
        self.endpoint = Some(input);
        self
    }

    /// Sets `AllocatedStorage`.
    #[must_use]
    pub fn with_allocated_storage(mut self, input: i32) -> Self {
        self.allocated_storage = Some(input);
        self
    }

    /// Sets `InstanceCreateTime`.
    #[must_use]
    pub fn with_instance_create_time(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.instance_create_time = Some(input);
        self
    }

    /// Sets `PreferredBackupWindow`.
    #[must_use]
    pub fn with_preferred_backup_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(input.into());
        self
    }

    /// Sets `BackupRetentionPeriod`.
    #[must_use]
    pub fn with_backup_retention_period(mut self, input: i32) -> Self {
        self.backup_retention_period = Some(input);
        self
    }

    /// Appends to `DBSecurityGroups`, allocating the list when absent.
    #[must_use]
    pub fn with_db_security_groups(
        mut self,
        inputs: impl IntoIterator<Item = DBSecurityGroupMembership>,
    ) -> Self {
        self.db_security_groups
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Appends to `VpcSecurityGroups`, allocating the list when absent.
    #[must_use]
    pub fn with_vpc_security_groups(
        mut self,
        inputs: impl IntoIterator<Item = VpcSecurityGroupMembership>,
    ) -> Self {
        self.vpc_security_groups
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Appends to `DBParameterGroups`, allocating the list when absent.
    #[must_use]
    pub fn with_db_parameter_groups(
        mut self,
        inputs: impl IntoIterator<Item = DBParameterGroupStatus>,
    ) -> Self {
        self.db_parameter_groups
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `AvailabilityZone`.
    #[must_use]
    pub fn with_availability_zone(mut self, input: impl Into<String>) -> Self {
        self.availability_zone = Some(input.into());
        self
    }

    /// Sets `DBSubnetGroup`.
    #[must_use]
    pub fn with_db_subnet_group(mut self, input: DBSubnetGroup) -> Self {
        self.db_subnet_group = Some(input);
        self
    }

    /// Sets `PreferredMaintenanceWindow`.
    #[must_use]
    pub fn with_preferred_maintenance_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(input.into());
        self
    }

    /// Sets `PendingModifiedValues`.
    #[must_use]
    pub fn with_pending_modified_values(mut self, input: PendingModifiedValues) -> Self {
        self.pending_modified_values = Some(input);
        self
    }

    /// Sets `LatestRestorableTime`.
    #[must_use]
    pub fn with_latest_restorable_time(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.latest_restorable_time = Some(input);
        self
    }

    /// Sets `MultiAZ`.
    #[must_use]
    pub fn with_multi_az(mut self, input: bool) -> Self {
        self.multi_az = Some(input);
        self
    }

    /// Sets `EngineVersion`.
    #[must_use]
    pub fn with_engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets `AutoMinorVersionUpgrade`.
    #[must_use]
    pub fn with_auto_minor_version_upgrade(mut self, input: bool) -> Self {
        self.auto_minor_version_upgrade = Some(input);
        self
    }

    /// Sets `ReadReplicaSourceDBInstanceIdentifier`.
    #[must_use]
    pub fn with_read_replica_source_db_instance_identifier(
        mut self,
        input: impl Into<String>,
    ) -> Self {
        self.read_replica_source_db_instance_identifier = Some(input.into());
        self
    }

    /// Appends to `ReadReplicaDBInstanceIdentifiers`, allocating the list when absent.
    #[must_use]
    pub fn with_read_replica_db_instance_identifiers(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.read_replica_db_instance_identifiers
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Appends to `ReadReplicaDBClusterIdentifiers`, allocating the list when absent.
    #[must_use]
    pub fn with_read_replica_db_cluster_identifiers(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.read_replica_db_cluster_identifiers
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Sets `LicenseModel`.
    #[must_use]
    pub fn with_license_model(mut self, input: impl Into<String>) -> Self {
        self.license_model = Some(input.into());
        self
    }

    /// Sets `Iops`.
    #[must_use]
    pub fn with_iops(mut self, input: i32) -> Self {
        self.iops = Some(input);
        self
    }

    /// Appends to `OptionGroupMemberships`, allocating the list when absent.
    #[must_use]
    pub fn with_option_group_memberships(
        mut self,
        inputs: impl IntoIterator<Item = OptionGroupMembership>,
    ) -> Self {
        self.option_group_memberships
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `CharacterSetName`.
    #[must_use]
    pub fn with_character_set_name(mut self, input: impl Into<String>) -> Self {
        self.character_set_name = Some(input.into());
        self
    }

    /// Sets `SecondaryAvailabilityZone`.
    #[must_use]
    pub fn with_secondary_availability_zone(mut self, input: impl Into<String>) -> Self {
        self.secondary_availability_zone = Some(input.into());
        self
    }

    /// Sets `PubliclyAccessible`.
    #[must_use]
    pub fn with_publicly_accessible(mut self, input: bool) -> Self {
        self.publicly_accessible = Some(input);
        self
    }

    /// Appends to `StatusInfos`, allocating the list when absent.
    #[must_use]
    pub fn with_status_infos(
        mut self,
        inputs: impl IntoIterator<Item = DBInstanceStatusInfo>,
    ) -> Self {
        self.status_infos
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `StorageType`.
    #[must_use]
    pub fn with_storage_type(mut self, input: impl Into<String>) -> Self {
        self.storage_type = Some(input.into());
        self
    }

    /// Sets `TdeCredentialArn`.
    #[must_use]
    pub fn with_tde_credential_arn(mut self, input: impl Into<String>) -> Self {
        self.tde_credential_arn = Some(input.into());
        self
    }

    /// Sets `DbInstancePort`.
    #[must_use]
    pub fn with_db_instance_port(mut self, input: i32) -> Self {
        self.db_instance_port = Some(input);
        self
    }

    /// Sets `DBClusterIdentifier`.
    #[must_use]
    pub fn with_db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(input.into());
        self
    }

    /// Sets `StorageEncrypted`.
    #[must_use]
    pub fn with_storage_encrypted(mut self, input: bool) -> Self {
        self.storage_encrypted = Some(input);
        self
    }

    /// Sets `KmsKeyId`.
    #[must_use]
    pub fn with_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets `DbiResourceId`.
    #[must_use]
    pub fn with_dbi_resource_id(mut self, input: impl Into<String>) -> Self {
        self.dbi_resource_id = Some(input.into());
        self
    }

    /// Sets `CACertificateIdentifier`.
    #[must_use]
    pub fn with_ca_certificate_identifier(mut self, input: impl Into<String>) -> Self {
        self.ca_certificate_identifier = Some(input.into());
        self
    }

    /// Appends to `DomainMemberships`, allocating the list when absent.
    #[must_use]
    pub fn with_domain_memberships(
        mut self,
        inputs: impl IntoIterator<Item = DomainMembership>,
    ) -> Self {
        self.domain_memberships
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `CopyTagsToSnapshot`.
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
        self
    }

    /// Sets `MonitoringInterval`.
    #[must_use]
    pub fn with_monitoring_interval(mut self, input: i32) -> Self {
        self.monitoring_interval = Some(input);
        self
    }

    /// Sets `EnhancedMonitoringResourceArn`.
    #[must_use]
    pub fn with_enhanced_monitoring_resource_arn(mut self, input: impl Into<String>) -> Self {
        self.enhanced_monitoring_resource_arn = Some(input.into());
        self
    }

    /// Sets `MonitoringRoleArn`.
    #[must_use]
    pub fn with_monitoring_role_arn(mut self, input: impl Into<String>) -> Self {
        self.monitoring_role_arn = Some(input.into());
        self
    }

    /// Sets `PromotionTier`.
    #[must_use]
    pub fn with_promotion_tier(mut self, input: i32) -> Self {
        self.promotion_tier = Some(input);
        self
    }

    /// Sets `DBInstanceArn`.
    #[must_use]
    pub fn with_db_instance_arn(mut self, input: impl Into<String>) -> Self {
        self.db_instance_arn = Some(input.into());
        self
    }

    /// Sets `Timezone`.
    #[must_use]
    pub fn with_timezone(mut self, input: impl Into<String>) -> Self {
        self.timezone = Some(input.into());
        self
    }

    /// Sets `IAMDatabaseAuthenticationEnabled`.
    #[must_use]
    pub fn with_iam_database_authentication_enabled(mut self, input: bool) -> Self {
        self.iam_database_authentication_enabled = Some(input);
        self
    }

    /// Sets `PerformanceInsightsEnabled`.
    #[must_use]
    pub fn with_performance_insights_enabled(mut self, input: bool) -> Self {
        self.performance_insights_enabled = Some(input);
        self
    }

    /// Sets `PerformanceInsightsKMSKeyId`.
    #[must_use]
    pub fn with_performance_insights_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.performance_insights_kms_key_id = Some(input.into());
        self
    }

    /// Sets `PerformanceInsightsRetentionPeriod`.
    #[must_use]
    pub fn with_performance_insights_retention_period(mut self, input: i32) -> Self {
        self.performance_insights_retention_period = Some(input);
        self
    }

    /// Appends to `EnabledCloudwatchLogsExports`, allocating the list when absent.
    #[must_use]
    pub fn with_enabled_cloudwatch_logs_exports(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.enabled_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Appends to `ProcessorFeatures`, allocating the list when absent.
    #[must_use]
    pub fn with_processor_features(
        mut self,
        inputs: impl IntoIterator<Item = ProcessorFeature>,
    ) -> Self {
        self.processor_features
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `DeletionProtection`.
    #[must_use]
    pub fn with_deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Appends to `AssociatedRoles`, allocating the list when absent.
    #[must_use]
    pub fn with_associated_roles(
        mut self,
        inputs: impl IntoIterator<Item = DBInstanceRole>,
    ) -> Self {
        self.associated_roles
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `ListenerEndpoint`.
    #[must_use]
    pub fn with_listener_endpoint(mut self, input: Endpoint) -> Self {
        self.listener_endpoint = Some(input);
        self
    }

    /// Sets `MaxAllocatedStorage`.
    #[must_use]
    pub fn with_max_allocated_storage(mut self, input: i32) -> Self {
        self.max_allocated_storage = Some(input);
        self
    }
}

impl fmt::Display for DBInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBInstanceIdentifier",
                self.db_instance_identifier.as_deref(),
            )
            .field("DBInstanceClass", self.db_instance_class.as_deref())
            .field("Engine", self.engine.as_deref())
            .field("DBInstanceStatus", self.db_instance_status.as_deref())
            .field("MasterUsername", self.master_username.as_deref())
            .field("DBName", self.db_name.as_deref())
            .field("Endpoint", self.endpoint.as_ref())
            .field("AllocatedStorage", self.allocated_storage.as_ref())
            .field("InstanceCreateTime", self.instance_create_time.as_ref())
            .field(
                "PreferredBackupWindow",
                self.preferred_backup_window.as_deref(),
            )
            .field(
                "BackupRetentionPeriod",
                self.backup_retention_period.as_ref(),
            )
            .list("DBSecurityGroups", self.db_security_groups.as_deref())
            .list("VpcSecurityGroups", self.vpc_security_groups.as_deref())
            .list("DBParameterGroups", self.db_parameter_groups.as_deref())
            .field("AvailabilityZone", self.availability_zone.as_deref())
            .field("DBSubnetGroup", self.db_subnet_group.as_ref())
            .field(
                "PreferredMaintenanceWindow",
                self.preferred_maintenance_window.as_deref(),
            )
            .field(
                "PendingModifiedValues",
                self.pending_modified_values.as_ref(),
            )
            .field("LatestRestorableTime", self.latest_restorable_time.as_ref())
            .field("MultiAZ", self.multi_az.as_ref())
            .field("EngineVersion", self.engine_version.as_deref())
            .field(
                "AutoMinorVersionUpgrade",
                self.auto_minor_version_upgrade.as_ref(),
            )
            .field(
                "ReadReplicaSourceDBInstanceIdentifier",
                self.read_replica_source_db_instance_identifier.as_deref(),
            )
            .list(
                "ReadReplicaDBInstanceIdentifiers",
                self.read_replica_db_instance_identifiers.as_deref(),
            )
            .list(
                "ReadReplicaDBClusterIdentifiers",
                self.read_replica_db_cluster_identifiers.as_deref(),
            )
            .field("LicenseModel", self.license_model.as_deref())
            .field("Iops", self.iops.as_ref())
            .list(
                "OptionGroupMemberships",
                self.option_group_memberships.as_deref(),
            )
            .field("CharacterSetName", self.character_set_name.as_deref())
            .field(
                "SecondaryAvailabilityZone",
                self.secondary_availability_zone.as_deref(),
            )
            .field("PubliclyAccessible", self.publicly_accessible.as_ref())
            .list("StatusInfos", self.status_infos.as_deref())
            .field("StorageType", self.storage_type.as_deref())
            .field("TdeCredentialArn", self.tde_credential_arn.as_deref())
            .field("DbInstancePort", self.db_instance_port.as_ref())
            .field("DBClusterIdentifier", self.db_cluster_identifier.as_deref())
            .field("StorageEncrypted", self.storage_encrypted.as_ref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field("DbiResourceId", self.dbi_resource_id.as_deref())
            .field(
                "CACertificateIdentifier",
                self.ca_certificate_identifier.as_deref(),
            )
            .list("DomainMemberships", self.domain_memberships.as_deref())
            .field("CopyTagsToSnapshot", self.copy_tags_to_snapshot.as_ref())
            .field("MonitoringInterval", self.monitoring_interval.as_ref())
            .field(
                "EnhancedMonitoringResourceArn",
                self.enhanced_monitoring_resource_arn.as_deref(),
            )
            .field("MonitoringRoleArn", self.monitoring_role_arn.as_deref())
            .field("PromotionTier", self.promotion_tier.as_ref())
            .field("DBInstanceArn", self.db_instance_arn.as_deref())
            .field("Timezone", self.timezone.as_deref())
            .field(
                "IAMDatabaseAuthenticationEnabled",
                self.iam_database_authentication_enabled.as_ref(),
            )
            .field(
                "PerformanceInsightsEnabled",
                self.performance_insights_enabled.as_ref(),
            )
            .field(
                "PerformanceInsightsKMSKeyId",
                self.performance_insights_kms_key_id.as_deref(),
            )
            .field(
                "PerformanceInsightsRetentionPeriod",
                self.performance_insights_retention_period.as_ref(),
            )
            .list(
                "EnabledCloudwatchLogsExports",
                self.enabled_cloudwatch_logs_exports.as_deref(),
            )
            .list("ProcessorFeatures", self.processor_features.as_deref())
            .field("DeletionProtection", self.deletion_protection.as_ref())
            .list("AssociatedRoles", self.associated_roles.as_deref())
            .field("ListenerEndpoint", self.listener_endpoint.as_ref())
            .field("MaxAllocatedStorage", self.max_allocated_storage.as_ref())
            .finish()
    }
}

impl Shape for DBInstance {
    const SHAPE_NAME: &'static str = "DBInstance";
}

/// RDS DBInstanceRole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBInstanceRole {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl DBInstanceRole {
    /// Sets `RoleArn`.
    #[must_use]
    pub fn with_role_arn(mut self, input: impl Into<String>) -> Self {
        self.role_arn = Some(input.into());
        self
    }

    /// Sets `FeatureName`.
    #[must_use]
    pub fn with_feature_name(mut self, input: impl Into<String>) -> Self {
        self.feature_name = Some(input.into());
        self
    }

    /// Sets `Status`.
    #[must_use]
    pub fn with_status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }
}

impl fmt::Display for DBInstanceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("RoleArn", self.role_arn.as_deref())
            .field("FeatureName", self.feature_name.as_deref())
            .field("Status", self.status.as_deref())
            .finish()
    }
}

impl Shape for DBInstanceRole {
    const SHAPE_NAME: &'static str = "DBInstanceRole";
}

/// RDS DBInstanceStatusInfo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBInstanceStatusInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DBInstanceStatusInfo {
    /// Sets `StatusType`.
    #[must_use]
    pub fn with_status_type(mut self, input: impl Into<String>) -> Self {
        self.status_type = Some(input.into());
        self
    }

    /// Sets `Normal`.
    #[must_use]
    pub fn with_normal(mut self, input: bool) -> Self {
        self.normal = Some(input);
        self
    }

    /// Sets `Status`.
    #[must_use]
    pub fn with_status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets `Message`.
    #[must_use]
    pub fn with_message(mut self, input: impl Into<String>) -> Self {
        self.message = Some(input.into());
        self
    }
}

impl fmt::Display for DBInstanceStatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("StatusType", self.status_type.as_deref())
            .field("Normal", self.normal.as_ref())
            .field("Status", self.status.as_deref())
            .field("Message", self.message.as_deref())
            .finish()
    }
}

impl Shape for DBInstanceStatusInfo {
    const SHAPE_NAME: &'static str = "DBInstanceStatusInfo";
}

/// RDS DBParameterGroupStatus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBParameterGroupStatus {
    #[serde(
        rename = "DBParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_apply_status: Option<String>,
}

impl DBParameterGroupStatus {
    /// Sets `DBParameterGroupName`.
    #[must_use]
    pub fn with_db_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(input.into());
        self
    }

    /// Sets `ParameterApplyStatus`.
    #[must_use]
    pub fn with_parameter_apply_status(mut self, input: impl Into<String>) -> Self {
        self.parameter_apply_status = Some(input.into());
        self
    }
}

impl fmt::Display for DBParameterGroupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBParameterGroupName",
                self.db_parameter_group_name.as_deref(),
            )
            .field(
                "ParameterApplyStatus",
                self.parameter_apply_status.as_deref(),
            )
            .finish()
    }
}

impl Shape for DBParameterGroupStatus {
    const SHAPE_NAME: &'static str = "DBParameterGroupStatus";
}

/// The data structure representing a proxy managed by the RDS Proxy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBProxy {
    #[serde(rename = "DBProxyName", skip_serializing_if = "Option::is_none")]
    pub db_proxy_name: Option<String>,
    #[serde(rename = "DBProxyArn", skip_serializing_if = "Option::is_none")]
    pub db_proxy_arn: Option<String>,
    /// See [`DBProxyStatus`](crate::types::DBProxyStatus) for known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Vec<UserAuthConfigInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(rename = "RequireTLS", skip_serializing_if = "Option::is_none")]
    pub require_tls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_client_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_logging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<chrono::DateTime<chrono::Utc>>,
}

impl DBProxy {
    /// Sets `DBProxyName`.
    #[must_use]
    pub fn with_db_proxy_name(mut self, input: impl Into<String>) -> Self {
        self.db_proxy_name = Some(input.into());
        self
    }

    /// Sets `DBProxyArn`.
    #[must_use]
    pub fn with_db_proxy_arn(mut self, input: impl Into<String>) -> Self {
        self.db_proxy_arn = Some(input.into());
        self
    }

    /// Sets `Status`.
    #[must_use]
    pub fn with_status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets `EngineFamily`.
    #[must_use]
    pub fn with_engine_family(mut self, input: impl Into<String>) -> Self {
        self.engine_family = Some(input.into());
        self
    }

    /// Appends to `VpcSecurityGroupIds`, allocating the list when absent.
    #[must_use]
    pub fn with_vpc_security_group_ids(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Appends to `VpcSubnetIds`, allocating the list when absent.
    #[must_use]
    pub fn with_vpc_subnet_ids(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.vpc_subnet_ids
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Appends to `Auth`, allocating the list when absent.
    #[must_use]
    pub fn with_auth(mut self, inputs: impl IntoIterator<Item = UserAuthConfigInfo>) -> Self {
        self.auth.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `RoleArn`.
    #[must_use]
    pub fn with_role_arn(mut self, input: impl Into<String>) -> Self {
        self.role_arn = Some(input.into());
        self
    }

    /// Sets `Endpoint`.
    #[must_use]
    pub fn with_endpoint(mut self, input: impl Into<String>) -> Self {
        self.endpoint = Some(input.into());
        self
    }

    /// Sets `RequireTLS`.
    #[must_use]
    pub fn with_require_tls(mut self, input: bool) -> Self {
        self.require_tls = Some(input);
        self
    }

    /// Sets `IdleClientTimeout`.
    #[must_use]
    pub fn with_idle_client_timeout(mut self, input: i32) -> Self {
        self.idle_client_timeout = Some(input);
        self
    }

    /// Sets `DebugLogging`.
    #[must_use]
    pub fn with_debug_logging(mut self, input: bool) -> Self {
        self.debug_logging = Some(input);
        self
    }

    /// Sets `CreatedDate`.
    #[must_use]
    pub fn with_created_date(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.created_date = Some(input);
        self
    }

    /// Sets `UpdatedDate`.
    #[must_use]
    pub fn with_updated_date(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.updated_date = Some(input);
        self
    }
}

impl fmt::Display for DBProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBProxyName", self.db_proxy_name.as_deref())
            .field("DBProxyArn", self.db_proxy_arn.as_deref())
            .field("Status", self.status.as_deref())
            .field("EngineFamily", self.engine_family.as_deref())
            .list(
                "VpcSecurityGroupIds",
                self.vpc_security_group_ids.as_deref(),
            )
            .list("VpcSubnetIds", self.vpc_subnet_ids.as_deref())
            .list("Auth", self.auth.as_deref())
            .field("RoleArn", self.role_arn.as_deref())
            .field("Endpoint", self.endpoint.as_deref())
            .field("RequireTLS", self.require_tls.as_ref())
            .field("IdleClientTimeout", self.idle_client_timeout.as_ref())
            .field("DebugLogging", self.debug_logging.as_ref())
            .field("CreatedDate", self.created_date.as_ref())
            .field("UpdatedDate", self.updated_date.as_ref())
            .finish()
    }
}

impl Shape for DBProxy {
    const SHAPE_NAME: &'static str = "DBProxy";
}

/// RDS DBSecurityGroupMembership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBSecurityGroupMembership {
    #[serde(
        rename = "DBSecurityGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_security_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl DBSecurityGroupMembership {
    /// Sets `DBSecurityGroupName`.
    #[must_use]
    pub fn with_db_security_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_security_group_name = Some(input.into());
        self
    }

    /// Sets `Status`.
    #[must_use]
    pub fn with_status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }
}

impl fmt::Display for DBSecurityGroupMembership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBSecurityGroupName",
                self.db_security_group_name.as_deref(),
            )
            .field("Status", self.status.as_deref())
            .finish()
    }
}

impl Shape for DBSecurityGroupMembership {
    const SHAPE_NAME: &'static str = "DBSecurityGroupMembership";
}

/// An Amazon RDS DB snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBSnapshot {
    #[serde(
        rename = "DBSnapshotIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_snapshot_identifier: Option<String>,
    #[serde(
        rename = "DBInstanceIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_instance_identifier: Option<String>,
    /// When the snapshot was taken, in Universal Coordinated Time (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_create_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_create_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_progress: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_region: Option<String>,
    #[serde(
        rename = "SourceDBSnapshotIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub source_db_snapshot_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_credential_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(rename = "DBSnapshotArn", skip_serializing_if = "Option::is_none")]
    pub db_snapshot_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(
        rename = "IAMDatabaseAuthenticationEnabled",
        skip_serializing_if = "Option::is_none",
    )]
    pub iam_database_authentication_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbi_resource_id: Option<String>,
}

impl DBSnapshot {
    /// Sets `DBSnapshotIdentifier`.
    #[must_use]
    pub fn with_db_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets `DBInstanceIdentifier`.
    #[must_use]
    pub fn with_db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets `SnapshotCreateTime`.
    #[must_use]
    pub fn with_snapshot_create_time(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.snapshot_create_time = Some(input);
        self
    }

    /// Sets `Engine`.
    #[must_use]
    pub fn with_engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
        self
    }

    /// Sets `AllocatedStorage`.
    #[must_use]
    pub fn with_allocated_storage(mut self, input: i32) -> Self {
        self.allocated_storage = Some(input);
        self
    }

    /// Sets `Status`.
    #[must_use]
    pub fn with_status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets `Port`.
    #[must_use]
    pub fn with_port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets `AvailabilityZone`.
    #[must_use]
    pub fn with_availability_zone(mut self, input: impl Into<String>) -> Self {
        self.availability_zone = Some(input.into());
        self
    }

    /// Sets `VpcId`.
    #[must_use]
    pub fn with_vpc_id(mut self, input: impl Into<String>) -> Self {
        self.vpc_id = Some(input.into());
        self
    }

    /// Sets `InstanceCreateTime`.
    #[must_use]
    pub fn with_instance_create_time(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.instance_create_time = Some(input);
        self
    }

    /// Sets `MasterUsername`.
    #[must_use]
    pub fn with_master_username(mut self, input: impl Into<String>) -> Self {
        self.master_username = Some(input.into());
        self
    }

    /// Sets `EngineVersion`.
    #[must_use]
    pub fn with_engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets `LicenseModel`.
    #[must_use]
    pub fn with_license_model(mut self, input: impl Into<String>) -> Self {
        self.license_model = Some(input.into());
        self
    }

    /// Sets `SnapshotType`.
    #[must_use]
    pub fn with_snapshot_type(mut self, input: impl Into<String>) -> Self {
        self.snapshot_type = Some(input.into());
        self
    }

    /// Sets `Iops`.
    #[must_use]
    pub fn with_iops(mut self, input: i32) -> Self {
        self.iops = Some(input);
        self
    }

    /// Sets `OptionGroupName`.
    #[must_use]
    pub fn with_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Sets `PercentProgress`.
    #[must_use]
    pub fn with_percent_progress(mut self, input: i32) -> Self {
        self.percent_progress = Some(input);
        self
    }

    /// Sets `SourceRegion`.
    #[must_use]
    pub fn with_source_region(mut self, input: impl Into<String>) -> Self {
        self.source_region = Some(input.into());
        self
    }

    /// Sets `SourceDBSnapshotIdentifier`.
    #[must_use]
    pub fn with_source_db_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.source_db_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets `StorageType`.
    #[must_use]
    pub fn with_storage_type(mut self, input: impl Into<String>) -> Self {
        self.storage_type = Some(input.into());
        self
    }

    /// Sets `TdeCredentialArn`.
    #[must_use]
    pub fn with_tde_credential_arn(mut self, input: impl Into<String>) -> Self {
        self.tde_credential_arn = Some(input.into());
        self
    }

    /// Sets `Encrypted`.
    #[must_use]
    pub fn with_encrypted(mut self, input: bool) -> Self {
        self.encrypted = Some(input);
        self
    }

    /// Sets `KmsKeyId`.
    #[must_use]
    pub fn with_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets `DBSnapshotArn`.
    #[must_use]
    pub fn with_db_snapshot_arn(mut self, input: impl Into<String>) -> Self {
        self.db_snapshot_arn = Some(input.into());
        self
    }

    /// Sets `Timezone`.
    #[must_use]
    pub fn with_timezone(mut self, input: impl Into<String>) -> Self {
        self.timezone = Some(input.into());
        self
    }

    /// Sets `IAMDatabaseAuthenticationEnabled`.
    #[must_use]
    pub fn with_iam_database_authentication_enabled(mut self, input: bool) -> Self {
        self.iam_database_authentication_enabled = Some(input);
        self
    }

    /// Appends to `ProcessorFeatures`, allocating the list when absent.
    #[must_use]
    pub fn with_processor_features(
        mut self,
        inputs: impl IntoIterator<Item = ProcessorFeature>,
    ) -> Self {
        self.processor_features
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `DbiResourceId`.
    #[must_use]
    pub fn with_dbi_resource_id(mut self, input: impl Into<String>) -> Self {
        self.dbi_resource_id = Some(input.into());
        self
    }
}

impl fmt::Display for DBSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBSnapshotIdentifier",
                self.db_snapshot_identifier.as_deref(),
            )
            .field(
                "DBInstanceIdentifier",
                self.db_instance_identifier.as_deref(),
            )
            .field("SnapshotCreateTime", self.snapshot_create_time.as_ref())
            .field("Engine", self.engine.as_deref())
            .field("AllocatedStorage", self.allocated_storage.as_ref())
            .field("Status", self.status.as_deref())
            .field("Port", self.port.as_ref())
            .field("AvailabilityZone", self.availability_zone.as_deref())
            .field("VpcId", self.vpc_id.as_deref())
            .field("InstanceCreateTime", self.instance_create_time.as_ref())
            .field("MasterUsername", self.master_username.as_deref())
            .field("EngineVersion", self.engine_version.as_deref())
            .field("LicenseModel", self.license_model.as_deref())
            .field("SnapshotType", self.snapshot_type.as_deref())
            .field("Iops", self.iops.as_ref())
            .field("OptionGroupName", self.option_group_name.as_deref())
            .field("PercentProgress", self.percent_progress.as_ref())
            .field("SourceRegion", self.source_region.as_deref())
            .field(
                "SourceDBSnapshotIdentifier",
                self.source_db_snapshot_identifier.as_deref(),
            )
            .field("StorageType", self.storage_type.as_deref())
            .field("TdeCredentialArn", self.tde_credential_arn.as_deref())
            .field("Encrypted", self.encrypted.as_ref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field("DBSnapshotArn", self.db_snapshot_arn.as_deref())
            .field("Timezone", self.timezone.as_deref())
            .field(
                "IAMDatabaseAuthenticationEnabled",
                self.iam_database_authentication_enabled.as_ref(),
            )
            .list("ProcessorFeatures", self.processor_features.as_deref())
            .field("DbiResourceId", self.dbi_resource_id.as_deref())
            .finish()
    }
}

impl Shape for DBSnapshot {
    const SHAPE_NAME: &'static str = "DBSnapshot";
}

/// RDS DBSubnetGroup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBSubnetGroup {
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    #[serde(
        rename = "DBSubnetGroupDescription",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_subnet_group_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_group_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<Subnet>>,
    #[serde(rename = "DBSubnetGroupArn", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_arn: Option<String>,
}

impl DBSubnetGroup {
    /// Sets `DBSubnetGroupName`.
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets `DBSubnetGroupDescription`.
    #[must_use]
    pub fn with_db_subnet_group_description(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_description = Some(input.into());
        self
    }

    /// Sets `VpcId`.
    #[must_use]
    pub fn with_vpc_id(mut self, input: impl Into<String>) -> Self {
        self.vpc_id = Some(input.into());
        self
    }

    /// Sets `SubnetGroupStatus`.
    #[must_use]
    pub fn with_subnet_group_status(mut self, input: impl Into<String>) -> Self {
        self.subnet_group_status = Some(input.into());
        self
    }

    /// Appends to `Subnets`, allocating the list when absent.
    #[must_use]
    pub fn with_subnets(mut self, inputs: impl IntoIterator<Item = Subnet>) -> Self {
        self.subnets.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `DBSubnetGroupArn`.
    #[must_use]
    pub fn with_db_subnet_group_arn(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_arn = Some(input.into());
        self
    }
}

impl fmt::Display for DBSubnetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBSubnetGroupName", self.db_subnet_group_name.as_deref())
            .field(
                "DBSubnetGroupDescription",
                self.db_subnet_group_description.as_deref(),
            )
            .field("VpcId", self.vpc_id.as_deref())
            .field("SubnetGroupStatus", self.subnet_group_status.as_deref())
            .list("Subnets", self.subnets.as_deref())
            .field("DBSubnetGroupArn", self.db_subnet_group_arn.as_deref())
            .finish()
    }
}

impl Shape for DBSubnetGroup {
    const SHAPE_NAME: &'static str = "DBSubnetGroup";
}

/// RDS DomainMembership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainMembership {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "FQDN", skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    #[serde(rename = "IAMRoleName", skip_serializing_if = "Option::is_none")]
    pub iam_role_name: Option<String>,
}

impl DomainMembership {
    /// Sets `Domain`.
    #[must_use]
    pub fn with_domain(mut self, input: impl Into<String>) -> Self {
        self.domain = Some(input.into());
        self
    }

    /// Sets `Status`.
    #[must_use]
    pub fn with_status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets `FQDN`.
    #[must_use]
    pub fn with_fqdn(mut self, input: impl Into<String>) -> Self {
        self.fqdn = Some(input.into());
        self
    }

    /// Sets `IAMRoleName`.
    #[must_use]
    pub fn with_iam_role_name(mut self, input: impl Into<String>) -> Self {
        self.iam_role_name = Some(input.into());
        self
    }
}

impl fmt::Display for DomainMembership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Domain", self.domain.as_deref())
            .field("Status", self.status.as_deref())
            .field("FQDN", self.fqdn.as_deref())
            .field("IAMRoleName", self.iam_role_name.as_deref())
            .finish()
    }
}

impl Shape for DomainMembership {
    const SHAPE_NAME: &'static str = "DomainMembership";
}

/// RDS Endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Endpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_zone_id: Option<String>,
}

impl Endpoint {
    /// Sets `Address`.
    #[must_use]
    pub fn with_address(mut self, input: impl Into<String>) -> Self {
        self.address = Some(input.into());
        self
    }

    /// Sets `Port`.
    #[must_use]
    pub fn with_port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets `HostedZoneId`.
    #[must_use]
    pub fn with_hosted_zone_id(mut self, input: impl Into<String>) -> Self {
        self.hosted_zone_id = Some(input.into());
        self
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Address", self.address.as_deref())
            .field("Port", self.port.as_ref())
            .field("HostedZoneId", self.hosted_zone_id.as_deref())
            .finish()
    }
}

impl Shape for Endpoint {
    const SHAPE_NAME: &'static str = "Endpoint";
}

/// The engine default parameters for a DB parameter group family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EngineDefaults {
    #[serde(
        rename = "DBParameterGroupFamily",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_parameter_group_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
}

impl EngineDefaults {
    /// Sets `DBParameterGroupFamily`.
    #[must_use]
    pub fn with_db_parameter_group_family(mut self, input: impl Into<String>) -> Self {
        self.db_parameter_group_family = Some(input.into());
        self
    }

    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }

    /// Appends to `Parameters`, allocating the list when absent.
    #[must_use]
    pub fn with_parameters(mut self, inputs: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.get_or_insert_with(Vec::new).extend(inputs);
        self
    }
}

impl fmt::Display for EngineDefaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBParameterGroupFamily",
                self.db_parameter_group_family.as_deref(),
            )
            .field("Marker", self.marker.as_deref())
            .list("Parameters", self.parameters.as_deref())
            .finish()
    }
}

impl Shape for EngineDefaults {
    const SHAPE_NAME: &'static str = "EngineDefaults";
}

/// An event generated by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_identifier: Option<String>,
    /// See [`SourceType`](crate::types::SourceType) for known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_categories: Option<Vec<String>>,
    /// The date and time of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_arn: Option<String>,
}

impl Event {
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

    /// Sets `Message`.
    #[must_use]
    pub fn with_message(mut self, input: impl Into<String>) -> Self {
        self.message = Some(input.into());
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

    /// Sets `Date`.
    #[must_use]
    pub fn with_date(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.date = Some(input);
        self
    }

    /// Sets `SourceArn`.
    #[must_use]
    pub fn with_source_arn(mut self, input: impl Into<String>) -> Self {
        self.source_arn = Some(input.into());
        self
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("SourceIdentifier", self.source_identifier.as_deref())
            .field("SourceType", self.source_type.as_deref())
            .field("Message", self.message.as_deref())
            .list("EventCategories", self.event_categories.as_deref())
            .field("Date", self.date.as_ref())
            .field("SourceArn", self.source_arn.as_deref())
            .finish()
    }
}

impl Shape for Event {
    const SHAPE_NAME: &'static str = "Event";
}

/// A filter name and value pair that is used to return a more specific list of results from a describe operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    /// The name of the filter.
    ///
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// One or more filter values.
    ///
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Filter {
    /// Sets `Name`.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// Appends to `Values`, allocating the list when absent.
    #[must_use]
    pub fn with_values(mut self, inputs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Name", self.name.as_deref())
            .list("Values", self.values.as_deref())
            .finish()
    }
}

impl Shape for Filter {
    const SHAPE_NAME: &'static str = "Filter";
}

/// A list of all available options for an option group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionConfiguration {
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(
        rename = "DBSecurityGroupMemberships",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_security_group_memberships: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_memberships: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_settings: Option<Vec<OptionSetting>>,
}

impl OptionConfiguration {
    /// Sets `OptionName`.
    #[must_use]
    pub fn with_option_name(mut self, input: impl Into<String>) -> Self {
        self.option_name = Some(input.into());
        self
    }

    /// Sets `OptionVersion`.
    #[must_use]
    pub fn with_option_version(mut self, input: impl Into<String>) -> Self {
        self.option_version = Some(input.into());
        self
    }

    /// Sets `Port`.
    #[must_use]
    pub fn with_port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Appends to `DBSecurityGroupMemberships`, allocating the list when absent.
    #[must_use]
    pub fn with_db_security_group_memberships(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.db_security_group_memberships
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Appends to `VpcSecurityGroupMemberships`, allocating the list when absent.
    #[must_use]
    pub fn with_vpc_security_group_memberships(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.vpc_security_group_memberships
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Appends to `OptionSettings`, allocating the list when absent.
    #[must_use]
    pub fn with_option_settings(mut self, inputs: impl IntoIterator<Item = OptionSetting>) -> Self {
        self.option_settings
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }
}

impl fmt::Display for OptionConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("OptionName", self.option_name.as_deref())
            .field("OptionVersion", self.option_version.as_deref())
            .field("Port", self.port.as_ref())
            .list(
                "DBSecurityGroupMemberships",
                self.db_security_group_memberships.as_deref(),
            )
            .list(
                "VpcSecurityGroupMemberships",
                self.vpc_security_group_memberships.as_deref(),
            )
            .list("OptionSettings", self.option_settings.as_deref())
            .finish()
    }
}

impl Shape for OptionConfiguration {
    const SHAPE_NAME: &'static str = "OptionConfiguration";
}

/// RDS OptionGroup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<RdsOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_vpc_and_non_vpc_instance_memberships: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_arn: Option<String>,
}

impl OptionGroup {
    /// Sets `OptionGroupName`.
    #[must_use]
    pub fn with_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Sets `OptionGroupDescription`.
    #[must_use]
    pub fn with_option_group_description(mut self, input: impl Into<String>) -> Self {
        self.option_group_description = Some(input.into());
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

    /// Appends to `Options`, allocating the list when absent.
    #[must_use]
    pub fn with_options(mut self, inputs: impl IntoIterator<Item = RdsOption>) -> Self {
        self.options.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `AllowsVpcAndNonVpcInstanceMemberships`.
    #[must_use]
    pub fn with_allows_vpc_and_non_vpc_instance_memberships(mut self, input: bool) -> Self {
        self.allows_vpc_and_non_vpc_instance_memberships = Some(input);
        self
    }

    /// Sets `VpcId`.
    #[must_use]
    pub fn with_vpc_id(mut self, input: impl Into<String>) -> Self {
        self.vpc_id = Some(input.into());
        self
    }

    /// Sets `OptionGroupArn`.
    #[must_use]
    pub fn with_option_group_arn(mut self, input: impl Into<String>) -> Self {
        self.option_group_arn = Some(input.into());
        self
    }
}

impl fmt::Display for OptionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("OptionGroupName", self.option_group_name.as_deref())
            .field(
                "OptionGroupDescription",
                self.option_group_description.as_deref(),
            )
            .field("EngineName", self.engine_name.as_deref())
            .field("MajorEngineVersion", self.major_engine_version.as_deref())
            .list("Options", self.options.as_deref())
            .field(
                "AllowsVpcAndNonVpcInstanceMemberships",
                self.allows_vpc_and_non_vpc_instance_memberships.as_ref(),
            )
            .field("VpcId", self.vpc_id.as_deref())
            .field("OptionGroupArn", self.option_group_arn.as_deref())
            .finish()
    }
}

impl Shape for OptionGroup {
    const SHAPE_NAME: &'static str = "OptionGroup";
}

/// RDS OptionGroupMembership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionGroupMembership {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl OptionGroupMembership {
    /// Sets `OptionGroupName`.
    #[must_use]
    pub fn with_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Sets `Status`.
    #[must_use]
    pub fn with_status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }
}

impl fmt::Display for OptionGroupMembership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("OptionGroupName", self.option_group_name.as_deref())
            .field("Status", self.status.as_deref())
            .finish()
    }
}

impl Shape for OptionGroupMembership {
    const SHAPE_NAME: &'static str = "OptionGroupMembership";
}

/// Option settings are the actual settings being applied or configured for that option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_modifiable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_collection: Option<bool>,
}

impl OptionSetting {
    /// Sets `Name`.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// Sets `Value`.
    #[must_use]
    pub fn with_value(mut self, input: impl Into<String>) -> Self {
        self.value = Some(input.into());
        self
    }

    /// Sets `DefaultValue`.
    #[must_use]
    pub fn with_default_value(mut self, input: impl Into<String>) -> Self {
        self.default_value = Some(input.into());
        self
    }

    /// Sets `Description`.
    #[must_use]
    pub fn with_description(mut self, input: impl Into<String>) -> Self {
        self.description = Some(input.into());
        self
    }

    /// Sets `ApplyType`.
    #[must_use]
    pub fn with_apply_type(mut self, input: impl Into<String>) -> Self {
        self.apply_type = Some(input.into());
        self
    }

    /// Sets `DataType`.
    #[must_use]
    pub fn with_data_type(mut self, input: impl Into<String>) -> Self {
        self.data_type = Some(input.into());
        self
    }

    /// Sets `AllowedValues`.
    #[must_use]
    pub fn with_allowed_values(mut self, input: impl Into<String>) -> Self {
        self.allowed_values = Some(input.into());
        self
    }

    /// Sets `IsModifiable`.
    #[must_use]
    pub fn with_is_modifiable(mut self, input: bool) -> Self {
        self.is_modifiable = Some(input);
        self
    }

    /// Sets `IsCollection`.
    #[must_use]
    pub fn with_is_collection(mut self, input: bool) -> Self {
        self.is_collection = Some(input);
        self
    }
}

impl fmt::Display for OptionSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Name", self.name.as_deref())
            .field("Value", self.value.as_deref())
            .field("DefaultValue", self.default_value.as_deref())
            .field("Description", self.description.as_deref())
            .field("ApplyType", self.apply_type.as_deref())
            .field("DataType", self.data_type.as_deref())
            .field("AllowedValues", self.allowed_values.as_deref())
            .field("IsModifiable", self.is_modifiable.as_ref())
            .field("IsCollection", self.is_collection.as_ref())
            .finish()
    }
}

impl Shape for OptionSetting {
    const SHAPE_NAME: &'static str = "OptionSetting";
}

/// Contains a list of available options for a DB instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderableDBInstanceOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<AvailabilityZone>>,
    #[serde(rename = "MultiAZCapable", skip_serializing_if = "Option::is_none")]
    pub multi_az_capable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_replica_capable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_storage_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_iops: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_enhanced_monitoring: Option<bool>,
    #[serde(
        rename = "SupportsIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none",
    )]
    pub supports_iam_database_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_performance_insights: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_storage_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_storage_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_iops_per_db_instance: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iops_per_db_instance: Option<i32>,
    /// Minimum provisioned IOPS per GiB for a DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_iops_per_gib: Option<Double>,
    /// Maximum provisioned IOPS per GiB for a DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iops_per_gib: Option<Double>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_processor_features: Option<Vec<AvailableProcessorFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_engine_modes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_storage_autoscaling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_kerberos_authentication: Option<bool>,
}

impl OrderableDBInstanceOption {
    /// Sets `Engine`.
    #[must_use]
    pub fn with_engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
        self
    }

    /// Sets `EngineVersion`.
    #[must_use]
    pub fn with_engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets `DBInstanceClass`.
    #[must_use]
    pub fn with_db_instance_class(mut self, input: impl Into<String>) -> Self {
        self.db_instance_class = Some(input.into());
        self
    }

    /// Sets `LicenseModel`.
    #[must_use]
    pub fn with_license_model(mut self, input: impl Into<String>) -> Self {
        self.license_model = Some(input.into());
        self
    }

    /// Appends to `AvailabilityZones`, allocating the list when absent.
    #[must_use]
    pub fn with_availability_zones(
        mut self,
        inputs: impl IntoIterator<Item = AvailabilityZone>,
    ) -> Self {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `MultiAZCapable`.
    #[must_use]
    pub fn with_multi_az_capable(mut self, input: bool) -> Self {
        self.multi_az_capable = Some(input);
        self
    }

    /// Sets `ReadReplicaCapable`.
    #[must_use]
    pub fn with_read_replica_capable(mut self, input: bool) -> Self {
        self.read_replica_capable = Some(input);
        self
    }

    /// Sets `Vpc`.
    #[must_use]
    pub fn with_vpc(mut self, input: bool) -> Self {
        self.vpc = Some(input);
        self
    }

    /// Sets `SupportsStorageEncryption`.
    #[must_use]
    pub fn with_supports_storage_encryption(mut self, input: bool) -> Self {
        self.supports_storage_encryption = Some(input);
        self
    }

    /// Sets `StorageType`.
    #[must_use]
    pub fn with_storage_type(mut self, input: impl Into<String>) -> Self {
        self.storage_type = Some(input.into());
        self
    }

    /// Sets `SupportsIops`.
    #[must_use]
    pub fn with_supports_iops(mut self, input: bool) -> Self {
        self.supports_iops = Some(input);
        self
    }

    /// Sets `SupportsEnhancedMonitoring`.
    #[must_use]
    pub fn with_supports_enhanced_monitoring(mut self, input: bool) -> Self {
        self.supports_enhanced_monitoring = Some(input);
        self
    }

    /// Sets `SupportsIAMDatabaseAuthentication`.
    #[must_use]
    pub fn with_supports_iam_database_authentication(mut self, input: bool) -> Self {
        self.supports_iam_database_authentication = Some(input);
        self
    }

    /// Sets `SupportsPerformanceInsights`.
    #[must_use]
    pub fn with_supports_performance_insights(mut self, input: bool) -> Self {
        self.supports_performance_insights = Some(input);
        self
    }

    /// Sets `MinStorageSize`.
    #[must_use]
    pub fn with_min_storage_size(mut self, input: i32) -> Self {
        self.min_storage_size = Some(input);
        self
    }

    /// Sets `MaxStorageSize`.
    #[must_use]
    pub fn with_max_storage_size(mut self, input: i32) -> Self {
        self.max_storage_size = Some(input);
        self
    }

    /// Sets `MinIopsPerDbInstance`.
    #[must_use]
    pub fn with_min_iops_per_db_instance(mut self, input: i32) -> Self {
        self.min_iops_per_db_instance = Some(input);
        self
    }

    /// Sets `MaxIopsPerDbInstance`.
    #[must_use]
    pub fn with_max_iops_per_db_instance(mut self, input: i32) -> Self {
        self.max_iops_per_db_instance = Some(input);
        self
    }

    /// Sets `MinIopsPerGib`.
    #[must_use]
    pub fn with_min_iops_per_gib(mut self, input: f64) -> Self {
        self.min_iops_per_gib = Some(Double(input));
        self
    }

    /// Sets `MaxIopsPerGib`.
    #[must_use]
    pub fn with_max_iops_per_gib(mut self, input: f64) -> Self {
        self.max_iops_per_gib = Some(Double(input));
        self
    }

    /// Appends to `AvailableProcessorFeatures`, allocating the list when absent.
    #[must_use]
    pub fn with_available_processor_features(
        mut self,
        inputs: impl IntoIterator<Item = AvailableProcessorFeature>,
    ) -> Self {
        self.available_processor_features
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Appends to `SupportedEngineModes`, allocating the list when absent.
    #[must_use]
    pub fn with_supported_engine_modes(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.supported_engine_modes
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Sets `SupportsStorageAutoscaling`.
    #[must_use]
    pub fn with_supports_storage_autoscaling(mut self, input: bool) -> Self {
        self.supports_storage_autoscaling = Some(input);
        self
    }

    /// Sets `SupportsKerberosAuthentication`.
    #[must_use]
    pub fn with_supports_kerberos_authentication(mut self, input: bool) -> Self {
        self.supports_kerberos_authentication = Some(input);
        self
    }
}

impl fmt::Display for OrderableDBInstanceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Engine", self.engine.as_deref())
            .field("EngineVersion", self.engine_version.as_deref())
            .field("DBInstanceClass", self.db_instance_class.as_deref())
            .field("LicenseModel", self.license_model.as_deref())
            .list("AvailabilityZones", self.availability_zones.as_deref())
            .field("MultiAZCapable", self.multi_az_capable.as_ref())
            .field("ReadReplicaCapable", self.read_replica_capable.as_ref())
            .field("Vpc", self.vpc.as_ref())
            .field(
                "SupportsStorageEncryption",
                self.supports_storage_encryption.as_ref(),
            )
            .field("StorageType", self.storage_type.as_deref())
            .field("SupportsIops", self.supports_iops.as_ref())
            .field(
                "SupportsEnhancedMonitoring",
                self.supports_enhanced_monitoring.as_ref(),
            )
            .field(
                "SupportsIAMDatabaseAuthentication",
                self.supports_iam_database_authentication.as_ref(),
            )
            .field(
                "SupportsPerformanceInsights",
                self.supports_performance_insights.as_ref(),
            )
            .field("MinStorageSize", self.min_storage_size.as_ref())
            .field("MaxStorageSize", self.max_storage_size.as_ref())
            .field(
                "MinIopsPerDbInstance",
                self.min_iops_per_db_instance.as_ref(),
            )
            .field(
                "MaxIopsPerDbInstance",
                self.max_iops_per_db_instance.as_ref(),
            )
            .field("MinIopsPerGib", self.min_iops_per_gib.as_ref())
            .field("MaxIopsPerGib", self.max_iops_per_gib.as_ref())
            .list(
                "AvailableProcessorFeatures",
                self.available_processor_features.as_deref(),
            )
            .list(
                "SupportedEngineModes",
                self.supported_engine_modes.as_deref(),
            )
            .field(
                "SupportsStorageAutoscaling",
                self.supports_storage_autoscaling.as_ref(),
            )
            .field(
                "SupportsKerberosAuthentication",
                self.supports_kerberos_authentication.as_ref(),
            )
            .finish()
    }
}

impl Shape for OrderableDBInstanceOption {
    const SHAPE_NAME: &'static str = "OrderableDBInstanceOption";
}

/// A parameter of a DB parameter group or DB cluster parameter group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    /// The name of the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<String>,
    /// The value of the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<String>,
    /// Whether the parameter can be modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_modifiable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_engine_version: Option<String>,
    /// See [`ApplyMethod`](crate::types::ApplyMethod) for known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_engine_modes: Option<Vec<String>>,
}

impl Parameter {
    /// Sets `ParameterName`.
    #[must_use]
    pub fn with_parameter_name(mut self, input: impl Into<String>) -> Self {
        self.parameter_name = Some(input.into());
        self
    }

    /// Sets `ParameterValue`.
    #[must_use]
    pub fn with_parameter_value(mut self, input: impl Into<String>) -> Self {
        self.parameter_value = Some(input.into());
        self
    }

    /// Sets `Description`.
    #[must_use]
    pub fn with_description(mut self, input: impl Into<String>) -> Self {
        self.description = Some(input.into());
        self
    }

    /// Sets `Source`.
    #[must_use]
    pub fn with_source(mut self, input: impl Into<String>) -> Self {
        self.source = Some(input.into());
        self
    }

    /// Sets `ApplyType`.
    #[must_use]
    pub fn with_apply_type(mut self, input: impl Into<String>) -> Self {
        self.apply_type = Some(input.into());
        self
    }

    /// Sets `DataType`.
    #[must_use]
    pub fn with_data_type(mut self, input: impl Into<String>) -> Self {
        self.data_type = Some(input.into());
        self
    }

    /// Sets `AllowedValues`.
    #[must_use]
    pub fn with_allowed_values(mut self, input: impl Into<String>) -> Self {
        self.allowed_values = Some(input.into());
        self
    }

    /// Sets `IsModifiable`.
    #[must_use]
    pub fn with_is_modifiable(mut self, input: bool) -> Self {
        self.is_modifiable = Some(input);
        self
    }

    /// Sets `MinimumEngineVersion`.
    #[must_use]
    pub fn with_minimum_engine_version(mut self, input: impl Into<String>) -> Self {
        self.minimum_engine_version = Some(input.into());
        self
    }

    /// Sets `ApplyMethod`.
    #[must_use]
    pub fn with_apply_method(mut self, input: impl Into<String>) -> Self {
        self.apply_method = Some(input.into());
        self
    }

    /// Appends to `SupportedEngineModes`, allocating the list when absent.
    #[must_use]
    pub fn with_supported_engine_modes(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.supported_engine_modes
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ParameterName", self.parameter_name.as_deref())
            .field("ParameterValue", self.parameter_value.as_deref())
            .field("Description", self.description.as_deref())
            .field("Source", self.source.as_deref())
            .field("ApplyType", self.apply_type.as_deref())
            .field("DataType", self.data_type.as_deref())
            .field("AllowedValues", self.allowed_values.as_deref())
            .field("IsModifiable", self.is_modifiable.as_ref())
            .field(
                "MinimumEngineVersion",
                self.minimum_engine_version.as_deref(),
            )
            .field("ApplyMethod", self.apply_method.as_deref())
            .list(
                "SupportedEngineModes",
                self.supported_engine_modes.as_deref(),
            )
            .finish()
    }
}

impl Shape for Parameter {
    const SHAPE_NAME: &'static str = "Parameter";
}

/// RDS PendingCloudwatchLogsExports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PendingCloudwatchLogsExports {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_types_to_enable: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_types_to_disable: Option<Vec<String>>,
}

impl PendingCloudwatchLogsExports {
    /// Appends to `LogTypesToEnable`, allocating the list when absent.
    #[must_use]
    pub fn with_log_types_to_enable(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.log_types_to_enable
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Appends to `LogTypesToDisable`, allocating the list when absent.
    #[must_use]
    pub fn with_log_types_to_disable(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.log_types_to_disable
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for PendingCloudwatchLogsExports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("LogTypesToEnable", self.log_types_to_enable.as_deref())
            .list("LogTypesToDisable", self.log_types_to_disable.as_deref())
            .finish()
    }
}

impl Shape for PendingCloudwatchLogsExports {
    const SHAPE_NAME: &'static str = "PendingCloudwatchLogsExports";
}

/// RDS PendingModifiedValues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PendingModifiedValues {
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(rename = "MultiAZ", skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(
        rename = "DBInstanceIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_instance_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(
        rename = "CACertificateIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub ca_certificate_identifier: Option<String>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_cloudwatch_logs_exports: Option<PendingCloudwatchLogsExports>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,
}

impl PendingModifiedValues {
    /// Sets `DBInstanceClass`.
    #[must_use]
    pub fn with_db_instance_class(mut self, input: impl Into<String>) -> Self {
        self.db_instance_class = Some(input.into());
        self
    }

    /// Sets `AllocatedStorage`.
    #[must_use]
    pub fn with_allocated_storage(mut self, input: i32) -> Self {
        self.allocated_storage = Some(input);
        self
    }

    /// Sets `MasterUserPassword`.
    #[must_use]
    pub fn with_master_user_password(mut self, input: impl Into<String>) -> Self {
        self.master_user_password = Some(input.into());
        self
    }

    /// Sets `Port`.
    #[must_use]
    pub fn with_port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets `BackupRetentionPeriod`.
    #[must_use]
    pub fn with_backup_retention_period(mut self, input: i32) -> Self {
        self.backup_retention_period = Some(input);
        self
    }

    /// Sets `MultiAZ`.
    #[must_use]
    pub fn with_multi_az(mut self, input: bool) -> Self {
        self.multi_az = Some(input);
        self
    }

    /// Sets `EngineVersion`.
    #[must_use]
    pub fn with_engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets `LicenseModel`.
    #[must_use]
    pub fn with_license_model(mut self, input: impl Into<String>) -> Self {
        self.license_model = Some(input.into());
        self
    }

    /// Sets `Iops`.
    #[must_use]
    pub fn with_iops(mut self, input: i32) -> Self {
        self.iops = Some(input);
        self
    }

    /// Sets `DBInstanceIdentifier`.
    #[must_use]
    pub fn with_db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets `StorageType`.
    #[must_use]
    pub fn with_storage_type(mut self, input: impl Into<String>) -> Self {
        self.storage_type = Some(input.into());
        self
    }

    /// Sets `CACertificateIdentifier`.
    #[must_use]
    pub fn with_ca_certificate_identifier(mut self, input: impl Into<String>) -> Self {
        self.ca_certificate_identifier = Some(input.into());
        self
    }

    /// Sets `DBSubnetGroupName`.
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets `PendingCloudwatchLogsExports`.
    #[must_use]
    pub fn with_pending_cloudwatch_logs_exports(
        mut self,
        input: PendingCloudwatchLogsExports,
    ) -> Self {
        self.pending_cloudwatch_logs_exports = Some(input);
        self
    }

    /// Appends to `ProcessorFeatures`, allocating the list when absent.
    #[must_use]
    pub fn with_processor_features(
        mut self,
        inputs: impl IntoIterator<Item = ProcessorFeature>,
    ) -> Self {
        self.processor_features
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }
}

impl fmt::Display for PendingModifiedValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBInstanceClass", self.db_instance_class.as_deref())
            .field("AllocatedStorage", self.allocated_storage.as_ref())
            .field("MasterUserPassword", self.master_user_password.as_deref())
            .field("Port", self.port.as_ref())
            .field(
                "BackupRetentionPeriod",
                self.backup_retention_period.as_ref(),
            )
            .field("MultiAZ", self.multi_az.as_ref())
            .field("EngineVersion", self.engine_version.as_deref())
            .field("LicenseModel", self.license_model.as_deref())
            .field("Iops", self.iops.as_ref())
            .field(
                "DBInstanceIdentifier",
                self.db_instance_identifier.as_deref(),
            )
            .field("StorageType", self.storage_type.as_deref())
            .field(
                "CACertificateIdentifier",
                self.ca_certificate_identifier.as_deref(),
            )
            .field("DBSubnetGroupName", self.db_subnet_group_name.as_deref())
            .field(
                "PendingCloudwatchLogsExports",
                self.pending_cloudwatch_logs_exports.as_ref(),
            )
            .list("ProcessorFeatures", self.processor_features.as_deref())
            .finish()
    }
}

impl Shape for PendingModifiedValues {
    const SHAPE_NAME: &'static str = "PendingModifiedValues";
}

/// A processor feature entry, such as the number of CPU cores or threads per core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorFeature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ProcessorFeature {
    /// Sets `Name`.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// Sets `Value`.
    #[must_use]
    pub fn with_value(mut self, input: impl Into<String>) -> Self {
        self.value = Some(input.into());
        self
    }
}

impl fmt::Display for ProcessorFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Name", self.name.as_deref())
            .field("Value", self.value.as_deref())
            .finish()
    }
}

impl Shape for ProcessorFeature {
    const SHAPE_NAME: &'static str = "ProcessorFeature";
}

/// An option of an option group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RdsOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_settings: Option<Vec<OptionSetting>>,
    #[serde(
        rename = "DBSecurityGroupMemberships",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_security_group_memberships: Option<Vec<DBSecurityGroupMembership>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_memberships: Option<Vec<VpcSecurityGroupMembership>>,
}

impl RdsOption {
    /// Sets `OptionName`.
    #[must_use]
    pub fn with_option_name(mut self, input: impl Into<String>) -> Self {
        self.option_name = Some(input.into());
        self
    }

    /// Sets `OptionDescription`.
    #[must_use]
    pub fn with_option_description(mut self, input: impl Into<String>) -> Self {
        self.option_description = Some(input.into());
        self
    }

    /// Sets `Persistent`.
    #[must_use]
    pub fn with_persistent(mut self, input: bool) -> Self {
        self.persistent = Some(input);
        self
    }

    /// Sets `Permanent`.
    #[must_use]
    pub fn with_permanent(mut self, input: bool) -> Self {
        self.permanent = Some(input);
        self
    }

    /// Sets `Port`.
    #[must_use]
    pub fn with_port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets `OptionVersion`.
    #[must_use]
    pub fn with_option_version(mut self, input: impl Into<String>) -> Self {
        self.option_version = Some(input.into());
        self
    }

    /// Appends to `OptionSettings`, allocating the list when absent.
    #[must_use]
    pub fn with_option_settings(mut self, inputs: impl IntoIterator<Item = OptionSetting>) -> Self {
        self.option_settings
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Appends to `DBSecurityGroupMemberships`, allocating the list when absent.
    #[must_use]
    pub fn with_db_security_group_memberships(
        mut self,
        inputs: impl IntoIterator<Item = DBSecurityGroupMembership>,
    ) -> Self {
        self.db_security_group_memberships
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Appends to `VpcSecurityGroupMemberships`, allocating the list when absent.
    #[must_use]
    pub fn with_vpc_security_group_memberships(
        mut self,
        inputs: impl IntoIterator<Item = VpcSecurityGroupMembership>,
    ) -> Self {
        self.vpc_security_group_memberships
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }
}

impl fmt::Display for RdsOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("OptionName", self.option_name.as_deref())
            .field("OptionDescription", self.option_description.as_deref())
            .field("Persistent", self.persistent.as_ref())
            .field("Permanent", self.permanent.as_ref())
            .field("Port", self.port.as_ref())
            .field("OptionVersion", self.option_version.as_deref())
            .list("OptionSettings", self.option_settings.as_deref())
            .list(
                "DBSecurityGroupMemberships",
                self.db_security_group_memberships.as_deref(),
            )
            .list(
                "VpcSecurityGroupMemberships",
                self.vpc_security_group_memberships.as_deref(),
            )
            .finish()
    }
}

impl Shape for RdsOption {
    const SHAPE_NAME: &'static str = "Option";
}

/// Contains the scaling configuration of an Aurora Serverless DB cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScalingConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_pause: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_until_auto_pause: Option<i32>,
    /// The action to take when the timeout is reached, either ForceApplyCapacityChange or RollbackCapacityChange.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_action: Option<String>,
}

impl ScalingConfiguration {
    /// Sets `MinCapacity`.
    #[must_use]
    pub fn with_min_capacity(mut self, input: i32) -> Self {
        self.min_capacity = Some(input);
        self
    }

    /// Sets `MaxCapacity`.
    #[must_use]
    pub fn with_max_capacity(mut self, input: i32) -> Self {
        self.max_capacity = Some(input);
        self
    }

    /// Sets `AutoPause`.
    #[must_use]
    pub fn with_auto_pause(mut self, input: bool) -> Self {
        self.auto_pause = Some(input);
        self
    }

    /// Sets `SecondsUntilAutoPause`.
    #[must_use]
    pub fn with_seconds_until_auto_pause(mut self, input: i32) -> Self {
        self.seconds_until_auto_pause = Some(input);
        self
    }

    /// Sets `TimeoutAction`.
    #[must_use]
    pub fn with_timeout_action(mut self, input: impl Into<String>) -> Self {
        self.timeout_action = Some(input.into());
        self
    }
}

impl fmt::Display for ScalingConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MinCapacity", self.min_capacity.as_ref())
            .field("MaxCapacity", self.max_capacity.as_ref())
            .field("AutoPause", self.auto_pause.as_ref())
            .field(
                "SecondsUntilAutoPause",
                self.seconds_until_auto_pause.as_ref(),
            )
            .field("TimeoutAction", self.timeout_action.as_deref())
            .finish()
    }
}

impl Shape for ScalingConfiguration {
    const SHAPE_NAME: &'static str = "ScalingConfiguration";
}

/// RDS ScalingConfigurationInfo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScalingConfigurationInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_pause: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_until_auto_pause: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_action: Option<String>,
}

impl ScalingConfigurationInfo {
    /// Sets `MinCapacity`.
    #[must_use]
    pub fn with_min_capacity(mut self, input: i32) -> Self {
        self.min_capacity = Some(input);
        self
    }

    /// Sets `MaxCapacity`.
    #[must_use]
    pub fn with_max_capacity(mut self, input: i32) -> Self {
        self.max_capacity = Some(input);
        self
    }

    /// Sets `AutoPause`.
    #[must_use]
    pub fn with_auto_pause(mut self, input: bool) -> Self {
        self.auto_pause = Some(input);
        self
    }

    /// Sets `SecondsUntilAutoPause`.
    #[must_use]
    pub fn with_seconds_until_auto_pause(mut self, input: i32) -> Self {
        self.seconds_until_auto_pause = Some(input);
        self
    }

    /// Sets `TimeoutAction`.
    #[must_use]
    pub fn with_timeout_action(mut self, input: impl Into<String>) -> Self {
        self.timeout_action = Some(input.into());
        self
    }
}

impl fmt::Display for ScalingConfigurationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MinCapacity", self.min_capacity.as_ref())
            .field("MaxCapacity", self.max_capacity.as_ref())
            .field("AutoPause", self.auto_pause.as_ref())
            .field(
                "SecondsUntilAutoPause",
                self.seconds_until_auto_pause.as_ref(),
            )
            .field("TimeoutAction", self.timeout_action.as_deref())
            .finish()
    }
}

impl Shape for ScalingConfigurationInfo {
    const SHAPE_NAME: &'static str = "ScalingConfigurationInfo";
}

/// RDS Subnet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subnet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_availability_zone: Option<AvailabilityZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_status: Option<String>,
}

impl Subnet {
    /// Sets `SubnetIdentifier`.
    #[must_use]
    pub fn with_subnet_identifier(mut self, input: impl Into<String>) -> Self {
        self.subnet_identifier = Some(input.into());
        self
    }

    /// Sets `SubnetAvailabilityZone`.
    #[must_use]
    pub fn with_subnet_availability_zone(mut self, input: AvailabilityZone) -> Self {
        self.subnet_availability_zone = Some(input);
        self
    }

    /// Sets `SubnetStatus`.
    #[must_use]
    pub fn with_subnet_status(mut self, input: impl Into<String>) -> Self {
        self.subnet_status = Some(input.into());
        self
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("SubnetIdentifier", self.subnet_identifier.as_deref())
            .field(
                "SubnetAvailabilityZone",
                self.subnet_availability_zone.as_ref(),
            )
            .field("SubnetStatus", self.subnet_status.as_deref())
            .finish()
    }
}

impl Shape for Subnet {
    const SHAPE_NAME: &'static str = "Subnet";
}

/// Metadata assigned to an Amazon RDS resource consisting of a key-value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// A key is the required name of the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// A value is the optional value of the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Sets `Key`.
    #[must_use]
    pub fn with_key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Sets `Value`.
    #[must_use]
    pub fn with_value(mut self, input: impl Into<String>) -> Self {
        self.value = Some(input.into());
        self
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Key", self.key.as_deref())
            .field("Value", self.value.as_deref())
            .finish()
    }
}

impl Shape for Tag {
    const SHAPE_NAME: &'static str = "Tag";
}

/// RDS UserAuthConfig.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserAuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// See [`AuthScheme`](crate::types::AuthScheme) for known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_arn: Option<String>,
    /// See [`IAMAuthMode`](crate::types::IAMAuthMode) for known values.
    #[serde(rename = "IAMAuth", skip_serializing_if = "Option::is_none")]
    pub iam_auth: Option<String>,
}

impl UserAuthConfig {
    /// Sets `Description`.
    #[must_use]
    pub fn with_description(mut self, input: impl Into<String>) -> Self {
        self.description = Some(input.into());
        self
    }

    /// Sets `UserName`.
    #[must_use]
    pub fn with_user_name(mut self, input: impl Into<String>) -> Self {
        self.user_name = Some(input.into());
        self
    }

    /// Sets `AuthScheme`.
    #[must_use]
    pub fn with_auth_scheme(mut self, input: impl Into<String>) -> Self {
        self.auth_scheme = Some(input.into());
        self
    }

    /// Sets `SecretArn`.
    #[must_use]
    pub fn with_secret_arn(mut self, input: impl Into<String>) -> Self {
        self.secret_arn = Some(input.into());
        self
    }

    /// Sets `IAMAuth`.
    #[must_use]
    pub fn with_iam_auth(mut self, input: impl Into<String>) -> Self {
        self.iam_auth = Some(input.into());
        self
    }
}

impl fmt::Display for UserAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Description", self.description.as_deref())
            .field("UserName", self.user_name.as_deref())
            .field("AuthScheme", self.auth_scheme.as_deref())
            .field("SecretArn", self.secret_arn.as_deref())
            .field("IAMAuth", self.iam_auth.as_deref())
            .finish()
    }
}

impl Shape for UserAuthConfig {
    const SHAPE_NAME: &'static str = "UserAuthConfig";
}

/// RDS UserAuthConfigInfo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserAuthConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// See [`AuthScheme`](crate::types::AuthScheme) for known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_arn: Option<String>,
    /// See [`IAMAuthMode`](crate::types::IAMAuthMode) for known values.
    #[serde(rename = "IAMAuth", skip_serializing_if = "Option::is_none")]
    pub iam_auth: Option<String>,
}

impl UserAuthConfigInfo {
    /// Sets `Description`.
    #[must_use]
    pub fn with_description(mut self, input: impl Into<String>) -> Self {
        self.description = Some(input.into());
        self
    }

    /// Sets `UserName`.
    #[must_use]
    pub fn with_user_name(mut self, input: impl Into<String>) -> Self {
        self.user_name = Some(input.into());
        self
    }

    /// Sets `AuthScheme`.
    #[must_use]
    pub fn with_auth_scheme(mut self, input: impl Into<String>) -> Self {
        self.auth_scheme = Some(input.into());
        self
    }

    /// Sets `SecretArn`.
    #[must_use]
    pub fn with_secret_arn(mut self, input: impl Into<String>) -> Self {
        self.secret_arn = Some(input.into());
        self
    }

    /// Sets `IAMAuth`.
    #[must_use]
    pub fn with_iam_auth(mut self, input: impl Into<String>) -> Self {
        self.iam_auth = Some(input.into());
        self
    }
}

impl fmt::Display for UserAuthConfigInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Description", self.description.as_deref())
            .field("UserName", self.user_name.as_deref())
            .field("AuthScheme", self.auth_scheme.as_deref())
            .field("SecretArn", self.secret_arn.as_deref())
            .field("IAMAuth", self.iam_auth.as_deref())
            .finish()
    }
}

impl Shape for UserAuthConfigInfo {
    const SHAPE_NAME: &'static str = "UserAuthConfigInfo";
}

/// RDS VpcSecurityGroupMembership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcSecurityGroupMembership {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl VpcSecurityGroupMembership {
    /// Sets `VpcSecurityGroupId`.
    #[must_use]
    pub fn with_vpc_security_group_id(mut self, input: impl Into<String>) -> Self {
        self.vpc_security_group_id = Some(input.into());
        self
    }

    /// Sets `Status`.
    #[must_use]
    pub fn with_status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }
}

impl fmt::Display for VpcSecurityGroupMembership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("VpcSecurityGroupId", self.vpc_security_group_id.as_deref())
            .field("Status", self.status.as_deref())
            .finish()
    }
}

impl Shape for VpcSecurityGroupMembership {
    const SHAPE_NAME: &'static str = "VpcSecurityGroupMembership";
}

/// Information about the virtual private network (VPN) between the VMware vSphere cluster and the AWS website.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpnDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_id: Option<String>,
    #[serde(
        rename = "VpnTunnelOriginatorIP",
        skip_serializing_if = "Option::is_none",
    )]
    pub vpn_tunnel_originator_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_gateway_ip: Option<String>,
    /// The preshared key (PSK) for the VPN.
    #[serde(rename = "VpnPSK", skip_serializing_if = "Option::is_none")]
    pub vpn_psk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_state: Option<String>,
}

impl VpnDetails {
    /// Sets `VpnId`.
    #[must_use]
    pub fn with_vpn_id(mut self, input: impl Into<String>) -> Self {
        self.vpn_id = Some(input.into());
        self
    }

    /// Sets `VpnTunnelOriginatorIP`.
    #[must_use]
    pub fn with_vpn_tunnel_originator_ip(mut self, input: impl Into<String>) -> Self {
        self.vpn_tunnel_originator_ip = Some(input.into());
        self
    }

    /// Sets `VpnGatewayIp`.
    #[must_use]
    pub fn with_vpn_gateway_ip(mut self, input: impl Into<String>) -> Self {
        self.vpn_gateway_ip = Some(input.into());
        self
    }

    /// Sets `VpnPSK`.
    #[must_use]
    pub fn with_vpn_psk(mut self, input: impl Into<String>) -> Self {
        self.vpn_psk = Some(input.into());
        self
    }

    /// Sets `VpnName`.
    #[must_use]
    pub fn with_vpn_name(mut self, input: impl Into<String>) -> Self {
        self.vpn_name = Some(input.into());
        self
    }

    /// Sets `VpnState`.
    #[must_use]
    pub fn with_vpn_state(mut self, input: impl Into<String>) -> Self {
        self.vpn_state = Some(input.into());
        self
    }
}

impl fmt::Display for VpnDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("VpnId", self.vpn_id.as_deref())
            .field(
                "VpnTunnelOriginatorIP",
                self.vpn_tunnel_originator_ip.as_deref(),
            )
            .field("VpnGatewayIp", self.vpn_gateway_ip.as_deref())
            .field("VpnPSK", self.vpn_psk.as_deref())
            .field("VpnName", self.vpn_name.as_deref())
            .field("VpnState", self.vpn_state.as_deref())
            .finish()
    }
}

impl Shape for VpnDetails {
    const SHAPE_NAME: &'static str = "VpnDetails";
}
