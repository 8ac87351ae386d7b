//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::{Filter, ProcessorFeature, Tag};

/// Input for the `AddRoleToDBInstance` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddRoleToDBInstanceInput {
    /// Required.
    #[serde(
        rename = "DBInstanceIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_instance_identifier: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
}

impl AddRoleToDBInstanceInput {
    /// Sets `DBInstanceIdentifier`.
    #[must_use]
    pub fn with_db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

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
}

impl fmt::Display for AddRoleToDBInstanceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBInstanceIdentifier",
                self.db_instance_identifier.as_deref(),
            )
            .field("RoleArn", self.role_arn.as_deref())
            .field("FeatureName", self.feature_name.as_deref())
            .finish()
    }
}

impl Shape for AddRoleToDBInstanceInput {
    const SHAPE_NAME: &'static str = "AddRoleToDBInstanceMessage";
}

/// Input for the `CreateDBInstanceReadReplica` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDBInstanceReadReplicaInput {
    /// Required.
    #[serde(
        rename = "DBInstanceIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_instance_identifier: Option<String>,
    /// Required.
    #[serde(
        rename = "SourceDBInstanceIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub source_db_instance_identifier: Option<String>,
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(rename = "MultiAZ", skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(
        rename = "DBParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none",
    )]
    pub enable_iam_database_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_performance_insights: Option<bool>,
    #[serde(
        rename = "PerformanceInsightsKMSKeyId",
        skip_serializing_if = "Option::is_none",
    )]
    pub performance_insights_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default_processor_features: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl CreateDBInstanceReadReplicaInput {
    /// Sets `DBInstanceIdentifier`.
    #[must_use]
    pub fn with_db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets `SourceDBInstanceIdentifier`.
    #[must_use]
    pub fn with_source_db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.source_db_instance_identifier = Some(input.into());
        self
    }

    /// Sets `DBInstanceClass`.
    #[must_use]
    pub fn with_db_instance_class(mut self, input: impl Into<String>) -> Self {
        self.db_instance_class = Some(input.into());
        self
    }

    /// Sets `AvailabilityZone`.
    #[must_use]
    pub fn with_availability_zone(mut self, input: impl Into<String>) -> Self {
        self.availability_zone = Some(input.into());
        self
    }

    /// Sets `Port`.
    #[must_use]
    pub fn with_port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets `MultiAZ`.
    #[must_use]
    pub fn with_multi_az(mut self, input: bool) -> Self {
        self.multi_az = Some(input);
        self
    }

    /// Sets `AutoMinorVersionUpgrade`.
    #[must_use]
    pub fn with_auto_minor_version_upgrade(mut self, input: bool) -> Self {
        self.auto_minor_version_upgrade = Some(input);
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

    /// Sets `DBParameterGroupName`.
    #[must_use]
    pub fn with_db_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(input.into());
        self
    }

    /// Sets `PubliclyAccessible`.
    #[must_use]
    pub fn with_publicly_accessible(mut self, input: bool) -> Self {
        self.publicly_accessible = Some(input);
        self
    }

    /// Appends to `Tags`, allocating the list when absent.
    #[must_use]
    pub fn with_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `DBSubnetGroupName`.
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
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

    /// Sets `StorageType`.
    #[must_use]
    pub fn with_storage_type(mut self, input: impl Into<String>) -> Self {
        self.storage_type = Some(input.into());
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

    /// Sets `MonitoringRoleArn`.
    #[must_use]
    pub fn with_monitoring_role_arn(mut self, input: impl Into<String>) -> Self {
        self.monitoring_role_arn = Some(input.into());
        self
    }

    /// Sets `KmsKeyId`.
    #[must_use]
    pub fn with_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets `PreSignedUrl`.
    #[must_use]
    pub fn with_pre_signed_url(mut self, input: impl Into<String>) -> Self {
        self.pre_signed_url = Some(input.into());
        self
    }

    /// Sets `EnableIAMDatabaseAuthentication`.
    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets `EnablePerformanceInsights`.
    #[must_use]
    pub fn with_enable_performance_insights(mut self, input: bool) -> Self {
        self.enable_performance_insights = Some(input);
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

    /// Appends to `EnableCloudwatchLogsExports`, allocating the list when absent.
    #[must_use]
    pub fn with_enable_cloudwatch_logs_exports(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.enable_cloudwatch_logs_exports
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

    /// Sets `UseDefaultProcessorFeatures`.
    #[must_use]
    pub fn with_use_default_processor_features(mut self, input: bool) -> Self {
        self.use_default_processor_features = Some(input);
        self
    }

    /// Sets `DeletionProtection`.
    #[must_use]
    pub fn with_deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets `Domain`.
    #[must_use]
    pub fn with_domain(mut self, input: impl Into<String>) -> Self {
        self.domain = Some(input.into());
        self
    }

    /// Sets `DomainIAMRoleName`.
    #[must_use]
    pub fn with_domain_iam_role_name(mut self, input: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(input.into());
        self
    }
}

impl fmt::Display for CreateDBInstanceReadReplicaInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBInstanceIdentifier",
                self.db_instance_identifier.as_deref(),
            )
            .field(
                "SourceDBInstanceIdentifier",
                self.source_db_instance_identifier.as_deref(),
            )
            .field("DBInstanceClass", self.db_instance_class.as_deref())
            .field("AvailabilityZone", self.availability_zone.as_deref())
            .field("Port", self.port.as_ref())
            .field("MultiAZ", self.multi_az.as_ref())
            .field(
                "AutoMinorVersionUpgrade",
                self.auto_minor_version_upgrade.as_ref(),
            )
            .field("Iops", self.iops.as_ref())
            .field("OptionGroupName", self.option_group_name.as_deref())
            .field(
                "DBParameterGroupName",
                self.db_parameter_group_name.as_deref(),
            )
            .field("PubliclyAccessible", self.publicly_accessible.as_ref())
            .list("Tags", self.tags.as_deref())
            .field("DBSubnetGroupName", self.db_subnet_group_name.as_deref())
            .list(
                "VpcSecurityGroupIds",
                self.vpc_security_group_ids.as_deref(),
            )
            .field("StorageType", self.storage_type.as_deref())
            .field("CopyTagsToSnapshot", self.copy_tags_to_snapshot.as_ref())
            .field("MonitoringInterval", self.monitoring_interval.as_ref())
            .field("MonitoringRoleArn", self.monitoring_role_arn.as_deref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field("PreSignedUrl", self.pre_signed_url.as_deref())
            .field(
                "EnableIAMDatabaseAuthentication",
                self.enable_iam_database_authentication.as_ref(),
            )
            .field(
                "EnablePerformanceInsights",
                self.enable_performance_insights.as_ref(),
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
                "EnableCloudwatchLogsExports",
                self.enable_cloudwatch_logs_exports.as_deref(),
            )
            .list("ProcessorFeatures", self.processor_features.as_deref())
            .field(
                "UseDefaultProcessorFeatures",
                self.use_default_processor_features.as_ref(),
            )
            .field("DeletionProtection", self.deletion_protection.as_ref())
            .field("Domain", self.domain.as_deref())
            .field("DomainIAMRoleName", self.domain_iam_role_name.as_deref())
            .finish()
    }
}

impl Shape for CreateDBInstanceReadReplicaInput {
    const SHAPE_NAME: &'static str = "CreateDBInstanceReadReplicaMessage";
}

/// Input for the `DescribeOrderableDBInstanceOptions` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOrderableDBInstanceOptionsInput {
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    /// Whether to show only VPC or non-VPC offerings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeOrderableDBInstanceOptionsInput {
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

    /// Sets `Vpc`.
    #[must_use]
    pub fn with_vpc(mut self, input: bool) -> Self {
        self.vpc = Some(input);
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

impl fmt::Display for DescribeOrderableDBInstanceOptionsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Engine", self.engine.as_deref())
            .field("EngineVersion", self.engine_version.as_deref())
            .field("DBInstanceClass", self.db_instance_class.as_deref())
            .field("LicenseModel", self.license_model.as_deref())
            .field("Vpc", self.vpc.as_ref())
            .list("Filters", self.filters.as_deref())
            .field("MaxRecords", self.max_records.as_ref())
            .field("Marker", self.marker.as_deref())
            .finish()
    }
}

impl Shape for DescribeOrderableDBInstanceOptionsInput {
    const SHAPE_NAME: &'static str = "DescribeOrderableDBInstanceOptionsMessage";
}

/// Input for the `RemoveRoleFromDBInstance` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveRoleFromDBInstanceInput {
    /// Required.
    #[serde(
        rename = "DBInstanceIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_instance_identifier: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
}

impl RemoveRoleFromDBInstanceInput {
    /// Sets `DBInstanceIdentifier`.
    #[must_use]
    pub fn with_db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

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
}

impl fmt::Display for RemoveRoleFromDBInstanceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBInstanceIdentifier",
                self.db_instance_identifier.as_deref(),
            )
            .field("RoleArn", self.role_arn.as_deref())
            .field("FeatureName", self.feature_name.as_deref())
            .finish()
    }
}

impl Shape for RemoveRoleFromDBInstanceInput {
    const SHAPE_NAME: &'static str = "RemoveRoleFromDBInstanceMessage";
}

/// Input for the `RestoreDBInstanceFromDBSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBInstanceFromDBSnapshotInput {
    /// Required.
    #[serde(
        rename = "DBInstanceIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_instance_identifier: Option<String>,
    /// Required.
    #[serde(
        rename = "DBSnapshotIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_snapshot_identifier: Option<String>,
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    #[serde(rename = "MultiAZ", skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(rename = "DBName", skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_credential_arn: Option<String>,
    /// The password for the given ARN from the key store in order to access the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_credential_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none",
    )]
    pub enable_iam_database_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default_processor_features: Option<bool>,
    #[serde(
        rename = "DBParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
}

impl RestoreDBInstanceFromDBSnapshotInput {
    /// Sets `DBInstanceIdentifier`.
    #[must_use]
    pub fn with_db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets `DBSnapshotIdentifier`.
    #[must_use]
    pub fn with_db_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets `DBInstanceClass`.
    #[must_use]
    pub fn with_db_instance_class(mut self, input: impl Into<String>) -> Self {
        self.db_instance_class = Some(input.into());
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

    /// Sets `DBSubnetGroupName`.
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets `MultiAZ`.
    #[must_use]
    pub fn with_multi_az(mut self, input: bool) -> Self {
        self.multi_az = Some(input);
        self
    }

    /// Sets `PubliclyAccessible`.
    #[must_use]
    pub fn with_publicly_accessible(mut self, input: bool) -> Self {
        self.publicly_accessible = Some(input);
        self
    }

    /// Sets `AutoMinorVersionUpgrade`.
    #[must_use]
    pub fn with_auto_minor_version_upgrade(mut self, input: bool) -> Self {
        self.auto_minor_version_upgrade = Some(input);
        self
    }

    /// Sets `LicenseModel`.
    #[must_use]
    pub fn with_license_model(mut self, input: impl Into<String>) -> Self {
        self.license_model = Some(input.into());
        self
    }

    /// Sets `DBName`.
    #[must_use]
    pub fn with_db_name(mut self, input: impl Into<String>) -> Self {
        self.db_name = Some(input.into());
        self
    }

    /// Sets `Engine`.
    #[must_use]
    pub fn with_engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
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

    /// Appends to `Tags`, allocating the list when absent.
    #[must_use]
    pub fn with_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(inputs);
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

    /// Sets `TdeCredentialPassword`.
    #[must_use]
    pub fn with_tde_credential_password(mut self, input: impl Into<String>) -> Self {
        self.tde_credential_password = Some(input.into());
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

    /// Sets `Domain`.
    #[must_use]
    pub fn with_domain(mut self, input: impl Into<String>) -> Self {
        self.domain = Some(input.into());
        self
    }

    /// Sets `CopyTagsToSnapshot`.
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
        self
    }

    /// Sets `DomainIAMRoleName`.
    #[must_use]
    pub fn with_domain_iam_role_name(mut self, input: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(input.into());
        self
    }

    /// Sets `EnableIAMDatabaseAuthentication`.
    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Appends to `EnableCloudwatchLogsExports`, allocating the list when absent.
    #[must_use]
    pub fn with_enable_cloudwatch_logs_exports(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.enable_cloudwatch_logs_exports
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

    /// Sets `UseDefaultProcessorFeatures`.
    #[must_use]
    pub fn with_use_default_processor_features(mut self, input: bool) -> Self {
        self.use_default_processor_features = Some(input);
        self
    }

    /// Sets `DBParameterGroupName`.
    #[must_use]
    pub fn with_db_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(input.into());
        self
    }

    /// Sets `DeletionProtection`.
    #[must_use]
    pub fn with_deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }
}

impl fmt::Display for RestoreDBInstanceFromDBSnapshotInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "DBInstanceIdentifier",
                self.db_instance_identifier.as_deref(),
            )
            .field(
                "DBSnapshotIdentifier",
                self.db_snapshot_identifier.as_deref(),
            )
            .field("DBInstanceClass", self.db_instance_class.as_deref())
            .field("Port", self.port.as_ref())
            .field("AvailabilityZone", self.availability_zone.as_deref())
            .field("DBSubnetGroupName", self.db_subnet_group_name.as_deref())
            .field("MultiAZ", self.multi_az.as_ref())
            .field("PubliclyAccessible", self.publicly_accessible.as_ref())
            .field(
                "AutoMinorVersionUpgrade",
                self.auto_minor_version_upgrade.as_ref(),
            )
            .field("LicenseModel", self.license_model.as_deref())
            .field("DBName", self.db_name.as_deref())
            .field("Engine", self.engine.as_deref())
            .field("Iops", self.iops.as_ref())
            .field("OptionGroupName", self.option_group_name.as_deref())
            .list("Tags", self.tags.as_deref())
            .field("StorageType", self.storage_type.as_deref())
            .field("TdeCredentialArn", self.tde_credential_arn.as_deref())
            .field(
                "TdeCredentialPassword",
                self.tde_credential_password.as_deref(),
            )
            .list(
                "VpcSecurityGroupIds",
                self.vpc_security_group_ids.as_deref(),
            )
            .field("Domain", self.domain.as_deref())
            .field("CopyTagsToSnapshot", self.copy_tags_to_snapshot.as_ref())
            .field("DomainIAMRoleName", self.domain_iam_role_name.as_deref())
            .field(
                "EnableIAMDatabaseAuthentication",
                self.enable_iam_database_authentication.as_ref(),
            )
            .list(
                "EnableCloudwatchLogsExports",
                self.enable_cloudwatch_logs_exports.as_deref(),
            )
            .list("ProcessorFeatures", self.processor_features.as_deref())
            .field(
                "UseDefaultProcessorFeatures",
                self.use_default_processor_features.as_ref(),
            )
            .field(
                "DBParameterGroupName",
                self.db_parameter_group_name.as_deref(),
            )
            .field("DeletionProtection", self.deletion_protection.as_ref())
            .finish()
    }
}

impl Shape for RestoreDBInstanceFromDBSnapshotInput {
    const SHAPE_NAME: &'static str = "RestoreDBInstanceFromDBSnapshotMessage";
}

/// Input for the `RestoreDBInstanceFromS3` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBInstanceFromS3Input {
    #[serde(rename = "DBName", skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    /// Required.
    #[serde(
        rename = "DBInstanceIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_instance_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,
    /// Required.
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    #[serde(rename = "DBSecurityGroups", skip_serializing_if = "Option::is_none")]
    pub db_security_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(
        rename = "DBParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(rename = "MultiAZ", skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_role_arn: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none",
    )]
    pub enable_iam_database_authentication: Option<bool>,
    /// The name of the engine of your source database.
    ///
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_engine: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_engine_version: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_prefix: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_ingestion_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_performance_insights: Option<bool>,
    #[serde(
        rename = "PerformanceInsightsKMSKeyId",
        skip_serializing_if = "Option::is_none",
    )]
    pub performance_insights_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default_processor_features: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
}

impl RestoreDBInstanceFromS3Input {
    /// Sets `DBName`.
    #[must_use]
    pub fn with_db_name(mut self, input: impl Into<String>) -> Self {
        self.db_name = Some(input.into());
        self
    }

    /// Sets `DBInstanceIdentifier`.
    #[must_use]
    pub fn with_db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets `AllocatedStorage`.
    #[must_use]
    pub fn with_allocated_storage(mut self, input: i32) -> Self {
        self.allocated_storage = Some(input);
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

    /// Sets `MasterUsername`.
    #[must_use]
    pub fn with_master_username(mut self, input: impl Into<String>) -> Self {
        self.master_username = Some(input.into());
        self
    }

    /// Sets `MasterUserPassword`.
    #[must_use]
    pub fn with_master_user_password(mut self, input: impl Into<String>) -> Self {
        self.master_user_password = Some(input.into());
        self
    }

    /// Appends to `DBSecurityGroups`, allocating the list when absent.
    #[must_use]
    pub fn with_db_security_groups(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.db_security_groups
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
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

    /// Sets `AvailabilityZone`.
    #[must_use]
    pub fn with_availability_zone(mut self, input: impl Into<String>) -> Self {
        self.availability_zone = Some(input.into());
        self
    }

    /// Sets `DBSubnetGroupName`.
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets `PreferredMaintenanceWindow`.
    #[must_use]
    pub fn with_preferred_maintenance_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(input.into());
        self
    }

    /// Sets `DBParameterGroupName`.
    #[must_use]
    pub fn with_db_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(input.into());
        self
    }

    /// Sets `BackupRetentionPeriod`.
    #[must_use]
    pub fn with_backup_retention_period(mut self, input: i32) -> Self {
        self.backup_retention_period = Some(input);
        self
    }

    /// Sets `PreferredBackupWindow`.
    #[must_use]
    pub fn with_preferred_backup_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(input.into());
        self
    }

    /// Sets `Port`.
    #[must_use]
    pub fn with_port(mut self, input: i32) -> Self {
        self.port = Some(input);
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

    /// Sets `OptionGroupName`.
    #[must_use]
    pub fn with_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Sets `PubliclyAccessible`.
    #[must_use]
    pub fn with_publicly_accessible(mut self, input: bool) -> Self {
        self.publicly_accessible = Some(input);
        self
    }

    /// Appends to `Tags`, allocating the list when absent.
    #[must_use]
    pub fn with_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `StorageType`.
    #[must_use]
    pub fn with_storage_type(mut self, input: impl Into<String>) -> Self {
        self.storage_type = Some(input.into());
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

    /// Sets `MonitoringRoleArn`.
    #[must_use]
    pub fn with_monitoring_role_arn(mut self, input: impl Into<String>) -> Self {
        self.monitoring_role_arn = Some(input.into());
        self
    }

    /// Sets `EnableIAMDatabaseAuthentication`.
    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets `SourceEngine`.
    #[must_use]
    pub fn with_source_engine(mut self, input: impl Into<String>) -> Self {
        self.source_engine = Some(input.into());
        self
    }

    /// Sets `SourceEngineVersion`.
    #[must_use]
    pub fn with_source_engine_version(mut self, input: impl Into<String>) -> Self {
        self.source_engine_version = Some(input.into());
        self
    }

    /// Sets `S3BucketName`.
    #[must_use]
    pub fn with_s3_bucket_name(mut self, input: impl Into<String>) -> Self {
        self.s3_bucket_name = Some(input.into());
        self
    }

    /// Sets `S3Prefix`.
    #[must_use]
    pub fn with_s3_prefix(mut self, input: impl Into<String>) -> Self {
        self.s3_prefix = Some(input.into());
        self
    }

    /// Sets `S3IngestionRoleArn`.
    #[must_use]
    pub fn with_s3_ingestion_role_arn(mut self, input: impl Into<String>) -> Self {
        self.s3_ingestion_role_arn = Some(input.into());
        self
    }

    /// Sets `EnablePerformanceInsights`.
    #[must_use]
    pub fn with_enable_performance_insights(mut self, input: bool) -> Self {
        self.enable_performance_insights = Some(input);
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

    /// Appends to `EnableCloudwatchLogsExports`, allocating the list when absent.
    #[must_use]
    pub fn with_enable_cloudwatch_logs_exports(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.enable_cloudwatch_logs_exports
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

    /// Sets `UseDefaultProcessorFeatures`.
    #[must_use]
    pub fn with_use_default_processor_features(mut self, input: bool) -> Self {
        self.use_default_processor_features = Some(input);
        self
    }

    /// Sets `DeletionProtection`.
    #[must_use]
    pub fn with_deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }
}

impl fmt::Display for RestoreDBInstanceFromS3Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBName", self.db_name.as_deref())
            .field(
                "DBInstanceIdentifier",
                self.db_instance_identifier.as_deref(),
            )
            .field("AllocatedStorage", self.allocated_storage.as_ref())
            .field("DBInstanceClass", self.db_instance_class.as_deref())
            .field("Engine", self.engine.as_deref())
            .field("MasterUsername", self.master_username.as_deref())
            .field("MasterUserPassword", self.master_user_password.as_deref())
            .list("DBSecurityGroups", self.db_security_groups.as_deref())
            .list(
                "VpcSecurityGroupIds",
                self.vpc_security_group_ids.as_deref(),
            )
            .field("AvailabilityZone", self.availability_zone.as_deref())
            .field("DBSubnetGroupName", self.db_subnet_group_name.as_deref())
            .field(
                "PreferredMaintenanceWindow",
                self.preferred_maintenance_window.as_deref(),
            )
            .field(
                "DBParameterGroupName",
                self.db_parameter_group_name.as_deref(),
            )
            .field(
                "BackupRetentionPeriod",
                self.backup_retention_period.as_ref(),
            )
            .field(
                "PreferredBackupWindow",
                self.preferred_backup_window.as_deref(),
            )
            .field("Port", self.port.as_ref())
            .field("MultiAZ", self.multi_az.as_ref())
            .field("EngineVersion", self.engine_version.as_deref())
            .field(
                "AutoMinorVersionUpgrade",
                self.auto_minor_version_upgrade.as_ref(),
            )
            .field("LicenseModel", self.license_model.as_deref())
            .field("Iops", self.iops.as_ref())
            .field("OptionGroupName", self.option_group_name.as_deref())
            .field("PubliclyAccessible", self.publicly_accessible.as_ref())
            .list("Tags", self.tags.as_deref())
            .field("StorageType", self.storage_type.as_deref())
            .field("StorageEncrypted", self.storage_encrypted.as_ref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field("CopyTagsToSnapshot", self.copy_tags_to_snapshot.as_ref())
            .field("MonitoringInterval", self.monitoring_interval.as_ref())
            .field("MonitoringRoleArn", self.monitoring_role_arn.as_deref())
            .field(
                "EnableIAMDatabaseAuthentication",
                self.enable_iam_database_authentication.as_ref(),
            )
            .field("SourceEngine", self.source_engine.as_deref())
            .field("SourceEngineVersion", self.source_engine_version.as_deref())
            .field("S3BucketName", self.s3_bucket_name.as_deref())
            .field("S3Prefix", self.s3_prefix.as_deref())
            .field("S3IngestionRoleArn", self.s3_ingestion_role_arn.as_deref())
            .field(
                "EnablePerformanceInsights",
                self.enable_performance_insights.as_ref(),
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
                "EnableCloudwatchLogsExports",
                self.enable_cloudwatch_logs_exports.as_deref(),
            )
            .list("ProcessorFeatures", self.processor_features.as_deref())
            .field(
                "UseDefaultProcessorFeatures",
                self.use_default_processor_features.as_ref(),
            )
            .field("DeletionProtection", self.deletion_protection.as_ref())
            .finish()
    }
}

impl Shape for RestoreDBInstanceFromS3Input {
    const SHAPE_NAME: &'static str = "RestoreDBInstanceFromS3Message";
}
