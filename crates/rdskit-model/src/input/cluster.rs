//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::{CloudwatchLogsExportConfiguration, Filter, ScalingConfiguration, Tag};

/// Input for the `AddRoleToDBCluster` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddRoleToDBClusterInput {
    /// Required.
    #[serde(
        rename = "DBClusterIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_identifier: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// The name of the feature for the DB cluster that the IAM role is to be associated with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
}

impl AddRoleToDBClusterInput {
    /// Sets `DBClusterIdentifier`.
    #[must_use]
    pub fn with_db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(input.into());
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

impl fmt::Display for AddRoleToDBClusterInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBClusterIdentifier", self.db_cluster_identifier.as_deref())
            .field("RoleArn", self.role_arn.as_deref())
            .field("FeatureName", self.feature_name.as_deref())
            .finish()
    }
}

impl Shape for AddRoleToDBClusterInput {
    const SHAPE_NAME: &'static str = "AddRoleToDBClusterMessage";
}

/// Input for the `CreateDBCluster` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDBClusterInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// The DB cluster identifier.
    ///
    /// Required.
    #[serde(
        rename = "DBClusterIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_identifier: Option<String>,
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    /// The name of the database engine to be used for this DB cluster.
    ///
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_source_identifier: Option<String>,
    /// Tags to assign to the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,
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
    pub backtrack_window: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_configuration: Option<ScalingConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    /// The global cluster ID of an Aurora cluster that becomes the primary cluster in the new global database cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_cluster_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_http_endpoint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl CreateDBClusterInput {
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

    /// Sets `DBClusterParameterGroupName`.
    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
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

    /// Sets `DBSubnetGroupName`.
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
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

    /// Sets `MasterUserPassword`.
    #[must_use]
    pub fn with_master_user_password(mut self, input: impl Into<String>) -> Self {
        self.master_user_password = Some(input.into());
        self
    }

    /// Sets `OptionGroupName`.
    #[must_use]
    pub fn with_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
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

    /// Appends to `Tags`, allocating the list when absent.
    #[must_use]
    pub fn with_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(inputs);
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

    /// Sets `BacktrackWindow`.
    #[must_use]
    pub fn with_backtrack_window(mut self, input: i64) -> Self {
        self.backtrack_window = Some(input);
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

    /// Sets `EngineMode`.
    #[must_use]
    pub fn with_engine_mode(mut self, input: impl Into<String>) -> Self {
        self.engine_mode = Some(input.into());
        self
    }

    /// Sets `ScalingConfiguration`.
    #[must_use]
    pub fn with_scaling_configuration(mut self, input: ScalingConfiguration) -> Self {
        self.scaling_configuration = Some(input);
        self
    }

    /// Sets `DeletionProtection`.
    #[must_use]
    pub fn with_deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets `GlobalClusterIdentifier`.
    #[must_use]
    pub fn with_global_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.global_cluster_identifier = Some(input.into());
        self
    }

    /// Sets `EnableHttpEndpoint`.
    #[must_use]
    pub fn with_enable_http_endpoint(mut self, input: bool) -> Self {
        self.enable_http_endpoint = Some(input);
        self
    }

    /// Sets `CopyTagsToSnapshot`.
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
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

impl fmt::Display for CreateDBClusterInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("AvailabilityZones", self.availability_zones.as_deref())
            .field(
                "BackupRetentionPeriod",
                self.backup_retention_period.as_ref(),
            )
            .field("CharacterSetName", self.character_set_name.as_deref())
            .field("DatabaseName", self.database_name.as_deref())
            .field("DBClusterIdentifier", self.db_cluster_identifier.as_deref())
            .field(
                "DBClusterParameterGroupName",
                self.db_cluster_parameter_group_name.as_deref(),
            )
            .list(
                "VpcSecurityGroupIds",
                self.vpc_security_group_ids.as_deref(),
            )
            .field("DBSubnetGroupName", self.db_subnet_group_name.as_deref())
            .field("Engine", self.engine.as_deref())
            .field("EngineVersion", self.engine_version.as_deref())
            .field("Port", self.port.as_ref())
            .field("MasterUsername", self.master_username.as_deref())
            .field("MasterUserPassword", self.master_user_password.as_deref())
            .field("OptionGroupName", self.option_group_name.as_deref())
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
            .list("Tags", self.tags.as_deref())
            .field("StorageEncrypted", self.storage_encrypted.as_ref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field("PreSignedUrl", self.pre_signed_url.as_deref())
            .field(
                "EnableIAMDatabaseAuthentication",
                self.enable_iam_database_authentication.as_ref(),
            )
            .field("BacktrackWindow", self.backtrack_window.as_ref())
            .list(
                "EnableCloudwatchLogsExports",
                self.enable_cloudwatch_logs_exports.as_deref(),
            )
            .field("EngineMode", self.engine_mode.as_deref())
            .field("ScalingConfiguration", self.scaling_configuration.as_ref())
            .field("DeletionProtection", self.deletion_protection.as_ref())
            .field(
                "GlobalClusterIdentifier",
                self.global_cluster_identifier.as_deref(),
            )
            .field("EnableHttpEndpoint", self.enable_http_endpoint.as_ref())
            .field("CopyTagsToSnapshot", self.copy_tags_to_snapshot.as_ref())
            .field("Domain", self.domain.as_deref())
            .field("DomainIAMRoleName", self.domain_iam_role_name.as_deref())
            .finish()
    }
}

impl Shape for CreateDBClusterInput {
    const SHAPE_NAME: &'static str = "CreateDBClusterMessage";
}

/// Input for the `DescribeDBClusters` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDBClustersInput {
    #[serde(
        rename = "DBClusterIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_shared: Option<bool>,
}

impl DescribeDBClustersInput {
    /// Sets `DBClusterIdentifier`.
    #[must_use]
    pub fn with_db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(input.into());
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

    /// Sets `IncludeShared`.
    #[must_use]
    pub fn with_include_shared(mut self, input: bool) -> Self {
        self.include_shared = Some(input);
        self
    }
}

impl fmt::Display for DescribeDBClustersInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBClusterIdentifier", self.db_cluster_identifier.as_deref())
            .list("Filters", self.filters.as_deref())
            .field("MaxRecords", self.max_records.as_ref())
            .field("Marker", self.marker.as_deref())
            .field("IncludeShared", self.include_shared.as_ref())
            .finish()
    }
}

impl Shape for DescribeDBClustersInput {
    const SHAPE_NAME: &'static str = "DescribeDBClustersMessage";
}

/// Input for the `ModifyDBCluster` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDBClusterInput {
    /// Required.
    #[serde(
        rename = "DBClusterIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_identifier: Option<String>,
    /// The new DB cluster identifier for the DB cluster when renaming a DB cluster.
    #[serde(
        rename = "NewDBClusterIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub new_db_cluster_identifier: Option<String>,
    /// Whether the modifications in this request and any pending modifications are applied as soon as possible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_immediately: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none",
    )]
    pub enable_iam_database_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloudwatch_logs_export_configuration: Option<CloudwatchLogsExportConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_major_version_upgrade: Option<bool>,
    #[serde(
        rename = "DBInstanceParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_instance_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_configuration: Option<ScalingConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_http_endpoint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
}

impl ModifyDBClusterInput {
    /// Sets `DBClusterIdentifier`.
    #[must_use]
    pub fn with_db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(input.into());
        self
    }

    /// Sets `NewDBClusterIdentifier`.
    #[must_use]
    pub fn with_new_db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.new_db_cluster_identifier = Some(input.into());
        self
    }

    /// Sets `ApplyImmediately`.
    #[must_use]
    pub fn with_apply_immediately(mut self, input: bool) -> Self {
        self.apply_immediately = Some(input);
        self
    }

    /// Sets `BackupRetentionPeriod`.
    #[must_use]
    pub fn with_backup_retention_period(mut self, input: i32) -> Self {
        self.backup_retention_period = Some(input);
        self
    }

    /// Sets `DBClusterParameterGroupName`.
    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
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

    /// Sets `Port`.
    #[must_use]
    pub fn with_port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets `MasterUserPassword`.
    #[must_use]
    pub fn with_master_user_password(mut self, input: impl Into<String>) -> Self {
        self.master_user_password = Some(input.into());
        self
    }

    /// Sets `OptionGroupName`.
    #[must_use]
    pub fn with_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
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

    /// Sets `EnableIAMDatabaseAuthentication`.
    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets `BacktrackWindow`.
    #[must_use]
    pub fn with_backtrack_window(mut self, input: i64) -> Self {
        self.backtrack_window = Some(input);
        self
    }

    /// Sets `CloudwatchLogsExportConfiguration`.
    #[must_use]
    pub fn with_cloudwatch_logs_export_configuration(
        mut self,
        input: CloudwatchLogsExportConfiguration,
    ) -> Self {
        self.cloudwatch_logs_export_configuration = Some(input);
        self
    }

    /// Sets `EngineVersion`.
    #[must_use]
    pub fn with_engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets `AllowMajorVersionUpgrade`.
    #[must_use]
    pub fn with_allow_major_version_upgrade(mut self, input: bool) -> Self {
        self.allow_major_version_upgrade = Some(input);
        self
    }

    /// Sets `DBInstanceParameterGroupName`.
    #[must_use]
    pub fn with_db_instance_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_instance_parameter_group_name = Some(input.into());
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

    /// Sets `ScalingConfiguration`.
    #[must_use]
    pub fn with_scaling_configuration(mut self, input: ScalingConfiguration) -> Self {
        self.scaling_configuration = Some(input);
        self
    }

    /// Sets `DeletionProtection`.
    #[must_use]
    pub fn with_deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets `EnableHttpEndpoint`.
    #[must_use]
    pub fn with_enable_http_endpoint(mut self, input: bool) -> Self {
        self.enable_http_endpoint = Some(input);
        self
    }

    /// Sets `CopyTagsToSnapshot`.
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
        self
    }
}

impl fmt::Display for ModifyDBClusterInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBClusterIdentifier", self.db_cluster_identifier.as_deref())
            .field(
                "NewDBClusterIdentifier",
                self.new_db_cluster_identifier.as_deref(),
            )
            .field("ApplyImmediately", self.apply_immediately.as_ref())
            .field(
                "BackupRetentionPeriod",
                self.backup_retention_period.as_ref(),
            )
            .field(
                "DBClusterParameterGroupName",
                self.db_cluster_parameter_group_name.as_deref(),
            )
            .list(
                "VpcSecurityGroupIds",
                self.vpc_security_group_ids.as_deref(),
            )
            .field("Port", self.port.as_ref())
            .field("MasterUserPassword", self.master_user_password.as_deref())
            .field("OptionGroupName", self.option_group_name.as_deref())
            .field(
                "PreferredBackupWindow",
                self.preferred_backup_window.as_deref(),
            )
            .field(
                "PreferredMaintenanceWindow",
                self.preferred_maintenance_window.as_deref(),
            )
            .field(
                "EnableIAMDatabaseAuthentication",
                self.enable_iam_database_authentication.as_ref(),
            )
            .field("BacktrackWindow", self.backtrack_window.as_ref())
            .field(
                "CloudwatchLogsExportConfiguration",
                self.cloudwatch_logs_export_configuration.as_ref(),
            )
            .field("EngineVersion", self.engine_version.as_deref())
            .field(
                "AllowMajorVersionUpgrade",
                self.allow_major_version_upgrade.as_ref(),
            )
            .field(
                "DBInstanceParameterGroupName",
                self.db_instance_parameter_group_name.as_deref(),
            )
            .field("Domain", self.domain.as_deref())
            .field("DomainIAMRoleName", self.domain_iam_role_name.as_deref())
            .field("ScalingConfiguration", self.scaling_configuration.as_ref())
            .field("DeletionProtection", self.deletion_protection.as_ref())
            .field("EnableHttpEndpoint", self.enable_http_endpoint.as_ref())
            .field("CopyTagsToSnapshot", self.copy_tags_to_snapshot.as_ref())
            .finish()
    }
}

impl Shape for ModifyDBClusterInput {
    const SHAPE_NAME: &'static str = "ModifyDBClusterMessage";
}

/// Input for the `RemoveRoleFromDBCluster` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveRoleFromDBClusterInput {
    /// Required.
    #[serde(
        rename = "DBClusterIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_identifier: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
}

impl RemoveRoleFromDBClusterInput {
    /// Sets `DBClusterIdentifier`.
    #[must_use]
    pub fn with_db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(input.into());
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

impl fmt::Display for RemoveRoleFromDBClusterInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBClusterIdentifier", self.db_cluster_identifier.as_deref())
            .field("RoleArn", self.role_arn.as_deref())
            .field("FeatureName", self.feature_name.as_deref())
            .finish()
    }
}

impl Shape for RemoveRoleFromDBClusterInput {
    const SHAPE_NAME: &'static str = "RemoveRoleFromDBClusterMessage";
}

/// Input for the `RestoreDBClusterFromS3` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBClusterFromS3Input {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// Required.
    #[serde(
        rename = "DBClusterIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_identifier: Option<String>,
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none",
    )]
    pub enable_iam_database_authentication: Option<bool>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_engine: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_engine_version: Option<String>,
    /// The name of the Amazon S3 bucket that contains the data used to create the Amazon Aurora DB cluster.
    ///
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_prefix: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_ingestion_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl RestoreDBClusterFromS3Input {
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

    /// Sets `DBClusterParameterGroupName`.
    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
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

    /// Sets `DBSubnetGroupName`.
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
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

    /// Sets `MasterUserPassword`.
    #[must_use]
    pub fn with_master_user_password(mut self, input: impl Into<String>) -> Self {
        self.master_user_password = Some(input.into());
        self
    }

    /// Sets `OptionGroupName`.
    #[must_use]
    pub fn with_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
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

    /// Appends to `Tags`, allocating the list when absent.
    #[must_use]
    pub fn with_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(inputs);
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

    /// Sets `BacktrackWindow`.
    #[must_use]
    pub fn with_backtrack_window(mut self, input: i64) -> Self {
        self.backtrack_window = Some(input);
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

    /// Sets `DeletionProtection`.
    #[must_use]
    pub fn with_deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets `CopyTagsToSnapshot`.
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
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

impl fmt::Display for RestoreDBClusterFromS3Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("AvailabilityZones", self.availability_zones.as_deref())
            .field(
                "BackupRetentionPeriod",
                self.backup_retention_period.as_ref(),
            )
            .field("CharacterSetName", self.character_set_name.as_deref())
            .field("DatabaseName", self.database_name.as_deref())
            .field("DBClusterIdentifier", self.db_cluster_identifier.as_deref())
            .field(
                "DBClusterParameterGroupName",
                self.db_cluster_parameter_group_name.as_deref(),
            )
            .list(
                "VpcSecurityGroupIds",
                self.vpc_security_group_ids.as_deref(),
            )
            .field("DBSubnetGroupName", self.db_subnet_group_name.as_deref())
            .field("Engine", self.engine.as_deref())
            .field("EngineVersion", self.engine_version.as_deref())
            .field("Port", self.port.as_ref())
            .field("MasterUsername", self.master_username.as_deref())
            .field("MasterUserPassword", self.master_user_password.as_deref())
            .field("OptionGroupName", self.option_group_name.as_deref())
            .field(
                "PreferredBackupWindow",
                self.preferred_backup_window.as_deref(),
            )
            .field(
                "PreferredMaintenanceWindow",
                self.preferred_maintenance_window.as_deref(),
            )
            .list("Tags", self.tags.as_deref())
            .field("StorageEncrypted", self.storage_encrypted.as_ref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field(
                "EnableIAMDatabaseAuthentication",
                self.enable_iam_database_authentication.as_ref(),
            )
            .field("SourceEngine", self.source_engine.as_deref())
            .field("SourceEngineVersion", self.source_engine_version.as_deref())
            .field("S3BucketName", self.s3_bucket_name.as_deref())
            .field("S3Prefix", self.s3_prefix.as_deref())
            .field("S3IngestionRoleArn", self.s3_ingestion_role_arn.as_deref())
            .field("BacktrackWindow", self.backtrack_window.as_ref())
            .list(
                "EnableCloudwatchLogsExports",
                self.enable_cloudwatch_logs_exports.as_deref(),
            )
            .field("DeletionProtection", self.deletion_protection.as_ref())
            .field("CopyTagsToSnapshot", self.copy_tags_to_snapshot.as_ref())
            .field("Domain", self.domain.as_deref())
            .field("DomainIAMRoleName", self.domain_iam_role_name.as_deref())
            .finish()
    }
}

impl Shape for RestoreDBClusterFromS3Input {
    const SHAPE_NAME: &'static str = "RestoreDBClusterFromS3Message";
}

/// Input for the `RestoreDBClusterFromSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBClusterFromSnapshotInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    /// Required.
    #[serde(
        rename = "DBClusterIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_identifier: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_identifier: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none",
    )]
    pub enable_iam_database_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_configuration: Option<ScalingConfiguration>,
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl RestoreDBClusterFromSnapshotInput {
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

    /// Sets `DBClusterIdentifier`.
    #[must_use]
    pub fn with_db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(input.into());
        self
    }

    /// Sets `SnapshotIdentifier`.
    #[must_use]
    pub fn with_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.snapshot_identifier = Some(input.into());
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

    /// Sets `Port`.
    #[must_use]
    pub fn with_port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets `DBSubnetGroupName`.
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets `DatabaseName`.
    #[must_use]
    pub fn with_database_name(mut self, input: impl Into<String>) -> Self {
        self.database_name = Some(input.into());
        self
    }

    /// Sets `OptionGroupName`.
    #[must_use]
    pub fn with_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
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

    /// Appends to `Tags`, allocating the list when absent.
    #[must_use]
    pub fn with_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `KmsKeyId`.
    #[must_use]
    pub fn with_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets `EnableIAMDatabaseAuthentication`.
    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets `BacktrackWindow`.
    #[must_use]
    pub fn with_backtrack_window(mut self, input: i64) -> Self {
        self.backtrack_window = Some(input);
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

    /// Sets `EngineMode`.
    #[must_use]
    pub fn with_engine_mode(mut self, input: impl Into<String>) -> Self {
        self.engine_mode = Some(input.into());
        self
    }

    /// Sets `ScalingConfiguration`.
    #[must_use]
    pub fn with_scaling_configuration(mut self, input: ScalingConfiguration) -> Self {
        self.scaling_configuration = Some(input);
        self
    }

    /// Sets `DBClusterParameterGroupName`.
    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
        self
    }

    /// Sets `DeletionProtection`.
    #[must_use]
    pub fn with_deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets `CopyTagsToSnapshot`.
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
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

impl fmt::Display for RestoreDBClusterFromSnapshotInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("AvailabilityZones", self.availability_zones.as_deref())
            .field("DBClusterIdentifier", self.db_cluster_identifier.as_deref())
            .field("SnapshotIdentifier", self.snapshot_identifier.as_deref())
            .field("Engine", self.engine.as_deref())
            .field("EngineVersion", self.engine_version.as_deref())
            .field("Port", self.port.as_ref())
            .field("DBSubnetGroupName", self.db_subnet_group_name.as_deref())
            .field("DatabaseName", self.database_name.as_deref())
            .field("OptionGroupName", self.option_group_name.as_deref())
            .list(
                "VpcSecurityGroupIds",
                self.vpc_security_group_ids.as_deref(),
            )
            .list("Tags", self.tags.as_deref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field(
                "EnableIAMDatabaseAuthentication",
                self.enable_iam_database_authentication.as_ref(),
            )
            .field("BacktrackWindow", self.backtrack_window.as_ref())
            .list(
                "EnableCloudwatchLogsExports",
                self.enable_cloudwatch_logs_exports.as_deref(),
            )
            .field("EngineMode", self.engine_mode.as_deref())
            .field("ScalingConfiguration", self.scaling_configuration.as_ref())
            .field(
                "DBClusterParameterGroupName",
                self.db_cluster_parameter_group_name.as_deref(),
            )
            .field("DeletionProtection", self.deletion_protection.as_ref())
            .field("CopyTagsToSnapshot", self.copy_tags_to_snapshot.as_ref())
            .field("Domain", self.domain.as_deref())
            .field("DomainIAMRoleName", self.domain_iam_role_name.as_deref())
            .finish()
    }
}

impl Shape for RestoreDBClusterFromSnapshotInput {
    const SHAPE_NAME: &'static str = "RestoreDBClusterFromSnapshotMessage";
}

/// Input for the `RestoreDBClusterToPointInTime` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBClusterToPointInTimeInput {
    /// Required.
    #[serde(
        rename = "DBClusterIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_identifier: Option<String>,
    /// The type of restore to be performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_type: Option<String>,
    /// Required.
    #[serde(
        rename = "SourceDBClusterIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub source_db_cluster_identifier: Option<String>,
    /// The date and time to restore the DB cluster to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_to_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_latest_restorable_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none",
    )]
    pub enable_iam_database_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_cluster_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl RestoreDBClusterToPointInTimeInput {
    /// Sets `DBClusterIdentifier`.
    #[must_use]
    pub fn with_db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(input.into());
        self
    }

    /// Sets `RestoreType`.
    #[must_use]
    pub fn with_restore_type(mut self, input: impl Into<String>) -> Self {
        self.restore_type = Some(input.into());
        self
    }

    /// Sets `SourceDBClusterIdentifier`.
    #[must_use]
    pub fn with_source_db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.source_db_cluster_identifier = Some(input.into());
        self
    }

    /// Sets `RestoreToTime`.
    #[must_use]
    pub fn with_restore_to_time(mut self, input: chrono::DateTime<chrono::Utc>) -> Self {
        self.restore_to_time = Some(input);
        self
    }

    /// Sets `UseLatestRestorableTime`.
    #[must_use]
    pub fn with_use_latest_restorable_time(mut self, input: bool) -> Self {
        self.use_latest_restorable_time = Some(input);
        self
    }

    /// Sets `Port`.
    #[must_use]
    pub fn with_port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets `DBSubnetGroupName`.
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets `OptionGroupName`.
    #[must_use]
    pub fn with_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
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

    /// Appends to `Tags`, allocating the list when absent.
    #[must_use]
    pub fn with_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `KmsKeyId`.
    #[must_use]
    pub fn with_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets `EnableIAMDatabaseAuthentication`.
    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets `BacktrackWindow`.
    #[must_use]
    pub fn with_backtrack_window(mut self, input: i64) -> Self {
        self.backtrack_window = Some(input);
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

    /// Sets `DBClusterParameterGroupName`.
    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
        self
    }

    /// Sets `DeletionProtection`.
    #[must_use]
    pub fn with_deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets `CopyTagsToSnapshot`.
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
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

impl fmt::Display for RestoreDBClusterToPointInTimeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBClusterIdentifier", self.db_cluster_identifier.as_deref())
            .field("RestoreType", self.restore_type.as_deref())
            .field(
                "SourceDBClusterIdentifier",
                self.source_db_cluster_identifier.as_deref(),
            )
            .field("RestoreToTime", self.restore_to_time.as_ref())
            .field(
                "UseLatestRestorableTime",
                self.use_latest_restorable_time.as_ref(),
            )
            .field("Port", self.port.as_ref())
            .field("DBSubnetGroupName", self.db_subnet_group_name.as_deref())
            .field("OptionGroupName", self.option_group_name.as_deref())
            .list(
                "VpcSecurityGroupIds",
                self.vpc_security_group_ids.as_deref(),
            )
            .list("Tags", self.tags.as_deref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field(
                "EnableIAMDatabaseAuthentication",
                self.enable_iam_database_authentication.as_ref(),
            )
            .field("BacktrackWindow", self.backtrack_window.as_ref())
            .list(
                "EnableCloudwatchLogsExports",
                self.enable_cloudwatch_logs_exports.as_deref(),
            )
            .field(
                "DBClusterParameterGroupName",
                self.db_cluster_parameter_group_name.as_deref(),
            )
            .field("DeletionProtection", self.deletion_protection.as_ref())
            .field("CopyTagsToSnapshot", self.copy_tags_to_snapshot.as_ref())
            .field("Domain", self.domain.as_deref())
            .field("DomainIAMRoleName", self.domain_iam_role_name.as_deref())
            .finish()
    }
}

impl Shape for RestoreDBClusterToPointInTimeInput {
    const SHAPE_NAME: &'static str = "RestoreDBClusterToPointInTimeMessage";
}

/// Input for the `StartActivityStream` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartActivityStreamInput {
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// Required.
    ///
    /// See [`ActivityStreamMode`](crate::types::ActivityStreamMode) for known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// Whether to start the database activity stream immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_immediately: Option<bool>,
}

impl StartActivityStreamInput {
    /// Sets `ResourceArn`.
    #[must_use]
    pub fn with_resource_arn(mut self, input: impl Into<String>) -> Self {
        self.resource_arn = Some(input.into());
        self
    }

    /// Sets `Mode`.
    #[must_use]
    pub fn with_mode(mut self, input: impl Into<String>) -> Self {
        self.mode = Some(input.into());
        self
    }

    /// Sets `KmsKeyId`.
    #[must_use]
    pub fn with_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets `ApplyImmediately`.
    #[must_use]
    pub fn with_apply_immediately(mut self, input: bool) -> Self {
        self.apply_immediately = Some(input);
        self
    }
}

impl fmt::Display for StartActivityStreamInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ResourceArn", self.resource_arn.as_deref())
            .field("Mode", self.mode.as_deref())
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field("ApplyImmediately", self.apply_immediately.as_ref())
            .finish()
    }
}

impl Shape for StartActivityStreamInput {
    const SHAPE_NAME: &'static str = "StartActivityStreamRequest";
}
