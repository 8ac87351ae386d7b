//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::{Filter, Tag};

/// Input for the `CopyDBClusterSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyDBClusterSnapshotInput {
    /// Required.
    #[serde(
        rename = "SourceDBClusterSnapshotIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub source_db_cluster_snapshot_identifier: Option<String>,
    /// Required.
    #[serde(
        rename = "TargetDBClusterSnapshotIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub target_db_cluster_snapshot_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url: Option<String>,
    /// Whether to copy all tags from the source DB cluster snapshot to the target DB cluster snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CopyDBClusterSnapshotInput {
    /// Sets `SourceDBClusterSnapshotIdentifier`.
    #[must_use]
    pub fn with_source_db_cluster_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.source_db_cluster_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets `TargetDBClusterSnapshotIdentifier`.
    #[must_use]
    pub fn with_target_db_cluster_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.target_db_cluster_snapshot_identifier = Some(input.into());
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

    /// Sets `CopyTags`.
    #[must_use]
    pub fn with_copy_tags(mut self, input: bool) -> Self {
        self.copy_tags = Some(input);
        self
    }

    /// Appends to `Tags`, allocating the list when absent.
    #[must_use]
    pub fn with_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(inputs);
        self
    }
}

impl fmt::Display for CopyDBClusterSnapshotInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "SourceDBClusterSnapshotIdentifier",
                self.source_db_cluster_snapshot_identifier.as_deref(),
            )
            .field(
                "TargetDBClusterSnapshotIdentifier",
                self.target_db_cluster_snapshot_identifier.as_deref(),
            )
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field("PreSignedUrl", self.pre_signed_url.as_deref())
            .field("CopyTags", self.copy_tags.as_ref())
            .list("Tags", self.tags.as_deref())
            .finish()
    }
}

impl Shape for CopyDBClusterSnapshotInput {
    const SHAPE_NAME: &'static str = "CopyDBClusterSnapshotMessage";
}

/// Input for the `CopyDBSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyDBSnapshotInput {
    /// Required.
    #[serde(
        rename = "SourceDBSnapshotIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub source_db_snapshot_identifier: Option<String>,
    /// Required.
    #[serde(
        rename = "TargetDBSnapshotIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub target_db_snapshot_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags: Option<bool>,
    /// The URL that contains a Signature Version 4 signed request for the cross-region copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
}

impl CopyDBSnapshotInput {
    /// Sets `SourceDBSnapshotIdentifier`.
    #[must_use]
    pub fn with_source_db_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.source_db_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets `TargetDBSnapshotIdentifier`.
    #[must_use]
    pub fn with_target_db_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.target_db_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets `KmsKeyId`.
    #[must_use]
    pub fn with_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Appends to `Tags`, allocating the list when absent.
    #[must_use]
    pub fn with_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `CopyTags`.
    #[must_use]
    pub fn with_copy_tags(mut self, input: bool) -> Self {
        self.copy_tags = Some(input);
        self
    }

    /// Sets `PreSignedUrl`.
    #[must_use]
    pub fn with_pre_signed_url(mut self, input: impl Into<String>) -> Self {
        self.pre_signed_url = Some(input.into());
        self
    }

    /// Sets `OptionGroupName`.
    #[must_use]
    pub fn with_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }
}

impl fmt::Display for CopyDBSnapshotInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "SourceDBSnapshotIdentifier",
                self.source_db_snapshot_identifier.as_deref(),
            )
            .field(
                "TargetDBSnapshotIdentifier",
                self.target_db_snapshot_identifier.as_deref(),
            )
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .list("Tags", self.tags.as_deref())
            .field("CopyTags", self.copy_tags.as_ref())
            .field("PreSignedUrl", self.pre_signed_url.as_deref())
            .field("OptionGroupName", self.option_group_name.as_deref())
            .finish()
    }
}

impl Shape for CopyDBSnapshotInput {
    const SHAPE_NAME: &'static str = "CopyDBSnapshotMessage";
}

/// Input for the `DescribeDBSnapshots` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDBSnapshotsInput {
    #[serde(
        rename = "DBInstanceIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_instance_identifier: Option<String>,
    #[serde(
        rename = "DBSnapshotIdentifier",
        skip_serializing_if = "Option::is_none",
    )]
    pub db_snapshot_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// The maximum number of records to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    /// An optional pagination token provided by a previous request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_shared: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbi_resource_id: Option<String>,
}

impl DescribeDBSnapshotsInput {
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

    /// Sets `SnapshotType`.
    #[must_use]
    pub fn with_snapshot_type(mut self, input: impl Into<String>) -> Self {
        self.snapshot_type = Some(input.into());
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

    /// Sets `IncludePublic`.
    #[must_use]
    pub fn with_include_public(mut self, input: bool) -> Self {
        self.include_public = Some(input);
        self
    }

    /// Sets `DbiResourceId`.
    #[must_use]
    pub fn with_dbi_resource_id(mut self, input: impl Into<String>) -> Self {
        self.dbi_resource_id = Some(input.into());
        self
    }
}

impl fmt::Display for DescribeDBSnapshotsInput {
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
            .field("SnapshotType", self.snapshot_type.as_deref())
            .list("Filters", self.filters.as_deref())
            .field("MaxRecords", self.max_records.as_ref())
            .field("Marker", self.marker.as_deref())
            .field("IncludeShared", self.include_shared.as_ref())
            .field("IncludePublic", self.include_public.as_ref())
            .field("DbiResourceId", self.dbi_resource_id.as_deref())
            .finish()
    }
}

impl Shape for DescribeDBSnapshotsInput {
    const SHAPE_NAME: &'static str = "DescribeDBSnapshotsMessage";
}
