//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::DBCluster;

/// Output of the `CreateDBCluster` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDBClusterOutput {
    #[serde(rename = "DBCluster", skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DBCluster>,
}

impl CreateDBClusterOutput {
    /// Sets `DBCluster`.
    #[must_use]
    pub fn with_db_cluster(mut self, input: DBCluster) -> Self {
        self.db_cluster = Some(input);
        self
    }
}

impl fmt::Display for CreateDBClusterOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBCluster", self.db_cluster.as_ref())
            .finish()
    }
}

impl Shape for CreateDBClusterOutput {
    const SHAPE_NAME: &'static str = "CreateDBClusterResult";
}

/// Output of the `DescribeDBClusters` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDBClustersOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(rename = "DBClusters", skip_serializing_if = "Option::is_none")]
    pub db_clusters: Option<Vec<DBCluster>>,
}

impl DescribeDBClustersOutput {
    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }

    /// Appends to `DBClusters`, allocating the list when absent.
    #[must_use]
    pub fn with_db_clusters(mut self, inputs: impl IntoIterator<Item = DBCluster>) -> Self {
        self.db_clusters.get_or_insert_with(Vec::new).extend(inputs);
        self
    }
}

impl fmt::Display for DescribeDBClustersOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Marker", self.marker.as_deref())
            .list("DBClusters", self.db_clusters.as_deref())
            .finish()
    }
}

impl Shape for DescribeDBClustersOutput {
    const SHAPE_NAME: &'static str = "DBClusterMessage";
}

/// Output of the `ModifyDBCluster` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDBClusterOutput {
    #[serde(rename = "DBCluster", skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DBCluster>,
}

impl ModifyDBClusterOutput {
    /// Sets `DBCluster`.
    #[must_use]
    pub fn with_db_cluster(mut self, input: DBCluster) -> Self {
        self.db_cluster = Some(input);
        self
    }
}

impl fmt::Display for ModifyDBClusterOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBCluster", self.db_cluster.as_ref())
            .finish()
    }
}

impl Shape for ModifyDBClusterOutput {
    const SHAPE_NAME: &'static str = "ModifyDBClusterResult";
}

/// Output of the `RestoreDBClusterFromS3` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBClusterFromS3Output {
    #[serde(rename = "DBCluster", skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DBCluster>,
}

impl RestoreDBClusterFromS3Output {
    /// Sets `DBCluster`.
    #[must_use]
    pub fn with_db_cluster(mut self, input: DBCluster) -> Self {
        self.db_cluster = Some(input);
        self
    }
}

impl fmt::Display for RestoreDBClusterFromS3Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBCluster", self.db_cluster.as_ref())
            .finish()
    }
}

impl Shape for RestoreDBClusterFromS3Output {
    const SHAPE_NAME: &'static str = "RestoreDBClusterFromS3Result";
}

/// Output of the `RestoreDBClusterFromSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBClusterFromSnapshotOutput {
    #[serde(rename = "DBCluster", skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DBCluster>,
}

impl RestoreDBClusterFromSnapshotOutput {
    /// Sets `DBCluster`.
    #[must_use]
    pub fn with_db_cluster(mut self, input: DBCluster) -> Self {
        self.db_cluster = Some(input);
        self
    }
}

impl fmt::Display for RestoreDBClusterFromSnapshotOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBCluster", self.db_cluster.as_ref())
            .finish()
    }
}

impl Shape for RestoreDBClusterFromSnapshotOutput {
    const SHAPE_NAME: &'static str = "RestoreDBClusterFromSnapshotResult";
}

/// Output of the `RestoreDBClusterToPointInTime` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBClusterToPointInTimeOutput {
    #[serde(rename = "DBCluster", skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DBCluster>,
}

impl RestoreDBClusterToPointInTimeOutput {
    /// Sets `DBCluster`.
    #[must_use]
    pub fn with_db_cluster(mut self, input: DBCluster) -> Self {
        self.db_cluster = Some(input);
        self
    }
}

impl fmt::Display for RestoreDBClusterToPointInTimeOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBCluster", self.db_cluster.as_ref())
            .finish()
    }
}

impl Shape for RestoreDBClusterToPointInTimeOutput {
    const SHAPE_NAME: &'static str = "RestoreDBClusterToPointInTimeResult";
}

/// Output of the `StartActivityStream` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartActivityStreamOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinesis_stream_name: Option<String>,
    /// See [`ActivityStreamStatus`](crate::types::ActivityStreamStatus) for known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// See [`ActivityStreamMode`](crate::types::ActivityStreamMode) for known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Whether to start the database activity stream immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_immediately: Option<bool>,
}

impl StartActivityStreamOutput {
    /// Sets `KmsKeyId`.
    #[must_use]
    pub fn with_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets `KinesisStreamName`.
    #[must_use]
    pub fn with_kinesis_stream_name(mut self, input: impl Into<String>) -> Self {
        self.kinesis_stream_name = Some(input.into());
        self
    }

    /// Sets `Status`.
    #[must_use]
    pub fn with_status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets `Mode`.
    #[must_use]
    pub fn with_mode(mut self, input: impl Into<String>) -> Self {
        self.mode = Some(input.into());
        self
    }

    /// Sets `ApplyImmediately`.
    #[must_use]
    pub fn with_apply_immediately(mut self, input: bool) -> Self {
        self.apply_immediately = Some(input);
        self
    }
}

impl fmt::Display for StartActivityStreamOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("KmsKeyId", self.kms_key_id.as_deref())
            .field("KinesisStreamName", self.kinesis_stream_name.as_deref())
            .field("Status", self.status.as_deref())
            .field("Mode", self.mode.as_deref())
            .field("ApplyImmediately", self.apply_immediately.as_ref())
            .finish()
    }
}

impl Shape for StartActivityStreamOutput {
    const SHAPE_NAME: &'static str = "StartActivityStreamResponse";
}
