//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::{DBClusterSnapshot, DBSnapshot};

/// Output of the `CopyDBClusterSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyDBClusterSnapshotOutput {
    #[serde(rename = "DBClusterSnapshot", skip_serializing_if = "Option::is_none")]
    pub db_cluster_snapshot: Option<DBClusterSnapshot>,
}

impl CopyDBClusterSnapshotOutput {
    /// Sets `DBClusterSnapshot`.
    #[must_use]
    pub fn with_db_cluster_snapshot(mut self, input: DBClusterSnapshot) -> Self {
        self.db_cluster_snapshot = Some(input);
        self
    }
}

impl fmt::Display for CopyDBClusterSnapshotOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBClusterSnapshot", self.db_cluster_snapshot.as_ref())
            .finish()
    }
}

impl Shape for CopyDBClusterSnapshotOutput {
    const SHAPE_NAME: &'static str = "CopyDBClusterSnapshotResult";
}

/// Output of the `CopyDBSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyDBSnapshotOutput {
    #[serde(rename = "DBSnapshot", skip_serializing_if = "Option::is_none")]
    pub db_snapshot: Option<DBSnapshot>,
}

impl CopyDBSnapshotOutput {
    /// Sets `DBSnapshot`.
    #[must_use]
    pub fn with_db_snapshot(mut self, input: DBSnapshot) -> Self {
        self.db_snapshot = Some(input);
        self
    }
}

impl fmt::Display for CopyDBSnapshotOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBSnapshot", self.db_snapshot.as_ref())
            .finish()
    }
}

impl Shape for CopyDBSnapshotOutput {
    const SHAPE_NAME: &'static str = "CopyDBSnapshotResult";
}

/// Output of the `DescribeDBSnapshots` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDBSnapshotsOutput {
    /// An optional pagination token provided by a previous request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(rename = "DBSnapshots", skip_serializing_if = "Option::is_none")]
    pub db_snapshots: Option<Vec<DBSnapshot>>,
}

impl DescribeDBSnapshotsOutput {
    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }

    /// Appends to `DBSnapshots`, allocating the list when absent.
    #[must_use]
    pub fn with_db_snapshots(mut self, inputs: impl IntoIterator<Item = DBSnapshot>) -> Self {
        self.db_snapshots
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }
}

impl fmt::Display for DescribeDBSnapshotsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Marker", self.marker.as_deref())
            .list("DBSnapshots", self.db_snapshots.as_deref())
            .finish()
    }
}

impl Shape for DescribeDBSnapshotsOutput {
    const SHAPE_NAME: &'static str = "DBSnapshotMessage";
}
