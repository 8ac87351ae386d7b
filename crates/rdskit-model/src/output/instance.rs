//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::{DBInstance, OrderableDBInstanceOption};

/// Output of the `CreateDBInstanceReadReplica` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDBInstanceReadReplicaOutput {
    #[serde(rename = "DBInstance", skip_serializing_if = "Option::is_none")]
    pub db_instance: Option<DBInstance>,
}

impl CreateDBInstanceReadReplicaOutput {
    /// Sets `DBInstance`.
    #[must_use]
    pub fn with_db_instance(mut self, input: DBInstance) -> Self {
        self.db_instance = Some(input);
        self
    }
}

impl fmt::Display for CreateDBInstanceReadReplicaOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBInstance", self.db_instance.as_ref())
            .finish()
    }
}

impl Shape for CreateDBInstanceReadReplicaOutput {
    const SHAPE_NAME: &'static str = "CreateDBInstanceReadReplicaResult";
}

/// Output of the `DescribeOrderableDBInstanceOptions` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOrderableDBInstanceOptionsOutput {
    #[serde(
        rename = "OrderableDBInstanceOptions",
        skip_serializing_if = "Option::is_none",
    )]
    pub orderable_db_instance_options: Option<Vec<OrderableDBInstanceOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeOrderableDBInstanceOptionsOutput {
    /// Appends to `OrderableDBInstanceOptions`, allocating the list when absent.
    #[must_use]
    pub fn with_orderable_db_instance_options(
        mut self,
        inputs: impl IntoIterator<Item = OrderableDBInstanceOption>,
    ) -> Self {
        self.orderable_db_instance_options
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }
}

impl fmt::Display for DescribeOrderableDBInstanceOptionsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list(
                "OrderableDBInstanceOptions",
                self.orderable_db_instance_options.as_deref(),
            )
            .field("Marker", self.marker.as_deref())
            .finish()
    }
}

impl Shape for DescribeOrderableDBInstanceOptionsOutput {
    const SHAPE_NAME: &'static str = "OrderableDBInstanceOptionsMessage";
}

/// Output of the `RestoreDBInstanceFromDBSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBInstanceFromDBSnapshotOutput {
    #[serde(rename = "DBInstance", skip_serializing_if = "Option::is_none")]
    pub db_instance: Option<DBInstance>,
}

impl RestoreDBInstanceFromDBSnapshotOutput {
    /// Sets `DBInstance`.
    #[must_use]
    pub fn with_db_instance(mut self, input: DBInstance) -> Self {
        self.db_instance = Some(input);
        self
    }
}

impl fmt::Display for RestoreDBInstanceFromDBSnapshotOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBInstance", self.db_instance.as_ref())
            .finish()
    }
}

impl Shape for RestoreDBInstanceFromDBSnapshotOutput {
    const SHAPE_NAME: &'static str = "RestoreDBInstanceFromDBSnapshotResult";
}

/// Output of the `RestoreDBInstanceFromS3` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBInstanceFromS3Output {
    #[serde(rename = "DBInstance", skip_serializing_if = "Option::is_none")]
    pub db_instance: Option<DBInstance>,
}

impl RestoreDBInstanceFromS3Output {
    /// Sets `DBInstance`.
    #[must_use]
    pub fn with_db_instance(mut self, input: DBInstance) -> Self {
        self.db_instance = Some(input);
        self
    }
}

impl fmt::Display for RestoreDBInstanceFromS3Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBInstance", self.db_instance.as_ref())
            .finish()
    }
}

impl Shape for RestoreDBInstanceFromS3Output {
    const SHAPE_NAME: &'static str = "RestoreDBInstanceFromS3Result";
}
