//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

/// All RDS operations covered by this model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdsOperation {
    /// The AddRoleToDBCluster operation.
    AddRoleToDBCluster,
    /// The RemoveRoleFromDBCluster operation.
    RemoveRoleFromDBCluster,
    /// The DescribeDBClusters operation.
    DescribeDBClusters,
    /// The StartActivityStream operation.
    StartActivityStream,
    /// The CreateDBCluster operation.
    CreateDBCluster,
    /// The ModifyDBCluster operation.
    ModifyDBCluster,
    /// The RestoreDBClusterFromS3 operation.
    RestoreDBClusterFromS3,
    /// The RestoreDBClusterFromSnapshot operation.
    RestoreDBClusterFromSnapshot,
    /// The RestoreDBClusterToPointInTime operation.
    RestoreDBClusterToPointInTime,
    /// The CreateCustomAvailabilityZone operation.
    CreateCustomAvailabilityZone,
    /// The DeleteCustomAvailabilityZone operation.
    DeleteCustomAvailabilityZone,
    /// The DescribeCustomAvailabilityZones operation.
    DescribeCustomAvailabilityZones,
    /// The DescribeEvents operation.
    DescribeEvents,
    /// The AddRoleToDBInstance operation.
    AddRoleToDBInstance,
    /// The RemoveRoleFromDBInstance operation.
    RemoveRoleFromDBInstance,
    /// The CreateDBInstanceReadReplica operation.
    CreateDBInstanceReadReplica,
    /// The RestoreDBInstanceFromDBSnapshot operation.
    RestoreDBInstanceFromDBSnapshot,
    /// The RestoreDBInstanceFromS3 operation.
    RestoreDBInstanceFromS3,
    /// The DescribeOrderableDBInstanceOptions operation.
    DescribeOrderableDBInstanceOptions,
    /// The DescribeOptionGroups operation.
    DescribeOptionGroups,
    /// The ModifyOptionGroup operation.
    ModifyOptionGroup,
    /// The CreateDBClusterParameterGroup operation.
    CreateDBClusterParameterGroup,
    /// The DescribeDBClusterParameterGroups operation.
    DescribeDBClusterParameterGroups,
    /// The ModifyDBClusterParameterGroup operation.
    ModifyDBClusterParameterGroup,
    /// The DescribeEngineDefaultClusterParameters operation.
    DescribeEngineDefaultClusterParameters,
    /// The CreateDBProxy operation.
    CreateDBProxy,
    /// The DescribeDBProxies operation.
    DescribeDBProxies,
    /// The CopyDBSnapshot operation.
    CopyDBSnapshot,
    /// The DescribeDBSnapshots operation.
    DescribeDBSnapshots,
    /// The CopyDBClusterSnapshot operation.
    CopyDBClusterSnapshot,
    /// The AddTagsToResource operation.
    AddTagsToResource,
    /// The RemoveTagsFromResource operation.
    RemoveTagsFromResource,
    /// The ListTagsForResource operation.
    ListTagsForResource,
}

impl RdsOperation {
    /// Every operation, in generation order.
    pub const ALL: &'static [Self] = &[
        Self::AddRoleToDBCluster,
        Self::RemoveRoleFromDBCluster,
        Self::DescribeDBClusters,
        Self::StartActivityStream,
        Self::CreateDBCluster,
        Self::ModifyDBCluster,
        Self::RestoreDBClusterFromS3,
        Self::RestoreDBClusterFromSnapshot,
        Self::RestoreDBClusterToPointInTime,
        Self::CreateCustomAvailabilityZone,
        Self::DeleteCustomAvailabilityZone,
        Self::DescribeCustomAvailabilityZones,
        Self::DescribeEvents,
        Self::AddRoleToDBInstance,
        Self::RemoveRoleFromDBInstance,
        Self::CreateDBInstanceReadReplica,
        Self::RestoreDBInstanceFromDBSnapshot,
        Self::RestoreDBInstanceFromS3,
        Self::DescribeOrderableDBInstanceOptions,
        Self::DescribeOptionGroups,
        Self::ModifyOptionGroup,
        Self::CreateDBClusterParameterGroup,
        Self::DescribeDBClusterParameterGroups,
        Self::ModifyDBClusterParameterGroup,
        Self::DescribeEngineDefaultClusterParameters,
        Self::CreateDBProxy,
        Self::DescribeDBProxies,
        Self::CopyDBSnapshot,
        Self::DescribeDBSnapshots,
        Self::CopyDBClusterSnapshot,
        Self::AddTagsToResource,
        Self::RemoveTagsFromResource,
        Self::ListTagsForResource,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddRoleToDBCluster => "AddRoleToDBCluster",
            Self::RemoveRoleFromDBCluster => "RemoveRoleFromDBCluster",
            Self::DescribeDBClusters => "DescribeDBClusters",
            Self::StartActivityStream => "StartActivityStream",
            Self::CreateDBCluster => "CreateDBCluster",
            Self::ModifyDBCluster => "ModifyDBCluster",
            Self::RestoreDBClusterFromS3 => "RestoreDBClusterFromS3",
            Self::RestoreDBClusterFromSnapshot => "RestoreDBClusterFromSnapshot",
            Self::RestoreDBClusterToPointInTime => "RestoreDBClusterToPointInTime",
            Self::CreateCustomAvailabilityZone => "CreateCustomAvailabilityZone",
            Self::DeleteCustomAvailabilityZone => "DeleteCustomAvailabilityZone",
            Self::DescribeCustomAvailabilityZones => "DescribeCustomAvailabilityZones",
            Self::DescribeEvents => "DescribeEvents",
            Self::AddRoleToDBInstance => "AddRoleToDBInstance",
            Self::RemoveRoleFromDBInstance => "RemoveRoleFromDBInstance",
            Self::CreateDBInstanceReadReplica => "CreateDBInstanceReadReplica",
            Self::RestoreDBInstanceFromDBSnapshot => "RestoreDBInstanceFromDBSnapshot",
            Self::RestoreDBInstanceFromS3 => "RestoreDBInstanceFromS3",
            Self::DescribeOrderableDBInstanceOptions => "DescribeOrderableDBInstanceOptions",
            Self::DescribeOptionGroups => "DescribeOptionGroups",
            Self::ModifyOptionGroup => "ModifyOptionGroup",
            Self::CreateDBClusterParameterGroup => "CreateDBClusterParameterGroup",
            Self::DescribeDBClusterParameterGroups => "DescribeDBClusterParameterGroups",
            Self::ModifyDBClusterParameterGroup => "ModifyDBClusterParameterGroup",
            Self::DescribeEngineDefaultClusterParameters => {
                "DescribeEngineDefaultClusterParameters"
            }
            Self::CreateDBProxy => "CreateDBProxy",
            Self::DescribeDBProxies => "DescribeDBProxies",
            Self::CopyDBSnapshot => "CopyDBSnapshot",
            Self::DescribeDBSnapshots => "DescribeDBSnapshots",
            Self::CopyDBClusterSnapshot => "CopyDBClusterSnapshot",
            Self::AddTagsToResource => "AddTagsToResource",
            Self::RemoveTagsFromResource => "RemoveTagsFromResource",
            Self::ListTagsForResource => "ListTagsForResource",
        }
    }

    /// Parse an operation name string into an `RdsOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "AddRoleToDBCluster" => Some(Self::AddRoleToDBCluster),
            "RemoveRoleFromDBCluster" => Some(Self::RemoveRoleFromDBCluster),
            "DescribeDBClusters" => Some(Self::DescribeDBClusters),
            "StartActivityStream" => Some(Self::StartActivityStream),
            "CreateDBCluster" => Some(Self::CreateDBCluster),
            "ModifyDBCluster" => Some(Self::ModifyDBCluster),
            "RestoreDBClusterFromS3" => Some(Self::RestoreDBClusterFromS3),
            "RestoreDBClusterFromSnapshot" => Some(Self::RestoreDBClusterFromSnapshot),
            "RestoreDBClusterToPointInTime" => Some(Self::RestoreDBClusterToPointInTime),
            "CreateCustomAvailabilityZone" => Some(Self::CreateCustomAvailabilityZone),
            "DeleteCustomAvailabilityZone" => Some(Self::DeleteCustomAvailabilityZone),
            "DescribeCustomAvailabilityZones" => Some(Self::DescribeCustomAvailabilityZones),
            "DescribeEvents" => Some(Self::DescribeEvents),
            "AddRoleToDBInstance" => Some(Self::AddRoleToDBInstance),
            "RemoveRoleFromDBInstance" => Some(Self::RemoveRoleFromDBInstance),
            "CreateDBInstanceReadReplica" => Some(Self::CreateDBInstanceReadReplica),
            "RestoreDBInstanceFromDBSnapshot" => Some(Self::RestoreDBInstanceFromDBSnapshot),
            "RestoreDBInstanceFromS3" => Some(Self::RestoreDBInstanceFromS3),
            "DescribeOrderableDBInstanceOptions" => Some(Self::DescribeOrderableDBInstanceOptions),
            "DescribeOptionGroups" => Some(Self::DescribeOptionGroups),
            "ModifyOptionGroup" => Some(Self::ModifyOptionGroup),
            "CreateDBClusterParameterGroup" => Some(Self::CreateDBClusterParameterGroup),
            "DescribeDBClusterParameterGroups" => Some(Self::DescribeDBClusterParameterGroups),
            "ModifyDBClusterParameterGroup" => Some(Self::ModifyDBClusterParameterGroup),
            "DescribeEngineDefaultClusterParameters" => {
                Some(Self::DescribeEngineDefaultClusterParameters)
            }
            "CreateDBProxy" => Some(Self::CreateDBProxy),
            "DescribeDBProxies" => Some(Self::DescribeDBProxies),
            "CopyDBSnapshot" => Some(Self::CopyDBSnapshot),
            "DescribeDBSnapshots" => Some(Self::DescribeDBSnapshots),
            "CopyDBClusterSnapshot" => Some(Self::CopyDBClusterSnapshot),
            "AddTagsToResource" => Some(Self::AddTagsToResource),
            "RemoveTagsFromResource" => Some(Self::RemoveTagsFromResource),
            "ListTagsForResource" => Some(Self::ListTagsForResource),
            _ => None,
        }
    }
}

impl fmt::Display for RdsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
