//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

/// Well-known RDS fault codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum RdsErrorCode {
    /// Default error code.
    #[default]
    /// InternalFailure fault.
    InternalFailure,
    /// InvalidParameterValue fault.
    InvalidParameterValue,
    /// InvalidParameterCombination fault.
    InvalidParameterCombination,
    /// DBClusterNotFoundFault fault.
    DBClusterNotFoundFault,
    /// DBClusterRoleAlreadyExists fault.
    DBClusterRoleAlreadyExists,
    /// DBClusterRoleNotFound fault.
    DBClusterRoleNotFound,
    /// DBClusterRoleQuotaExceeded fault.
    DBClusterRoleQuotaExceeded,
    /// InvalidDBClusterStateFault fault.
    InvalidDBClusterStateFault,
    /// DBInstanceNotFound fault.
    DBInstanceNotFound,
    /// DBInstanceAlreadyExists fault.
    DBInstanceAlreadyExists,
    /// DBInstanceRoleAlreadyExists fault.
    DBInstanceRoleAlreadyExists,
    /// DBInstanceRoleNotFound fault.
    DBInstanceRoleNotFound,
    /// DBInstanceRoleQuotaExceeded fault.
    DBInstanceRoleQuotaExceeded,
    /// InvalidDBInstanceStateFault fault.
    InvalidDBInstanceStateFault,
    /// DBSnapshotNotFound fault.
    DBSnapshotNotFound,
    /// DBSnapshotAlreadyExists fault.
    DBSnapshotAlreadyExists,
    /// InvalidDBSnapshotState fault.
    InvalidDBSnapshotState,
    /// SnapshotQuotaExceeded fault.
    SnapshotQuotaExceeded,
    /// KMSKeyNotAccessibleFault fault.
    KMSKeyNotAccessibleFault,
    /// DBParameterGroupNotFound fault.
    DBParameterGroupNotFound,
    /// DBParameterGroupAlreadyExists fault.
    DBParameterGroupAlreadyExists,
    /// DBParameterGroupQuotaExceeded fault.
    DBParameterGroupQuotaExceeded,
    /// InvalidDBParameterGroupState fault.
    InvalidDBParameterGroupState,
    /// OptionGroupNotFoundFault fault.
    OptionGroupNotFoundFault,
    /// InvalidOptionGroupStateFault fault.
    InvalidOptionGroupStateFault,
    /// CustomAvailabilityZoneAlreadyExists fault.
    CustomAvailabilityZoneAlreadyExists,
    /// CustomAvailabilityZoneNotFound fault.
    CustomAvailabilityZoneNotFound,
    /// CustomAvailabilityZoneQuotaExceeded fault.
    CustomAvailabilityZoneQuotaExceeded,
    /// DBProxyAlreadyExistsFault fault.
    DBProxyAlreadyExistsFault,
    /// DBProxyNotFoundFault fault.
    DBProxyNotFoundFault,
    /// DBProxyQuotaExceededFault fault.
    DBProxyQuotaExceededFault,
    /// DBSubnetGroupNotFoundFault fault.
    DBSubnetGroupNotFoundFault,
    /// InvalidSubnet fault.
    InvalidSubnet,
    /// ResourceNotFoundFault fault.
    ResourceNotFoundFault,
    /// DBClusterAlreadyExistsFault fault.
    DBClusterAlreadyExistsFault,
    /// DBClusterQuotaExceededFault fault.
    DBClusterQuotaExceededFault,
    /// DBClusterParameterGroupNotFound fault.
    DBClusterParameterGroupNotFound,
    /// DBClusterSnapshotAlreadyExistsFault fault.
    DBClusterSnapshotAlreadyExistsFault,
    /// DBClusterSnapshotNotFoundFault fault.
    DBClusterSnapshotNotFoundFault,
    /// InvalidDBClusterSnapshotStateFault fault.
    InvalidDBClusterSnapshotStateFault,
    /// InsufficientDBClusterCapacityFault fault.
    InsufficientDBClusterCapacityFault,
    /// InsufficientStorageClusterCapacity fault.
    InsufficientStorageClusterCapacity,
    /// StorageQuotaExceeded fault.
    StorageQuotaExceeded,
    /// InvalidVPCNetworkStateFault fault.
    InvalidVPCNetworkStateFault,
    /// InvalidDBSubnetGroupStateFault fault.
    InvalidDBSubnetGroupStateFault,
    /// DBSubnetGroupDoesNotCoverEnoughAZs fault.
    DBSubnetGroupDoesNotCoverEnoughAZs,
    /// GlobalClusterNotFoundFault fault.
    GlobalClusterNotFoundFault,
    /// InvalidGlobalClusterStateFault fault.
    InvalidGlobalClusterStateFault,
    /// DomainNotFoundFault fault.
    DomainNotFoundFault,
    /// InvalidDBSecurityGroupState fault.
    InvalidDBSecurityGroupState,
    /// InvalidS3BucketFault fault.
    InvalidS3BucketFault,
    /// InvalidRestoreFault fault.
    InvalidRestoreFault,
    /// InstanceQuotaExceeded fault.
    InstanceQuotaExceeded,
    /// InsufficientDBInstanceCapacity fault.
    InsufficientDBInstanceCapacity,
    /// ProvisionedIopsNotAvailableInAZFault fault.
    ProvisionedIopsNotAvailableInAZFault,
    /// StorageTypeNotSupported fault.
    StorageTypeNotSupported,
    /// AuthorizationNotFound fault.
    AuthorizationNotFound,
    /// DBSecurityGroupNotFound fault.
    DBSecurityGroupNotFound,
    /// BackupPolicyNotFoundFault fault.
    BackupPolicyNotFoundFault,
    /// A custom error code not in the standard set.
    Custom(&'static str),
}

impl RdsErrorCode {
    /// Returns the error code as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InternalFailure => "InternalFailure",
            Self::InvalidParameterValue => "InvalidParameterValue",
            Self::InvalidParameterCombination => "InvalidParameterCombination",
            Self::DBClusterNotFoundFault => "DBClusterNotFoundFault",
            Self::DBClusterRoleAlreadyExists => "DBClusterRoleAlreadyExists",
            Self::DBClusterRoleNotFound => "DBClusterRoleNotFound",
            Self::DBClusterRoleQuotaExceeded => "DBClusterRoleQuotaExceeded",
            Self::InvalidDBClusterStateFault => "InvalidDBClusterStateFault",
            Self::DBInstanceNotFound => "DBInstanceNotFound",
            Self::DBInstanceAlreadyExists => "DBInstanceAlreadyExists",
            Self::DBInstanceRoleAlreadyExists => "DBInstanceRoleAlreadyExists",
            Self::DBInstanceRoleNotFound => "DBInstanceRoleNotFound",
            Self::DBInstanceRoleQuotaExceeded => "DBInstanceRoleQuotaExceeded",
            Self::InvalidDBInstanceStateFault => "InvalidDBInstanceStateFault",
            Self::DBSnapshotNotFound => "DBSnapshotNotFound",
            Self::DBSnapshotAlreadyExists => "DBSnapshotAlreadyExists",
            Self::InvalidDBSnapshotState => "InvalidDBSnapshotState",
            Self::SnapshotQuotaExceeded => "SnapshotQuotaExceeded",
            Self::KMSKeyNotAccessibleFault => "KMSKeyNotAccessibleFault",
            Self::DBParameterGroupNotFound => "DBParameterGroupNotFound",
            Self::DBParameterGroupAlreadyExists => "DBParameterGroupAlreadyExists",
            Self::DBParameterGroupQuotaExceeded => "DBParameterGroupQuotaExceeded",
            Self::InvalidDBParameterGroupState => "InvalidDBParameterGroupState",
            Self::OptionGroupNotFoundFault => "OptionGroupNotFoundFault",
            Self::InvalidOptionGroupStateFault => "InvalidOptionGroupStateFault",
            Self::CustomAvailabilityZoneAlreadyExists => "CustomAvailabilityZoneAlreadyExists",
            Self::CustomAvailabilityZoneNotFound => "CustomAvailabilityZoneNotFound",
            Self::CustomAvailabilityZoneQuotaExceeded => "CustomAvailabilityZoneQuotaExceeded",
            Self::DBProxyAlreadyExistsFault => "DBProxyAlreadyExistsFault",
            Self::DBProxyNotFoundFault => "DBProxyNotFoundFault",
            Self::DBProxyQuotaExceededFault => "DBProxyQuotaExceededFault",
            Self::DBSubnetGroupNotFoundFault => "DBSubnetGroupNotFoundFault",
            Self::InvalidSubnet => "InvalidSubnet",
            Self::ResourceNotFoundFault => "ResourceNotFoundFault",
            Self::DBClusterAlreadyExistsFault => "DBClusterAlreadyExistsFault",
            Self::DBClusterQuotaExceededFault => "DBClusterQuotaExceededFault",
            Self::DBClusterParameterGroupNotFound => "DBClusterParameterGroupNotFound",
            Self::DBClusterSnapshotAlreadyExistsFault => "DBClusterSnapshotAlreadyExistsFault",
            Self::DBClusterSnapshotNotFoundFault => "DBClusterSnapshotNotFoundFault",
            Self::InvalidDBClusterSnapshotStateFault => "InvalidDBClusterSnapshotStateFault",
            Self::InsufficientDBClusterCapacityFault => "InsufficientDBClusterCapacityFault",
            Self::InsufficientStorageClusterCapacity => "InsufficientStorageClusterCapacity",
            Self::StorageQuotaExceeded => "StorageQuotaExceeded",
            Self::InvalidVPCNetworkStateFault => "InvalidVPCNetworkStateFault",
            Self::InvalidDBSubnetGroupStateFault => "InvalidDBSubnetGroupStateFault",
            Self::DBSubnetGroupDoesNotCoverEnoughAZs => "DBSubnetGroupDoesNotCoverEnoughAZs",
            Self::GlobalClusterNotFoundFault => "GlobalClusterNotFoundFault",
            Self::InvalidGlobalClusterStateFault => "InvalidGlobalClusterStateFault",
            Self::DomainNotFoundFault => "DomainNotFoundFault",
            Self::InvalidDBSecurityGroupState => "InvalidDBSecurityGroupState",
            Self::InvalidS3BucketFault => "InvalidS3BucketFault",
            Self::InvalidRestoreFault => "InvalidRestoreFault",
            Self::InstanceQuotaExceeded => "InstanceQuotaExceeded",
            Self::InsufficientDBInstanceCapacity => "InsufficientDBInstanceCapacity",
            Self::ProvisionedIopsNotAvailableInAZFault => "ProvisionedIopsNotAvailableInAZFault",
            Self::StorageTypeNotSupported => "StorageTypeNotSupported",
            Self::AuthorizationNotFound => "AuthorizationNotFound",
            Self::DBSecurityGroupNotFound => "DBSecurityGroupNotFound",
            Self::BackupPolicyNotFoundFault => "BackupPolicyNotFoundFault",
            Self::Custom(s) => s,
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::InvalidParameterValue
            | Self::InvalidParameterCombination
            | Self::DBClusterRoleAlreadyExists
            | Self::DBClusterRoleQuotaExceeded
            | Self::InvalidDBClusterStateFault
            | Self::DBInstanceAlreadyExists
            | Self::DBInstanceRoleAlreadyExists
            | Self::DBInstanceRoleQuotaExceeded
            | Self::InvalidDBInstanceStateFault
            | Self::DBSnapshotAlreadyExists
            | Self::InvalidDBSnapshotState
            | Self::SnapshotQuotaExceeded
            | Self::KMSKeyNotAccessibleFault
            | Self::DBParameterGroupAlreadyExists
            | Self::DBParameterGroupQuotaExceeded
            | Self::InvalidDBParameterGroupState
            | Self::InvalidOptionGroupStateFault
            | Self::CustomAvailabilityZoneAlreadyExists
            | Self::CustomAvailabilityZoneQuotaExceeded
            | Self::DBProxyAlreadyExistsFault
            | Self::DBProxyQuotaExceededFault
            | Self::InvalidSubnet
            | Self::DBClusterAlreadyExistsFault
            | Self::DBClusterSnapshotAlreadyExistsFault
            | Self::InvalidDBClusterSnapshotStateFault
            | Self::InsufficientStorageClusterCapacity
            | Self::StorageQuotaExceeded
            | Self::InvalidVPCNetworkStateFault
            | Self::InvalidDBSubnetGroupStateFault
            | Self::DBSubnetGroupDoesNotCoverEnoughAZs
            | Self::InvalidGlobalClusterStateFault
            | Self::InvalidDBSecurityGroupState
            | Self::InvalidS3BucketFault
            | Self::InvalidRestoreFault
            | Self::InstanceQuotaExceeded
            | Self::InsufficientDBInstanceCapacity
            | Self::ProvisionedIopsNotAvailableInAZFault
            | Self::StorageTypeNotSupported => http::StatusCode::BAD_REQUEST,
            Self::DBClusterQuotaExceededFault | Self::InsufficientDBClusterCapacityFault => {
                http::StatusCode::FORBIDDEN
            }
            Self::DBClusterNotFoundFault
            | Self::DBClusterRoleNotFound
            | Self::DBInstanceNotFound
            | Self::DBInstanceRoleNotFound
            | Self::DBSnapshotNotFound
            | Self::DBParameterGroupNotFound
            | Self::OptionGroupNotFoundFault
            | Self::CustomAvailabilityZoneNotFound
            | Self::DBProxyNotFoundFault
            | Self::DBSubnetGroupNotFoundFault
            | Self::ResourceNotFoundFault
            | Self::DBClusterParameterGroupNotFound
            | Self::DBClusterSnapshotNotFoundFault
            | Self::GlobalClusterNotFoundFault
            | Self::DomainNotFoundFault
            | Self::AuthorizationNotFound
            | Self::DBSecurityGroupNotFound
            | Self::BackupPolicyNotFoundFault => http::StatusCode::NOT_FOUND,
            Self::InternalFailure => http::StatusCode::INTERNAL_SERVER_ERROR,
            Self::Custom(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the default message for this error.
    #[must_use]
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InternalFailure => {
                "The request processing has failed because of an unknown error"
            }
            Self::InvalidParameterValue => "One or more parameters have an invalid value",
            Self::InvalidParameterCombination => {
                "Parameters that must not be used together were used together"
            }
            Self::DBClusterNotFoundFault => {
                "DBClusterIdentifier doesn't refer to an existing DB cluster"
            }
            Self::DBClusterRoleAlreadyExists => {
                "The specified IAM role ARN is already associated with the specified DB cluster"
            }
            Self::DBClusterRoleNotFound => {
                "The specified IAM role ARN isn't associated with the specified DB cluster"
            }
            Self::DBClusterRoleQuotaExceeded => {
                "You have exceeded the maximum number of IAM roles that can be associated with the specified DB cluster"
            }
            Self::InvalidDBClusterStateFault => {
                "The requested operation can't be performed while the cluster is in this state"
            }
            Self::DBInstanceNotFound => {
                "DBInstanceIdentifier doesn't refer to an existing DB instance"
            }
            Self::DBInstanceAlreadyExists => {
                "The user already has a DB instance with the given identifier"
            }
            Self::DBInstanceRoleAlreadyExists => {
                "The specified RoleArn or FeatureName value is already associated with the DB instance"
            }
            Self::DBInstanceRoleNotFound => {
                "The specified RoleArn value doesn't match the specified feature for the DB instance"
            }
            Self::DBInstanceRoleQuotaExceeded => {
                "You can't associate any more IAM roles with the DB instance"
            }
            Self::InvalidDBInstanceStateFault => "The DB instance isn't in a valid state",
            Self::DBSnapshotNotFound => {
                "DBSnapshotIdentifier doesn't refer to an existing DB snapshot"
            }
            Self::DBSnapshotAlreadyExists => {
                "DBSnapshotIdentifier is already used by an existing snapshot"
            }
            Self::InvalidDBSnapshotState => {
                "The state of the DB snapshot doesn't allow the operation"
            }
            Self::SnapshotQuotaExceeded => {
                "The request would result in the user exceeding the allowed number of DB snapshots"
            }
            Self::KMSKeyNotAccessibleFault => "An error occurred accessing an AWS KMS key",
            Self::DBParameterGroupNotFound => {
                "DBParameterGroupName doesn't refer to an existing DB parameter group"
            }
            Self::DBParameterGroupAlreadyExists => "A DB parameter group with the same name exists",
            Self::DBParameterGroupQuotaExceeded => {
                "The request would result in the user exceeding the allowed number of DB parameter groups"
            }
            Self::InvalidDBParameterGroupState => {
                "The DB parameter group is in use or is in an invalid state"
            }
            Self::OptionGroupNotFoundFault => "The specified option group could not be found",
            Self::InvalidOptionGroupStateFault => "The option group isn't in the available state",
            Self::CustomAvailabilityZoneAlreadyExists => {
                "CustomAvailabilityZoneName is already used by an existing custom Availability Zone"
            }
            Self::CustomAvailabilityZoneNotFound => {
                "CustomAvailabilityZoneId doesn't refer to an existing custom Availability Zone identifier"
            }
            Self::CustomAvailabilityZoneQuotaExceeded => {
                "You have exceeded the maximum number of custom Availability Zones"
            }
            Self::DBProxyAlreadyExistsFault => {
                "The specified proxy name must be unique for all proxies owned by your AWS account in the specified AWS Region"
            }
            Self::DBProxyNotFoundFault => {
                "The specified proxy name doesn't correspond to a proxy owned by your AWS account in the specified AWS Region"
            }
            Self::DBProxyQuotaExceededFault => {
                "Your AWS account already has the maximum number of proxies in the specified AWS Region"
            }
            Self::DBSubnetGroupNotFoundFault => {
                "DBSubnetGroupName doesn't refer to an existing DB subnet group"
            }
            Self::InvalidSubnet => {
                "The requested subnet is invalid, or multiple subnets were requested that are not all in a common VPC"
            }
            Self::ResourceNotFoundFault => "The specified resource ID was not found",
            Self::DBClusterAlreadyExistsFault => {
                "The user already has a DB cluster with the given identifier"
            }
            Self::DBClusterQuotaExceededFault => {
                "The user attempted to create a new DB cluster and the user has already reached the maximum allowed DB cluster quota"
            }
            Self::DBClusterParameterGroupNotFound => {
                "DBClusterParameterGroupName doesn't refer to an existing DB cluster parameter group"
            }
            Self::DBClusterSnapshotAlreadyExistsFault => {
                "The user already has a DB cluster snapshot with the given identifier"
            }
            Self::DBClusterSnapshotNotFoundFault => {
                "DBClusterSnapshotIdentifier doesn't refer to an existing DB cluster snapshot"
            }
            Self::InvalidDBClusterSnapshotStateFault => {
                "The supplied value isn't a valid DB cluster snapshot state"
            }
            Self::InsufficientDBClusterCapacityFault => {
                "The DB cluster doesn't have enough capacity for the current operation"
            }
            Self::InsufficientStorageClusterCapacity => {
                "There is insufficient storage available for the current action"
            }
            Self::StorageQuotaExceeded => {
                "The request would result in the user exceeding the allowed amount of storage available across all DB instances"
            }
            Self::InvalidVPCNetworkStateFault => {
                "The DB subnet group doesn't cover all Availability Zones after it's created because of changes that were made"
            }
            Self::InvalidDBSubnetGroupStateFault => {
                "The DB subnet group cannot be deleted because it's in use"
            }
            Self::DBSubnetGroupDoesNotCoverEnoughAZs => {
                "Subnets in the DB subnet group should cover at least two Availability Zones unless there is only one Availability Zone"
            }
            Self::GlobalClusterNotFoundFault => {
                "The GlobalClusterIdentifier doesn't refer to an existing global database cluster"
            }
            Self::InvalidGlobalClusterStateFault => {
                "The global cluster is in an invalid state and can't perform the requested operation"
            }
            Self::DomainNotFoundFault => {
                "Domain doesn't refer to an existing Active Directory domain"
            }
            Self::InvalidDBSecurityGroupState => {
                "The state of the DB security group doesn't allow deletion"
            }
            Self::InvalidS3BucketFault => {
                "The specified Amazon S3 bucket name can't be found or Amazon RDS isn't authorized to access the specified Amazon S3 bucket"
            }
            Self::InvalidRestoreFault => "Cannot restore from VPC backup to non-VPC DB instance",
            Self::InstanceQuotaExceeded => {
                "The request would result in the user exceeding the allowed number of DB instances"
            }
            Self::InsufficientDBInstanceCapacity => {
                "The specified DB instance class isn't available in the specified Availability Zone"
            }
            Self::ProvisionedIopsNotAvailableInAZFault => {
                "Provisioned IOPS not available in the specified Availability Zone"
            }
            Self::StorageTypeNotSupported => {
                "Storage of the StorageType specified can't be associated with the DB instance"
            }
            Self::AuthorizationNotFound => {
                "The specified CIDR IP range or Amazon EC2 security group isn't authorized for the specified DB security group"
            }
            Self::DBSecurityGroupNotFound => {
                "DBSecurityGroupName doesn't refer to an existing DB security group"
            }
            Self::BackupPolicyNotFoundFault => "The backup policy was not found",
            Self::Custom(s) => s,
        }
    }
}

impl fmt::Display for RdsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An RDS fault.
#[derive(Debug)]
pub struct RdsError {
    /// The error code.
    pub code: RdsErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The request ID.
    pub request_id: Option<String>,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for RdsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RdsError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for RdsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl RdsError {
    /// Create a new RdsError from an error code.
    #[must_use]
    pub fn new(code: RdsErrorCode) -> Self {
        let status_code = code.default_status_code();
        let message = code.default_message().to_owned();
        Self {
            code,
            message,
            request_id: None,
            status_code,
            source: None,
        }
    }

    /// Create a new RdsError with a custom message.
    #[must_use]
    pub fn with_message(code: RdsErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            request_id: None,
            source: None,
        }
    }

    /// Set the request ID.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

/// Create an RdsError from an error code.
///
/// # Examples
///
/// ```
/// use rdskit_model::rds_error;
/// use rdskit_model::error::RdsErrorCode;
///
/// let err = rds_error!(InternalFailure);
/// assert_eq!(err.code, RdsErrorCode::InternalFailure);
///
/// let err = rds_error!(InternalFailure, "Something went wrong");
/// assert_eq!(err.message, "Something went wrong");
/// ```
#[macro_export]
macro_rules! rds_error {
    ($code:ident) => {
        $crate::error::RdsError::new($crate::error::RdsErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::RdsError::with_message($crate::error::RdsErrorCode::$code, $msg)
    };
}
