//! Operation and fault catalogues: name lookup, default statuses and
//! messages, and the `RdsError` values built from them.

use std::error::Error as _;

use http::StatusCode;
use rdskit_model::{RdsError, RdsErrorCode, RdsOperation, rds_error};

#[test]
fn test_should_list_every_operation_once() {
    assert_eq!(RdsOperation::ALL.len(), 33);
    for op in RdsOperation::ALL {
        assert_eq!(RdsOperation::from_name(op.as_str()), Some(*op));
        assert_eq!(op.to_string(), op.as_str());
    }
}

#[test]
fn test_should_resolve_operation_names() {
    assert_eq!(
        RdsOperation::from_name("AddRoleToDBCluster"),
        Some(RdsOperation::AddRoleToDBCluster)
    );
    assert_eq!(
        RdsOperation::from_name("DescribeEngineDefaultClusterParameters"),
        Some(RdsOperation::DescribeEngineDefaultClusterParameters)
    );
    assert_eq!(RdsOperation::from_name("DescribeDBClusterSnapshots"), None);
}

#[test]
fn test_should_resolve_cluster_restore_and_copy_operations() {
    let names = [
        "CreateDBCluster",
        "ModifyDBCluster",
        "CopyDBClusterSnapshot",
        "RestoreDBClusterFromS3",
        "RestoreDBClusterFromSnapshot",
        "RestoreDBClusterToPointInTime",
        "RestoreDBInstanceFromDBSnapshot",
        "RestoreDBInstanceFromS3",
        "DescribeOrderableDBInstanceOptions",
    ];
    for name in names {
        let op = RdsOperation::from_name(name).unwrap();
        assert_eq!(op.as_str(), name);
        assert!(RdsOperation::ALL.contains(&op));
    }
    assert_eq!(RdsOperation::CreateDBCluster.to_string(), "CreateDBCluster");
}

#[test]
fn test_should_build_error_with_defaults() {
    let err = RdsError::new(RdsErrorCode::DBClusterNotFoundFault);
    assert_eq!(err.status_code, StatusCode::NOT_FOUND);
    assert_eq!(
        err.message,
        "DBClusterIdentifier doesn't refer to an existing DB cluster"
    );
    assert!(err.request_id.is_none());
    assert_eq!(
        err.to_string(),
        "RdsError(DBClusterNotFoundFault): DBClusterIdentifier doesn't refer to an existing DB cluster"
    );
}

#[test]
fn test_should_build_error_with_macro() {
    let err = rds_error!(InvalidParameterValue, "MaxRecords is out of range");
    let err = err.with_request_id("req-1");
    assert_eq!(err.code, RdsErrorCode::InvalidParameterValue);
    assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "MaxRecords is out of range");
    assert_eq!(err.request_id.as_deref(), Some("req-1"));
}

#[test]
fn test_should_map_cluster_and_restore_faults_to_statuses() {
    assert_eq!(
        RdsErrorCode::DBClusterAlreadyExistsFault.default_status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        RdsErrorCode::DBClusterQuotaExceededFault.default_status_code(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        RdsErrorCode::InsufficientDBClusterCapacityFault.default_status_code(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        RdsErrorCode::DBClusterSnapshotNotFoundFault.default_status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        RdsErrorCode::InvalidS3BucketFault.default_status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        RdsErrorCode::BackupPolicyNotFoundFault.default_status_code(),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn test_should_carry_default_messages_for_restore_faults() {
    let err = rds_error!(InvalidRestoreFault);
    assert_eq!(
        err.message,
        "Cannot restore from VPC backup to non-VPC DB instance"
    );
    assert_eq!(
        err.to_string(),
        "RdsError(InvalidRestoreFault): Cannot restore from VPC backup to non-VPC DB instance"
    );

    let code = RdsErrorCode::DBClusterSnapshotAlreadyExistsFault;
    assert_eq!(code.as_str(), "DBClusterSnapshotAlreadyExistsFault");
    assert_eq!(
        code.default_message(),
        "The user already has a DB cluster snapshot with the given identifier"
    );
}

#[test]
fn test_should_expose_source_error() {
    let io = std::io::Error::other("connection reset");
    let err = rds_error!(InternalFailure).with_source(io);
    assert_eq!(err.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        err.source().map(ToString::to_string).as_deref(),
        Some("connection reset")
    );
}

#[test]
fn test_should_support_custom_error_codes() {
    let code = RdsErrorCode::Custom("DBLogFileNotFoundFault");
    assert_eq!(code.as_str(), "DBLogFileNotFoundFault");
    assert_eq!(code.default_message(), "DBLogFileNotFoundFault");
    assert_eq!(
        code.default_status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_should_default_to_internal_failure() {
    assert_eq!(RdsErrorCode::default(), RdsErrorCode::InternalFailure);
}
