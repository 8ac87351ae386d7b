//! JSON form of the generated shapes: model member names, omitted absent
//! members, and round trips of nested, timestamp and double values.

use chrono::{TimeZone, Utc};
use rdskit_model::Double;
use rdskit_model::input::{AddRoleToDBClusterInput, CopyDBSnapshotInput, DescribeEventsInput};
use rdskit_model::output::StartActivityStreamOutput;
use rdskit_model::types::{
    ActivityStreamStatus, OrderableDBInstanceOption, Tag, UserAuthConfig, VpnDetails,
};

#[test]
fn test_should_serialize_default_shape_as_empty_object() {
    let json = serde_json::to_string(&CopyDBSnapshotInput::default()).expect("serialize");
    assert_eq!(json, "{}");
}

#[test]
fn test_should_use_model_member_names() {
    let input = AddRoleToDBClusterInput::default()
        .with_db_cluster_identifier("mydb")
        .with_feature_name("s3Import");
    let json = serde_json::to_string(&input).expect("serialize AddRoleToDBClusterInput");
    assert_eq!(
        json,
        r#"{"DBClusterIdentifier":"mydb","FeatureName":"s3Import"}"#
    );
}

#[test]
fn test_should_keep_acronym_member_names() {
    let details = VpnDetails::default()
        .with_vpn_tunnel_originator_ip("10.0.0.1")
        .with_vpn_psk("secret");
    let json = serde_json::to_string(&details).expect("serialize VpnDetails");
    assert_eq!(
        json,
        r#"{"VpnTunnelOriginatorIP":"10.0.0.1","VpnPSK":"secret"}"#
    );

    let auth = UserAuthConfig::default().with_iam_auth("DISABLED");
    let json = serde_json::to_string(&auth).expect("serialize UserAuthConfig");
    assert_eq!(json, r#"{"IAMAuth":"DISABLED"}"#);
}

#[test]
fn test_should_emit_empty_list_but_omit_absent_list() {
    let input = CopyDBSnapshotInput::default().with_tags(Vec::new());
    let json = serde_json::to_string(&input).expect("serialize CopyDBSnapshotInput");
    assert_eq!(json, r#"{"Tags":[]}"#);
}

#[test]
fn test_should_roundtrip_nested_shapes() {
    let input = CopyDBSnapshotInput::default()
        .with_source_db_snapshot_identifier("snap-1")
        .with_copy_tags(true)
        .with_tags([Tag::default().with_key("env").with_value("prod")]);
    let json = serde_json::to_string(&input).expect("serialize CopyDBSnapshotInput");
    let parsed: CopyDBSnapshotInput =
        serde_json::from_str(&json).expect("deserialize CopyDBSnapshotInput");
    assert_eq!(parsed, input);
}

#[test]
fn test_should_map_missing_members_to_none() {
    let output: StartActivityStreamOutput =
        serde_json::from_str(r#"{"Status":"starting"}"#).expect("deserialize output");
    assert_eq!(output.status.as_deref(), Some("starting"));
    let status = output.status.as_deref().unwrap_or_default();
    assert_eq!(status.parse(), Ok(ActivityStreamStatus::Starting));
    assert!(output.kms_key_id.is_none());
    assert!(output.apply_immediately.is_none());
}

#[test]
fn test_should_roundtrip_timestamps() {
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let input = DescribeEventsInput::default().with_start_time(start);
    let json = serde_json::to_string(&input).expect("serialize DescribeEventsInput");
    assert!(json.contains("2020-01-01T00:00:00"));
    let parsed: DescribeEventsInput =
        serde_json::from_str(&json).expect("deserialize DescribeEventsInput");
    assert_eq!(parsed.start_time, Some(start));
}

#[test]
fn test_should_serialize_double_as_plain_number() {
    let option = OrderableDBInstanceOption::default()
        .with_engine("aurora-mysql")
        .with_min_iops_per_gib(1.5);
    let json = serde_json::to_string(&option).expect("serialize OrderableDBInstanceOption");
    assert_eq!(json, r#"{"Engine":"aurora-mysql","MinIopsPerGib":1.5}"#);

    let parsed: OrderableDBInstanceOption = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed.min_iops_per_gib, Some(Double(1.5)));
    assert_eq!(parsed, option);
}
