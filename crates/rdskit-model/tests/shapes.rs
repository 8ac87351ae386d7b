//! Behaviour shared by all generated shapes: fluent setters, list append
//! semantics, equality, hashing and the diagnostic string form.

use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{TimeZone, Utc};
use rdskit_model::input::{
    AddRoleToDBClusterInput, CopyDBSnapshotInput, CreateDBClusterInput, CreateDBProxyInput,
    DescribeDBSnapshotsInput, DescribeEventsInput, ModifyDBClusterInput, ModifyOptionGroupInput,
    RemoveTagsFromResourceInput,
};
use rdskit_model::output::{DescribeDBSnapshotsOutput, ListTagsForResourceOutput};
use rdskit_model::types::{
    ActivityStreamMode, CloudwatchLogsExportConfiguration, DBCluster, DBClusterRole, DBSnapshot,
    Filter, OptionConfiguration, OptionSetting, OrderableDBInstanceOption, RdsOption, SourceType,
    Tag, UserAuthConfig, VpnDetails,
};
use rdskit_model::{Double, Shape};

const ROLE_ARN: &str = "arn:aws:iam::123456789012:role/AuroraAccessRole";

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn tag(key: &str, value: &str) -> Tag {
    Tag::default().with_key(key).with_value(value)
}

fn orderable_option(min_iops_per_gib: f64) -> OrderableDBInstanceOption {
    OrderableDBInstanceOption::default()
        .with_engine("mysql")
        .with_min_iops_per_gib(min_iops_per_gib)
}

#[test]
fn test_should_create_shape_with_every_field_absent() {
    let input = CopyDBSnapshotInput::default();
    assert!(input.source_db_snapshot_identifier.is_none());
    assert!(input.target_db_snapshot_identifier.is_none());
    assert!(input.kms_key_id.is_none());
    assert!(input.tags.is_none());
    assert!(input.copy_tags.is_none());
    assert!(input.pre_signed_url.is_none());
    assert!(input.option_group_name.is_none());
    assert_eq!(input.to_string(), "{}");
}

#[test]
fn test_should_read_back_value_set_by_fluent_setter() {
    let input = DescribeDBSnapshotsInput::default()
        .with_db_instance_identifier("mydb")
        .with_max_records(20)
        .with_include_public(false);
    assert_eq!(input.db_instance_identifier.as_deref(), Some("mydb"));
    assert_eq!(input.max_records, Some(20));
    assert_eq!(input.include_public, Some(false));
    assert!(input.marker.is_none());
}

#[test]
fn test_should_overwrite_scalar_on_second_set() {
    let input = AddRoleToDBClusterInput::default()
        .with_db_cluster_identifier("first")
        .with_db_cluster_identifier("second");
    assert_eq!(input.db_cluster_identifier.as_deref(), Some("second"));
}

#[test]
fn test_should_clear_field_by_assigning_none() {
    let mut input = CopyDBSnapshotInput::default().with_kms_key_id("alias/rds");
    input.kms_key_id = None;
    assert!(input.kms_key_id.is_none());
    assert_eq!(input, CopyDBSnapshotInput::default());
}

#[test]
fn test_should_accumulate_tags_across_calls() {
    let a = tag("env", "prod");
    let b = tag("team", "db");
    let c = tag("tier", "gold");

    let input = CopyDBSnapshotInput::default()
        .with_tags([a.clone(), b.clone()])
        .with_tags([c.clone()]);
    assert_eq!(input.tags, Some(vec![a, b, c]));
}

#[test]
fn test_should_allocate_empty_list_for_empty_iterator() {
    let input = CopyDBSnapshotInput::default().with_tags(Vec::new());
    assert_eq!(input.tags, Some(Vec::new()));
    assert_ne!(input, CopyDBSnapshotInput::default());
}

#[test]
fn test_should_replace_list_by_assignment() {
    let mut input = CopyDBSnapshotInput::default().with_tags([tag("a", "1"), tag("b", "2")]);
    input.tags = Some(vec![tag("c", "3")]);
    assert_eq!(input.tags, Some(vec![tag("c", "3")]));

    input.tags = None;
    assert!(input.tags.is_none());
}

#[test]
fn test_should_accept_string_like_values_for_string_lists() {
    let keys = vec!["env".to_owned(), "team".to_owned()];
    let input = RemoveTagsFromResourceInput::default()
        .with_resource_name("arn:aws:rds:us-east-1:123456789012:db:mydb")
        .with_tag_keys(keys)
        .with_tag_keys(["tier"]);
    assert_eq!(
        input.tag_keys,
        Some(vec!["env".to_owned(), "team".to_owned(), "tier".to_owned()])
    );
}

#[test]
fn test_should_accept_enum_for_enum_constrained_field() {
    let input = DescribeEventsInput::default().with_source_type(SourceType::DbClusterSnapshot);
    assert_eq!(input.source_type.as_deref(), Some("db-cluster-snapshot"));
}

#[test]
fn test_should_keep_unvalidated_raw_string_in_enum_field() {
    let config = UserAuthConfig::default()
        .with_auth_scheme("NOT_A_SCHEME")
        .with_iam_auth("REQUIRED");
    assert_eq!(config.auth_scheme.as_deref(), Some("NOT_A_SCHEME"));
    assert_eq!(config.iam_auth.as_deref(), Some("REQUIRED"));
}

#[test]
fn test_should_compare_equal_when_all_fields_match() {
    let left = AddRoleToDBClusterInput::default()
        .with_db_cluster_identifier("mydb")
        .with_role_arn(ROLE_ARN);
    let right = AddRoleToDBClusterInput::default()
        .with_db_cluster_identifier("mydb")
        .with_role_arn(ROLE_ARN);
    let third = right.clone();

    assert_eq!(left, left.clone());
    assert_eq!(left, right);
    assert_eq!(right, left);
    assert_eq!(right, third);
    assert_eq!(left, third);
    assert_eq!(hash_of(&left), hash_of(&right));
}

#[test]
fn test_should_differ_when_one_side_is_absent() {
    let with_feature = AddRoleToDBClusterInput::default()
        .with_db_cluster_identifier("mydb")
        .with_feature_name("s3Import");
    let without_feature = AddRoleToDBClusterInput::default().with_db_cluster_identifier("mydb");
    assert_ne!(with_feature, without_feature);
    assert_ne!(without_feature, with_feature);
}

#[test]
fn test_should_compare_nested_shapes_structurally() {
    let snapshot = DBSnapshot::default()
        .with_db_snapshot_identifier("snap-1")
        .with_snapshot_create_time(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
    let left = DescribeDBSnapshotsOutput::default().with_db_snapshots([snapshot.clone()]);
    let right = DescribeDBSnapshotsOutput::default().with_db_snapshots([snapshot]);
    assert_eq!(left, right);

    let other = DescribeDBSnapshotsOutput::default()
        .with_db_snapshots([DBSnapshot::default().with_db_snapshot_identifier("snap-2")]);
    assert_ne!(left, other);
}

#[test]
fn test_should_deduplicate_equal_shapes_in_hash_set() {
    let mut set = HashSet::new();
    set.insert(tag("env", "prod"));
    set.insert(tag("env", "prod"));
    set.insert(tag("env", "dev"));
    set.insert(Tag::default());
    assert_eq!(set.len(), 3);
}

#[test]
fn test_should_hash_consistently_for_nested_lists() {
    let build = || {
        ModifyOptionGroupInput::default()
            .with_option_group_name("my-og")
            .with_options_to_include([OptionConfiguration::default()
                .with_option_name("MEMCACHED")
                .with_port(11211)
                .with_option_settings([OptionSetting::default()
                    .with_name("CHUNK_SIZE")
                    .with_value("32")])])
            .with_options_to_remove(["NATIVE_NETWORK_ENCRYPTION"])
    };
    assert_eq!(build(), build());
    assert_eq!(hash_of(&build()), hash_of(&build()));
}

#[test]
fn test_should_display_add_role_input() {
    let input = AddRoleToDBClusterInput::default()
        .with_db_cluster_identifier("mydb")
        .with_role_arn(ROLE_ARN);
    assert_eq!(
        input.to_string(),
        "{DBClusterIdentifier: mydb,RoleArn: arn:aws:iam::123456789012:role/AuroraAccessRole}"
    );
}

#[test]
fn test_should_display_fields_in_declaration_order() {
    let input = AddRoleToDBClusterInput::default()
        .with_feature_name("s3Import")
        .with_role_arn(ROLE_ARN)
        .with_db_cluster_identifier("mydb");
    assert_eq!(
        input.to_string(),
        format!("{{DBClusterIdentifier: mydb,RoleArn: {ROLE_ARN},FeatureName: s3Import}}")
    );
}

#[test]
fn test_should_display_nested_shapes_and_lists() {
    let output = ListTagsForResourceOutput::default()
        .with_tag_list([tag("env", "prod"), Tag::default().with_key("team")]);
    assert_eq!(
        output.to_string(),
        "{TagList: [{Key: env,Value: prod}, {Key: team}]}"
    );
}

#[test]
fn test_should_display_empty_list() {
    let input = CopyDBSnapshotInput::default()
        .with_source_db_snapshot_identifier("snap-1")
        .with_tags(Vec::new());
    assert_eq!(
        input.to_string(),
        "{SourceDBSnapshotIdentifier: snap-1,Tags: []}"
    );
}

#[test]
fn test_should_display_booleans_and_integers() {
    let input = DescribeDBSnapshotsInput::default()
        .with_max_records(50)
        .with_include_shared(true);
    assert_eq!(input.to_string(), "{MaxRecords: 50,IncludeShared: true}");
}

#[test]
fn test_should_display_filters_with_string_lists() {
    let input = DescribeDBSnapshotsInput::default().with_filters([Filter::default()
        .with_name("engine")
        .with_values(["mysql", "postgres"])]);
    assert_eq!(
        input.to_string(),
        "{Filters: [{Name: engine,Values: [mysql, postgres]}]}"
    );
}

#[test]
fn test_should_build_db_cluster_with_all_kinds_of_fields() {
    let created = Utc.with_ymd_and_hms(2021, 6, 30, 12, 0, 0).unwrap();
    let cluster = DBCluster::default()
        .with_db_cluster_identifier("aurora-1")
        .with_allocated_storage(1)
        .with_backtrack_window(3600)
        .with_multi_az(true)
        .with_cluster_create_time(created)
        .with_availability_zones(["us-east-1a", "us-east-1b"])
        .with_associated_roles([DBClusterRole::default()
            .with_role_arn(ROLE_ARN)
            .with_status("ACTIVE")])
        .with_activity_stream_mode(ActivityStreamMode::Async);

    assert_eq!(cluster.allocated_storage, Some(1));
    assert_eq!(cluster.backtrack_window, Some(3600_i64));
    assert_eq!(cluster.multi_az, Some(true));
    assert_eq!(cluster.cluster_create_time, Some(created));
    assert_eq!(cluster.availability_zones.as_ref().map(Vec::len), Some(2));
    assert_eq!(cluster.activity_stream_mode.as_deref(), Some("async"));
    let text = cluster.to_string();
    assert!(text.starts_with(
        "{AllocatedStorage: 1,AvailabilityZones: [us-east-1a, us-east-1b],DBClusterIdentifier: aurora-1,",
    ));
}

#[test]
fn test_should_own_children_independently_after_clone() {
    let original = CreateDBProxyInput::default()
        .with_db_proxy_name("proxy-1")
        .with_auth([UserAuthConfig::default().with_user_name("admin")]);
    let mut copy = original.clone();
    if let Some(auth) = copy.auth.as_mut() {
        auth[0].user_name = Some("other".to_owned());
    }
    let auth = original.auth.as_deref().unwrap_or_default();
    assert_eq!(auth[0].user_name.as_deref(), Some("admin"));
    assert_ne!(original, copy);
}

#[test]
fn test_should_expose_model_shape_names() {
    assert_eq!(
        AddRoleToDBClusterInput::SHAPE_NAME,
        "AddRoleToDBClusterMessage"
    );
    assert_eq!(DescribeDBSnapshotsOutput::SHAPE_NAME, "DBSnapshotMessage");
    assert_eq!(CreateDBProxyInput::SHAPE_NAME, "CreateDBProxyRequest");
    assert_eq!(VpnDetails::SHAPE_NAME, "VpnDetails");
    assert_eq!(RdsOption::SHAPE_NAME, "Option");
    assert_eq!(CreateDBClusterInput::SHAPE_NAME, "CreateDBClusterMessage");
}

#[test]
fn test_should_satisfy_shape_bounds_generically() {
    fn fresh<S: Shape>() -> S {
        S::default()
    }
    let details: VpnDetails = fresh();
    assert_eq!(details.to_string(), "{}");
    let option: RdsOption = fresh::<RdsOption>().with_option_name("MEMCACHED");
    assert_eq!(option.to_string(), "{OptionName: MEMCACHED}");
}

#[test]
fn test_should_display_create_db_cluster_fields_in_model_order() {
    let input = CreateDBClusterInput::default()
        .with_tags([tag("env", "prod")])
        .with_storage_encrypted(true)
        .with_port(5432)
        .with_engine("aurora-postgresql")
        .with_db_cluster_identifier("aurora-1")
        .with_availability_zones(["us-east-1a"]);
    assert_eq!(
        input.to_string(),
        "{AvailabilityZones: [us-east-1a],DBClusterIdentifier: aurora-1,Engine: aurora-postgresql,Port: 5432,Tags: [{Key: env,Value: prod}],StorageEncrypted: true}"
    );
}

#[test]
fn test_should_append_tags_to_create_db_cluster_request() {
    let input = CreateDBClusterInput::default()
        .with_tags([tag("env", "prod")])
        .with_tags([tag("team", "db")]);
    let expected = vec![tag("env", "prod"), tag("team", "db")];
    assert_eq!(input.tags, Some(expected));
    assert_eq!(
        input.to_string(),
        "{Tags: [{Key: env,Value: prod}, {Key: team,Value: db}]}"
    );
}

#[test]
fn test_should_display_nested_cluster_configuration() {
    let logs = CloudwatchLogsExportConfiguration::default()
        .with_enable_log_types(["audit"])
        .with_disable_log_types(["slowquery"]);
    let input = ModifyDBClusterInput::default()
        .with_db_cluster_identifier("aurora-1")
        .with_cloudwatch_logs_export_configuration(logs);
    assert_eq!(
        input.to_string(),
        "{DBClusterIdentifier: aurora-1,CloudwatchLogsExportConfiguration: {EnableLogTypes: [audit],DisableLogTypes: [slowquery]}}"
    );
}

#[test]
fn test_should_compare_and_hash_double_members_by_value() {
    let option = orderable_option(1.5);
    assert_eq!(option, orderable_option(1.5));
    assert_eq!(hash_of(&option), hash_of(&orderable_option(1.5)));
    assert_ne!(option, orderable_option(2.0));
    assert_eq!(option.min_iops_per_gib, Some(Double(1.5)));
}

#[test]
fn test_should_display_double_members_with_fractional_part() {
    let option = orderable_option(1.5);
    assert_eq!(option.to_string(), "{Engine: mysql,MinIopsPerGib: 1.5}");
    let whole = orderable_option(3.0);
    assert_eq!(whole.to_string(), "{Engine: mysql,MinIopsPerGib: 3.0}");
}
