//! Generated enums: value catalogues in model order, wire literals,
//! validated parsing and serde names.

use std::str::FromStr;

use rdskit_model::ParseEnumError;
use rdskit_model::types::{
    ActivityStreamMode, ActivityStreamStatus, ApplyMethod, AuthScheme, DBProxyStatus, EngineFamily,
    IAMAuthMode, SourceType, WriteForwardingStatus,
};

#[test]
fn test_should_parse_every_documented_value() {
    for mode in ActivityStreamMode::VALUES {
        assert_eq!(ActivityStreamMode::from_str(mode.as_str()), Ok(*mode));
    }
    for status in DBProxyStatus::VALUES {
        assert_eq!(status.as_str().parse::<DBProxyStatus>(), Ok(*status));
    }
    for source in SourceType::VALUES {
        assert_eq!(source.as_str().parse::<SourceType>(), Ok(*source));
    }
}

#[test]
fn test_should_keep_model_order_in_values() {
    assert_eq!(
        ApplyMethod::VALUES,
        &[ApplyMethod::Immediate, ApplyMethod::PendingReboot]
    );
    assert_eq!(
        ActivityStreamStatus::VALUES
            .iter()
            .map(ActivityStreamStatus::as_str)
            .collect::<Vec<_>>(),
        vec!["stopped", "starting", "started", "stopping"]
    );
    assert_eq!(WriteForwardingStatus::VALUES.len(), 5);
    assert_eq!(DBProxyStatus::VALUES.len(), 9);
}

#[test]
fn test_should_use_wire_literals() {
    assert_eq!(ApplyMethod::PendingReboot.as_str(), "pending-reboot");
    assert_eq!(SourceType::DbParameterGroup.as_str(), "db-parameter-group");
    assert_eq!(
        DBProxyStatus::InsufficientResourceLimits.as_str(),
        "insufficient-resource-limits"
    );
    assert_eq!(EngineFamily::Postgresql.as_str(), "POSTGRESQL");
    assert_eq!(AuthScheme::Secrets.as_str(), "SECRETS");
    assert_eq!(IAMAuthMode::Required.to_string(), "REQUIRED");
}

#[test]
fn test_should_reject_unknown_value() {
    let err = ApplyMethod::from_str("later").unwrap_err();
    assert_eq!(err, ParseEnumError::new("ApplyMethod", "later"));
}

#[test]
fn test_should_reject_value_with_wrong_case() {
    assert!("mysql".parse::<EngineFamily>().is_err());
    assert!("SYNC".parse::<ActivityStreamMode>().is_err());
    assert!("".parse::<WriteForwardingStatus>().is_err());
}

#[test]
fn test_should_convert_into_string() {
    let value: String = WriteForwardingStatus::Enabling.into();
    assert_eq!(value, "enabling");
}

#[test]
fn test_should_serialize_with_wire_literal() {
    let json = serde_json::to_string(&SourceType::DbClusterSnapshot).expect("serialize SourceType");
    assert_eq!(json, r#""db-cluster-snapshot""#);

    let parsed: DBProxyStatus =
        serde_json::from_str(r#""incompatible-network""#).expect("deserialize DBProxyStatus");
    assert_eq!(parsed, DBProxyStatus::IncompatibleNetwork);
}
