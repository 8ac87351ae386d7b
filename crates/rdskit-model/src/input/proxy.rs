//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::{Filter, Tag, UserAuthConfig};

/// Input for the `CreateDBProxy` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDBProxyInput {
    /// Required.
    #[serde(rename = "DBProxyName", skip_serializing_if = "Option::is_none")]
    pub db_proxy_name: Option<String>,
    /// Required.
    ///
    /// See [`EngineFamily`](crate::types::EngineFamily) for known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_family: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Vec<UserAuthConfig>>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(rename = "RequireTLS", skip_serializing_if = "Option::is_none")]
    pub require_tls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_client_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_logging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateDBProxyInput {
    /// Sets `DBProxyName`.
    #[must_use]
    pub fn with_db_proxy_name(mut self, input: impl Into<String>) -> Self {
        self.db_proxy_name = Some(input.into());
        self
    }

    /// Sets `EngineFamily`.
    #[must_use]
    pub fn with_engine_family(mut self, input: impl Into<String>) -> Self {
        self.engine_family = Some(input.into());
        self
    }

    /// Appends to `Auth`, allocating the list when absent.
    #[must_use]
    pub fn with_auth(mut self, inputs: impl IntoIterator<Item = UserAuthConfig>) -> Self {
        self.auth.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `RoleArn`.
    #[must_use]
    pub fn with_role_arn(mut self, input: impl Into<String>) -> Self {
        self.role_arn = Some(input.into());
        self
    }

    /// Appends to `VpcSubnetIds`, allocating the list when absent.
    #[must_use]
    pub fn with_vpc_subnet_ids(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.vpc_subnet_ids
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Appends to `VpcSecurityGroupIds`, allocating the list when absent.
    #[must_use]
    pub fn with_vpc_security_group_ids(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Sets `RequireTLS`.
    #[must_use]
    pub fn with_require_tls(mut self, input: bool) -> Self {
        self.require_tls = Some(input);
        self
    }

    /// Sets `IdleClientTimeout`.
    #[must_use]
    pub fn with_idle_client_timeout(mut self, input: i32) -> Self {
        self.idle_client_timeout = Some(input);
        self
    }

    /// Sets `DebugLogging`.
    #[must_use]
    pub fn with_debug_logging(mut self, input: bool) -> Self {
        self.debug_logging = Some(input);
        self
    }

    /// Appends to `Tags`, allocating the list when absent.
    #[must_use]
    pub fn with_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(inputs);
        self
    }
}

impl fmt::Display for CreateDBProxyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBProxyName", self.db_proxy_name.as_deref())
            .field("EngineFamily", self.engine_family.as_deref())
            .list("Auth", self.auth.as_deref())
            .field("RoleArn", self.role_arn.as_deref())
            .list("VpcSubnetIds", self.vpc_subnet_ids.as_deref())
            .list(
                "VpcSecurityGroupIds",
                self.vpc_security_group_ids.as_deref(),
            )
            .field("RequireTLS", self.require_tls.as_ref())
            .field("IdleClientTimeout", self.idle_client_timeout.as_ref())
            .field("DebugLogging", self.debug_logging.as_ref())
            .list("Tags", self.tags.as_deref())
            .finish()
    }
}

impl Shape for CreateDBProxyInput {
    const SHAPE_NAME: &'static str = "CreateDBProxyRequest";
}

/// Input for the `DescribeDBProxies` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDBProxiesInput {
    #[serde(rename = "DBProxyName", skip_serializing_if = "Option::is_none")]
    pub db_proxy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
}

impl DescribeDBProxiesInput {
    /// Sets `DBProxyName`.
    #[must_use]
    pub fn with_db_proxy_name(mut self, input: impl Into<String>) -> Self {
        self.db_proxy_name = Some(input.into());
        self
    }

    /// Appends to `Filters`, allocating the list when absent.
    #[must_use]
    pub fn with_filters(mut self, inputs: impl IntoIterator<Item = Filter>) -> Self {
        self.filters.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }

    /// Sets `MaxRecords`.
    #[must_use]
    pub fn with_max_records(mut self, input: i32) -> Self {
        self.max_records = Some(input);
        self
    }
}

impl fmt::Display for DescribeDBProxiesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBProxyName", self.db_proxy_name.as_deref())
            .list("Filters", self.filters.as_deref())
            .field("Marker", self.marker.as_deref())
            .field("MaxRecords", self.max_records.as_ref())
            .finish()
    }
}

impl Shape for DescribeDBProxiesInput {
    const SHAPE_NAME: &'static str = "DescribeDBProxiesRequest";
}
