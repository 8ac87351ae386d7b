//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeFormatter};
use crate::types::DBProxy;

/// Output of the `CreateDBProxy` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDBProxyOutput {
    #[serde(rename = "DBProxy", skip_serializing_if = "Option::is_none")]
    pub db_proxy: Option<DBProxy>,
}

impl CreateDBProxyOutput {
    /// Sets `DBProxy`.
    #[must_use]
    pub fn with_db_proxy(mut self, input: DBProxy) -> Self {
        self.db_proxy = Some(input);
        self
    }
}

impl fmt::Display for CreateDBProxyOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DBProxy", self.db_proxy.as_ref())
            .finish()
    }
}

impl Shape for CreateDBProxyOutput {
    const SHAPE_NAME: &'static str = "CreateDBProxyResponse";
}

/// Output of the `DescribeDBProxies` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDBProxiesOutput {
    #[serde(rename = "DBProxies", skip_serializing_if = "Option::is_none")]
    pub db_proxies: Option<Vec<DBProxy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeDBProxiesOutput {
    /// Appends to `DBProxies`, allocating the list when absent.
    #[must_use]
    pub fn with_db_proxies(mut self, inputs: impl IntoIterator<Item = DBProxy>) -> Self {
        self.db_proxies.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, input: impl Into<String>) -> Self {
        self.marker = Some(input.into());
        self
    }
}

impl fmt::Display for DescribeDBProxiesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("DBProxies", self.db_proxies.as_deref())
            .field("Marker", self.marker.as_deref())
            .finish()
    }
}

impl Shape for DescribeDBProxiesOutput {
    const SHAPE_NAME: &'static str = "DescribeDBProxiesResponse";
}
