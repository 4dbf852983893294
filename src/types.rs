// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Vartija Core Types
 * Payloads, SQL dialects and outbound request descriptors
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;
use url::Url;

/// Where an attacker-influenceable value was extracted from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PayloadSource {
    Query,
    Body,
    Header,
    Cookie,
    Route,
    Graphql,
    Xml,
    Subdomain,
}

impl PayloadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadSource::Query => "query",
            PayloadSource::Body => "body",
            PayloadSource::Header => "header",
            PayloadSource::Cookie => "cookie",
            PayloadSource::Route => "route",
            PayloadSource::Graphql => "graphql",
            PayloadSource::Xml => "xml",
            PayloadSource::Subdomain => "subdomain",
        }
    }
}

impl std::fmt::Display for PayloadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled, attacker-influenceable value extracted from a request.
/// Equality is on (value, source, path).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub value: String,
    pub source: PayloadSource,
    /// Dotted path inside the source, e.g. `filters.name` or `user.email`
    pub path: String,
}

impl Payload {
    pub fn new(value: impl Into<String>, source: PayloadSource, path: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source,
            path: path.into(),
        }
    }
}

/// SQL dialect of the executing driver, mapped to a verifier-specific id
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    Generic,
    MySql,
    PostgreSql,
    Sqlite,
}

impl Default for SqlDialect {
    fn default() -> Self {
        SqlDialect::Generic
    }
}

impl SqlDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlDialect::Generic => "generic",
            SqlDialect::MySql => "mysql",
            SqlDialect::PostgreSql => "postgresql",
            SqlDialect::Sqlite => "sqlite",
        }
    }

    /// Stable id the external verifier expects
    pub fn verifier_id(&self) -> u8 {
        match self {
            SqlDialect::Generic => 0,
            SqlDialect::MySql => 8,
            SqlDialect::PostgreSql => 9,
            SqlDialect::Sqlite => 12,
        }
    }

    /// Map a driver-reported dialect name. Unrecognized names fall back to
    /// the generic dialect with a warning.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "generic" => SqlDialect::Generic,
            "mysql" | "mysql2" | "mariadb" | "trilogy" => SqlDialect::MySql,
            "postgresql" | "postgres" | "pg" => SqlDialect::PostgreSql,
            "sqlite" | "sqlite3" => SqlDialect::Sqlite,
            other => {
                warn!("Unrecognized SQL dialect '{}', falling back to generic", other);
                SqlDialect::Generic
            }
        }
    }
}

impl std::fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outbound HTTP request about to be issued by the host application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutboundRequest {
    pub verb: String,
    pub uri: Url,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl OutboundRequest {
    pub fn new(verb: impl Into<String>, uri: Url) -> Self {
        Self {
            verb: verb.into(),
            uri,
            headers: HashMap::new(),
        }
    }

    /// Target host of the request, if the URI has one
    pub fn host(&self) -> Option<&str> {
        self.uri.host_str()
    }

    /// Effective target port (explicit or scheme default)
    pub fn port(&self) -> Option<u16> {
        self.uri.port_or_known_default()
    }
}

/// Socket-level connection details, carried for reporting only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    pub host: String,
    pub port: u16,
}
