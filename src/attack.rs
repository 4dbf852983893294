// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Attack Taxonomy
 * Immutable descriptions of detected exploitation attempts
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::types::{OutboundRequest, Payload, SqlDialect};
use serde::Serialize;

/// One detected exploitation attempt. All fields except `blocked` are
/// immutable after construction; `blocked` moves false -> true exactly once.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    /// Name of the sink that detected the attempt
    pub sink: String,
    /// `"{sink.operation}.{call-site-operation}"` for traceability
    pub operation: String,
    blocked: bool,
    #[serde(flatten)]
    pub kind: AttackKind,
}

/// Per-variant payload of a detected attack
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AttackKind {
    #[serde(rename_all = "camelCase")]
    SqlInjection {
        query: String,
        input: Payload,
        dialect: SqlDialect,
    },
    #[serde(rename_all = "camelCase")]
    Ssrf {
        input: Payload,
        request: OutboundRequest,
    },
    #[serde(rename_all = "camelCase")]
    StoredSsrf { hostname: String, address: String },
    #[serde(rename_all = "camelCase")]
    PathTraversal { path: String, input: Payload },
}

impl Attack {
    pub fn new(
        sink_name: impl Into<String>,
        sink_operation: &str,
        call_operation: &str,
        kind: AttackKind,
    ) -> Self {
        Self {
            sink: sink_name.into(),
            operation: format!("{}.{}", sink_operation, call_operation),
            blocked: false,
            kind,
        }
    }

    /// Whether enforcement has decided to block the protected call
    pub fn blocked(&self) -> bool {
        self.blocked
    }

    /// One-directional transition: false -> true only, idempotent.
    /// Called by the enforcement boundary before the attack is reported.
    pub fn will_be_blocked(&mut self) {
        self.blocked = true;
    }

    /// Deterministic human-readable description carrying enough detail to
    /// reproduce the decision
    pub fn message(&self) -> String {
        match &self.kind {
            AttackKind::SqlInjection { query, input, dialect } => format!(
                "SQL injection ({}) detected in operation {}: {} payload {:?} at {:?} reached query {:?}",
                dialect, self.operation, input.source, input.value, input.path, query
            ),
            AttackKind::Ssrf { input, request } => {
                let host = request.host().unwrap_or("<no host>");
                let port = request
                    .port()
                    .map_or_else(String::new, |p| format!(":{}", p));
                format!(
                    "SSRF detected in operation {}: {} payload {:?} at {:?} steers request to {}{}",
                    self.operation, input.source, input.value, input.path, host, port
                )
            }
            AttackKind::StoredSsrf { hostname, address } => format!(
                "Stored SSRF detected in operation {}: hostname {:?} resolved to metadata address {}",
                self.operation, hostname, address
            ),
            AttackKind::PathTraversal { path, input } => format!(
                "Path traversal detected in operation {}: {} payload {:?} at {:?} reached filesystem path {:?}",
                self.operation, input.source, input.value, input.path, path
            ),
        }
    }
}

impl std::fmt::Display for Attack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
