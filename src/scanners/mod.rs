// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Scanner Modules
 * The four attack scanners plus their supporting machinery
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod path_traversal;
pub mod private_ranges;
pub mod redirect_chains;
pub mod sql_injection;
pub mod ssrf;
pub mod stored_ssrf;

use crate::attack::Attack;
use crate::context::Context;
use crate::sink::Sink;
use crate::types::{ConnectionInfo, OutboundRequest, SqlDialect};
use anyhow::Result;

/// A pure detection function: structured parameters in, `Attack` or nothing
/// out. Implementations must be safe under concurrent invocation from
/// multiple request threads and must not mutate shared state.
///
/// A returned error is captured on the Scan and never aborts the remaining
/// scanners or the host operation.
pub trait Scanner: Send + Sync {
    fn name(&self) -> &'static str;

    fn scan(
        &self,
        sink: &Sink,
        context: Option<&Context>,
        params: &ScanParams,
    ) -> Result<Option<Attack>>;
}

/// Structured parameters supplied by the instrumentation adapter at the
/// call site. Each variant carries the call-site operation name, appended
/// to the sink operation on any resulting attack. A scanner handed a
/// variant it does not understand reports no attack.
#[derive(Debug, Clone)]
pub enum ScanParams {
    /// A SQL query about to be executed
    SqlQuery {
        query: String,
        dialect: SqlDialect,
        operation: String,
    },
    /// An outbound HTTP request about to be issued. `connection` is
    /// carried for reporting only and plays no part in detection.
    OutboundRequest {
        request: OutboundRequest,
        connection: Option<ConnectionInfo>,
        operation: String,
    },
    /// A hostname that just resolved to a set of addresses (DNS lookup or
    /// raw socket connect), independent of any HTTP call
    HostnameResolution {
        hostname: String,
        addresses: Vec<String>,
        operation: String,
    },
    /// A filesystem path about to be opened
    FileAccess { path: String, operation: String },
}

impl ScanParams {
    /// Call-site operation name for attack traceability
    pub fn operation(&self) -> &str {
        match self {
            ScanParams::SqlQuery { operation, .. }
            | ScanParams::OutboundRequest { operation, .. }
            | ScanParams::HostnameResolution { operation, .. }
            | ScanParams::FileAccess { operation, .. } => operation,
        }
    }
}
