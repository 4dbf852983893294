// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - SQL Injection Scanner
 * Heuristic pre-filter in front of the external dialect-aware verifier
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::attack::{Attack, AttackKind};
use crate::context::Context;
use crate::errors::EngineError;
use crate::scanners::{ScanParams, Scanner};
use crate::sink::Sink;
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::{debug, warn};

// Pure identifiers and numbers cannot break out of a quoted literal
static IDENTIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+$").unwrap()
});

// Comma-separated integer lists, e.g. `IN (1, 2, 3)`
static INT_LIST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(,\s*)?)+$").unwrap()
});

/// The final injection verdict. Built and distributed as a separate
/// compiled component; this crate only owns the seam.
pub trait SqlVerifier: Send + Sync {
    /// Whether `input` changes the parse of `query` under the dialect
    /// identified by `dialect_id` (see `SqlDialect::verifier_id`).
    fn is_injection(&self, query: &str, input: &str, dialect_id: u8) -> Result<bool>;
}

/// Scans executed queries against the request's payloads. A cheap heuristic
/// removes the overwhelming majority of benign inputs before the costlier
/// verifier runs; the verifier's boolean answer is authoritative.
pub struct SqlInjectionScanner {
    verifier: Arc<dyn SqlVerifier>,
}

impl SqlInjectionScanner {
    pub fn new(verifier: Arc<dyn SqlVerifier>) -> Self {
        Self { verifier }
    }

    /// Heuristic pre-filter, case-insensitive throughout. True means the
    /// input is worth handing to the verifier.
    fn worth_verifying(query: &str, query_lower: &str, input: &str, input_lower: &str) -> bool {
        if input.len() <= 1 {
            return false;
        }
        if input.len() > query.len() {
            return false;
        }
        if !query_lower.contains(input_lower) {
            return false;
        }
        if IDENTIFIER_RE.is_match(input) {
            return false;
        }
        if INT_LIST_RE.is_match(input) {
            return false;
        }
        true
    }
}

impl Scanner for SqlInjectionScanner {
    fn name(&self) -> &'static str {
        "sql_injection"
    }

    fn scan(
        &self,
        sink: &Sink,
        context: Option<&Context>,
        params: &ScanParams,
    ) -> Result<Option<Attack>> {
        let ScanParams::SqlQuery {
            query,
            dialect,
            operation,
        } = params
        else {
            return Ok(None);
        };
        let Some(context) = context else {
            return Ok(None);
        };

        let query_lower = query.to_lowercase();

        for payload in context.payloads() {
            let input_lower = payload.value.to_lowercase();
            if !Self::worth_verifying(query, &query_lower, &payload.value, &input_lower) {
                debug!(
                    "Skipping benign payload at '{}' for sink '{}'",
                    payload.path,
                    sink.name()
                );
                continue;
            }

            match self
                .verifier
                .is_injection(query, &payload.value, dialect.verifier_id())
            {
                Ok(true) => {
                    return Ok(Some(Attack::new(
                        sink.name(),
                        sink.operation(),
                        operation,
                        AttackKind::SqlInjection {
                            query: query.clone(),
                            input: payload.clone(),
                            dialect: *dialect,
                        },
                    )));
                }
                Ok(false) => {}
                Err(error) => {
                    warn!("SQL verifier unavailable: {:#}", error);
                    return Err(EngineError::Verifier(error.to_string()).into());
                }
            }
        }

        Ok(None)
    }
}
