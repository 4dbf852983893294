// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - SSRF Scanner
 * Pre-flight detection for outbound requests steered into private ranges
 *
 * Detection outline:
 * - Fast reject unless the request target is private/internal
 * - Origin candidates: the request URI plus its redirect-chain origin
 * - Input candidates: the payload as-is and with http/https/request-scheme
 *   prefixes, IPv6 literals bracketed first
 * - Match on equal hostname; port only when the candidate pins a
 *   non-default port for its scheme
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::attack::{Attack, AttackKind};
use crate::context::Context;
use crate::scanners::private_ranges::PrivateRangeClassifier;
use crate::scanners::{ScanParams, Scanner};
use crate::sink::Sink;
use anyhow::Result;
use std::borrow::Cow;
use std::net::Ipv6Addr;
use tracing::debug;
use url::Url;

pub struct SsrfScanner;

impl SsrfScanner {
    pub fn new() -> Self {
        Self
    }

    /// Bare IPv6 literals need brackets before URL parsing
    fn bracket_ipv6(value: &str) -> Cow<'_, str> {
        if !value.starts_with('[') && value.parse::<Ipv6Addr>().is_ok() {
            Cow::Owned(format!("[{value}]"))
        } else {
            Cow::Borrowed(value)
        }
    }

    /// Parse the payload's raw string into URI candidates: as-is, and with
    /// http://, https:// and the request's own scheme prefixed. Invalid
    /// URIs and candidates without a host are dropped, duplicates collapse.
    fn input_candidates(value: &str, request_scheme: &str) -> Vec<Url> {
        let value = Self::bracket_ipv6(value.trim());
        let attempts = [
            value.to_string(),
            format!("http://{value}"),
            format!("https://{value}"),
            format!("{request_scheme}://{value}"),
        ];

        let mut candidates: Vec<Url> = Vec::new();
        for attempt in attempts {
            match Url::parse(&attempt) {
                Ok(url) if url.host_str().is_some() => {
                    if !candidates.contains(&url) {
                        candidates.push(url);
                    }
                }
                Ok(_) => {}
                Err(e) => debug!("Dropping unparseable SSRF candidate '{}': {}", attempt, e),
            }
        }
        candidates
    }

    /// Hostnames must match exactly. Port is compared only when the
    /// candidate specifies a non-default port for its scheme; an
    /// unspecified port is indistinguishable from an explicit default,
    /// so it is ignored.
    fn candidate_matches(origin: &Url, candidate: &Url) -> bool {
        let (Some(origin_host), Some(candidate_host)) = (origin.host_str(), candidate.host_str())
        else {
            return false;
        };
        if origin_host != candidate_host {
            return false;
        }
        match candidate.port() {
            None => true,
            Some(port) => origin.port_or_known_default() == Some(port),
        }
    }
}

impl Default for SsrfScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for SsrfScanner {
    fn name(&self) -> &'static str {
        "ssrf"
    }

    fn scan(
        &self,
        sink: &Sink,
        context: Option<&Context>,
        params: &ScanParams,
    ) -> Result<Option<Attack>> {
        let ScanParams::OutboundRequest {
            request, operation, ..
        } = params
        else {
            return Ok(None);
        };
        let Some(context) = context else {
            return Ok(None);
        };

        // False-positive control: only requests already pointed at a
        // private/internal target are worth attributing to user input
        let Some(target_host) = request.uri.host_str() else {
            return Ok(None);
        };
        if !PrivateRangeClassifier::is_private_host(target_host) {
            return Ok(None);
        }

        let mut origins = vec![request.uri.clone()];
        if let Some(chain_origin) = context.redirect_chains().origin(&request.uri) {
            if !origins.contains(&chain_origin) {
                origins.push(chain_origin);
            }
        }

        // First payload in context order wins
        for payload in context.payloads() {
            let candidates = Self::input_candidates(&payload.value, request.uri.scheme());
            for origin in &origins {
                for candidate in &candidates {
                    if Self::candidate_matches(origin, candidate) {
                        return Ok(Some(Attack::new(
                            sink.name(),
                            sink.operation(),
                            operation,
                            AttackKind::Ssrf {
                                input: payload.clone(),
                                request: request.clone(),
                            },
                        )));
                    }
                }
            }
        }

        Ok(None)
    }
}
