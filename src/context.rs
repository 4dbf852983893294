// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Request Context
 * Per-request scratch state: extracted payloads, redirect chains,
 * protection toggle
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::scanners::redirect_chains::RedirectChains;
use crate::types::Payload;
use std::collections::HashMap;

/// Request-scoped state handed to every scan. Created fresh per request by
/// the instrumentation layer, never shared across requests, so it needs no
/// internal locking. The payload-extraction collaborator fills `payloads`
/// in request order before the first protected call runs.
#[derive(Debug, Default)]
pub struct Context {
    payloads: Vec<Payload>,
    protection_disabled: bool,
    redirect_chains: RedirectChains,
    scratch: HashMap<String, serde_json::Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payloads(payloads: Vec<Payload>) -> Self {
        Self {
            payloads,
            ..Self::default()
        }
    }

    /// Ordered list of attacker-influenceable values for this request
    pub fn payloads(&self) -> &[Payload] {
        &self.payloads
    }

    pub fn push_payload(&mut self, payload: Payload) {
        self.payloads.push(payload);
    }

    /// True when the control plane has disabled protection for the current
    /// route or client. A disabled context short-circuits `Sink::scan`
    /// before any scanner runs.
    pub fn protection_disabled(&self) -> bool {
        self.protection_disabled
    }

    pub fn set_protection_disabled(&mut self, disabled: bool) {
        self.protection_disabled = disabled;
    }

    pub fn redirect_chains(&self) -> &RedirectChains {
        &self.redirect_chains
    }

    pub fn redirect_chains_mut(&mut self) -> &mut RedirectChains {
        &mut self.redirect_chains
    }

    /// Per-request scratch store for instrumentation adapters
    pub fn scratch(&self, key: &str) -> Option<&serde_json::Value> {
        self.scratch.get(key)
    }

    pub fn set_scratch(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.scratch.insert(key.into(), value);
    }
}
