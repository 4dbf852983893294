// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Stored SSRF Scanner
 * Flags hostname resolutions landing on cloud metadata addresses
 *
 * Defense-in-depth: runs on DNS lookups and raw socket connects, with or
 * without an active request, and does not require user input to appear in
 * the hostname. Stored attacker data (database rows, job queues) reaching
 * a metadata address is caught here.
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
use std::net::IpAddr;
use tracing::debug;

pub struct StoredSsrfScanner {
    trusted_hostnames: Vec<String>,
}

impl StoredSsrfScanner {
    /// `trusted_hostnames` lists known-legitimate metadata hostnames
    /// (e.g. `metadata.google.internal`) that are exempt from flagging
    pub fn new(trusted_hostnames: Vec<String>) -> Self {
        Self { trusted_hostnames }
    }

    fn trusted(&self, hostname: &str) -> bool {
        self.trusted_hostnames
            .iter()
            .any(|trusted| trusted.eq_ignore_ascii_case(hostname))
    }
}

impl Scanner for StoredSsrfScanner {
    fn name(&self) -> &'static str {
        "stored_ssrf"
    }

    fn scan(
        &self,
        sink: &Sink,
        _context: Option<&Context>,
        params: &ScanParams,
    ) -> Result<Option<Attack>> {
        let ScanParams::HostnameResolution {
            hostname,
            addresses,
            operation,
        } = params
        else {
            return Ok(None);
        };

        if self.trusted(hostname) {
            debug!("Hostname '{}' is on the metadata allow-list", hostname);
            return Ok(None);
        }

        for address in addresses {
            let Ok(ip) = address.parse::<IpAddr>() else {
                continue;
            };
            if PrivateRangeClassifier::is_metadata_address(&ip) {
                return Ok(Some(Attack::new(
                    sink.name(),
                    sink.operation(),
                    operation,
                    AttackKind::StoredSsrf {
                        hostname: hostname.clone(),
                        address: address.clone(),
                    },
                )));
            }
        }

        Ok(None)
    }
}
