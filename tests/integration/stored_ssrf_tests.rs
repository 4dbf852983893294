// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Integration Tests for the Stored SSRF Scanner
 * Metadata deny-list matching with hostname allow-list
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use super::helpers::test_sink;
use std::sync::Arc;
use vartija_rasp::scanners::stored_ssrf::StoredSsrfScanner;
use vartija_rasp::{Attack, AttackKind, Context, EngineConfig, ScanParams};

fn scan(hostname: &str, addresses: &[&str], context: Option<&Context>) -> Option<Attack> {
    let config = EngineConfig::default();
    let sink = test_sink(
        "stored_ssrf_integration",
        "dns.lookup",
        vec![Arc::new(StoredSsrfScanner::new(
            config.trusted_metadata_hostnames,
        ))],
    );
    let params = ScanParams::HostnameResolution {
        hostname: hostname.to_string(),
        addresses: addresses.iter().map(|s| s.to_string()).collect(),
        operation: "resolve".to_string(),
    };
    sink.scan(context, &params).unwrap().into_attack()
}

#[test]
fn test_imds_address_flags_without_request_context() {
    // Background jobs have no active request; detection must still work
    let attack = scan("payload.example", &["169.254.169.254"], None).expect("not flagged");
    assert_eq!(attack.operation, "dns.lookup.resolve");
    match attack.kind {
        AttackKind::StoredSsrf { hostname, address } => {
            assert_eq!(hostname, "payload.example");
            assert_eq!(address, "169.254.169.254");
        }
        other => panic!("unexpected attack kind: {other:?}"),
    }
}

#[test]
fn test_google_metadata_hostname_allowed() {
    assert!(scan("metadata.google.internal", &["169.254.169.254"], None).is_none());
}

#[test]
fn test_flags_with_context_present_too() {
    let ctx = Context::new();
    assert!(scan("payload.example", &["169.254.169.254"], Some(&ctx)).is_some());
}

#[test]
fn test_custom_allow_list() {
    let sink = test_sink(
        "stored_ssrf_integration_custom",
        "dns.lookup",
        vec![Arc::new(StoredSsrfScanner::new(vec![
            "metadata.internal.corp".to_string(),
        ]))],
    );
    let params = ScanParams::HostnameResolution {
        hostname: "metadata.internal.corp".to_string(),
        addresses: vec!["169.254.169.254".to_string()],
        operation: "resolve".to_string(),
    };
    assert!(sink.scan(None, &params).unwrap().attack().is_none());

    // The default Google exemption is gone under a custom list
    let params = ScanParams::HostnameResolution {
        hostname: "metadata.google.internal".to_string(),
        addresses: vec!["169.254.169.254".to_string()],
        operation: "resolve".to_string(),
    };
    assert!(sink.scan(None, &params).unwrap().attack().is_some());
}

#[test]
fn test_private_but_non_metadata_addresses_clean() {
    assert!(scan("db.internal", &["10.0.0.12"], None).is_none());
    assert!(scan("cache.internal", &["192.168.4.2", "127.0.0.1"], None).is_none());
}

#[test]
fn test_normalized_ipv6_form_matches() {
    assert!(scan("sneaky.example", &["fd00:ec2:0:0:0:0:0:254"], None).is_some());
}
