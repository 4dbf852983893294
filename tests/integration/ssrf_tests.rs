// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Integration Tests for the SSRF Scanner
 * Pre-flight detection, redirect chains and private range classification
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use super::helpers::test_sink;
use std::sync::Arc;
use url::Url;
use vartija_rasp::scanners::redirect_chains::RedirectChains;
use vartija_rasp::scanners::ssrf::SsrfScanner;
use vartija_rasp::{Attack, AttackKind, ConnectionInfo, Context, OutboundRequest, Payload, PayloadSource, ScanParams};

fn scan_request(uri: &str, ctx: &Context) -> Option<Attack> {
    let sink = test_sink(
        "ssrf_integration",
        "http.request",
        vec![Arc::new(SsrfScanner::new())],
    );
    let request = OutboundRequest::new("GET", Url::parse(uri).unwrap());
    let connection = Some(ConnectionInfo {
        host: request.host().unwrap_or_default().to_string(),
        port: request.port().unwrap_or_default(),
    });
    let params = ScanParams::OutboundRequest {
        request,
        connection,
        operation: "fetch".to_string(),
    };
    sink.scan(Some(ctx), &params).unwrap().into_attack()
}

fn ctx_with(value: &str) -> Context {
    Context::with_payloads(vec![Payload::new(value, PayloadSource::Query, "url")])
}

#[test]
fn test_localhost_payload_flags() {
    let attack = scan_request("http://localhost/x", &ctx_with("localhost")).expect("not flagged");
    match attack.kind {
        AttackKind::Ssrf { input, request } => {
            assert_eq!(input.value, "localhost");
            assert_eq!(request.host(), Some("localhost"));
        }
        other => panic!("unexpected attack kind: {other:?}"),
    }
}

#[test]
fn test_implicit_default_port_vs_pinned_port() {
    // Input pins 8080, request rides the implicit default 80
    assert!(scan_request("http://localhost/x", &ctx_with("localhost:8080")).is_none());
    // Request explicitly on 8080 matches the pinned port
    assert!(scan_request("http://localhost:8080/x", &ctx_with("localhost:8080")).is_some());
}

#[test]
fn test_public_targets_never_scanned() {
    assert!(scan_request("https://api.example.com/v1", &ctx_with("api.example.com")).is_none());
}

#[test]
fn test_metadata_target_flags() {
    let attack = scan_request(
        "http://169.254.169.254/latest/meta-data/iam",
        &ctx_with("169.254.169.254"),
    );
    assert!(attack.is_some());
}

#[test]
fn test_https_prefixed_candidate_matches() {
    assert!(scan_request("https://10.1.2.3/internal", &ctx_with("10.1.2.3")).is_some());
}

#[test]
fn test_redirect_chain_origin_matches_input() {
    // The attacker-supplied URL redirected internally; the final hop no
    // longer textually contains the input, but its chain origin does.
    let mut ctx = ctx_with("http://127.0.0.1:8080/start");
    ctx.redirect_chains_mut().record(
        Url::parse("http://127.0.0.1:8080/start").unwrap(),
        Url::parse("http://127.0.0.1:8080/hop").unwrap(),
    );
    ctx.redirect_chains_mut().record(
        Url::parse("http://127.0.0.1:8080/hop").unwrap(),
        Url::parse("http://127.0.0.1:8080/final").unwrap(),
    );
    assert!(scan_request("http://127.0.0.1:8080/final", &ctx).is_some());
}

#[test]
fn test_redirect_chains_resolve_to_earliest_source() {
    let mut chains = RedirectChains::new();
    let a = Url::parse("http://a.example/1").unwrap();
    let b = Url::parse("http://b.example/2").unwrap();
    let c = Url::parse("http://c.example/3").unwrap();
    chains.record(a.clone(), b.clone());
    chains.record(b, c.clone());
    assert_eq!(chains.origin(&c), Some(a));
}

#[test]
fn test_cyclic_redirect_chain_terminates() {
    let mut chains = RedirectChains::new();
    let a = Url::parse("http://a.example/").unwrap();
    let b = Url::parse("http://b.example/").unwrap();
    chains.record(a.clone(), b.clone());
    chains.record(b.clone(), a.clone());
    assert!(chains.origin(&a).is_some());
    assert!(chains.origin(&b).is_some());
}

#[test]
fn test_no_payloads_no_attack() {
    assert!(scan_request("http://localhost/x", &Context::new()).is_none());
}
