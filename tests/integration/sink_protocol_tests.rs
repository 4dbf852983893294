// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Integration Tests for the Sink & Scan protocol
 * Registration, short-circuiting, error tolerance, reporting
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use super::helpers::{counting_reporter, test_sink, TestVerifier};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use vartija_rasp::scanners::path_traversal::PathTraversalScanner;
use vartija_rasp::scanners::sql_injection::SqlInjectionScanner;
use vartija_rasp::scanners::ssrf::SsrfScanner;
use vartija_rasp::{registry, Context, EngineError, Payload, PayloadSource, ScanParams, Sink, SqlDialect};

fn sql_params(query: &str) -> ScanParams {
    ScanParams::SqlQuery {
        query: query.to_string(),
        dialect: SqlDialect::PostgreSql,
        operation: "exec".to_string(),
    }
}

#[test]
fn test_disabled_context_produces_no_scan_and_no_report() {
    let (reporter, reports) = counting_reporter();
    let sink = Sink::new(
        "protocol_disabled",
        "postgres.query",
        vec![Arc::new(SqlInjectionScanner::new(Arc::new(TestVerifier)))],
        reporter,
    )
    .unwrap();

    let mut ctx = Context::with_payloads(vec![Payload::new(
        "1' OR 1=1--",
        PayloadSource::Query,
        "id",
    )]);
    ctx.set_protection_disabled(true);

    let scan = sink.scan(Some(&ctx), &sql_params("SELECT * FROM t WHERE id='1' OR 1=1--'"));
    assert!(scan.is_none());
    assert_eq!(reports.load(Ordering::SeqCst), 0);
}

#[test]
fn test_reporter_invoked_exactly_once_per_scan() {
    let (reporter, reports) = counting_reporter();
    let sink = Sink::new(
        "protocol_reported",
        "postgres.query",
        vec![Arc::new(SqlInjectionScanner::new(Arc::new(TestVerifier)))],
        reporter,
    )
    .unwrap();

    let ctx = Context::with_payloads(vec![Payload::new("1", PayloadSource::Query, "id")]);
    let scan = sink.scan(Some(&ctx), &sql_params("SELECT * FROM t WHERE id=1"));
    assert!(scan.unwrap().attack().is_none());
    assert_eq!(reports.load(Ordering::SeqCst), 1);

    let scan = sink.scan(Some(&ctx), &sql_params("SELECT * FROM t WHERE id=1"));
    assert!(scan.is_some());
    assert_eq!(reports.load(Ordering::SeqCst), 2);
}

#[test]
fn test_mismatched_params_are_clean_for_other_scanners() {
    // A SQL sink handed file-access params reports no attack
    let sink = test_sink(
        "protocol_mismatch",
        "postgres.query",
        vec![Arc::new(SqlInjectionScanner::new(Arc::new(TestVerifier)))],
    );
    let ctx = Context::with_payloads(vec![Payload::new("../../x", PayloadSource::Query, "p")]);
    let scan = sink
        .scan(
            Some(&ctx),
            &ScanParams::FileAccess {
                path: "../../x".to_string(),
                operation: "open".to_string(),
            },
        )
        .unwrap();
    assert!(scan.attack().is_none());
    assert!(scan.errors().is_empty());
}

#[test]
fn test_multi_scanner_sink_first_match_wins() {
    // SSRF scanner registered ahead of path traversal; SSRF params match first
    let sink = test_sink(
        "protocol_multi",
        "http.request",
        vec![
            Arc::new(SsrfScanner::new()),
            Arc::new(PathTraversalScanner::new()),
        ],
    );
    let ctx = Context::with_payloads(vec![Payload::new(
        "localhost",
        PayloadSource::Query,
        "url",
    )]);
    let params = ScanParams::OutboundRequest {
        request: vartija_rasp::OutboundRequest::new(
            "GET",
            url::Url::parse("http://localhost/x").unwrap(),
        ),
        connection: None,
        operation: "fetch".to_string(),
    };
    let scan = sink.scan(Some(&ctx), &params).unwrap();
    let attack = scan.attack().expect("SSRF not flagged");
    assert_eq!(attack.operation, "http.request.fetch");
}

#[test]
fn test_scan_duration_is_measured() {
    let sink = test_sink(
        "protocol_duration",
        "postgres.query",
        vec![Arc::new(SqlInjectionScanner::new(Arc::new(TestVerifier)))],
    );
    let ctx = Context::with_payloads(vec![Payload::new("1", PayloadSource::Query, "id")]);
    let scan = sink
        .scan(Some(&ctx), &sql_params("SELECT * FROM t WHERE id=1"))
        .unwrap();
    assert!(scan.performed());
    assert!(scan.duration() < std::time::Duration::from_secs(1));
}

#[test]
fn test_registry_is_insert_only() {
    let sink = test_sink(
        "protocol_registry",
        "postgres.query",
        vec![Arc::new(SqlInjectionScanner::new(Arc::new(TestVerifier)))],
    );
    let registered = registry::register(sink).unwrap();
    assert_eq!(registered.name(), "protocol_registry");
    assert!(registry::get("protocol_registry").is_some());

    let duplicate = test_sink(
        "protocol_registry",
        "postgres.query",
        vec![Arc::new(SqlInjectionScanner::new(Arc::new(TestVerifier)))],
    );
    assert!(matches!(
        registry::register(duplicate),
        Err(EngineError::DuplicateSink(_))
    ));
}

#[test]
fn test_empty_scanner_list_is_a_configuration_error() {
    let err = Sink::new("protocol_empty", "fs.open", Vec::new(), Box::new(|_| {}));
    assert!(matches!(err, Err(EngineError::EmptyScannerList(_))));
}
