// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Sink & Scan Protocol
 * Per-integration entry points and the synchronous scan loop
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::attack::Attack;
use crate::context::Context;
use crate::errors::{EngineError, ScannerFailure};
use crate::scanners::{ScanParams, Scanner};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Callback consuming every completed Scan. Must not panic; its own
/// failure handling is the reporting layer's concern.
pub type Reporter = Box<dyn Fn(&Scan) + Send + Sync>;

/// A named, per-integration entry point owning an ordered list of scanners
/// and a reporter callback. Configured once at registration, read-only at
/// scan time.
pub struct Sink {
    name: String,
    operation: String,
    scanners: Vec<Arc<dyn Scanner>>,
    reporter: Reporter,
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("name", &self.name)
            .field("operation", &self.operation)
            .field(
                "scanners",
                &self.scanners.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl Sink {
    /// Build a sink. An empty scanner list is a configuration error and
    /// fails here, never at scan time.
    pub fn new(
        name: impl Into<String>,
        operation: impl Into<String>,
        scanners: Vec<Arc<dyn Scanner>>,
        reporter: Reporter,
    ) -> Result<Self, EngineError> {
        let name = name.into();
        if scanners.is_empty() {
            return Err(EngineError::EmptyScannerList(name));
        }
        Ok(Self {
            name,
            operation: operation.into(),
            scanners,
            reporter,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Run the registered scanners in order against one protected call.
    ///
    /// Returns `None` without producing a Scan when the context reports
    /// protection disabled. Otherwise every scanner runs until one returns
    /// an attack (first match wins, later scanners are skipped); a scanner
    /// error is captured and iteration continues. Elapsed time is measured
    /// around the whole loop. The reporter sees the completed Scan exactly
    /// once, then the caller owns it.
    pub fn scan(&self, context: Option<&Context>, params: &ScanParams) -> Option<Scan> {
        if context.is_some_and(Context::protection_disabled) {
            debug!("Protection disabled, skipping scan for sink '{}'", self.name);
            return None;
        }

        let mut attack = None;
        let mut errors = Vec::new();
        let started = Instant::now();

        for scanner in &self.scanners {
            match scanner.scan(self, context, params) {
                Ok(Some(found)) => {
                    debug!(
                        "Scanner '{}' flagged operation '{}' on sink '{}'",
                        scanner.name(),
                        params.operation(),
                        self.name
                    );
                    attack = Some(found);
                    break;
                }
                Ok(None) => {}
                Err(error) => {
                    debug!(
                        "Scanner '{}' failed on sink '{}': {:#}",
                        scanner.name(),
                        self.name,
                        error
                    );
                    errors.push(ScannerFailure {
                        scanner: scanner.name(),
                        error,
                    });
                }
            }
        }

        let scan = Scan {
            sink: self.name.clone(),
            attack,
            duration: started.elapsed(),
            errors,
            performed: true,
        };
        (self.reporter)(&scan);
        Some(scan)
    }
}

/// Record of one `Sink::scan` invocation. Mutable only while the scan
/// performs; the engine hands it to the reporter and then to the caller
/// without retaining it.
#[derive(Debug)]
pub struct Scan {
    sink: String,
    attack: Option<Attack>,
    duration: Duration,
    errors: Vec<ScannerFailure>,
    performed: bool,
}

impl Scan {
    /// Name of the sink that produced this scan
    pub fn sink(&self) -> &str {
        &self.sink
    }

    pub fn attack(&self) -> Option<&Attack> {
        self.attack.as_ref()
    }

    pub fn attack_mut(&mut self) -> Option<&mut Attack> {
        self.attack.as_mut()
    }

    /// Take ownership of the detected attack, if any
    pub fn into_attack(self) -> Option<Attack> {
        self.attack
    }

    /// Wall time of the whole scanner loop, measured with a monotonic clock
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Scanner failures captured during the loop
    pub fn errors(&self) -> &[ScannerFailure] {
        &self.errors
    }

    pub fn performed(&self) -> bool {
        self.performed
    }
}
