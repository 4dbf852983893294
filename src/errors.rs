// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Vartija Error Types
 * Production-ready error handling with thiserror
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use thiserror::Error;

/// Engine error type covering registration-time and verifier failures.
/// Registration errors fail fast at configuration time, never at scan time.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A sink with this name is already registered
    #[error("Sink '{0}' is already registered")]
    DuplicateSink(String),

    /// A sink was registered without any scanners
    #[error("Sink '{0}' has an empty scanner list")]
    EmptyScannerList(String),

    /// The external SQL verifier could not be reached or returned garbage
    #[error("SQL verifier error: {0}")]
    Verifier(String),
}

/// One captured scanner failure, recorded on the Scan without aborting it
#[derive(Debug)]
pub struct ScannerFailure {
    /// Name of the scanner that failed
    pub scanner: &'static str,
    /// The underlying error
    pub error: anyhow::Error,
}

impl std::fmt::Display for ScannerFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "scanner '{}' failed: {}", self.scanner, self.error)
    }
}
