// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Vartija RASP Engine
 * In-process attack detection for protected operations
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod attack;
pub mod config;
pub mod context;
pub mod types;

// Sink & Scan protocol
pub mod sink;

// Scanner modules
pub mod scanners;

// Registry modules
pub mod registry;

// Enforcement boundary
pub mod enforce;

// Production error handling
pub mod errors;

pub use attack::{Attack, AttackKind};
pub use config::EngineConfig;
pub use context::Context;
pub use enforce::{verdict, BlockedAttack};
pub use errors::{EngineError, ScannerFailure};
pub use scanners::{ScanParams, Scanner};
pub use sink::{Reporter, Scan, Sink};
pub use types::{ConnectionInfo, OutboundRequest, Payload, PayloadSource, SqlDialect};
