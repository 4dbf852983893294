// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Registry Module
 * Process-wide sink registration
 * © 2026 Bountyy Oy
 */

mod sink_registry;

pub use sink_registry::{get, names, register};
