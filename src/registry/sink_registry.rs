// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Sink Registry
 * Process-wide, insert-only registry of protection sinks keyed by name
 * © 2026 Bountyy Oy
 */

use crate::errors::EngineError;
use crate::sink::Sink;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

static SINKS: Lazy<RwLock<HashMap<String, Arc<Sink>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Register a sink at startup. Duplicate names fail fast; there is no way
/// to remove or replace a sink once registered.
pub fn register(sink: Sink) -> Result<Arc<Sink>, EngineError> {
    let mut sinks = SINKS.write();
    if sinks.contains_key(sink.name()) {
        return Err(EngineError::DuplicateSink(sink.name().to_string()));
    }
    info!("Registered sink '{}' ({})", sink.name(), sink.operation());
    let sink = Arc::new(sink);
    sinks.insert(sink.name().to_string(), Arc::clone(&sink));
    Ok(sink)
}

/// Look up a registered sink by name
pub fn get(name: &str) -> Option<Arc<Sink>> {
    SINKS.read().get(name).cloned()
}

/// Names of all registered sinks
pub fn names() -> Vec<String> {
    let mut names: Vec<String> = SINKS.read().keys().cloned().collect();
    names.sort();
    names
}
