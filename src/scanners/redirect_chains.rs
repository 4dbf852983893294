// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Redirect Chain Tracking
 * Request-scoped map from redirect destinations back to their sources
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;
use url::Url;

/// Multimap of redirect destination -> sources (FIFO per destination),
/// owned by the request Context. `origin` walks backward to the earliest
/// recorded source so SSRF detection can compare user input against the
/// URI the application originally requested, not the hop it landed on.
#[derive(Debug, Default)]
pub struct RedirectChains {
    chains: HashMap<Url, VecDeque<Url>>,
}

impl RedirectChains {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observed redirect hop
    pub fn record(&mut self, source: Url, destination: Url) {
        debug!("Recording redirect {} -> {}", source, destination);
        self.chains.entry(destination).or_default().push_back(source);
    }

    /// Record a redirect from an HTTP response, resolving a relative
    /// `Location` header against the request URI. Non-3xx statuses and
    /// unparseable locations are ignored.
    pub fn record_response(&mut self, request_uri: &Url, status: u16, location: &str) {
        if !(300..400).contains(&status) {
            return;
        }
        match request_uri.join(location) {
            Ok(destination) => self.record(request_uri.clone(), destination),
            Err(e) => debug!("Ignoring unparseable Location '{}': {}", location, e),
        }
    }

    /// Resolve a URI transitively to the earliest known redirect source.
    /// Returns `None` when the URI is not a known redirect destination.
    /// A URI revisited during the walk terminates the walk and the current
    /// position is returned rather than looping.
    pub fn origin(&self, uri: &Url) -> Option<Url> {
        let mut visited: HashSet<&Url> = HashSet::new();
        let mut current = uri;
        let mut hops = 0usize;
        while let Some(source) = self.chains.get(current).and_then(VecDeque::front) {
            if !visited.insert(source) {
                break;
            }
            current = source;
            hops += 1;
        }
        (hops > 0).then(|| current.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }
}
