// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Path Traversal Scanner
 * Detects user input escaping the intended base directory of a file access
 *
 * Two independent modes, either flags the call:
 * - Syntactic: the input carries a directory-traversal sequence
 * - Structural: the input is an absolute path that genuinely prefixes the
 *   resolved path at a segment boundary and names a specific sub-path
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::attack::{Attack, AttackKind};
use crate::context::Context;
use crate::scanners::{ScanParams, Scanner};
use crate::sink::Sink;
use anyhow::Result;

const SEPARATORS: [char; 2] = ['/', '\\'];

pub struct PathTraversalScanner {
    check_path_start: bool,
}

impl PathTraversalScanner {
    pub fn new() -> Self {
        Self {
            check_path_start: true,
        }
    }

    /// Disable the structural absolute-prefix check, keeping only the
    /// syntactic one. Used by adapters whose API takes absolute paths by
    /// contract.
    pub fn without_path_start_check() -> Self {
        Self {
            check_path_start: false,
        }
    }
}

impl Default for PathTraversalScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Core decision: could `input` make `path` escape its intended base
/// directory? Inputs of length <= 1 or an empty path never match; equal
/// relative strings never match.
pub fn vulnerable(path: &str, input: &str, check_path_start: bool) -> bool {
    if path.is_empty() || input.len() <= 1 {
        return false;
    }
    if contains_traversal_sequence(input) {
        return true;
    }
    if check_path_start && is_dangerous_path_start(path, input) {
        return true;
    }
    false
}

/// `../` or `..\` anywhere in the input, which also covers `./../` forms
fn contains_traversal_sequence(input: &str) -> bool {
    input.contains("../") || input.contains("..\\")
}

/// Unix root, Windows drive root, or UNC root
fn is_rooted(input: &str) -> bool {
    if input.starts_with('/') || input.starts_with('\\') {
        return true;
    }
    let bytes = input.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'/' || bytes[2] == b'\\')
}

/// Non-empty path segments, separator-agnostic. A Windows drive prefix
/// counts as the root, not a segment.
fn segments(path: &str) -> Vec<&str> {
    let path = if path.len() >= 2 && path.as_bytes()[1] == b':' {
        &path[2..]
    } else {
        path
    };
    path.split(SEPARATORS).filter(|s| !s.is_empty()).collect()
}

/// An absolute input is dangerous only when it identifies a specific file
/// or sub-path (two or more segments after trimming trailing separators)
/// and is a genuine prefix of the resolved path at a segment boundary.
/// A bare top-level directory name like `/etc` is legitimate far too often
/// to flag.
fn is_dangerous_path_start(path: &str, input: &str) -> bool {
    if !is_rooted(input) {
        return false;
    }
    let trimmed = input.trim_end_matches(SEPARATORS);
    if segments(trimmed).len() < 2 {
        return false;
    }
    starts_at_segment_boundary(path, trimmed)
}

fn starts_at_segment_boundary(path: &str, prefix: &str) -> bool {
    if !path.starts_with(prefix) {
        return false;
    }
    match path[prefix.len()..].chars().next() {
        None => true,
        Some(next) => SEPARATORS.contains(&next),
    }
}

impl Scanner for PathTraversalScanner {
    fn name(&self) -> &'static str {
        "path_traversal"
    }

    fn scan(
        &self,
        sink: &Sink,
        context: Option<&Context>,
        params: &ScanParams,
    ) -> Result<Option<Attack>> {
        let ScanParams::FileAccess { path, operation } = params else {
            return Ok(None);
        };
        let Some(context) = context else {
            return Ok(None);
        };

        for payload in context.payloads() {
            if vulnerable(path, &payload.value, self.check_path_start) {
                return Ok(Some(Attack::new(
                    sink.name(),
                    sink.operation(),
                    operation,
                    AttackKind::PathTraversal {
                        path: path.clone(),
                        input: payload.clone(),
                    },
                )));
            }
        }

        Ok(None)
    }
}
