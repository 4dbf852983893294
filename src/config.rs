// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Engine Configuration
 * Static engine settings supplied at startup
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use serde::{Deserialize, Serialize};

/// Engine-wide settings. Per-route and per-client protection toggles live
/// in the control plane and arrive through the request Context; this struct
/// only carries what the scanners need at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Known-legitimate metadata hostnames exempt from stored SSRF flagging
    #[serde(default = "default_trusted_metadata_hostnames")]
    pub trusted_metadata_hostnames: Vec<String>,

    /// Whether the path traversal scanner runs its structural
    /// absolute-prefix check in addition to the syntactic one
    #[serde(default = "default_check_path_start")]
    pub check_path_start: bool,
}

fn default_trusted_metadata_hostnames() -> Vec<String> {
    vec![
        "metadata.google.internal".to_string(),
        "metadata.goog".to_string(),
    ]
}

fn default_check_path_start() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trusted_metadata_hostnames: default_trusted_metadata_hostnames(),
            check_path_start: default_check_path_start(),
        }
    }
}
