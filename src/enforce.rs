// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Enforcement Boundary
 * Converts scan results into explicit allow/block decisions
 *
 * The engine itself only returns data; adapters that block call `verdict`
 * with the policy decision and turn the error into their framework's
 * rejection path.
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::attack::Attack;
use crate::sink::Scan;
use thiserror::Error;

/// A detected attack the policy decided to block
#[derive(Debug, Error)]
#[error("{}", .attack.message())]
pub struct BlockedAttack {
    pub attack: Attack,
}

/// Apply the enforcement decision to a completed scan. When the scan found
/// an attack and `should_block` is set, the attack is marked blocked
/// (one-way) and returned as the error the adapter aborts with. In every
/// other case the host operation proceeds.
pub fn verdict(mut scan: Scan, should_block: bool) -> Result<(), BlockedAttack> {
    if !should_block {
        return Ok(());
    }
    if let Some(attack) = scan.attack_mut() {
        attack.will_be_blocked();
    }
    match scan.into_attack() {
        Some(attack) => Err(BlockedAttack { attack }),
        None => Ok(()),
    }
}
