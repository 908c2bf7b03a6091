//! Prize-pool arithmetic.
//!
//! A stateless function of the schedule's money configuration and the
//! current field: recomputed from scratch whenever a player count
//! changes. All amounts are whole currency units; fractional math runs
//! in `f64` and floors back to integers.

use serde::{Deserialize, Serialize};

use crate::schedule::{RakeKind, Schedule};

/// A single paid finishing place. Places are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    pub place: u32,
    pub amount: u64,
}

/// The full prize picture for one field size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeBreakdown {
    pub players: u32,
    pub gross_pool: u64,
    pub rake: u64,
    pub net_pool: u64,
    /// Paid places, zero-fraction places omitted.
    pub prizes: Vec<Prize>,
    /// Equal split of the net pool among still-active players.
    pub chop: u64,
}

/// Compute the prize breakdown for a field of `players`, of whom
/// `busted` have been eliminated. Returns `None` when no payout bracket
/// covers the field; the caller renders a placeholder instead of
/// attempting arithmetic.
pub fn breakdown(schedule: &Schedule, players: u32, busted: u32) -> Option<PrizeBreakdown> {
    let group = schedule.payout_group(players)?;

    let gross_pool = players as u64 * schedule.buy_in;
    let rake = match schedule.rake {
        Some(r) => {
            let amount = match r.kind {
                RakeKind::Flat => players as f64 * r.amount,
                RakeKind::PerPlayerPercentage => {
                    players as f64 * schedule.buy_in as f64 * r.amount
                }
            };
            amount.max(0.0).floor() as u64
        }
        None => 0,
    };
    // A rake configuration can exceed the pool; the pool never goes
    // negative.
    let net_pool = gross_pool.saturating_sub(rake);

    let prizes = group
        .fractions
        .iter()
        .enumerate()
        .filter(|(_, &f)| f > 0.0)
        .map(|(i, &f)| Prize {
            place: i as u32 + 1,
            amount: (net_pool as f64 * f).floor() as u64,
        })
        .collect();

    let remaining = players.saturating_sub(busted).max(1);
    Some(PrizeBreakdown {
        players,
        gross_pool,
        rake,
        net_pool,
        prizes,
        chop: net_pool / remaining as u64,
    })
}
