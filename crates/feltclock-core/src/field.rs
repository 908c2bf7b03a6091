//! Player-field tallies.
//!
//! The front end adjusts these one click at a time as entries,
//! eliminations, rebuys, and add-ons come in, then recomputes payouts
//! from the new counts; chip aggregates derive against the schedule's
//! stack sizes and feed the compact-number display.

use serde::{Deserialize, Serialize};

use crate::schedule::StackSizes;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCounts {
    pub entries: u32,
    pub eliminated: u32,
    pub addons: u32,
    pub rebuys: u32,
    /// Paid finishing places already settled.
    pub paid: u32,
}

impl FieldCounts {
    // ── Adjustments ──────────────────────────────────────────────────
    // One method per +/- control. Decrements exist to take back a
    // mistaken click and saturate at zero.

    pub fn enter(&mut self) {
        self.entries = self.entries.saturating_add(1);
    }

    pub fn undo_entry(&mut self) {
        self.entries = self.entries.saturating_sub(1);
    }

    pub fn eliminate(&mut self) {
        self.eliminated = self.eliminated.saturating_add(1);
    }

    pub fn undo_elimination(&mut self) {
        self.eliminated = self.eliminated.saturating_sub(1);
    }

    pub fn add_on(&mut self) {
        self.addons = self.addons.saturating_add(1);
    }

    pub fn undo_addon(&mut self) {
        self.addons = self.addons.saturating_sub(1);
    }

    pub fn rebuy(&mut self) {
        self.rebuys = self.rebuys.saturating_add(1);
    }

    pub fn undo_rebuy(&mut self) {
        self.rebuys = self.rebuys.saturating_sub(1);
    }

    pub fn pay(&mut self) {
        self.paid = self.paid.saturating_add(1);
    }

    pub fn undo_payout(&mut self) {
        self.paid = self.paid.saturating_sub(1);
    }

    // ── Aggregates ───────────────────────────────────────────────────

    /// Players still in their seats.
    pub fn remaining(&self) -> u32 {
        self.entries.saturating_sub(self.eliminated)
    }

    /// Chips in play across the whole field.
    pub fn total_chips(&self, stacks: &StackSizes) -> u64 {
        self.entries as u64 * stacks.start
            + self.addons as u64 * stacks.addon
            + self.rebuys as u64 * stacks.rebuy
    }

    /// Average stack among remaining players; `None` once the field is
    /// empty.
    pub fn average_stack(&self, stacks: &StackSizes) -> Option<u64> {
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }
        Some(self.total_chips(stacks) / remaining as u64)
    }
}
