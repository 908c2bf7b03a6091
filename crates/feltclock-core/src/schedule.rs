//! The tournament schedule: an ordered, contiguous run of timeblocks
//! plus the money configuration (buy-in, rake, payout brackets, stacks).
//!
//! A schedule is built once by the loader and never mutated afterwards;
//! the session shares it read-only (`Arc`) with the cursor and the payout
//! calculator.

use serde::{Deserialize, Serialize};

/// Whether a timeblock is playing time or a pause in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Level,
    Break,
}

impl BlockKind {
    pub fn is_break(self) -> bool {
        self == BlockKind::Break
    }
}

/// One contiguous labeled duration in the schedule.
///
/// `start` is the offset in seconds from the beginning of the tournament;
/// blocks tile the timeline with no gaps or overlaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub start: u64,
    pub duration: u64,
    pub name: String,
    pub kind: BlockKind,
}

impl TimeBlock {
    /// Offset in seconds at which the block ends (== next block's start).
    pub fn end(&self) -> u64 {
        self.start + self.duration
    }
}

/// A player-count bracket with prize fractions for up to six places.
///
/// Brackets are tried in load order; the first whose `max_players` covers
/// the field is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutGroup {
    pub max_players: u32,
    pub fractions: [f64; 6],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RakeKind {
    /// A fixed amount withheld per player.
    Flat,
    /// A fraction of each player's buy-in withheld. The amount is a
    /// fraction in [0, 1]: 0.05 means 5%.
    PerPlayerPercentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RakeConfig {
    pub kind: RakeKind,
    pub amount: f64,
}

/// Chip amounts handed out for the initial buy-in, add-ons, and rebuys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSizes {
    pub start: u64,
    pub addon: u64,
    pub rebuy: u64,
}

/// Immutable-after-load tournament structure.
///
/// The block list is private so the contiguity invariant cannot be
/// broken from outside: blocks are only appended via [`Schedule::add_level`]
/// and [`Schedule::add_break`], which compute each new block's offset from
/// the previous block's end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    pub title: String,
    pub buy_in: u64,
    pub rebuy: u64,
    pub stacks: StackSizes,
    pub rake: Option<RakeConfig>,
    pub payouts: Vec<PayoutGroup>,
    blocks: Vec<TimeBlock>,
}

impl Schedule {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Append a playing level. Non-positive minutes coerce to a
    /// zero-duration block rather than an error.
    pub fn add_level(&mut self, name: impl Into<String>, minutes: i64) {
        self.push_block(name.into(), minutes, BlockKind::Level);
    }

    /// Append a break.
    pub fn add_break(&mut self, name: impl Into<String>, minutes: i64) {
        self.push_block(name.into(), minutes, BlockKind::Break);
    }

    fn push_block(&mut self, name: String, minutes: i64, kind: BlockKind) {
        let start = self.blocks.last().map(TimeBlock::end).unwrap_or(0);
        self.blocks.push(TimeBlock {
            start,
            duration: minutes.max(0) as u64 * 60,
            name,
            kind,
        });
    }

    pub fn blocks(&self) -> &[TimeBlock] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&TimeBlock> {
        self.blocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total scheduled seconds across all blocks.
    pub fn total_duration(&self) -> u64 {
        self.blocks.last().map(TimeBlock::end).unwrap_or(0)
    }

    /// First playing level strictly after `index`, if any.
    pub fn next_level_after(&self, index: usize) -> Option<&TimeBlock> {
        self.blocks
            .iter()
            .skip(index + 1)
            .find(|b| !b.kind.is_break())
    }

    /// First break strictly after `index`, if any.
    pub fn next_break_after(&self, index: usize) -> Option<&TimeBlock> {
        self.blocks
            .iter()
            .skip(index + 1)
            .find(|b| b.kind.is_break())
    }

    /// First payout bracket large enough for the given field, or `None`
    /// when no bracket covers it.
    pub fn payout_group(&self, player_count: u32) -> Option<&PayoutGroup> {
        self.payouts.iter().find(|g| g.max_players >= player_count)
    }
}
