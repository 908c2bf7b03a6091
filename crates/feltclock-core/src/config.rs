//! TOML tournament structure files.
//!
//! The file describes the whole event: title, money, stacks, the
//! level/break sequence, and payout brackets. Numeric fields follow the
//! fault-tolerant policy: out-of-range values clamp instead of failing
//! the load. The one hard requirement is at least one timeblock; a
//! session cannot start against an empty schedule.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::field::FieldCounts;
use crate::schedule::{BlockKind, PayoutGroup, RakeConfig, RakeKind, Schedule, StackSizes};

/// A loaded tournament: the immutable schedule plus the initial field
/// tallies the file declared.
#[derive(Debug, Clone)]
pub struct Tournament {
    pub schedule: Arc<Schedule>,
    pub field: FieldCounts,
}

impl Tournament {
    /// Load a structure file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a structure file already in memory.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: StructureFile = toml::from_str(content)?;
        file.build()
    }
}

#[derive(Debug, Deserialize)]
struct StructureFile {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    buy_in: i64,
    #[serde(default)]
    rebuy: i64,
    #[serde(default)]
    rake: Option<RakeSection>,
    #[serde(default)]
    players: PlayersSection,
    #[serde(default)]
    blocks: Vec<BlockEntry>,
    #[serde(default)]
    payouts: Vec<PayoutEntry>,
}

#[derive(Debug, Deserialize)]
struct RakeSection {
    kind: RakeKind,
    #[serde(default)]
    amount: f64,
}

#[derive(Debug, Deserialize)]
struct PlayersSection {
    #[serde(default = "default_start_stack")]
    start_stack: i64,
    #[serde(default)]
    addon_stack: i64,
    #[serde(default)]
    rebuy_stack: i64,
    #[serde(default)]
    start: i64,
    #[serde(default)]
    out: i64,
    #[serde(default)]
    addons: i64,
    #[serde(default)]
    rebuys: i64,
    #[serde(default)]
    paid: i64,
}

impl Default for PlayersSection {
    fn default() -> Self {
        Self {
            start_stack: default_start_stack(),
            addon_stack: 0,
            rebuy_stack: 0,
            start: 0,
            out: 0,
            addons: 0,
            rebuys: 0,
            paid: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BlockEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    minutes: i64,
    #[serde(default = "default_block_kind")]
    kind: BlockKind,
}

#[derive(Debug, Deserialize)]
struct PayoutEntry {
    #[serde(default)]
    max_players: i64,
    #[serde(default)]
    fractions: Vec<f64>,
}

fn default_title() -> String {
    "Tournament".to_string()
}

fn default_start_stack() -> i64 {
    10_000
}

fn default_block_kind() -> BlockKind {
    BlockKind::Level
}

fn count(v: i64) -> u32 {
    v.clamp(0, u32::MAX as i64) as u32
}

fn amount(v: i64) -> u64 {
    v.max(0) as u64
}

impl StructureFile {
    fn build(self) -> Result<Tournament, ConfigError> {
        if self.blocks.is_empty() {
            return Err(ConfigError::EmptySchedule);
        }

        let mut schedule = Schedule::new(self.title);
        schedule.buy_in = amount(self.buy_in);
        schedule.rebuy = amount(self.rebuy);
        schedule.stacks = StackSizes {
            start: amount(self.players.start_stack),
            addon: amount(self.players.addon_stack),
            rebuy: amount(self.players.rebuy_stack),
        };
        schedule.rake = self.rake.map(|r| RakeConfig {
            kind: r.kind,
            amount: match r.kind {
                RakeKind::Flat => r.amount.max(0.0),
                // Percentage rake is a fraction of the buy-in.
                RakeKind::PerPlayerPercentage => r.amount.clamp(0.0, 1.0),
            },
        });
        schedule.payouts = self
            .payouts
            .into_iter()
            .map(|p| {
                let mut fractions = [0.0; 6];
                for (slot, value) in fractions.iter_mut().zip(p.fractions) {
                    if value.is_finite() && value > 0.0 {
                        *slot = value;
                    }
                }
                PayoutGroup {
                    max_players: count(p.max_players),
                    fractions,
                }
            })
            .collect();

        for block in self.blocks {
            match block.kind {
                BlockKind::Level => schedule.add_level(block.name, block.minutes),
                BlockKind::Break => schedule.add_break(block.name, block.minutes),
            }
        }

        let field = FieldCounts {
            entries: count(self.players.start),
            eliminated: count(self.players.out),
            addons: count(self.players.addons),
            rebuys: count(self.players.rebuys),
            paid: count(self.players.paid),
        };

        Ok(Tournament {
            schedule: Arc::new(schedule),
            field,
        })
    }
}
