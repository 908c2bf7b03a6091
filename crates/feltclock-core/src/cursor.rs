//! The cursor tracks how far into the schedule the session is.
//!
//! Position is an elapsed-seconds value derived from a wall-clock origin,
//! not an accumulated tick count, so it is immune to drift from irregular
//! polling. Pausing freezes the elapsed value; resuming rebases the origin
//! so the frozen value carries over exactly.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::clock::Clock;
use crate::schedule::{Schedule, TimeBlock};

#[derive(Debug, Clone)]
pub struct Cursor<C: Clock> {
    schedule: Arc<Schedule>,
    clock: C,
    block_index: usize,
    /// Wall-clock instant corresponding to elapsed == 0 for the current
    /// play segment. Only meaningful while running.
    origin: DateTime<Utc>,
    /// Elapsed time held while paused.
    frozen: Duration,
    running: bool,
}

impl<C: Clock> Cursor<C> {
    /// Create a paused cursor at the start of the schedule.
    pub fn new(schedule: Arc<Schedule>, clock: C) -> Self {
        let origin = clock.now();
        Self {
            schedule,
            clock,
            block_index: 0,
            origin,
            frozen: Duration::zero(),
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn schedule(&self) -> &Arc<Schedule> {
        &self.schedule
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn block_index(&self) -> usize {
        self.block_index
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_block(&self) -> Option<&TimeBlock> {
        self.schedule.block(self.block_index)
    }

    pub fn next_level(&self) -> Option<&TimeBlock> {
        self.schedule.next_level_after(self.block_index)
    }

    pub fn next_break(&self) -> Option<&TimeBlock> {
        self.schedule.next_break_after(self.block_index)
    }

    /// Seconds into the schedule. Re-samples the clock while running,
    /// returns the frozen value while paused. Never negative.
    pub fn elapsed_seconds(&self) -> f64 {
        let elapsed = if self.running {
            self.clock.now() - self.origin
        } else {
            self.frozen
        };
        elapsed.num_milliseconds().max(0) as f64 / 1000.0
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Resume. The previously-frozen elapsed value is preserved exactly.
    pub fn play(&mut self) {
        if self.running {
            return;
        }
        self.origin = self.clock.now() - self.frozen;
        self.running = true;
    }

    /// Freeze elapsed time at its current value.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.frozen = self.clock.now() - self.origin;
        self.running = false;
    }

    /// Jump to a block, landing on its first second. The index clamps
    /// into range; prior elapsed state is discarded.
    pub fn goto_block(&mut self, index: usize) {
        let Some(last) = self.schedule.len().checked_sub(1) else {
            return;
        };
        self.block_index = index.min(last);
        let start = Duration::seconds(self.schedule.blocks()[self.block_index].start as i64);
        self.origin = self.clock.now() - start;
        self.frozen = start;
    }

    /// Jump to an absolute elapsed position. The block index resolves to
    /// the block containing that second, saturating to the last block
    /// past the schedule's end.
    pub fn goto_elapsed(&mut self, seconds: f64) {
        let target = Duration::milliseconds((seconds.max(0.0) * 1000.0).round() as i64);
        self.origin = self.clock.now() - target;
        self.frozen = target;

        let seconds = seconds.max(0.0);
        self.block_index = self.schedule.len().saturating_sub(1);
        for (i, block) in self.schedule.blocks().iter().enumerate() {
            if (block.end() as f64) > seconds {
                self.block_index = i;
                break;
            }
        }
    }

    /// Advance past the current block's end if elapsed time has reached
    /// it. Advances at most one block per call and saturates at the last
    /// block; a no-op while paused.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        let Some(end) = self.current_block().map(TimeBlock::end) else {
            return;
        };
        if self.elapsed_seconds() >= end as f64 {
            self.block_index = (self.block_index + 1).min(self.schedule.len() - 1);
        }
    }
}
