//! Tick-driven clock controller.
//!
//! The controller is polled by an external timer far more often than
//! once per second (~10 Hz target) but emits at most one update per
//! elapsed whole second. Frequent sampling keeps the on-second flip
//! feeling immediate; the whole-second gate bounds downstream display
//! and audio work to human-perceptible granularity.

use crate::clock::Clock;
use crate::cursor::Cursor;
use crate::events::{AudioCue, ClockUpdate, DisplayState, UpcomingBlock};
use crate::format::format_duration;

/// Seconds before a block's end at which the warning cues fire.
const EARLY_WARNING_SECS: i64 = 60;
const FINAL_WARNING_SECS: i64 = 10;

#[derive(Debug)]
pub struct Controller<C: Clock> {
    cursor: Cursor<C>,
    running: bool,
    /// Whole second of the previous emission; sentinel so the first
    /// update always emits.
    last_second: i64,
    /// Start offset of the block seen at the previous emission.
    last_block_start: i64,
}

impl<C: Clock> Controller<C> {
    pub fn new(cursor: Cursor<C>) -> Self {
        Self {
            cursor,
            running: false,
            last_second: i64::MAX,
            last_block_start: i64::MIN,
        }
    }

    pub fn cursor(&self) -> &Cursor<C> {
        &self.cursor
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start the clock. Returns the immediate forced refresh so the
    /// display is never stale; `None` if already running.
    pub fn play(&mut self) -> Option<ClockUpdate> {
        if self.running {
            return None;
        }
        self.running = true;
        self.cursor.play();
        self.update(true)
    }

    /// Stop the clock. No further emissions until play or a forced
    /// refresh.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.cursor.pause();
    }

    /// Jump to a block (clamped) and refresh immediately. Valid whether
    /// paused or running; does not change the running state.
    pub fn jump_to_block(&mut self, index: usize) -> Option<ClockUpdate> {
        self.cursor.goto_block(index);
        self.update(true)
    }

    /// Jump to an absolute elapsed position and refresh immediately.
    pub fn jump_to_elapsed(&mut self, seconds: f64) -> Option<ClockUpdate> {
        self.cursor.goto_elapsed(seconds);
        self.update(true)
    }

    /// Poll the clock. Emits when the elapsed whole second has changed
    /// since the previous emission (or when forced); returns `None` on
    /// the idle and suppressed paths.
    pub fn update(&mut self, force: bool) -> Option<ClockUpdate> {
        if !self.running && !force {
            return None;
        }
        self.cursor.tick();

        let now = self.cursor.elapsed_seconds();
        let now_second = now.floor() as i64;
        if now_second == self.last_second && !force {
            return None;
        }

        let current = self.cursor.current_block()?;
        let start = current.start as i64;
        let end = current.end() as i64;

        let display = DisplayState {
            level_title: current.name.clone(),
            level_time: format_duration(whole_seconds_until(current.end(), now)),
            next_level: self.cursor.next_level().map(|b| UpcomingBlock {
                title: b.name.clone(),
                time_until: format_duration(whole_seconds_until(b.start, now)),
            }),
            next_break: self.cursor.next_break().map(|b| UpcomingBlock {
                title: b.name.clone(),
                time_until: format_duration(whole_seconds_until(b.start, now)),
            }),
            warning: now_second >= end - FINAL_WARNING_SECS,
        };

        let mut audio = Vec::new();
        if start > self.last_block_start {
            audio.push(AudioCue::Transition);
        } else if current.duration > 60 {
            for threshold in [end - EARLY_WARNING_SECS, end - FINAL_WARNING_SECS] {
                // A range test, not equality: a delayed poll past the
                // exact second must still fire, and exactly once.
                if self.last_second < threshold && now_second >= threshold {
                    audio.push(AudioCue::Warning);
                }
            }
        }

        let update = ClockUpdate {
            block_index: self.cursor.block_index(),
            display,
            audio,
            at: self.cursor.clock().now(),
        };

        self.last_second = now_second;
        self.last_block_start = start;
        Some(update)
    }
}

/// Whole seconds from `now` until the target offset, rounded to the
/// nearest second and clamped at zero.
fn whole_seconds_until(target: u64, now: f64) -> u64 {
    let remaining = target as f64 - now + 0.5;
    if remaining <= 0.0 {
        0
    } else {
        remaining as u64
    }
}
