//! Audio-cue rate limiting.
//!
//! The core's cues are fire-and-forget; the dropping policy lives here,
//! on the collaborator side. After a sound is forwarded, further cues
//! are dropped for a dead-time window so back-to-back requests do not
//! stack.

use chrono::{DateTime, Duration, Utc};
use feltclock_core::clock::Clock;

const DEAD_TIME_SECS: i64 = 10;

pub struct SoundGate<C: Clock> {
    clock: C,
    last_play: Option<DateTime<Utc>>,
}

impl<C: Clock> SoundGate<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, last_play: None }
    }

    /// Whether a cue arriving now should be forwarded to the player.
    pub fn permit(&mut self) -> bool {
        let now = self.clock.now();
        let allowed = self
            .last_play
            .map(|last| now - last >= Duration::seconds(DEAD_TIME_SECS))
            .unwrap_or(true);
        if allowed {
            self.last_play = Some(now);
        }
        allowed
    }
}
