//! Structured intents emitted by the controller.
//!
//! The core never touches a screen or a speaker; it hands these values
//! to whatever front end is polling it. The CLI serializes them as JSON
//! lines; a GUI would map them onto widgets and a mixer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fire-and-forget sound requests. Delivery is not guaranteed: the
/// audio collaborator may rate-limit or drop a cue that arrives too
/// soon after the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioCue {
    /// A level or break just started.
    Transition,
    /// The current block is about to end.
    Warning,
}

/// Name and formatted time-until for an upcoming block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBlock {
    pub title: String,
    pub time_until: String,
}

/// Everything the display surface needs for one refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub level_title: String,
    /// Time remaining in the current block, formatted.
    pub level_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_level: Option<UpcomingBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_break: Option<UpcomingBlock>,
    /// The current block ends within ten seconds; apply attention styling.
    pub warning: bool,
}

/// One per-second emission from the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockUpdate {
    pub block_index: usize,
    pub display: DisplayState,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audio: Vec<AudioCue>,
    pub at: DateTime<Utc>,
}
