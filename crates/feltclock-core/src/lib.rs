//! # Feltclock Core Library
//!
//! Core engine for a poker tournament clock: an ordered schedule of
//! timed levels and breaks, displayed and audibly signaled in real time,
//! with pause/resume, manual navigation, and live payout recomputation
//! as the field changes.
//!
//! ## Architecture
//!
//! - **Schedule**: immutable-after-load timeblock sequence plus money
//!   configuration, built by the TOML loader
//! - **Cursor**: elapsed-seconds position within the schedule, sampled
//!   from a wall clock so pauses and irregular polling cannot drift it
//! - **Controller**: polled at high frequency by the caller, emits
//!   display/audio intents at most once per elapsed whole second
//! - **Payout**: stateless prize-pool arithmetic over the current field
//!
//! The core never touches I/O devices. It consumes a structure file and
//! a clock source and emits [`ClockUpdate`] values; rendering and audio
//! playback belong to whatever front end polls it.

pub mod clock;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod events;
pub mod field;
pub mod format;
pub mod payout;
pub mod schedule;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Tournament;
pub use controller::Controller;
pub use cursor::Cursor;
pub use error::ConfigError;
pub use events::{AudioCue, ClockUpdate, DisplayState, UpcomingBlock};
pub use field::FieldCounts;
pub use payout::{breakdown, Prize, PrizeBreakdown};
pub use schedule::{BlockKind, PayoutGroup, RakeConfig, RakeKind, Schedule, StackSizes, TimeBlock};
