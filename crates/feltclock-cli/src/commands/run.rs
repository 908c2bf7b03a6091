use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::Args;
use feltclock_core::clock::SystemClock;
use feltclock_core::events::{AudioCue, ClockUpdate};
use feltclock_core::format::{format_compact, format_duration};
use feltclock_core::{Controller, Cursor, Tournament};
use serde::Serialize;

use crate::sound::SoundGate;

#[derive(Args)]
pub struct RunArgs {
    /// Tournament structure file (TOML)
    pub file: PathBuf,
    /// Start at this block index instead of the first
    #[arg(long)]
    pub from_block: Option<usize>,
    /// Poll interval in milliseconds
    #[arg(long, default_value_t = 100)]
    pub interval_ms: u64,
    /// Drop all audio cues instead of forwarding them
    #[arg(long)]
    pub muted: bool,
    /// Exit after this many emitted updates (for scripting)
    #[arg(long)]
    pub max_updates: Option<u64>,
}

/// A forwarded sound request, printed alongside the clock updates.
#[derive(Serialize)]
struct SoundEmit {
    r#type: &'static str,
    cue: AudioCue,
    at: DateTime<Utc>,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tournament = Tournament::load(&args.file)?;
    let schedule = tournament.schedule.clone();

    eprintln!(
        "{}: {} blocks, {} scheduled",
        schedule.title,
        schedule.len(),
        format_duration(schedule.total_duration())
    );
    let field = tournament.field;
    if field.entries > 0 {
        eprintln!(
            "field: {} of {} remaining, {} chips in play",
            field.remaining(),
            field.entries,
            format_compact(field.total_chips(&schedule.stacks))
        );
    }

    let mut controller = Controller::new(Cursor::new(schedule.clone(), SystemClock));
    let mut gate = SoundGate::new(SystemClock);

    if let Some(index) = args.from_block {
        // Position before starting; play() prints the first refresh.
        let _ = controller.jump_to_block(index);
    }

    let mut emitted = 0u64;
    let total = schedule.total_duration() as f64;

    if let Some(update) = controller.play() {
        emitted += 1;
        emit(&update, &mut gate, args.muted)?;
    }
    loop {
        if args.max_updates.is_some_and(|max| emitted >= max) {
            break;
        }
        if controller.cursor().elapsed_seconds() >= total {
            break;
        }
        thread::sleep(Duration::from_millis(args.interval_ms));
        if let Some(update) = controller.update(false) {
            emitted += 1;
            emit(&update, &mut gate, args.muted)?;
        }
    }
    Ok(())
}

fn emit(
    update: &ClockUpdate,
    gate: &mut SoundGate<SystemClock>,
    muted: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(update)?);
    if muted {
        return Ok(());
    }
    for &cue in &update.audio {
        if gate.permit() {
            let sound = SoundEmit { r#type: "sound", cue, at: Utc::now() };
            println!("{}", serde_json::to_string(&sound)?);
        }
    }
    Ok(())
}
