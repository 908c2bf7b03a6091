use std::path::PathBuf;

use clap::Args;
use feltclock_core::format::{format_compact, format_duration};
use feltclock_core::schedule::BlockKind;
use feltclock_core::Tournament;

#[derive(Args)]
pub struct ScheduleArgs {
    /// Tournament structure file (TOML)
    pub file: PathBuf,
}

pub fn run(args: ScheduleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tournament = Tournament::load(&args.file)?;
    let schedule = &tournament.schedule;

    println!("{}", schedule.title);
    println!("{:>3}  {:<24} {:<6} {:>9} {:>9}", "#", "name", "kind", "starts", "length");
    for (i, block) in schedule.blocks().iter().enumerate() {
        let kind = match block.kind {
            BlockKind::Level => "level",
            BlockKind::Break => "break",
        };
        println!(
            "{:>3}  {:<24} {:<6} {:>9} {:>9}",
            i,
            block.name,
            kind,
            format_duration(block.start),
            format_duration(block.duration)
        );
    }
    println!("total {}", format_duration(schedule.total_duration()));
    if schedule.buy_in > 0 {
        println!("buy-in {}, rebuy {}", schedule.buy_in, schedule.rebuy);
    }

    let field = tournament.field;
    if field.entries > 0 {
        println!(
            "field: {} of {} remaining, {} chips in play",
            field.remaining(),
            field.entries,
            format_compact(field.total_chips(&schedule.stacks))
        );
        if let Some(average) = field.average_stack(&schedule.stacks) {
            println!("average stack: {}", format_compact(average));
        }
        if field.paid > 0 {
            println!("paid places settled: {}", field.paid);
        }
    }
    Ok(())
}
