use std::path::PathBuf;

use clap::Args;
use feltclock_core::{breakdown, Tournament};

#[derive(Args)]
pub struct PayoutsArgs {
    /// Tournament structure file (TOML)
    pub file: PathBuf,
    /// Field size; defaults to the entry count from the structure file
    #[arg(long)]
    pub players: Option<u32>,
    /// Players already eliminated (affects the chop value)
    #[arg(long, default_value_t = 0)]
    pub busted: u32,
}

pub fn run(args: PayoutsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tournament = Tournament::load(&args.file)?;
    let players = args.players.unwrap_or(tournament.field.entries);

    match breakdown(&tournament.schedule, players, args.busted) {
        Some(prizes) => println!("{}", serde_json::to_string_pretty(&prizes)?),
        None => println!("no payout bracket covers {players} players"),
    }
    Ok(())
}
