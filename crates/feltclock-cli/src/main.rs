use clap::{Parser, Subcommand};

mod commands;
mod sound;

#[derive(Parser)]
#[command(name = "feltclock", version, about = "Poker tournament clock")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the clock loop, printing display/audio intents as JSON lines
    Run(commands::run::RunArgs),
    /// Print the normalized level/break table
    Schedule(commands::schedule::ScheduleArgs),
    /// Compute the prize breakdown for a field size
    Payouts(commands::payouts::PayoutsArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Schedule(args) => commands::schedule::run(args),
        Commands::Payouts(args) => commands::payouts::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
