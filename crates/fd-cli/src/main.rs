//! CLI frontend for fairdice: provably fair non-transitive dice.

mod commands;
mod logging;

use std::process;

use clap::{Parser, Subcommand};

use commands::DiceArgs;

#[derive(Parser)]
#[command(
    name = "fairdice",
    about = "fairdice — provably fair non-transitive dice",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game against the computer
    Play {
        #[command(flatten)]
        dice: DiceArgs,

        /// Skip the offer to show the probability table
        #[arg(long)]
        no_help: bool,

        /// Seed for the computer's die choice (fair draws always use OS entropy)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the table of pairwise win probabilities
    Table {
        #[command(flatten)]
        dice: DiceArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check a revealed key and value against a published HMAC
    Verify {
        /// The HMAC published before your input (64 hex characters)
        #[arg(long)]
        hmac: String,

        /// The revealed key (64 hex characters)
        #[arg(long)]
        key: String,

        /// The revealed computer value
        #[arg(long)]
        value: u32,

        /// The range of the draw, to also check the value was in bounds
        #[arg(long)]
        range: Option<u32>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            dice,
            no_help,
            seed,
        } => commands::play::run(&dice, !no_help, seed),
        Commands::Table { dice, json } => commands::table::run(&dice, json),
        Commands::Verify {
            hmac,
            key,
            value,
            range,
        } => commands::verify::run(&hmac, &key, value, range),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
