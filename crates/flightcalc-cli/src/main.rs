use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightcalc_cli::GlobalOptions;

mod commands;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Unit-checked velocity, distance, and fuel calculator"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print new velocity, new distance, and remaining fuel (default).
    Report,
    /// Print only the new velocity.
    Velocity,
    /// Print only the new distance.
    Distance,
    /// Print only the remaining fuel.
    Fuel,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Report) {
        Command::Report => commands::report::handle_report(&cli.global),
        Command::Velocity => commands::quantity::handle_velocity(&cli.global),
        Command::Distance => commands::quantity::handle_distance(&cli.global),
        Command::Fuel => commands::quantity::handle_fuel(&cli.global),
    }
}

fn init_tracing() {
    // stdout carries results only; diagnostics go to stderr.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
