use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod tui;

#[derive(Parser)]
#[command(name = "pomodoro", version, about = "Focus/break Pomodoro timer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive timer
    Start(commands::start::StartArgs),
    /// Run the timer without a clock and print what happens
    Simulate(commands::simulate::SimulateArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Start(args) => commands::start::run(args),
        Commands::Simulate(args) => commands::simulate::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
