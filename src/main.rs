use clap::Parser;
use colmath::Settings;
use colmath::cli::commands::{init, solve};
use colmath::cli::{Cli, Commands};
use colmath::logging;

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        Settings::default()
    });

    // CLI overrides
    if let Some(input) = cli.input {
        config.input = input;
    }

    logging::init_with_config(&config.logging);

    let result = match cli.command.unwrap_or(Commands::Solve) {
        Commands::Solve => solve::run(&config.input),
        Commands::Init { force } => init::run_init(force).map(|_| ()),
        Commands::Config => init::run_config(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
