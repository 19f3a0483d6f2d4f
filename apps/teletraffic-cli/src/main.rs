use std::io;

use clap::Parser;
use tracing::error;

use teletraffic_cli::{run_command, CalculatorConfig, Cli, Commands};

fn main() {
    let filter = std::env::var("TELETRAFFIC_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match CalculatorConfig::new(cli.config.clone()) {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("failed to load config: {err}");
            std::process::exit(1);
        }
    };

    let command = cli.command.clone().unwrap_or(Commands::Menu);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run_command(&command, &config, cli.json, &mut out) {
        error!("{err}");
        std::process::exit(1);
    }
}
