use anyhow::Context;
use clap::Parser;
use counterview::cli::Cli;
use counterview::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config =
        Config::read_from(&cli.config_path()).context("Failed to load configuration")?;
    // Overrides go in before validation so a flag can fix a bad file value.
    cli.apply(&mut config);
    config.validate()?;

    counterview::logging::init_tracing(&config)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting counterview");

    counterview::ui::run(&config)
}
