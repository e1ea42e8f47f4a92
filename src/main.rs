use anyhow::Context;
use clap::Parser;
use rentcat::cli::Cli;
use rentcat::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.resolve_config().context("Failed to load configuration")?;
    rentcat::ui::run(&config, cli.category.clone())
}
