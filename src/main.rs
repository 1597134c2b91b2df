use clap::Parser;

use shopdesk::cli::Cli;
use shopdesk::config::Config;
use shopdesk::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let runtime = tokio::runtime::Runtime::new()?;
    ui::run(config, runtime.handle().clone())
}
