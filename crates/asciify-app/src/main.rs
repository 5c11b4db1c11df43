use anyhow::Result;
use asciify_core::config::RasterConfig;
use clap::Parser;

mod cli;
mod pipeline;

use pipeline::Delivery;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config puis appliquer les overrides CLI
    let config = resolve_config(&cli)?;
    let request = pipeline::resolve_request(&cli, &config)?;
    log::debug!("Requête résolue : {request:?}");

    // 4. Convertir et livrer
    match pipeline::run(&request)? {
        Delivery::Inline(reply) => print!("{reply}"),
        Delivery::File(path) => println!("asciifiled: {}", path.display()),
    }
    Ok(())
}

/// Load `--config` if it exists, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<RasterConfig> {
    if cli.config.exists() {
        asciify_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(RasterConfig::default())
    }
}
