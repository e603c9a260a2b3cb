use clap::Parser;
use small_levels::utils::logger;
use small_levels::{CliConfig, ConsoleSink, DemoEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-levels demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut sink = ConsoleSink::new();
    let engine = DemoEngine::new(config);

    match engine.run(&mut sink) {
        Ok(()) => {
            tracing::info!("Demo run completed");
        }
        Err(e) => {
            tracing::error!("Demo run failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
