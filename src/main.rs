use anyhow::Context;
use clap::Parser;
use fuel_prices::utils::{logger, validation::Validate};
use fuel_prices::{CliConfig, Engine, FuelPipeline, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fuel-prices CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline =
        FuelPipeline::new(storage, config).context("failed to build the fetch pipeline")?;
    let engine = Engine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "✅ Run completed: {} fetched, {} estimated",
                report.fetched,
                report.estimated
            );
            println!("✅ Fuel prices updated successfully!");
            println!("📁 Output saved to: {}", report.output_path);
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
