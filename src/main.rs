use clap::Parser;
use ra_design_doc::core::ConfigProvider;
use ra_design_doc::utils::{logger, validation::Validate};
use ra_design_doc::{CliConfig, DesignDocEngine, RaClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ra-design-doc for game {}", config.game_id);
    tracing::debug!(
        "API {}, media {}, badge dir {}",
        config.api_base_url,
        config.media_base_url,
        config.badge_dir.display()
    );

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let game_id = config.game_id;
    let client = RaClient::new(config.api_base_url(), config.api_key())?;
    let engine = DesignDocEngine::new(client, config);

    match engine.run(game_id).await {
        Ok(doc) => {
            print!("{}", doc);
            tracing::info!("✅ Design doc for game {} written", game_id);
        }
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
