use anyhow::Context;
use clap::Parser;
use investment_planner::utils::{logger, validation::Validate};
use investment_planner::{ApiServer, CliConfig, ConfigProvider, ServerSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定載入失敗時日誌尚未初始化，直接輸出到 stderr
    let settings = match ServerSettings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    logger::init_server_logger(&settings);

    tracing::info!("Starting investment-planner");
    if let Some(path) = &cli.config {
        tracing::info!("📁 Configuration loaded from: {}", path);
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let addr = settings.bind_address();
    ApiServer::new(settings)
        .run()
        .await
        .with_context(|| format!("server on {} failed", addr))?;

    Ok(())
}
