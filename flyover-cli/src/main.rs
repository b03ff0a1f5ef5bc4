mod config;
mod logging;
mod output;

use anyhow::Result;
use flyover_core::FlyoverClient;

use config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Optional config file path as the only argument
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = CliConfig::load_or_default(&config_path)?;

    logging::init_logging(&config.log_level);

    tracing::info!("Flyover starting...");
    tracing::debug!("Using config from {}", config_path);

    let client = FlyoverClient::new(config.endpoints());
    let passes = client.next_passes().await?;

    println!("{}", output::format_passes(&passes));

    Ok(())
}
