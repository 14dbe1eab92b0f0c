use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use sound_roast_backend::controllers::{roast::RoastController, token_exchange::TokenExchangeController};
use sound_roast_backend::domain::roast::{RoastService, RoastSettings};
use sound_roast_backend::domain::token_exchange::TokenExchangeService;
use sound_roast_backend::infrastructure::ai::GeminiClient;
use sound_roast_backend::infrastructure::config::{Config, LogFormat};
use sound_roast_backend::infrastructure::http::{build_http_client, start_http_server};
use sound_roast_backend::infrastructure::oauth::SpotifyOAuthClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration; a missing credential ends the process here
    let config = Config::from_env().context("failed to load configuration")?;

    init_logging(&config);

    tracing::info!(
        "Starting Sound Roast Backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        environment = ?config.environment,
        gemini_model = %config.gemini_model,
        upstream_timeout_secs = config.upstream_timeout.as_secs(),
        "Configuration loaded"
    );

    let config = Arc::new(config);
    let http_client = build_http_client(config.upstream_timeout)
        .context("failed to build outbound HTTP client")?;

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate provider clients
    tracing::info!("Instantiating provider clients...");
    let spotify_client = Arc::new(SpotifyOAuthClient::new(
        config.spotify_client_id.clone(),
        config.spotify_client_secret.clone(),
        config.spotify_token_url.clone(),
        http_client.clone(),
    ));
    let gemini_client = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_api_base_url.clone(),
        config.gemini_model.clone(),
        http_client,
    ));

    // 2. Instantiate services (inject clients)
    tracing::info!("Instantiating services...");
    let token_exchange_service = Arc::new(TokenExchangeService::new(spotify_client));
    let roast_service = Arc::new(RoastService::new(
        gemini_client,
        RoastSettings {
            system_instruction: config.roast_system_prompt.clone(),
            temperature: config.roast_temperature,
        },
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let token_exchange_controller = Arc::new(TokenExchangeController::new(token_exchange_service));
    let roast_controller = Arc::new(RoastController::new(roast_service));

    start_http_server(config, token_exchange_controller, roast_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "sound_roast_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "sound_roast_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
