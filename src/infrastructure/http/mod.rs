pub mod client;
pub mod request_id;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{health, roast::RoastController, token_exchange::TokenExchangeController};
use crate::infrastructure::config::Config;

pub use client::build_http_client;
pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with all routes and layers configured
pub fn build_router(
    config: &Config,
    token_exchange_controller: Arc<TokenExchangeController>,
    roast_controller: Arc<RoastController>,
) -> Router {
    let token_exchange_routes = Router::new()
        .route("/api/token-exchange", post(TokenExchangeController::exchange))
        .with_state(token_exchange_controller);

    let roast_routes = Router::new()
        .route("/api/roast", post(RoastController::generate))
        .with_state(roast_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(token_exchange_routes)
        .merge(roast_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

/// Browser callers live on a separate origin
fn cors_layer(config: &Config) -> CorsLayer {
    let allow_origin = match &config.cors_allowed_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(origins)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    token_exchange_controller: Arc<TokenExchangeController>,
    roast_controller: Arc<RoastController>,
) -> anyhow::Result<()> {
    let app = build_router(&config, token_exchange_controller, roast_controller);

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
