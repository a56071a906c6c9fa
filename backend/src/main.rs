use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stylist_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stylist_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Weather Stylist Server");
    tracing::info!("Environment: {}", config.environment);

    let state = AppState::from_config(config);

    for (component, enabled) in [
        ("weather provider", state.weather.is_some()),
        ("identity provider", state.auth.is_some()),
        ("payments provider", state.stripe.is_some()),
        ("text-generation provider", state.cohere.is_some()),
    ] {
        if enabled {
            tracing::info!("{} configured", component);
        } else {
            tracing::warn!("{} not configured; its endpoints are disabled", component);
        }
    }

    let port = state.config.server.port;
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
