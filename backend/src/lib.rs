//! Weather Stylist - Backend Server
//!
//! A thin service that proxies a weather provider, gates lookups behind a
//! per-session credit allowance, and delegates payments, identity, and outfit
//! text generation to external providers.

use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{CohereClient, StripeClient, SupabaseAuthClient, WeatherClient};
use services::session::SessionStore;

/// Application state shared across handlers
///
/// Each provider client is `None` when its configuration section is absent;
/// the matching endpoints answer 503 and everything else keeps working.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<SessionStore>,
    pub weather: Option<WeatherClient>,
    pub auth: Option<SupabaseAuthClient>,
    pub stripe: Option<StripeClient>,
    pub cohere: Option<CohereClient>,
}

impl AppState {
    /// Build state and provider clients from configuration
    pub fn from_config(config: Config) -> Self {
        let weather = config.weather.as_ref().map(|w| {
            WeatherClient::with_base_url(
                w.api_key.clone(),
                w.default_city.clone(),
                w.api_endpoint.clone(),
            )
        });

        let auth = config
            .auth
            .as_ref()
            .map(|a| SupabaseAuthClient::new(a.project_url.clone(), a.api_key.clone()));

        let stripe = config.stripe.as_ref().map(|s| {
            StripeClient::with_base_url(
                s.secret_key.clone(),
                s.success_url.clone(),
                s.cancel_url.clone(),
                s.api_endpoint.clone(),
            )
        });

        let cohere = config.cohere.as_ref().map(|c| {
            CohereClient::with_base_url(
                c.api_key.clone(),
                c.model.clone(),
                c.max_tokens,
                c.api_endpoint.clone(),
            )
        });

        Self {
            config: Arc::new(config),
            sessions: Arc::new(SessionStore::new()),
            weather,
            auth,
            stripe,
            cohere,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .merge(routes::service_routes(state.clone()))
        .nest("/api/v1", routes::api_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello from Weather Stylist!" }))
}
