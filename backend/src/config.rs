//! Configuration management for the Weather Stylist service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WST_ prefix
//!
//! Provider sections are optional. A missing section disables that provider's
//! endpoints without taking down the rest of the service.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather provider configuration
    pub weather: Option<WeatherConfig>,

    /// Identity provider configuration
    pub auth: Option<AuthConfig>,

    /// Payments provider configuration
    pub stripe: Option<StripeConfig>,

    /// Text-generation provider configuration
    pub cohere: Option<CohereConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API key
    pub api_key: String,

    /// Weather API endpoint
    #[serde(default = "default_weather_endpoint")]
    pub api_endpoint: String,

    /// City used when a lookup arrives without one
    #[serde(default = "default_city")]
    pub default_city: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Identity provider project URL
    pub project_url: String,

    /// Identity provider API key (service role)
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StripeConfig {
    /// Stripe secret key
    pub secret_key: String,

    /// Stripe API endpoint
    #[serde(default = "default_stripe_endpoint")]
    pub api_endpoint: String,

    /// Redirect target after a completed payment
    #[serde(default = "default_redirect_url")]
    pub success_url: String,

    /// Redirect target after an abandoned payment
    #[serde(default = "default_redirect_url")]
    pub cancel_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CohereConfig {
    /// Cohere API key
    pub api_key: String,

    /// Cohere API endpoint
    #[serde(default = "default_cohere_endpoint")]
    pub api_endpoint: String,

    /// Generation model
    #[serde(default = "default_cohere_model")]
    pub model: String,

    /// Maximum tokens generated per suggestion
    #[serde(default = "default_cohere_max_tokens")]
    pub max_tokens: u32,
}

fn default_weather_endpoint() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_city() -> String {
    "London".to_string()
}

fn default_stripe_endpoint() -> String {
    "https://api.stripe.com".to_string()
}

fn default_redirect_url() -> String {
    "http://localhost:8501".to_string()
}

fn default_cohere_endpoint() -> String {
    "https://api.cohere.ai".to_string()
}

fn default_cohere_model() -> String {
    "command-light".to_string()
}

fn default_cohere_max_tokens() -> u32 {
    100
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("WST_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WST_ prefix)
            .add_source(
                Environment::with_prefix("WST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}
