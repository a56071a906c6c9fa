//! External API integrations

pub mod cohere;
pub mod stripe;
pub mod supabase;
pub mod weather;

pub use cohere::CohereClient;
pub use stripe::StripeClient;
pub use supabase::SupabaseAuthClient;
pub use weather::WeatherClient;

use thiserror::Error;

/// Failure reported by the payments, identity, or text-generation provider,
/// carrying the provider's message verbatim. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct GatewayError(pub String);
