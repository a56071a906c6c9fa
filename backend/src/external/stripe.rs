//! Stripe Checkout client
//!
//! Opens hosted checkout sessions for the fixed credit pack. Uses Stripe's
//! form-encoded API directly; any failure surfaces as a [`GatewayError`].

use reqwest::Client;
use serde::Deserialize;

use super::GatewayError;

/// The one product this service sells
const CREDIT_PACK_NAME: &str = "Weather App Credits (10 credits)";
/// Price in USD minor units ($5.00)
const CREDIT_PACK_UNIT_AMOUNT: u32 = 500;

/// Stripe Checkout client
#[derive(Clone)]
pub struct StripeClient {
    client: Client,
    secret_key: String,
    base_url: String,
    success_url: String,
    cancel_url: String,
}

/// Hosted checkout session, as returned by Stripe
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    /// Redirect URL for the hosted payment page
    pub url: String,
}

impl StripeClient {
    /// Create a new StripeClient against the production endpoint
    pub fn new(secret_key: String, success_url: String, cancel_url: String) -> Self {
        Self::with_base_url(
            secret_key,
            success_url,
            cancel_url,
            "https://api.stripe.com".to_string(),
        )
    }

    /// Create a new StripeClient with custom base URL (for testing)
    pub fn with_base_url(
        secret_key: String,
        success_url: String,
        cancel_url: String,
        base_url: String,
    ) -> Self {
        Self {
            client: Client::new(),
            secret_key,
            base_url,
            success_url,
            cancel_url,
        }
    }

    /// Open a one-time-payment checkout session for the credit pack and
    /// return it. Exactly one line item, quantity 1, USD.
    pub async fn create_checkout_session(&self) -> Result<CheckoutSession, GatewayError> {
        let unit_amount = CREDIT_PACK_UNIT_AMOUNT.to_string();
        let form: [(&str, &str); 8] = [
            ("payment_method_types[0]", "card"),
            ("line_items[0][price_data][currency]", "usd"),
            (
                "line_items[0][price_data][product_data][name]",
                CREDIT_PACK_NAME,
            ),
            ("line_items[0][price_data][unit_amount]", &unit_amount),
            ("line_items[0][quantity]", "1"),
            ("mode", "payment"),
            ("success_url", &self.success_url),
            ("cancel_url", &self.cancel_url),
        ];

        let response = self
            .client
            .post(format!("{}/v1/checkout/sessions", self.base_url))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| GatewayError(format!("Checkout request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GatewayError(format!(
                "Payments provider returned {}: {}",
                status, body
            )));
        }

        response
            .json::<CheckoutSession>()
            .await
            .map_err(|e| GatewayError(format!("Failed to parse checkout response: {}", e)))
    }
}
