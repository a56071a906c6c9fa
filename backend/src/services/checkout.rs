//! Checkout service
//!
//! Thin wrapper over the payments client: opens a hosted session for the
//! fixed credit pack and returns its redirect URL.

use crate::error::AppResult;
use crate::external::StripeClient;

/// Checkout gateway service
#[derive(Clone)]
pub struct CheckoutService {
    gateway: StripeClient,
}

impl CheckoutService {
    /// Create a new CheckoutService instance
    pub fn new(gateway: StripeClient) -> Self {
        Self { gateway }
    }

    /// Open a checkout session and return the hosted page's URL
    pub async fn create_session(&self) -> AppResult<String> {
        let session = self.gateway.create_checkout_session().await?;
        tracing::info!("Opened checkout session {}", session.id);
        Ok(session.url)
    }
}
