//! Text-generation client
//!
//! Calls Cohere's generate endpoint for outfit suggestions. Callers decide
//! how to degrade on failure; this client just reports it.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::GatewayError;

/// Cohere text-generation client
#[derive(Clone)]
pub struct CohereClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    generations: Vec<Generation>,
}

#[derive(Debug, Deserialize)]
struct Generation {
    text: String,
}

impl CohereClient {
    /// Create a new CohereClient against the production endpoint
    pub fn new(api_key: String, model: String, max_tokens: u32) -> Self {
        Self::with_base_url(
            api_key,
            model,
            max_tokens,
            "https://api.cohere.ai".to_string(),
        )
    }

    /// Create a new CohereClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, model: String, max_tokens: u32, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            model,
            max_tokens,
        }
    }

    /// Generate text for a prompt and return it trimmed
    pub async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let response = self
            .client
            .post(format!("{}/v1/generate", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                max_tokens: self.max_tokens,
            })
            .send()
            .await
            .map_err(|e| GatewayError(format!("Generation request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GatewayError(format!(
                "Text-generation provider returned {}: {}",
                status, body
            )));
        }

        let data: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GatewayError(format!("Failed to parse generation response: {}", e)))?;

        data.generations
            .first()
            .map(|g| g.text.trim().to_string())
            .ok_or_else(|| GatewayError("Provider returned no generations".to_string()))
    }
}
