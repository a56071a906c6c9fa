//! Identity provider client
//!
//! Talks to a Supabase-style GoTrue API. The provider owns the whole account
//! lifecycle; this client only forwards credentials and tokens and converts
//! provider failures into [`GatewayError`]s carrying the provider's message.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::GatewayError;

/// Identity provider client
#[derive(Clone)]
pub struct SupabaseAuthClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct PasswordBody<'a> {
    password: &'a str,
}

/// Provider reply to a successful signup or login
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}

/// Provider-side account record
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl SupabaseAuthClient {
    /// Create a new client for the given project
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Register a new account
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, GatewayError> {
        let response = self
            .client
            .post(format!("{}/auth/v1/signup", self.base_url))
            .header("apikey", &self.api_key)
            .json(&CredentialsBody { email, password })
            .send()
            .await
            .map_err(|e| GatewayError(format!("Signup request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(provider_error("Signup failed", response).await);
        }

        response
            .json::<AuthSession>()
            .await
            .map_err(|e| GatewayError(format!("Failed to parse signup response: {}", e)))
    }

    /// Exchange credentials for a provider session
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, GatewayError> {
        let response = self
            .client
            .post(format!("{}/auth/v1/token", self.base_url))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&CredentialsBody { email, password })
            .send()
            .await
            .map_err(|e| GatewayError(format!("Login request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(provider_error("Login failed", response).await);
        }

        response
            .json::<AuthSession>()
            .await
            .map_err(|e| GatewayError(format!("Failed to parse login response: {}", e)))
    }

    /// Change the password of the account behind `user_token`
    pub async fn update_password(
        &self,
        user_token: &str,
        new_password: &str,
    ) -> Result<(), GatewayError> {
        let response = self
            .client
            .put(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(user_token)
            .json(&PasswordBody {
                password: new_password,
            })
            .send()
            .await
            .map_err(|e| GatewayError(format!("Password update request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(provider_error("Password update failed", response).await);
        }

        Ok(())
    }

    /// Delete the account with the given provider user id
    pub async fn delete_user(&self, user_id: &str) -> Result<(), GatewayError> {
        let response = self
            .client
            .delete(format!("{}/auth/v1/admin/users/{}", self.base_url, user_id))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| GatewayError(format!("Account deletion request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(provider_error("Account deletion failed", response).await);
        }

        Ok(())
    }
}

// GoTrue error bodies are inconsistent across endpoints; try the known
// message fields before falling back to the raw body.
async fn provider_error(context: &str, response: reqwest::Response) -> GatewayError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            ["error_description", "msg", "message"]
                .iter()
                .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(str::to_string))
        })
        .unwrap_or(body);

    GatewayError(format!("{} ({}): {}", context, status, message))
}
