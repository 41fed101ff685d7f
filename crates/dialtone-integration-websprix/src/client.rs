//! WebSprix PBX API client
//!
//! Covers the endpoints the CRM consumes: account verification (v1),
//! extension listing and IP phone settings (v2), and call placement.

use std::time::Duration;

use dialtone::domain::errors::TelephonyError;
use dialtone::ports::provider::PlacedCall;
use reqwest::Client;
use tracing::debug;

use crate::config::WebSprixConfig;

/// Bounded timeout for all provider calls; no automatic retry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the WebSprix PBX API
pub struct WebSprixClient {
    config: WebSprixConfig,
    http: Client,
}

impl WebSprixClient {
    /// Create a client with its own HTTP connection pool
    pub fn new(config: WebSprixConfig) -> Result<Self, TelephonyError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TelephonyError::ExternalService(e.to_string()))?;
        Ok(Self::with_http(config, http))
    }

    /// Create a client reusing an existing HTTP connection pool
    pub fn with_http(config: WebSprixConfig, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &WebSprixConfig {
        &self.config
    }

    /// Verify both credential sets: basic auth against the v1 account
    /// endpoint, and when v2 credentials are present, the api key against
    /// the extensions endpoint (which answers 200 or 201).
    pub async fn verify_account(&self) -> Result<(), TelephonyError> {
        let url = self.config.account_url();
        debug!(url = %url, "Verifying WebSprix account credentials");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.config.auth_id, Some(&self.config.auth_token))
            .send()
            .await
            .map_err(|e| TelephonyError::ExternalService(format!("WebSprix API error: {}", e)))?;

        if response.status() != reqwest::StatusCode::OK {
            let reason = response
                .status()
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string();
            return Err(TelephonyError::invalid_credentials(format!(
                "Please enter a valid WebSprix Auth ID & Auth Token: {}",
                reason
            )));
        }

        if self.config.has_organization() {
            self.verify_organization().await?;
        }

        Ok(())
    }

    async fn verify_organization(&self) -> Result<(), TelephonyError> {
        let url = self
            .config
            .extensions_url()
            .expect("checked by has_organization");
        debug!(url = %url, "Verifying WebSprix organization credentials");

        let response = self
            .v2_get(&url)
            .send()
            .await
            .map_err(|e| TelephonyError::ExternalService(format!("WebSprix API error: {}", e)))?;

        match response.status().as_u16() {
            200 | 201 => Ok(()),
            _ => Err(TelephonyError::invalid_credentials(
                "Invalid WebSprix Organization ID or API Key",
            )),
        }
    }

    /// IP phone settings for one extension
    pub async fn get_ip_info(
        &self,
        extension: &str,
    ) -> Result<Option<serde_json::Value>, TelephonyError> {
        let Some(url) = self.config.ip_info_url(extension) else {
            return Ok(None);
        };
        self.v2_fetch(&url).await
    }

    /// Extensions available as transfer targets
    pub async fn fetch_transfer_targets(
        &self,
    ) -> Result<Option<serde_json::Value>, TelephonyError> {
        let Some(url) = self.config.extensions_url() else {
            return Ok(None);
        };
        self.v2_fetch(&url).await
    }

    /// POST a call-placement request. The provider-assigned id comes back
    /// under `call.id` in the response body.
    pub async fn create_call(&self, from: &str, to: &str) -> Result<PlacedCall, TelephonyError> {
        let url = self.config.call_url();
        debug!(url = %url, to = %to, "Placing WebSprix call");

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "from": from, "to": to }))
            .send()
            .await
            .map_err(|e| TelephonyError::ExternalService(format!("WebSprix API error: {}", e)))?;

        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(|e| e.as_str())
                .map(String::from)
                .unwrap_or_else(|| format!("WebSprix rejected the call ({})", status));
            return Err(TelephonyError::Provider(message));
        }

        let call_id = body
            .pointer("/call/id")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        Ok(PlacedCall { call_id, raw: body })
    }

    fn v2_get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.http.get(url);
        if let Some(api_key) = &self.config.api_key {
            request = request.header("x-api-key", api_key);
        }
        request
    }

    async fn v2_fetch(&self, url: &str) -> Result<Option<serde_json::Value>, TelephonyError> {
        let response = self
            .v2_get(url)
            .send()
            .await
            .map_err(|e| TelephonyError::ExternalService(format!("WebSprix API error: {}", e)))?;

        match response.status().as_u16() {
            200 | 201 => {
                let body = response.json().await.map_err(|e| {
                    TelephonyError::ExternalService(format!("WebSprix API error: {}", e))
                })?;
                Ok(Some(body))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_a_client() {
        let client = WebSprixClient::new(WebSprixConfig::new("100", "token"));
        assert!(client.is_ok());
    }
}
