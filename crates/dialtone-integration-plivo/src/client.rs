//! Plivo REST API client
//!
//! Thin wrapper over the account endpoints this service consumes:
//! account lookup (credential verification) and call placement.

use std::time::Duration;

use dialtone::domain::errors::TelephonyError;
use dialtone::ports::provider::PlacedCall;
use reqwest::Client;
use tracing::debug;

use crate::config::PlivoConfig;

/// Bounded timeout for all provider calls; no automatic retry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the Plivo API
pub struct PlivoClient {
    config: PlivoConfig,
    http: Client,
}

impl PlivoClient {
    /// Create a client with its own HTTP connection pool
    pub fn new(config: PlivoConfig) -> Result<Self, TelephonyError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TelephonyError::ExternalService(e.to_string()))?;
        Ok(Self::with_http(config, http))
    }

    /// Create a client reusing an existing HTTP connection pool
    pub fn with_http(config: PlivoConfig, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &PlivoConfig {
        &self.config
    }

    /// GET the account resource with basic auth. Anything but 200 means
    /// the credentials are bad.
    pub async fn verify_account(&self) -> Result<(), TelephonyError> {
        let url = self.config.account_endpoint(None);
        debug!(url = %url, "Verifying Plivo account credentials");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.config.auth_id, Some(&self.config.auth_token))
            .send()
            .await
            .map_err(|e| TelephonyError::ExternalService(format!("Plivo API error: {}", e)))?;

        if response.status() != reqwest::StatusCode::OK {
            let reason = response
                .status()
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string();
            return Err(TelephonyError::invalid_credentials(format!(
                "Please enter a valid Plivo Auth ID & Auth Token: {}",
                reason
            )));
        }

        Ok(())
    }

    /// POST a call-placement request. The provider-assigned id comes back
    /// as `request_uuid` in the response body.
    pub async fn create_call(
        &self,
        from: &str,
        to: &str,
        answer_url: &str,
    ) -> Result<PlacedCall, TelephonyError> {
        let url = self.config.account_endpoint(Some("Call/"));
        debug!(url = %url, to = %to, "Placing Plivo call");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.auth_id, Some(&self.config.auth_token))
            .form(&[("from", from), ("to", to), ("answer_url", answer_url)])
            .send()
            .await
            .map_err(|e| TelephonyError::ExternalService(format!("Plivo API error: {}", e)))?;

        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(|e| e.as_str())
                .map(String::from)
                .unwrap_or_else(|| format!("Plivo rejected the call ({})", status));
            return Err(TelephonyError::Provider(message));
        }

        let call_id = body
            .get("request_uuid")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        Ok(PlacedCall { call_id, raw: body })
    }
}
