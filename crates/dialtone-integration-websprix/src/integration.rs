//! TelephonyProvider implementation for WebSprix

use std::collections::HashMap;

use async_trait::async_trait;
use dialtone::domain::entities::CallEvent;
use dialtone::domain::errors::TelephonyError;
use dialtone::domain::value_objects::Medium;
use dialtone::ports::provider::{PlacedCall, TelephonyProvider};

use crate::client::WebSprixClient;
use crate::config::WebSprixConfig;
use crate::webhook;

/// WebSprix integration implementing the TelephonyProvider trait
pub struct WebSprixIntegration {
    client: WebSprixClient,
}

impl WebSprixIntegration {
    /// Create a new WebSprix integration
    pub fn new(config: WebSprixConfig) -> Result<Self, TelephonyError> {
        Ok(Self {
            client: WebSprixClient::new(config)?,
        })
    }

    /// Create an integration reusing an existing HTTP connection pool
    pub fn with_http(config: WebSprixConfig, http: reqwest::Client) -> Self {
        Self {
            client: WebSprixClient::with_http(config, http),
        }
    }

    /// Access to the PBX-specific endpoints not covered by the trait
    pub fn client(&self) -> &WebSprixClient {
        &self.client
    }
}

#[async_trait]
impl TelephonyProvider for WebSprixIntegration {
    fn medium(&self) -> Medium {
        Medium::WebSprix
    }

    async fn verify_credentials(&self) -> Result<(), TelephonyError> {
        self.client.verify_account().await
    }

    async fn place_call(
        &self,
        from: &str,
        to: &str,
        _status_callback: &str,
    ) -> Result<PlacedCall, TelephonyError> {
        // The PBX delivers status events to the webhook configured on the
        // organization, not per call.
        self.client.create_call(from, to).await
    }

    fn parse_webhook(&self, form: &HashMap<String, String>) -> CallEvent {
        webhook::parse_webhook(form)
    }
}
