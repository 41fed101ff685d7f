//! TelephonyProvider implementation for Plivo

use std::collections::HashMap;

use async_trait::async_trait;
use dialtone::domain::entities::CallEvent;
use dialtone::domain::errors::TelephonyError;
use dialtone::domain::value_objects::Medium;
use dialtone::ports::provider::{PlacedCall, TelephonyProvider};

use crate::client::PlivoClient;
use crate::config::PlivoConfig;
use crate::webhook;

/// Plivo integration implementing the TelephonyProvider trait
pub struct PlivoIntegration {
    client: PlivoClient,
}

impl PlivoIntegration {
    /// Create a new Plivo integration
    pub fn new(config: PlivoConfig) -> Result<Self, TelephonyError> {
        Ok(Self {
            client: PlivoClient::new(config)?,
        })
    }

    /// Create an integration reusing an existing HTTP connection pool
    pub fn with_http(config: PlivoConfig, http: reqwest::Client) -> Self {
        Self {
            client: PlivoClient::with_http(config, http),
        }
    }
}

#[async_trait]
impl TelephonyProvider for PlivoIntegration {
    fn medium(&self) -> Medium {
        Medium::Plivo
    }

    async fn verify_credentials(&self) -> Result<(), TelephonyError> {
        self.client.verify_account().await
    }

    async fn place_call(
        &self,
        from: &str,
        to: &str,
        status_callback: &str,
    ) -> Result<PlacedCall, TelephonyError> {
        self.client.create_call(from, to, status_callback).await
    }

    fn parse_webhook(&self, form: &HashMap<String, String>) -> CallEvent {
        webhook::parse_webhook(form)
    }
}
